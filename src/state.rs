use std::sync::Arc;

use schoolhub_config::{CorsConfig, JwtConfig, PushConfig, RemoteConfig};
use schoolhub_push::{ExpoGateway, PushGateway};
use schoolhub_remote::RemoteClient;

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    pub remote: RemoteClient,
    pub gateway: Arc<dyn PushGateway>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("remote", &self.remote)
            .field("jwt_config", &self.jwt_config)
            .field("cors_config", &self.cors_config)
            .finish_non_exhaustive()
    }
}

pub fn init_app_state() -> AppState {
    AppState {
        remote: RemoteClient::new(RemoteConfig::from_env()),
        gateway: Arc::new(ExpoGateway::new(PushConfig::from_env())),
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
