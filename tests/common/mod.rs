#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use schoolhub::router::init_router;
use schoolhub::state::AppState;
use schoolhub_auth::{AppMetadata, Claims};
use schoolhub_config::{CorsConfig, JwtConfig, RemoteConfig};
use schoolhub_models::{PushMessage, PushTicket};
use schoolhub_push::{PushError, PushGateway};
use schoolhub_remote::RemoteClient;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

pub const JWT_SECRET: &str = "test-secret";
pub const ANON_KEY: &str = "anon-key";

/// Push gateway fake that counts calls and replies with scripted tickets.
pub struct CountingGateway {
    calls: AtomicUsize,
    reply: Box<dyn Fn(&[PushMessage]) -> Result<Vec<PushTicket>, PushError> + Send + Sync>,
}

impl CountingGateway {
    pub fn new(
        reply: impl Fn(&[PushMessage]) -> Result<Vec<PushTicket>, PushError> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            reply: Box::new(reply),
        })
    }

    /// Accepts every message.
    pub fn accepting() -> Arc<Self> {
        Self::new(|messages| Ok(messages.iter().map(|_| PushTicket::Ok { id: None }).collect()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PushGateway for CountingGateway {
    async fn send(&self, messages: &[PushMessage]) -> Result<Vec<PushTicket>, PushError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.reply)(messages)
    }
}

pub fn test_state(remote_uri: &str, gateway: Arc<dyn PushGateway>) -> AppState {
    AppState {
        remote: RemoteClient::new(RemoteConfig::new(remote_uri, ANON_KEY)),
        gateway,
        jwt_config: JwtConfig {
            secret: Some(JWT_SECRET.to_string()),
            audience: "authenticated".to_string(),
        },
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:8081".to_string()],
        },
    }
}

pub fn test_app(remote_uri: &str, gateway: Arc<dyn PushGateway>) -> Router {
    init_router(test_state(remote_uri, gateway))
}

/// Signs an access token the way the remote auth service would.
pub fn mint_token(user_id: Uuid, role: Option<&str>) -> String {
    let claims = Claims {
        sub: user_id.to_string(),
        email: Some(format!("{}@school.test", role.unwrap_or("nobody"))),
        role: Some("authenticated".to_string()),
        aud: "authenticated".to_string(),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        iat: Some(chrono::Utc::now().timestamp() as usize),
        app_metadata: AppMetadata {
            role: role.map(str::to_string),
            provider: Some("email".to_string()),
        },
        user_metadata: serde_json::json!({"name": "Test User"}),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
