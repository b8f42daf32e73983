use schoolhub_core::AppError;
use schoolhub_models::{AuthState, Section};
use schoolhub_remote::RemoteClient;
use tracing::{info, instrument, warn};

use crate::modules::auth::service::AuthService;
use crate::navigation::NavigationGate;
use crate::session::store::SessionStore;

/// A viewer's client: session store, navigation gate and remote access.
///
/// Each mutating call updates the store first, then re-evaluates the gate and
/// returns the redirect it produced, if any.
#[derive(Debug, Clone)]
pub struct SchoolClient {
    remote: RemoteClient,
    store: SessionStore,
    gate: NavigationGate,
}

impl SchoolClient {
    pub fn new(remote: RemoteClient) -> Self {
        Self {
            remote,
            store: SessionStore::new(),
            gate: NavigationGate::new(Section::Login),
        }
    }

    pub fn state(&self) -> &AuthState {
        self.store.snapshot()
    }

    pub fn section(&self) -> Section {
        self.gate.current()
    }

    /// Remote client acting as the signed-in user, or anonymously.
    pub fn remote(&self) -> RemoteClient {
        match self.store.access_token() {
            Some(token) => self.remote.as_user(token),
            None => self.remote.clone(),
        }
    }

    /// Resolves the session from a stored access token.
    ///
    /// A token the auth service no longer accepts resolves to signed out. Any
    /// other failure also ends resolution signed out before it is returned.
    #[instrument(skip_all)]
    pub async fn start(&mut self, stored_token: Option<String>) -> Result<Option<Section>, AppError> {
        let session = match stored_token {
            Some(token) => match AuthService::restore(&self.remote, &token).await {
                Ok(identity) => identity.map(|identity| (identity, token)),
                Err(e) => {
                    warn!(error = %e, "Session restore failed");
                    self.store.resolve(None);
                    self.gate.evaluate(self.store.snapshot());
                    return Err(e);
                }
            },
            None => None,
        };

        if session.is_none() {
            info!("No session to restore");
        }

        self.store.resolve(session);
        Ok(self.gate.evaluate(self.store.snapshot()))
    }

    #[instrument(skip(self, password))]
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Option<Section>, AppError> {
        let (session, identity) = AuthService::sign_in(&self.remote, email, password).await?;
        self.store.sign_in(identity, session.access_token);
        Ok(self.gate.evaluate(self.store.snapshot()))
    }

    /// Signs out locally, then revokes the token remotely.
    ///
    /// A failed revoke is logged; the viewer is signed out either way.
    #[instrument(skip_all)]
    pub async fn logout(&mut self) -> Option<Section> {
        let token = self.store.clear();
        let redirect = self.gate.evaluate(self.store.snapshot());

        if let Some(token) = token {
            if let Err(e) = AuthService::logout(&self.remote, &token).await {
                warn!(error = %e, "Remote sign-out failed");
            }
        }

        redirect
    }

    pub fn navigate(&mut self, section: Section) -> Option<Section> {
        self.gate.navigate(section, self.store.snapshot())
    }
}
