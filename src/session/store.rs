use schoolhub_models::{AuthState, Identity};

/// Owner of a viewer's session.
///
/// Created in the loading state when the app starts; [`resolve`](Self::resolve)
/// ends the initial check, [`sign_in`](Self::sign_in) and
/// [`clear`](Self::clear) bracket each login. Every update replaces the whole
/// snapshot, so readers never see a half-applied change.
#[derive(Debug, Clone)]
pub struct SessionStore {
    state: AuthState,
    access_token: Option<String>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: AuthState::loading(),
            access_token: None,
        }
    }

    pub fn snapshot(&self) -> &AuthState {
        &self.state
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Completes the initial session check.
    pub fn resolve(&mut self, session: Option<(Identity, String)>) {
        *self = match session {
            Some((identity, token)) => Self {
                state: AuthState::signed_in(identity),
                access_token: Some(token),
            },
            None => Self {
                state: AuthState::signed_out(),
                access_token: None,
            },
        };
    }

    pub fn sign_in(&mut self, identity: Identity, access_token: String) {
        self.resolve(Some((identity, access_token)));
    }

    /// Drops the session, returning the token it held.
    pub fn clear(&mut self) -> Option<String> {
        let token = self.access_token.take();
        self.resolve(None);
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schoolhub_models::Role;
    use uuid::Uuid;

    fn identity() -> Identity {
        Identity::new(Uuid::new_v4(), "a@school.test", "A", Some(Role::Admin))
    }

    fn consistent(store: &SessionStore) -> bool {
        let state = store.snapshot();
        state.is_authenticated() == state.user().is_some()
            && state.is_authenticated() == store.access_token().is_some()
    }

    #[test]
    fn test_starts_loading() {
        let store = SessionStore::new();
        assert!(store.snapshot().is_loading());
        assert!(consistent(&store));
    }

    #[test]
    fn test_every_transition_keeps_state_consistent() {
        let mut store = SessionStore::new();

        store.resolve(None);
        assert!(!store.snapshot().is_loading());
        assert!(consistent(&store));

        store.sign_in(identity(), "token".into());
        assert!(store.snapshot().is_authenticated());
        assert!(consistent(&store));

        assert_eq!(store.clear().as_deref(), Some("token"));
        assert!(!store.snapshot().is_authenticated());
        assert!(!store.snapshot().is_loading());
        assert!(consistent(&store));
    }

    #[test]
    fn test_resolve_with_stored_session() {
        let mut store = SessionStore::new();
        store.resolve(Some((identity(), "stored".into())));
        assert_eq!(store.snapshot().role(), Some(Role::Admin));
        assert_eq!(store.access_token(), Some("stored"));
    }
}
