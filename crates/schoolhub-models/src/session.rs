//! Snapshot of the session store.

use serde::Serialize;
use utoipa::ToSchema;

use crate::identity::{Identity, Role};

/// Authentication state of a viewer.
///
/// Only the constructors can build a value, so `is_authenticated` always
/// equals `user.is_some()`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    user: Option<Identity>,
    is_loading: bool,
    is_authenticated: bool,
}

impl AuthState {
    /// Initial state while stored credentials are being checked.
    pub fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
            is_authenticated: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            is_loading: false,
            is_authenticated: false,
        }
    }

    pub fn signed_in(identity: Identity) -> Self {
        Self {
            user: Some(identity),
            is_loading: false,
            is_authenticated: true,
        }
    }

    /// Outcome of session resolution.
    pub fn resolved(identity: Option<Identity>) -> Self {
        match identity {
            Some(identity) => Self::signed_in(identity),
            None => Self::signed_out(),
        }
    }

    pub fn user(&self) -> Option<&Identity> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(|u| u.role)
    }
}
