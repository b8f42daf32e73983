//! Location and public key of the hosted database platform.
//!
//! # Environment Variables
//!
//! - `SUPABASE_URL`: project base URL, e.g. `https://xyzcompany.supabase.co`
//! - `SUPABASE_ANON_KEY`: public (anon) API key sent as `apikey`

use crate::non_empty_var;

#[derive(Clone, Debug, Default)]
pub struct RemoteConfig {
    pub url: Option<String>,
    pub anon_key: Option<String>,
}

impl RemoteConfig {
    pub fn from_env() -> Self {
        Self {
            url: non_empty_var("SUPABASE_URL"),
            anon_key: non_empty_var("SUPABASE_ANON_KEY"),
        }
    }

    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            anon_key: Some(anon_key.into()),
        }
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> Option<&str> {
        self.url.as_deref().map(|u| u.trim_end_matches('/'))
    }
}
