//! Push gateway configuration.
//!
//! # Environment Variables
//!
//! - `EXPO_ACCESS_TOKEN`: bearer credential for the push gateway
//! - `EXPO_PUSH_URL`: send endpoint (default: `https://exp.host/--/api/v2/push/send`)

use crate::non_empty_var;

pub const DEFAULT_PUSH_URL: &str = "https://exp.host/--/api/v2/push/send";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PushConfig {
    pub endpoint: String,
    pub access_token: Option<String>,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_PUSH_URL.to_string(),
            access_token: None,
        }
    }
}

impl PushConfig {
    pub fn from_env() -> Self {
        Self {
            endpoint: non_empty_var("EXPO_PUSH_URL").unwrap_or_else(|| DEFAULT_PUSH_URL.to_string()),
            access_token: non_empty_var("EXPO_ACCESS_TOKEN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_public_gateway() {
        let config = PushConfig::default();
        assert_eq!(config.endpoint, DEFAULT_PUSH_URL);
        assert!(config.access_token.is_none());
    }
}
