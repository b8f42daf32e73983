use crate::non_empty_var;

/// Verification settings for access tokens minted by the remote auth service.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// Shared HS256 secret of the hosted project. `None` rejects every token.
    pub secret: Option<String>,
    pub audience: String,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: non_empty_var("SUPABASE_JWT_SECRET"),
            audience: non_empty_var("JWT_AUDIENCE").unwrap_or_else(|| "authenticated".to_string()),
        }
    }
}
