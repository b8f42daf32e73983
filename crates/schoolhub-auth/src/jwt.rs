use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use schoolhub_config::JwtConfig;
use schoolhub_core::AppError;

use crate::claims::Claims;

/// Verifies an access token and returns its claims.
///
/// Fails with 401 for a bad signature, an expired token or a foreign audience.
/// A server without a configured secret fails every token with 500.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let secret = jwt_config.secret.as_deref().ok_or_else(|| {
        AppError::internal(anyhow::anyhow!("SUPABASE_JWT_SECRET is not configured"))
    })?;

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&[jwt_config.audience.as_str()]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::unauthorized(format!("Invalid or expired token: {}", e)))
}
