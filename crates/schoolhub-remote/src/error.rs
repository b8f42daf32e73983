use schoolhub_core::AppError;
use serde_json::Value;

/// Error type for remote query and auth calls.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("{0} is not configured")]
    MissingConfig(&'static str),

    #[error("Remote request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response. `message` is the upstream text, unmodified.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{0} not found")]
    NotFound(String),
}

impl RemoteError {
    /// Builds an [`RemoteError::Api`] from a failed response body.
    ///
    /// The message is taken from the first string field among `message`,
    /// `error_description`, `msg` and `error`, falling back to the raw body.
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| {
                ["message", "error_description", "msg", "error"]
                    .iter()
                    .find_map(|key| value.get(key).and_then(Value::as_str).map(str::to_string))
            })
            .unwrap_or_else(|| body.to_string());

        RemoteError::Api { status, message }
    }
}

impl From<RemoteError> for AppError {
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::Api { status, message } => AppError::upstream(status, message),
            RemoteError::NotFound(_) => AppError::not_found(err),
            RemoteError::MissingConfig(_) => AppError::internal(err),
            RemoteError::Http(_) => AppError::upstream(502, err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_message_from_postgrest_body() {
        let err = RemoteError::from_body(
            409,
            r#"{"code":"23505","message":"duplicate key value violates unique constraint","details":null}"#,
        );
        assert_eq!(err.to_string(), "duplicate key value violates unique constraint");
    }

    #[test]
    fn test_message_from_auth_body() {
        let err = RemoteError::from_body(
            400,
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );
        assert_eq!(err.to_string(), "Invalid login credentials");
    }

    #[test]
    fn test_raw_body_fallback() {
        let err = RemoteError::from_body(503, "upstream connect error");
        assert_eq!(err.to_string(), "upstream connect error");
    }

    #[test]
    fn test_app_error_keeps_status_and_message() {
        let app: AppError = RemoteError::from_body(403, r#"{"message":"permission denied for table exams"}"#).into();
        assert_eq!(app.status, StatusCode::FORBIDDEN);
        assert_eq!(app.message(), "permission denied for table exams");

        let app: AppError = RemoteError::NotFound("lectures".into()).into();
        assert_eq!(app.status, StatusCode::NOT_FOUND);
    }
}
