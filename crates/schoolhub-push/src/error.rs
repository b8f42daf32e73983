/// Error type for push gateway calls.
#[derive(Debug, thiserror::Error)]
pub enum PushError {
    #[error("EXPO_ACCESS_TOKEN is not configured")]
    MissingToken,

    #[error("Push gateway request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered but rejected the request or returned no tickets.
    #[error("{message}")]
    Gateway { status: Option<u16>, message: String },

    #[error("Invalid push gateway response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl PushError {
    pub fn gateway(status: Option<u16>, message: impl Into<String>) -> Self {
        PushError::Gateway {
            status,
            message: message.into(),
        }
    }
}
