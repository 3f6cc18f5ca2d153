use thiserror::Error;

/// Errors returned by a completion provider.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service rejected the API key (HTTP 400 `API_KEY_INVALID`, 401, 403).
    #[error("authentication failed: {0}")]
    Unauthorized(String),

    /// HTTP 404 for the model endpoint.
    #[error("model not found: {model}")]
    ModelNotFound { model: String },

    #[error("rate limited by completion service: {0}")]
    RateLimited(String),

    /// Any other non-2xx reply, carrying the service's error message when present.
    #[error("completion service returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl CompletionError {
    /// `true` when the configured model name does not exist upstream.
    #[must_use]
    pub fn is_model_not_found(&self) -> bool {
        matches!(self, CompletionError::ModelNotFound { .. })
    }
}
