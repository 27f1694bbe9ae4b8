use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure taxonomy for gateway calls.
///
/// Errors propagate unchanged to the initiating flow; nothing is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure; no structured server message available.
    #[error("network error: {0}")]
    Network(String),

    /// Non-success response. `message` is the server's own wording when the
    /// body carried one, the raw body otherwise.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The response arrived but its body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a server error from a non-success response body, extracting
    /// the `message` field of the `{"error": ..., "message": ...}` shape
    /// when present.
    pub(crate) fn from_status_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .unwrap_or_else(|| body.to_string());

        ApiError::Server { status, message }
    }

    /// HTTP status for server-reported errors, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
