//! Error types for submit requests.
//!
//! Every failed submit is classified into exactly one variant, and each
//! variant maps to one user-visible message.

use thiserror::Error;

/// Shown when the service rejected the request without a usable detail.
pub const GENERIC_SERVER_MESSAGE: &str = "The summarization service reported an error.";

/// Shown when the service never answered.
pub const NETWORK_MESSAGE: &str =
    "Could not reach the summarization service. Check your connection and try again.";

/// Shown for failures that are neither a server response nor a transport error.
pub const UNEXPECTED_MESSAGE: &str = "Something went wrong. Please try again.";

/// Shown when the user submits blank input.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text to summarize.";

/// Errors that can occur during a submit cycle.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Input was blank after trimming; nothing was sent.
    #[error("input is empty")]
    EmptyInput,

    /// The service answered with a non-success status.
    #[error("server error ({status}): {detail}")]
    Server { status: u16, detail: String },

    /// The request was sent but no response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// Anything else: request construction, malformed response body.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl SubmitError {
    /// User-facing message for display. One distinct message per variant;
    /// server errors carry the detail extracted from the response body.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::EmptyInput => EMPTY_INPUT_MESSAGE.to_string(),
            SubmitError::Server { detail, .. } => detail.clone(),
            SubmitError::Network(_) => NETWORK_MESSAGE.to_string(),
            SubmitError::Unexpected(_) => UNEXPECTED_MESSAGE.to_string(),
        }
    }
}

/// Extract a human-readable detail from an error response body.
///
/// Ordered fallback chain: a `detail` field, then an `error` field, then
/// [`GENERIC_SERVER_MESSAGE`]. Non-JSON bodies fall through to the generic
/// message as well.
pub fn extract_error_detail(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return GENERIC_SERVER_MESSAGE.to_string();
    };

    for key in ["detail", "error"] {
        if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
            if !text.trim().is_empty() {
                return text.to_string();
            }
        }
    }

    GENERIC_SERVER_MESSAGE.to_string()
}
