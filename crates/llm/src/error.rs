//! Errors from the chat-completion layer.

use profiler_core::run::FailureKind;

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Chat API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response carried no choices or no message content.
    #[error("Chat API returned no completion content")]
    EmptyResponse,

    /// The response body could not be decoded.
    #[error("Failed to decode chat API response: {0}")]
    Decode(String),
}

impl LlmError {
    /// Whether the failure originated at the external API (as opposed to
    /// our handling of its response).
    pub fn is_api_error(&self) -> bool {
        matches!(self, LlmError::Request(_) | LlmError::Api { .. })
    }

    /// Classification used when rendering a failed run case.
    pub fn failure_kind(&self) -> FailureKind {
        if self.is_api_error() {
            FailureKind::ExternalApi
        } else {
            FailureKind::Internal
        }
    }
}
