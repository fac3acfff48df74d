//! Error types for the homework clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when calling the review API or the bot API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request never produced a response (connect, TLS, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// API answered with a non-success status code
    #[error("Unexpected response status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body, truncated
        message: String,
    },

    /// Response body is not valid JSON
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Create an unexpected-status error from status code and body
    pub fn unexpected_status(status: u16, message: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            message: message.into(),
        }
    }

    /// Stable name of the error kind, used to compare failures across cycles
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "TransportError",
            Self::UnexpectedStatus { .. } => "UnexpectedStatusError",
            Self::Decode(_) => "DecodeError",
        }
    }

    /// Check if the request was rejected as malformed (400)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { status: 400, .. })
    }
}
