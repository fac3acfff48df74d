//! Runner error types
//!
//! A poll cycle can fail in any of the layers below it. [`CycleError`]
//! gathers those failures so the poller can report them uniformly, and
//! [`ErrorSignature`] is the value it compares to avoid repeating an alert.

use homework_client::ClientError;
use homework_core::{StatusError, ValidationError};
use thiserror::Error;

/// Failure of a single poll cycle
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Api(#[from] ClientError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Status(#[from] StatusError),
}

impl CycleError {
    /// Stable name of the underlying error kind
    pub fn kind(&self) -> &'static str {
        match self {
            CycleError::Api(e) => e.kind(),
            CycleError::Validation(e) => e.kind(),
            CycleError::Status(e) => e.kind(),
        }
    }

    /// Comparable identity of this failure
    pub fn signature(&self) -> ErrorSignature {
        ErrorSignature {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

/// Identity of a reported failure, compared by value across cycles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSignature {
    pub kind: &'static str,
    pub message: String,
}

/// A notification could not be delivered
///
/// Never fatal: the poller logs it and keeps going.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Message rejected by the bot API: {0}")]
    BadRequest(String),

    #[error("Message delivery failed: {0}")]
    Failed(String),
}

impl From<ClientError> for DeliveryError {
    fn from(err: ClientError) -> Self {
        if err.is_bad_request() {
            DeliveryError::BadRequest(err.to_string())
        } else {
            DeliveryError::Failed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_uses_kind_and_message() {
        let err = CycleError::from(StatusError::UnknownStatus("lost".to_string()));
        let signature = err.signature();
        assert_eq!(signature.kind, "UnknownStatusError");
        assert_eq!(signature.message, "Unknown submission status 'lost'");
    }

    #[test]
    fn test_equal_failures_have_equal_signatures() {
        let a = CycleError::from(ClientError::unexpected_status(500, "oops"));
        let b = CycleError::from(ClientError::unexpected_status(500, "oops"));
        let c = CycleError::from(ClientError::unexpected_status(502, "oops"));
        assert_eq!(a.signature(), b.signature());
        assert_ne!(a.signature(), c.signature());
    }

    #[test]
    fn test_delivery_error_classification() {
        let bad = DeliveryError::from(ClientError::unexpected_status(400, "chat not found"));
        assert!(matches!(bad, DeliveryError::BadRequest(_)));

        let other = DeliveryError::from(ClientError::unexpected_status(429, "slow down"));
        assert!(matches!(other, DeliveryError::Failed(_)));
    }
}
