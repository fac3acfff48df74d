//! Error types for payload validation and status interpretation

use thiserror::Error;

/// The response payload does not have the expected shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Unexpected response shape: {0}")]
    Schema(String),
}

impl ValidationError {
    /// Stable name of the error kind, used to compare failures across cycles
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::Schema(_) => "SchemaError",
        }
    }
}

/// A submission record cannot be turned into a notification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("Submission record is missing field '{0}'")]
    MissingField(&'static str),

    #[error("Unknown submission status '{0}'")]
    UnknownStatus(String),
}

impl StatusError {
    /// Stable name of the error kind, used to compare failures across cycles
    pub fn kind(&self) -> &'static str {
        match self {
            StatusError::MissingField(_) => "MissingFieldError",
            StatusError::UnknownStatus(_) => "UnknownStatusError",
        }
    }
}
