//! Homework Core
//!
//! Core types and decision logic for the homework status poller.
//!
//! This crate contains:
//! - Domain types: submissions, their review status and the validated query response
//! - Validation: shape checks on the raw payload returned by the review API
//! - Status interpretation: turning a submission into notification text
//!
//! Nothing in here performs I/O; the client and runner crates own that.

pub mod domain;
pub mod error;
pub mod status;
pub mod validate;

pub use domain::{HomeworkStatus, QueryResponse, SubmissionRecord};
pub use error::{StatusError, ValidationError};
pub use status::parse_status;
pub use validate::validate_response;
