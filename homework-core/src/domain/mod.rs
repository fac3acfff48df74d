//! Core domain types
//!
//! Submissions as reported by the review API, and the validated shape of a
//! single status query.

pub mod response;
pub mod submission;

pub use response::QueryResponse;
pub use submission::{HomeworkStatus, SubmissionRecord};
