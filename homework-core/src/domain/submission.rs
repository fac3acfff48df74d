//! Submission domain model
//!
//! A single homework submission and the review status attached to it.

use std::str::FromStr;

/// One homework submission with its current review status
///
/// Built from a raw API record by [`crate::status::parse_record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    /// Name of the submitted homework (`homework_name` on the wire), never empty
    pub name: String,

    /// Current review status
    pub status: HomeworkStatus,
}

/// Review status of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    /// Reviewer accepted the work
    Approved,

    /// Work is being reviewed
    Reviewing,

    /// Reviewer asked for changes
    Rejected,
}

impl HomeworkStatus {
    /// All statuses the review API is known to report
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    /// Wire value used by the review API
    pub fn as_str(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Human-readable verdict shown to the user
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "The work has been reviewed: the reviewer liked everything. Hooray!",
            HomeworkStatus::Reviewing => "The work has been taken up for review.",
            HomeworkStatus::Rejected => "The work has been reviewed: the reviewer has some remarks.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}
