//! Validated status query response

use serde_json::Value as JsonValue;

/// Payload of one status query after shape validation
///
/// Submissions stay as raw JSON records: each one is checked field by field
/// when it is interpreted, so a malformed record fails on its own terms
/// instead of failing the whole response.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResponse {
    /// Submissions whose status changed inside the query window, newest first
    pub homeworks: Vec<JsonValue>,

    /// Server time to use as the lower bound of the next query
    pub current_date: Option<i64>,
}

impl QueryResponse {
    /// Most recent submission, if any
    pub fn latest(&self) -> Option<&JsonValue> {
        self.homeworks.first()
    }

    /// Cursor for the next query, keeping `previous` when the server sent none
    pub fn next_cursor(&self, previous: i64) -> i64 {
        self.current_date.unwrap_or(previous)
    }
}
