//! Status interpretation
//!
//! Turns a raw submission record into the notification text sent to the
//! user. Unknown statuses are rejected rather than skipped: a new status
//! value usually means the API changed under us.

use serde_json::Value as JsonValue;

use crate::domain::{HomeworkStatus, SubmissionRecord};
use crate::error::StatusError;

/// Interprets the given record as a notification message
///
/// Returns `Ok(None)` when there is no record to report (absent, `null`
/// or an empty object).
pub fn parse_status(record: Option<&JsonValue>) -> Result<Option<String>, StatusError> {
    let Some(record) = record.filter(|r| !is_blank(r)) else {
        return Ok(None);
    };

    let record = parse_record(record)?;
    Ok(Some(status_message(&record)))
}

/// Extracts a typed submission from a raw record
///
/// The name is checked before the status, so a record missing both
/// reports the missing name.
pub fn parse_record(record: &JsonValue) -> Result<SubmissionRecord, StatusError> {
    let name = record
        .get("homework_name")
        .and_then(JsonValue::as_str)
        .filter(|name| !name.is_empty())
        .ok_or(StatusError::MissingField("homework_name"))?;

    let status = record
        .get("status")
        .and_then(JsonValue::as_str)
        .ok_or(StatusError::MissingField("status"))?;

    let status = status
        .parse::<HomeworkStatus>()
        .map_err(StatusError::UnknownStatus)?;

    Ok(SubmissionRecord {
        name: name.to_string(),
        status,
    })
}

/// Formats the notification for a submission's current status
pub fn status_message(record: &SubmissionRecord) -> String {
    format!(
        "Status changed for submission \"{}\": {}",
        record.name,
        record.status.verdict()
    )
}

fn is_blank(record: &JsonValue) -> bool {
    match record {
        JsonValue::Null => true,
        JsonValue::Object(fields) => fields.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_response;
    use serde_json::json;

    #[test]
    fn test_parse_status_known_statuses() {
        for status in HomeworkStatus::ALL {
            let record = json!({"homework_name": "hw", "status": status.as_str()});
            let message = parse_status(Some(&record)).unwrap();
            assert_eq!(
                message,
                Some(format!(
                    "Status changed for submission \"hw\": {}",
                    status.verdict()
                ))
            );
        }
    }

    #[test]
    fn test_parse_status_unknown_status() {
        let record = json!({"homework_name": "hw", "status": "lost"});
        assert_eq!(
            parse_status(Some(&record)),
            Err(StatusError::UnknownStatus("lost".to_string()))
        );
    }

    #[test]
    fn test_parse_status_no_record() {
        assert_eq!(parse_status(None), Ok(None));
        assert_eq!(parse_status(Some(&json!(null))), Ok(None));
        assert_eq!(parse_status(Some(&json!({}))), Ok(None));
    }

    #[test]
    fn test_parse_status_missing_name_checked_first() {
        let record = json!({"status": "not-a-status"});
        assert_eq!(
            parse_status(Some(&record)),
            Err(StatusError::MissingField("homework_name"))
        );
    }

    #[test]
    fn test_parse_status_empty_or_non_string_name() {
        for name in [json!(""), json!(17), json!(null)] {
            let record = json!({"homework_name": name, "status": "approved"});
            assert_eq!(
                parse_status(Some(&record)),
                Err(StatusError::MissingField("homework_name"))
            );
        }
    }

    #[test]
    fn test_parse_record_reads_wire_fields() {
        let record = parse_record(&json!({
            "homework_name": "hw_bot",
            "status": "rejected",
            "reviewer_comment": "see notes"
        }))
        .unwrap();

        assert_eq!(
            record,
            SubmissionRecord {
                name: "hw_bot".to_string(),
                status: HomeworkStatus::Rejected,
            }
        );
    }

    #[test]
    fn test_parse_status_missing_status() {
        let record = json!({"homework_name": "hw"});
        assert_eq!(
            parse_status(Some(&record)),
            Err(StatusError::MissingField("status"))
        );
    }

    #[test]
    fn test_validated_payload_to_message() {
        let response = validate_response(json!({
            "homeworks": [
                {"homework_name": "X", "status": "approved"},
                {"homework_name": "Y", "status": "rejected"}
            ],
            "current_date": 1000
        }))
        .unwrap();

        let message = parse_status(response.latest()).unwrap();
        assert_eq!(
            message.as_deref(),
            Some(
                "Status changed for submission \"X\": The work has been reviewed: the reviewer liked everything. Hooray!"
            )
        );
        assert_eq!(response.next_cursor(0), 1000);
    }
}
