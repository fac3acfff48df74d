//! Response validation
//!
//! Enforces the shape of a status query payload before anything reads it:
//!
//! ```text
//! { "homeworks": [ { "homework_name": ..., "status": ... }, ... ], "current_date": 1700000000 }
//! ```
//!
//! Both keys are optional. A missing `homeworks` means nothing changed, a
//! missing `current_date` means the cursor stays where it is. A key that is
//! present with the wrong type is always an error; that includes a
//! fractional `current_date` such as `1000.0`.

use serde_json::Value as JsonValue;

use crate::domain::QueryResponse;
use crate::error::ValidationError;

/// Validates a decoded payload and extracts its submissions and cursor
pub fn validate_response(payload: JsonValue) -> Result<QueryResponse, ValidationError> {
    let mut fields = match payload {
        JsonValue::Object(fields) => fields,
        other => {
            return Err(ValidationError::Schema(format!(
                "expected a JSON object at the top level, got {}",
                type_name(&other)
            )));
        }
    };

    let homeworks = match fields.remove("homeworks") {
        None => Vec::new(),
        Some(JsonValue::Array(items)) => items,
        Some(other) => {
            return Err(ValidationError::Schema(format!(
                "'homeworks' must be an array, got {}",
                type_name(&other)
            )));
        }
    };

    let current_date = match fields.get("current_date") {
        None | Some(JsonValue::Null) => None,
        Some(value) => Some(value.as_i64().ok_or_else(|| {
            ValidationError::Schema(format!(
                "'current_date' must be an integer timestamp, got {}",
                value
            ))
        })?),
    };

    Ok(QueryResponse {
        homeworks,
        current_date,
    })
}

fn type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_response_valid() {
        let response = validate_response(json!({
            "homeworks": [
                {"homework_name": "a", "status": "approved"},
                {"homework_name": "b", "status": "reviewing"}
            ],
            "current_date": 1000
        }))
        .unwrap();

        assert_eq!(response.homeworks.len(), 2);
        assert_eq!(response.homeworks[0]["homework_name"], "a");
        assert_eq!(response.current_date, Some(1000));
    }

    #[test]
    fn test_validate_response_empty_homeworks() {
        let response = validate_response(json!({"homeworks": [], "current_date": 42})).unwrap();
        assert!(response.homeworks.is_empty());
        assert_eq!(response.next_cursor(7), 42);
    }

    #[test]
    fn test_validate_response_missing_keys() {
        let response = validate_response(json!({})).unwrap();
        assert!(response.homeworks.is_empty());
        assert_eq!(response.current_date, None);
        assert_eq!(response.next_cursor(7), 7);
    }

    #[test]
    fn test_validate_response_top_level_array() {
        let result = validate_response(json!([{"homework_name": "a", "status": "approved"}]));
        assert!(matches!(result, Err(ValidationError::Schema(_))));
    }

    #[test]
    fn test_validate_response_homeworks_not_array() {
        for homeworks in [json!({"homework_name": "a"}), json!("a"), json!(3)] {
            let result = validate_response(json!({ "homeworks": homeworks }));
            assert!(matches!(result, Err(ValidationError::Schema(_))));
        }
    }

    #[test]
    fn test_validate_response_bad_current_date() {
        for current_date in [json!("yesterday"), json!(1000.0), json!(1000.5), json!([1000])] {
            let result = validate_response(json!({"homeworks": [], "current_date": current_date}));
            assert!(matches!(result, Err(ValidationError::Schema(_))));
        }
    }

    #[test]
    fn test_validate_response_null_current_date() {
        let response = validate_response(json!({"homeworks": [], "current_date": null})).unwrap();
        assert_eq!(response.current_date, None);
    }
}
