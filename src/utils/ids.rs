//! Parsing of resource identifiers taken from request paths.

use crate::error::AppError;
use serde_json::json;

/// Parses an opaque path segment into a positive storage id.
///
/// `resource` names the entity in the error details (e.g. `"driver"`).
///
/// # Errors
///
/// Returns [`AppError::Validation`] if `raw` is not a positive integer.
pub fn parse_id(raw: &str, resource: &'static str) -> Result<i64, AppError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::bad_request(
            format!("Invalid {resource} id"),
            json!({ "id": raw, "hint": "expected a positive integer" }),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_positive_integers() {
        assert_eq!(parse_id("42", "driver"), Ok(42));
        assert_eq!(parse_id(" 7 ", "notification"), Ok(7));
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        for raw in ["", "0", "-3", "abc", "4.2", "99999999999999999999"] {
            let err = parse_id(raw, "driver").unwrap_err();
            assert!(matches!(err, AppError::Validation { .. }), "{raw}");
        }
    }

    #[test]
    fn test_parse_id_error_names_resource() {
        let err = parse_id("x", "notification").unwrap_err();
        assert_eq!(err.message(), "Invalid notification id");
    }
}
