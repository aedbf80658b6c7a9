//! Record model
//!
//! A record is one remote configuration object. Field sets vary per category
//! and per tenant, so it is kept as an ordered JSON object.

use serde_json::{Map, Value};

/// One configuration object, keys kept in the order the API returned them
pub type Record = Map<String, Value>;

/// Best-effort identifier for log and error messages
///
/// Uses the `id` field when present, otherwise `<unknown>`.
pub fn record_id(record: &Record) -> String {
    match record.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "<unknown>".to_string(),
        Some(other) => other.to_string(),
    }
}

/// Read a top-level field as display text
///
/// Strings are returned as-is, numbers and bools in their display form.
/// Empty strings, nulls and structured values yield `None`.
pub fn field_text(record: &Record, field: &str) -> Option<String> {
    match record.get(field)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_record_id() {
        assert_eq!(record_id(&record(json!({"id": "abc"}))), "abc");
        assert_eq!(record_id(&record(json!({"id": 7}))), "7");
        assert_eq!(record_id(&record(json!({"displayName": "x"}))), "<unknown>");
    }

    #[test]
    fn test_field_text() {
        let r = record(json!({
            "displayName": "Token A",
            "blank": "  ",
            "count": 3,
            "enabled": true,
            "nested": {"a": 1}
        }));

        assert_eq!(field_text(&r, "displayName").as_deref(), Some("Token A"));
        assert_eq!(field_text(&r, "count").as_deref(), Some("3"));
        assert_eq!(field_text(&r, "enabled").as_deref(), Some("true"));
        assert_eq!(field_text(&r, "blank"), None);
        assert_eq!(field_text(&r, "nested"), None);
        assert_eq!(field_text(&r, "missing"), None);
    }
}
