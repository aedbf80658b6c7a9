//! Request capability
//!
//! The routine never talks HTTP itself. Whatever owns authentication,
//! paging and retries implements [`RecordSource`] and hands back the parsed
//! response body.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{BackupError, BackupResultT};

/// Fetches the parsed JSON body for an endpoint
///
/// The body is expected to be an object whose `value` key holds the full,
/// already de-paginated list of records.
pub trait RecordSource {
    fn fetch(&self, endpoint: &str) -> BackupResultT<Value>;
}

impl<F> RecordSource for F
where
    F: Fn(&str) -> BackupResultT<Value>,
{
    fn fetch(&self, endpoint: &str) -> BackupResultT<Value> {
        self(endpoint)
    }
}

/// In-memory responses keyed by endpoint
///
/// Unknown endpoints fail with a fetch error, the same way a 404 would.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    responses: HashMap<String, Value>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the response body for an endpoint
    pub fn with_response(mut self, endpoint: impl Into<String>, body: Value) -> Self {
        self.responses.insert(endpoint.into(), body);
        self
    }
}

impl RecordSource for StaticSource {
    fn fetch(&self, endpoint: &str) -> BackupResultT<Value> {
        self.responses
            .get(endpoint)
            .cloned()
            .ok_or_else(|| BackupError::fetch(endpoint, "No response registered"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_static_source() {
        let source = StaticSource::new().with_response("https://x/a", json!({"value": []}));

        assert_eq!(source.fetch("https://x/a").unwrap(), json!({"value": []}));
        assert!(source.fetch("https://x/b").unwrap_err().is_fetch());
    }

    #[test]
    fn test_closure_source() {
        let source = |endpoint: &str| -> BackupResultT<Value> {
            Ok(json!({"value": [{"displayName": endpoint}]}))
        };

        let body = source.fetch("https://x/a").unwrap();
        assert_eq!(body["value"][0]["displayName"], "https://x/a");
    }
}
