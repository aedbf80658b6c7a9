//! Category definitions
//!
//! A category is one configuration domain: where to read it from, which
//! folder it lands in, how records are named and which ones are left out.
//! Every category is plain data; there is no per-category code.

use serde_json::Value;

use crate::models::{field_text, Record};
use crate::transform::KeyStripper;

const GRAPH_BETA: &str = "https://graph.microsoft.com/beta";

/// Decides whether a fetched record is left out of the backup
#[derive(Debug, Clone, PartialEq)]
pub enum SkipPredicate {
    /// Skip when the top-level field equals the given value
    FieldEquals { field: String, value: Value },
}

impl SkipPredicate {
    pub fn field_equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::FieldEquals {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Returns true if the record should be skipped
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::FieldEquals { field, value } => record.get(field) == Some(value),
        }
    }
}

/// What to do with a record that has no usable name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MissingNamePolicy {
    /// Leave the record out and carry on
    Skip,
    /// Use a fixed name instead
    Fallback(String),
    /// Abort the run
    #[default]
    Fail,
}

/// What to do when a record cannot be encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SerializationPolicy {
    /// Abort the run
    #[default]
    Abort,
    /// Log a warning and carry on with the next record
    Skip,
}

/// One backup category
#[derive(Debug, Clone)]
pub struct Category {
    /// Short identifier used in settings and logs (e.g. "vpp-tokens")
    pub name: String,

    /// Endpoint handed to the record source
    pub endpoint: String,

    /// Output folder relative to the backup root, `/`-separated
    pub folder: String,

    /// Field holding the human-readable name
    pub name_field: String,

    /// Records matching this predicate are not written or counted
    pub skip: Option<SkipPredicate>,

    pub missing_name: MissingNamePolicy,

    pub on_serialize_error: SerializationPolicy,

    /// Keys removed before writing
    pub stripper: KeyStripper,
}

impl Category {
    /// Create a category with default naming, stripping and error policies
    pub fn new(
        name: impl Into<String>,
        endpoint: impl Into<String>,
        folder: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            folder: folder.into(),
            name_field: "displayName".to_string(),
            skip: None,
            missing_name: MissingNamePolicy::default(),
            on_serialize_error: SerializationPolicy::default(),
            stripper: KeyStripper::default(),
        }
    }

    pub fn with_name_field(mut self, field: impl Into<String>) -> Self {
        self.name_field = field.into();
        self
    }

    pub fn with_skip(mut self, predicate: SkipPredicate) -> Self {
        self.skip = Some(predicate);
        self
    }

    pub fn with_missing_name(mut self, policy: MissingNamePolicy) -> Self {
        self.missing_name = policy;
        self
    }

    pub fn with_serialization_policy(mut self, policy: SerializationPolicy) -> Self {
        self.on_serialize_error = policy;
        self
    }

    pub fn with_stripper(mut self, stripper: KeyStripper) -> Self {
        self.stripper = stripper;
        self
    }

    /// Returns true if the record is excluded from the backup
    pub fn should_skip(&self, record: &Record) -> bool {
        self.skip.as_ref().is_some_and(|p| p.matches(record))
    }

    /// Display name of a record, if the name field holds one
    pub fn record_name(&self, record: &Record) -> Option<String> {
        field_text(record, &self.name_field)
    }

    /// All built-in categories, in run order
    pub fn builtin() -> Vec<Category> {
        vec![
            Category::new(
                "vpp-tokens",
                format!("{}/deviceAppManagement/vppTokens", GRAPH_BETA),
                "Apple VPP Tokens",
            ),
            Category::new(
                "compliance-partner",
                format!("{}/deviceManagement/complianceManagementPartners", GRAPH_BETA),
                "Partner Connections/Compliance",
            )
            .with_skip(SkipPredicate::field_equals("partnerState", "unknown"))
            .with_missing_name(MissingNamePolicy::Skip),
            Category::new(
                "management-partner",
                format!("{}/deviceManagement/deviceManagementPartners", GRAPH_BETA),
                "Partner Connections/Management",
            )
            .with_skip(SkipPredicate::field_equals("partnerAppType", "unknown"))
            .with_missing_name(MissingNamePolicy::Skip),
            Category::new(
                "notification-templates",
                format!("{}/deviceManagement/notificationMessageTemplates", GRAPH_BETA),
                "Compliance Policies/Message Templates",
            )
            .with_skip(SkipPredicate::field_equals(
                "displayName",
                "EnrollmentNotificationInternalMEO",
            ))
            .with_missing_name(MissingNamePolicy::Skip),
        ]
    }

    /// Look up a built-in category by name
    pub fn find(name: &str) -> Option<Category> {
        Self::builtin().into_iter().find(|c| c.name == name)
    }

    /// Names of all built-in categories
    pub fn builtin_names() -> Vec<String> {
        Self::builtin().into_iter().map(|c| c.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_field_equals_predicate() {
        let predicate = SkipPredicate::field_equals("partnerState", "unknown");

        assert!(predicate.matches(&record(json!({"partnerState": "unknown"}))));
        assert!(!predicate.matches(&record(json!({"partnerState": "unavailable"}))));
        assert!(!predicate.matches(&record(json!({}))));
    }

    #[test]
    fn test_builtin_folders_are_disjoint() {
        let categories = Category::builtin();
        let folders: HashSet<_> = categories.iter().map(|c| c.folder.as_str()).collect();
        let names: HashSet<_> = categories.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(folders.len(), categories.len());
        assert_eq!(names.len(), categories.len());
    }

    #[test]
    fn test_find_builtin() {
        let vpp = Category::find("vpp-tokens").unwrap();
        assert_eq!(vpp.folder, "Apple VPP Tokens");
        assert_eq!(
            vpp.endpoint,
            "https://graph.microsoft.com/beta/deviceAppManagement/vppTokens"
        );
        assert!(vpp.skip.is_none());
        assert_eq!(vpp.missing_name, MissingNamePolicy::Fail);

        let partner = Category::find("compliance-partner").unwrap();
        assert_eq!(partner.folder, "Partner Connections/Compliance");
        assert!(partner.should_skip(&record(json!({"partnerState": "unknown"}))));

        assert!(Category::find("nope").is_none());
    }

    #[test]
    fn test_record_name_uses_name_field() {
        let category = Category::new("x", "https://x", "X").with_name_field("name");

        assert_eq!(
            category.record_name(&record(json!({"name": "Alpha", "displayName": "Beta"}))),
            Some("Alpha".to_string())
        );
        assert_eq!(category.record_name(&record(json!({"displayName": "Beta"}))), None);
    }
}
