//! Key stripping
//!
//! Removes metadata that ties a record to one tenant (ids, timestamps,
//! OData bookkeeping) so the backup can be compared and restored elsewhere.

use crate::models::Record;

/// Top-level keys removed by default
///
/// `@odata.type` stays: restoring an object needs it.
pub const DEFAULT_DENYLIST: &[&str] = &[
    "id",
    "createdDateTime",
    "lastModifiedDateTime",
    "version",
    "@odata.context",
    "@odata.id",
    "@odata.editLink",
    "@odata.etag",
    "@odata.readLink",
    "@odata.count",
    "@odata.nextLink",
];

/// Removes a fixed set of top-level keys from records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStripper {
    keys: Vec<String>,
}

impl Default for KeyStripper {
    fn default() -> Self {
        Self::with_keys(DEFAULT_DENYLIST.iter().copied())
    }
}

impl KeyStripper {
    /// Create a stripper with a custom denylist
    pub fn with_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut stripper = Self { keys: Vec::new() };
        stripper.add_all(keys);
        stripper
    }

    /// Add keys to the denylist
    pub fn extend<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_all(keys);
        self
    }

    /// Remove keys from the denylist so they are kept in the output
    pub fn allow<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for key in keys {
            self.keys.retain(|k| k != key.as_ref());
        }
        self
    }

    /// The current denylist
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Return a copy of `record` without the denylisted keys
    ///
    /// The input is left untouched. Nested values are copied as they are.
    pub fn strip(&self, record: &Record) -> Record {
        record
            .iter()
            .filter(|(key, _)| !self.keys.iter().any(|k| k == *key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    fn add_all<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for key in keys {
            let key = key.into();
            if !self.keys.contains(&key) {
                self.keys.push(key);
            }
        }
    }
}

/// Strip the default denylist from a record
pub fn strip_keys(record: &Record) -> Record {
    KeyStripper::default().strip(record)
}
