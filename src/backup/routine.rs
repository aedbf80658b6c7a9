//! Backup routine
//!
//! One linear pass per category: fetch, filter, strip, name, write.
//! The first fatal error ends the run; files already written stay on disk.

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::category::{Category, MissingNamePolicy, SerializationPolicy};
use super::source::RecordSource;
use crate::config::BackupPaths;
use crate::error::{BackupError, BackupResultT};
use crate::models::{record_id, BackupResult, OutputFormat, Record};
use crate::storage::{FileSink, RecordSink};
use crate::transform::sanitize_filename;

/// Runs the backup of a single category
#[derive(Debug, Clone)]
pub struct BackupRoutine {
    category: Category,
}

impl BackupRoutine {
    pub fn new(category: Category) -> Self {
        Self { category }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Folder this routine writes into under `root`
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        BackupPaths::new(root).category_dir(&self.category)
    }

    /// Back up every record the source returns for this category
    pub fn run(
        &self,
        root: &Path,
        format: OutputFormat,
        source: &dyn RecordSource,
    ) -> BackupResultT<BackupResult> {
        self.run_with_sink(root, format, source, &FileSink)
    }

    /// Same as [`run`](Self::run), storing records through `sink`
    pub fn run_with_sink(
        &self,
        root: &Path,
        format: OutputFormat,
        source: &dyn RecordSource,
        sink: &dyn RecordSink,
    ) -> BackupResultT<BackupResult> {
        let category = &self.category;
        let body = source.fetch(&category.endpoint)?;
        let records = extract_records(&category.endpoint, body)?;
        let dir = self.output_dir(root);

        tracing::debug!(
            category = %category.name,
            fetched = records.len(),
            "fetched records"
        );

        let mut result = BackupResult::new();

        for record in records {
            if category.should_skip(&record) {
                tracing::debug!(
                    category = %category.name,
                    record = %record_id(&record),
                    "record excluded by filter"
                );
                continue;
            }

            let Some(name) = self.resolve_name(&record)? else {
                continue;
            };

            let stripped = category.stripper.strip(&record);
            let stem = sanitize_filename(&name);

            tracing::info!(category = %category.name, record_name = %name, "backing up record");

            match sink.write(&dir, &stem, &stripped, format) {
                Ok(_) => result.push(stem),
                Err(err)
                    if err.is_serialization()
                        && category.on_serialize_error == SerializationPolicy::Skip =>
                {
                    tracing::warn!(
                        category = %category.name,
                        record = %record_id(&record),
                        error = %err,
                        "skipping record that could not be serialized"
                    );
                }
                Err(err) => return Err(err),
            }
        }

        tracing::info!(
            category = %category.name,
            count = result.config_count,
            dir = %dir.display(),
            "category backed up"
        );

        Ok(result)
    }

    /// Name for a record, or `None` when the record is to be skipped
    fn resolve_name(&self, record: &Record) -> BackupResultT<Option<String>> {
        let category = &self.category;
        if let Some(name) = category.record_name(record) {
            return Ok(Some(name));
        }

        match &category.missing_name {
            MissingNamePolicy::Skip => {
                tracing::warn!(
                    category = %category.name,
                    record = %record_id(record),
                    field = %category.name_field,
                    "record has no name, skipping"
                );
                Ok(None)
            }
            MissingNamePolicy::Fallback(name) => Ok(Some(name.clone())),
            MissingNamePolicy::Fail => Err(BackupError::MissingField {
                category: category.name.clone(),
                field: category.name_field.clone(),
                record: record_id(record),
            }),
        }
    }
}

/// Pull the record list out of a response body
fn extract_records(endpoint: &str, body: Value) -> BackupResultT<Vec<Record>> {
    let Value::Object(mut body) = body else {
        return Err(BackupError::invalid_response(
            endpoint,
            "Response body is not an object",
        ));
    };

    let Some(Value::Array(items)) = body.remove("value") else {
        return Err(BackupError::invalid_response(
            endpoint,
            "Response has no 'value' array",
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            _ => Err(BackupError::invalid_response(
                endpoint,
                format!("Entry {} in 'value' is not an object", index),
            )),
        })
        .collect()
}
