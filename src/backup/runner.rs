//! Multi-category runner
//!
//! Runs every enabled category one after the other into the configured
//! root. Each category owns its folder, so runs never touch each other's
//! files.

use super::routine::BackupRoutine;
use super::source::RecordSource;
use crate::config::{BackupPaths, BackupSettings};
use crate::error::BackupResultT;
use crate::models::BackupSummary;

/// Runs the categories enabled in a [`BackupSettings`]
pub struct BackupRunner {
    settings: BackupSettings,
}

impl BackupRunner {
    pub fn new(settings: BackupSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &BackupSettings {
        &self.settings
    }

    /// Back up all enabled categories, stopping at the first error
    pub fn run(&self, source: &dyn RecordSource) -> BackupResultT<BackupSummary> {
        let categories = self.settings.enabled_categories()?;
        let paths = BackupPaths::new(&self.settings.root);
        paths.ensure_root()?;

        tracing::info!(
            root = %paths.root().display(),
            format = %self.settings.output_format,
            categories = categories.len(),
            "starting backup"
        );

        let mut summary = BackupSummary::default();
        for category in categories {
            let name = category.name.clone();
            let result = BackupRoutine::new(category).run(
                paths.root(),
                self.settings.output_format,
                source,
            )?;
            summary.add(name, result);
        }

        tracing::info!(total = summary.total(), "backup finished");

        Ok(summary)
    }
}
