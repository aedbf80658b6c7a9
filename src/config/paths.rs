//! Path management for graph-backup
//!
//! Resolves where each category lands under a backup root:
//! `<root>/<category folder>`.

use std::path::{Path, PathBuf};

use crate::backup::Category;
use crate::error::{BackupError, BackupResultT};

/// Manages all paths below a backup root
#[derive(Debug, Clone)]
pub struct BackupPaths {
    /// Root directory of the backup
    root: PathBuf,
}

impl BackupPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the backup root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of a category
    ///
    /// Folder names use `/` as separator regardless of platform; each part
    /// becomes one directory level.
    pub fn category_dir(&self, category: &Category) -> PathBuf {
        category
            .folder
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(self.root.clone(), |dir, part| dir.join(part))
    }

    /// Create the backup root if it does not exist
    pub fn ensure_root(&self) -> BackupResultT<()> {
        std::fs::create_dir_all(&self.root).map_err(|e| {
            BackupError::io(&self.root, format!("Failed to create backup root: {}", e))
        })
    }
}
