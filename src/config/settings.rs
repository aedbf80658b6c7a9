//! Backup settings
//!
//! Which categories to back up, where to and in which format. Stored as a
//! JSON file; every field has a default so partial files load fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::backup::Category;
use crate::error::{BackupError, BackupResultT};
use crate::models::OutputFormat;

/// Settings for a backup run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupSettings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Backup root directory
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Serialization format for record files
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Categories to back up, by name
    #[serde(default = "Category::builtin_names")]
    pub categories: Vec<String>,

    /// Categories to leave out even if listed above
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_root() -> PathBuf {
    PathBuf::from("backup")
}

impl Default for BackupSettings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            root: default_root(),
            output_format: OutputFormat::default(),
            categories: Category::builtin_names(),
            exclude: Vec::new(),
        }
    }
}

impl BackupSettings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> BackupResultT<Self> {
        let path = path.as_ref();

        if !path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| BackupError::io(path, format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| BackupError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save<P: AsRef<Path>>(&self, path: P) -> BackupResultT<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                BackupError::io(parent, format!("Failed to create settings directory: {}", e))
            })?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BackupError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, contents)
            .map_err(|e| BackupError::io(path, format!("Failed to write settings file: {}", e)))
    }

    /// Resolve the enabled categories, in the order they are listed
    ///
    /// Unknown names in either list are a configuration error.
    pub fn enabled_categories(&self) -> BackupResultT<Vec<Category>> {
        for name in &self.exclude {
            if Category::find(name).is_none() {
                return Err(BackupError::Config(format!(
                    "Unknown category in exclude list: '{}'",
                    name
                )));
            }
        }

        let mut categories: Vec<Category> = Vec::new();
        for name in &self.categories {
            let category = Category::find(name)
                .ok_or_else(|| BackupError::Config(format!("Unknown category: '{}'", name)))?;

            if self.exclude.contains(name) || categories.iter().any(|c| &c.name == name) {
                continue;
            }
            categories.push(category);
        }

        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = BackupSettings::default();
        assert_eq!(settings.output_format, OutputFormat::Json);
        assert_eq!(settings.root, PathBuf::from("backup"));
        assert_eq!(settings.categories, Category::builtin_names());
        assert!(settings.exclude.is_empty());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = BackupSettings::load_or_create(temp_dir.path().join("backup.json")).unwrap();
        assert_eq!(loaded, BackupSettings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config").join("backup.json");

        let settings = BackupSettings {
            root: temp_dir.path().join("out"),
            output_format: OutputFormat::Yaml,
            categories: vec!["vpp-tokens".into()],
            ..BackupSettings::default()
        };
        settings.save(&path).unwrap();

        let loaded = BackupSettings::load_or_create(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("backup.json");
        std::fs::write(&path, r#"{"output_format": "yaml"}"#).unwrap();

        let loaded = BackupSettings::load_or_create(&path).unwrap();
        assert_eq!(loaded.output_format, OutputFormat::Yaml);
        assert_eq!(loaded.categories, Category::builtin_names());
        assert_eq!(loaded.schema_version, 1);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("backup.json");
        std::fs::write(&path, r#"{"output_format": "xml"}"#).unwrap();

        let err = BackupSettings::load_or_create(&path).unwrap_err();
        assert!(matches!(err, BackupError::Config(_)));
    }

    #[test]
    fn test_enabled_categories() {
        let settings = BackupSettings {
            categories: vec![
                "compliance-partner".into(),
                "vpp-tokens".into(),
                "compliance-partner".into(),
                "management-partner".into(),
            ],
            exclude: vec!["management-partner".into()],
            ..BackupSettings::default()
        };

        let names: Vec<String> = settings
            .enabled_categories()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["compliance-partner", "vpp-tokens"]);
    }

    #[test]
    fn test_unknown_category_is_error() {
        let settings = BackupSettings {
            categories: vec!["scripts".into()],
            ..BackupSettings::default()
        };
        assert!(matches!(
            settings.enabled_categories(),
            Err(BackupError::Config(_))
        ));

        let settings = BackupSettings {
            exclude: vec!["scripts".into()],
            ..BackupSettings::default()
        };
        assert!(settings.enabled_categories().is_err());
    }
}
