//! Configuration module for graph-backup
//!
//! This module provides:
//! - Backup settings persistence
//! - Output path layout below the backup root

pub mod paths;
pub mod settings;

pub use paths::BackupPaths;
pub use settings::BackupSettings;
