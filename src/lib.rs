//! graph-backup - back up device-management configuration to files
//!
//! Reads configuration objects (VPP tokens, partner connections, message
//! templates, ...) from a management API and writes each one to its own
//! JSON or YAML file inside a per-category folder.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Backup settings and output path layout
//! - `error`: Custom error types
//! - `models`: Records, output formats and run results
//! - `transform`: Filename sanitization and key stripping
//! - `storage`: Atomic JSON/YAML file writes
//! - `backup`: Categories, the request capability and the backup routine
//!
//! # Example
//!
//! ```rust,ignore
//! use graph_backup::backup::{BackupRoutine, Category};
//! use graph_backup::models::OutputFormat;
//!
//! let routine = BackupRoutine::new(Category::find("vpp-tokens").unwrap());
//! let result = routine.run(Path::new("backup"), OutputFormat::Yaml, &client)?;
//! println!("{} tokens backed up", result.config_count);
//! ```

pub mod backup;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod transform;

pub use backup::{BackupRoutine, BackupRunner, Category, RecordSource};
pub use error::{BackupError, BackupResultT};
pub use models::{BackupResult, OutputFormat, Record};
