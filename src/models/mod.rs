//! Core data models for graph-backup
//!
//! Records are schemaless JSON objects as returned by the management API.
//! The remaining types describe how a run is configured and what it produced.

pub mod format;
pub mod record;
pub mod result;

pub use format::OutputFormat;
pub use record::{field_text, record_id, Record};
pub use result::{BackupResult, BackupSummary};
