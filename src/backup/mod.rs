//! Backup of remote configuration objects
//!
//! - `category`: what to back up and how records are filtered and named
//! - `source`: the request capability the routine reads from
//! - `routine`: the fetch, filter, strip, write pass for one category
//! - `runner`: sequential run over several categories

pub mod category;
pub mod routine;
pub mod runner;
pub mod source;

pub use category::{Category, MissingNamePolicy, SerializationPolicy, SkipPredicate};
pub use routine::BackupRoutine;
pub use runner::BackupRunner;
pub use source::{RecordSource, StaticSource};
