//! Storage layer for graph-backup
//!
//! Writes records to per-category folders with atomic writes and
//! automatic directory creation.

pub mod file_io;

pub use file_io::{read_record, write_record, FileSink, RecordSink};
