//! Record transforms applied before a record is written
//!
//! - `filename`: display name to filesystem-safe stem
//! - `keys`: removal of tenant-specific metadata keys

pub mod filename;
pub mod keys;

pub use filename::{sanitize_filename, FALLBACK_STEM};
pub use keys::{strip_keys, KeyStripper, DEFAULT_DENYLIST};
