//! File I/O utilities with atomic writes
//!
//! Writes one record per file in JSON or YAML, and reads such files back.
//! A failed write never leaves a half-written backup behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{BackupError, BackupResultT};
use crate::models::{OutputFormat, Record};

/// Write a record to `<dir>/<stem>.<ext>`, creating `dir` if needed
///
/// An existing file at the target path is replaced. Returns the path written.
pub fn write_record<P: AsRef<Path>>(
    dir: P,
    stem: &str,
    record: &Record,
    format: OutputFormat,
) -> BackupResultT<PathBuf> {
    let dir = dir.as_ref();

    fs::create_dir_all(dir).map_err(|e| {
        BackupError::io(dir, format!("Failed to create directory: {}", e))
    })?;

    let path = dir.join(format!("{}.{}", stem, format.extension()));
    write_atomic(&path, record, format)?;

    Ok(path)
}

/// Destination for backed-up records
pub trait RecordSink {
    /// Store `record` as `<dir>/<stem>.<ext>` and return the path written
    fn write(
        &self,
        dir: &Path,
        stem: &str,
        record: &Record,
        format: OutputFormat,
    ) -> BackupResultT<PathBuf>;
}

/// Writes records to files with [`write_record`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSink;

impl RecordSink for FileSink {
    fn write(
        &self,
        dir: &Path,
        stem: &str,
        record: &Record,
        format: OutputFormat,
    ) -> BackupResultT<PathBuf> {
        write_record(dir, stem, record, format)
    }
}

/// Serialize to a temp file next to `path`, then rename over it
///
/// The temp file is removed whenever any step fails.
fn write_atomic(path: &Path, record: &Record, format: OutputFormat) -> BackupResultT<()> {
    let temp_path = path.with_extension(format!("{}.tmp", format.extension()));

    let outcome = write_temp(&temp_path, path, record, format).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| BackupError::io(path, format!("Failed to rename temp file: {}", e)))
    });

    if outcome.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    outcome
}

fn write_temp(
    temp_path: &Path,
    path: &Path,
    record: &Record,
    format: OutputFormat,
) -> BackupResultT<()> {
    let file = File::create(temp_path)
        .map_err(|e| BackupError::io(temp_path, format!("Failed to create temp file: {}", e)))?;
    let mut writer = BufWriter::new(file);

    encode(&mut writer, path, record, format)?;

    writer
        .flush()
        .map_err(|e| BackupError::io(temp_path, format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| BackupError::io(temp_path, format!("Failed to sync data: {}", e)))
}

fn encode<W: Write>(
    writer: &mut W,
    path: &Path,
    record: &Record,
    format: OutputFormat,
) -> BackupResultT<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, record)
                .map_err(|e| BackupError::serialization(path, e))?;
            writeln!(writer).map_err(|e| BackupError::io(path, e))?;
        }
        OutputFormat::Yaml => {
            serde_yaml::to_writer(&mut *writer, record)
                .map_err(|e| BackupError::serialization(path, e))?;
        }
    }
    Ok(())
}

/// Read a backup file back into a record
///
/// The format is taken from the file extension.
pub fn read_record<P: AsRef<Path>>(path: P) -> BackupResultT<Record> {
    let path = path.as_ref();

    let format = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(OutputFormat::from_extension)
        .ok_or_else(|| BackupError::parse(path, "Unrecognized backup file extension"))?;

    let file = File::open(path)
        .map_err(|e| BackupError::io(path, format!("Failed to open: {}", e)))?;
    let reader = BufReader::new(file);

    match format {
        OutputFormat::Json => {
            serde_json::from_reader(reader).map_err(|e| BackupError::parse(path, e))
        }
        OutputFormat::Yaml => {
            serde_yaml::from_reader(reader).map_err(|e| BackupError::parse(path, e))
        }
    }
}
