//! File I/O helpers with atomic writes
//!
//! Writes go to a sibling temp file which is synced and then renamed over the
//! target, so a crash leaves either the old file or the new one.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::TrackerError;

/// Read JSON from a file, returning a default value if the file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, TrackerError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| TrackerError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Serialize `data` as pretty JSON and write it atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), TrackerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path.as_ref(), |writer| {
        serde_json::to_writer_pretty(writer, data)
            .map_err(|e| TrackerError::Storage(format!("Failed to serialize data: {}", e)))
    })
}

/// Write a text file atomically
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), TrackerError> {
    write_atomic(path.as_ref(), |writer| {
        writer
            .write_all(contents.as_bytes())
            .map_err(|e| TrackerError::Io(format!("Failed to write data: {}", e)))
    })
}

fn write_atomic<F>(path: &Path, fill: F) -> Result<(), TrackerError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), TrackerError>,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path).map_err(|e| {
        TrackerError::Io(format!(
            "Failed to create temp file {}: {}",
            temp_path.display(),
            e
        ))
    })?;

    let mut writer = BufWriter::new(file);
    let written = fill(&mut writer)
        .and_then(|_| {
            writer
                .flush()
                .map_err(|e| TrackerError::Io(format!("Failed to flush data: {}", e)))
        })
        .and_then(|_| {
            writer
                .get_ref()
                .sync_all()
                .map_err(|e| TrackerError::Io(format!("Failed to sync data: {}", e)))
        });

    if let Err(e) = written {
        drop(writer);
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    drop(writer);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TrackerError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    tracing::trace!(path = %path.display(), "file written");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
