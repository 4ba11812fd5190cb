//! Low-level file operations used by the entity store

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::{Error, NormalizedPath, Result};

/// Durability settings for writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobustnessConfig {
    /// Flush file contents to disk before the rename.
    pub enable_fsync: bool,
}

impl Default for RobustnessConfig {
    fn default() -> Self {
        Self { enable_fsync: true }
    }
}

/// Create `path` and all missing parents. Safe to call concurrently.
pub fn ensure_dir(path: &NormalizedPath) -> Result<()> {
    let native_path = path.to_native();
    fs::create_dir_all(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write content to a file, replacing whatever was there.
///
/// Writes to a uniquely named temp file in the same directory and renames
/// it over the target, so readers see either the old or the new bytes.
/// Concurrent writers to the same path still race; the last rename wins.
pub fn write_atomic(path: &NormalizedPath, content: &[u8], config: RobustnessConfig) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Same directory keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        uuid::Uuid::new_v4().simple()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let written = write_temp(&temp_path, content, config)
        .and_then(|_| fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e)));

    if written.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    written
}

fn write_temp(temp_path: &Path, content: &[u8], config: RobustnessConfig) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;

    if config.enable_fsync {
        temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;
    }

    Ok(())
}

/// Read text content from a file.
///
/// A missing file is not an error and yields `None`.
pub fn read_text(path: &NormalizedPath) -> Result<Option<String>> {
    let native_path = path.to_native();
    match fs::read_to_string(&native_path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(&native_path, e)),
    }
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes(), RobustnessConfig::default())
}

/// Remove a file. Returns `true` if a file was removed, `false` if it was
/// already absent.
pub fn remove_file(path: &NormalizedPath) -> Result<bool> {
    let native_path = path.to_native();
    match fs::remove_file(&native_path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io(&native_path, e)),
    }
}

/// List regular files directly under `dir` whose name ends with `suffix`.
///
/// Not recursive. A missing directory yields an empty list. Results are
/// sorted so listings are stable between calls.
pub fn list_files(dir: &NormalizedPath, suffix: &str) -> Result<Vec<NormalizedPath>> {
    let native_dir = dir.to_native();
    let entries = match fs::read_dir(&native_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::io(&native_dir, e)),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&native_dir, e))?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        // Temp files from in-flight writes start with a dot
        if name.starts_with('.') {
            continue;
        }
        let path = dir.join(&name);
        if !path.ends_with_suffix(suffix) {
            continue;
        }
        // Entries deleted since read_dir are simply skipped
        match entry.file_type() {
            Ok(file_type) if file_type.is_file() => files.push(path),
            _ => {}
        }
    }
    files.sort();
    Ok(files)
}
