//! Sink implementations and the factory that builds the per-level files

pub mod console;
pub mod file;

pub use console::{ConsoleMirror, ConsoleSink};
pub use file::FileSink;

pub use crate::core::Sink;

use crate::core::{LogLevel, LoggerError, Result};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

/// Make sure `path` is a directory, creating one level if it is missing.
///
/// Parents are not created. Returns `true` when the directory was created.
pub fn ensure_directory(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(false),
        Ok(_) => Err(LoggerError::directory_creation(
            path,
            io::Error::new(ErrorKind::AlreadyExists, "path exists and is not a directory"),
        )),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            fs::create_dir(path).map_err(|e| LoggerError::directory_creation(path, e))?;
            eprintln!("[LOGGER INFO] Created log directory {}", path.display());
            Ok(true)
        }
        Err(e) => Err(LoggerError::directory_creation(path, e)),
    }
}

/// Open `<directory>/<level>.log` for appending
pub fn open_sink(directory: &Path, level: LogLevel) -> Result<FileSink> {
    let path = directory.join(level.file_name());
    FileSink::open(&path).map_err(|e| match e {
        LoggerError::Io(source) => LoggerError::sink_open(&path, level.name(), source),
        other => other,
    })
}
