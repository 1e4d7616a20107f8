//! Tests for the process-wide logger
//!
//! Every test here replaces the global instance, so they serialize on a lock.

use level_partition_logger::{self as log, LogConfiguration, LogLevel, LoggerError};
use parking_lot::Mutex;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

static GLOBAL_LOCK: Mutex<()> = parking_lot::const_mutex(());

fn read_level(dir: &Path, level: LogLevel) -> String {
    fs::read_to_string(dir.join(level.file_name())).unwrap_or_default()
}

#[test]
fn test_reinitialize_switches_directory() {
    let _guard = GLOBAL_LOCK.lock();
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    log::initialize(LogConfiguration::new(first.path())).unwrap();
    log::info(&[&"before re-init"]);

    log::initialize(LogConfiguration::new(second.path())).unwrap();
    log::info(&[&"after re-init"]);

    let old = read_level(first.path(), LogLevel::Info);
    let new = read_level(second.path(), LogLevel::Info);
    assert!(old.contains("before re-init"));
    assert!(!old.contains("after re-init"));
    assert!(new.contains("after re-init"));
    assert!(!new.contains("before re-init"));
}

#[test]
fn test_failed_initialize_keeps_previous_logger() {
    let _guard = GLOBAL_LOCK.lock();
    let good = TempDir::new().unwrap();

    log::initialize(LogConfiguration::new(good.path())).unwrap();
    let installed = log::global().expect("logger installed");

    let bad = good.path().join("missing-parent").join("logs");
    let err = log::initialize(LogConfiguration::new(&bad)).unwrap_err();
    assert!(matches!(err, LoggerError::DirectoryCreation { .. }));

    let current = log::global().expect("logger still installed");
    assert!(std::sync::Arc::ptr_eq(&installed, &current));

    log::warn(&[&"still routed"]);
    assert!(read_level(good.path(), LogLevel::Warn).contains("still routed"));
}

#[test]
fn test_initialize_from_json_file() {
    let _guard = GLOBAL_LOCK.lock();
    let temp_dir = TempDir::new().unwrap();
    let log_dir = temp_dir.path().join("logs");
    let config_path = temp_dir.path().join("config.json");
    let document = serde_json::json!({
        "log": {
            "director": log_dir,
            "format": "json",
            "prefix": "api",
            "custom-level-encoder": true
        }
    });
    fs::write(&config_path, document.to_string()).unwrap();

    log::initialize(config_path.as_path()).unwrap();
    log::errorf("upstream {} returned {}", &[&"auth", &503]);
    log::debug(&[&"cache miss"]);

    let error = read_level(&log_dir, LogLevel::Error);
    let parsed: serde_json::Value = serde_json::from_str(error.trim_end()).unwrap();
    assert_eq!(parsed["level"], "[ERROR]");
    assert_eq!(parsed["logger"], "api");
    assert_eq!(parsed["msg"], "upstream auth returned 503");
    assert!(read_level(&log_dir, LogLevel::Debug).contains("cache miss"));
}

#[test]
fn test_invalid_config_file_is_reported() {
    let _guard = GLOBAL_LOCK.lock();
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[log]\nlevel = \"verbose\"\ndirector = \"logs\"\n").unwrap();

    let err = log::initialize(config_path.as_path()).unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}

#[test]
fn test_global_fatal_does_not_exit() {
    let _guard = GLOBAL_LOCK.lock();
    let temp_dir = TempDir::new().unwrap();
    log::initialize(LogConfiguration::new(temp_dir.path())).unwrap();

    let effect = log::fatalf("shutting down: {}", &[&"config corrupted"]);
    assert_eq!(effect.message(), "shutting down: config corrupted");
    assert!(read_level(temp_dir.path(), LogLevel::Fatal).contains("shutting down: config corrupted"));
}

#[test]
fn test_global_panic_records_then_panics() {
    let _guard = GLOBAL_LOCK.lock();
    let temp_dir = TempDir::new().unwrap();
    log::initialize(LogConfiguration::new(temp_dir.path())).unwrap();

    let result = std::panic::catch_unwind(|| log::panic(&[&"unreachable state"]));
    assert!(result.is_err());
    assert!(read_level(temp_dir.path(), LogLevel::Panic).contains("unreachable state"));
}
