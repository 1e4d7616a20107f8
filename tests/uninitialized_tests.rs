//! Emits before `initialize` are dropped with a diagnostic instead of crashing.
//!
//! Kept in its own test binary so no other test installs a global logger.

use level_partition_logger as log;

#[test]
fn test_emit_before_initialize_is_dropped() {
    assert!(log::global().is_none());

    log::info(&[&"nobody is listening"]);
    log::errorf("code {}", &[&500]);
    assert!(!log::log(log::LogLevel::Warn, "dropped"));

    let effect = log::fatal(&[&"still reported"]);
    assert_eq!(effect.message(), "still reported");
    assert!(log::global().is_none());
}
