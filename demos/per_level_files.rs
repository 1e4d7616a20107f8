//! Per-level file logging example
//!
//! Writes a few records at every level into `./demo-logs/<level>.log`, then
//! exits through the fatal path.
//!
//! Run with: cargo run --example per_level_files

use level_partition_logger::{self as log, info, warn, LogConfiguration, LogLevel};

fn main() -> log::Result<()> {
    println!("=== Level Partition Logger - Per-Level Files Example ===\n");

    let config = LogConfiguration::new("demo-logs")
        .with_prefix("demo")
        .with_format("json")
        .with_encode_level("capital");
    log::initialize(config)?;

    log::debug(&[&"Loading configuration..."]);
    log::info(&[&"Application started on port", &8080]);
    log::warnf("Cache at {}% capacity", &[&93]);
    log::errorf("Failed to load optional plugin {}", &[&"metrics"]);
    log::log(LogLevel::Panic, "Recovered from a worker panic");

    for i in 1..=3 {
        info!("Processing item {}/3", i);
        if i == 2 {
            warn!("Item {} took longer than expected", i);
        }
    }

    for level in LogLevel::ALL {
        println!("  {:<5} -> demo-logs/{}", level.to_str(), level.file_name());
    }

    // Records are unbuffered, nothing to flush before exiting
    let effect = log::fatal(&[&"Demo finished, exiting through the fatal path"]);
    println!("\n{}", effect);
    effect.exit()
}
