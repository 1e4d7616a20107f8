//! Criterion benchmarks for level_partition_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use level_partition_logger::core::template;
use level_partition_logger::prelude::*;
use level_partition_logger::{CallerLocation, Encoder};
use std::sync::Arc;
use tempfile::TempDir;

// ============================================================================
// Encoding Benchmarks
// ============================================================================

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");
    group.throughput(Throughput::Elements(1));

    let entry = LogEntry::new(LogLevel::Info, "Request processed in 12ms")
        .with_logger_name("api")
        .with_caller(CallerLocation::new("src/server/handler.rs", 88));

    let text = Encoder::build(&LogConfiguration::new("unused"));
    group.bench_function("text", |b| {
        b.iter(|| black_box(text.encode(black_box(&entry))));
    });

    let json = Encoder::build(&LogConfiguration::new("unused").with_format("json"));
    group.bench_function("json", |b| {
        b.iter(|| black_box(json.encode(black_box(&entry))));
    });

    let bracketed = Encoder::build(
        &LogConfiguration::new("unused")
            .with_format("json")
            .with_custom_level_encoder(true),
    );
    group.bench_function("json_bracketed_level", |b| {
        b.iter(|| black_box(bracketed.encode(black_box(&entry))));
    });

    group.finish();
}

// ============================================================================
// Template Benchmarks
// ============================================================================

fn bench_template(c: &mut Criterion) {
    let mut group = c.benchmark_group("template");
    group.throughput(Throughput::Elements(1));

    group.bench_function("join_args", |b| {
        b.iter(|| black_box(template::join_args(&[&"user", &42, &"logged in"])));
    });

    group.bench_function("render", |b| {
        b.iter(|| black_box(template::render("user {} logged in from {}", &[&42, &"10.0.0.1"])));
    });

    group.bench_function("render_malformed", |b| {
        b.iter(|| black_box(template::render("user { logged in", &[&42])));
    });

    group.finish();
}

// ============================================================================
// Emit Benchmarks
// ============================================================================

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");
    group.throughput(Throughput::Elements(1));

    let temp_dir = TempDir::new().expect("temp dir");
    let logger = Logger::from_config(&LogConfiguration::new(temp_dir.path()).with_format("json"))
        .expect("logger builds");

    group.bench_function("info", |b| {
        b.iter(|| logger.info(&[&black_box("Info message")]));
    });

    group.bench_function("warnf", |b| {
        b.iter(|| logger.warnf(black_box("Retry {} of {}"), &[&3, &5]));
    });

    let filtered = Logger::from_config(
        &LogConfiguration::new(temp_dir.path().join("filtered")).with_level("error"),
    )
    .expect("logger builds");
    group.bench_function("filtered_debug", |b| {
        b.iter(|| filtered.debug(&[&black_box("never written")]));
    });

    group.finish();
}

fn bench_concurrent_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_emit");
    group.throughput(Throughput::Elements(400));

    let temp_dir = TempDir::new().expect("temp dir");
    let logger = Arc::new(
        Logger::from_config(&LogConfiguration::new(temp_dir.path())).expect("logger builds"),
    );

    group.bench_function("4_threads_same_level", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|t| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        for i in 0..100 {
                            logger.infof("thread {} message {}", &[&t, &i]);
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().expect("bench thread");
            }
        });
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_encoding,
    bench_template,
    bench_emit,
    bench_concurrent_emit
);

criterion_main!(benches);
