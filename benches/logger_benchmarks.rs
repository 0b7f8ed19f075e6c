//! Criterion benchmarks for cli_logger

use cli_logger::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::sync::Arc;

/// Discards output so benchmarks measure the pipeline, not the terminal.
struct NullWriter;

impl Writer for NullWriter {
    fn write(&self, data: &[u8], _level: Level) {
        black_box(data);
    }
}

fn bench_logger(level: Level, colorize: bool) -> Logger {
    Logger::builder()
        .max_level(level)
        .formatter(CliFormatter::new(CliFormatterOptions { colorize }))
        .writer(NullWriter)
        .build()
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("events");
    group.throughput(Throughput::Elements(1));

    let logger = bench_logger(Level::Debug, false);

    group.bench_function("info_plain", |b| {
        b.iter(|| logger.info().msg(black_box("Info message")));
    });

    group.bench_function("info_with_metadata", |b| {
        b.iter(|| {
            logger
                .info()
                .str("user_id", black_box("12345"))
                .str("status", black_box("200"))
                .msg(black_box("Request processed"))
        });
    });

    group.bench_function("msgf", |b| {
        b.iter(|| logger.info().msgf(format_args!("value {}", black_box(42))));
    });

    let colored = bench_logger(Level::Debug, true);
    group.bench_function("info_colorized", |b| {
        b.iter(|| colored.info().str("k", "v").msg(black_box("Info message")));
    });

    group.finish();
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtering");
    group.throughput(Throughput::Elements(1));

    let logger = bench_logger(Level::Error, false);

    group.bench_function("debug_filtered", |b| {
        b.iter(|| logger.debug().msg(black_box("Filtered message")));
    });

    group.bench_function("error_passed", |b| {
        b.iter(|| logger.error().msg(black_box("Error message")));
    });

    group.finish();
}

// ============================================================================
// Formatter Benchmarks
// ============================================================================

fn bench_formatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatter");

    let formatter = CliFormatter::new(CliFormatterOptions { colorize: false });
    let entry = LogEntry::new(Level::Warning, "disk almost full")
        .with_field(LABEL_KEY, "WRN")
        .with_field("mount", "/var")
        .with_field("used", "93%");

    group.bench_function("cli_format", |b| {
        b.iter(|| formatter.format(black_box(&entry)));
    });

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent");

    for threads in [2, 4, 8] {
        group.throughput(Throughput::Elements((threads * 100) as u64));
        group.bench_function(format!("{}_threads", threads), |b| {
            let logger = Arc::new(bench_logger(Level::Info, false));
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let logger = Arc::clone(&logger);
                        std::thread::spawn(move || {
                            for _ in 0..100 {
                                logger.info().msg("Concurrent message");
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_events,
    bench_filtering,
    bench_formatter,
    bench_concurrent
);
criterion_main!(benches);
