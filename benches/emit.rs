use criterion::{Criterion, criterion_group, criterion_main};
use dumplog::{Level, Logger};
use std::hint::black_box;
use std::io;

fn bench_filtered(c: &mut Criterion) {
    // Threshold at the sentinel: every call must be discarded before any
    // formatting work happens.
    let logger = Logger::builder()
        .level(Level::None)
        .colors(false)
        .writer(Box::new(io::sink()))
        .build();

    c.bench_function("Logger::log filtered", |b| {
        b.iter(|| logger.log(black_box(Level::Trace), black_box("dropped diagnostic line")));
    });
}

fn bench_emit_plain(c: &mut Criterion) {
    let logger = Logger::builder()
        .level(Level::Trace)
        .colors(false)
        .writer(Box::new(io::sink()))
        .build();

    c.bench_function("Logger::log plain", |b| {
        b.iter(|| logger.log(black_box(Level::Info), black_box("dump target mounted")));
    });
}

fn bench_emit_colored(c: &mut Criterion) {
    let logger = Logger::builder()
        .level(Level::Trace)
        .colors(true)
        .writer(Box::new(io::sink()))
        .build();

    c.bench_function("Logger::log colored", |b| {
        b.iter(|| logger.log(black_box(Level::Info), black_box("dump target mounted")));
    });
}

fn bench_format_args(c: &mut Criterion) {
    let logger = Logger::builder()
        .level(Level::Trace)
        .colors(false)
        .writer(Box::new(io::sink()))
        .build();

    c.bench_function("Logger::log_args", |b| {
        b.iter(|| {
            logger.log_args(
                black_box(Level::Debug),
                format_args!("copied {} of {} blocks", black_box(37_u64), black_box(512_u64)),
            );
        });
    });
}

criterion_group!(
    benches,
    bench_filtered,
    bench_emit_plain,
    bench_emit_colored,
    bench_format_args,
);
criterion_main!(benches);
