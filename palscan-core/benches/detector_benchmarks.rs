//! Performance benchmarks for PalindromeDetector
//!
//! Run with: cargo bench --bench detector_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use palscan_core::{Config, PalindromeDetector};
use std::hint::black_box;

/// Generate test text of specified size
fn generate_text(size: usize) -> String {
    let base = "Was it a car or a cat I saw? Stats show a kayak at noon. ";
    let repeat_count = size / base.len() + 1;

    let mut text = base.repeat(repeat_count);
    text.truncate(size);
    text
}

/// Benchmark different text sizes
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");

    let detector = PalindromeDetector::default();

    for size in [256, 1024, 4096, 16_384] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("find_all", size), &text, |b, text| {
            b.iter(|| detector.find_all(black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark the effect of the scan window
fn bench_window_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_sizes");

    let text = generate_text(4096);

    for window in [10, 20, 40, 60] {
        let config = Config::builder()
            .min_length(3)
            .max_window(window)
            .build()
            .unwrap();
        let detector = PalindromeDetector::new(config).unwrap();

        group.bench_with_input(BenchmarkId::new("window", window), &text, |b, text| {
            b.iter(|| detector.find_all(black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark space-sensitive refinement against the default policy
fn bench_space_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("space_policy");

    let text = generate_text(4096);

    for include_spaces in [false, true] {
        let config = Config::builder()
            .include_spaces(include_spaces)
            .build()
            .unwrap();
        let detector = PalindromeDetector::new(config).unwrap();

        group.bench_with_input(
            BenchmarkId::new("include_spaces", include_spaces),
            &text,
            |b, text| {
                b.iter(|| detector.find_all(black_box(text)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_text_sizes,
    bench_window_sizes,
    bench_space_policy
);
criterion_main!(benches);
