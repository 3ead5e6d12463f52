//! Benchmarks for the content filter.
//!
//! Benchmark targets:
//! - Short chat message: <20us
//! - Long essay-sized submission: <5ms

// Criterion macros generate items without docs - this is expected for benchmarks
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

use contentguard::{ContentFilterService, FilterOptions};

const SHORT_CLEAN: &str = "ما هو قانون نيوتن الثاني؟";
const SHORT_FLAGGED: &str = "this question is STUPID, call me 96551234567";
const PARAGRAPH: &str = "The electron configuration of sodium is 1s2 2s2 2p6 3s1. \
    تتحرك الإلكترونات في مدارات حول النواة. Email the instructor at instructor@school.edu.kw \
    if anything is unclear. ";

fn bench_short_messages(c: &mut Criterion) {
    let mut group = c.benchmark_group("short_messages");
    group.measurement_time(Duration::from_secs(5));
    let service = ContentFilterService::global();

    group.bench_function("clean", |b| {
        b.iter(|| service.filter(black_box(SHORT_CLEAN), FilterOptions::default()));
    });

    group.bench_function("flagged_with_sensitive", |b| {
        b.iter(|| {
            service.filter(
                black_box(SHORT_FLAGGED),
                FilterOptions::new().with_block_sensitive(),
            )
        });
    });

    group.bench_function("is_safe", |b| {
        b.iter(|| service.is_safe(black_box(SHORT_FLAGGED)));
    });

    group.finish();
}

fn bench_input_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_size");
    let service = ContentFilterService::global();

    for repeats in [1usize, 10, 100, 1000] {
        let text = PARAGRAPH.repeat(repeats);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeats), &text, |b, text| {
            b.iter(|| service.filter(black_box(text), FilterOptions::new().with_block_sensitive()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_short_messages, bench_input_size);
criterion_main!(benches);
