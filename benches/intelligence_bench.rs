// ABOUTME: Criterion benchmarks for the health score computation pipeline
// ABOUTME: Measures threshold scoring, full score computation, trend summaries, and enrichment
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Criterion benchmarks for the health score computation pipeline.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use chrono::{Duration, Utc};
use common::fixtures::{generate_batch, generate_samples, SampleBatchSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal_macros::dec;
use uuid::Uuid;
use vitalscore::intelligence::{HealthScoreEngine, MetricScorer, TrendAnalyzer};
use vitalscore::models::MetricType;

const SIZES: [SampleBatchSize; 3] = [
    SampleBatchSize::Small,
    SampleBatchSize::Medium,
    SampleBatchSize::Large,
];

fn bench_metric_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("metric_scoring");

    group.bench_function("all_types_single_value", |b| {
        b.iter(|| {
            for metric_type in MetricType::ALL {
                black_box(MetricScorer::score(black_box(metric_type), black_box(dec!(97.5))));
            }
        });
    });

    group.finish();
}

fn bench_compute(c: &mut Criterion) {
    let engine = HealthScoreEngine::default();
    let mut group = c.benchmark_group("compute");

    for size in SIZES {
        let samples = generate_batch(size);
        group.throughput(Throughput::Elements(size.count() as u64));
        group.bench_with_input(
            BenchmarkId::new("health_score", size.label()),
            &samples,
            |b, samples| b.iter(|| engine.compute(black_box(samples))),
        );
    }

    group.finish();
}

fn bench_trend_summary(c: &mut Criterion) {
    let analyzer = TrendAnalyzer::default();
    let mut group = c.benchmark_group("trend_summary");

    for size in SIZES {
        let now = Utc::now();
        let samples = generate_samples(size.count(), 118, now);
        let window_start = now - Duration::days(90);
        group.throughput(Throughput::Elements(size.count() as u64));
        group.bench_with_input(
            BenchmarkId::new("summarize", size.label()),
            &samples,
            |b, samples| b.iter(|| analyzer.summarize(black_box(samples), window_start)),
        );
    }

    group.finish();
}

fn bench_enrich(c: &mut Criterion) {
    let engine = HealthScoreEngine::default();
    let now = Utc::now();
    let samples = generate_samples(SampleBatchSize::Medium.count(), 118, now);
    let window_start = now - Duration::days(90);
    let Ok(snapshot) = engine.build_snapshot(Uuid::new_v4(), &samples, 90) else {
        return;
    };

    c.bench_function("enrich_snapshot", |b| {
        b.iter(|| engine.enrich(black_box(snapshot.clone()), black_box(&samples), window_start));
    });
}

criterion_group!(
    benches,
    bench_metric_scoring,
    bench_compute,
    bench_trend_summary,
    bench_enrich
);
criterion_main!(benches);
