// ABOUTME: Criterion benchmarks for the occurrence calculator and decomposition engine
// ABOUTME: Measures counting fast paths, enumeration and the deadline search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

//! Criterion benchmarks for goal decomposition.
//!
//! Counting is closed-form for daily, every-N and weekly patterns and walks
//! months or years otherwise; the deadline search walks occurrences one by
//! one and is the expensive path.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use goalpace::config::DecompositionConfig;
use goalpace::intelligence::{CapacityModel, DecompositionEngine, Recurrence};
use goalpace::models::{Goal, GoalId};

/// Spans in days used for counting benchmarks
const SPANS: [i64; 3] = [30, 365, 3_650];

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn recurrences() -> Vec<(&'static str, Recurrence)> {
    ["daily", "every:3d", "weekly:mon,wed,fri", "monthly:31", "yearly:2-29"]
        .into_iter()
        .filter_map(|label| label.parse().ok().map(|recurrence| (label, recurrence)))
        .collect()
}

/// Benchmark occurrence counting across patterns and spans
fn bench_count_occurrences(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_occurrences");

    for (label, recurrence) in recurrences() {
        for days in SPANS {
            let end = start() + Duration::days(days);
            group.bench_with_input(BenchmarkId::new(label, days), &end, |b, end| {
                b.iter(|| recurrence.count_occurrences(black_box(start()), black_box(*end)));
            });
        }
    }

    group.finish();
}

/// Benchmark lazy enumeration of a year of occurrences
fn bench_occurrences_between(c: &mut Criterion) {
    let mut group = c.benchmark_group("occurrences_between");
    let end = start() + Duration::days(365);

    for (label, recurrence) in recurrences() {
        let count = recurrence.count_occurrences(start(), end);
        group.throughput(Throughput::Elements(u64::from(count)));
        group.bench_function(label, |b| {
            b.iter(|| recurrence.occurrences_between(black_box(start()), black_box(end)));
        });
    }

    group.finish();
}

/// Benchmark full decompositions, feasible and with a deadline search
fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");
    let now = start();

    let unbounded = DecompositionEngine::default();
    let fixed = DecompositionEngine::new(
        DecompositionConfig::default().with_capacity_model(CapacityModel::Fixed {
            per_occurrence: 1.0,
        }),
    );

    for target in [100.0, 1_000.0, 10_000.0] {
        let goal = Goal::new(GoalId(1), target, now + Duration::days(30));

        group.bench_with_input(
            BenchmarkId::new("feasible", target),
            &goal,
            |b, goal| {
                b.iter(|| unbounded.decompose(black_box(goal), &Recurrence::Daily, None, now));
            },
        );
        // Pace of one per day forces the search to walk `target` occurrences
        group.bench_with_input(
            BenchmarkId::new("deadline_search", target),
            &goal,
            |b, goal| {
                b.iter(|| fixed.decompose(black_box(goal), &Recurrence::Daily, None, now));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_count_occurrences,
    bench_occurrences_between,
    bench_decompose,
);
criterion_main!(benches);
