// ABOUTME: Criterion benchmarks for the insight ranking and merge pipeline
// ABOUTME: Measures sort and merge cost at and above the active-list cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

//! Criterion benchmarks for insight ranking and merge.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use treino_insight_engine::intelligence::ranking::{
    merge_insights, sort_by_rank, MAX_ACTIVE_INSIGHTS,
};
use treino_insight_engine::models::{Insight, InsightKind, InsightPriority};

fn generate_insights(prefix: &str, count: usize) -> Vec<Insight> {
    (0..count)
        .map(|index| {
            let priority = match index % 3 {
                0 => InsightPriority::High,
                1 => InsightPriority::Medium,
                _ => InsightPriority::Low,
            };
            let confidence = ((index * 37) % 100) as u8;
            Insight::new(
                InsightKind::Info,
                priority,
                format!("Insight {index}"),
                "mensagem de benchmark",
                "admin-dashboard",
            )
            .with_id(format!("{prefix}-{index}"))
            .with_confidence(confidence)
        })
        .collect()
}

fn bench_sort_by_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_by_rank");

    for size in [MAX_ACTIVE_INSIGHTS, 100, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let insights = generate_insights("bench", size);
            b.iter(|| {
                let mut list = insights.clone();
                sort_by_rank(black_box(&mut list));
                list
            });
        });
    }

    group.finish();
}

fn bench_merge_insights(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_insights");

    for fresh_size in [5, 50, 200] {
        group.bench_with_input(
            BenchmarkId::from_parameter(fresh_size),
            &fresh_size,
            |b, &fresh_size| {
                let existing = generate_insights("persisted", MAX_ACTIVE_INSIGHTS);
                let fresh = generate_insights("fresh", fresh_size);
                b.iter(|| {
                    merge_insights(
                        black_box(existing.clone()),
                        black_box(fresh.clone()),
                        MAX_ACTIVE_INSIGHTS,
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_sort_by_rank, bench_merge_insights);
criterion_main!(benches);
