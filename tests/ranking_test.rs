// ABOUTME: Unit tests for the insight ranking and merge pipeline
// ABOUTME: Covers rank ordering, merge idempotence, id dedup, and the 20-entry cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

use std::collections::HashSet;
use treino_insight_engine::intelligence::ranking::{
    merge_insights, sort_by_rank, MAX_ACTIVE_INSIGHTS,
};
use treino_insight_engine::models::{Insight, InsightKind, InsightPriority};

fn insight(id: &str, priority: InsightPriority, confidence: u8) -> Insight {
    Insight::new(
        InsightKind::Info,
        priority,
        format!("Insight {id}"),
        "mensagem",
        "admin-dashboard",
    )
    .with_id(id)
    .with_confidence(confidence)
}

#[test]
fn test_sort_orders_by_priority_weight_times_confidence() {
    let mut insights = vec![
        insight("low-high-conf", InsightPriority::Low, 100), // score 100
        insight("high-low-conf", InsightPriority::High, 50), // score 150
        insight("medium", InsightPriority::Medium, 60),      // score 120
    ];

    sort_by_rank(&mut insights);

    let ids: Vec<&str> = insights.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["high-low-conf", "medium", "low-high-conf"]);
}

#[test]
fn test_merge_appends_only_unseen_ids() {
    let existing = vec![
        insight("a", InsightPriority::High, 90),
        insight("b", InsightPriority::Medium, 70),
    ];
    let fresh = vec![
        insight("b", InsightPriority::High, 99), // duplicate id, dropped
        insight("c", InsightPriority::Low, 40),
    ];

    let merged = merge_insights(existing, fresh, MAX_ACTIVE_INSIGHTS);

    let ids: HashSet<&str> = merged.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, HashSet::from(["a", "b", "c"]));

    // The persisted "b" wins over the fresh duplicate
    let b = merged.iter().find(|i| i.id == "b").unwrap();
    assert_eq!(b.confidence, 70);
}

#[test]
fn test_merge_with_id_subset_is_idempotent() {
    let existing = vec![
        insight("a", InsightPriority::High, 90),
        insight("b", InsightPriority::Medium, 70),
        insight("c", InsightPriority::Low, 50),
    ];
    let fresh = vec![
        insight("a", InsightPriority::High, 90),
        insight("c", InsightPriority::Low, 50),
    ];

    let merged = merge_insights(existing.clone(), fresh, MAX_ACTIVE_INSIGHTS);

    assert_eq!(merged.len(), existing.len());
    let merged_ids: HashSet<&str> = merged.iter().map(|i| i.id.as_str()).collect();
    let existing_ids: HashSet<&str> = existing.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(merged_ids, existing_ids);
}

#[test]
fn test_merge_never_exceeds_cap() {
    let existing: Vec<Insight> = (0..15)
        .map(|i| insight(&format!("old-{i}"), InsightPriority::Medium, 60))
        .collect();
    let fresh: Vec<Insight> = (0..15)
        .map(|i| insight(&format!("new-{i}"), InsightPriority::Low, 50))
        .collect();

    let merged = merge_insights(existing, fresh, MAX_ACTIVE_INSIGHTS);

    assert_eq!(merged.len(), MAX_ACTIVE_INSIGHTS);
}

#[test]
fn test_truncation_keeps_highest_ranked() {
    let existing: Vec<Insight> = (0..MAX_ACTIVE_INSIGHTS)
        .map(|i| insight(&format!("old-{i}"), InsightPriority::Low, 10))
        .collect();
    let fresh = vec![insight("urgent", InsightPriority::High, 100)];

    let merged = merge_insights(existing, fresh, MAX_ACTIVE_INSIGHTS);

    assert_eq!(merged.len(), MAX_ACTIVE_INSIGHTS);
    // The high-ranked newcomer displaces a low-ranked survivor
    assert_eq!(merged[0].id, "urgent");
    assert!(merged.iter().any(|i| i.id == "urgent"));
}

#[test]
fn test_merge_never_duplicates_ids() {
    let existing: Vec<Insight> = (0..10)
        .map(|i| insight(&format!("i-{i}"), InsightPriority::Medium, 60))
        .collect();
    let fresh: Vec<Insight> = (0..10)
        .map(|i| insight(&format!("i-{i}"), InsightPriority::Medium, 60))
        .collect();

    let merged = merge_insights(existing, fresh, MAX_ACTIVE_INSIGHTS);

    let unique: HashSet<&str> = merged.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(unique.len(), merged.len());
    assert_eq!(merged.len(), 10);
}

#[test]
fn test_merge_empty_existing_sorts_fresh() {
    let fresh = vec![
        insight("weak", InsightPriority::Low, 20),
        insight("strong", InsightPriority::High, 95),
    ];

    let merged = merge_insights(Vec::new(), fresh, MAX_ACTIVE_INSIGHTS);

    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].id, "strong");
}
