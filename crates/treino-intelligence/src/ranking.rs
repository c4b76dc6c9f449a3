// ABOUTME: Ranking and merge pipeline for insight lists
// ABOUTME: Sorts by priority weight times confidence, merges by id, caps at 20 entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

//! Insight ranking and merge
//!
//! The active list for a user is bounded: fresh insights are merged into the
//! persisted list by id, the merged list is re-sorted by ranking score, and
//! everything past the cap is dropped.

use std::collections::HashSet;
use tracing::debug;
use treino_core::models::Insight;

/// Maximum number of insights kept in a user's active list
pub const MAX_ACTIVE_INSIGHTS: usize = 20;

/// Sort insights descending by `priority weight × confidence`
///
/// The sort is stable, so insights with equal scores keep their relative
/// order (fresh classifier output arrives grouped by source).
pub fn sort_by_rank(insights: &mut [Insight]) {
    insights.sort_by(|a, b| b.ranking_score().cmp(&a.ranking_score()));
}

/// Merge freshly generated insights into the persisted list
///
/// Keeps every existing insight, appends fresh ones whose id is not already
/// present, re-sorts the merged list by rank, and truncates to `cap`.
/// Merging a fresh list that is an id-subset of `existing` returns
/// `existing` unchanged (modulo ordering).
#[must_use]
pub fn merge_insights(existing: Vec<Insight>, fresh: Vec<Insight>, cap: usize) -> Vec<Insight> {
    let seen: HashSet<String> = existing.iter().map(|i| i.id.clone()).collect();

    let mut merged = existing;
    merged.extend(fresh.into_iter().filter(|i| !seen.contains(&i.id)));

    sort_by_rank(&mut merged);
    if merged.len() > cap {
        debug!(dropped = merged.len() - cap, "Active insight list truncated");
    }
    merged.truncate(cap);
    merged
}
