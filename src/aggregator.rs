// ABOUTME: Insight aggregation cycle: fetch, classify, rank, merge, persist
// ABOUTME: Role-gated refresh with fallback to persisted insights on hard failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

//! Insight aggregator
//!
//! One `refresh` call runs a full aggregation cycle for a user: fetch all
//! backend sources concurrently, classify whatever settled, rank the fresh
//! insights, merge them into the persisted list, persist, and return the
//! merged result. Individual source failures degrade locally; a hard
//! failure of the cycle itself falls back to the last persisted list and
//! finally to a fixed service-unavailable insight.

use crate::sources::{fetch_all_sources, DashboardApi, SourceBatch};
use crate::store::factory::InsightStore;
use std::time::Duration;
use tracing::{debug, error, warn};
use treino_core::errors::AppResult;
use treino_core::models::{Insight, InsightKind, InsightPriority, UserRole};
use treino_intelligence::classifiers::MODULE_DASHBOARD;
use treino_intelligence::ranking::{merge_insights, sort_by_rank, MAX_ACTIVE_INSIGHTS};
use treino_intelligence::InsightClassifier;

/// Stable id of the fixed fallback insight; repeated fallbacks merge cleanly
const FALLBACK_INSIGHT_ID: &str = "ai-service-unavailable";

/// Default per-source fetch timeout for the aggregation path
const DEFAULT_SOURCE_TIMEOUT: Duration =
    Duration::from_secs(crate::config::environment::DEFAULT_SOURCE_FETCH_TIMEOUT_SECS);

/// Orchestrates one refresh cycle per call
pub struct InsightAggregator<A> {
    api: A,
    store: InsightStore,
    classifier: InsightClassifier,
    source_timeout: Duration,
}

impl<A: DashboardApi> InsightAggregator<A> {
    /// Create an aggregator with the default classifier and source timeout
    #[must_use]
    pub fn new(api: A, store: InsightStore) -> Self {
        Self {
            api,
            store,
            classifier: InsightClassifier::new(),
            source_timeout: DEFAULT_SOURCE_TIMEOUT,
        }
    }

    /// Replace the classifier (custom threshold tables)
    #[must_use]
    pub fn with_classifier(mut self, classifier: InsightClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Override the per-source fetch timeout
    #[must_use]
    pub const fn with_source_timeout(mut self, timeout: Duration) -> Self {
        self.source_timeout = timeout;
        self
    }

    /// The store backing this aggregator
    #[must_use]
    pub const fn store(&self) -> &InsightStore {
        &self.store
    }

    /// Run one aggregation cycle for the user and return the active list
    ///
    /// Non-admin roles receive the fixed fallback set without any endpoint
    /// being called — the multi-source path is admin-only by design, so this
    /// is a role gate, not an error path.
    ///
    /// # Errors
    ///
    /// Only an unrecoverable failure of the fallback read itself surfaces;
    /// everything else degrades per the recovery ladder.
    pub async fn refresh(&self, user_id: &str, role: UserRole) -> AppResult<Vec<Insight>> {
        if !role.is_admin() {
            debug!(%role, "Non-admin refresh; returning fallback insight set");
            return Ok(fallback_insights());
        }

        match self.run_cycle(user_id).await {
            Ok(insights) => Ok(insights),
            Err(e) => {
                warn!(user_id, error = %e, "Aggregation cycle failed; falling back to persisted insights");
                let persisted = match self.store.active_insights(user_id).await {
                    Ok(list) => list,
                    Err(store_err) => {
                        error!(user_id, error = %store_err, "Fallback read failed; using static fallback");
                        Vec::new()
                    }
                };

                if persisted.is_empty() {
                    Ok(fallback_insights())
                } else {
                    Ok(persisted)
                }
            }
        }
    }

    /// The happy-path cycle: fetch, classify, rank, merge, persist
    async fn run_cycle(&self, user_id: &str) -> AppResult<Vec<Insight>> {
        let batch = fetch_all_sources(&self.api, self.source_timeout).await;
        debug!(
            user_id,
            settled = batch.settled_count(),
            "Source fetch round complete"
        );

        let mut fresh = self.classify_batch(&batch);

        // Login metadata is recorded at session initialization; a long gap
        // since the previous login contributes a welcome-back insight.
        if let Some(login) = self.store.last_login(user_id).await? {
            fresh.extend(self.classifier.classify_login_gap(&login));
        }

        sort_by_rank(&mut fresh);

        let existing = self.store.active_insights(user_id).await?;
        let merged = merge_insights(existing, fresh, MAX_ACTIVE_INSIGHTS);

        self.store.set_active_insights(user_id, &merged).await?;
        Ok(merged)
    }

    /// Run every classifier whose source settled; failed sources contribute nothing
    fn classify_batch(&self, batch: &SourceBatch) -> Vec<Insight> {
        let mut insights = Vec::new();

        if let Some(stats) = &batch.module_stats {
            insights.extend(self.classifier.classify_module_stats(stats));
        }
        if let Some(health) = &batch.system_health {
            insights.extend(self.classifier.classify_system_health(health));
        }
        if let Some(alerts) = &batch.critical_alerts {
            insights.extend(self.classifier.classify_alerts(alerts));
        }
        if let Some(entries) = &batch.activity_log {
            insights.extend(self.classifier.classify_activity_log(entries));
        }
        if let Some(kpis) = &batch.kpi_snapshot {
            insights.extend(self.classifier.classify_kpis(kpis));
        }
        if let Some(summary) = &batch.financial_summary {
            insights.extend(self.classifier.classify_financial_summary(summary));
        }
        if let Some(counts) = &batch.platform_counts {
            insights.extend(self.classifier.classify_platform_counts(counts));
        }
        if let Some(analysis) = &batch.predictive_analysis {
            insights.extend(self.classifier.classify_predictive(analysis));
        }

        insights
    }
}

/// The fixed service-unavailable insight set
///
/// Returned to non-admin roles and when a failed cycle has nothing persisted
/// to fall back on. The stable id keeps repeated fallbacks from accumulating.
#[must_use]
pub fn fallback_insights() -> Vec<Insight> {
    vec![Insight::new(
        InsightKind::Info,
        InsightPriority::Low,
        "Sistema de IA Temporariamente Indisponível",
        "Os insights inteligentes não estão disponíveis no momento. Tente novamente mais tarde.",
        MODULE_DASHBOARD,
    )
    .with_id(FALLBACK_INSIGHT_ID)
    .with_confidence(100)]
}
