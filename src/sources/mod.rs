// ABOUTME: Backend read endpoints consumed by the aggregation cycle
// ABOUTME: All-settled concurrent fetch with per-source timeouts and local failure recovery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

//! Dashboard data sources
//!
//! The aggregator consumes eight backend read endpoints through the
//! [`DashboardApi`] trait. [`fetch_all_sources`] issues all eight fetches
//! concurrently; each settles independently, so one failed or hung source
//! never blocks or cancels the others — it simply contributes nothing.

/// HTTP implementation of the dashboard API
pub mod http;

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tracing::warn;
use treino_core::errors::AppResult;
use treino_core::models::{
    ActivityLogEntry, CriticalAlert, FinancialSummary, KpiSnapshot, ModuleStats, PlatformCounts,
    PredictiveAnalysis, SystemHealth,
};

/// Read endpoints of the dashboard backend consumed by the aggregator
///
/// The wire shapes are the backend's contract; implementations only
/// deserialize into the model types and surface failures as errors.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Per-module operational statistics
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch or deserialization fails
    async fn module_stats(&self) -> AppResult<ModuleStats>;

    /// Platform health snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch or deserialization fails
    async fn system_health(&self) -> AppResult<SystemHealth>;

    /// Open monitoring alerts
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch or deserialization fails
    async fn critical_alerts(&self) -> AppResult<Vec<CriticalAlert>>;

    /// Recent activity feed
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch or deserialization fails
    async fn activity_log(&self) -> AppResult<Vec<ActivityLogEntry>>;

    /// Dashboard KPI snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch or deserialization fails
    async fn kpi_snapshot(&self) -> AppResult<KpiSnapshot>;

    /// Monthly financial summary
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch or deserialization fails
    async fn financial_summary(&self) -> AppResult<FinancialSummary>;

    /// Platform-wide student and coach counts
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch or deserialization fails
    async fn platform_counts(&self) -> AppResult<PlatformCounts>;

    /// Predictive-analysis job output
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch or deserialization fails
    async fn predictive_analysis(&self) -> AppResult<PredictiveAnalysis>;
}

/// Results of one all-settled fetch round; `None` marks a failed or timed-out source
#[derive(Debug, Default)]
pub struct SourceBatch {
    /// Per-module operational statistics
    pub module_stats: Option<ModuleStats>,
    /// Platform health snapshot
    pub system_health: Option<SystemHealth>,
    /// Open monitoring alerts
    pub critical_alerts: Option<Vec<CriticalAlert>>,
    /// Recent activity feed
    pub activity_log: Option<Vec<ActivityLogEntry>>,
    /// Dashboard KPI snapshot
    pub kpi_snapshot: Option<KpiSnapshot>,
    /// Monthly financial summary
    pub financial_summary: Option<FinancialSummary>,
    /// Platform-wide student and coach counts
    pub platform_counts: Option<PlatformCounts>,
    /// Predictive-analysis job output
    pub predictive_analysis: Option<PredictiveAnalysis>,
}

impl SourceBatch {
    /// Number of sources that settled successfully
    #[must_use]
    pub fn settled_count(&self) -> usize {
        usize::from(self.module_stats.is_some())
            + usize::from(self.system_health.is_some())
            + usize::from(self.critical_alerts.is_some())
            + usize::from(self.activity_log.is_some())
            + usize::from(self.kpi_snapshot.is_some())
            + usize::from(self.financial_summary.is_some())
            + usize::from(self.platform_counts.is_some())
            + usize::from(self.predictive_analysis.is_some())
    }
}

/// Await one source fetch, bounded by `timeout`; failures collapse to `None`
async fn settle<T, F>(source: &'static str, timeout: Duration, fut: F) -> Option<T>
where
    F: Future<Output = AppResult<T>> + Send,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(Ok(value)) => Some(value),
        Ok(Err(e)) => {
            warn!(source, error = %e, "Source fetch failed; skipping");
            None
        }
        Err(_) => {
            warn!(
                source,
                timeout_secs = timeout.as_secs(),
                "Source fetch timed out; skipping"
            );
            None
        }
    }
}

/// Fetch all eight sources concurrently with all-settled semantics
///
/// Every fetch runs to completion (or timeout) regardless of how its
/// siblings fare; only successful results are carried into classification.
pub async fn fetch_all_sources<A: DashboardApi>(api: &A, timeout: Duration) -> SourceBatch {
    let (
        module_stats,
        system_health,
        critical_alerts,
        activity_log,
        kpi_snapshot,
        financial_summary,
        platform_counts,
        predictive_analysis,
    ) = tokio::join!(
        settle("module_stats", timeout, api.module_stats()),
        settle("system_health", timeout, api.system_health()),
        settle("critical_alerts", timeout, api.critical_alerts()),
        settle("activity_log", timeout, api.activity_log()),
        settle("kpi_snapshot", timeout, api.kpi_snapshot()),
        settle("financial_summary", timeout, api.financial_summary()),
        settle("platform_counts", timeout, api.platform_counts()),
        settle("predictive_analysis", timeout, api.predictive_analysis()),
    );

    SourceBatch {
        module_stats,
        system_health,
        critical_alerts,
        activity_log,
        kpi_snapshot,
        financial_summary,
        platform_counts,
        predictive_analysis,
    }
}
