// ABOUTME: Shared test utilities for the insight engine integration tests
// ABOUTME: Stub dashboard API with canned payloads and per-call counters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

//! Shared test utilities for `treino_insight_engine`

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use treino_insight_engine::aggregator::InsightAggregator;
use treino_insight_engine::errors::{AppError, AppResult};
use treino_insight_engine::models::{
    ActivityLogEntry, CriticalAlert, FinanceStats, FinancialSummary, KpiSnapshot, ModuleStats,
    PlatformCounts, PredictiveAnalysis, SystemHealth,
};
use treino_insight_engine::sources::DashboardApi;
use treino_insight_engine::store::factory::InsightStore;
use treino_insight_engine::store::memory::MemoryStore;

/// Stub dashboard API: each endpoint serves a canned payload or fails
///
/// `None` fields simulate a failed fetch for that source. Every endpoint
/// call increments `calls`, so tests can assert the role gate performs
/// zero endpoint calls.
#[derive(Debug, Default)]
pub struct StubDashboardApi {
    pub module_stats: Option<ModuleStats>,
    pub system_health: Option<SystemHealth>,
    pub critical_alerts: Option<Vec<CriticalAlert>>,
    pub activity_log: Option<Vec<ActivityLogEntry>>,
    pub kpi_snapshot: Option<KpiSnapshot>,
    pub financial_summary: Option<FinancialSummary>,
    pub platform_counts: Option<PlatformCounts>,
    pub predictive_analysis: Option<PredictiveAnalysis>,
    pub calls: Arc<AtomicUsize>,
}

impl StubDashboardApi {
    /// Stub where every source fetch fails
    pub fn all_failing() -> Self {
        Self::default()
    }

    /// Stub serving only finance statistics; every other source fails
    pub fn with_finance(overdue_count: u32, overdue_amount: f64, pending_requests: u32) -> Self {
        Self {
            module_stats: Some(ModuleStats {
                finance: FinanceStats {
                    overdue_count,
                    overdue_amount,
                    pending_requests,
                },
            }),
            ..Self::default()
        }
    }

    /// Total endpoint calls observed
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Shared handle onto the call counter, usable after the stub is moved
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    fn serve<T: Clone>(&self, payload: &Option<T>, source: &str) -> AppResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        payload
            .clone()
            .ok_or_else(|| AppError::external_service(source, "stubbed fetch failure"))
    }
}

#[async_trait]
impl DashboardApi for StubDashboardApi {
    async fn module_stats(&self) -> AppResult<ModuleStats> {
        self.serve(&self.module_stats, "module_stats")
    }

    async fn system_health(&self) -> AppResult<SystemHealth> {
        self.serve(&self.system_health, "system_health")
    }

    async fn critical_alerts(&self) -> AppResult<Vec<CriticalAlert>> {
        self.serve(&self.critical_alerts, "critical_alerts")
    }

    async fn activity_log(&self) -> AppResult<Vec<ActivityLogEntry>> {
        self.serve(&self.activity_log, "activity_log")
    }

    async fn kpi_snapshot(&self) -> AppResult<KpiSnapshot> {
        self.serve(&self.kpi_snapshot, "kpi_snapshot")
    }

    async fn financial_summary(&self) -> AppResult<FinancialSummary> {
        self.serve(&self.financial_summary, "financial_summary")
    }

    async fn platform_counts(&self) -> AppResult<PlatformCounts> {
        self.serve(&self.platform_counts, "platform_counts")
    }

    async fn predictive_analysis(&self) -> AppResult<PredictiveAnalysis> {
        self.serve(&self.predictive_analysis, "predictive_analysis")
    }
}

/// Build an aggregator over a fresh in-memory store
pub fn test_aggregator(api: StubDashboardApi) -> InsightAggregator<StubDashboardApi> {
    InsightAggregator::new(api, InsightStore::memory(MemoryStore::new()))
}

/// Build an aggregator sharing the given store
pub fn test_aggregator_with_store(
    api: StubDashboardApi,
    store: InsightStore,
) -> InsightAggregator<StubDashboardApi> {
    InsightAggregator::new(api, store)
}
