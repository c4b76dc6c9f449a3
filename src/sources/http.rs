// ABOUTME: HTTP implementation of the dashboard API over a shared pooled client
// ABOUTME: Joins endpoint paths onto a configured base URL and decodes JSON bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

use super::DashboardApi;
use crate::config::environment::EngineConfig;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use std::sync::OnceLock;
use std::time::Duration;
use url::Url;
use treino_core::errors::{AppError, AppResult};
use treino_core::models::{
    ActivityLogEntry, CriticalAlert, FinancialSummary, KpiSnapshot, ModuleStats, PlatformCounts,
    PredictiveAnalysis, SystemHealth,
};

/// Default request timeout in seconds when the shared client is used uninitialized
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds when the shared client is used uninitialized
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Configured timeout values for the shared client
static CLIENT_TIMEOUTS: OnceLock<(u64, u64)> = OnceLock::new();

/// Global shared HTTP client with configured timeouts
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Initialize the shared HTTP client timeout configuration
///
/// Must be called once at startup before the first request is issued.
/// If not called, reasonable defaults are used (30s timeout, 10s connect).
pub fn initialize_shared_client(timeout_secs: u64, connect_timeout_secs: u64) {
    let _ = CLIENT_TIMEOUTS.set((timeout_secs, connect_timeout_secs));
}

/// Get the shared HTTP client for backend API calls
///
/// The client uses connection pooling and the configured timeouts.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = CLIENT_TIMEOUTS
            .get()
            .copied()
            .unwrap_or((DEFAULT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS));

        ClientBuilder::new()
            .timeout(Duration::from_secs(timeout))
            .connect_timeout(Duration::from_secs(connect_timeout))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// HTTP dashboard API over the shared pooled client
#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    base_url: Url,
}

impl HttpDashboardApi {
    /// Create an API client from the engine configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the base URL does not parse.
    pub fn new(config: &EngineConfig) -> AppResult<Self> {
        initialize_shared_client(config.request_timeout_secs, config.connect_timeout_secs);

        // A trailing slash makes Url::join treat the last segment as a directory.
        let normalized = if config.api_base_url.ends_with('/') {
            config.api_base_url.clone()
        } else {
            format!("{}/", config.api_base_url)
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| AppError::config(format!("Invalid API base URL: {e}")))?;

        Ok(Self { base_url })
    }

    /// GET an endpoint relative to the base URL and decode its JSON body
    async fn get_json<T: DeserializeOwned>(&self, path: &str, source: &str) -> AppResult<T> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| AppError::config(format!("Invalid endpoint path {path}: {e}")))?;

        let response = shared_client()
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::external_service(source, format!("request failed: {e}")))?;

        let response = response.error_for_status().map_err(|e| {
            AppError::external_service(source, format!("backend returned error status: {e}"))
        })?;

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::external_service(source, format!("invalid JSON body: {e}")))
    }
}

#[async_trait]
impl DashboardApi for HttpDashboardApi {
    async fn module_stats(&self) -> AppResult<ModuleStats> {
        self.get_json("admin/module-stats", "module_stats").await
    }

    async fn system_health(&self) -> AppResult<SystemHealth> {
        self.get_json("admin/system-health", "system_health").await
    }

    async fn critical_alerts(&self) -> AppResult<Vec<CriticalAlert>> {
        self.get_json("admin/critical-alerts", "critical_alerts")
            .await
    }

    async fn activity_log(&self) -> AppResult<Vec<ActivityLogEntry>> {
        self.get_json("admin/activity-log", "activity_log").await
    }

    async fn kpi_snapshot(&self) -> AppResult<KpiSnapshot> {
        self.get_json("admin/kpis", "kpi_snapshot").await
    }

    async fn financial_summary(&self) -> AppResult<FinancialSummary> {
        self.get_json("admin/financial-summary", "financial_summary")
            .await
    }

    async fn platform_counts(&self) -> AppResult<PlatformCounts> {
        self.get_json("admin/platform-counts", "platform_counts")
            .await
    }

    async fn predictive_analysis(&self) -> AppResult<PredictiveAnalysis> {
        self.get_json("admin/predictive-analysis", "predictive_analysis")
            .await
    }
}
