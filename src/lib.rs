// ABOUTME: Main library entry point for the Treino insight engine
// ABOUTME: Aggregates backend signals into a capped, ranked, persisted insight list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

#![deny(unsafe_code)]

//! # Treino Insight Engine
//!
//! In-process notification engine for the Treino fitness-platform dashboard.
//! It collects heterogeneous signals from the dashboard backend (module
//! statistics, system health, critical alerts, activity feed, KPIs,
//! financial summaries, platform counts, predictive analysis), classifies
//! each signal into normalized insight records, merges them with the user's
//! persisted list, and exposes per-module filtered views to the consuming UI.
//!
//! ## Architecture
//!
//! - **sources**: concurrent, independently-failing fetches of the backend
//!   read endpoints, each bounded by a per-source timeout
//! - **store**: durable key-value persistence of insight lists and login
//!   metadata, with in-memory and Redis backends
//! - **aggregator**: the refresh cycle — fetch, classify, rank, merge, persist
//! - **notifications**: per-session state, module filtering, navigation, and
//!   aggregate urgent alerts
//!
//! ## Example
//!
//! ```rust,no_run
//! use treino_insight_engine::aggregator::InsightAggregator;
//! use treino_insight_engine::config::environment::EngineConfig;
//! use treino_insight_engine::notifications::NotificationCenter;
//! use treino_insight_engine::sources::http::HttpDashboardApi;
//! use treino_insight_engine::store::factory::InsightStore;
//! use treino_insight_engine::models::UserRole;
//! use treino_insight_engine::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = EngineConfig::from_env()?;
//!     let api = HttpDashboardApi::new(&config)?;
//!     let store = InsightStore::from_env().await?;
//!     let aggregator = InsightAggregator::new(api, store);
//!
//!     let center = NotificationCenter::new(aggregator);
//!     let insights = center.initialize("user-1", UserRole::Admin).await?;
//!     println!("{} active insights", insights.len());
//!     Ok(())
//! }
//! ```

/// The refresh cycle: fetch, classify, rank, merge, persist
pub mod aggregator;

/// Environment-based configuration management
pub mod config;

/// Logging configuration and structured logging setup
pub mod logging;

/// Per-session notification state, module filtering, and alerts
pub mod notifications;

/// Backend read endpoints and the all-settled fetch combinator
pub mod sources;

/// Durable key-value persistence for insight lists and login metadata
pub mod store;

pub use treino_core::errors;
pub use treino_core::models;
pub use treino_intelligence as intelligence;
