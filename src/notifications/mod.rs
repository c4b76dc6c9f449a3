// ABOUTME: Per-session notification state binding the aggregator to the UI tree
// ABOUTME: Module filtering, dismissal, navigation, and aggregate urgent alerts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

//! Notification center
//!
//! One [`NotificationCenter`] instance exists per authenticated session. It
//! owns the in-memory copy of the user's insight list, runs refresh cycles
//! through the aggregator, and exposes the per-module views the dashboard
//! renders. After each refresh it emits at most one aggregate alert event
//! covering every urgent high-priority insight.

/// Aggregate alert broadcasting
pub mod alerts;
/// Module-key to route resolution
pub mod navigation;

pub use alerts::{AlertBroadcaster, AlertEvent};
pub use navigation::route_for_module;

use crate::aggregator::InsightAggregator;
use crate::sources::DashboardApi;
use tokio::sync::broadcast;
use tokio::sync::RwLock;
use tracing::{debug, info};
use treino_core::errors::{AppError, AppResult};
use treino_core::models::{Insight, InsightKind, InsightPriority, UserRole};

/// Lifecycle of a mounted notification center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No authenticated user yet
    Idle,
    /// A refresh cycle is in flight
    Loading,
    /// Insights are populated and current
    Ready,
}

/// The authenticated user bound to this center
#[derive(Debug, Clone)]
struct Session {
    user_id: String,
    role: UserRole,
}

/// Binds the aggregator and store to one authenticated session
pub struct NotificationCenter<A> {
    aggregator: InsightAggregator<A>,
    session: RwLock<Option<Session>>,
    insights: RwLock<Vec<Insight>>,
    state: RwLock<SessionState>,
    alerts: AlertBroadcaster,
}

impl<A: DashboardApi> NotificationCenter<A> {
    /// Create an idle center around an aggregator
    #[must_use]
    pub fn new(aggregator: InsightAggregator<A>) -> Self {
        Self {
            aggregator,
            session: RwLock::new(None),
            insights: RwLock::new(Vec::new()),
            state: RwLock::new(SessionState::Idle),
            alerts: AlertBroadcaster::new(),
        }
    }

    /// Current lifecycle state
    pub async fn state(&self) -> SessionState {
        *self.state.read().await
    }

    /// Snapshot of the active insight list
    pub async fn active_insights(&self) -> Vec<Insight> {
        self.insights.read().await.clone()
    }

    /// Subscribe to aggregate urgent-insight alerts
    #[must_use]
    pub fn subscribe_alerts(&self) -> broadcast::Receiver<AlertEvent> {
        self.alerts.subscribe()
    }

    /// Bind a user to this center, record the login, and run the first refresh
    ///
    /// # Errors
    ///
    /// Returns an error if the login metadata cannot be persisted or the
    /// refresh hits an unrecoverable store failure.
    pub async fn initialize(
        &self,
        user_id: impl Into<String>,
        role: UserRole,
    ) -> AppResult<Vec<Insight>> {
        let user_id = user_id.into();
        info!(%user_id, %role, "Initializing notification session");

        let login = self.aggregator.store().record_login(&user_id).await?;
        debug!(
            %user_id,
            session_count = login.session_count,
            "Login recorded"
        );

        *self.session.write().await = Some(Session { user_id, role });

        self.refresh().await
    }

    /// Re-run the full aggregation cycle for the bound user
    ///
    /// Concurrent calls are not deduplicated; serializing refreshes is the
    /// caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns an error when no user is bound or the cycle hits an
    /// unrecoverable store failure.
    pub async fn refresh(&self) -> AppResult<Vec<Insight>> {
        let session = self
            .session
            .read()
            .await
            .clone()
            .ok_or_else(|| AppError::invalid_input("No authenticated session bound"))?;

        *self.state.write().await = SessionState::Loading;

        let result = self
            .aggregator
            .refresh(&session.user_id, session.role)
            .await;

        // The session stays bound whatever happened; only the data may be stale.
        *self.state.write().await = SessionState::Ready;

        let refreshed = result?;
        *self.insights.write().await = refreshed.clone();

        self.emit_urgent_alert(&refreshed);
        Ok(refreshed)
    }

    /// Remove one insight from the in-memory state and the store
    ///
    /// A no-op when the id is not present.
    ///
    /// # Errors
    ///
    /// Returns an error when no user is bound or the store write fails.
    pub async fn dismiss(&self, insight_id: &str) -> AppResult<()> {
        let session = self
            .session
            .read()
            .await
            .clone()
            .ok_or_else(|| AppError::invalid_input("No authenticated session bound"))?;

        self.insights
            .write()
            .await
            .retain(|insight| insight.id != insight_id);

        self.aggregator
            .store()
            .dismiss(&session.user_id, insight_id)
            .await
    }

    /// Insights targeting one module
    pub async fn insights_for_module(&self, module: &str) -> Vec<Insight> {
        self.insights
            .read()
            .await
            .iter()
            .filter(|insight| insight.target_module == module)
            .cloned()
            .collect()
    }

    /// Number of insights targeting one module
    pub async fn module_notification_count(&self, module: &str) -> usize {
        self.insights
            .read()
            .await
            .iter()
            .filter(|insight| insight.target_module == module)
            .count()
    }

    /// Resolve the route for an actionable insight and dismiss it
    ///
    /// Returns `None` when the id is unknown or the insight is not
    /// actionable; otherwise dismisses the insight and returns its route.
    ///
    /// # Errors
    ///
    /// Returns an error when no user is bound or the store write fails.
    pub async fn open_insight(&self, insight_id: &str) -> AppResult<Option<String>> {
        let target = {
            let insights = self.insights.read().await;
            insights
                .iter()
                .find(|insight| insight.id == insight_id && insight.actionable)
                .map(|insight| insight.target_module.clone())
        };

        let Some(module) = target else {
            return Ok(None);
        };

        self.dismiss(insight_id).await?;
        Ok(Some(route_for_module(&module).to_owned()))
    }

    /// Emit one aggregate alert when urgent high-priority insights are present
    fn emit_urgent_alert(&self, insights: &[Insight]) {
        let urgent_count = insights
            .iter()
            .filter(|insight| {
                insight.kind == InsightKind::Urgent && insight.priority == InsightPriority::High
            })
            .count();

        if urgent_count == 0 {
            return;
        }

        self.alerts.publish(AlertEvent {
            urgent_count,
            message: format!("{urgent_count} insights urgentes requerem sua atenção"),
        });
    }
}
