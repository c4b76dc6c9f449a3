// ABOUTME: Raw source-data shapes returned by the dashboard backend endpoints
// ABOUTME: Deserialization targets only; the wire contract belongs to the backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-module operational statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleStats {
    /// Financial module statistics
    #[serde(default)]
    pub finance: FinanceStats,
}

/// Financial module statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinanceStats {
    /// Number of subscriptions with overdue payments
    #[serde(default)]
    pub overdue_count: u32,
    /// Total overdue amount in the platform currency
    #[serde(default)]
    pub overdue_amount: f64,
    /// Pending subscription/plan-change requests awaiting review
    #[serde(default)]
    pub pending_requests: u32,
}

/// Platform health snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemHealth {
    /// Composite performance score, 0-100
    pub performance_score: f64,
    /// Request error rate as a percentage
    pub error_rate_pct: f64,
    /// Uptime percentage over the reporting window
    #[serde(default)]
    pub uptime_pct: f64,
}

/// An alert raised by backend monitoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriticalAlert {
    /// Alert identifier
    pub id: String,
    /// Short alert title
    pub title: String,
    /// Alert description
    #[serde(default)]
    pub description: String,
    /// Backend-assigned priority label ("critical", "normal", ...)
    #[serde(default)]
    pub priority: String,
    /// Backend-assigned severity label ("high", "medium", ...)
    #[serde(default)]
    pub severity: String,
    /// Module key the alert belongs to
    #[serde(default)]
    pub module: String,
}

impl CriticalAlert {
    /// Whether the alert should surface as an urgent insight
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.priority.eq_ignore_ascii_case("critical") || self.severity.eq_ignore_ascii_case("high")
    }
}

/// One entry from the platform activity feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    /// Entry identifier
    pub id: String,
    /// Acting user or system component
    #[serde(default)]
    pub actor: String,
    /// Action description
    #[serde(default)]
    pub action: String,
    /// Log level label ("error", "warn", "info")
    #[serde(default)]
    pub level: String,
    /// When the action occurred
    pub occurred_at: DateTime<Utc>,
}

impl ActivityLogEntry {
    /// Whether this entry records a failed action
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.level.eq_ignore_ascii_case("error")
    }
}

/// Dashboard key-performance-indicator snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiSnapshot {
    /// Student retention rate as a percentage
    pub retention_rate_pct: f64,
    /// Students with an active subscription
    #[serde(default)]
    pub active_students: u32,
    /// Progress toward the monthly revenue goal, percentage
    #[serde(default)]
    pub monthly_goal_pct: f64,
}

/// Aggregated financial summary for the current month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Gross revenue this month
    pub monthly_revenue: f64,
    /// Month-over-month revenue growth, percentage (negative = decline)
    pub revenue_growth_pct: f64,
    /// Net margin percentage
    #[serde(default)]
    pub net_margin_pct: f64,
}

/// Platform-wide user and coach counts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformCounts {
    /// Enrolled students
    #[serde(default)]
    pub total_students: u32,
    /// Active coaches
    #[serde(default)]
    pub total_coaches: u32,
    /// New signups this month
    #[serde(default)]
    pub new_signups_month: u32,
}

impl PlatformCounts {
    /// Students per coach; students with zero coaches count as unbounded load
    #[must_use]
    pub fn students_per_coach(&self) -> f64 {
        if self.total_coaches == 0 {
            if self.total_students == 0 {
                0.0
            } else {
                f64::INFINITY
            }
        } else {
            f64::from(self.total_students) / f64::from(self.total_coaches)
        }
    }
}

/// Output of the backend predictive-analysis job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictiveAnalysis {
    /// Aggregate churn-risk score, 0-100
    pub churn_risk_score: f64,
    /// Projected revenue growth for next month, percentage
    #[serde(default)]
    pub projected_revenue_growth_pct: f64,
    /// Number of students flagged as at risk of churning
    #[serde(default)]
    pub at_risk_students: u32,
}
