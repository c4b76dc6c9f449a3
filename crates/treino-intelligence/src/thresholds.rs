// ABOUTME: Threshold table for insight classification rules
// ABOUTME: Named constants for every trigger condition and fixed confidence score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

//! Classification thresholds
//!
//! Every heuristic rule reads its trigger bound and confidence from this
//! table rather than from inline literals, so rules can be tuned without
//! touching classifier control flow.

use serde::{Deserialize, Serialize};

/// Fixed confidence attached to overdue-payment insights
pub const OVERDUE_CONFIDENCE: u8 = 95;

/// Fixed confidence attached to critical-alert insights
pub const CRITICAL_ALERT_CONFIDENCE: u8 = 98;

/// Pending requests above this count trigger a warning
pub const PENDING_REQUESTS_WARNING: u32 = 5;

/// Performance scores below this trigger a warning
pub const PERFORMANCE_SCORE_WARNING: f64 = 85.0;

/// Error rates above this percentage trigger an urgent insight
pub const ERROR_RATE_URGENT_PCT: f64 = 5.0;

/// Revenue growth above this percentage is worth celebrating
pub const REVENUE_GROWTH_SUCCESS_PCT: f64 = 10.0;

/// Revenue decline below this percentage triggers a warning
pub const REVENUE_DROP_WARNING_PCT: f64 = -5.0;

/// Retention rates below this percentage trigger a warning
pub const RETENTION_WARNING_PCT: f64 = 80.0;

/// Student-to-coach ratios above this trigger a recruitment warning
pub const STUDENTS_PER_COACH_WARNING: f64 = 30.0;

/// Churn-risk scores above this trigger an urgent insight
pub const CHURN_RISK_URGENT: f64 = 70.0;

/// Error-level activity entries above this count trigger a warning
pub const FAILED_ACTIVITY_WARNING: usize = 10;

/// Login gaps longer than this many days produce a welcome-back insight
pub const INACTIVE_DAYS_INFO: i64 = 7;

/// Trigger thresholds and confidence constants for every classification rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightThresholds {
    /// Confidence attached to overdue-payment insights
    pub overdue_confidence: u8,
    /// Pending requests above this count trigger a warning
    pub pending_requests_warning: u32,
    /// Performance scores below this trigger a warning
    pub performance_score_warning: f64,
    /// Error rates above this percentage trigger an urgent insight
    pub error_rate_urgent_pct: f64,
    /// Confidence attached to critical-alert insights
    pub critical_alert_confidence: u8,
    /// Revenue growth above this percentage yields a success insight
    pub revenue_growth_success_pct: f64,
    /// Revenue decline below this percentage triggers a warning
    pub revenue_drop_warning_pct: f64,
    /// Retention rates below this percentage trigger a warning
    pub retention_warning_pct: f64,
    /// Student-to-coach ratios above this trigger a recruitment warning
    pub students_per_coach_warning: f64,
    /// Churn-risk scores above this trigger an urgent insight
    pub churn_risk_urgent: f64,
    /// Error-level activity entries above this count trigger a warning
    pub failed_activity_warning: usize,
    /// Login gaps longer than this many days produce a welcome-back insight
    pub inactive_days_info: i64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            overdue_confidence: OVERDUE_CONFIDENCE,
            pending_requests_warning: PENDING_REQUESTS_WARNING,
            performance_score_warning: PERFORMANCE_SCORE_WARNING,
            error_rate_urgent_pct: ERROR_RATE_URGENT_PCT,
            critical_alert_confidence: CRITICAL_ALERT_CONFIDENCE,
            revenue_growth_success_pct: REVENUE_GROWTH_SUCCESS_PCT,
            revenue_drop_warning_pct: REVENUE_DROP_WARNING_PCT,
            retention_warning_pct: RETENTION_WARNING_PCT,
            students_per_coach_warning: STUDENTS_PER_COACH_WARNING,
            churn_risk_urgent: CHURN_RISK_URGENT,
            failed_activity_warning: FAILED_ACTIVITY_WARNING,
            inactive_days_info: INACTIVE_DAYS_INFO,
        }
    }
}
