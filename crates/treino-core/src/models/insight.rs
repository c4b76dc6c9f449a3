// ABOUTME: Insight record and its closed kind/priority enumerations
// ABOUTME: Normalized classified observation about platform state shown to dashboard users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum confidence score an insight can carry
pub const MAX_CONFIDENCE: u8 = 100;

/// Categories of insights shown to dashboard users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Requires immediate attention (overdue payments, error spikes)
    Urgent,
    /// Degrading condition worth acting on soon
    Warning,
    /// Informational observation
    Info,
    /// Positive development (revenue growth, goals met)
    Success,
    /// Directional projection from predictive analysis
    Trend,
}

/// Priority levels used for ranking insights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightPriority {
    /// Surface first
    High,
    /// Default priority
    Medium,
    /// Background observations
    Low,
}

impl InsightPriority {
    /// Integer weight used for ranking (`high`=3, `medium`=2, `low`=1)
    #[must_use]
    pub const fn weight(self) -> u32 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

/// A single normalized, classified observation about platform state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    /// Unique identifier (UUID v4; merge logic deduplicates by this id)
    pub id: String,
    /// Category of the insight
    pub kind: InsightKind,
    /// Short user-facing title
    pub title: String,
    /// User-facing message body
    pub message: String,
    /// Whether the insight offers a navigation action
    pub actionable: bool,
    /// Ranking priority
    pub priority: InsightPriority,
    /// Opaque module key resolved to a route by the navigation table
    pub target_module: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Heuristic self-reported certainty, 0-100
    pub confidence: u8,
    /// Suggested follow-up shown alongside actionable insights
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_action: Option<String>,
    /// Opaque supporting data from the originating source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_payload: Option<serde_json::Value>,
}

impl Insight {
    /// Create a new insight with a generated id and default confidence
    #[must_use]
    pub fn new(
        kind: InsightKind,
        priority: InsightPriority,
        title: impl Into<String>,
        message: impl Into<String>,
        target_module: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            title: title.into(),
            message: message.into(),
            actionable: false,
            priority,
            target_module: target_module.into(),
            created_at: Utc::now(),
            confidence: 50,
            recommended_action: None,
            source_payload: None,
        }
    }

    /// Override the generated id (fixed ids keep repeated fallbacks mergeable)
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the confidence score, clamped to `[0, 100]`
    #[must_use]
    pub fn with_confidence(mut self, confidence: u8) -> Self {
        self.confidence = confidence.min(MAX_CONFIDENCE);
        self
    }

    /// Mark the insight actionable
    #[must_use]
    pub const fn actionable(mut self) -> Self {
        self.actionable = true;
        self
    }

    /// Attach a recommended action
    #[must_use]
    pub fn with_recommended_action(mut self, action: impl Into<String>) -> Self {
        self.recommended_action = Some(action.into());
        self
    }

    /// Attach opaque supporting data from the originating source
    #[must_use]
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.source_payload = Some(payload);
        self
    }

    /// Ranking score: priority weight multiplied by confidence
    #[must_use]
    pub fn ranking_score(&self) -> u32 {
        self.priority.weight() * u32::from(self.confidence)
    }
}
