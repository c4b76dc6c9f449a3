// ABOUTME: Last-login metadata record persisted per user
// ABOUTME: Created or overwritten on every session initialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-user login metadata, overwritten on every session initialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastLoginRecord {
    /// Owner user ID
    pub user_id: String,
    /// The login before the current one (equals `current_login_at` on first login)
    pub previous_login_at: DateTime<Utc>,
    /// The login that created this record
    pub current_login_at: DateTime<Utc>,
    /// Monotonically increasing session counter
    pub session_count: u64,
}

impl LastLoginRecord {
    /// Record for a user's very first observed login
    #[must_use]
    pub fn first_login(user_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            previous_login_at: now,
            current_login_at: now,
            session_count: 1,
        }
    }

    /// Successor record: the old current login becomes the previous one
    #[must_use]
    pub fn next_session(&self, now: DateTime<Utc>) -> Self {
        Self {
            user_id: self.user_id.clone(),
            previous_login_at: self.current_login_at,
            current_login_at: now,
            session_count: self.session_count.saturating_add(1),
        }
    }

    /// Whole days between the previous and current login
    #[must_use]
    pub fn days_since_previous_login(&self) -> i64 {
        (self.current_login_at - self.previous_login_at).num_days()
    }
}
