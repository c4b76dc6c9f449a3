// ABOUTME: Durable key-value persistence for insight lists and login metadata
// ABOUTME: Pluggable backends (in-memory, Redis) behind a provider trait, no TTL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

//! Insight store
//!
//! Records are durable until overwritten or dismissed; there is no expiry.
//! Business logic never reaches for a concrete backend directly — it goes
//! through [`factory::InsightStore`], which injects one of the pluggable
//! [`KvStore`] implementations and layers the typed repository operations
//! (login metadata, active insight lists, dismissal) on top.

/// Backend selection and the typed repository operations
pub mod factory;
/// In-memory store implementation
pub mod memory;
/// Redis store implementation
pub mod redis;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::fmt;
use treino_core::errors::AppResult;

/// Logical key prefix for last-login metadata records
pub const LAST_LOGIN_KEY_PREFIX: &str = "ai_last_login_data_";

/// Logical key prefix for active insight lists
pub const ACTIVE_INSIGHTS_KEY_PREFIX: &str = "ai_active_notifications_";

/// The two record types the store persists per user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreRecord {
    /// Last-login metadata (`ai_last_login_data_<userId>`)
    LastLogin,
    /// Active insight list (`ai_active_notifications_<userId>`)
    ActiveInsights,
}

/// Composite key scoping a record type to one user
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreKey {
    /// Owner user ID
    pub user_id: String,
    /// Record type under this key
    pub record: StoreRecord,
}

impl StoreKey {
    /// Key for a user's last-login metadata
    #[must_use]
    pub fn last_login(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            record: StoreRecord::LastLogin,
        }
    }

    /// Key for a user's active insight list
    #[must_use]
    pub fn active_insights(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            record: StoreRecord::ActiveInsights,
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.record {
            StoreRecord::LastLogin => write!(f, "{LAST_LOGIN_KEY_PREFIX}{}", self.user_id),
            StoreRecord::ActiveInsights => {
                write!(f, "{ACTIVE_INSIGHTS_KEY_PREFIX}{}", self.user_id)
            }
        }
    }
}

/// Key-value store trait for pluggable backend implementations
///
/// Backends are dumb string stores: serialization policy (and the
/// degrade-on-corrupt rule) lives in the typed repository layer.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Retrieve the raw serialized value for a key, if present
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails
    async fn get_raw(&self, key: &StoreKey) -> AppResult<Option<String>>;

    /// Store the raw serialized value for a key, overwriting any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails
    async fn set_raw(&self, key: &StoreKey, value: String) -> AppResult<()>;

    /// Remove a key; removing an absent key is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the backend delete fails
    async fn delete(&self, key: &StoreKey) -> AppResult<()>;

    /// Verify the backend is reachable
    ///
    /// # Errors
    ///
    /// Returns an error if the health check fails
    async fn health_check(&self) -> AppResult<()>;

    /// Remove every record (for testing/admin)
    ///
    /// # Errors
    ///
    /// Returns an error if the clear operation fails
    async fn clear_all(&self) -> AppResult<()>;
}

/// Parse a stored JSON value into its record type
///
/// This is the explicit deserialization seam: callers decide what a parse
/// failure degrades to (the repository layer logs and falls back to the
/// record's default), so "empty because absent" and "empty because corrupt"
/// remain distinguishable.
///
/// # Errors
///
/// Returns the underlying JSON error when the stored value is corrupt or
/// written by a different schema.
pub fn parse_stored<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(raw)
}
