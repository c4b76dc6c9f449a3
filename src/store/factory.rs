// ABOUTME: Store factory for environment-based backend selection
// ABOUTME: Typed repository operations for login metadata and active insight lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

use super::{memory::MemoryStore, parse_stored, redis::RedisStore, KvStore, StoreKey};
use crate::config::environment::{EngineConfig, RedisConnectionConfig};
use chrono::Utc;
use tracing::{info, warn};
use treino_core::errors::{AppError, AppResult};
use treino_core::models::{Insight, LastLoginRecord};

/// Selected store backend
#[derive(Clone)]
enum StoreBackend {
    Memory(MemoryStore),
    Redis(RedisStore),
}

/// Unified insight store with typed repository operations
///
/// Backend I/O errors propagate to callers; corrupt stored data never does —
/// it degrades to the record's default value and is logged with the parse
/// error, keeping "absent" and "corrupt" distinguishable in the logs.
#[derive(Clone)]
pub struct InsightStore {
    backend: StoreBackend,
}

impl InsightStore {
    /// Create a store backed by the given in-memory implementation
    #[must_use]
    pub const fn memory(store: MemoryStore) -> Self {
        Self {
            backend: StoreBackend::Memory(store),
        }
    }

    /// Create a store from the engine configuration
    ///
    /// Selects Redis when `redis_url` is configured, in-memory otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the Redis connection cannot be established.
    pub async fn new(config: &EngineConfig) -> AppResult<Self> {
        match &config.redis_url {
            Some(url) => {
                let store = RedisStore::connect(url, &config.redis_connection).await?;
                Ok(Self {
                    backend: StoreBackend::Redis(store),
                })
            }
            None => {
                info!("REDIS_URL not set; using in-memory insight store");
                Ok(Self::memory(MemoryStore::new()))
            }
        }
    }

    /// Create a store from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or the Redis connection fails.
    pub async fn from_env() -> AppResult<Self> {
        let redis_url = std::env::var("REDIS_URL").ok();
        match redis_url {
            Some(url) => {
                let store = RedisStore::connect(&url, &RedisConnectionConfig::from_env()).await?;
                Ok(Self {
                    backend: StoreBackend::Redis(store),
                })
            }
            None => {
                info!("REDIS_URL not set; using in-memory insight store");
                Ok(Self::memory(MemoryStore::new()))
            }
        }
    }

    fn kv(&self) -> &dyn KvStore {
        match &self.backend {
            StoreBackend::Memory(store) => store,
            StoreBackend::Redis(store) => store,
        }
    }

    /// Retrieve a user's last-login metadata
    ///
    /// Missing and corrupt records both yield `None`; the corrupt case is
    /// logged with the underlying parse error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails.
    pub async fn last_login(&self, user_id: &str) -> AppResult<Option<LastLoginRecord>> {
        let key = StoreKey::last_login(user_id);
        let Some(raw) = self.kv().get_raw(&key).await? else {
            return Ok(None);
        };

        match parse_stored::<LastLoginRecord>(&raw) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                warn!(key = %key, error = %e, "Corrupt last-login record; treating as absent");
                Ok(None)
            }
        }
    }

    /// Record a login for the user and return the updated metadata
    ///
    /// Read-modify-write without concurrency protection: the engine runs one
    /// instance per authenticated session, so competing writers do not occur
    /// in the supported deployment model.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read or write fails.
    pub async fn record_login(&self, user_id: &str) -> AppResult<LastLoginRecord> {
        let now = Utc::now();
        let record = match self.last_login(user_id).await? {
            Some(previous) => previous.next_session(now),
            None => LastLoginRecord::first_login(user_id, now),
        };

        let raw = serde_json::to_string(&record)
            .map_err(|e| AppError::serialization(format!("Login record encoding failed: {e}")))?;
        self.kv()
            .set_raw(&StoreKey::last_login(user_id), raw)
            .await?;

        Ok(record)
    }

    /// Retrieve a user's active insight list
    ///
    /// Missing and corrupt lists both yield an empty list; the corrupt case
    /// is logged with the underlying parse error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails.
    pub async fn active_insights(&self, user_id: &str) -> AppResult<Vec<Insight>> {
        let key = StoreKey::active_insights(user_id);
        let Some(raw) = self.kv().get_raw(&key).await? else {
            return Ok(Vec::new());
        };

        match parse_stored::<Vec<Insight>>(&raw) {
            Ok(insights) => Ok(insights),
            Err(e) => {
                warn!(key = %key, error = %e, "Corrupt insight list; treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Overwrite a user's active insight list
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails.
    pub async fn set_active_insights(&self, user_id: &str, insights: &[Insight]) -> AppResult<()> {
        let raw = serde_json::to_string(insights)
            .map_err(|e| AppError::serialization(format!("Insight list encoding failed: {e}")))?;
        self.kv()
            .set_raw(&StoreKey::active_insights(user_id), raw)
            .await
    }

    /// Remove one insight from a user's active list by id
    ///
    /// A no-op when the id is not present.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read or write fails.
    pub async fn dismiss(&self, user_id: &str, insight_id: &str) -> AppResult<()> {
        let mut insights = self.active_insights(user_id).await?;
        let before = insights.len();
        insights.retain(|insight| insight.id != insight_id);

        if insights.len() == before {
            return Ok(());
        }

        self.set_active_insights(user_id, &insights).await
    }

    /// Verify the backing store is reachable
    ///
    /// # Errors
    ///
    /// Returns an error if the health check fails.
    pub async fn health_check(&self) -> AppResult<()> {
        self.kv().health_check().await
    }

    /// Remove every record (for testing/admin)
    ///
    /// # Errors
    ///
    /// Returns an error if the clear operation fails.
    pub async fn clear_all(&self) -> AppResult<()> {
        self.kv().clear_all().await
    }
}
