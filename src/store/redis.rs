// ABOUTME: Redis key-value store implementation with connection pooling
// ABOUTME: Provides durable persistence for multi-instance deployments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

use super::{KvStore, StoreKey};
use crate::config::environment::RedisConnectionConfig;
use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::AsyncCommands;
use std::time::Duration;
use tracing::{error, info, warn};
use treino_core::errors::{AppError, AppResult};

/// Redis store implementation with connection pooling
///
/// Uses the Redis `ConnectionManager` for automatic reconnection. Records
/// are written without expiry: they survive until explicitly overwritten or
/// dismissed, mirroring the durable-store contract.
#[derive(Clone)]
pub struct RedisStore {
    manager: ConnectionManager,
}

impl RedisStore {
    /// Connect to Redis and build a store instance
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established after the
    /// configured number of retries.
    pub async fn connect(redis_url: &str, config: &RedisConnectionConfig) -> AppResult<Self> {
        info!(
            "Connecting to Redis at {} (timeout={}s, response_timeout={}s, retries={})",
            redis_url,
            config.connection_timeout_secs,
            config.response_timeout_secs,
            config.initial_connection_retries
        );

        let client = redis::Client::open(redis_url)
            .map_err(|e| AppError::storage(format!("Failed to create Redis client: {e}")))?;

        let manager = Self::connect_with_retry(&client, config).await?;

        info!("Successfully connected to Redis");
        Ok(Self { manager })
    }

    /// Connect to Redis with exponential backoff retry on failure
    async fn connect_with_retry(
        client: &redis::Client,
        config: &RedisConnectionConfig,
    ) -> AppResult<ConnectionManager> {
        let manager_config = ConnectionManagerConfig::new()
            .set_connection_timeout(Duration::from_secs(config.connection_timeout_secs))
            .set_response_timeout(Duration::from_secs(config.response_timeout_secs))
            .set_number_of_retries(config.reconnection_retries)
            .set_max_delay(config.max_retry_delay_ms);

        let max_retries = config.initial_connection_retries;
        let mut delay_ms = config.initial_retry_delay_ms;
        let mut last_error = None;

        for attempt in 0..=max_retries {
            match ConnectionManager::new_with_config(client.clone(), manager_config.clone()).await {
                Ok(manager) => {
                    if attempt > 0 {
                        info!("Redis connection established after {} retries", attempt);
                    }
                    return Ok(manager);
                }
                Err(e) => {
                    last_error = Some(e);

                    if attempt < max_retries {
                        warn!(
                            "Redis connection attempt {}/{} failed, retrying in {}ms: {}",
                            attempt + 1,
                            max_retries + 1,
                            delay_ms,
                            last_error
                                .as_ref()
                                .map_or_else(|| "unknown".to_owned(), ToString::to_string)
                        );
                        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                        // Exponential backoff with cap
                        delay_ms = (delay_ms * 2).min(config.max_retry_delay_ms);
                    }
                }
            }
        }

        Err(AppError::storage(format!(
            "Failed to connect to Redis after {} attempts: {}",
            max_retries + 1,
            last_error.map_or_else(|| "unknown error".to_owned(), |e| e.to_string())
        )))
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get_raw(&self, key: &StoreKey) -> AppResult<Option<String>> {
        let mut conn = self.manager.clone();

        conn.get(key.to_string()).await.map_err(|e| {
            error!("Redis GET operation failed: {}", e);
            AppError::storage(format!("Store error: {e}"))
        })
    }

    async fn set_raw(&self, key: &StoreKey, value: String) -> AppResult<()> {
        let mut conn = self.manager.clone();

        // Plain SET, no expiry: records persist until overwritten or dismissed
        conn.set::<_, _, ()>(key.to_string(), value)
            .await
            .map_err(|e| {
                error!("Redis SET operation failed: {}", e);
                AppError::storage(format!("Store error: {e}"))
            })
    }

    async fn delete(&self, key: &StoreKey) -> AppResult<()> {
        let mut conn = self.manager.clone();

        conn.del::<_, ()>(key.to_string()).await.map_err(|e| {
            error!("Redis DEL operation failed: {}", e);
            AppError::storage(format!("Store error: {e}"))
        })
    }

    async fn health_check(&self) -> AppResult<()> {
        let mut conn = self.manager.clone();

        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(|e| AppError::storage(format!("Redis health check failed: {e}")))?;
        Ok(())
    }

    async fn clear_all(&self) -> AppResult<()> {
        let mut conn = self.manager.clone();

        // Scoped to this engine's key namespace; SCAN avoids blocking Redis
        let mut cursor = 0u64;
        loop {
            let (next_cursor, keys): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg("ai_*")
                .query_async(&mut conn)
                .await
                .map_err(|e| AppError::storage(format!("Store error: {e}")))?;

            if !keys.is_empty() {
                conn.del::<_, ()>(keys)
                    .await
                    .map_err(|e| AppError::storage(format!("Store error: {e}")))?;
            }

            cursor = next_cursor;
            if cursor == 0 {
                break;
            }
        }

        Ok(())
    }
}
