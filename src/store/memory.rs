// ABOUTME: In-memory key-value store implementation over a concurrent map
// ABOUTME: Used by tests and single-process deployments without Redis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

use super::{KvStore, StoreKey};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use treino_core::errors::AppResult;

/// In-memory store backed by a concurrent hash map
///
/// Records live for the lifetime of the process. Cloning is cheap: clones
/// share the same underlying map, matching the durable-store semantics the
/// repository layer expects.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<DashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get_raw(&self, key: &StoreKey) -> AppResult<Option<String>> {
        Ok(self.entries.get(&key.to_string()).map(|v| v.value().clone()))
    }

    async fn set_raw(&self, key: &StoreKey, value: String) -> AppResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &StoreKey) -> AppResult<()> {
        self.entries.remove(&key.to_string());
        Ok(())
    }

    async fn health_check(&self) -> AppResult<()> {
        // The in-memory store is always healthy
        Ok(())
    }

    async fn clear_all(&self) -> AppResult<()> {
        self.entries.clear();
        Ok(())
    }
}
