// ABOUTME: Aggregate alert broadcasting for urgent insights
// ABOUTME: One broadcast event per refresh, never one per insight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

/// Broadcast channel capacity for alert events
const ALERT_CHANNEL_CAPACITY: usize = 16;

/// Aggregate notification emitted when a refresh surfaces urgent insights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertEvent {
    /// Number of urgent high-priority insights in the refreshed list
    pub urgent_count: usize,
    /// User-facing aggregate message
    pub message: String,
}

/// Fan-out of alert events to UI subscribers
///
/// Wraps a broadcast channel: publishing with no subscribers is not an
/// error, and lagged subscribers drop old events rather than blocking the
/// publisher.
#[derive(Debug, Clone)]
pub struct AlertBroadcaster {
    tx: broadcast::Sender<AlertEvent>,
}

impl Default for AlertBroadcaster {
    fn default() -> Self {
        let (tx, _) = broadcast::channel(ALERT_CHANNEL_CAPACITY);
        Self { tx }
    }
}

impl AlertBroadcaster {
    /// Create a broadcaster with the default channel capacity
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to alert events
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<AlertEvent> {
        self.tx.subscribe()
    }

    /// Publish one aggregate alert event
    pub fn publish(&self, event: AlertEvent) {
        // send only fails when no receiver is subscribed, which is fine
        if self.tx.send(event).is_err() {
            debug!("Alert published with no active subscribers");
        }
    }
}
