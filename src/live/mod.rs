//! Live statistics updates
//!
//! [`LiveUpdateChannel`] is an explicitly constructed push channel. The
//! transport hands it raw events via [`LiveUpdateChannel::deliver`]; each
//! [`Subscription`] sees the most recent statistics (last write wins, older
//! undelivered values are dropped). A [`Dashboard`] seeds itself from a
//! one-shot fetch that never waits on the channel.

mod error;
pub mod transport;

pub use error::LiveError;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::api::WordCloudApi;

/// Event name carrying dashboard statistics.
pub const DASHBOARD_UPDATE: &str = "dashboard_update";

/// Aggregate usage statistics shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub total_users: Option<u64>,
    pub total_wordclouds: Option<u64>,
    pub active_sessions: Option<u64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct UpdatePayload {
    statistics: Statistics,
}

/// Push channel for [`Statistics`].
#[derive(Debug)]
pub struct LiveUpdateChannel {
    sender: watch::Sender<Option<Statistics>>,
}

impl LiveUpdateChannel {
    /// Create an open channel with no statistics yet.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self { sender }
    }

    /// Register a new subscriber.
    pub fn subscribe(&self) -> Subscription {
        let subscription = Subscription {
            receiver: self.sender.subscribe(),
        };
        debug!(subscribers = self.subscriber_count(), "live subscriber added");
        subscription
    }

    /// Drop a subscriber.
    pub fn unsubscribe(&self, subscription: Subscription) {
        drop(subscription);
        debug!(subscribers = self.subscriber_count(), "live subscriber removed");
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// The most recently published statistics, if any.
    pub fn latest(&self) -> Option<Statistics> {
        self.sender.borrow().clone()
    }

    /// Replace the current statistics and wake every subscriber.
    pub fn publish(&self, statistics: Statistics) {
        self.sender.send_replace(Some(statistics));
    }

    /// Handle one raw transport event. Returns whether it was published.
    ///
    /// Unknown event names are ignored.
    pub fn deliver(&self, event: &str, payload: Value) -> Result<bool, LiveError> {
        if event != DASHBOARD_UPDATE {
            debug!(event, "ignoring live event");
            return Ok(false);
        }
        let update: UpdatePayload = serde_json::from_value(payload)
            .map_err(|e| LiveError::MalformedPayload(e.to_string()))?;
        self.publish(update.statistics);
        Ok(true)
    }

    /// Stop the channel; pending `next()` calls return `None`.
    pub fn close(self) {
        debug!(subscribers = self.subscriber_count(), "live channel closed");
    }
}

impl Default for LiveUpdateChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// A receiver of live statistics.
#[derive(Debug)]
pub struct Subscription {
    receiver: watch::Receiver<Option<Statistics>>,
}

impl Subscription {
    /// Wait for the next publication. `None` once the channel is closed.
    pub async fn next(&mut self) -> Option<Statistics> {
        loop {
            self.receiver.changed().await.ok()?;
            if let Some(statistics) = self.receiver.borrow_and_update().clone() {
                return Some(statistics);
            }
        }
    }
}

/// Dashboard-style consumer of statistics.
pub struct Dashboard {
    api: Arc<dyn WordCloudApi>,
    timeout: Duration,
    statistics: Option<Statistics>,
}

impl Dashboard {
    /// Create a dashboard that fetches through `api`.
    pub fn new(api: Arc<dyn WordCloudApi>, timeout: Duration) -> Self {
        Self {
            api,
            timeout,
            statistics: None,
        }
    }

    /// One-shot fetch seeding the dashboard.
    pub async fn load(&mut self) -> Result<&Statistics, LiveError> {
        let statistics = match tokio::time::timeout(self.timeout, self.api.dashboard_statistics())
            .await
        {
            Ok(result) => result?,
            Err(_) => {
                warn!("dashboard statistics timed out after {:?}", self.timeout);
                return Err(LiveError::Timeout(self.timeout));
            }
        };
        Ok(self.statistics.insert(statistics))
    }

    /// Replace the cached statistics wholesale.
    pub fn apply(&mut self, statistics: Statistics) {
        self.statistics = Some(statistics);
    }

    /// Wait for the next live update and apply it.
    pub async fn follow(&mut self, subscription: &mut Subscription) -> Option<&Statistics> {
        let statistics = subscription.next().await?;
        Some(self.statistics.insert(statistics))
    }

    /// Statistics currently shown, if any.
    pub fn statistics(&self) -> Option<&Statistics> {
        self.statistics.as_ref()
    }
}
