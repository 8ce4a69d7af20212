//! # Saved-Order Bus
//!
//! Announcement channel for orders persisted elsewhere in the process -
//! an edit screen, a background sync. Publishers send the full saved
//! record; each aggregator holds its own subscription and applies the
//! records for its account.
//!
//! Subscriptions are plain values: one is handed to the aggregator when
//! it starts and drops with the actor task, so a discarded aggregator
//! cannot leave a handler behind.

use order_core::Order;
use tokio::sync::broadcast;
use tracing::debug;

/// Clonable publish/subscribe handle over a `broadcast` channel.
#[derive(Clone)]
pub struct SavedOrderBus {
    sender: broadcast::Sender<Order>,
}

impl SavedOrderBus {
    /// Creates a bus retaining up to `capacity` undelivered orders per
    /// subscriber; a slow subscriber past that sees a lag notice, not a
    /// stall.
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Announces a saved order to every live subscriber.
    pub fn publish(&self, order: Order) {
        match self.sender.send(order) {
            Ok(subscribers) => debug!(subscribers, "Published saved order"),
            Err(_) => debug!("No subscribers for saved order"),
        }
    }

    /// Opens a new subscription receiving orders published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Order> {
        self.sender.subscribe()
    }
}
