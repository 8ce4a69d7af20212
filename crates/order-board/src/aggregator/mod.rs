//! # Order Aggregator
//!
//! This module implements the aggregator actor that backs one account's
//! order list.
//!
//! ## Overview
//!
//! The aggregator holds the account's orders in memory, refreshes them
//! from an [`OrderDataClient`](order_core::OrderDataClient), merges
//! saved-order notifications from the bus, and publishes two observable
//! signals for the display layer: a busy flag and the grouped, sorted
//! order list.
//!
//! ## Structure
//!
//! - [`actor`] - The [`OrderAggregator`] event loop and its working set
//! - [`client`] - The [`AggregatorClient`] request/observation handle
//! - [`message`] - The [`AggregatorRequest`] channel protocol
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let bus = SavedOrderBus::new(32);
//! let (actor, client) = aggregator::new(account);
//! let ctx = AggregatorContext {
//!     data: Arc::new(backend),
//!     saved_orders: bus.subscribe(),
//! };
//! tokio::spawn(actor.run(ctx));
//!
//! client.load().await?;
//! for group in client.groups() {
//!     // render group.label() and group.orders
//! }
//! ```

pub mod actor;
pub mod client;
pub mod message;

pub use actor::{AggregatorContext, OrderAggregator};
pub use client::AggregatorClient;
pub use message::{AggregatorRequest, Response};

use order_core::Account;

/// Creates a new aggregator and its client for `account`.
pub fn new(account: Account) -> (OrderAggregator, AggregatorClient) {
    OrderAggregator::new(account, 32)
}
