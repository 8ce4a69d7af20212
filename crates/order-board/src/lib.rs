//! # Order Board
//!
//! Actor-based presentation state for one customer account's orders: an
//! aggregator that loads from an async data collaborator, merges
//! saved-order notifications, and publishes a busy flag plus a grouped,
//! sorted order list for a display layer to render as-is.

pub mod aggregator;
pub mod bus;
pub mod error;
pub mod lifecycle;

// Re-export core types for convenience
pub use aggregator::{AggregatorClient, AggregatorContext, OrderAggregator};
pub use bus::SavedOrderBus;
pub use error::AggregatorError;
pub use lifecycle::OrderBoard;
