//! # Aggregator Errors
//!
//! Splits channel-plumbing failures (the actor is gone) from collaborator
//! failures surfaced by a load, so callers can match on what actually
//! went wrong.

use order_core::DataClientError;

/// Errors returned by the aggregator client.
#[derive(Debug, thiserror::Error)]
pub enum AggregatorError {
    #[error("aggregator closed")]
    Closed,
    #[error("aggregator dropped response channel")]
    Dropped,
    #[error("order fetch failed: {0}")]
    Fetch(#[from] DataClientError),
}
