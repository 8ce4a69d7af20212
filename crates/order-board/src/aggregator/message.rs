//! # Aggregator Messages
//!
//! Request types sent from the [`AggregatorClient`](super::AggregatorClient)
//! to the [`OrderAggregator`](super::OrderAggregator) over its mpsc channel.

use crate::error::AggregatorError;
use order_core::Order;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the aggregator.
pub type Response<T> = oneshot::Sender<Result<T, AggregatorError>>;

/// Internal message type sent to the aggregator to request operations.
///
/// Observation of the derived state does not go through this enum: the
/// busy flag and the grouping are published on `watch` channels, so
/// readers never have to round-trip through the actor.
#[derive(Debug)]
pub enum AggregatorRequest {
    /// Refresh the working set from the data collaborator. Dropped if a
    /// refresh is already in flight.
    Load { respond_to: Response<()> },
    /// The current working set, in arrival order.
    Snapshot { respond_to: Response<Vec<Order>> },
}
