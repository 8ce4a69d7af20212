//! # Order Data Collaborator
//!
//! The seam between the aggregator and whatever actually stores orders.
//! Implementations talk to a remote service, a database, or an in-memory
//! fixture; the aggregator only ever sees this trait.

use crate::error::DataClientError;
use crate::model::{AccountId, Order};
use async_trait::async_trait;

/// Asynchronous source of one account's orders.
///
/// The two fetches are separate calls on the backend, so they are separate
/// methods here. Callers that need both must decide how to combine partial
/// failure; the aggregator treats the pair as atomic and discards both
/// results if either call fails.
#[async_trait]
pub trait OrderDataClient: Send + Sync {
    /// Fetch the account's currently open orders.
    async fn fetch_open_orders(&self, account: &AccountId)
        -> Result<Vec<Order>, DataClientError>;

    /// Fetch the account's closed orders.
    async fn fetch_closed_orders(
        &self,
        account: &AccountId,
    ) -> Result<Vec<Order>, DataClientError>;
}
