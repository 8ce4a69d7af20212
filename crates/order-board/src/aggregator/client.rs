//! # Aggregator Client
//!
//! This module defines the client for communicating with an
//! [`OrderAggregator`](super::OrderAggregator).

use crate::aggregator::message::AggregatorRequest;
use crate::error::AggregatorError;
use order_core::{Order, OrderGroup};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::debug;

/// A cheap-to-clone handle for one account's aggregator.
///
/// Requests travel over a Tokio mpsc channel and resolve via oneshot
/// responses; the derived state (busy flag, grouping) is read directly
/// from `watch` channels without contacting the actor.
#[derive(Clone)]
pub struct AggregatorClient {
    sender: mpsc::Sender<AggregatorRequest>,
    busy: watch::Receiver<bool>,
    groups: watch::Receiver<Vec<OrderGroup>>,
}

impl AggregatorClient {
    pub(crate) fn new(
        sender: mpsc::Sender<AggregatorRequest>,
        busy: watch::Receiver<bool>,
        groups: watch::Receiver<Vec<OrderGroup>>,
    ) -> Self {
        Self {
            sender,
            busy,
            groups,
        }
    }

    /// Refreshes the working set from the data collaborator.
    ///
    /// A call made while a refresh is already running is dropped silently
    /// and resolves `Ok` at once: the busy flag is checked here before the
    /// request is sent, and the actor drops any request that still slips
    /// in while a fetch is in flight. Fetch failures propagate as
    /// [`AggregatorError::Fetch`]; the pre-load working set survives them.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self) -> Result<(), AggregatorError> {
        if *self.busy.borrow() {
            debug!("load already in progress, dropping request");
            return Ok(());
        }
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(AggregatorRequest::Load { respond_to })
            .await
            .map_err(|_| AggregatorError::Closed)?;
        response.await.map_err(|_| AggregatorError::Dropped)?
    }

    /// The working set as the actor holds it, in arrival order.
    pub async fn orders(&self) -> Result<Vec<Order>, AggregatorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(AggregatorRequest::Snapshot { respond_to })
            .await
            .map_err(|_| AggregatorError::Closed)?;
        response.await.map_err(|_| AggregatorError::Dropped)?
    }

    /// Whether a load is currently running.
    pub fn is_busy(&self) -> bool {
        *self.busy.borrow()
    }

    /// The current presentation grouping.
    pub fn groups(&self) -> Vec<OrderGroup> {
        self.groups.borrow().clone()
    }

    /// Subscribes to busy-state changes from this point on. Read the
    /// current value with [`is_busy`](Self::is_busy).
    pub fn watch_busy(&self) -> watch::Receiver<bool> {
        let mut receiver = self.busy.clone();
        receiver.mark_unchanged();
        receiver
    }

    /// Subscribes to grouping changes from this point on; read the
    /// current value with [`groups`](Self::groups). The display layer
    /// re-renders the whole grouping on every change; no diffing
    /// contract is offered.
    pub fn watch_groups(&self) -> watch::Receiver<Vec<OrderGroup>> {
        let mut receiver = self.groups.clone();
        receiver.mark_unchanged();
        receiver
    }
}
