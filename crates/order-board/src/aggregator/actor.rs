//! # Order Aggregator Actor
//!
//! This module defines the `OrderAggregator`, the actor that owns one
//! account's working set of orders and derives the grouped view from it.
//!
//! # Architecture Note
//! The actor owns its state exclusively and processes messages
//! sequentially, so the working-set mutation and the grouping
//! recomputation always happen as one uninterrupted step - no lock is
//! needed even though saved-order notifications can arrive while a load
//! is in flight.
//!
//! **Load discipline**: the two backend fetches run in a spawned task and
//! report back over a completion channel. The loop therefore keeps
//! serving notifications during a load, while the in-flight marker makes
//! a second load request a no-op instead of a queued duplicate. The
//! working set is only replaced once both fetches have succeeded; a
//! failure leaves it exactly as it was and still clears the busy flag.

use crate::aggregator::client::AggregatorClient;
use crate::aggregator::message::AggregatorRequest;
use crate::error::AggregatorError;
use order_core::{
    group_orders, sort_orders, Account, DataClientError, Order, OrderDataClient, OrderGroup,
};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tracing::{debug, info, warn};

/// Both fetches of one load, or the first error either of them hit.
type FetchOutcome = Result<(Vec<Order>, Vec<Order>), DataClientError>;

/// Dependencies injected at runtime via [`OrderAggregator::run`].
///
/// Late binding keeps construction free of wiring concerns: the actor and
/// its client are created first, the collaborator and the bus subscription
/// are handed over when the loop starts. The subscription lives and dies
/// with the actor task, so no handler can outlive its aggregator.
pub struct AggregatorContext {
    pub data: Arc<dyn OrderDataClient>,
    pub saved_orders: broadcast::Receiver<Order>,
}

/// The actor that maintains the authoritative in-memory order list for
/// one account and publishes the derived grouping.
///
/// The working set holds at most one order per identity key, in arrival
/// order; the grouping is recomputed wholesale from it on every change
/// and never patched incrementally.
pub struct OrderAggregator {
    account: Account,
    receiver: mpsc::Receiver<AggregatorRequest>,
    working_set: Vec<Order>,
    busy_tx: watch::Sender<bool>,
    groups_tx: watch::Sender<Vec<OrderGroup>>,
}

impl OrderAggregator {
    /// Creates a new `OrderAggregator` and its associated client.
    ///
    /// # Arguments
    ///
    /// * `account` - The customer account this aggregator is bound to.
    /// * `buffer_size` - The capacity of the request channel. If the
    ///   channel is full, calls on the client will wait for space.
    pub fn new(account: Account, buffer_size: usize) -> (Self, AggregatorClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (busy_tx, busy_rx) = watch::channel(false);
        let (groups_tx, groups_rx) = watch::channel(Vec::new());
        let actor = Self {
            account,
            receiver,
            working_set: Vec::new(),
            busy_tx,
            groups_tx,
        };
        let client = AggregatorClient::new(sender, busy_rx, groups_rx);
        (actor, client)
    }

    /// Runs the actor's event loop until the request channel closes.
    ///
    /// Selects over three sources: client requests, saved-order
    /// notifications from the bus, and completions of the in-flight load
    /// task.
    pub async fn run(mut self, ctx: AggregatorContext) {
        let account = self.account.id.clone();
        info!(%account, "Aggregator started");

        let AggregatorContext {
            data,
            mut saved_orders,
        } = ctx;

        // Load fetches run off-loop and report back here, so updates keep
        // flowing while a load is pending.
        let (done_tx, mut done_rx) = mpsc::channel::<FetchOutcome>(1);
        let mut pending_load: Option<oneshot::Sender<Result<(), AggregatorError>>> = None;
        let mut bus_open = true;

        loop {
            tokio::select! {
                maybe_request = self.receiver.recv() => {
                    let Some(request) = maybe_request else { break };
                    match request {
                        AggregatorRequest::Load { respond_to } => {
                            if pending_load.is_some() {
                                debug!(%account, "Load already in flight, dropping request");
                                let _ = respond_to.send(Ok(()));
                                continue;
                            }
                            debug!(%account, "Load");
                            let _ = self.busy_tx.send(true);
                            pending_load = Some(respond_to);

                            let data = Arc::clone(&data);
                            let done = done_tx.clone();
                            let fetch_account = account.clone();
                            tokio::spawn(async move {
                                let outcome = async {
                                    let open = data.fetch_open_orders(&fetch_account).await?;
                                    let closed = data.fetch_closed_orders(&fetch_account).await?;
                                    Ok((open, closed))
                                }
                                .await;
                                let _ = done.send(outcome).await;
                            });
                        }
                        AggregatorRequest::Snapshot { respond_to } => {
                            debug!(%account, size = self.working_set.len(), "Snapshot");
                            let _ = respond_to.send(Ok(self.working_set.clone()));
                        }
                    }
                }
                Some(outcome) = done_rx.recv() => {
                    let response = match outcome {
                        Ok((open, closed)) => {
                            self.replace_working_set(open, closed);
                            self.publish_groups();
                            info!(%account, orders = self.working_set.len(), "Loaded");
                            Ok(())
                        }
                        Err(e) => {
                            // Working set untouched: neither fetch result
                            // is applied unless both succeeded.
                            warn!(%account, error = %e, "Load failed");
                            Err(AggregatorError::Fetch(e))
                        }
                    };
                    let _ = self.busy_tx.send(false);
                    if let Some(respond_to) = pending_load.take() {
                        let _ = respond_to.send(response);
                    }
                }
                update = saved_orders.recv(), if bus_open => {
                    match update {
                        Ok(order) if order.account_id == self.account.id => {
                            debug!(%account, order = %order.id, "Saved order");
                            self.upsert(order);
                            self.publish_groups();
                        }
                        Ok(order) => {
                            debug!(%account, order = %order.id, "Ignoring saved order for another account");
                        }
                        Err(broadcast::error::RecvError::Lagged(missed)) => {
                            warn!(%account, missed, "Saved-order subscription lagged");
                        }
                        Err(broadcast::error::RecvError::Closed) => {
                            bus_open = false;
                        }
                    }
                }
            }
        }

        info!(%account, orders = self.working_set.len(), "Shutdown");
    }

    /// Replace-by-key or append-if-absent; at most one order per id.
    fn upsert(&mut self, order: Order) {
        match self
            .working_set
            .iter()
            .position(|existing| existing.id == order.id)
        {
            Some(index) => self.working_set[index] = order,
            None => self.working_set.push(order),
        }
    }

    fn replace_working_set(&mut self, open: Vec<Order>, closed: Vec<Order>) {
        self.working_set.clear();
        // The backend serves the two sets disjoint; if a key does appear
        // in both, the later entry wins.
        for order in open.into_iter().chain(closed) {
            self.upsert(order);
        }
    }

    /// Recomputes the grouping from the working set and publishes it.
    fn publish_groups(&self) {
        let mut sorted = self.working_set.clone();
        sort_orders(&mut sorted);
        let _ = self.groups_tx.send(group_orders(sorted));
    }
}
