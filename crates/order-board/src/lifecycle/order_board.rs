use crate::aggregator::{self, AggregatorClient, AggregatorContext};
use crate::bus::SavedOrderBus;
use order_core::{Account, OrderDataClient};
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for one account's order board.
///
/// `OrderBoard` is responsible for:
/// - **Lifecycle Management**: starting and stopping the aggregator actor
/// - **Dependency Wiring**: handing the data collaborator and a bus
///   subscription to the actor at startup
/// - **Surface**: exposing the [`AggregatorClient`] to the display layer
///   and the [`SavedOrderBus`] to whoever persists orders
///
/// # Example
///
/// ```ignore
/// let board = OrderBoard::new(account, Arc::new(backend));
///
/// board.client.load().await?;
/// let groups = board.client.groups();
///
/// // An order edited elsewhere in the app:
/// board.saved_orders.publish(saved_order);
///
/// // Gracefully shut down when done
/// board.shutdown().await?;
/// ```
pub struct OrderBoard {
    /// Client for the aggregator actor.
    pub client: AggregatorClient,

    /// Process-wide announcement channel for saved orders.
    pub saved_orders: SavedOrderBus,

    /// Task handle for the running actor (used for graceful shutdown).
    handle: tokio::task::JoinHandle<()>,
}

impl OrderBoard {
    /// Creates and starts a board for `account` backed by `data`.
    ///
    /// The aggregator subscribes to the bus before it starts, so no
    /// published order can slip between construction and the first poll.
    pub fn new(account: Account, data: Arc<dyn OrderDataClient>) -> Self {
        let saved_orders = SavedOrderBus::new(32);
        let (actor, client) = aggregator::new(account);
        let ctx = AggregatorContext {
            data,
            saved_orders: saved_orders.subscribe(),
        };
        let handle = tokio::spawn(actor.run(ctx));

        Self {
            client,
            saved_orders,
            handle,
        }
    }

    /// Gracefully shuts down the board.
    ///
    /// Dropping the client closes the request channel; the actor detects
    /// the closure, logs its final state, and exits. Clones of the client
    /// held elsewhere keep the channel open until they drop too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down board...");

        drop(self.client);
        drop(self.saved_orders);

        if let Err(e) = self.handle.await {
            error!("Aggregator task failed: {:?}", e);
            return Err(format!("Aggregator task failed: {:?}", e));
        }

        info!("Board shutdown complete.");
        Ok(())
    }
}
