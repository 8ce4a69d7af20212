//! # Order Board Demo
//!
//! Runs one account's board against a seeded in-memory backend:
//! 1. Load the account's orders and print the grouped view.
//! 2. Publish a saved-order edit on the bus (an open order closes).
//! 3. Print the regrouped view and shut down.
//!
//! This binary plays the display layer's part: it only flattens and
//! prints what the aggregator derived.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use order_board::lifecycle::{setup_tracing, OrderBoard};
use order_core::{
    Account, AccountId, DataClientError, Order, OrderDataClient, OrderGroup, OrderId,
};
use std::sync::Arc;
use tracing::info;

/// Fixture backend serving a canned order list.
struct SeededOrders {
    orders: Vec<Order>,
}

#[async_trait]
impl OrderDataClient for SeededOrders {
    async fn fetch_open_orders(
        &self,
        account: &AccountId,
    ) -> Result<Vec<Order>, DataClientError> {
        Ok(self
            .orders
            .iter()
            .filter(|o| o.is_open() && o.account_id == *account)
            .cloned()
            .collect())
    }

    async fn fetch_closed_orders(
        &self,
        account: &AccountId,
    ) -> Result<Vec<Order>, DataClientError> {
        Ok(self
            .orders
            .iter()
            .filter(|o| !o.is_open() && o.account_id == *account)
            .cloned()
            .collect())
    }
}

fn date(s: &str) -> Result<DateTime<Utc>, String> {
    s.parse().map_err(|e| format!("bad date {s}: {e}"))
}

fn render(groups: &[OrderGroup]) {
    for group in groups {
        info!(group = group.label(), orders = group.orders.len(), "Group");
        for order in &group.orders {
            info!(
                id = %order.id,
                placed = %order.order_date.date_naive(),
                item = %order.item,
                price = order.price,
                "Order"
            );
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting order board demo");

    let account = Account::new("acct_acme", "ACME Industries");
    let acct = account.id.clone();

    let backend = SeededOrders {
        orders: vec![
            Order::open(
                OrderId::from("ord_1001"),
                acct.clone(),
                date("2024-01-10T09:00:00Z")?,
                "Control panel",
                1250.0,
            ),
            Order::closed(
                OrderId::from("ord_0990"),
                acct.clone(),
                date("2024-01-05T14:30:00Z")?,
                date("2024-01-09T10:00:00Z")?,
                "Sensor kit",
                430.0,
            ),
            Order::open(
                OrderId::from("ord_1010"),
                acct.clone(),
                date("2024-02-01T11:15:00Z")?,
                "Conveyor belt",
                2800.0,
            ),
        ],
    };

    let board = OrderBoard::new(account, Arc::new(backend));

    board.client.load().await.map_err(|e| e.to_string())?;
    info!("Orders loaded");
    render(&board.client.groups());

    // An edit elsewhere in the app closes ord_1001; the board regroups.
    let mut groups_rx = board.client.watch_groups();
    board.saved_orders.publish(Order::closed(
        OrderId::from("ord_1001"),
        acct,
        date("2024-01-10T09:00:00Z")?,
        date("2024-02-03T16:45:00Z")?,
        "Control panel",
        1250.0,
    ));
    groups_rx.changed().await.map_err(|e| e.to_string())?;

    info!("Order ord_1001 closed elsewhere, regrouped");
    render(&groups_rx.borrow());

    board.shutdown().await
}
