use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use order_board::lifecycle::OrderBoard;
use order_core::{
    Account, AccountId, DataClientError, Order, OrderDataClient, OrderId, OrderStatus,
};
use std::sync::Arc;

/// Full end-to-end tests with the wired board: real aggregator, real bus,
/// and an in-memory backend standing in for the remote CRM.

struct InMemoryCrm {
    orders: Vec<Order>,
}

#[async_trait]
impl OrderDataClient for InMemoryCrm {
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

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn account() -> Account {
    Account::new("acct_7", "Northwind Traders")
}

fn backend() -> Arc<InMemoryCrm> {
    let acct = account().id;
    Arc::new(InMemoryCrm {
        orders: vec![
            Order::open(
                OrderId::from("ord_1"),
                acct.clone(),
                date(2024, 1, 10),
                "Drill press",
                900.0,
            ),
            Order::open(
                OrderId::from("ord_3"),
                acct.clone(),
                date(2024, 2, 1),
                "Lathe",
                4200.0,
            ),
            Order::closed(
                OrderId::from("ord_2"),
                acct.clone(),
                date(2024, 1, 5),
                date(2024, 1, 9),
                "Clamps",
                120.0,
            ),
            // Another customer's order; the board must never surface it.
            Order::open(
                OrderId::from("ord_9"),
                AccountId::from("acct_other"),
                date(2024, 1, 20),
                "Grinder",
                600.0,
            ),
        ],
    })
}

#[tokio::test]
async fn board_loads_groups_and_applies_saved_edits() {
    let board = OrderBoard::new(account(), backend());

    board.client.load().await.expect("load failed");

    let groups = board.client.groups();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].label(), "Open");
    assert_eq!(groups[0].orders.len(), 2);
    assert_eq!(groups[0].orders[0].id, OrderId::from("ord_3"));
    assert_eq!(groups[0].orders[1].id, OrderId::from("ord_1"));
    assert_eq!(groups[1].label(), "Closed");
    assert_eq!(groups[1].orders.len(), 1);

    // ord_1 is closed from an edit screen and announced on the bus.
    let mut groups_rx = board.client.watch_groups();
    board.saved_orders.publish(Order::closed(
        OrderId::from("ord_1"),
        account().id,
        date(2024, 1, 10),
        date(2024, 2, 5),
        "Drill press",
        900.0,
    ));
    groups_rx.changed().await.expect("aggregator stopped");

    let groups = board.client.groups();
    assert_eq!(groups[0].orders.len(), 1, "one open order left");
    assert_eq!(groups[1].orders.len(), 2, "two closed orders now");
    assert_eq!(groups[1].orders[0].id, OrderId::from("ord_1"));
    assert_eq!(groups[1].orders[0].status, OrderStatus::Closed);

    board.shutdown().await.expect("shutdown failed");
}

#[tokio::test]
async fn concurrent_loads_converge_to_one_consistent_view() {
    let board = OrderBoard::new(account(), backend());

    let mut handles = Vec::new();
    for _ in 0..5 {
        let client = board.client.clone();
        handles.push(tokio::spawn(async move { client.load().await }));
    }
    for handle in handles {
        handle.await.unwrap().expect("load failed");
    }

    // Duplicates were dropped or re-ran against the same backend; either
    // way the derived view is the same.
    let groups = board.client.groups();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].orders.len(), 2);
    assert_eq!(groups[1].orders.len(), 1);
    assert!(!board.client.is_busy());

    board.shutdown().await.expect("shutdown failed");
}
