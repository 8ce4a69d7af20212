//! # Order Core
//!
//! Domain model and policy for a customer order board: the order and
//! account types, the sort/group policy that turns a working set into a
//! display-ready sequence, and the asynchronous collaborator seam the
//! aggregator fetches from.
//!
//! ## Layering
//!
//! - [`model`] - Pure data: [`Order`], [`Account`], identifiers, status.
//! - [`grouping`] - The sort and partition policy, as pure functions.
//! - [`client`] - The [`OrderDataClient`] trait a backend implements.
//! - [`mock`] - An expectation-queue [`MockDataClient`] for tests.
//!
//! Nothing here holds state or spawns tasks; the stateful aggregator lives
//! in the `order-board` crate and consumes this one.
//!
//! ## Policy at a glance
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use order_core::{group_orders, sort_orders, Order, OrderId};
//! use order_core::model::AccountId;
//!
//! let acct = AccountId::from("acct_1");
//! let placed = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
//! let settled = Utc.with_ymd_and_hms(2024, 1, 12, 0, 0, 0).unwrap();
//!
//! let mut orders = vec![
//!     Order::closed(OrderId::from("b"), acct.clone(), placed, settled, "Cable", 9.0),
//!     Order::open(OrderId::from("a"), acct.clone(), placed, "Widget", 25.0),
//! ];
//! sort_orders(&mut orders);
//! let groups = group_orders(orders);
//!
//! assert_eq!(groups[0].label(), "Open");
//! assert_eq!(groups[1].label(), "Closed");
//! ```

pub mod client;
pub mod error;
pub mod grouping;
pub mod mock;
pub mod model;

// Re-export core types for convenience
pub use client::OrderDataClient;
pub use error::DataClientError;
pub use grouping::{group_orders, sort_orders, OrderGroup};
pub use mock::MockDataClient;
pub use model::{Account, AccountId, Order, OrderId, OrderStatus};
