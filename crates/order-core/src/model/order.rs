/// A customer order as reported by the remote CRM backend.
///
/// Orders are replaced whole when the backend announces a new revision;
/// nothing in this crate patches individual fields.
use crate::model::AccountId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders. The backend assigns these; two orders
/// with the same id are revisions of the same purchase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether an order is still open. Drives both grouping and the primary
/// sort key, so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Open,
    Closed,
}

impl OrderStatus {
    /// Group heading shown by the display layer.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Open => "Open",
            OrderStatus::Closed => "Closed",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub account_id: AccountId,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
    /// Set exactly when `status` is `Closed`.
    pub closed_date: Option<DateTime<Utc>>,
    pub item: String,
    pub price: f64,
}

impl Order {
    /// Creates an open order.
    ///
    /// # Arguments
    /// * `id` - Backend-assigned identifier
    /// * `account_id` - Owning customer account
    /// * `order_date` - When the order was placed
    /// * `item` - Item description
    /// * `price` - Order total
    pub fn open(
        id: OrderId,
        account_id: AccountId,
        order_date: DateTime<Utc>,
        item: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id,
            account_id,
            status: OrderStatus::Open,
            order_date,
            closed_date: None,
            item: item.into(),
            price,
        }
    }

    /// Creates a closed order with its closing date.
    pub fn closed(
        id: OrderId,
        account_id: AccountId,
        order_date: DateTime<Utc>,
        closed_date: DateTime<Utc>,
        item: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id,
            account_id,
            status: OrderStatus::Closed,
            order_date,
            closed_date: Some(closed_date),
            item: item.into(),
            price,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == OrderStatus::Open
    }
}
