//! # Sort & Group Policy
//!
//! Pure functions turning a working set of orders into the grouped,
//! ordered sequence a list view renders without further computation.
//!
//! The policy is fixed: open orders before closed, newest order date
//! first, newest closing date first among equals. Grouping partitions the
//! sorted sequence by status, so groups are contiguous and never
//! interleave. Both steps are deterministic; deriving twice from the same
//! input yields identical output.

use crate::model::{Order, OrderStatus};

/// One contiguous run of equally-statused orders, in policy order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderGroup {
    pub status: OrderStatus,
    pub orders: Vec<Order>,
}

impl OrderGroup {
    /// Heading shown above the group.
    pub fn label(&self) -> &'static str {
        self.status.label()
    }
}

/// Sorts orders in place: open before closed, then order date descending,
/// then closing date descending.
///
/// The sort is stable, so orders equal under all three keys keep their
/// input (fetch) order. An absent closing date compares as earliest and
/// lands last within its date tie; open orders never carry one, so the
/// tertiary key never reorders them.
pub fn sort_orders(orders: &mut [Order]) {
    orders.sort_by(|a, b| {
        b.is_open()
            .cmp(&a.is_open())
            .then_with(|| b.order_date.cmp(&a.order_date))
            .then_with(|| b.closed_date.cmp(&a.closed_date))
    });
}

/// Partitions an already-sorted sequence into contiguous status groups.
///
/// Group order follows first appearance in the input; members keep their
/// input order. Flattening the result reproduces the input exactly.
pub fn group_orders(sorted: Vec<Order>) -> Vec<OrderGroup> {
    let mut groups: Vec<OrderGroup> = Vec::new();
    for order in sorted {
        match groups.last_mut() {
            Some(group) if group.status == order.status => group.orders.push(order),
            _ => groups.push(OrderGroup {
                status: order.status,
                orders: vec![order],
            }),
        }
    }
    groups
}
