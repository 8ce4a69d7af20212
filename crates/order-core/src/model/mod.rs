//! Pure data structures shared by the data collaborator and the aggregator.

pub mod account;
pub mod order;

pub use account::{Account, AccountId};
pub use order::{Order, OrderId, OrderStatus};
