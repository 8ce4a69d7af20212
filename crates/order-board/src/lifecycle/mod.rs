//! # Board Lifecycle & Orchestration
//!
//! Wiring lives here so the aggregator itself stays free of it: the
//! [`OrderBoard`] builds the bus, creates the actor/client pair, injects
//! the data collaborator and the bus subscription, spawns the actor, and
//! coordinates graceful shutdown.
//!
//! ## Shutdown
//!
//! 1. Drop the client - closes the request channel
//! 2. The actor detects the closure and exits its loop
//! 3. Await the task - surfaces panics instead of swallowing them
//!
//! The bus subscription drops with the actor task, which is what ties the
//! saved-order handler's lifetime to the aggregator's.

pub mod order_board;
pub mod tracing;

pub use order_board::OrderBoard;
pub use tracing::setup_tracing;
