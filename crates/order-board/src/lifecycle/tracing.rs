//! # Observability & Tracing
//!
//! Structured logging setup for the board. The aggregator logs its
//! lifecycle (startup, shutdown, final state), every load with its
//! outcome, applied and ignored saved orders, and dropped duplicate
//! loads, all with the account as a structured field.
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Full payloads and dropped-request traces
//! RUST_LOG=debug cargo run
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - the account field carries the context
        .compact()
        .init();
}
