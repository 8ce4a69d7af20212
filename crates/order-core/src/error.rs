//! # Collaborator Errors
//!
//! Error type for the order data collaborator. Failures are propagated to
//! the caller that requested the fetch; nothing in this crate retries.

/// Errors the remote order source can report.
#[derive(Debug, thiserror::Error)]
pub enum DataClientError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("malformed payload: {0}")]
    Payload(String),
}
