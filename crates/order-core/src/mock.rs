//! # Mock Data Collaborator
//!
//! `MockDataClient` implements [`OrderDataClient`] against an in-memory
//! expectation queue, so aggregator logic can be tested without a backend.
//!
//! Expectations are consumed in FIFO order. Each one names the fetch kind
//! and account it accepts and carries the response to return; a call that
//! does not match the front of the queue panics, which keeps tests honest
//! about the exact sequence of backend traffic.
//!
//! ## Example
//! ```ignore
//! let mock = MockDataClient::new();
//! mock.expect_open_orders(account.clone()).return_ok(vec![order]);
//! mock.expect_closed_orders(account.clone()).return_err(
//!     DataClientError::Transport("connection reset".into()),
//! );
//!
//! let data: Arc<dyn OrderDataClient> = Arc::new(mock.clone());
//! // ... exercise the code under test ...
//! mock.verify(); // all expectations consumed
//! ```
//!
//! ## Gated fetches
//!
//! An expectation can be gated on a [`Notify`]: the mock parks the fetch
//! until the test fires the gate. That is how the busy-flag contract is
//! tested: hold the first load open, issue a second, observe it dropped.

use crate::client::OrderDataClient;
use crate::error::DataClientError;
use crate::model::{AccountId, Order};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchKind {
    Open,
    Closed,
}

impl FetchKind {
    fn name(self) -> &'static str {
        match self {
            FetchKind::Open => "open",
            FetchKind::Closed => "closed",
        }
    }
}

struct Expectation {
    kind: FetchKind,
    account: AccountId,
    gate: Option<Arc<Notify>>,
    response: Result<Vec<Order>, DataClientError>,
}

/// A mock order source with expectation tracking for fluent testing.
///
/// Cloning shares the expectation queue, so a test can hand one clone to
/// the code under test (as `Arc<dyn OrderDataClient>`) and keep another
/// for setting expectations and calling [`verify`](MockDataClient::verify).
#[derive(Clone, Default)]
pub struct MockDataClient {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl MockDataClient {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a fetch of the account's open orders.
    pub fn expect_open_orders(&self, account: AccountId) -> FetchExpectationBuilder {
        FetchExpectationBuilder {
            expectations: self.expectations.clone(),
            kind: FetchKind::Open,
            account,
            gate: None,
        }
    }

    /// Expects a fetch of the account's closed orders.
    pub fn expect_closed_orders(&self, account: AccountId) -> FetchExpectationBuilder {
        FetchExpectationBuilder {
            expectations: self.expectations.clone(),
            kind: FetchKind::Closed,
            account,
            gate: None,
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    async fn take(
        &self,
        kind: FetchKind,
        account: &AccountId,
    ) -> Result<Vec<Order>, DataClientError> {
        let expectation = {
            let mut exps = self.expectations.lock().unwrap();
            exps.pop_front()
        };

        let Some(expectation) = expectation else {
            panic!("unexpected {} fetch for {account}: no expectations queued", kind.name());
        };
        if expectation.kind != kind || expectation.account != *account {
            panic!(
                "expectation mismatch: next is {} fetch for {}, got {} fetch for {account}",
                expectation.kind.name(),
                expectation.account,
                kind.name(),
            );
        }

        if let Some(gate) = expectation.gate {
            gate.notified().await;
        }
        expectation.response
    }
}

#[async_trait]
impl OrderDataClient for MockDataClient {
    async fn fetch_open_orders(
        &self,
        account: &AccountId,
    ) -> Result<Vec<Order>, DataClientError> {
        self.take(FetchKind::Open, account).await
    }

    async fn fetch_closed_orders(
        &self,
        account: &AccountId,
    ) -> Result<Vec<Order>, DataClientError> {
        self.take(FetchKind::Closed, account).await
    }
}

/// Builder for fetch expectations.
pub struct FetchExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    kind: FetchKind,
    account: AccountId,
    gate: Option<Arc<Notify>>,
}

impl FetchExpectationBuilder {
    /// Parks the fetch until `gate` is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, orders: Vec<Order>) {
        self.push(Ok(orders));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: DataClientError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Vec<Order>, DataClientError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            kind: self.kind,
            account: self.account,
            gate: self.gate,
            response,
        });
    }
}
