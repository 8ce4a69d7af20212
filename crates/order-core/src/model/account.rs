use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for customer accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The customer whose orders are being viewed. The aggregator references
/// an account; it never owns or mutates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub company: String,
}

impl Account {
    pub fn new(id: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            id: AccountId(id.into()),
            company: company.into(),
        }
    }
}
