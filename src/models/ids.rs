//! Identifier for ledger records
//!
//! Records carry a random UUID so audit entries and exports can refer to a
//! specific entry even when two entries share every other field.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "txn-";

/// Unique identifier of a [`TransactionRecord`](super::TransactionRecord)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

/// Short form: prefix plus the first eight hex digits
impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, &self.0.simple().to_string()[..8])
    }
}
