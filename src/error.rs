//! Error types for the finance tracker
//!
//! Validation failures for individual transactions live in
//! [`ValidationError`]; everything else the library can report is wrapped
//! in [`TrackerError`].

use thiserror::Error;

use crate::models::Money;

/// Reasons a transaction is rejected before it reaches the ledger
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Amount was zero or negative
    #[error("Amount must be positive (got {0})")]
    InvalidAmount(Money),

    /// Kind was neither income nor expense
    #[error("Type must be 'income' or 'expense' (got '{0}')")]
    InvalidKind(String),

    /// Category label was blank
    #[error("Category cannot be empty")]
    EmptyCategory,

    /// Account owner name was blank
    #[error("Account name cannot be empty")]
    EmptyName,

    /// Account owner name exceeded the length limit
    #[error("Account name too long ({0} chars, max 100)")]
    NameTooLong(usize),

    /// Amount text could not be read as money
    #[error("Invalid amount format: '{0}'")]
    InvalidMoney(String),

    /// Applying the amount would push a running total out of range
    #[error("Amount {0} would overflow the account balance")]
    BalanceOverflow(Money),
}

/// The main error type for finance tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A transaction or account failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Ledger file errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TrackerError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for accounts
    pub fn duplicate_account(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for finance tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
