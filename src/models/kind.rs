//! Transaction kind
//!
//! The ledger only knows two kinds of entry. Raw text from the prompt or the
//! command line is mapped onto this enum once, at the edge, and the rest of
//! the crate never compares strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Whether an entry adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl TransactionKind {
    /// Parse a kind, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(ValidationError::InvalidKind(s.trim().to_string())),
        }
    }

    /// Lowercase label used in snapshots and exports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(TransactionKind::parse("income"), Ok(TransactionKind::Income));
        assert_eq!(TransactionKind::parse("Expense"), Ok(TransactionKind::Expense));
        assert_eq!(TransactionKind::parse(" INCOME "), Ok(TransactionKind::Income));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            TransactionKind::parse("transfer"),
            Err(ValidationError::InvalidKind("transfer".into()))
        );
        assert!(TransactionKind::parse("").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(TransactionKind::Income.to_string(), "income");
        assert_eq!(TransactionKind::Expense.to_string(), "expense");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TransactionKind::Expense).unwrap();
        assert_eq!(json, "\"expense\"");
    }
}
