//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ledger::Account;
use crate::models::TransactionRecord;

/// Ledger events that get audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// A new account was opened
    OpenAccount,
    /// A transaction was appended
    AddTransaction,
    /// A text snapshot was written
    SaveSnapshot,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::OpenAccount => write!(f, "OPEN"),
            Operation::AddTransaction => write!(f, "ADD"),
            Operation::SaveSnapshot => write!(f, "SNAPSHOT"),
        }
    }
}

/// A single line of the audit log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the event happened (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Owner name of the account involved
    pub account: String,

    /// Display id of the record, for transaction events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,

    /// Event payload (the record, the opening balance, the snapshot path)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Entry for a newly opened account
    pub fn open_account(account: &Account) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::OpenAccount,
            account: account.name().to_string(),
            record_id: None,
            details: Some(serde_json::json!({
                "starting_balance": account.starting_balance(),
            })),
        }
    }

    /// Entry for an appended record
    pub fn add_transaction(account: &Account, record: &TransactionRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::AddTransaction,
            account: account.name().to_string(),
            record_id: Some(record.id().to_string()),
            details: serde_json::to_value(record).ok(),
        }
    }

    /// Entry for a snapshot written to `path`
    pub fn save_snapshot(account: &Account, path: &std::path::Path) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::SaveSnapshot,
            account: account.name().to_string(),
            record_id: None,
            details: Some(serde_json::json!({
                "path": path.display().to_string(),
                "transactions": account.transaction_count(),
            })),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.account
        );

        if let Some(id) = &self.record_id {
            output.push_str(&format!(" {}", id));
        }

        output
    }
}
