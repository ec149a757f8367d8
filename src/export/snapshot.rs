//! Text snapshot of an account
//!
//! One human-readable file per user, overwritten on every save:
//!
//! ```text
//! ---- Personal Finance Tracker ----
//! User Name: alice
//! Balance: 1800.00
//! Total Transactions: 2
//! ===================================
//!
//! Transaction 1:
//! Type: income
//! ...
//! -----------------------------
//! ```

use std::path::PathBuf;

use crate::config::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};
use crate::ledger::Account;
use crate::storage::write_text_atomic;

/// Render the snapshot text for an account
pub fn render_snapshot(account: &Account) -> String {
    let mut output = String::new();

    output.push_str("---- Personal Finance Tracker ----\n");
    output.push_str(&format!("User Name: {}\n", account.name()));
    output.push_str(&format!("Balance: {}\n", account.balance()));
    output.push_str(&format!(
        "Total Transactions: {}\n",
        account.transaction_count()
    ));
    output.push_str("===================================\n");

    for (i, record) in account.transactions().enumerate() {
        output.push('\n');
        output.push_str(&format!("Transaction {}:\n", i + 1));
        output.push_str(&format!("Type: {}\n", record.kind()));
        output.push_str(&format!("Amount: {}\n", record.amount()));
        output.push_str(&format!("Category: {}\n", record.category()));
        output.push_str(&format!("Date: {}\n", record.date()));
        output.push_str(&format!("Note: {}\n", record.note()));
        output.push_str("-----------------------------\n");
    }

    output
}

/// Write the snapshot to `<data_dir>/<name>_finance.txt` and check it landed
///
/// Returns the path written. The account is only read, so a failure here
/// never affects the in-memory ledger.
pub fn save_snapshot(paths: &TrackerPaths, account: &Account) -> TrackerResult<PathBuf> {
    let path = paths.snapshot_file(account.name());
    let contents = render_snapshot(account);

    write_text_atomic(&path, &contents)?;

    let written = std::fs::metadata(&path).map_err(|e| {
        TrackerError::Io(format!(
            "Snapshot {} could not be verified: {}",
            path.display(),
            e
        ))
    })?;
    if written.len() != contents.len() as u64 {
        return Err(TrackerError::Io(format!(
            "Snapshot {} is {} bytes, expected {}",
            path.display(),
            written.len(),
            contents.len()
        )));
    }

    tracing::info!(account = account.name(), path = %path.display(), "snapshot saved");
    Ok(path)
}
