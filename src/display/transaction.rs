//! Transaction display formatting
//!
//! Terminal rendering of an account's history, one detail block per record.

use crate::ledger::Account;
use crate::models::TransactionRecord;

/// Format one record as a detail block
pub fn format_transaction_details(record: &TransactionRecord, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("------ Transaction Details ------\n");
    output.push_str(&format!("Type: {}\n", record.kind()));
    output.push_str(&format!(
        "Amount: {}\n",
        record.amount().format_with_symbol(symbol)
    ));
    output.push_str(&format!("Category: {}\n", record.category()));
    output.push_str(&format!("Date: {}\n", record.date()));
    output.push_str(&format!("Note: {}\n", record.note()));

    output
}

/// Format the full history of an account followed by its current balance
pub fn format_history(account: &Account, symbol: &str) -> String {
    if !account.has_transactions() {
        return "No transactions to display.\n".to_string();
    }

    let mut output = format!("=== {}'s Transaction History ===\n", account.name());
    for record in account.transactions() {
        output.push('\n');
        output.push_str(&format_transaction_details(record, symbol));
    }
    output.push_str(&format!(
        "\nCurrent Balance: {}\n",
        account.balance().format_with_symbol(symbol)
    ));

    output
}
