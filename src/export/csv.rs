//! CSV export of an account's transactions

use std::io::Write;

use serde::Serialize;

use crate::error::TrackerResult;
use crate::ledger::Account;

/// One exported row
#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Index")]
    index: usize,
    #[serde(rename = "Type")]
    kind: &'static str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Date")]
    date: &'a str,
    #[serde(rename = "Note")]
    note: &'a str,
}

/// Write the account's transactions as CSV, one row per record in entry order
///
/// The header row is always written, even for an empty account.
pub fn export_transactions_csv<W: Write>(account: &Account, writer: W) -> TrackerResult<usize> {
    let mut csv_writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(["Index", "Type", "Amount", "Category", "Date", "Note"])?;

    let mut count = 0;
    for (i, record) in account.transactions().enumerate() {
        csv_writer.serialize(CsvRow {
            index: i + 1,
            kind: record.kind().as_str(),
            amount: record.amount().to_string(),
            category: record.category(),
            date: record.date(),
            note: record.note(),
        })?;
        count += 1;
    }

    csv_writer.flush()?;
    Ok(count)
}
