//! Export functionality
//!
//! - Text snapshot (`<name>_finance.txt`)
//! - CSV of an account's transactions

pub mod csv;
pub mod snapshot;

pub use self::csv::export_transactions_csv;
pub use snapshot::{render_snapshot, save_snapshot};
