//! Display formatting for terminal output

pub mod transaction;

pub use transaction::{format_history, format_transaction_details};
