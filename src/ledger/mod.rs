//! The ledger core
//!
//! - [`TransactionStore`]: ordered records, running balance, growth policy
//! - [`Account`]: a named owner of one store
//! - [`UserRegistry`]: creates accounts and counts them
//! - [`compare_balance`]: side-by-side balance comparison

pub mod account;
pub mod registry;
pub mod store;

pub use account::{compare_balance, Account, BalanceComparison, ComparisonOutcome};
pub use registry::UserRegistry;
pub use store::{TransactionStore, DEFAULT_INITIAL_CAPACITY};
