//! Service layer
//!
//! Business logic on top of the storage layer: persistence, auditing, and
//! cross-account operations.

pub mod ledger;

pub use ledger::LedgerService;
