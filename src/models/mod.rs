//! Core data models for the finance tracker
//!
//! Value types shared by the ledger, storage, and export layers.

pub mod ids;
pub mod kind;
pub mod money;
pub mod transaction;

pub use ids::RecordId;
pub use kind::TransactionKind;
pub use money::Money;
pub use transaction::{NewTransaction, TransactionRecord};
