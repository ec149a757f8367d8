//! Personal Finance Tracker - a single-user income and expense ledger
//!
//! Each account owner has a growable, append-only list of transactions and a
//! running balance. Accounts can be compared, persisted, exported as a text
//! snapshot or CSV, and summarised by category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, transaction kinds and records
//! - `ledger`: Transaction store, accounts and the user registry
//! - `storage`: JSON ledger file with atomic writes
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `export`: Text snapshots and CSV
//! - `reports`: Per-category summaries
//! - `display`: Terminal formatting
//! - `cli`: Command handlers and the interactive session
//!
//! # Example
//!
//! ```rust
//! use finance_tracker::ledger::{compare_balance, ComparisonOutcome, UserRegistry};
//! use finance_tracker::models::{Money, NewTransaction};
//!
//! let mut registry = UserRegistry::new();
//! let mut alice = registry.open_account("alice", Money::from_units(1000))?;
//! alice.add_transaction(NewTransaction::parse("income", "1000", "salary", "01/01/2024", "")?)?;
//! alice.add_transaction(NewTransaction::parse("expense", "200", "food", "02/01/2024", "")?)?;
//! assert_eq!(alice.balance(), Money::from_units(1800));
//!
//! let bob = registry.open_account("bob", Money::from_units(500))?;
//! assert_eq!(compare_balance(&alice, &bob).outcome, ComparisonOutcome::FirstGreater);
//! assert_eq!(registry.total_users(), 2);
//! # Ok::<(), finance_tracker::TrackerError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult, ValidationError};
