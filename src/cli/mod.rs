//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod interactive;
pub mod ledger;

pub use interactive::run_interactive;
pub use ledger::{handle_ledger_command, parse_opening, LedgerCommands};
