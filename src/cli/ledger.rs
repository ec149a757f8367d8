//! Ledger CLI commands
//!
//! One-shot commands that operate on a single stored account, or on two for
//! `compare`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::display::format_history;
use crate::error::TrackerResult;
use crate::export::export_transactions_csv;
use crate::models::{Money, NewTransaction};
use crate::reports::CategoryReport;
use crate::services::LedgerService;

/// Ledger subcommands
#[derive(Subcommand)]
pub enum LedgerCommands {
    /// Record an income or expense
    Add {
        /// Account owner name
        user: String,
        /// income or expense
        kind: String,
        /// Amount (e.g. "200" or "199.99")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category label
        category: String,
        /// Date, kept as entered (e.g. "01/01/2024")
        date: String,
        /// Free-text note
        #[arg(short, long, default_value = "")]
        note: String,
        /// Opening balance if the account does not exist yet
        #[arg(short, long, allow_hyphen_values = true)]
        opening: Option<String>,
    },
    /// Show the transaction history and current balance
    History {
        /// Account owner name
        user: String,
    },
    /// Write the text snapshot of an account
    Save {
        /// Account owner name
        user: String,
    },
    /// Compare the balances of two accounts
    Compare {
        /// First account owner
        first: String,
        /// Second account owner
        second: String,
    },
    /// Export transactions as CSV
    Export {
        /// Account owner name
        user: String,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Per-category income and expense totals
    Report {
        /// Account owner name
        user: String,
    },
    /// Show recent audit log entries
    Audit {
        /// Only entries for this account owner
        user: Option<String>,
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Parse an optional opening balance argument
pub fn parse_opening(opening: Option<&str>) -> TrackerResult<Option<Money>> {
    Ok(opening.map(Money::parse).transpose()?)
}

/// Handle a ledger command
pub fn handle_ledger_command(service: &mut LedgerService, cmd: LedgerCommands) -> TrackerResult<()> {
    let symbol = service.settings().currency_symbol.clone();

    match cmd {
        LedgerCommands::Add {
            user,
            kind,
            amount,
            category,
            date,
            note,
            opening,
        } => {
            let input = NewTransaction::parse(&kind, &amount, &category, &date, &note)?;
            let opening = parse_opening(opening.as_deref())?;

            let mut account = service.open_or_load(&user, opening)?;
            let record = service.add_transaction(&mut account, input)?;

            println!(
                "Added {} of {} to {} ({})",
                record.kind(),
                record.amount().format_with_symbol(&symbol),
                account.name(),
                record.category()
            );
            println!(
                "Current Balance: {}",
                account.balance().format_with_symbol(&symbol)
            );
        }

        LedgerCommands::History { user } => {
            let account = service.load_account(&user)?;
            print!("{}", format_history(&account, &symbol));
        }

        LedgerCommands::Save { user } => {
            let account = service.load_account(&user)?;
            let path = service.save_snapshot(&account)?;
            println!("Data saved to {}", path.display());
        }

        LedgerCommands::Compare { first, second } => {
            let comparison = service.compare(&first, &second)?;
            println!(
                "Comparing balances of {} and {}",
                comparison.first_name, comparison.second_name
            );
            println!("{}", comparison.describe(&symbol));
        }

        LedgerCommands::Export { user, output } => {
            let account = service.load_account(&user)?;
            let count = match output {
                Some(path) => {
                    let writer = BufWriter::new(File::create(&path)?);
                    let count = export_transactions_csv(&account, writer)?;
                    eprintln!("Exported {} transactions to {}", count, path.display());
                    count
                }
                None => {
                    let stdout = io::stdout();
                    let mut handle = stdout.lock();
                    let count = export_transactions_csv(&account, &mut handle)?;
                    handle.flush()?;
                    count
                }
            };
            tracing::debug!(account = account.name(), count, "csv export finished");
        }

        LedgerCommands::Report { user } => {
            let account = service.load_account(&user)?;
            print!("{}", CategoryReport::generate(&account).format_terminal(&symbol));
        }

        LedgerCommands::Audit { user, limit } => {
            let entries = service.audit_history(user.as_deref(), limit)?;
            if entries.is_empty() {
                println!("No audit entries.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
    }

    Ok(())
}
