use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use finance_tracker::cli::{handle_ledger_command, parse_opening, run_interactive, LedgerCommands};
use finance_tracker::config::{paths::TrackerPaths, settings::Settings};
use finance_tracker::services::LedgerService;
use finance_tracker::storage::Storage;

/// Environment variable holding the log filter, e.g. `debug`
const LOG_ENV: &str = "FINANCE_TRACKER_LOG";

#[derive(Parser)]
#[command(
    name = "finance-tracker",
    version,
    about = "Personal finance ledger for the terminal",
    long_about = "Records income and expenses per user, keeps a running balance, \
                  compares savings between users and writes text snapshots."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Ledger(LedgerCommands),

    /// Start the interactive menu for a user
    #[command(alias = "menu")]
    Interactive {
        /// Account owner name
        user: String,
        /// Opening balance if the account does not exist yet
        #[arg(short, long, allow_hyphen_values = true)]
        opening: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Config) => {
            println!("Personal Finance Tracker Configuration");
            println!("======================================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Ledger file:     {}", paths.ledger_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!(
                "  Default starting balance: {}",
                settings
                    .default_starting_balance
                    .format_with_symbol(&settings.currency_symbol)
            );
            println!("  Initial capacity:         {}", settings.initial_capacity);
            println!("  Currency symbol:          {}", settings.currency_symbol);
            return Ok(());
        }
        None => {
            println!("Personal Finance Tracker");
            println!();
            println!("Run 'finance-tracker --help' for usage information.");
            println!("Run 'finance-tracker interactive <user>' to start the menu.");
            return Ok(());
        }
        _ => {}
    }

    // Initialize storage
    let mut storage = Storage::new(paths)?;
    storage.load_all()?;
    let mut service = LedgerService::new(storage, settings);

    match cli.command {
        Some(Commands::Ledger(cmd)) => {
            handle_ledger_command(&mut service, cmd)?;
        }
        Some(Commands::Interactive { user, opening }) => {
            let opening = parse_opening(opening.as_deref())?;
            let account = service.open_or_load(&user, opening)?;
            let stdin = io::stdin();
            run_interactive(&mut service, account, stdin.lock(), io::stdout())?;
        }
        Some(Commands::Config) | None => {}
    }

    Ok(())
}
