use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;

use kakeibo::cli::{
    handle_expense_command, handle_fiscal_year_command, handle_remaining_command,
    ExpenseCommands, FiscalYearArgs, RemainingArgs,
};
use kakeibo::config::{paths::KakeiboPaths, settings::Settings};
use kakeibo::logging::init_tracing;
use kakeibo::models::FiscalStartMonth;
use kakeibo::storage::{load_seed, Storage};

#[derive(Parser)]
#[command(
    name = "kakeibo",
    version,
    about = "Household budget tracker: how much is left this year, month and day",
    long_about = "Kakeibo spreads each category's yearly budget over the rest of the \
                  fiscal year. It reports how much is left for the year, for this \
                  month and for today, based on the expenses in a ledger file."
)]
struct Cli {
    /// Ledger file with categories, budgets and expenses (.json, .yaml or .yml)
    #[arg(short, long, global = true, env = "KAKEIBO_LEDGER")]
    ledger: Option<PathBuf>,

    /// Month the fiscal year starts on (1-12), overrides the config file
    #[arg(long, global = true, env = "KAKEIBO_FISCAL_START_MONTH")]
    fiscal_start_month: Option<FiscalStartMonth>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show remaining budget for the year, month and day
    #[command(alias = "rem")]
    Remaining(RemainingArgs),

    /// Show the fiscal year containing a date
    FiscalYear(FiscalYearArgs),

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Write a default config file
    Init,

    /// Show current configuration and paths
    Config,
}

fn log_filter(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "kakeibo=info".to_string(),
        2 => "kakeibo=debug".to_string(),
        _ => "kakeibo=trace".to_string(),
    }
}

fn load_storage(ledger: Option<&PathBuf>) -> Result<Storage> {
    match ledger {
        Some(path) => {
            let seed = load_seed(path)
                .with_context(|| format!("Failed to read ledger {}", path.display()))?;
            Ok(Storage::from_seed(seed)?)
        }
        None => Ok(Storage::with_default_catalog()?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = KakeiboPaths::new()?;
    let settings = Settings::load_or_create(&paths)?.with_fiscal_start_month(cli.fiscal_start_month);

    init_tracing(&log_filter(cli.verbose, &settings.log_filter));
    debug!(base_dir = %paths.base_dir().display(), "settings loaded");

    match cli.command {
        Some(Commands::Remaining(args)) => {
            let storage = load_storage(cli.ledger.as_ref())?;
            handle_remaining_command(&storage, &settings, args)?;
        }
        Some(Commands::FiscalYear(args)) => {
            handle_fiscal_year_command(&settings, args)?;
        }
        Some(Commands::Expense(cmd)) => {
            let storage = load_storage(cli.ledger.as_ref())?;
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!(
                    "Kakeibo is already initialized at: {}",
                    paths.settings_file().display()
                );
                return Ok(());
            }
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialized Kakeibo at: {}", paths.base_dir().display());
            println!("Fiscal year starts in month {}.", settings.fiscal_start_month);
            println!();
            println!("Run 'kakeibo remaining --ledger <FILE>' to see what is left.");
        }
        Some(Commands::Config) => {
            println!("Kakeibo Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Config file:      {}", paths.settings_file().display());
            println!(
                "Ledger:           {}",
                cli.ledger
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(default catalog)".to_string())
            );
            println!();
            println!("Settings:");
            println!("  Fiscal start month: {}", settings.fiscal_start_month);
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Date format:        {}", settings.date_format);
            println!("  Log filter:         {}", settings.log_filter);
        }
        None => {
            println!("Kakeibo - household budget tracker");
            println!();
            println!("Run 'kakeibo --help' for usage information.");
            println!("Run 'kakeibo remaining' to see what is left of each budget.");
        }
    }

    Ok(())
}
