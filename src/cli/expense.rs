//! Expense CLI commands
//!
//! Listing only: the ledger file is read-only input.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_expense_list;
use crate::error::KakeiboResult;
use crate::models::{CategoryId, CategoryKind};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// List expenses from the ledger (newest first)
    List {
        /// Only expenses in this category ID
        #[arg(short, long, conflicts_with = "kind")]
        category: Option<CategoryId>,
        /// Only expenses whose category has this kind
        /// (fixed, semi_fixed, one_time, daily)
        #[arg(short, long)]
        kind: Option<CategoryKind>,
        /// Include soft-deleted expenses
        #[arg(short, long)]
        all: bool,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> KakeiboResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::List {
            category,
            kind,
            all,
        } => {
            let expenses = match (category, kind) {
                (Some(category_id), _) => service.list_for_category(category_id, all)?,
                (None, Some(kind)) => service.list_by_kind(kind, all)?,
                (None, None) if all => storage.expenses.get_all()?,
                (None, None) => service.list_active()?,
            };

            let categories = storage.catalog.list_categories()?;
            print!(
                "{}",
                format_expense_list(
                    &expenses,
                    &categories,
                    &settings.currency_symbol,
                    &settings.date_format,
                )
            );
        }
    }

    Ok(())
}
