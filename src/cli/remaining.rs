//! Remaining budget CLI command

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_remaining_details;
use crate::error::KakeiboResult;
use crate::models::CategoryId;
use crate::reports::RemainingReport;
use crate::services::FiscalService;
use crate::storage::Storage;

/// Arguments for `kakeibo remaining`
#[derive(Args, Debug)]
pub struct RemainingArgs {
    /// Reference date (YYYY-MM-DD, "today" or "yesterday"); defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Only show this category ID
    #[arg(short, long)]
    pub category: Option<CategoryId>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Handle the remaining command
pub fn handle_remaining_command(
    storage: &Storage,
    settings: &Settings,
    args: RemainingArgs,
) -> KakeiboResult<()> {
    let fiscal = FiscalService::new(settings);
    let date = fiscal.parse_date_or_today(args.date.as_deref())?;
    let start_month = fiscal.fiscal_start_month();

    let report = match args.category {
        Some(category_id) => {
            RemainingReport::generate_for_category(storage, start_month, category_id, date)?
        }
        None => RemainingReport::generate(storage, start_month, date)?,
    };

    if args.json {
        report.export_json(&mut std::io::stdout().lock())?;
        return Ok(());
    }

    match report.rows.as_slice() {
        [single] if args.category.is_some() => {
            print!("{}", format_remaining_details(single, &settings.currency_symbol));
        }
        _ => print!("{}", report.format_terminal(&settings.currency_symbol)),
    }
    Ok(())
}
