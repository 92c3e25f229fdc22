//! Fiscal year CLI command

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_fiscal_summary;
use crate::error::KakeiboResult;
use crate::services::FiscalService;

/// Arguments for `kakeibo fiscal-year`
#[derive(Args, Debug)]
pub struct FiscalYearArgs {
    /// Reference date (YYYY-MM-DD, "today" or "yesterday"); defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Handle the fiscal-year command
pub fn handle_fiscal_year_command(settings: &Settings, args: FiscalYearArgs) -> KakeiboResult<()> {
    let service = FiscalService::new(settings);
    let date = service.parse_date_or_today(args.date.as_deref())?;

    print!(
        "{}",
        format_fiscal_summary(
            date,
            service.fiscal_start_month(),
            &service.range_for(date),
            service.remaining_months(date),
            service.remaining_days(date),
            &settings.date_format,
        )
    );
    Ok(())
}
