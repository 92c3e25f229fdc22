//! Fiscal year display formatting

use chrono::NaiveDate;

use crate::models::{FiscalStartMonth, FiscalYearRange};

/// Summary of the fiscal year around a date
pub fn format_fiscal_summary(
    date: NaiveDate,
    start_month: FiscalStartMonth,
    range: &FiscalYearRange,
    months_left: u32,
    days_left: u32,
    date_format: &str,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("Date:          {}\n", date.format(date_format)));
    output.push_str(&format!("Start month:   {}\n", start_month));
    output.push_str(&format!("Fiscal year:   FY{}\n", range.start_year()));
    output.push_str(&format!("Start:         {}\n", range.start.format(date_format)));
    output.push_str(&format!("End:           {}\n", range.end.format(date_format)));
    output.push_str(&format!("Days in year:  {}\n", range.num_days()));
    output.push_str(&format!("Months left:   {}\n", months_left));
    output.push_str(&format!("Days left:     {}\n", days_left));
    output
}
