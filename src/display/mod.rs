//! Display formatting for terminal output
//!
//! Turns service results into `tabled` tables and short summaries. Amounts
//! are always printed with the configured currency symbol.

pub mod expense;
pub mod fiscal;
pub mod remaining;

pub use expense::format_expense_list;
pub use fiscal::format_fiscal_summary;
pub use remaining::{format_remaining_details, format_remaining_table};

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Money;

pub(crate) fn amount(money: Money, symbol: &str) -> String {
    money.format_with_symbol(symbol)
}

/// Render rows with the shared table style, right-aligning columns from
/// `first_numeric` onwards
pub(crate) fn render_table<T: Tabled>(rows: Vec<T>, first_numeric: usize) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(first_numeric..)).with(Alignment::right()))
        .to_string()
}
