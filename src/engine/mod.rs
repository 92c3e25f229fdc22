//! Budget remaining engine
//!
//! Pure functions that turn a yearly allocation, a snapshot of expenses and a
//! reference date into how much is left for the fiscal year, the current
//! month and the current day:
//!
//! ```text
//! date + start month -> fiscal range -> spent -> yearly -> monthly -> daily
//! ```
//!
//! Nothing here holds state or performs I/O. Every call recomputes from its
//! arguments, so results never go stale when the expense list changes.

pub mod aggregate;
pub mod cascade;
pub mod counters;
pub mod fiscal;

pub use aggregate::{expense_total_between, monthly_expense_total, yearly_expense_total};
pub use cascade::{
    daily_remaining, monthly_remaining, remaining_breakdown, yearly_remaining, RemainingBreakdown,
};
pub use counters::{last_day_of_month, remaining_days, remaining_months};
pub use fiscal::fiscal_year_range;
