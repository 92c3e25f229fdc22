//! Expense aggregation
//!
//! Sums active (not soft-deleted) expenses of one category inside a date
//! window. Dates compare as calendar days and both window ends are inclusive.

use chrono::NaiveDate;

use super::counters::{first_of_month, last_day_of_month};
use crate::models::{CategoryId, Expense, FiscalYearRange, Money};

/// Total spent in `category_id` between `start` and `end`, inclusive
pub fn expense_total_between(
    expenses: &[Expense],
    category_id: CategoryId,
    start: NaiveDate,
    end: NaiveDate,
) -> Money {
    expenses
        .iter()
        .filter(|e| e.is_active())
        .filter(|e| e.category_id == category_id)
        .filter(|e| e.date >= start && e.date <= end)
        .map(|e| e.amount)
        .sum()
}

/// Total spent in `category_id` during a fiscal year
pub fn yearly_expense_total(
    expenses: &[Expense],
    category_id: CategoryId,
    range: &FiscalYearRange,
) -> Money {
    expense_total_between(expenses, category_id, range.start, range.end)
}

/// Total spent in `category_id` during one calendar month
pub fn monthly_expense_total(
    expenses: &[Expense],
    category_id: CategoryId,
    year: i32,
    month: u32,
) -> Money {
    expense_total_between(
        expenses,
        category_id,
        first_of_month(year, month),
        last_day_of_month(year, month),
    )
}
