//! Remaining-amount cascade
//!
//! Spreads what is left of a yearly allocation evenly over what is left of
//! the year, then over what is left of the month:
//!
//! - yearly  = allocation - spent this fiscal year (may be negative)
//! - monthly = floor(yearly / fiscal months left)
//! - daily   = floor(monthly / days left in the calendar month)

use chrono::NaiveDate;
use tracing::trace;

use super::aggregate::yearly_expense_total;
use super::counters::{remaining_days, remaining_months};
use super::fiscal::fiscal_year_range;
use crate::models::{Budget, Expense, FiscalStartMonth, FiscalYearRange, Money};

/// Allocation minus everything spent in the fiscal year containing `base_date`
pub fn yearly_remaining(
    budget: &Budget,
    expenses: &[Expense],
    base_date: NaiveDate,
    fiscal_start_month: FiscalStartMonth,
) -> Money {
    let range = fiscal_year_range(base_date, fiscal_start_month);
    let spent = yearly_expense_total(expenses, budget.category_id, &range);

    budget.yearly_amount - spent
}

/// Yearly remaining spread over the fiscal months left, floored
pub fn monthly_remaining(
    budget: &Budget,
    expenses: &[Expense],
    base_date: NaiveDate,
    fiscal_start_month: FiscalStartMonth,
) -> Money {
    let yearly = yearly_remaining(budget, expenses, base_date, fiscal_start_month);

    yearly.floor_div(remaining_months(base_date, fiscal_start_month))
}

/// Monthly remaining spread over the days left in the month, floored
pub fn daily_remaining(
    budget: &Budget,
    expenses: &[Expense],
    base_date: NaiveDate,
    fiscal_start_month: FiscalStartMonth,
) -> Money {
    let monthly = monthly_remaining(budget, expenses, base_date, fiscal_start_month);

    monthly.floor_div(remaining_days(base_date))
}

/// Every intermediate value of the cascade for one budget and date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemainingBreakdown {
    pub range: FiscalYearRange,
    /// Spent in the fiscal year so far
    pub spent: Money,
    pub yearly: Money,
    pub months_left: u32,
    pub monthly: Money,
    pub days_left: u32,
    pub daily: Money,
}

impl RemainingBreakdown {
    pub fn is_overspent(&self) -> bool {
        self.yearly.is_negative()
    }
}

/// Compute the whole cascade in one pass
///
/// The values match [`yearly_remaining`], [`monthly_remaining`] and
/// [`daily_remaining`] for the same arguments.
pub fn remaining_breakdown(
    budget: &Budget,
    expenses: &[Expense],
    base_date: NaiveDate,
    fiscal_start_month: FiscalStartMonth,
) -> RemainingBreakdown {
    let range = fiscal_year_range(base_date, fiscal_start_month);
    let spent = yearly_expense_total(expenses, budget.category_id, &range);
    let yearly = budget.yearly_amount - spent;

    let months_left = remaining_months(base_date, fiscal_start_month);
    let monthly = yearly.floor_div(months_left);

    let days_left = remaining_days(base_date);
    let daily = monthly.floor_div(days_left);

    trace!(
        category = %budget.category_id,
        %base_date,
        spent = spent.units(),
        yearly = yearly.units(),
        monthly = monthly.units(),
        daily = daily.units(),
        "computed remaining budget"
    );

    RemainingBreakdown {
        range,
        spent,
        yearly,
        months_left,
        monthly,
        days_left,
        daily,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rent_budget() -> Budget {
        Budget::new(1, Money::new(1_200_000))
    }

    fn first_month_expenses() -> Vec<Expense> {
        vec![Expense::new(1, Money::new(100_000), date(2024, 4, 1))]
    }

    #[test]
    fn test_end_to_end_first_day_of_fiscal_year() {
        let budget = rent_budget();
        let expenses = first_month_expenses();
        let today = date(2024, 4, 1);
        let april = FiscalStartMonth::APRIL;

        assert_eq!(yearly_remaining(&budget, &expenses, today, april), Money::new(1_100_000));
        assert_eq!(monthly_remaining(&budget, &expenses, today, april), Money::new(91_666));
        assert_eq!(daily_remaining(&budget, &expenses, today, april), Money::new(3_055));
    }

    #[test]
    fn test_breakdown_matches_individual_functions() {
        let budget = Budget::new(2, Money::new(360_000));
        let expenses = vec![
            Expense::new(2, Money::new(12_345), date(2024, 6, 3)),
            Expense::new(2, Money::new(8_000), date(2024, 9, 18)),
            Expense::new(3, Money::new(50_000), date(2024, 9, 18)),
        ];
        let april = FiscalStartMonth::APRIL;

        for today in [date(2024, 4, 1), date(2024, 9, 20), date(2025, 2, 28), date(2025, 3, 31)] {
            let breakdown = remaining_breakdown(&budget, &expenses, today, april);
            assert_eq!(breakdown.yearly, yearly_remaining(&budget, &expenses, today, april));
            assert_eq!(breakdown.monthly, monthly_remaining(&budget, &expenses, today, april));
            assert_eq!(breakdown.daily, daily_remaining(&budget, &expenses, today, april));
        }
    }

    #[test]
    fn test_overspend_is_negative_and_floors_down() {
        let budget = Budget::new(3, Money::new(100_000));
        let expenses = vec![Expense::new(3, Money::new(100_001), date(2024, 10, 5))];
        let today = date(2024, 10, 5);

        let breakdown = remaining_breakdown(&budget, &expenses, today, FiscalStartMonth::APRIL);
        assert!(breakdown.is_overspent());
        assert_eq!(breakdown.yearly, Money::new(-1));
        // floor(-1 / 6) = -1, floor(-1 / 27) = -1
        assert_eq!(breakdown.months_left, 6);
        assert_eq!(breakdown.monthly, Money::new(-1));
        assert_eq!(breakdown.days_left, 27);
        assert_eq!(breakdown.daily, Money::new(-1));
    }

    #[test]
    fn test_last_fiscal_month_gets_everything_left() {
        let budget = Budget::new(2, Money::new(360_000));
        let expenses = vec![Expense::new(2, Money::new(300_000), date(2024, 12, 1))];
        let today = date(2025, 3, 1);

        let breakdown = remaining_breakdown(&budget, &expenses, today, FiscalStartMonth::APRIL);
        assert_eq!(breakdown.months_left, 1);
        assert_eq!(breakdown.monthly, Money::new(60_000));
        assert_eq!(breakdown.days_left, 31);
        assert_eq!(breakdown.daily, Money::new(1_935));
    }

    #[test]
    fn test_spending_in_previous_fiscal_year_is_ignored() {
        let budget = rent_budget();
        let expenses = vec![Expense::new(1, Money::new(100_000), date(2024, 3, 31))];
        let yearly = yearly_remaining(&budget, &expenses, date(2024, 4, 1), FiscalStartMonth::APRIL);
        assert_eq!(yearly, budget.yearly_amount);
    }

    #[test]
    fn test_increasing_an_expense_lowers_every_level() {
        let budget = Budget::new(2, Money::new(360_000));
        let today = date(2024, 11, 12);
        let april = FiscalStartMonth::APRIL;
        let mut expenses = vec![
            Expense::new(2, Money::new(40_000), date(2024, 7, 1)),
            Expense::new(2, Money::new(1_000), date(2024, 11, 11)),
        ];

        for delta in [1, 29, 5_000, 123_456] {
            let before = remaining_breakdown(&budget, &expenses, today, april);
            expenses[1].amount += Money::new(delta);
            let after = remaining_breakdown(&budget, &expenses, today, april);
            assert_eq!(before.yearly - after.yearly, Money::new(delta));
            assert!(after.monthly <= before.monthly);
            assert!(after.daily <= before.daily);
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let budget = rent_budget();
        let expenses = first_month_expenses();
        let today = date(2024, 8, 15);

        let first = remaining_breakdown(&budget, &expenses, today, FiscalStartMonth::APRIL);
        let second = remaining_breakdown(&budget, &expenses, today, FiscalStartMonth::APRIL);
        assert_eq!(first, second);
    }
}
