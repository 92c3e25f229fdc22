//! Period counters
//!
//! How many fiscal months and calendar days are left, counting the current
//! one. Both counters are at least 1 so they are always safe divisors.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::FiscalStartMonth;

/// First day of a calendar month
pub(crate) fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("day 1 exists in every month")
}

/// Last day of a calendar month
pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    first_of_month(next_year, next_month) - Duration::days(1)
}

/// Fiscal months left in the fiscal year, including the current month
///
/// In the first fiscal month this is 12, in the last it is 1.
pub fn remaining_months(base_date: NaiveDate, fiscal_start_month: FiscalStartMonth) -> u32 {
    let month = base_date.month();
    let start = fiscal_start_month.month();

    let remaining = if start <= month {
        12 - (month - start)
    } else {
        start - month
    };

    remaining.max(1)
}

/// Calendar days left in the month, including `base_date` itself
pub fn remaining_days(base_date: NaiveDate) -> u32 {
    let last_day = last_day_of_month(base_date.year(), base_date.month()).day();
    let remaining = i64::from(last_day) - i64::from(base_date.day()) + 1;

    u32::try_from(remaining).unwrap_or(0).max(1)
}
