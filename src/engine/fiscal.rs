//! Fiscal period resolver

use chrono::{Datelike, Duration, NaiveDate};

use super::counters::first_of_month;
use crate::models::{FiscalStartMonth, FiscalYearRange};

/// Resolve the fiscal year containing `base_date`
///
/// The year starts on day 1 of `fiscal_start_month` and ends the day before
/// the same month one year later.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use kakeibo::engine::fiscal_year_range;
/// use kakeibo::models::FiscalStartMonth;
///
/// let range = fiscal_year_range(
///     NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
///     FiscalStartMonth::APRIL,
/// );
/// assert_eq!(range.start, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
/// assert_eq!(range.end, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
/// ```
pub fn fiscal_year_range(base_date: NaiveDate, fiscal_start_month: FiscalStartMonth) -> FiscalYearRange {
    let month = fiscal_start_month.month();
    let start_year = if base_date.month() >= month {
        base_date.year()
    } else {
        base_date.year() - 1
    };

    FiscalYearRange {
        start: first_of_month(start_year, month),
        end: first_of_month(start_year + 1, month) - Duration::days(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn start(month: u32) -> FiscalStartMonth {
        FiscalStartMonth::new(month).unwrap()
    }

    #[test]
    fn test_range_before_start_month_uses_previous_year() {
        let range = fiscal_year_range(date(2025, 1, 15), start(4));
        assert_eq!(range.start, date(2024, 4, 1));
        assert_eq!(range.end, date(2025, 3, 31));
    }

    #[test]
    fn test_range_on_first_day() {
        let range = fiscal_year_range(date(2024, 4, 1), start(4));
        assert_eq!(range.start, date(2024, 4, 1));
        assert_eq!(range.end, date(2025, 3, 31));
    }

    #[test]
    fn test_range_on_last_day() {
        let range = fiscal_year_range(date(2025, 3, 31), start(4));
        assert_eq!(range.start, date(2024, 4, 1));
        assert_eq!(range.end, date(2025, 3, 31));
    }

    #[test]
    fn test_january_start_is_calendar_year() {
        let range = fiscal_year_range(date(2024, 7, 4), start(1));
        assert_eq!(range.start, date(2024, 1, 1));
        assert_eq!(range.end, date(2024, 12, 31));
    }

    #[test]
    fn test_march_start_ends_on_leap_day() {
        let range = fiscal_year_range(date(2023, 6, 1), start(3));
        assert_eq!(range.start, date(2023, 3, 1));
        assert_eq!(range.end, date(2024, 2, 29));
    }

    #[test]
    fn test_range_always_contains_base_and_spans_twelve_months() {
        for fiscal in 1..=12 {
            let mut day = date(2023, 1, 1);
            while day <= date(2025, 12, 31) {
                let range = fiscal_year_range(day, start(fiscal));
                assert!(range.contains(day), "{day} not in {range}");
                assert_eq!(range.start.day(), 1);
                assert_eq!(range.start.month(), fiscal);

                let next = range.end + Duration::days(1);
                assert_eq!(next.day(), 1);
                assert_eq!(next.month(), fiscal);
                assert_eq!(next.year(), range.start.year() + 1);

                day += Duration::days(9);
            }
        }
    }
}
