//! Fiscal period service
//!
//! Binds the engine's fiscal-year functions to the configured start month
//! and resolves the reference date the user asked about.

use chrono::{Duration, Local, NaiveDate};

use crate::config::settings::Settings;
use crate::engine;
use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{FiscalStartMonth, FiscalYearRange};

/// Service for fiscal period questions
pub struct FiscalService<'a> {
    settings: &'a Settings,
}

impl<'a> FiscalService<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    pub fn fiscal_start_month(&self) -> FiscalStartMonth {
        self.settings.fiscal_start_month
    }

    /// Today's date in the local time zone
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    /// The fiscal year containing today
    pub fn current_range(&self) -> FiscalYearRange {
        self.range_for(self.today())
    }

    /// The fiscal year containing `date`
    pub fn range_for(&self, date: NaiveDate) -> FiscalYearRange {
        engine::fiscal_year_range(date, self.fiscal_start_month())
    }

    /// Fiscal months left, including the month of `date`
    pub fn remaining_months(&self, date: NaiveDate) -> u32 {
        engine::remaining_months(date, self.fiscal_start_month())
    }

    /// Days left in the month of `date`, including `date`
    pub fn remaining_days(&self, date: NaiveDate) -> u32 {
        engine::remaining_days(date)
    }

    /// Parse a date string or fall back to today
    ///
    /// Accepts "today", "yesterday", the configured date format and ISO
    /// `YYYY-MM-DD`.
    pub fn parse_date_or_today(&self, input: Option<&str>) -> KakeiboResult<NaiveDate> {
        let Some(raw) = input else {
            return Ok(self.today());
        };

        let s = raw.trim();
        match s.to_lowercase().as_str() {
            "today" | "now" => return Ok(self.today()),
            "yesterday" => return Ok(self.today() - Duration::days(1)),
            _ => {}
        }

        NaiveDate::parse_from_str(s, &self.settings.date_format)
            .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
            .map_err(|_| KakeiboError::Validation(format!("Invalid date: {}", raw)))
    }
}
