//! Fiscal year types
//!
//! A fiscal year is twelve calendar months starting on a configurable month.
//! The start month is validated once, when it enters the program, so the
//! engine can treat it as always being in 1..=12.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar month (1..=12) on which the fiscal year starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FiscalStartMonth(u32);

impl FiscalStartMonth {
    pub const JANUARY: Self = Self(1);
    pub const APRIL: Self = Self(4);

    /// Create a start month, rejecting values outside 1..=12
    pub fn new(month: u32) -> Result<Self, FiscalMonthError> {
        if (1..=12).contains(&month) {
            Ok(Self(month))
        } else {
            Err(FiscalMonthError(month))
        }
    }

    pub const fn month(&self) -> u32 {
        self.0
    }
}

impl Default for FiscalStartMonth {
    /// April, the start of the Japanese fiscal and school year
    fn default() -> Self {
        Self::APRIL
    }
}

impl TryFrom<u32> for FiscalStartMonth {
    type Error = FiscalMonthError;

    fn try_from(month: u32) -> Result<Self, Self::Error> {
        Self::new(month)
    }
}

impl From<FiscalStartMonth> for u32 {
    fn from(month: FiscalStartMonth) -> Self {
        month.0
    }
}

impl FromStr for FiscalStartMonth {
    type Err = FiscalMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let month: u32 = s.trim().parse().map_err(|_| FiscalMonthError(0))?;
        Self::new(month)
    }
}

impl fmt::Display for FiscalStartMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error for a fiscal start month outside 1..=12
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiscalMonthError(pub u32);

impl fmt::Display for FiscalMonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fiscal start month must be between 1 and 12 (got {})", self.0)
    }
}

impl std::error::Error for FiscalMonthError {}

/// Inclusive date range covering one fiscal year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FiscalYearRange {
    /// First day of the fiscal year
    pub start: NaiveDate,
    /// Last day of the fiscal year
    pub end: NaiveDate,
}

impl FiscalYearRange {
    /// Check if a date falls within the range, both ends inclusive
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Calendar year the fiscal year starts in, used for labels like "FY2024"
    pub fn start_year(&self) -> i32 {
        self.start.year()
    }

    /// Number of days in the fiscal year (365 or 366)
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for FiscalYearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FY{} ({}..{})",
            self.start_year(),
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}
