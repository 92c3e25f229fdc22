//! Spending categories
//!
//! A category is the unit budgets are allocated to and expenses are booked
//! against. Its kind decides how the household treats it: fixed costs such as
//! rent are booked once a month and may not be moved in time or re-filed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::CategoryId;

/// How a category behaves in the household ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// Same amount every month (rent, subscriptions)
    Fixed,
    /// Recurring with a varying amount (utilities)
    SemiFixed,
    /// Irregular, one-off spending (gifts, social events)
    OneTime,
    /// Day-to-day spending (groceries)
    #[default]
    Daily,
}

impl CategoryKind {
    /// Expenses in fixed categories keep their category and date once recorded
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed)
    }

    pub fn all() -> [CategoryKind; 4] {
        [Self::Fixed, Self::SemiFixed, Self::OneTime, Self::Daily]
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "fixed"),
            Self::SemiFixed => write!(f, "semi_fixed"),
            Self::OneTime => write!(f, "one_time"),
            Self::Daily => write!(f, "daily"),
        }
    }
}

impl FromStr for CategoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "fixed" => Ok(Self::Fixed),
            "semi_fixed" | "semifixed" => Ok(Self::SemiFixed),
            "one_time" | "onetime" => Ok(Self::OneTime),
            "daily" => Ok(Self::Daily),
            other => Err(format!("Unknown category kind: {}", other)),
        }
    }
}

/// A spending category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,

    /// Display name
    pub name: String,

    #[serde(default)]
    pub kind: CategoryKind,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.chars().count() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.chars().count()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
