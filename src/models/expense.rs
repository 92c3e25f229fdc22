//! Expense model
//!
//! An expense is one recorded payment against a category. Deleting an
//! expense only flags it; the record stays in the store and is skipped by
//! every aggregation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, ExpenseId};
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier (generated when absent from a seed file)
    #[serde(default)]
    pub id: ExpenseId,

    /// The category this expense is booked against
    pub category_id: CategoryId,

    /// Amount spent, in whole currency units
    pub amount: Money,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Optional free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,

    /// Soft-delete flag
    #[serde(default)]
    pub is_deleted: bool,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new active expense
    pub fn new(category_id: impl Into<CategoryId>, amount: Money, date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            category_id: category_id.into(),
            amount,
            date,
            memo: None,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach a memo; blank memos are dropped
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.set_memo(Some(memo.into()));
        self
    }

    pub fn set_memo(&mut self, memo: Option<String>) {
        self.memo = memo
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());
    }

    /// Whether this expense still counts toward spending
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }

    /// Flag the expense as deleted
    pub fn soft_delete(&mut self) {
        if !self.is_deleted {
            self.is_deleted = true;
            self.touch();
        }
    }

    /// Mark as modified now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }
        if self.amount.exceeds_max() {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (category {})", self.date, self.amount, self.category_id)?;
        if let Some(memo) = &self.memo {
            write!(f, " - {}", memo)?;
        }
        Ok(())
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Expense amount cannot be negative: {}", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(
                    f,
                    "Expense amount {} exceeds the maximum of {}",
                    amount,
                    Money::MAX_AMOUNT
                )
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_expense_is_active() {
        let expense = Expense::new(2, Money::new(1_500), date(2024, 4, 3));
        assert!(expense.is_active());
        assert!(expense.memo.is_none());
        assert_eq!(expense.created_at, expense.updated_at);
    }

    #[test]
    fn test_memo_is_trimmed_and_blank_dropped() {
        let expense = Expense::new(2, Money::new(800), date(2024, 4, 3)).with_memo("  lunch ");
        assert_eq!(expense.memo.as_deref(), Some("lunch"));

        let blank = Expense::new(2, Money::new(800), date(2024, 4, 3)).with_memo("   ");
        assert!(blank.memo.is_none());
    }

    #[test]
    fn test_soft_delete_keeps_record() {
        let mut expense = Expense::new(3, Money::new(5_000), date(2024, 5, 1));
        let id = expense.id;
        expense.soft_delete();
        assert!(!expense.is_active());
        assert_eq!(expense.id, id);
        assert_eq!(expense.amount, Money::new(5_000));
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let expense = Expense::new(1, Money::new(-10), date(2024, 4, 1));
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::NegativeAmount(Money::new(-10)))
        );
    }

    #[test]
    fn test_validate_rejects_amount_above_max() {
        let ok = Expense::new(1, Money::MAX_AMOUNT, date(2024, 4, 1));
        assert!(ok.validate().is_ok());

        let huge = Expense::new(1, Money::new(i64::MAX), date(2024, 4, 1));
        assert_eq!(
            huge.validate(),
            Err(ExpenseValidationError::AmountTooLarge(Money::new(i64::MAX)))
        );
    }

    #[test]
    fn test_deserialize_minimal_seed_record() {
        let expense: Expense = serde_json::from_str(
            r#"{"category_id": 1, "amount": 100000, "date": "2024-04-01"}"#,
        )
        .unwrap();
        assert_eq!(expense.category_id, CategoryId::new(1));
        assert_eq!(expense.date, date(2024, 4, 1));
        assert!(!expense.is_deleted);
    }
}
