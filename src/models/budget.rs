//! Yearly budget allocations
//!
//! Each category carries at most one yearly allocation. Uniqueness is
//! enforced by the catalog that holds the budgets, not by this type.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

/// A yearly allocation for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub category_id: CategoryId,

    /// Amount available for the whole fiscal year
    pub yearly_amount: Money,
}

impl Budget {
    pub fn new(category_id: impl Into<CategoryId>, yearly_amount: Money) -> Self {
        Self {
            category_id: category_id.into(),
            yearly_amount,
        }
    }

    /// Validate the allocation
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.yearly_amount.is_negative() {
            return Err(BudgetValidationError::NegativeAmount(self.yearly_amount));
        }
        if self.yearly_amount.exceeds_max() {
            return Err(BudgetValidationError::AmountTooLarge(self.yearly_amount));
        }
        Ok(())
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Yearly budget cannot be negative: {}", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(
                    f,
                    "Yearly budget {} exceeds the maximum of {}",
                    amount,
                    Money::MAX_AMOUNT
                )
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
