//! Budget service
//!
//! Answers "how much is left" for one category or for every budget, by
//! running the remaining-amount cascade over a snapshot of the expense store.

use chrono::{Datelike, NaiveDate};

use crate::engine::{self, RemainingBreakdown};
use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{Budget, Category, CategoryId, Expense, FiscalStartMonth, Money};
use crate::storage::Storage;

/// Service for budget remaining calculations
pub struct BudgetService<'a> {
    storage: &'a Storage,
    fiscal_start_month: FiscalStartMonth,
}

/// Remaining amounts for one category on one date
#[derive(Debug, Clone)]
pub struct BudgetRemaining {
    pub category: Category,
    pub yearly_budget: Money,
    /// Spent in the calendar month of the reference date
    pub month_spent: Money,
    pub breakdown: RemainingBreakdown,
}

impl BudgetRemaining {
    pub fn spent(&self) -> Money {
        self.breakdown.spent
    }

    pub fn yearly(&self) -> Money {
        self.breakdown.yearly
    }

    pub fn monthly(&self) -> Money {
        self.breakdown.monthly
    }

    pub fn daily(&self) -> Money {
        self.breakdown.daily
    }

    pub fn is_overspent(&self) -> bool {
        self.breakdown.is_overspent()
    }
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage, fiscal_start_month: FiscalStartMonth) -> Self {
        Self {
            storage,
            fiscal_start_month,
        }
    }

    /// Remaining amounts for a single category
    pub fn remaining_for(
        &self,
        category_id: CategoryId,
        date: NaiveDate,
    ) -> KakeiboResult<BudgetRemaining> {
        let budget = self
            .storage
            .catalog
            .get_budget(category_id)?
            .ok_or_else(|| KakeiboError::budget_not_found(category_id.to_string()))?;
        let expenses = self.storage.expenses.snapshot()?;

        self.compute(&budget, &expenses, date)
    }

    /// Remaining amounts for every budget, ordered by category id
    pub fn overview(&self, date: NaiveDate) -> KakeiboResult<Vec<BudgetRemaining>> {
        let expenses = self.storage.expenses.snapshot()?;

        self.storage
            .catalog
            .list_budgets()?
            .iter()
            .map(|budget| self.compute(budget, &expenses, date))
            .collect()
    }

    fn compute(
        &self,
        budget: &Budget,
        expenses: &[Expense],
        date: NaiveDate,
    ) -> KakeiboResult<BudgetRemaining> {
        let category = self
            .storage
            .catalog
            .get_category(budget.category_id)?
            .ok_or_else(|| KakeiboError::category_not_found(budget.category_id.to_string()))?;

        let breakdown =
            engine::remaining_breakdown(budget, expenses, date, self.fiscal_start_month);
        let month_spent =
            engine::monthly_expense_total(expenses, budget.category_id, date.year(), date.month());

        Ok(BudgetRemaining {
            category,
            yearly_budget: budget.yearly_amount,
            month_spent,
            breakdown,
        })
    }
}
