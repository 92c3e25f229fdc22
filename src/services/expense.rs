//! Expense service
//!
//! Records, edits and soft-deletes expenses in the in-memory store. This is
//! where inputs are validated before they can reach the engine: amounts must
//! not be negative, categories must exist, and expenses in fixed categories
//! keep their category and date.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{Category, CategoryId, CategoryKind, Expense, ExpenseId, Money};
use crate::storage::Storage;

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub category_id: CategoryId,
    pub amount: Money,
    pub date: NaiveDate,
    pub memo: Option<String>,
}

/// Fields to change on an existing expense; `None` leaves a field as is
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub category_id: Option<CategoryId>,
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
    /// `Some("")` clears the memo
    pub memo: Option<String>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    fn require_category(&self, id: CategoryId) -> KakeiboResult<Category> {
        self.storage
            .catalog
            .get_category(id)?
            .ok_or_else(|| KakeiboError::category_not_found(id.to_string()))
    }

    fn require_expense(&self, id: ExpenseId) -> KakeiboResult<Expense> {
        self.storage
            .expenses
            .get(id)?
            .ok_or_else(|| KakeiboError::expense_not_found(id.to_string()))
    }

    fn validate_amount(amount: Money) -> KakeiboResult<()> {
        if amount.is_negative() {
            return Err(KakeiboError::Validation(format!(
                "Expense amount cannot be negative: {}",
                amount
            )));
        }
        if amount.exceeds_max() {
            return Err(KakeiboError::Validation(format!(
                "Expense amount {} exceeds the maximum of {}",
                amount,
                Money::MAX_AMOUNT
            )));
        }
        Ok(())
    }

    /// Record a new expense
    pub fn add(&self, input: NewExpense) -> KakeiboResult<Expense> {
        let category = self.require_category(input.category_id)?;
        Self::validate_amount(input.amount)?;

        let mut expense = Expense::new(category.id, input.amount, input.date);
        expense.set_memo(input.memo);

        self.storage.expenses.insert(expense.clone())?;

        info!(
            id = %expense.id,
            category = %category.name,
            amount = expense.amount.units(),
            date = %expense.date,
            "expense recorded"
        );
        Ok(expense)
    }

    /// Edit an active expense
    pub fn update(&self, id: ExpenseId, update: ExpenseUpdate) -> KakeiboResult<Expense> {
        let mut expense = self.require_expense(id)?;
        if expense.is_deleted {
            return Err(KakeiboError::Validation(format!(
                "Cannot edit deleted expense {}",
                id
            )));
        }

        let current_category = self.require_category(expense.category_id)?;
        if current_category.kind.is_fixed() {
            if update.category_id.is_some_and(|c| c != expense.category_id) {
                return Err(KakeiboError::Immutable {
                    field: "category",
                    expense: id.to_string(),
                });
            }
            if update.date.is_some_and(|d| d != expense.date) {
                return Err(KakeiboError::Immutable {
                    field: "date",
                    expense: id.to_string(),
                });
            }
        }

        if let Some(category_id) = update.category_id {
            expense.category_id = self.require_category(category_id)?.id;
        }
        if let Some(amount) = update.amount {
            Self::validate_amount(amount)?;
            expense.amount = amount;
        }
        if let Some(date) = update.date {
            expense.date = date;
        }
        if let Some(memo) = update.memo {
            expense.set_memo(Some(memo));
        }

        expense.touch();
        self.storage.expenses.upsert(expense.clone())?;

        debug!(id = %expense.id, "expense updated");
        Ok(expense)
    }

    /// Soft-delete an expense; deleting twice is a no-op
    pub fn delete(&self, id: ExpenseId) -> KakeiboResult<Expense> {
        let mut expense = self.require_expense(id)?;
        if expense.is_deleted {
            return Ok(expense);
        }

        expense.soft_delete();
        self.storage.expenses.upsert(expense.clone())?;

        info!(id = %expense.id, "expense deleted");
        Ok(expense)
    }

    pub fn get(&self, id: ExpenseId) -> KakeiboResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// All non-deleted expenses, newest first
    pub fn list_active(&self) -> KakeiboResult<Vec<Expense>> {
        Ok(self
            .storage
            .expenses
            .get_all()?
            .into_iter()
            .filter(Expense::is_active)
            .collect())
    }

    /// Expenses of one category, newest first
    pub fn list_for_category(
        &self,
        category_id: CategoryId,
        include_deleted: bool,
    ) -> KakeiboResult<Vec<Expense>> {
        self.require_category(category_id)?;
        Ok(self
            .storage
            .expenses
            .get_by_category(category_id)?
            .into_iter()
            .filter(|e| include_deleted || e.is_active())
            .collect())
    }

    /// Expenses whose category has the given kind, newest first
    pub fn list_by_kind(
        &self,
        kind: CategoryKind,
        include_deleted: bool,
    ) -> KakeiboResult<Vec<Expense>> {
        let categories: Vec<CategoryId> = self
            .storage
            .catalog
            .list_categories()?
            .into_iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.id)
            .collect();

        Ok(self
            .storage
            .expenses
            .get_all()?
            .into_iter()
            .filter(|e| include_deleted || e.is_active())
            .filter(|e| categories.contains(&e.category_id))
            .collect())
    }
}
