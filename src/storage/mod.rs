//! Storage layer for Kakeibo
//!
//! Everything lives in process memory. A [`Storage`] can start empty, from
//! the default household catalog, or from a read-only ledger seed file; the
//! engine only ever sees owned snapshots taken from it.

pub mod catalog;
pub mod expenses;
pub mod file_io;
pub mod init;
pub mod seed;

pub use catalog::Catalog;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json_required, read_yaml_required, write_json_atomic};
pub use init::default_seed;
pub use seed::{load_seed, LedgerSeed};

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::info;

use crate::error::{KakeiboError, KakeiboResult};

pub(crate) fn read_lock<T>(lock: &RwLock<T>) -> KakeiboResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|e| KakeiboError::Storage(format!("Failed to acquire read lock: {}", e)))
}

pub(crate) fn write_lock<T>(lock: &RwLock<T>) -> KakeiboResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|e| KakeiboError::Storage(format!("Failed to acquire write lock: {}", e)))
}

/// Main storage coordinator that provides access to the catalog and expenses
#[derive(Debug, Default)]
pub struct Storage {
    pub catalog: Catalog,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the default household catalog
    pub fn with_default_catalog() -> KakeiboResult<Self> {
        Self::from_seed(default_seed())
    }

    /// Populate a store from a seed
    ///
    /// Categories go in first, then budgets, then expenses, so every budget
    /// and expense must refer to a category present in the same seed.
    pub fn from_seed(seed: LedgerSeed) -> KakeiboResult<Self> {
        let storage = Self::new();

        for category in seed.categories {
            storage.catalog.insert_category(category)?;
        }
        for budget in seed.budgets {
            storage.catalog.insert_budget(budget)?;
        }
        for expense in seed.expenses {
            if storage.catalog.get_category(expense.category_id)?.is_none() {
                return Err(KakeiboError::category_not_found(expense.category_id.to_string()));
            }
            expense
                .validate()
                .map_err(|e| KakeiboError::Validation(e.to_string()))?;
            storage.expenses.insert(expense)?;
        }

        info!(
            categories = storage.catalog.category_count()?,
            expenses = storage.expenses.count()?,
            "ledger loaded"
        );
        Ok(storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryId, CategoryKind, Expense, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_default_catalog() {
        let storage = Storage::with_default_catalog().unwrap();
        assert_eq!(storage.catalog.list_budgets().unwrap().len(), 3);
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_seed_expense_with_unknown_category_rejected() {
        let mut seed = default_seed();
        seed.expenses.push(Expense::new(
            42,
            Money::new(100),
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        ));

        let err = Storage::from_seed(seed).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_seed_with_negative_expense_rejected() {
        let mut seed = default_seed();
        seed.expenses.push(Expense::new(
            2,
            Money::new(-100),
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        ));

        assert!(Storage::from_seed(seed).unwrap_err().is_validation());
    }

    #[test]
    fn test_seed_with_amounts_past_max_rejected() {
        let mut seed = default_seed();
        for amount in [i64::MAX, 1] {
            seed.expenses.push(Expense::new(
                2,
                Money::new(amount),
                NaiveDate::from_ymd_opt(2024, 4, 5).unwrap(),
            ));
        }
        assert!(Storage::from_seed(seed).unwrap_err().is_validation());

        let mut seed = default_seed();
        seed.budgets[0].yearly_amount = Money::new(i64::MAX);
        assert!(Storage::from_seed(seed).unwrap_err().is_validation());
    }

    #[test]
    fn test_seed_with_duplicate_budget_rejected() {
        let mut seed = LedgerSeed::default();
        seed.categories.push(Category::new(1, "家賃", CategoryKind::Fixed));
        seed.budgets.push(crate::models::Budget::new(1, Money::new(1_200_000)));
        seed.budgets.push(crate::models::Budget::new(1, Money::new(600_000)));

        let err = Storage::from_seed(seed).unwrap_err();
        assert!(matches!(err, KakeiboError::Duplicate { .. }));
    }

    #[test]
    fn test_seed_keeps_deleted_expenses() {
        let mut seed = default_seed();
        let mut deleted = Expense::new(
            2,
            Money::new(900),
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        );
        deleted.soft_delete();
        seed.expenses.push(deleted);

        let storage = Storage::from_seed(seed).unwrap();
        assert_eq!(storage.expenses.count().unwrap(), 1);
        assert_eq!(
            storage.expenses.get_by_category(CategoryId::new(2)).unwrap().len(),
            1
        );
    }
}
