//! Expense repository
//!
//! Holds every recorded expense in memory, soft-deleted ones included, with a
//! per-category index. Nothing here is written to disk.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{CategoryId, Expense, ExpenseId};

use super::{read_lock, write_lock};

/// Repository for expenses with a category index
#[derive(Debug, Default)]
pub struct ExpenseRepository {
    data: RwLock<HashMap<ExpenseId, Expense>>,
    /// Index: category_id -> expense_ids
    by_category: RwLock<HashMap<CategoryId, Vec<ExpenseId>>>,
}

fn newest_first(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
}

impl ExpenseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new expense, rejecting an id that is already present
    pub fn insert(&self, expense: Expense) -> KakeiboResult<()> {
        if read_lock(&self.data)?.contains_key(&expense.id) {
            return Err(KakeiboError::Duplicate {
                entity_type: "Expense",
                identifier: expense.id.to_string(),
            });
        }
        self.upsert(expense)
    }

    /// Insert or replace an expense, keeping the category index in sync
    pub fn upsert(&self, expense: Expense) -> KakeiboResult<()> {
        let mut data = write_lock(&self.data)?;
        let mut by_category = write_lock(&self.by_category)?;

        if let Some(old) = data.get(&expense.id) {
            if let Some(ids) = by_category.get_mut(&old.category_id) {
                ids.retain(|&id| id != expense.id);
            }
        }

        by_category
            .entry(expense.category_id)
            .or_default()
            .push(expense.id);
        data.insert(expense.id, expense);
        Ok(())
    }

    pub fn get(&self, id: ExpenseId) -> KakeiboResult<Option<Expense>> {
        Ok(read_lock(&self.data)?.get(&id).cloned())
    }

    /// All expenses, soft-deleted included, newest first
    pub fn get_all(&self) -> KakeiboResult<Vec<Expense>> {
        let mut expenses: Vec<_> = read_lock(&self.data)?.values().cloned().collect();
        newest_first(&mut expenses);
        Ok(expenses)
    }

    /// Expenses booked against one category, newest first
    pub fn get_by_category(&self, category_id: CategoryId) -> KakeiboResult<Vec<Expense>> {
        let data = read_lock(&self.data)?;
        let by_category = read_lock(&self.by_category)?;

        let ids = by_category
            .get(&category_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        let mut expenses: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        newest_first(&mut expenses);
        Ok(expenses)
    }

    /// Owned copy of every record, for handing to the engine
    pub fn snapshot(&self) -> KakeiboResult<Vec<Expense>> {
        Ok(read_lock(&self.data)?.values().cloned().collect())
    }

    /// Number of records, soft-deleted included
    pub fn count(&self) -> KakeiboResult<usize> {
        Ok(read_lock(&self.data)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let repo = ExpenseRepository::new();
        let expense = Expense::new(2, Money::new(1_200), date(2024, 4, 2));
        let id = expense.id;

        repo.insert(expense).unwrap();

        let loaded = repo.get(id).unwrap().unwrap();
        assert_eq!(loaded.amount, Money::new(1_200));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let repo = ExpenseRepository::new();
        let expense = Expense::new(2, Money::new(1_200), date(2024, 4, 2));
        repo.insert(expense.clone()).unwrap();

        let err = repo.insert(expense).unwrap_err();
        assert!(matches!(err, KakeiboError::Duplicate { entity_type: "Expense", .. }));
    }

    #[test]
    fn test_get_all_newest_first() {
        let repo = ExpenseRepository::new();
        repo.insert(Expense::new(2, Money::new(1), date(2024, 4, 2))).unwrap();
        repo.insert(Expense::new(2, Money::new(2), date(2024, 6, 2))).unwrap();
        repo.insert(Expense::new(3, Money::new(3), date(2024, 5, 2))).unwrap();

        let amounts: Vec<i64> = repo.get_all().unwrap().iter().map(|e| e.amount.units()).collect();
        assert_eq!(amounts, vec![2, 3, 1]);
    }

    #[test]
    fn test_upsert_moves_category_index() {
        let repo = ExpenseRepository::new();
        let mut expense = Expense::new(2, Money::new(500), date(2024, 4, 2));
        repo.insert(expense.clone()).unwrap();

        expense.category_id = CategoryId::new(3);
        repo.upsert(expense).unwrap();

        assert!(repo.get_by_category(CategoryId::new(2)).unwrap().is_empty());
        assert_eq!(repo.get_by_category(CategoryId::new(3)).unwrap().len(), 1);
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_snapshot_keeps_deleted_records() {
        let repo = ExpenseRepository::new();
        let mut expense = Expense::new(2, Money::new(500), date(2024, 4, 2));
        expense.soft_delete();
        repo.insert(expense).unwrap();

        let snapshot = repo.snapshot().unwrap();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot[0].is_deleted);
    }
}
