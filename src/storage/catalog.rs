//! Category and budget catalog
//!
//! Both maps are keyed by category id. A category can hold at most one
//! yearly budget; a second one is rejected when it is inserted rather than
//! silently shadowed.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{Budget, Category, CategoryId};

use super::{read_lock, write_lock};

/// In-memory catalog of categories and their yearly budgets
#[derive(Debug, Default)]
pub struct Catalog {
    categories: RwLock<HashMap<CategoryId, Category>>,
    budgets: RwLock<HashMap<CategoryId, Budget>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category, rejecting invalid names and duplicate ids
    pub fn insert_category(&self, category: Category) -> KakeiboResult<()> {
        category
            .validate()
            .map_err(|e| KakeiboError::Validation(e.to_string()))?;

        let mut categories = write_lock(&self.categories)?;
        if categories.contains_key(&category.id) {
            return Err(KakeiboError::duplicate_category(category.id.to_string()));
        }

        debug!(id = %category.id, name = %category.name, kind = %category.kind, "category added");
        categories.insert(category.id, category);
        Ok(())
    }

    /// Add a yearly budget for an existing category
    pub fn insert_budget(&self, budget: Budget) -> KakeiboResult<()> {
        budget
            .validate()
            .map_err(|e| KakeiboError::Validation(e.to_string()))?;

        if !read_lock(&self.categories)?.contains_key(&budget.category_id) {
            return Err(KakeiboError::category_not_found(budget.category_id.to_string()));
        }

        let mut budgets = write_lock(&self.budgets)?;
        if budgets.contains_key(&budget.category_id) {
            return Err(KakeiboError::duplicate_budget(budget.category_id.to_string()));
        }

        debug!(category = %budget.category_id, yearly = budget.yearly_amount.units(), "budget added");
        budgets.insert(budget.category_id, budget);
        Ok(())
    }

    pub fn get_category(&self, id: CategoryId) -> KakeiboResult<Option<Category>> {
        Ok(read_lock(&self.categories)?.get(&id).cloned())
    }

    pub fn get_budget(&self, category_id: CategoryId) -> KakeiboResult<Option<Budget>> {
        Ok(read_lock(&self.budgets)?.get(&category_id).cloned())
    }

    /// All categories ordered by id
    pub fn list_categories(&self) -> KakeiboResult<Vec<Category>> {
        let mut categories: Vec<_> = read_lock(&self.categories)?.values().cloned().collect();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    /// All budgets ordered by category id
    pub fn list_budgets(&self) -> KakeiboResult<Vec<Budget>> {
        let mut budgets: Vec<_> = read_lock(&self.budgets)?.values().cloned().collect();
        budgets.sort_by_key(|b| b.category_id);
        Ok(budgets)
    }

    pub fn category_count(&self) -> KakeiboResult<usize> {
        Ok(read_lock(&self.categories)?.len())
    }
}
