//! Default household catalog
//!
//! Used when no ledger file is given: rent, food and social spending with
//! their yearly allocations, and no expenses.

use crate::models::{Budget, Category, CategoryKind, Money};

use super::seed::LedgerSeed;

/// The starter catalog
pub fn default_seed() -> LedgerSeed {
    let defaults = [
        (1, "家賃", CategoryKind::Fixed, 1_200_000),
        (2, "食費", CategoryKind::Daily, 360_000),
        (3, "交際費", CategoryKind::OneTime, 100_000),
    ];

    let mut seed = LedgerSeed::default();
    for (id, name, kind, yearly) in defaults {
        seed.categories.push(Category::new(id, name, kind));
        seed.budgets.push(Budget::new(id, Money::new(yearly)));
    }
    seed
}
