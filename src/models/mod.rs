//! Core data models for Kakeibo
//!
//! Plain value types shared by the engine, the store and the CLI: categories,
//! yearly budgets, expenses, money and fiscal-year ranges.

pub mod budget;
pub mod category;
pub mod expense;
pub mod fiscal;
pub mod ids;
pub mod money;

pub use budget::Budget;
pub use category::{Category, CategoryKind};
pub use expense::Expense;
pub use fiscal::{FiscalMonthError, FiscalStartMonth, FiscalYearRange};
pub use ids::{CategoryId, ExpenseId};
pub use money::Money;
