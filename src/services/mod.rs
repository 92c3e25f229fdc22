//! Service layer for Kakeibo
//!
//! The service layer sits between the CLI and the store. It validates input,
//! enforces the expense editing rules and feeds store snapshots into the
//! remaining-amount engine.

pub mod budget;
pub mod expense;
pub mod fiscal;

pub use budget::{BudgetRemaining, BudgetService};
pub use expense::{ExpenseService, ExpenseUpdate, NewExpense};
pub use fiscal::FiscalService;
