//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod fiscal;
pub mod remaining;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use fiscal::{handle_fiscal_year_command, FiscalYearArgs};
pub use remaining::{handle_remaining_command, RemainingArgs};
