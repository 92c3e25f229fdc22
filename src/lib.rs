//! Kakeibo - household budget tracking from the command line
//!
//! This library computes how much of each category's yearly budget is left
//! for the rest of the fiscal year, the current month and the current day.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `engine`: Pure remaining-amount calculations (fiscal year, totals, cascade)
//! - `models`: Core data models (money, categories, budgets, expenses)
//! - `storage`: In-memory store and read-only ledger seed files
//! - `services`: Business logic layer
//! - `reports`: Remaining budget report
//! - `display`: Terminal tables
//! - `config`: Configuration and path management
//! - `cli`: Command handlers for the `kakeibo` binary
//! - `logging`: `tracing` subscriber setup
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use kakeibo::models::{CategoryId, FiscalStartMonth, Money};
//! use kakeibo::services::{BudgetService, ExpenseService, NewExpense};
//! use kakeibo::storage::Storage;
//!
//! let storage = Storage::with_default_catalog()?;
//! let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
//! ExpenseService::new(&storage).add(NewExpense {
//!     category_id: CategoryId::new(1),
//!     amount: Money::new(100_000),
//!     date,
//!     memo: None,
//! })?;
//!
//! let rent = BudgetService::new(&storage, FiscalStartMonth::APRIL)
//!     .remaining_for(CategoryId::new(1), date)?;
//! assert_eq!(rent.monthly(), Money::new(91_666));
//! assert_eq!(rent.daily(), Money::new(3_055));
//! # Ok::<(), kakeibo::KakeiboError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{KakeiboError, KakeiboResult};
