//! Reports module for Kakeibo
//!
//! Reports gather service results for one reference date and render them for
//! the terminal or export them as JSON.

pub mod remaining;

pub use remaining::{RemainingReport, RemainingReportRow};
