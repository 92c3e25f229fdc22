//! Ledger seed files
//!
//! A seed is a read-only snapshot of categories, budgets and expenses used to
//! populate the in-memory store at start-up. It is never written back.
//!
//! ```yaml
//! categories:
//!   - { id: 2, name: 食費, kind: daily }
//! budgets:
//!   - { category_id: 2, yearly_amount: 360000 }
//! expenses:
//!   - { category_id: 2, amount: 1200, date: 2024-04-02, memo: lunch }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{Budget, Category, Expense};

use super::file_io::{read_json_required, read_yaml_required};

/// Contents of a ledger seed file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSeed {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

/// Load a seed from a `.json`, `.yaml` or `.yml` file
pub fn load_seed(path: impl AsRef<Path>) -> KakeiboResult<LedgerSeed> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => read_json_required(path),
        Some("yaml") | Some("yml") => read_yaml_required(path),
        _ => Err(KakeiboError::Validation(format!(
            "Unsupported ledger file (expected .json, .yaml or .yml): {}",
            path.display()
        ))),
    }
}
