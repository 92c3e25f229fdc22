//! Expense display formatting

use std::collections::HashMap;

use tabled::Tabled;

use super::{amount, render_table};
use crate::models::{Category, CategoryId, Expense};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Memo")]
    memo: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format expenses as a table
///
/// Deleted expenses are marked so `--all` listings stay readable.
pub fn format_expense_list(
    expenses: &[Expense],
    categories: &[Category],
    symbol: &str,
    date_format: &str,
) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let names: HashMap<CategoryId, &str> = categories
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow {
            id: if e.is_deleted {
                format!("{} (deleted)", e.id)
            } else {
                e.id.to_string()
            },
            date: e.date.format(date_format).to_string(),
            category: names
                .get(&e.category_id)
                .map(|n| n.to_string())
                .unwrap_or_else(|| e.category_id.to_string()),
            memo: e.memo.clone().unwrap_or_default(),
            amount: amount(e.amount, symbol),
        })
        .collect();

    let total = expenses
        .iter()
        .filter(|e| e.is_active())
        .map(|e| e.amount)
        .sum();

    let mut output = render_table(rows, 4);
    output.push('\n');
    output.push_str(&format!(
        "{} expense(s), total {}\n",
        expenses.len(),
        amount(total, symbol)
    ));
    output
}
