//! Remaining budget display formatting

use tabled::Tabled;

use super::{amount, render_table};
use crate::services::BudgetRemaining;

#[derive(Tabled)]
struct RemainingRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Year left")]
    yearly: String,
    #[tabled(rename = "Month left")]
    monthly: String,
    #[tabled(rename = "Today")]
    daily: String,
}

impl RemainingRow {
    fn new(remaining: &BudgetRemaining, symbol: &str) -> Self {
        let yearly = amount(remaining.yearly(), symbol);
        Self {
            id: remaining.category.id.to_string(),
            category: remaining.category.name.clone(),
            kind: remaining.category.kind.to_string(),
            budget: amount(remaining.yearly_budget, symbol),
            spent: amount(remaining.spent(), symbol),
            yearly: if remaining.is_overspent() {
                format!("{} *", yearly)
            } else {
                yearly
            },
            monthly: amount(remaining.monthly(), symbol),
            daily: amount(remaining.daily(), symbol),
        }
    }
}

/// Table with one row per budget
pub fn format_remaining_table(rows: &[BudgetRemaining], symbol: &str) -> String {
    if rows.is_empty() {
        return "No budgets found.\n".to_string();
    }

    let table_rows = rows.iter().map(|r| RemainingRow::new(r, symbol)).collect();
    let mut output = render_table::<RemainingRow>(table_rows, 3);
    output.push('\n');

    if rows.iter().any(BudgetRemaining::is_overspent) {
        output.push_str("* over budget for the fiscal year\n");
    }
    output
}

/// Detailed view of one category's cascade
pub fn format_remaining_details(remaining: &BudgetRemaining, symbol: &str) -> String {
    let b = &remaining.breakdown;
    let mut output = String::new();

    output.push_str(&format!(
        "Category:      {} ({}, {})\n",
        remaining.category.name, remaining.category.id, remaining.category.kind
    ));
    output.push_str(&format!("Fiscal year:   {}\n", b.range));
    output.push_str(&format!(
        "Budget:        {}\n",
        amount(remaining.yearly_budget, symbol)
    ));
    output.push_str(&format!("Spent (year):  {}\n", amount(b.spent, symbol)));
    output.push_str(&format!(
        "Spent (month): {}\n",
        amount(remaining.month_spent, symbol)
    ));
    output.push_str(&format!("Year left:     {}\n", amount(b.yearly, symbol)));
    output.push_str(&format!(
        "Month left:    {} ({} months remaining)\n",
        amount(b.monthly, symbol),
        b.months_left
    ));
    output.push_str(&format!(
        "Today:         {} ({} days remaining)\n",
        amount(b.daily, symbol),
        b.days_left
    ));

    if remaining.is_overspent() {
        output.push_str("\nThis category is over budget for the fiscal year.\n");
    }
    output
}
