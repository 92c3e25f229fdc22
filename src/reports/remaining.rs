//! Remaining Budget Report
//!
//! Every budget's yearly, monthly and daily remaining amounts on one date,
//! with totals across categories.

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::display::format_remaining_table;
use crate::error::KakeiboResult;
use crate::models::{CategoryId, CategoryKind, FiscalStartMonth, FiscalYearRange, Money};
use crate::services::{BudgetRemaining, BudgetService};
use crate::storage::Storage;

/// Export view of a single category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemainingReportRow {
    pub category_id: CategoryId,
    pub category_name: String,
    pub kind: CategoryKind,
    pub budget: Money,
    pub spent: Money,
    pub month_spent: Money,
    pub yearly_remaining: Money,
    pub months_left: u32,
    pub monthly_remaining: Money,
    pub days_left: u32,
    pub daily_remaining: Money,
}

impl From<&BudgetRemaining> for RemainingReportRow {
    fn from(r: &BudgetRemaining) -> Self {
        Self {
            category_id: r.category.id,
            category_name: r.category.name.clone(),
            kind: r.category.kind,
            budget: r.yearly_budget,
            spent: r.spent(),
            month_spent: r.month_spent,
            yearly_remaining: r.yearly(),
            months_left: r.breakdown.months_left,
            monthly_remaining: r.monthly(),
            days_left: r.breakdown.days_left,
            daily_remaining: r.daily(),
        }
    }
}

/// Remaining budget report for one reference date
#[derive(Debug, Clone)]
pub struct RemainingReport {
    pub date: NaiveDate,
    pub fiscal_start_month: FiscalStartMonth,
    pub range: FiscalYearRange,
    pub rows: Vec<BudgetRemaining>,
    pub total_budget: Money,
    pub total_spent: Money,
    pub total_remaining: Money,
}

#[derive(Serialize)]
struct ReportExport<'a> {
    date: NaiveDate,
    fiscal_start_month: FiscalStartMonth,
    fiscal_year: &'a FiscalYearRange,
    total_budget: Money,
    total_spent: Money,
    total_remaining: Money,
    categories: Vec<RemainingReportRow>,
}

impl RemainingReport {
    /// Generate the report for every budget
    pub fn generate(
        storage: &Storage,
        fiscal_start_month: FiscalStartMonth,
        date: NaiveDate,
    ) -> KakeiboResult<Self> {
        let rows = BudgetService::new(storage, fiscal_start_month).overview(date)?;
        Ok(Self::from_rows(rows, fiscal_start_month, date))
    }

    /// Generate the report for a single category
    pub fn generate_for_category(
        storage: &Storage,
        fiscal_start_month: FiscalStartMonth,
        category_id: CategoryId,
        date: NaiveDate,
    ) -> KakeiboResult<Self> {
        let row = BudgetService::new(storage, fiscal_start_month).remaining_for(category_id, date)?;
        Ok(Self::from_rows(vec![row], fiscal_start_month, date))
    }

    fn from_rows(
        rows: Vec<BudgetRemaining>,
        fiscal_start_month: FiscalStartMonth,
        date: NaiveDate,
    ) -> Self {
        Self {
            date,
            fiscal_start_month,
            range: crate::engine::fiscal_year_range(date, fiscal_start_month),
            total_budget: rows.iter().map(|r| r.yearly_budget).sum(),
            total_spent: rows.iter().map(BudgetRemaining::spent).sum(),
            total_remaining: rows.iter().map(BudgetRemaining::yearly).sum(),
            rows,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Remaining budget - {} ({})\n", self.date, self.range));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format_remaining_table(&self.rows, symbol));

        if self.rows.len() > 1 {
            output.push_str(&format!(
                "\nTotal: budget {}, spent {}, left {}\n",
                self.total_budget.format_with_symbol(symbol),
                self.total_spent.format_with_symbol(symbol),
                self.total_remaining.format_with_symbol(symbol)
            ));
        }
        output
    }

    /// Export the report as pretty JSON
    pub fn export_json<W: Write>(&self, writer: &mut W) -> KakeiboResult<()> {
        let export = ReportExport {
            date: self.date,
            fiscal_start_month: self.fiscal_start_month,
            fiscal_year: &self.range,
            total_budget: self.total_budget,
            total_spent: self.total_spent,
            total_remaining: self.total_remaining,
            categories: self.rows.iter().map(RemainingReportRow::from).collect(),
        };
        serde_json::to_writer_pretty(&mut *writer, &export)?;
        writeln!(writer)?;
        Ok(())
    }

    pub fn overspent_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_overspent()).count()
    }
}
