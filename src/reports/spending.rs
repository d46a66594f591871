//! Spending Report
//!
//! Aggregates the ledger by category. The same totals drive every chart
//! view (bar, pie, scatter); categories without expenses never appear.

use std::collections::HashMap;
use std::io::Write;

use crate::display::report::{format_bar, format_percentage};
use crate::error::ExpenseResult;
use crate::models::{Amount, Expense};

/// Width of the bar column in terminal output
const BAR_WIDTH: usize = 20;

/// Spending total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    /// Sum of the category's expense amounts
    pub total: Amount,
    /// Number of expenses in the category
    pub count: usize,
    /// Share of all spending, in percent
    pub percentage: f64,
}

/// Spending Report
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingReport {
    /// Totals in order of each category's first expense
    pub categories: Vec<CategoryTotal>,
    pub total_spending: Amount,
    pub expense_count: usize,
}

impl SpendingReport {
    /// Aggregate expenses by category
    pub fn generate(expenses: &[Expense]) -> Self {
        let mut categories: Vec<CategoryTotal> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for expense in expenses {
            let slot = *index.entry(expense.category.as_str()).or_insert_with(|| {
                categories.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: Amount::zero(),
                    count: 0,
                    percentage: 0.0,
                });
                categories.len() - 1
            });

            let entry = &mut categories[slot];
            entry.total += expense.amount;
            entry.count += 1;
        }

        let share_base: f64 = categories.iter().map(|c| c.total.value().abs()).sum();
        for category in &mut categories {
            category.percentage = if share_base == 0.0 {
                0.0
            } else {
                category.total.value().abs() / share_base * 100.0
            };
        }

        Self {
            total_spending: expenses.iter().map(|e| e.amount).sum(),
            expense_count: expenses.len(),
            categories,
        }
    }

    /// Whether there is anything to chart
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Get the total for one category
    pub fn get(&self, category: &str) -> Option<&CategoryTotal> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Categories with the most spending first
    pub fn top_categories(&self, limit: usize) -> Vec<&CategoryTotal> {
        let mut sorted: Vec<&CategoryTotal> = self.categories.iter().collect();
        sorted.sort_by(|a, b| b.total.value().total_cmp(&a.total.value()));
        sorted.into_iter().take(limit).collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str, limit: Option<usize>) -> String {
        if self.is_empty() {
            return "No expenses to display.\n".to_string();
        }

        let rows: Vec<&CategoryTotal> = match limit {
            Some(n) => self.top_categories(n),
            None => self.categories.iter().collect(),
        };
        let max_total = rows
            .iter()
            .map(|c| c.total.value())
            .fold(0.0_f64, f64::max);

        let mut output = String::new();
        output.push_str("Expense Distribution by Category\n");
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>12} {:>6} {:>7}  {}\n",
            "Category", "Amount", "Count", "%", "Share"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for row in rows {
            output.push_str(&format!(
                "{:<20} {:>12} {:>6} {:>7}  {}\n",
                row.category,
                row.total.format_with_symbol(currency_symbol),
                row.count,
                format_percentage(row.percentage),
                format_bar(row.total.value(), max_total, BAR_WIDTH)
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>12} {:>6}\n",
            "TOTAL",
            self.total_spending.format_with_symbol(currency_symbol),
            self.expense_count
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> ExpenseResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["Category", "Amount", "Count", "Percentage"])?;

        for row in &self.categories {
            csv_writer.write_record([
                row.category.clone(),
                format!("{:.2}", row.total.value()),
                row.count.to_string(),
                format!("{:.2}", row.percentage),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
