//! Budget display formatting

use crate::models::Budget;

/// Format one `Category Budget: $x` line
pub fn format_budget_line(budget: &Budget, currency_symbol: &str) -> String {
    let mut line = format!(
        "{} Budget: {}",
        budget.category,
        budget.remaining.format_with_symbol(currency_symbol)
    );
    if budget.is_unlimited() {
        line.push_str(" (no limit)");
    }
    line
}

/// Format every category's remaining budget, in registration order
pub fn format_budget_list(budgets: &[Budget], currency_symbol: &str) -> String {
    if budgets.is_empty() {
        return "No categories. Use 'expenses category add' to create one.\n".to_string();
    }

    let mut output = String::new();
    for budget in budgets {
        output.push_str(&format_budget_line(budget, currency_symbol));
        output.push('\n');
    }
    output
}
