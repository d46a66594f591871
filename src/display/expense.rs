//! Expense display formatting
//!
//! Ledger listings use `name: $amount (category) - timestamp` lines,
//! numbered from 1 so the numbers can be passed to `delete` and `edit`.

use crate::models::Expense;

/// Format a single expense line
pub fn format_expense_line(expense: &Expense, currency_symbol: &str) -> String {
    format!(
        "{}: {} ({}) - {}",
        expense.name,
        expense.amount.format_with_symbol(currency_symbol),
        expense.category,
        expense.timestamp
    )
}

/// Format the whole ledger in order
pub fn format_expense_list(expenses: &[Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let width = expenses.len().to_string().len();
    let mut output = String::new();
    for (index, expense) in expenses.iter().enumerate() {
        output.push_str(&format!(
            "{:>width$}. {}\n",
            index + 1,
            format_expense_line(expense, currency_symbol),
            width = width
        ));
    }
    output
}

/// Format search hits, keeping each record's ledger number
pub fn format_search_results(hits: &[(usize, &Expense)], currency_symbol: &str) -> String {
    if hits.is_empty() {
        return "No matching expenses found.\n".to_string();
    }

    let width = hits
        .iter()
        .map(|(index, _)| (index + 1).to_string().len())
        .max()
        .unwrap_or(1);

    let mut output = String::new();
    for (index, expense) in hits {
        output.push_str(&format!(
            "{:>width$}. {}\n",
            index + 1,
            format_expense_line(expense, currency_symbol),
            width = width
        ));
    }
    output.push_str(&format!(
        "\n{} match{}\n",
        hits.len(),
        if hits.len() == 1 { "" } else { "es" }
    ));
    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense:   {}\n", expense.name));
    output.push_str(&format!(
        "Amount:    {}\n",
        expense.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("Category:  {}\n", expense.category));
    output.push_str(&format!("Recorded:  {}\n", expense.timestamp));
    output
}
