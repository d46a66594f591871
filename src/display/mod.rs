//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses, budgets and reports for
//! terminal display.

pub mod budget;
pub mod expense;
pub mod report;

pub use budget::{format_budget_line, format_budget_list};
pub use expense::{
    format_expense_details, format_expense_line, format_expense_list, format_search_results,
};
