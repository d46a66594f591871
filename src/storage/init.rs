//! Storage initialization
//!
//! Handles first-run setup and optional starter categories

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::DefaultCategory;

use super::budgets::BudgetRepository;

/// Initialize storage for a fresh installation
///
/// With `with_defaults`, a missing budget file is created holding the
/// starter categories, each without a cap.
pub fn initialize_storage(paths: &ExpensePaths, with_defaults: bool) -> Result<(), ExpenseError> {
    paths.ensure_directories()?;

    if with_defaults && !paths.budgets_file().exists() {
        create_default_categories(paths)?;
    }

    Ok(())
}

fn create_default_categories(paths: &ExpensePaths) -> Result<(), ExpenseError> {
    let mut budgets = BudgetRepository::new(paths.budgets_file(), true);
    for category in DefaultCategory::all() {
        budgets.ensure(category.name());
    }
    budgets.save()
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &ExpensePaths) -> bool {
    !paths.is_initialized()
}
