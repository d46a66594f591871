//! Whole-ledger commands: save-as, new and history

use std::path::Path;

use crate::config::settings::Settings;
use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Write the current ledger to another expense file
pub fn handle_save_as_command(storage: &Storage, path: &Path) -> ExpenseResult<()> {
    let budgets_path = storage.save_as(path)?;
    println!("Expenses saved to: {}", path.display());
    println!("Budgets saved to:  {}", budgets_path.display());
    Ok(())
}

/// Clear every expense and category
pub fn handle_new_command(storage: &mut Storage, force: bool) -> ExpenseResult<()> {
    if !force {
        println!(
            "About to clear {} expense(s) and {} categor(y/ies).",
            storage.expenses.count(),
            storage.budgets.count()
        );
        println!();
        println!("Use --force to confirm clearing all data");
        return Ok(());
    }

    let summary = storage.reset()?;
    println!(
        "Cleared {} expense(s) and {} categor(y/ies).",
        summary.expenses, summary.categories
    );
    Ok(())
}

/// Show the most recent audit log entries
pub fn handle_history_command(
    storage: &Storage,
    settings: &Settings,
    limit: Option<usize>,
) -> ExpenseResult<()> {
    let limit = limit.unwrap_or(settings.history_limit);
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No history recorded.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
