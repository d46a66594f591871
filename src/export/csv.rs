//! CSV Export functionality
//!
//! Exports the ledger and the category budgets to CSV format.

use std::io::Write;

use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Export all expenses to CSV, in ledger order
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: &mut W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Number", "Name", "Amount", "Category", "Timestamp"])?;

    for (index, expense) in storage.expenses.get_all().iter().enumerate() {
        csv_writer.write_record([
            (index + 1).to_string(),
            expense.name.clone(),
            format!("{:.2}", expense.amount.value()),
            expense.category.clone(),
            expense.timestamp.clone(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Export every category's remaining budget to CSV
pub fn export_budgets_csv<W: Write>(storage: &Storage, writer: &mut W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Category", "Remaining", "Unlimited"])?;

    for budget in storage.budgets.get_all() {
        csv_writer.write_record([
            budget.category.clone(),
            format!("{:.2}", budget.remaining.value()),
            budget.is_unlimited().to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::config::settings::Settings;
    use crate::models::{Amount, Expense};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths, &Settings::default()).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_export_expenses_csv() {
        let (_temp_dir, mut storage) = create_test_storage();
        storage.expenses.push(Expense::with_timestamp(
            "Lunch, with team",
            Amount::new(18.0),
            "Food",
            "2024-03-01 12:00:00.000000",
        ));

        let mut output = Vec::new();
        export_expenses_csv(&storage, &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv_string.lines().collect();
        assert_eq!(lines[0], "Number,Name,Amount,Category,Timestamp");
        assert_eq!(
            lines[1],
            "1,\"Lunch, with team\",18.00,Food,2024-03-01 12:00:00.000000"
        );
    }

    #[test]
    fn test_export_budgets_csv() {
        let (_temp_dir, mut storage) = create_test_storage();
        storage.budgets.set("Food", Amount::new(25.0));
        storage.budgets.ensure("Rent");

        let mut output = Vec::new();
        export_budgets_csv(&storage, &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert_eq!(
            csv_string,
            "Category,Remaining,Unlimited\nFood,25.00,false\nRent,0.00,true\n"
        );
    }
}
