//! JSON Export functionality
//!
//! Exports the complete ledger to JSON format with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Amount, Budget, Expense};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All expenses, in ledger order
    pub expenses: Vec<Expense>,

    /// All categories with their remaining budgets
    pub budgets: Vec<Budget>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub category_count: usize,

    /// Sum of all expense amounts
    pub total_spent: Amount,

    /// Timestamp of the first recorded expense
    pub earliest_expense: Option<String>,

    /// Timestamp of the last recorded expense
    pub latest_expense: Option<String>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> Self {
        let expenses = storage.expenses.get_all().to_vec();
        let budgets = storage.budgets.get_all().to_vec();

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            category_count: budgets.len(),
            total_spent: expenses.iter().map(|e| e.amount).sum(),
            earliest_expense: expenses.iter().map(|e| e.timestamp.clone()).min(),
            latest_expense: expenses.iter().map(|e| e.timestamp.clone()).max(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            budgets,
            metadata,
        }
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = FullExport::from_storage(storage);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::config::settings::Settings;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths, &Settings::default()).unwrap();
        storage.load_all().unwrap();

        storage.budgets.set("Food", Amount::new(20.0));
        storage.budgets.ensure("Transport");
        storage
            .expenses
            .push(Expense::with_timestamp("Coffee", Amount::new(4.5), "Food", "2024-03-01 09:00:00.000000"));
        storage
            .expenses
            .push(Expense::with_timestamp("Bus", Amount::new(2.5), "Transport", "2024-03-02 08:00:00.000000"));
        (temp_dir, storage)
    }

    #[test]
    fn test_full_export() {
        let (_temp_dir, storage) = create_test_storage();
        let export = FullExport::from_storage(&storage);

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.expenses.len(), 2);
        assert_eq!(export.budgets.len(), 2);
    }

    #[test]
    fn test_metadata() {
        let (_temp_dir, storage) = create_test_storage();
        let export = FullExport::from_storage(&storage);

        assert_eq!(export.metadata.expense_count, 2);
        assert_eq!(export.metadata.category_count, 2);
        assert_eq!(export.metadata.total_spent, Amount::new(7.0));
        assert_eq!(
            export.metadata.earliest_expense.as_deref(),
            Some("2024-03-01 09:00:00.000000")
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let (_temp_dir, storage) = create_test_storage();

        let mut json_output = Vec::new();
        export_full_json(&storage, &mut json_output, true).unwrap();
        let json_string = String::from_utf8(json_output).unwrap();

        let imported: FullExport = serde_json::from_str(&json_string).unwrap();
        assert_eq!(imported.expenses, storage.expenses.get_all());
        assert_eq!(imported.budgets[0].remaining, Amount::new(20.0));
    }
}
