//! Reader for the simplified expense format
//!
//! The simplified tracker stored `name|amount|category` per line with no
//! timestamps and no budgets. Its files are read-only input here.

use std::path::Path;

use crate::error::ExpenseError;
use crate::models::Amount;

use super::file_io::read_records;

/// Number of fields in a simplified expense record
pub const SIMPLE_FIELDS: usize = 3;

/// An expense as stored by the simplified format
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleExpense {
    pub name: String,
    pub amount: Amount,
    pub category: String,
}

/// Result of reading a simplified expense file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimpleExpenseFile {
    pub expenses: Vec<SimpleExpense>,
    pub skipped: usize,
}

/// Read a simplified expense file
pub fn read_simple_expenses<P: AsRef<Path>>(path: P) -> Result<SimpleExpenseFile, ExpenseError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ExpenseError::Storage(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let loaded = read_records(path, SIMPLE_FIELDS)?;
    let mut file = SimpleExpenseFile {
        expenses: Vec::with_capacity(loaded.records.len()),
        skipped: loaded.skipped,
    };

    for fields in loaded.records {
        match Amount::parse(&fields[1]) {
            Ok(amount) => file.expenses.push(SimpleExpense {
                name: fields[0].clone(),
                amount,
                category: fields[2].clone(),
            }),
            Err(_) => file.skipped += 1,
        }
    }

    Ok(file)
}
