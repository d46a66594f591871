//! Expense repository for `expenses.txt`
//!
//! Holds the ledger's expenses in insertion order. Each record is stored as
//! `name|amount|category|timestamp`.

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;
use crate::models::{Amount, Expense};

use super::file_io::{read_records, render_records, write_text};

/// Number of fields in an expense record
pub const EXPENSE_FIELDS: usize = 4;

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    atomic_writes: bool,
    expenses: Vec<Expense>,
    skipped: usize,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf, atomic_writes: bool) -> Self {
        Self {
            path,
            atomic_writes,
            expenses: Vec::new(),
            skipped: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load expenses from disk, replacing what is in memory
    pub fn load(&mut self) -> Result<(), ExpenseError> {
        let loaded = read_records(&self.path, EXPENSE_FIELDS)?;

        self.expenses.clear();
        self.skipped = loaded.skipped;

        for fields in loaded.records {
            match decode(&fields) {
                Some(expense) => self.expenses.push(expense),
                None => self.skipped += 1,
            }
        }

        Ok(())
    }

    /// Rewrite the whole file from memory
    pub fn save(&self) -> Result<(), ExpenseError> {
        self.save_to(&self.path)
    }

    /// Write all expenses to another file
    pub fn save_to(&self, path: &Path) -> Result<(), ExpenseError> {
        write_text(path, &self.render(), self.atomic_writes)
    }

    /// File contents for the current expenses
    pub fn render(&self) -> String {
        render_records(self.expenses.iter().map(encode))
    }

    /// All expenses in ledger order
    pub fn get_all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Get an expense by its position
    pub fn get(&self, index: usize) -> Option<&Expense> {
        self.expenses.get(index)
    }

    /// Append an expense
    pub fn push(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Remove the expense at a position
    pub fn remove(&mut self, index: usize) -> Option<Expense> {
        if index < self.expenses.len() {
            Some(self.expenses.remove(index))
        } else {
            None
        }
    }

    /// Remove every expense
    pub fn clear(&mut self) {
        self.expenses.clear();
    }

    pub fn count(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Lines dropped by the last load
    pub fn skipped_lines(&self) -> usize {
        self.skipped
    }
}

/// Fields of an expense record
pub fn encode(expense: &Expense) -> Vec<String> {
    vec![
        expense.name.clone(),
        expense.amount.to_record_string(),
        expense.category.clone(),
        expense.timestamp.clone(),
    ]
}

/// Build an expense from record fields; `None` if the amount is unusable
pub fn decode(fields: &[String]) -> Option<Expense> {
    match fields {
        [name, amount, category, timestamp] => {
            let amount = Amount::parse(amount).ok()?;
            Some(Expense::with_timestamp(
                name.as_str(),
                amount,
                category.as_str(),
                timestamp.as_str(),
            ))
        }
        _ => None,
    }
}
