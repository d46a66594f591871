//! Budget repository for `budgets.txt`
//!
//! Keeps categories in the order they were first registered. Each record is
//! stored as `category|remaining`.

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;
use crate::models::{Amount, Budget};

use super::file_io::{read_records, render_records, write_text};

/// Number of fields in a budget record
pub const BUDGET_FIELDS: usize = 2;

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    atomic_writes: bool,
    budgets: Vec<Budget>,
    skipped: usize,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf, atomic_writes: bool) -> Self {
        Self {
            path,
            atomic_writes,
            budgets: Vec::new(),
            skipped: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load budgets from disk, replacing what is in memory
    ///
    /// A category that appears twice keeps its first position and its last value.
    pub fn load(&mut self) -> Result<(), ExpenseError> {
        let loaded = read_records(&self.path, BUDGET_FIELDS)?;

        self.budgets.clear();
        self.skipped = loaded.skipped;

        for fields in loaded.records {
            match Amount::parse(&fields[1]) {
                Ok(remaining) => self.set(&fields[0], remaining),
                Err(_) => self.skipped += 1,
            }
        }

        Ok(())
    }

    /// Rewrite the whole file from memory
    pub fn save(&self) -> Result<(), ExpenseError> {
        self.save_to(&self.path)
    }

    /// Write all budgets to another file
    pub fn save_to(&self, path: &Path) -> Result<(), ExpenseError> {
        write_text(path, &self.render(), self.atomic_writes)
    }

    /// File contents for the current budgets
    pub fn render(&self) -> String {
        render_records(
            self.budgets
                .iter()
                .map(|b| vec![b.category.clone(), b.remaining.to_record_string()]),
        )
    }

    /// All budgets in registration order
    pub fn get_all(&self) -> &[Budget] {
        &self.budgets
    }

    /// Get the budget of a category (exact name match)
    pub fn get(&self, category: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.category == category)
    }

    pub fn get_mut(&mut self, category: &str) -> Option<&mut Budget> {
        self.budgets.iter_mut().find(|b| b.category == category)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.get(category).is_some()
    }

    /// Get a category's budget, registering it with zero if unknown
    pub fn ensure(&mut self, category: &str) -> &mut Budget {
        let index = match self.budgets.iter().position(|b| b.category == category) {
            Some(index) => index,
            None => {
                self.budgets.push(Budget::new(category));
                self.budgets.len() - 1
            }
        };
        &mut self.budgets[index]
    }

    /// Overwrite (or register) a category's remaining budget
    pub fn set(&mut self, category: &str, remaining: Amount) {
        self.ensure(category).remaining = remaining;
    }

    /// Remove every budget
    pub fn clear(&mut self) {
        self.budgets.clear();
    }

    pub fn count(&self) -> usize {
        self.budgets.len()
    }

    /// Lines dropped by the last load
    pub fn skipped_lines(&self) -> usize {
        self.skipped
    }
}
