//! Storage layer for the expense tracker
//!
//! Persists the ledger as two pipe-delimited text files (`expenses.txt` and
//! `budgets.txt`) and records every change in the audit log. Every mutation
//! rewrites both files in full.

pub mod budgets;
pub mod expenses;
pub mod file_io;
pub mod init;
pub mod legacy;

pub use budgets::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use init::initialize_storage;
pub use legacy::{read_simple_expenses, SimpleExpense};

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType, Operation};
use crate::config::paths::{sibling_budgets_file, ExpensePaths};
use crate::config::settings::Settings;
use crate::error::ExpenseError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    pub expenses: ExpenseRepository,
    pub budgets: BudgetRepository,
    audit: AuditLogger,
}

/// Counts of what was cleared by [`Storage::reset`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResetSummary {
    pub expenses: usize,
    pub categories: usize,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ExpensePaths, settings: &Settings) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file(), settings.atomic_writes),
            budgets: BudgetRepository::new(paths.budgets_file(), settings.atomic_writes),
            audit: AuditLogger::new(paths.audit_log()),
        })
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), ExpenseError> {
        self.expenses.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), ExpenseError> {
        self.expenses.save()?;
        self.budgets.save()?;
        Ok(())
    }

    /// Write the ledger to a chosen expense file
    ///
    /// The budgets go to `budgets.txt` next to that file, so the pair can be
    /// moved or reopened together. Returns the budget file path.
    pub fn save_as(&self, expenses_path: &Path) -> Result<PathBuf, ExpenseError> {
        let budgets_path = sibling_budgets_file(expenses_path);
        self.expenses.save_to(expenses_path)?;
        self.budgets.save_to(&budgets_path)?;
        Ok(budgets_path)
    }

    /// Clear every expense and category, then save
    pub fn reset(&mut self) -> Result<ResetSummary, ExpenseError> {
        let summary = ResetSummary {
            expenses: self.expenses.count(),
            categories: self.budgets.count(),
        };

        self.expenses.clear();
        self.budgets.clear();
        self.save_all()?;

        self.audit
            .log(&AuditEntry::new(Operation::Delete, EntityType::Ledger, "all").before(&summary))?;

        Ok(summary)
    }

    /// Lines dropped while loading either file
    pub fn skipped_lines(&self) -> usize {
        self.expenses.skipped_lines() + self.budgets.skipped_lines()
    }

    /// Record a create in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), ExpenseError> {
        self.audit.log(
            &AuditEntry::new(Operation::Create, entity_type, entity_id)
                .named(entity_name)
                .after(entity),
        )
    }

    /// Record an update in the audit log, with a diff summary
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), ExpenseError> {
        self.audit.log(
            &AuditEntry::new(Operation::Update, entity_type, entity_id)
                .named(entity_name)
                .before(before)
                .after(after),
        )
    }

    /// Record a delete in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), ExpenseError> {
        self.audit.log(
            &AuditEntry::new(Operation::Delete, entity_type, entity_id)
                .named(entity_name)
                .before(entity),
        )
    }
}
