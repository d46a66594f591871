//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory (the `--data-dir` flag)
//! 2. `EXPENSE_TRACKER_DIR` environment variable
//! 3. The platform data directory from `directories::ProjectDirs`

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::ExpenseError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DIR";

/// Default expense file name
pub const EXPENSES_FILE: &str = "expenses.txt";

/// Default budget file name
pub const BUDGETS_FILE: &str = "budgets.txt";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Resolve paths from the environment and platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        Self::resolve(None)
    }

    /// Resolve paths, preferring an explicit directory when given
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, ExpenseError> {
        if let Some(dir) = explicit {
            return Ok(Self { base_dir: dir });
        }

        if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            if !custom.trim().is_empty() {
                return Ok(Self {
                    base_dir: PathBuf::from(custom),
                });
            }
        }

        let dirs = ProjectDirs::from("", "", "expense-tracker").ok_or_else(|| {
            ExpenseError::Config("Could not determine a home directory".into())
        })?;

        Ok(Self {
            base_dir: dirs.data_dir().to_path_buf(),
        })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to expenses.txt
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join(EXPENSES_FILE)
    }

    /// Get the path to budgets.txt
    pub fn budgets_file(&self) -> PathBuf {
        self.base_dir.join(BUDGETS_FILE)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Budget file that accompanies an expense file saved elsewhere
pub fn sibling_budgets_file(expenses_file: &Path) -> PathBuf {
    match expenses_file.parent() {
        Some(parent) => parent.join(BUDGETS_FILE),
        None => PathBuf::from(BUDGETS_FILE),
    }
}
