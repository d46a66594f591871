//! Expense model
//!
//! An expense is a named amount filed under a category. The timestamp is
//! generated once at creation and afterwards carried as opaque text.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;

/// strftime format used for newly created expenses
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Characters that would break the pipe-delimited record format
const RESERVED_CHARS: [char; 3] = ['|', '\n', '\r'];

/// A single expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// What the money was spent on
    pub name: String,

    /// How much was spent
    pub amount: Amount,

    /// Category name, keys into the budget table
    pub category: String,

    /// Creation time as written to disk
    pub timestamp: String,
}

impl Expense {
    /// Create a new expense stamped with the current local time
    pub fn new(name: impl Into<String>, amount: Amount, category: impl Into<String>) -> Self {
        Self::with_timestamp(name, amount, category, now_timestamp())
    }

    /// Create an expense with an existing timestamp
    pub fn with_timestamp(
        name: impl Into<String>,
        amount: Amount,
        category: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            category: category.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        if self.name.contains(RESERVED_CHARS) {
            return Err(ExpenseValidationError::ReservedCharacter("name"));
        }

        if self.category.contains(RESERVED_CHARS) {
            return Err(ExpenseValidationError::ReservedCharacter("category"));
        }

        Ok(())
    }

    /// Case-insensitive substring match against name, category and amount
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.amount.to_record_string().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({}) - {}",
            self.name, self.amount, self.category, self.timestamp
        )
    }
}

/// Current local time in the record timestamp format
pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Check that a category name can be stored in the record format
pub fn validate_category_name(name: &str) -> Result<(), ExpenseValidationError> {
    if name.trim().is_empty() {
        return Err(ExpenseValidationError::EmptyCategory);
    }
    if name.contains(RESERVED_CHARS) {
        return Err(ExpenseValidationError::ReservedCharacter("category"));
    }
    Ok(())
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    EmptyCategory,
    ReservedCharacter(&'static str),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Please enter an expense name"),
            Self::EmptyCategory => write!(f, "Please select a category"),
            Self::ReservedCharacter(field) => {
                write!(f, "The {} may not contain '|' or line breaks", field)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
