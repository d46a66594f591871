//! Core data models for the expense tracker
//!
//! This module contains the data structures of the ledger: expenses,
//! amounts and per-category budgets.

pub mod amount;
pub mod budget;
pub mod expense;

pub use amount::{Amount, AmountParseError};
pub use budget::{Budget, DefaultCategory};
pub use expense::{Expense, ExpenseValidationError, TIMESTAMP_FORMAT};
