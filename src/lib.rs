//! Expense Tracker - personal expense ledger with per-category budgets
//!
//! This library provides the core functionality for the expense tracker:
//! recording expenses against category budgets, searching the ledger,
//! per-category spending totals and a small arithmetic calculator.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (amounts, expenses, budgets)
//! - `storage`: Pipe-delimited text file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `reports`: Spending by category
//! - `calc`: Arithmetic expression evaluator
//! - `export`: CSV, JSON and YAML export
//! - `display`, `cli`: Terminal output and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths, &settings)?;
//! storage.load_all()?;
//!
//! ExpenseService::new(&mut storage).add("Coffee", Amount::new(4.5), "Food")?;
//! ```

pub mod audit;
pub mod calc;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::ExpenseError;
