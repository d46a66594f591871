//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod calc;
pub mod category;
pub mod expense;
pub mod export;
pub mod ledger;
pub mod report;

pub use calc::handle_calc_command;
pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportFormat};
pub use ledger::{handle_history_command, handle_new_command, handle_save_as_command};
pub use report::handle_report_command;
