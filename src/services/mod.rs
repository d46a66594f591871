//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, budget rules, and audit logging.

pub mod category;
pub mod expense;

pub use category::CategoryService;
pub use expense::{ExpenseInput, ExpenseService, ImportSummary};
