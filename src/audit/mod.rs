//! Audit logging for the expense tracker
//!
//! Every create, update and delete of expenses, categories and budgets is
//! appended to `audit.log` as one JSON line with before/after snapshots.
//! `expenses history` reads it back.

mod diff;
mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
