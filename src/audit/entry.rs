//! Audit log entries
//!
//! An entry names what happened to which entity and carries JSON snapshots
//! of the entity around the change.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::diff::generate_diff;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        })
    }
}

/// What kind of record an entry is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Expense,
    Category,
    Budget,
    /// The ledger as a whole (clearing, imports)
    Ledger,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Expense => "Expense",
            Self::Category => "Category",
            Self::Budget => "Budget",
            Self::Ledger => "Ledger",
        })
    }
}

/// One line of the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity_type: EntityType,

    /// Expense timestamp, category name, or a file path for imports
    pub entity_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    /// Changed fields, set when both snapshots are present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Start an entry stamped with the current time
    pub fn new(operation: Operation, entity_type: EntityType, entity_id: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            entity_name: None,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    pub fn named(mut self, name: Option<String>) -> Self {
        self.entity_name = name;
        self
    }

    /// Snapshot of the entity before the change
    pub fn before<T: Serialize>(mut self, entity: &T) -> Self {
        self.before = serde_json::to_value(entity).ok();
        self
    }

    /// Snapshot of the entity after the change
    ///
    /// With a `before` snapshot already attached, the changed fields are
    /// summarized as well.
    pub fn after<T: Serialize>(mut self, entity: &T) -> Self {
        self.after = serde_json::to_value(entity).ok();
        if let (Some(before), Some(after)) = (&self.before, &self.after) {
            self.diff_summary = generate_diff(before, after);
        }
        self
    }

    /// `[time] OPERATION Type id (name)`, plus a `Changes:` line when known
    pub fn format_human_readable(&self) -> String {
        let mut line = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );
        if let Some(name) = &self.entity_name {
            line.push_str(&format!(" ({})", name));
        }
        if let Some(diff) = &self.diff_summary {
            line.push_str(&format!("\n  Changes: {}", diff));
        }
        line
    }
}
