//! Budget model
//!
//! A budget tracks the remaining allowance of one category. A remaining
//! value of exactly zero means the category is not capped.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;

/// Remaining allowance for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Category name
    pub category: String,

    /// What is left to spend
    pub remaining: Amount,
}

impl Budget {
    /// Register a category with no cap
    pub fn new(category: impl Into<String>) -> Self {
        Self::with_remaining(category, Amount::zero())
    }

    pub fn with_remaining(category: impl Into<String>, remaining: Amount) -> Self {
        Self {
            category: category.into(),
            remaining,
        }
    }

    /// A zero remaining budget is treated as unlimited
    pub fn is_unlimited(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Whether an expense of `amount` may be charged to this category
    pub fn allows(&self, amount: Amount) -> bool {
        self.is_unlimited() || amount <= self.remaining
    }

    /// Charge an accepted expense; unlimited categories stay unlimited
    pub fn charge(&mut self, amount: Amount) {
        if !self.is_unlimited() {
            self.remaining -= amount;
        }
    }

    /// Give the amount of a deleted expense back to the category
    pub fn refund(&mut self, amount: Amount) {
        self.remaining += amount;
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Budget: {}", self.category, self.remaining)
    }
}

/// Starter categories offered by `init --defaults`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    General,
    Groceries,
    Utilities,
    Entertainment,
}

impl DefaultCategory {
    /// Get all default categories in order
    pub fn all() -> &'static [Self] {
        &[
            Self::General,
            Self::Groceries,
            Self::Utilities,
            Self::Entertainment,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Groceries => "Groceries",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_budget_is_unlimited() {
        let budget = Budget::new("Food");
        assert!(budget.is_unlimited());
        assert!(budget.allows(Amount::new(1_000_000.0)));
    }

    #[test]
    fn test_capped_budget() {
        let budget = Budget::with_remaining("Food", Amount::new(3.0));
        assert!(!budget.allows(Amount::new(4.5)));
        assert!(budget.allows(Amount::new(3.0)));
        assert!(budget.allows(Amount::new(-1.0)));
    }

    #[test]
    fn test_charge_and_refund() {
        let mut budget = Budget::with_remaining("Food", Amount::new(10.0));
        budget.charge(Amount::new(4.0));
        assert_eq!(budget.remaining, Amount::new(6.0));
        budget.refund(Amount::new(4.0));
        assert_eq!(budget.remaining, Amount::new(10.0));

        let mut unlimited = Budget::new("Misc");
        unlimited.charge(Amount::new(4.5));
        assert!(unlimited.is_unlimited());
    }

    #[test]
    fn test_display() {
        let budget = Budget::with_remaining("Food", Amount::new(25.0));
        assert_eq!(budget.to_string(), "Food Budget: $25.00");
    }

    #[test]
    fn test_default_categories() {
        let defaults = DefaultCategory::all();
        assert_eq!(defaults.len(), 4);
        assert_eq!(defaults[0].name(), "General");
        assert_eq!(defaults[3].name(), "Entertainment");
    }
}
