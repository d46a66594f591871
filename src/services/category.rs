//! Category service
//!
//! Registers categories and edits their remaining budgets.

use crate::audit::EntityType;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::expense::validate_category_name;
use crate::models::{Amount, Budget};
use crate::storage::Storage;

/// Service for category and budget management
pub struct CategoryService<'a> {
    storage: &'a mut Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// All categories with their remaining budgets, in registration order
    pub fn list(&self) -> &[Budget] {
        self.storage.budgets.get_all()
    }

    /// Get a category's budget (exact name match)
    pub fn get(&self, category: &str) -> Option<&Budget> {
        self.storage.budgets.get(category)
    }

    /// Register a new category with an unlimited budget
    pub fn add_category(&mut self, name: &str) -> ExpenseResult<Budget> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ExpenseError::Validation(
                "Please enter a valid category".into(),
            ));
        }

        if self.storage.budgets.contains(name) {
            return Err(ExpenseError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        validate_category_name(name).map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let budget = self.storage.budgets.ensure(name).clone();
        self.storage.save_all()?;

        self.storage
            .log_create(EntityType::Category, budget.category.clone(), None, &budget)?;

        Ok(budget)
    }

    /// Overwrite the remaining budget of an existing category
    pub fn edit_budget(&mut self, category: &str, remaining: Amount) -> ExpenseResult<Budget> {
        let budget = self
            .storage
            .budgets
            .get_mut(category)
            .ok_or_else(|| ExpenseError::category_not_found(category))?;

        let before = budget.clone();
        budget.remaining = remaining;
        let after = budget.clone();

        self.storage.save_all()?;
        self.storage.log_update(
            EntityType::Budget,
            after.category.clone(),
            None,
            &before,
            &after,
        )?;

        Ok(after)
    }
}
