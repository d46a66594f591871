//! Expense service
//!
//! Business logic for the ledger: adding expenses against category budgets,
//! deleting and editing them, and searching. Every successful mutation is
//! followed by a full save and an audit entry.

use std::path::Path;

use serde::Serialize;

use crate::audit::EntityType;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::expense::validate_category_name;
use crate::models::{Amount, AmountParseError, Budget, Expense};
use crate::storage::{read_simple_expenses, Storage};

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
}

/// Raw user input for a new expense
#[derive(Debug, Clone, Copy)]
pub struct ExpenseInput<'i> {
    pub name: &'i str,
    pub amount: &'i str,
    pub category: &'i str,
}

/// Outcome of importing a simplified expense file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
    pub new_categories: usize,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// All expenses in ledger order
    pub fn list(&self) -> &[Expense] {
        self.storage.expenses.get_all()
    }

    /// Get an expense by 0-based position
    pub fn get(&self, index: usize) -> ExpenseResult<&Expense> {
        self.storage
            .expenses
            .get(index)
            .ok_or_else(|| ExpenseError::expense_not_found(format!("#{}", index + 1)))
    }

    /// Remaining budget of a category
    pub fn budget(&self, category: &str) -> Option<&Budget> {
        self.storage.budgets.get(category)
    }

    /// Add an expense from unparsed input
    ///
    /// All three fields must be filled in and the amount must be a number.
    pub fn add_from_input(&mut self, input: ExpenseInput<'_>) -> ExpenseResult<Expense> {
        if input.name.trim().is_empty()
            || input.amount.trim().is_empty()
            || input.category.trim().is_empty()
        {
            return Err(ExpenseError::Validation(
                "Please enter an expense, amount, and select a category".into(),
            ));
        }

        let amount = parse_amount(input.amount)?;
        self.add(input.name, amount, input.category)
    }

    /// Add an expense
    ///
    /// An unknown category is registered with an unlimited budget. The expense
    /// is rejected when the category has a non-zero remaining budget smaller
    /// than the amount; otherwise a capped budget is reduced by the amount.
    pub fn add(&mut self, name: &str, amount: Amount, category: &str) -> ExpenseResult<Expense> {
        let expense = Expense::new(name.trim(), amount, category.trim());
        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let is_new_category = !self.storage.budgets.contains(&expense.category);

        if let Some(budget) = self.storage.budgets.get(&expense.category) {
            if !budget.allows(amount) {
                return Err(ExpenseError::BudgetExceeded {
                    category: expense.category.clone(),
                    amount: amount.to_string(),
                    remaining: budget.remaining.to_string(),
                });
            }
        }

        self.storage.budgets.ensure(&expense.category).charge(amount);
        self.storage.expenses.push(expense.clone());
        self.storage.save_all()?;

        if is_new_category {
            if let Some(budget) = self.storage.budgets.get(&expense.category) {
                self.storage.log_create(
                    EntityType::Category,
                    budget.category.clone(),
                    None,
                    budget,
                )?;
            }
        }
        self.storage.log_create(
            EntityType::Expense,
            expense.timestamp.clone(),
            Some(expense.name.clone()),
            &expense,
        )?;

        Ok(expense)
    }

    /// Delete the expense at a 0-based position
    ///
    /// The amount is given back to the category's remaining budget.
    pub fn delete(&mut self, index: usize) -> ExpenseResult<Expense> {
        let expense = self
            .storage
            .expenses
            .remove(index)
            .ok_or_else(|| ExpenseError::expense_not_found(format!("#{}", index + 1)))?;

        self.storage.budgets.ensure(&expense.category).refund(expense.amount);
        self.storage.save_all()?;

        self.storage.log_delete(
            EntityType::Expense,
            expense.timestamp.clone(),
            Some(expense.name.clone()),
            &expense,
        )?;

        Ok(expense)
    }

    /// Replace the amount and/or category of an expense
    ///
    /// The edited record keeps its name and timestamp and moves to the end of
    /// the ledger. Budgets are not reconciled; a new category is registered
    /// with an unlimited budget.
    pub fn edit(
        &mut self,
        index: usize,
        amount: Option<Amount>,
        category: Option<&str>,
    ) -> ExpenseResult<Expense> {
        let before = self.get(index)?.clone();

        let category = match category {
            Some(c) => {
                let c = c.trim();
                validate_category_name(c).map_err(|e| ExpenseError::Validation(e.to_string()))?;
                c.to_string()
            }
            None => before.category.clone(),
        };

        let after = Expense::with_timestamp(
            before.name.clone(),
            amount.unwrap_or(before.amount),
            category,
            before.timestamp.clone(),
        );

        let is_new_category = !self.storage.budgets.contains(&after.category);

        self.storage.expenses.remove(index);
        self.storage.expenses.push(after.clone());
        self.storage.budgets.ensure(&after.category);
        self.storage.save_all()?;

        if is_new_category {
            if let Some(budget) = self.storage.budgets.get(&after.category) {
                self.storage.log_create(
                    EntityType::Category,
                    budget.category.clone(),
                    None,
                    budget,
                )?;
            }
        }
        self.storage.log_update(
            EntityType::Expense,
            after.timestamp.clone(),
            Some(after.name.clone()),
            &before,
            &after,
        )?;

        Ok(after)
    }

    /// Case-insensitive search over name, category and amount
    ///
    /// Returns matches with their 0-based positions, in ledger order.
    pub fn search(&self, text: &str) -> Vec<(usize, &Expense)> {
        let needle = text.to_lowercase();
        self.storage
            .expenses
            .get_all()
            .iter()
            .enumerate()
            .filter(|(_, expense)| expense.matches(&needle))
            .collect()
    }

    /// Append the records of a simplified expense file
    ///
    /// Imported expenses are stamped with the current time and bypass the
    /// budget check; their categories are registered if unknown.
    pub fn import_legacy(&mut self, path: &Path) -> ExpenseResult<ImportSummary> {
        let file = read_simple_expenses(path)?;
        let mut summary = ImportSummary {
            skipped: file.skipped,
            ..ImportSummary::default()
        };

        for simple in file.expenses {
            let expense = Expense::new(simple.name.trim(), simple.amount, simple.category.trim());
            if expense.validate().is_err() {
                summary.skipped += 1;
                continue;
            }

            if !self.storage.budgets.contains(&expense.category) {
                self.storage.budgets.ensure(&expense.category);
                summary.new_categories += 1;
            }
            self.storage.expenses.push(expense);
            summary.imported += 1;
        }

        if summary.imported > 0 {
            self.storage.save_all()?;
            self.storage.log_create(
                EntityType::Ledger,
                path.display().to_string(),
                Some("import".to_string()),
                &summary,
            )?;
        }

        Ok(summary)
    }
}

/// Parse an amount typed by the user
pub fn parse_amount(text: &str) -> ExpenseResult<Amount> {
    Amount::parse(text).map_err(|e| match e {
        AmountParseError::Empty => ExpenseError::Validation("Please enter an amount".into()),
        other => ExpenseError::Validation(format!("Invalid amount: {}", other)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::config::settings::Settings;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths, &Settings::default()).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn input<'i>(name: &'i str, amount: &'i str, category: &'i str) -> ExpenseInput<'i> {
        ExpenseInput {
            name,
            amount,
            category,
        }
    }

    #[test]
    fn test_add_to_unlimited_category() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);

        let expense = service.add("Coffee", Amount::new(4.5), "Food").unwrap();
        assert_eq!(expense.category, "Food");
        assert_eq!(service.list().len(), 1);

        // Unknown category registered, and still unlimited
        let food = storage.budgets.get("Food").unwrap();
        assert!(food.is_unlimited());
    }

    #[test]
    fn test_add_rejected_when_over_budget() {
        let (_temp_dir, mut storage) = create_test_storage();
        storage.budgets.set("Food", Amount::new(3.0));
        let mut service = ExpenseService::new(&mut storage);

        let err = service.add("Coffee", Amount::new(4.5), "Food").unwrap_err();
        assert!(matches!(err, ExpenseError::BudgetExceeded { .. }));
        assert!(err.is_warning());
        assert!(service.list().is_empty());
        assert_eq!(storage.budgets.get("Food").unwrap().remaining, Amount::new(3.0));
    }

    #[test]
    fn test_add_decrements_capped_budget() {
        let (_temp_dir, mut storage) = create_test_storage();
        storage.budgets.set("Food", Amount::new(10.0));
        let mut service = ExpenseService::new(&mut storage);

        service.add("Coffee", Amount::new(4.5), "Food").unwrap();
        service.add("Lunch", Amount::new(5.5), "Food").unwrap();

        assert_eq!(service.list().len(), 2);
        // Exactly used up: now reads as unlimited
        assert!(storage.budgets.get("Food").unwrap().is_unlimited());
    }

    #[test]
    fn test_add_persists_and_audits() {
        let (temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);
        let expense = service.add("Coffee", Amount::new(4.5), "Food").unwrap();

        let contents = std::fs::read_to_string(temp_dir.path().join("expenses.txt")).unwrap();
        assert_eq!(contents, format!("Coffee|4.5|Food|{}\n", expense.timestamp));
        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("budgets.txt")).unwrap(),
            "Food|0.0\n"
        );

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].entity_type, EntityType::Category);
        assert_eq!(entries[1].entity_type, EntityType::Expense);
    }

    #[test]
    fn test_add_from_input_validation() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);

        let err = service.add_from_input(input("", "4.5", "Food")).unwrap_err();
        assert!(err.is_validation());

        let err = service.add_from_input(input("Coffee", "4.5", " ")).unwrap_err();
        assert!(err.is_validation());

        let err = service
            .add_from_input(input("Coffee", "four fifty", "Food"))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Invalid amount"));

        let err = service
            .add_from_input(input("Coffee|Tea", "4.5", "Food"))
            .unwrap_err();
        assert!(err.is_validation());

        assert!(service.list().is_empty());
        assert_eq!(storage.budgets.count(), 0);
    }

    #[test]
    fn test_delete_restores_budget() {
        let (_temp_dir, mut storage) = create_test_storage();
        storage.budgets.set("Food", Amount::new(10.0));
        let mut service = ExpenseService::new(&mut storage);

        service.add("Coffee", Amount::new(4.0), "Food").unwrap();
        let deleted = service.delete(0).unwrap();

        assert_eq!(deleted.name, "Coffee");
        assert!(service.list().is_empty());
        assert_eq!(storage.budgets.get("Food").unwrap().remaining, Amount::new(10.0));
    }

    #[test]
    fn test_delete_from_unlimited_category_caps_at_amount() {
        let (_temp_dir, mut storage) = create_test_storage();
        storage.budgets.ensure("Food");
        let mut service = ExpenseService::new(&mut storage);

        service.add("Coffee", Amount::new(4.5), "Food").unwrap();
        assert_eq!(
            service.storage.budgets.get("Food").unwrap().remaining,
            Amount::zero()
        );

        service.delete(0).unwrap();
        assert_eq!(storage.budgets.get("Food").unwrap().remaining, Amount::new(4.5));
    }

    #[test]
    fn test_delete_out_of_range() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);

        let err = service.delete(3).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Expense not found: #4");
    }

    #[test]
    fn test_edit_moves_record_to_end() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);

        let coffee = service.add("Coffee", Amount::new(4.5), "Food").unwrap();
        service.add("Bus", Amount::new(2.75), "Transport").unwrap();

        let edited = service.edit(0, Some(Amount::new(5.0)), Some("Drinks")).unwrap();

        assert_eq!(edited.name, "Coffee");
        assert_eq!(edited.timestamp, coffee.timestamp);
        assert_eq!(service.list()[0].name, "Bus");
        assert_eq!(service.list()[1], edited);
        assert!(storage.budgets.contains("Drinks"));
    }

    #[test]
    fn test_edit_does_not_touch_budgets() {
        let (_temp_dir, mut storage) = create_test_storage();
        storage.budgets.set("Food", Amount::new(10.0));
        let mut service = ExpenseService::new(&mut storage);

        service.add("Coffee", Amount::new(4.0), "Food").unwrap();
        service.edit(0, Some(Amount::new(9.0)), None).unwrap();

        assert_eq!(storage.budgets.get("Food").unwrap().remaining, Amount::new(6.0));
        let entries = storage.audit().read_all().unwrap();
        let last = entries.last().unwrap();
        assert_eq!(last.diff_summary.as_deref(), Some("amount: 4.0 -> 9.0"));
    }

    #[test]
    fn test_edit_rejects_bad_category() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);
        service.add("Coffee", Amount::new(4.5), "Food").unwrap();

        assert!(service.edit(0, None, Some("")).unwrap_err().is_validation());
        assert!(service.edit(7, None, None).unwrap_err().is_not_found());
        assert_eq!(service.list()[0].category, "Food");
    }

    #[test]
    fn test_search() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);
        service.add("Coffee", Amount::new(4.5), "Food").unwrap();
        service.add("Bus ticket", Amount::new(2.75), "Transport").unwrap();
        service.add("Sandwich", Amount::new(6.0), "Food").unwrap();

        let hits = service.search("TICKET");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, 1);

        let food: Vec<usize> = service.search("food").iter().map(|(i, _)| *i).collect();
        assert_eq!(food, vec![0, 2]);

        assert_eq!(service.search("2.75").len(), 1);
        assert!(service.search("rent").is_empty());
        assert_eq!(service.search("").len(), 3);
    }

    #[test]
    fn test_import_legacy() {
        let (temp_dir, mut storage) = create_test_storage();
        storage.budgets.set("Groceries", Amount::new(1.0));
        let legacy = temp_dir.path().join("old.txt");
        std::fs::write(
            &legacy,
            "Milk|3.2|Groceries\nMovie|12.0|Entertainment\nbad line\n",
        )
        .unwrap();

        let mut service = ExpenseService::new(&mut storage);
        let summary = service.import_legacy(&legacy).unwrap();

        assert_eq!(
            summary,
            ImportSummary {
                imported: 2,
                skipped: 1,
                new_categories: 1
            }
        );
        assert_eq!(service.list().len(), 2);
        // Historical records do not consume budget
        assert_eq!(
            storage.budgets.get("Groceries").unwrap().remaining,
            Amount::new(1.0)
        );
    }
}
