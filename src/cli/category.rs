//! Category CLI commands
//!
//! Implements CLI commands for categories and their remaining budgets.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_line, format_budget_list};
use crate::error::ExpenseResult;
use crate::services::expense::parse_amount;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// Register a new category (no budget limit)
    Add {
        /// Category name
        name: String,
    },

    /// Show every category with its remaining budget
    #[command(alias = "ls")]
    List,

    /// Set the remaining budget of a category (0 means no limit)
    Budget {
        /// Category name
        name: String,
        /// New remaining budget
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

/// Handle a category command
pub fn handle_category_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: CategoryCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let mut service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::Add { name } => {
            let budget = service.add_category(&name)?;
            println!("Added category: {}", budget.category);
        }

        CategoryCommands::List => {
            print!("{}", format_budget_list(service.list(), symbol));
        }

        CategoryCommands::Budget { name, value } => {
            let amount = parse_amount(&value)?;
            let budget = service.edit_budget(&name, amount)?;
            println!("Updated {}", format_budget_line(&budget, symbol));
        }
    }

    Ok(())
}
