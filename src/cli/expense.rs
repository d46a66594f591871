//! Expense CLI commands
//!
//! Implements the ledger commands: add, list, delete, edit, search and
//! legacy import. Records are addressed by their 1-based ledger number.

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_line, format_expense_list, format_search_results};
use crate::error::{ExpenseError, ExpenseResult};
use crate::services::expense::parse_amount;
use crate::services::{ExpenseInput, ExpenseService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        name: String,
        /// Amount spent (e.g., "4.50" or "$4.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category to charge
        #[arg(short, long)]
        category: String,
    },

    /// List all expenses
    #[command(alias = "ls")]
    List,

    /// Delete an expense and refund its category budget
    Delete {
        /// Expense number as shown by `list`
        number: usize,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Change the amount or category of an expense
    Edit {
        /// Expense number as shown by `list`
        number: usize,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Search expenses by name, category or amount
    Search {
        /// Text to look for (case-insensitive); empty matches everything
        #[arg(default_value = "")]
        text: String,
    },

    /// Append expenses from a `name|amount|category` file
    #[command(name = "import-legacy")]
    ImportLegacy {
        /// Path to the file
        path: PathBuf,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let mut service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            category,
        } => {
            let expense = service.add_from_input(ExpenseInput {
                name: &name,
                amount: &amount,
                category: &category,
            })?;
            println!("Added: {}", format_expense_line(&expense, symbol));

            if let Some(budget) = service.budget(&expense.category) {
                if !budget.is_unlimited() {
                    println!(
                        "Remaining {} budget: {}",
                        budget.category,
                        budget.remaining.format_with_symbol(symbol)
                    );
                }
            }
        }

        ExpenseCommands::List => {
            print!("{}", format_expense_list(service.list(), symbol));
        }

        ExpenseCommands::Delete { number, force } => {
            let index = ledger_index(number)?;
            let expense = service.get(index)?;

            if !force {
                println!("About to delete expense #{}:", number);
                print!("{}", format_expense_details(expense, symbol));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(index)?;
            println!("Deleted: {}", format_expense_line(&deleted, symbol));
        }

        ExpenseCommands::Edit {
            number,
            amount,
            category,
        } => {
            let index = ledger_index(number)?;
            service.get(index)?;

            if amount.is_none() && category.is_none() {
                println!("No changes specified. Use --amount or --category.");
                return Ok(());
            }

            let amount = amount.as_deref().map(parse_amount).transpose()?;
            let edited = service.edit(index, amount, category.as_deref())?;
            println!("Updated: {}", format_expense_line(&edited, symbol));
        }

        ExpenseCommands::Search { text } => {
            let hits = service.search(&text);
            print!("{}", format_search_results(&hits, symbol));
        }

        ExpenseCommands::ImportLegacy { path } => {
            let summary = service.import_legacy(&path)?;
            println!(
                "Imported {} expense(s) from {}",
                summary.imported,
                path.display()
            );
            if summary.new_categories > 0 {
                println!("Registered {} new categor(y/ies)", summary.new_categories);
            }
            if summary.skipped > 0 {
                println!("Skipped {} malformed line(s)", summary.skipped);
            }
        }
    }

    Ok(())
}

/// Convert a 1-based ledger number to a position
fn ledger_index(number: usize) -> ExpenseResult<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| ExpenseError::expense_not_found(format!("#{}", number)))
}
