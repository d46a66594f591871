use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_calc_command, handle_category_command, handle_expense_command, handle_export_command,
    handle_history_command, handle_new_command, handle_report_command, handle_save_as_command,
    CategoryCommands, ExpenseCommands, ExportFormat,
};
use expense_tracker::config::paths::{ExpensePaths, DATA_DIR_ENV};
use expense_tracker::config::settings::Settings;
use expense_tracker::storage::init::{initialize_storage, needs_initialization};
use expense_tracker::storage::Storage;
use expense_tracker::ExpenseError;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track expenses against per-category budgets",
    long_about = "A personal expense tracker. Record what you spend, cap \
                  categories with a remaining budget, search the ledger and \
                  see where the money goes."
)]
struct Cli {
    /// Directory holding expenses.txt, budgets.txt and the audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Category and budget commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Spending per category
    Report {
        /// Show the N categories with the most spending
        #[arg(long)]
        top: Option<usize>,

        /// Write the report to a CSV file instead
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Evaluate an arithmetic expression (+ - * / and parentheses)
    Calc {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
        expression: Vec<String>,
    },

    /// Save the ledger to another file (budgets go next to it)
    #[command(name = "save-as")]
    SaveAs {
        /// Target expense file
        path: PathBuf,
    },

    /// Start over with an empty ledger
    New {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Export data
    Export {
        /// Export format
        #[arg(value_enum)]
        format: ExportFormat,

        /// Output file path (default: standard output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Export budgets instead of expenses (CSV only)
        #[arg(long)]
        budgets: bool,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Initialize the data directory
    Init {
        /// Create the starter categories
        #[arg(long)]
        defaults: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match err.downcast_ref::<ExpenseError>() {
            Some(expense_err) if expense_err.is_warning() => {
                eprintln!("Warning: {}", warning_message(expense_err));
                Ok(ExitCode::FAILURE)
            }
            _ => Err(err),
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = ExpensePaths::resolve(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("Expense Tracker - track expenses against category budgets");
        println!();
        println!("Run 'expenses --help' for usage information.");
        return Ok(());
    };

    match &command {
        Commands::Init { defaults } => {
            let defaults = *defaults;
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            initialize_storage(&paths, defaults)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            if defaults {
                println!();
                println!("Starter categories: General, Groceries, Utilities, Entertainment");
                println!("Run 'expenses category list' to see them.");
            }
            return Ok(());
        }
        Commands::Config => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Budgets file:   {}", paths.budgets_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            if needs_initialization(&paths) {
                println!("Not initialized yet. Run 'expenses init' to write the settings file.");
            }
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Atomic writes:   {}", settings.atomic_writes);
            println!("  History limit:   {}", settings.history_limit);
            return Ok(());
        }
        Commands::Calc { expression } => {
            handle_calc_command(expression)?;
            return Ok(());
        }
        _ => {}
    }

    let mut storage = Storage::new(paths, &settings)?;
    storage.load_all()?;

    let skipped = storage.skipped_lines();
    if skipped > 0 {
        eprintln!("Note: skipped {} malformed line(s) in the data files", skipped);
    }

    match command {
        Commands::Expense(cmd) => handle_expense_command(&mut storage, &settings, cmd)?,
        Commands::Category(cmd) => handle_category_command(&mut storage, &settings, cmd)?,
        Commands::Report { top, output } => handle_report_command(&storage, &settings, top, output)?,
        Commands::SaveAs { path } => handle_save_as_command(&storage, &path)?,
        Commands::New { force } => handle_new_command(&mut storage, force)?,
        Commands::Export {
            format,
            output,
            pretty,
            budgets,
        } => handle_export_command(&storage, format, output, pretty, budgets)?,
        Commands::History { limit } => handle_history_command(&storage, &settings, limit)?,
        Commands::Init { .. } | Commands::Config | Commands::Calc { .. } => {}
    }

    Ok(())
}

/// Warning text without the error category prefix
fn warning_message(err: &ExpenseError) -> String {
    match err {
        ExpenseError::Validation(message) => message.clone(),
        other => other.to_string(),
    }
}
