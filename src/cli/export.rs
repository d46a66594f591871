//! CLI commands for data export
//!
//! Provides commands for exporting data in various formats.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_budgets_csv, export_expenses_csv, export_full_json, export_full_yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expenses, or budgets with --budgets)
    Csv,
    /// JSON format (full ledger)
    Json,
    /// YAML format (full ledger, human-readable)
    Yaml,
}

/// Handle the export command
///
/// Writes to `output` when given, otherwise to standard output.
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
    pretty: bool,
    budgets: bool,
) -> ExpenseResult<()> {
    match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(storage, format, pretty, budgets, &mut writer)?;
            writer.flush()?;

            let what = match format {
                ExportFormat::Csv if budgets => "Budgets",
                ExportFormat::Csv => "Expenses",
                ExportFormat::Json | ExportFormat::Yaml => "Full ledger",
            };
            println!("{} exported to: {}", what, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(storage, format, pretty, budgets, &mut writer)?;
            if format == ExportFormat::Json {
                writeln!(writer)?;
            }
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    storage: &Storage,
    format: ExportFormat,
    pretty: bool,
    budgets: bool,
    writer: &mut W,
) -> ExpenseResult<()> {
    match format {
        ExportFormat::Csv if budgets => export_budgets_csv(storage, writer),
        ExportFormat::Csv => export_expenses_csv(storage, writer),
        ExportFormat::Json => export_full_json(storage, writer, pretty),
        ExportFormat::Yaml => export_full_yaml(storage, writer),
    }
}
