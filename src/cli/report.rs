//! CLI commands for reports
//!
//! Shows spending per category, the data behind every chart view.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::SpendingReport;
use crate::storage::Storage;

/// Handle the report command
///
/// With `output`, the full report is written as CSV instead of printed.
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    top: Option<usize>,
    output: Option<PathBuf>,
) -> ExpenseResult<()> {
    let report = SpendingReport::generate(storage.expenses.get_all());

    if let Some(output_path) = output {
        let file = File::create(&output_path).map_err(|e| {
            ExpenseError::Export(format!(
                "Failed to create file {}: {}",
                output_path.display(),
                e
            ))
        })?;
        report.export_csv(BufWriter::new(file))?;
        println!("Report exported to: {}", output_path.display());
    } else {
        print!("{}", report.format_terminal(&settings.currency_symbol, top));
    }

    Ok(())
}
