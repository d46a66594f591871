//! Calculator command

use crate::calc::{evaluate, format_result};
use crate::error::ExpenseResult;

/// Evaluate an arithmetic expression given as one or more words
pub fn handle_calc_command(expression: &[String]) -> ExpenseResult<()> {
    let input = expression.join(" ");
    let value = evaluate(&input)?;
    println!("{}", format_result(value));
    Ok(())
}
