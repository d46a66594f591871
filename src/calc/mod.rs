//! Arithmetic calculator
//!
//! Evaluates `+ - * /` expressions over decimal numbers with parentheses and
//! unary signs. Input is tokenized and parsed; nothing else is executed.

pub mod lexer;
pub mod parser;

use std::fmt;

pub use lexer::{tokenize, Token, TokenKind};
pub use parser::Parser;

use crate::error::ExpenseError;

/// Errors produced while evaluating an expression
///
/// Every variant carries the byte offset in the input where it was detected.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    UnexpectedCharacter { ch: char, offset: usize },
    UnexpectedEnd { offset: usize },
    UnexpectedToken { found: String, offset: usize },
    UnbalancedParenthesis { offset: usize },
    InvalidNumber { text: String, offset: usize },
    DivisionByZero { offset: usize },
    NotFinite { offset: usize },
    /// Parentheses nested past the evaluator's limit
    TooDeep { offset: usize },
}

impl CalcError {
    /// Byte offset of the error in the input
    pub fn offset(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { offset, .. }
            | Self::UnexpectedEnd { offset }
            | Self::UnexpectedToken { offset, .. }
            | Self::UnbalancedParenthesis { offset }
            | Self::InvalidNumber { offset, .. }
            | Self::DivisionByZero { offset }
            | Self::NotFinite { offset }
            | Self::TooDeep { offset } => *offset,
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter { ch, offset } => {
                write!(f, "unexpected character '{}' at position {}", ch, offset)
            }
            Self::UnexpectedEnd { offset } => {
                write!(f, "unexpected end of expression at position {}", offset)
            }
            Self::UnexpectedToken { found, offset } => {
                write!(f, "unexpected '{}' at position {}", found, offset)
            }
            Self::UnbalancedParenthesis { offset } => {
                write!(f, "unbalanced parenthesis at position {}", offset)
            }
            Self::InvalidNumber { text, offset } => {
                write!(f, "invalid number '{}' at position {}", text, offset)
            }
            Self::DivisionByZero { offset } => write!(f, "division by zero at position {}", offset),
            Self::NotFinite { offset } => {
                write!(f, "result is not a finite number at position {}", offset)
            }
            Self::TooDeep { offset } => {
                write!(f, "expression nested too deeply at position {}", offset)
            }
        }
    }
}

impl std::error::Error for CalcError {}

impl From<CalcError> for ExpenseError {
    fn from(err: CalcError) -> Self {
        ExpenseError::Calc(err.to_string())
    }
}

/// Evaluate an arithmetic expression
pub fn evaluate(input: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(input)?;
    Parser::new(&tokens, input.len()).parse()
}

/// Format a result the way the calculator display shows it
///
/// Integral results print without a fraction (`12`), others use the
/// shortest representation (`0.5`).
pub fn format_result(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
