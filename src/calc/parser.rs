//! Recursive-descent evaluator
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := ('+' | '-')* (number | '(' expr ')')
//! ```
//!
//! Only parentheses recurse, and they are capped at [`MAX_DEPTH`] levels.

use super::lexer::{Token, TokenKind};
use super::CalcError;

/// Deepest parenthesis nesting accepted
pub const MAX_DEPTH: usize = 256;

/// Evaluates a token stream as it parses it
pub struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    depth: usize,
    end_offset: usize,
}

impl<'t> Parser<'t> {
    /// `end_offset` is reported for errors at the end of input
    pub fn new(tokens: &'t [Token], end_offset: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            end_offset,
        }
    }

    /// Evaluate the whole token stream
    pub fn parse(mut self) -> Result<f64, CalcError> {
        let value = self.expr()?;

        if let Some(token) = self.peek() {
            return Err(match token.kind {
                TokenKind::RParen => CalcError::UnbalancedParenthesis {
                    offset: token.offset,
                },
                kind => CalcError::UnexpectedToken {
                    found: kind.describe(),
                    offset: token.offset,
                },
            });
        }

        Ok(value)
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expr(&mut self) -> Result<f64, CalcError> {
        let mut value = self.term()?;

        while let Some(token) = self.peek() {
            let op = token.kind;
            if op != TokenKind::Plus && op != TokenKind::Minus {
                break;
            }
            self.pos += 1;

            let rhs = self.term()?;
            value = if op == TokenKind::Plus {
                value + rhs
            } else {
                value - rhs
            };
            check_finite(value, token.offset)?;
        }

        Ok(value)
    }

    fn term(&mut self) -> Result<f64, CalcError> {
        let mut value = self.factor()?;

        while let Some(token) = self.peek() {
            let op = token.kind;
            if op != TokenKind::Star && op != TokenKind::Slash {
                break;
            }
            self.pos += 1;

            let rhs = self.factor()?;
            value = if op == TokenKind::Star {
                value * rhs
            } else {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero {
                        offset: token.offset,
                    });
                }
                value / rhs
            };
            check_finite(value, token.offset)?;
        }

        Ok(value)
    }

    fn factor(&mut self) -> Result<f64, CalcError> {
        let mut negate = false;
        let token = loop {
            let token = self.next().ok_or(CalcError::UnexpectedEnd {
                offset: self.end_offset,
            })?;
            match token.kind {
                TokenKind::Plus => {}
                TokenKind::Minus => negate = !negate,
                _ => break token,
            }
        };

        let value = match token.kind {
            TokenKind::Number(value) => check_finite(value, token.offset)?,
            TokenKind::LParen => self.group(token.offset)?,
            kind => {
                return Err(CalcError::UnexpectedToken {
                    found: kind.describe(),
                    offset: token.offset,
                })
            }
        };

        Ok(if negate { -value } else { value })
    }

    /// Body of a parenthesized group whose `(` sits at `open`
    fn group(&mut self, open: usize) -> Result<f64, CalcError> {
        if self.depth == MAX_DEPTH {
            return Err(CalcError::TooDeep { offset: open });
        }
        self.depth += 1;
        let value = self.expr()?;
        self.depth -= 1;

        match self.next() {
            Some(Token {
                kind: TokenKind::RParen,
                ..
            }) => Ok(value),
            _ => Err(CalcError::UnbalancedParenthesis { offset: open }),
        }
    }
}

fn check_finite(value: f64, offset: usize) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NotFinite { offset })
    }
}
