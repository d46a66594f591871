//! Tokenizer for calculator expressions

use super::CalcError;

/// Kind of a lexical token
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl TokenKind {
    /// Source form, used in error messages
    pub fn describe(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Plus => "+".into(),
            Self::Minus => "-".into(),
            Self::Star => "*".into(),
            Self::Slash => "/".into(),
            Self::LParen => "(".into(),
            Self::RParen => ")".into(),
        }
    }
}

/// A token and the byte offset where it starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

/// Split an expression into tokens, skipping whitespace
pub fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let byte = bytes[pos];

        let kind = match byte {
            b' ' | b'\t' | b'\r' | b'\n' => {
                pos += 1;
                continue;
            }
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Star,
            b'/' => TokenKind::Slash,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'0'..=b'9' | b'.' => {
                let end = scan_number(bytes, pos);
                let text = &input[pos..end];
                let value: f64 = text.parse().map_err(|_| CalcError::InvalidNumber {
                    text: text.to_string(),
                    offset: pos,
                })?;
                tokens.push(Token {
                    kind: TokenKind::Number(value),
                    offset: pos,
                });
                pos = end;
                continue;
            }
            _ => {
                let ch = input[pos..].chars().next().unwrap_or('\u{FFFD}');
                return Err(CalcError::UnexpectedCharacter { ch, offset: pos });
            }
        };

        tokens.push(Token { kind, offset: pos });
        pos += 1;
    }

    Ok(tokens)
}

/// Find the end of a numeric literal: digits, optional fraction, optional exponent
fn scan_number(bytes: &[u8], start: usize) -> usize {
    let mut pos = start;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
    }
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut exp = pos + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        // Only consume the exponent when digits follow
        if exp < bytes.len() && bytes[exp].is_ascii_digit() {
            pos = exp;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
        }
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_tokenize_operators() {
        assert_eq!(
            kinds("(1+2)*3/4-5"),
            vec![
                TokenKind::LParen,
                TokenKind::Number(1.0),
                TokenKind::Plus,
                TokenKind::Number(2.0),
                TokenKind::RParen,
                TokenKind::Star,
                TokenKind::Number(3.0),
                TokenKind::Slash,
                TokenKind::Number(4.0),
                TokenKind::Minus,
                TokenKind::Number(5.0),
            ]
        );
    }

    #[test]
    fn test_token_offsets() {
        let tokens = tokenize("  12.5 +  3").unwrap();
        let offsets: Vec<usize> = tokens.iter().map(|t| t.offset).collect();
        assert_eq!(offsets, vec![2, 7, 10]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(kinds("4.50"), vec![TokenKind::Number(4.5)]);
        assert_eq!(kinds("1e2"), vec![TokenKind::Number(100.0)]);
        assert_eq!(kinds("3."), vec![TokenKind::Number(3.0)]);
    }

    #[test]
    fn test_dangling_exponent_is_not_consumed() {
        let err = tokenize("2e").unwrap_err();
        assert_eq!(err, CalcError::UnexpectedCharacter { ch: 'e', offset: 1 });
    }

    #[test]
    fn test_lone_dot_is_invalid() {
        let err = tokenize("1 + .").unwrap_err();
        assert!(matches!(err, CalcError::InvalidNumber { offset: 4, .. }));
    }

    #[test]
    fn test_unicode_character_reported() {
        let err = tokenize("1 × 2").unwrap_err();
        assert_eq!(err, CalcError::UnexpectedCharacter { ch: '×', offset: 2 });
    }
}
