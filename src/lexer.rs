use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use rust_decimal::Decimal;

pub use crate::ast::Position;
use crate::ast::{LiteralValue, Token, TokenKind};

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?").expect("number pattern is valid")
});

/// Convert the text of a number token to a literal value.
///
/// Values a `Decimal` holds exactly become [`LiteralValue::Number`]. Values
/// past its 28-digit scale or its range (`1e-30`, `1e29`) fall back to
/// [`LiteralValue::Float`]. Returns `None` only when the text is not a number
/// or overflows an `f64`.
pub fn parse_number(text: &str) -> Option<LiteralValue> {
    let exact = if text.contains(['e', 'E']) {
        Decimal::from_scientific(&text.to_ascii_lowercase()).ok()
    } else {
        Decimal::from_str(text).ok()
    };
    match exact {
        Some(n) => Some(LiteralValue::Number(n)),
        None => f64::from_str(text)
            .ok()
            .filter(|f| f.is_finite())
            .map(LiteralValue::Float),
    }
}

/// Symbols ordered longest first so `===` wins over `==` and `=`.
const SYMBOLS: &[&str] = &[
    "===", "!==", "==", "!=", ">=", "<=", "&&", "||", "+", "-", "*", "/", "%", "!", "~", "<", ">",
    "(", ")", "[", "]", ",", "?", ":", "|",
];

/// Errors that can occur while splitting source text into tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// A character that starts no token
    UnexpectedCharacter { ch: char, position: Position },

    /// A string literal without its closing quote
    UnterminatedString { position: Position },

    /// A backslash followed by an unsupported character
    InvalidEscape { ch: char, position: Position },

    /// Digits the regex accepted but that overflow even an `f64`
    InvalidNumber { text: String, position: Position },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedCharacter { ch, position } => {
                write!(f, "Unexpected character '{}' at {}", ch, position)
            }
            LexError::UnterminatedString { position } => {
                write!(f, "Unterminated string starting at {}", position)
            }
            LexError::InvalidEscape { ch, position } => {
                write!(f, "Invalid escape sequence '\\{}' at {}", ch, position)
            }
            LexError::InvalidNumber { text, position } => {
                write!(f, "Invalid number '{}' at {}", text, position)
            }
        }
    }
}

impl std::error::Error for LexError {}

pub struct Lexer<'a> {
    input: &'a str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.offset..]
    }

    fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column, self.offset)
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.offset += ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn advance_by(&mut self, bytes: usize) {
        let target = self.offset + bytes;
        while self.offset < target {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_string(&mut self, quote: char, start: Position) -> Result<String, LexError> {
        let mut result = String::new();
        self.advance(); // opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                c if c == quote => {
                    self.advance();
                    return Ok(result);
                }
                '\\' => {
                    let escape_at = self.position();
                    self.advance();
                    match self.current_char() {
                        Some('n') => result.push('\n'),
                        Some('t') => result.push('\t'),
                        Some('r') => result.push('\r'),
                        Some('"') => result.push('"'),
                        Some('\'') => result.push('\''),
                        Some('\\') => result.push('\\'),
                        Some(ch) => {
                            return Err(LexError::InvalidEscape {
                                ch,
                                position: escape_at,
                            });
                        }
                        None => return Err(LexError::UnterminatedString { position: start }),
                    }
                    self.advance();
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(LexError::UnterminatedString { position: start })
    }

    fn read_number(&mut self, start: Position) -> Result<Token, LexError> {
        let text = match NUMBER.find(self.rest()) {
            Some(m) => m.as_str(),
            None => {
                return Err(LexError::UnexpectedCharacter {
                    ch: self.current_char().unwrap_or('\0'),
                    position: start,
                });
            }
        };
        if parse_number(text).is_none() {
            return Err(LexError::InvalidNumber {
                text: text.to_string(),
                position: start,
            });
        }
        self.advance_by(text.len());
        Ok(Token::new(TokenKind::Number, text, start))
    }

    fn read_symbol(&mut self, start: Position) -> Result<Token, LexError> {
        let rest = self.rest();
        match SYMBOLS.iter().find(|symbol| rest.starts_with(**symbol)) {
            Some(symbol) => {
                self.advance_by(symbol.len());
                Ok(Token::new(TokenKind::Symbol, *symbol, start))
            }
            None => Err(LexError::UnexpectedCharacter {
                ch: self.current_char().unwrap_or('\0'),
                position: start,
            }),
        }
    }

    /// Produce the next token, or an `Eof` token once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        let start = self.position();

        match self.current_char() {
            None => Ok(Token::eof(start)),
            Some(quote @ ('"' | '\'')) => {
                let text = self.read_string(quote, start)?;
                Ok(Token::new(TokenKind::String, text, start))
            }
            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => {
                let ident = self.read_identifier();
                Ok(Token::new(TokenKind::Identifier, ident, start))
            }
            Some(ch) if ch.is_ascii_digit() => self.read_number(start),
            Some(_) => self.read_symbol(start),
        }
    }

    /// Tokenize the whole input. The returned vector always ends with `Eof`.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.is_eof();
            log::trace!("lexed {} {:?} at {}", token.kind, token.text, token.position);
            tokens.push(token);
            if done {
                break;
            }
        }
        log::debug!("tokenized {} bytes into {} tokens", self.input.len(), tokens.len());
        Ok(tokens)
    }
}

#[test]
fn test_keywords_stay_identifiers() {
    let mut lexer = Lexer::new("and or true false null");
    for word in ["and", "or", "true", "false", "null"] {
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.text, word);
    }
    assert!(lexer.next_token().unwrap().is_eof());
}

#[test]
fn test_pipe_and_logical_or() {
    let tokens = Lexer::new("a | b || c").tokenize().unwrap();
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "|", "b", "||", "c", ""]);
}
