//! Cursor over a token stream.
//!
//! The parser only talks to its input through [`TokenSource`], so any
//! producer of tokens with one token of lookahead can drive it.
//! [`TokenReader`] is the stock implementation over a `Vec<Token>`.

use crate::{
    ast::{Position, Token, TokenKind},
    parser::ParseError,
};

/// Lookahead-of-one cursor consumed by the parser.
pub trait TokenSource {
    /// The current token, without consuming it.
    ///
    /// Must keep returning an `Eof` token once the stream is exhausted.
    fn peek(&self) -> &Token;

    /// Consume the current token.
    fn skip(&mut self);

    /// True while tokens other than the end marker remain.
    fn has_more(&self) -> bool {
        !self.peek().is_eof()
    }

    /// True if the current token can be matched as punctuation or operator
    /// `lexeme`. String literals and the end marker never match.
    fn peek_is(&self, lexeme: &str) -> bool {
        let token = self.peek();
        matches!(
            token.kind,
            TokenKind::Symbol | TokenKind::Identifier | TokenKind::Number
        ) && token.text == lexeme
    }

    /// Consume the current token, failing if it is not `lexeme`.
    fn expect_and_move_next(&mut self, lexeme: &str) -> Result<(), ParseError> {
        if !self.peek_is(lexeme) {
            return Err(ParseError::ExpectedToken {
                expected: lexeme.to_string(),
                found: self.peek().clone(),
            });
        }
        self.skip();
        Ok(())
    }

    /// Consume the current token if it is `lexeme`.
    fn check_and_move_next(&mut self, lexeme: &str) -> bool {
        if self.peek_is(lexeme) {
            self.skip();
            true
        } else {
            false
        }
    }
}

/// [`TokenSource`] over an owned vector of tokens.
#[derive(Debug, Clone)]
pub struct TokenReader {
    tokens: Vec<Token>,
    current: usize,
}

impl TokenReader {
    /// Wrap `tokens`, ending the stream at the first `Eof` marker.
    ///
    /// Tokens after that marker are dropped. A vector without one gets an
    /// `Eof` appended just past its last token.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if let Some(end) = tokens.iter().position(Token::is_eof) {
            tokens.truncate(end + 1);
        } else {
            let position = tokens
                .last()
                .map(|t| {
                    let width = t.text.chars().count();
                    Position::new(
                        t.position.line,
                        t.position.column + width,
                        t.position.offset + t.text.len(),
                    )
                })
                .unwrap_or_default();
            tokens.push(Token::eof(position));
        }
        TokenReader { tokens, current: 0 }
    }

    /// Index of the current token.
    pub fn offset(&self) -> usize {
        self.current
    }

    /// Tokens not yet consumed, including the end marker.
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.current..]
    }
}

impl TokenSource for TokenReader {
    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn skip(&mut self) {
        if self.current + 1 < self.tokens.len() {
            log::trace!("consumed {:?}", self.tokens[self.current].text);
            self.current += 1;
        }
    }
}
