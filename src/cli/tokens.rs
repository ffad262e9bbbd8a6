//! Token listing for debugging the lexer

use super::CliError;
use crate::{Lexer, Token};

/// One line per token: position, kind and text.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| {
            format!(
                "{}:{}\t{}\t{:?}",
                t.position.line, t.position.column, t.kind, t.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Tokenize `expression` and format the result.
pub fn execute_tokens(expression: &str) -> Result<String, CliError> {
    let tokens = Lexer::new(expression).tokenize()?;
    Ok(format_tokens(&tokens))
}
