//! CLI support for tplexpr
//!
//! Provides programmatic access to the `tplexpr` command so template engines
//! and editor tooling can reuse it without spawning a process.

mod check;
mod docs;
mod tokens;

pub use check::{CheckOptions, CheckResult, OutputFormat, execute_check};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use tokens::{execute_tokens, format_tokens};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Lexer or parser error
    Parse(crate::ParseError),
    /// IO error
    Io(io::Error),
    /// No expression given and nothing piped to stdin
    NoInput,
    /// Unknown documentation category
    UnknownCategory(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Parse(e) => write!(f, "Syntax error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => {
                write!(f, "No expression provided. Pass one as an argument or pipe it to stdin.")
            }
            CliError::UnknownCategory(c) => {
                write!(
                    f,
                    "Unknown category: '{}'\nRun 'tplexpr docs' to see available categories.",
                    c
                )
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Parse(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::ParseError> for CliError {
    fn from(e: crate::ParseError) -> Self {
        CliError::Parse(e)
    }
}

impl From<crate::LexError> for CliError {
    fn from(e: crate::LexError) -> Self {
        CliError::Parse(e.into())
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
