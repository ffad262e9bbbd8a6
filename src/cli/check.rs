//! Parse expressions and render their trees

use super::CliError;
use crate::{Parser, output};

/// How a parsed tree is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fully parenthesised infix, e.g. `((a - b) - c)`
    #[default]
    Infix,
    /// Single-line JSON
    Json,
    /// Indented JSON
    JsonPretty,
}

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The expression source text
    pub expression: String,
    /// Output format for the tree
    pub format: OutputFormat,
    /// Parse a comma-separated list instead of a single expression
    pub comma: bool,
    /// Only validate syntax, don't print the tree
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug, PartialEq)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Rendered tree
    Success(String),
}

/// Execute a tplexpr check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let mut parser = Parser::from_source(options.expression.trim())?;

    let expr = if options.comma {
        let list = parser.parse_comma_expression()?;
        parser.finish()?;
        crate::Expr::CommaExpression(list)
    } else {
        parser.parse()?
    };

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    let rendered = match options.format {
        OutputFormat::Infix => expr.to_string(),
        OutputFormat::Json => output::to_json(&expr),
        OutputFormat::JsonPretty => output::to_json_pretty(&expr),
    };
    Ok(CheckResult::Success(rendered))
}
