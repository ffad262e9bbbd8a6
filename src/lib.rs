pub mod ast;
pub mod cli;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod token_reader;

pub use ast::{BinOp, CommaExpression, Expr, LiteralValue, Position, Token, TokenKind, UnaryOp};
pub use lexer::{LexError, Lexer};
pub use output::{to_json, to_json_pretty};
pub use parser::{MAX_NESTING_DEPTH, ParseError, Parser};
pub use token_reader::{TokenReader, TokenSource};

/// Parse a complete expression from source text.
pub fn parse_expression(input: &str) -> Result<Expr, ParseError> {
    Parser::from_source(input)?.parse()
}

/// Parse a complete comma-separated expression list from source text.
pub fn parse_comma_expression(input: &str) -> Result<CommaExpression, ParseError> {
    let mut parser = Parser::from_source(input)?;
    let list = parser.parse_comma_expression()?;
    parser.finish()?;
    Ok(list)
}
