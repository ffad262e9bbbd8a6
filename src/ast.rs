//! # Template Expression Language - Abstract Syntax Tree
//!
//! This module defines the tokens consumed by the parser and the tree it
//! produces for the expression slots of a template (`{{ ... }}`).
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (literals, operations, calls, filters)
//! - **[operators]** - Unary and binary operators
//!
//! ## Quick Start
//!
//! ```text
//! active ? name | upper : "guest"
//! ```
//!
//! ## Precedence
//!
//! From loosest to tightest binding:
//!
//! | Level | Syntax                                    |
//! |-------|-------------------------------------------|
//! | 1     | calls `f(x)` and filters `x \| f`         |
//! | 2     | ternary `c ? a : b`                       |
//! | 3     | `\|\|`, `or`                              |
//! | 4     | `&&`, `and`                               |
//! | 5     | `== != === !== < > <= >=`                 |
//! | 6     | `+ -`                                     |
//! | 7     | `* / %`                                   |
//! | 8     | prefix `- + ~ !`                          |
//! | 9     | literals, names, `( )`, `[ ]`             |
//!
//! Binary operators are left-associative; ternaries nest in either branch
//! without parentheses.
//!
//! ## Examples
//!
//! ### Named function call
//!
//! ```text
//! range(1, 10)
//! ```
//!
//! ### Filter chain
//!
//! ```text
//! items | sort | join(", ")
//! ```
pub mod expressions;
pub mod operators;
pub mod tokens;

pub use expressions::{CommaExpression, Expr, LiteralValue};
pub use operators::{BinOp, UnaryOp};
pub use tokens::{Position, Token, TokenKind};
