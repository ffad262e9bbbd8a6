//! JSON rendering of parsed expressions.
//!
//! Each node becomes an object tagged with its variant name under `"type"`,
//! which makes trees easy to diff and to hand to tools written in other
//! languages.
//!
//! # Examples
//!
//! ```
//! use tplexpr::output::to_json;
//!
//! let expr = tplexpr::parse_expression("a + 1").unwrap();
//! assert_eq!(
//!     to_json(&expr),
//!     r#"{"left":{"name":"a","type":"Identifier"},"operator":"+","right":{"type":"Literal","value":1},"type":"BinaryOperation"}"#
//! );
//! ```

use rust_decimal::prelude::ToPrimitive;
use serde_json::{Map, Value, json};

use crate::ast::{CommaExpression, Expr, LiteralValue};

/// Convert a literal to the closest JSON value.
///
/// Whole numbers that fit an `i64` stay integers; anything else goes through
/// `f64`.
pub fn literal_to_json(value: &LiteralValue) -> Value {
    match value {
        LiteralValue::Null => Value::Null,
        LiteralValue::Boolean(b) => Value::Bool(*b),
        LiteralValue::String(s) => Value::String(s.clone()),
        LiteralValue::Number(n) => {
            let normalized = n.normalize();
            if normalized.scale() == 0
                && let Some(i) = normalized.to_i64()
            {
                return Value::Number(i.into());
            }
            normalized
                .to_f64()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
                .unwrap_or(Value::Null)
        }
        LiteralValue::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
    }
}

fn comma_to_json(list: &CommaExpression) -> Value {
    Value::Array(list.expressions.iter().map(expr_to_json).collect())
}

/// Convert an expression tree to a `serde_json::Value`.
pub fn expr_to_json(expr: &Expr) -> Value {
    let mut node = Map::new();
    node.insert("type".to_string(), json!(expr.kind_name()));

    match expr {
        Expr::Literal(value) => {
            node.insert("value".to_string(), literal_to_json(value));
        }
        Expr::Identifier(name) => {
            node.insert("name".to_string(), json!(name));
        }
        Expr::UnaryOperation { op, operand } => {
            node.insert("operator".to_string(), json!(op.as_str()));
            node.insert("operand".to_string(), expr_to_json(operand));
        }
        Expr::BinaryOperation { op, left, right } => {
            node.insert("operator".to_string(), json!(op.as_str()));
            node.insert("left".to_string(), expr_to_json(left));
            node.insert("right".to_string(), expr_to_json(right));
        }
        Expr::TernaryOperation {
            condition,
            then_branch,
            else_branch,
        } => {
            node.insert("condition".to_string(), expr_to_json(condition));
            node.insert("then".to_string(), expr_to_json(then_branch));
            node.insert("else".to_string(), expr_to_json(else_branch));
        }
        Expr::ArrayContainer(elements) => {
            node.insert(
                "elements".to_string(),
                Value::Array(elements.iter().map(expr_to_json).collect()),
            );
        }
        Expr::CommaExpression(list) => {
            node.insert("elements".to_string(), comma_to_json(list));
        }
        Expr::FunctionCall { callee, arguments } => {
            node.insert("callee".to_string(), expr_to_json(callee));
            node.insert("arguments".to_string(), comma_to_json(arguments));
        }
        Expr::FilterCall { name, arguments } => {
            node.insert("name".to_string(), json!(name));
            node.insert("arguments".to_string(), comma_to_json(arguments));
        }
    }

    Value::Object(node)
}

/// Compact JSON for `expr`.
pub fn to_json(expr: &Expr) -> String {
    expr_to_json(expr).to_string()
}

/// Pretty-printed JSON for `expr`, two spaces per level.
pub fn to_json_pretty(expr: &Expr) -> String {
    serde_json::to_string_pretty(&expr_to_json(expr)).unwrap_or_default()
}
