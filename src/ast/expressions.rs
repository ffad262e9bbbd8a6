use std::fmt;

use rust_decimal::Decimal;

use crate::ast::{BinOp, UnaryOp};

/// Value held by an [`Expr::Literal`].
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// Exact decimal number
    ///
    /// # Example
    /// ```text
    /// 42
    /// 0.1
    /// ```
    Number(Decimal),

    /// Number outside the exact decimal's range or precision
    ///
    /// # Example
    /// ```text
    /// 1e-30
    /// 1e29
    /// ```
    Float(f64),

    /// String, either written as a quoted literal or produced by rewriting
    /// the name of a called function
    String(String),

    /// `true` or `false`
    Boolean(bool),

    /// `null`
    Null,
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Number(n) => write!(f, "{}", n),
            LiteralValue::Float(n) => write!(f, "{}", n),
            LiteralValue::String(s) => write!(f, "{:?}", s),
            LiteralValue::Boolean(b) => write!(f, "{}", b),
            LiteralValue::Null => f.write_str("null"),
        }
    }
}

/// Comma-separated list of expressions.
///
/// Used for call and filter arguments, where an empty argument list is an
/// empty `CommaExpression` rather than an absent one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommaExpression {
    pub expressions: Vec<Expr>,
}

impl CommaExpression {
    pub fn new(expressions: Vec<Expr>) -> Self {
        CommaExpression { expressions }
    }

    pub fn empty() -> Self {
        CommaExpression::default()
    }

    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    /// Insert `expr` as the first element.
    pub fn prepend(&mut self, expr: Expr) {
        self.expressions.insert(0, expr);
    }
}

impl fmt::Display for CommaExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, expr) in self.expressions.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", expr)?;
        }
        Ok(())
    }
}

/// Abstract Syntax Tree node representing a parsed expression.
///
/// Nodes are built bottom-up by the parser and never mutated afterwards.
/// Every node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Number, string, boolean or null literal
    Literal(LiteralValue),

    /// Variable reference
    ///
    /// # Example
    /// ```text
    /// user
    /// ```
    Identifier(String),

    /// Prefix operation
    ///
    /// # Examples
    /// ```text
    /// -a
    /// !!flag
    /// ```
    UnaryOperation { op: UnaryOp, operand: Box<Expr> },

    /// Binary operation (arithmetic, comparison, logical)
    BinaryOperation {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Conditional expression
    ///
    /// # Example
    /// ```text
    /// user ? user : "anonymous"
    /// ```
    TernaryOperation {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },

    /// Array literal
    ///
    /// # Example
    /// ```text
    /// [1, 2, 3]
    /// ```
    ArrayContainer(Vec<Expr>),

    /// Comma-separated expression list
    CommaExpression(CommaExpression),

    /// Function call
    ///
    /// When the callee is written as a bare name it is stored as a string
    /// literal holding that name, so `range(1, 3)` has callee
    /// `Literal(String("range"))`. Any other callee is kept as written.
    FunctionCall {
        callee: Box<Expr>,
        arguments: CommaExpression,
    },

    /// Filter application; the piped value is the first argument
    ///
    /// # Example
    /// ```text
    /// name | upper
    /// items | join(", ")
    /// ```
    FilterCall {
        name: String,
        arguments: CommaExpression,
    },
}

impl Expr {
    pub fn number(n: impl Into<Decimal>) -> Self {
        Expr::Literal(LiteralValue::Number(n.into()))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Expr::Literal(LiteralValue::String(s.into()))
    }

    pub fn boolean(b: bool) -> Self {
        Expr::Literal(LiteralValue::Boolean(b))
    }

    pub fn null() -> Self {
        Expr::Literal(LiteralValue::Null)
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::UnaryOperation {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::BinaryOperation {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn ternary(condition: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Expr::TernaryOperation {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn call(callee: Expr, arguments: CommaExpression) -> Self {
        Expr::FunctionCall {
            callee: Box::new(callee),
            arguments,
        }
    }

    pub fn filter(name: impl Into<String>, arguments: CommaExpression) -> Self {
        Expr::FilterCall {
            name: name.into(),
            arguments,
        }
    }

    /// Name of the node variant, as used in JSON output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Literal(_) => "Literal",
            Expr::Identifier(_) => "Identifier",
            Expr::UnaryOperation { .. } => "UnaryOperation",
            Expr::BinaryOperation { .. } => "BinaryOperation",
            Expr::TernaryOperation { .. } => "TernaryOperation",
            Expr::ArrayContainer(_) => "ArrayContainer",
            Expr::CommaExpression(_) => "CommaExpression",
            Expr::FunctionCall { .. } => "FunctionCall",
            Expr::FilterCall { .. } => "FilterCall",
        }
    }
}

/// Whether `name` lexes back as a single identifier that is not a keyword.
fn is_plain_name(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_well = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    starts_well
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !matches!(name, "true" | "false" | "null")
}

/// Fully parenthesised infix rendering.
///
/// Operator and operand order is the order they appeared in the source, so
/// `a - b - c` prints as `((a - b) - c)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(value) => write!(f, "{}", value),
            Expr::Identifier(name) => f.write_str(name),
            Expr::UnaryOperation { op, operand } => write!(f, "({}{})", op, operand),
            Expr::BinaryOperation { op, left, right } => {
                write!(f, "({} {} {})", left, op, right)
            }
            Expr::TernaryOperation {
                condition,
                then_branch,
                else_branch,
            } => write!(f, "({} ? {} : {})", condition, then_branch, else_branch),
            Expr::ArrayContainer(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                f.write_str("]")
            }
            Expr::CommaExpression(list) => write!(f, "{}", list),
            Expr::FunctionCall { callee, arguments } => match &**callee {
                Expr::Literal(LiteralValue::String(name)) if is_plain_name(name) => {
                    write!(f, "{}({})", name, arguments)
                }
                other => write!(f, "{}({})", other, arguments),
            },
            Expr::FilterCall { name, arguments } => {
                let mut args = arguments.expressions.iter();
                match args.next() {
                    Some(input) => write!(f, "({} | {}", input, name)?,
                    None => write!(f, "(| {}", name)?,
                }
                if arguments.len() > 1 {
                    f.write_str("(")?;
                    for (i, arg) in args.enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    f.write_str(")")?;
                }
                f.write_str(")")
            }
        }
    }
}
