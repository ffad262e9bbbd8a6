use std::fmt;

use crate::{
    ast::{BinOp, CommaExpression, Expr, Token, TokenKind, UnaryOp},
    lexer::{self, LexError, Lexer},
    token_reader::{TokenReader, TokenSource},
};

/// Deepest nesting of sub-expressions the parser accepts.
///
/// Every parenthesis, array literal, call argument, ternary branch and
/// prefix operator opens one level. Deeper input fails with
/// [`ParseError::NestingTooDeep`] instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 64;

const LOGIC_OR: &[(&str, BinOp)] = &[("||", BinOp::Or), ("or", BinOp::Or)];

const LOGIC_AND: &[(&str, BinOp)] = &[("&&", BinOp::And), ("and", BinOp::And)];

const COMPARE: &[(&str, BinOp)] = &[
    ("==", BinOp::Equal),
    ("!=", BinOp::NotEqual),
    (">=", BinOp::GreaterEqual),
    ("<=", BinOp::LessEqual),
    (">", BinOp::GreaterThan),
    ("<", BinOp::LessThan),
    ("===", BinOp::StrictEqual),
    ("!==", BinOp::StrictNotEqual),
];

const ADD_SUB: &[(&str, BinOp)] = &[("+", BinOp::Add), ("-", BinOp::Subtract)];

const MUL_DIV: &[(&str, BinOp)] = &[
    ("*", BinOp::Multiply),
    ("/", BinOp::Divide),
    ("%", BinOp::Modulo),
];

/// Errors that can occur while parsing an expression.
///
/// Every variant is a syntax error; the parse is abandoned as soon as one is
/// raised and no partial tree is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A token that starts no expression, or input left over after one
    UnexpectedToken(Token),

    /// A required delimiter was missing
    ExpectedToken { expected: String, found: Token },

    /// Sub-expressions nested past [`MAX_NESTING_DEPTH`]
    NestingTooDeep(Token),

    /// The source text could not be tokenized
    Lex(LexError),
}

impl ParseError {
    /// The token the parser stopped at, if the error came from the parser.
    pub fn token(&self) -> Option<&Token> {
        match self {
            ParseError::UnexpectedToken(token) => Some(token),
            ParseError::ExpectedToken { found, .. } => Some(found),
            ParseError::NestingTooDeep(token) => Some(token),
            ParseError::Lex(_) => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken(token) => {
                write!(f, "Unexpected token {} at {}", token.describe(), token.position)
            }
            ParseError::ExpectedToken { expected, found } => write!(
                f,
                "Expected '{}', got {} at {}",
                expected,
                found.describe(),
                found.position
            ),
            ParseError::NestingTooDeep(token) => write!(
                f,
                "Expression nested deeper than {} levels at {}",
                MAX_NESTING_DEPTH, token.position
            ),
            ParseError::Lex(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError::Lex(e)
    }
}

type ParseFn<S> = fn(&mut Parser<S>) -> Result<Expr, ParseError>;

/// Recursive-descent parser over a [`TokenSource`].
///
/// One parser drives one token stream; the cursor advances as productions
/// match and is never rewound.
pub struct Parser<S = TokenReader> {
    source: S,
    depth: usize,
}

impl Parser<TokenReader> {
    /// Tokenize `input` and return a parser positioned at its first token.
    pub fn from_source(input: &str) -> Result<Self, ParseError> {
        let tokens = Lexer::new(input).tokenize()?;
        Ok(Parser::from_tokens(tokens))
    }

    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Parser::new(TokenReader::new(tokens))
    }
}

impl<S: TokenSource> Parser<S> {
    pub fn new(source: S) -> Self {
        Parser { source, depth: 0 }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Parse `expr (',' expr)*`. Always yields at least one element.
    pub fn parse_comma_expression(&mut self) -> Result<CommaExpression, ParseError> {
        let mut expressions = vec![];
        loop {
            expressions.push(self.parse_expression()?);
            if !self.source.check_and_move_next(",") {
                break;
            }
        }
        Ok(CommaExpression::new(expressions))
    }

    /// Parse one expression starting at the current token.
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.nested(Self::parse_function_call)
    }

    /// Parse one expression and require the token stream to end after it.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        log::debug!("parsing expression at {}", self.source.peek().position);
        let expr = self.parse_expression()?;
        self.finish()?;
        log::debug!("parsed {} node", expr.kind_name());
        Ok(expr)
    }

    /// Run `parse` one nesting level deeper.
    fn nested(&mut self, parse: ParseFn<S>) -> Result<Expr, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep(self.source.peek().clone()));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Fail unless every token has been consumed.
    pub fn finish(&self) -> Result<(), ParseError> {
        if self.source.has_more() {
            return Err(ParseError::UnexpectedToken(self.source.peek().clone()));
        }
        Ok(())
    }

    /// Postfix calls and filters, applied repeatedly to a ternary-level operand.
    fn parse_function_call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_ternary()?;

        loop {
            if self.source.check_and_move_next("(") {
                let arguments = self.parse_call_arguments()?;
                // A bare name calls the function registered under that name
                expr = match expr {
                    Expr::Identifier(name) => Expr::call(Expr::string(name), arguments),
                    callee => Expr::call(callee, arguments),
                };
            } else if self.source.check_and_move_next("|") {
                // Filter names are taken as-is, whatever the token kind
                let name = self.source.peek().text.clone();
                self.source.skip();

                let mut arguments = if self.source.check_and_move_next("(") {
                    self.parse_call_arguments()?
                } else {
                    CommaExpression::empty()
                };
                arguments.prepend(expr);

                expr = Expr::filter(name, arguments);
            } else {
                return Ok(expr);
            }
        }
    }

    /// Arguments after an already consumed `(`, through the closing `)`.
    fn parse_call_arguments(&mut self) -> Result<CommaExpression, ParseError> {
        let arguments = if self.source.peek_is(")") {
            CommaExpression::empty()
        } else {
            self.parse_comma_expression()?
        };
        self.source.expect_and_move_next(")")?;
        Ok(arguments)
    }

    fn parse_ternary(&mut self) -> Result<Expr, ParseError> {
        let condition = self.parse_logic_or()?;
        if !self.source.check_and_move_next("?") {
            return Ok(condition);
        }

        let then_branch = self.parse_expression()?;
        self.source.expect_and_move_next(":")?;
        let else_branch = self.parse_expression()?;

        Ok(Expr::ternary(condition, then_branch, else_branch))
    }

    fn parse_logic_or(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary(LOGIC_OR, Self::parse_logic_and)
    }

    fn parse_logic_and(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary(LOGIC_AND, Self::parse_compare)
    }

    fn parse_compare(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary(COMPARE, Self::parse_add_sub)
    }

    fn parse_add_sub(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary(ADD_SUB, Self::parse_mul_div)
    }

    fn parse_mul_div(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary(MUL_DIV, Self::parse_literal_unary)
    }

    /// Parenthesised expressions, array literals, prefix operators and
    /// literals.
    fn parse_literal_unary(&mut self) -> Result<Expr, ParseError> {
        if self.source.check_and_move_next("(") {
            let expr = self.parse_expression()?;
            self.source.expect_and_move_next(")")?;
            return Ok(expr);
        }

        if self.source.check_and_move_next("[") {
            return self.parse_array_literal();
        }

        let token = self.source.peek();
        match token.kind {
            TokenKind::Symbol => {
                if let Some(op) = UnaryOp::from_lexeme(&token.text) {
                    self.source.skip();
                    // Right-associative: `!!a` nests
                    let operand = self.nested(Self::parse_literal_unary)?;
                    return Ok(Expr::unary(op, operand));
                }
            }
            TokenKind::Number => {
                let value = lexer::parse_number(&token.text)
                    .ok_or_else(|| ParseError::UnexpectedToken(token.clone()))?;
                self.source.skip();
                return Ok(Expr::Literal(value));
            }
            TokenKind::String => {
                let value = token.text.clone();
                self.source.skip();
                return Ok(Expr::string(value));
            }
            TokenKind::Identifier | TokenKind::Eof => {}
        }

        self.parse_identifier()
    }

    /// Elements after an already consumed `[`, through the closing `]`.
    ///
    /// Commas between elements are optional and a trailing comma is allowed.
    fn parse_array_literal(&mut self) -> Result<Expr, ParseError> {
        let mut elements = vec![];

        loop {
            if self.source.check_and_move_next("]") {
                break;
            }
            elements.push(self.parse_expression()?);
            if self.source.check_and_move_next("]") {
                break;
            }
            self.source.check_and_move_next(",");
        }

        Ok(Expr::ArrayContainer(elements))
    }

    fn parse_identifier(&mut self) -> Result<Expr, ParseError> {
        let token = self.source.peek();
        if token.kind != TokenKind::Identifier {
            return Err(ParseError::UnexpectedToken(token.clone()));
        }

        let expr = match token.text.as_str() {
            "true" => Expr::boolean(true),
            "false" => Expr::boolean(false),
            "null" => Expr::null(),
            name => Expr::identifier(name),
        };
        self.source.skip();
        Ok(expr)
    }

    /// Left-associative climbing over one precedence level.
    ///
    /// Operands come from `next`; while the lookahead is one of `operators`
    /// it is consumed and the operands fold into a left-nested chain.
    fn parse_binary(
        &mut self,
        operators: &[(&str, BinOp)],
        next: ParseFn<S>,
    ) -> Result<Expr, ParseError> {
        let mut left = next(self)?;

        while self.source.has_more() {
            let op = match operators
                .iter()
                .find(|(lexeme, _)| self.source.peek_is(lexeme))
            {
                Some((_, op)) => *op,
                None => break,
            };
            self.source.skip();

            let right = next(self)?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }
}
