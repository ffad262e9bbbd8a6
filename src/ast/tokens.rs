use std::fmt;

/// Location of a token's first character in the source text.
///
/// `line` and `column` are 1-based, `offset` is the 0-based byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Position {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier or keyword
    ///
    /// # Examples
    /// ```text
    /// user
    /// and
    /// true
    /// ```
    Identifier,

    /// Numeric literal, integer or decimal
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.14
    /// 1e3
    /// ```
    Number,

    /// Quoted string literal. The token text holds the unescaped contents.
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// 'world'
    /// ```
    String,

    /// Operator or punctuation
    ///
    /// # Examples
    /// ```text
    /// +  ===  (  ,  ?  |
    /// ```
    Symbol,

    /// End of the token stream. Its text is empty so no operator matches it.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Symbol => "symbol",
            TokenKind::Eof => "eof",
        };
        f.write_str(name)
    }
}

/// A single lexical unit handed from the lexer to the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Token {
            kind,
            text: text.into(),
            position,
        }
    }

    pub fn eof(position: Position) -> Self {
        Token::new(TokenKind::Eof, "", position)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// True if this token is a symbol spelled exactly `lexeme`.
    pub fn is_symbol(&self, lexeme: &str) -> bool {
        self.kind == TokenKind::Symbol && self.text == lexeme
    }

    /// Human readable rendering used in error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::String => format!("{:?}", self.text),
            _ => format!("'{}'", self.text),
        }
    }
}
