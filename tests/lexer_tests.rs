// tests/lexer_tests.rs

use tplexpr::ast::{Position, Token, TokenKind};
use tplexpr::lexer::{LexError, Lexer};

fn kinds_and_texts(input: &str) -> Vec<(TokenKind, String)> {
    Lexer::new(input)
        .tokenize()
        .unwrap()
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}

// ============================================================================
// Symbols
// ============================================================================

#[test]
fn test_single_char_symbols() {
    let symbols = [
        "+", "-", "*", "/", "%", "!", "~", "<", ">", "(", ")", "[", "]", ",", "?", ":", "|",
    ];

    for input in symbols {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Symbol, "Failed for input: {}", input);
        assert_eq!(token.text, input, "Failed for input: {}", input);
        assert!(lexer.next_token().unwrap().is_eof());
    }
}

#[test]
fn test_multi_char_symbols() {
    for input in ["===", "!==", "==", "!=", ">=", "<=", "&&", "||"] {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap();
        assert_eq!(token.text, input, "Failed for input: {}", input);
        assert!(lexer.next_token().unwrap().is_eof());
    }
}

#[test]
fn test_longest_symbol_wins() {
    let texts: Vec<String> = kinds_and_texts("a===b!==c").into_iter().map(|(_, t)| t).collect();
    assert_eq!(texts, vec!["a", "===", "b", "!==", "c", ""]);

    let texts: Vec<String> = kinds_and_texts("< <= <").into_iter().map(|(_, t)| t).collect();
    assert_eq!(texts, vec!["<", "<=", "<", ""]);
}

#[test]
fn test_bare_equals_is_invalid() {
    let mut lexer = Lexer::new("a = b");
    lexer.next_token().unwrap();
    let result = lexer.next_token();
    assert!(matches!(
        result,
        Err(LexError::UnexpectedCharacter { ch: '=', .. })
    ));
}

#[test]
fn test_bare_ampersand_is_invalid() {
    let result = Lexer::new("a & b").tokenize();
    assert!(matches!(
        result,
        Err(LexError::UnexpectedCharacter { ch: '&', .. })
    ));
}

// ============================================================================
// Identifiers and keywords
// ============================================================================

#[test]
fn test_keywords_are_identifier_tokens() {
    for word in ["and", "or", "true", "false", "null"] {
        let tokens = kinds_and_texts(word);
        assert_eq!(tokens[0], (TokenKind::Identifier, word.to_string()));
    }
}

#[test]
fn test_identifiers() {
    for input in ["user", "item_count", "_private", "a1", "nullable"] {
        let tokens = kinds_and_texts(input);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], (TokenKind::Identifier, input.to_string()));
    }
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_numbers() {
    for input in ["0", "42", "3.14", "1e3", "2.5E-2"] {
        let tokens = kinds_and_texts(input);
        assert_eq!(tokens[0], (TokenKind::Number, input.to_string()), "Failed for input: {}", input);
        assert_eq!(tokens[1].0, TokenKind::Eof);
    }
}

#[test]
fn test_number_followed_by_dot_name() {
    // `1.` is not a decimal; the dot is not a symbol either
    let result = Lexer::new("1.foo").tokenize();
    assert!(matches!(
        result,
        Err(LexError::UnexpectedCharacter { ch: '.', .. })
    ));
}

#[test]
fn test_numbers_past_decimal_precision() {
    for input in ["1e-30", "9e-29", "1.5e-28", "1e29", "99999999999999999999999999999999999"] {
        let tokens = kinds_and_texts(input);
        assert_eq!(tokens[0], (TokenKind::Number, input.to_string()), "Failed for input: {}", input);
    }
}

#[test]
fn test_number_too_large() {
    let result = Lexer::new("1e400").tokenize();
    match result {
        Err(LexError::InvalidNumber { text, position }) => {
            assert_eq!(text, "1e400");
            assert_eq!(position, Position::new(1, 1, 0));
        }
        other => panic!("Expected InvalidNumber, got {:?}", other),
    }
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_strings() {
    assert_eq!(
        kinds_and_texts(r#""hello world""#)[0],
        (TokenKind::String, "hello world".to_string())
    );
    assert_eq!(
        kinds_and_texts("'single'")[0],
        (TokenKind::String, "single".to_string())
    );
}

#[test]
fn test_string_escapes() {
    let tokens = kinds_and_texts(r#""a\n\t\"b\\""#);
    assert_eq!(tokens[0].1, "a\n\t\"b\\");

    let tokens = kinds_and_texts(r"'it\'s'");
    assert_eq!(tokens[0].1, "it's");
}

#[test]
fn test_invalid_escape() {
    let result = Lexer::new(r#""\q""#).tokenize();
    assert!(matches!(
        result,
        Err(LexError::InvalidEscape { ch: 'q', .. })
    ));
}

#[test]
fn test_unterminated_string() {
    let result = Lexer::new(r#"x + "abc"#).tokenize();
    match result {
        Err(LexError::UnterminatedString { position }) => {
            assert_eq!(position, Position::new(1, 5, 4));
        }
        other => panic!("Expected UnterminatedString, got {:?}", other),
    }
}

// ============================================================================
// Positions
// ============================================================================

#[test]
fn test_positions() {
    let tokens = Lexer::new("a +\n  bc").tokenize().unwrap();
    assert_eq!(tokens[0].position, Position::new(1, 1, 0));
    assert_eq!(tokens[1].position, Position::new(1, 3, 2));
    assert_eq!(tokens[2].position, Position::new(2, 3, 6));
    assert_eq!(tokens[3], Token::eof(Position::new(2, 5, 8)));
}

#[test]
fn test_empty_input() {
    let tokens = Lexer::new("   ").tokenize().unwrap();
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_eof());
    assert_eq!(tokens[0].text, "");
}

#[test]
fn test_filter_expression() {
    let tokens = kinds_and_texts("name | default('x')");
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Identifier, "name".to_string()),
            (TokenKind::Symbol, "|".to_string()),
            (TokenKind::Identifier, "default".to_string()),
            (TokenKind::Symbol, "(".to_string()),
            (TokenKind::String, "x".to_string()),
            (TokenKind::Symbol, ")".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
}
