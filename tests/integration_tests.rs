// tests/integration_tests.rs

use serde_json::json;
use tplexpr::cli::{
    CheckOptions, CheckResult, CliError, DocCategory, OutputFormat, execute_check,
    execute_tokens, get_doc_category,
};
use tplexpr::output::{expr_to_json, to_json, to_json_pretty};
use tplexpr::parse_expression;

fn check(expression: &str, format: OutputFormat) -> Result<CheckResult, CliError> {
    execute_check(&CheckOptions {
        expression: expression.to_string(),
        format,
        ..Default::default()
    })
}

// ============================================================================
// JSON output
// ============================================================================

#[test]
fn test_json_binary() {
    let expr = parse_expression("a - 1.5").unwrap();
    assert_eq!(
        expr_to_json(&expr),
        json!({
            "type": "BinaryOperation",
            "operator": "-",
            "left": { "type": "Identifier", "name": "a" },
            "right": { "type": "Literal", "value": 1.5 },
        })
    );
}

#[test]
fn test_json_whole_number_is_integer() {
    let expr = parse_expression("2.0").unwrap();
    assert_eq!(expr_to_json(&expr), json!({ "type": "Literal", "value": 2 }));
}

#[test]
fn test_json_number_past_decimal_range() {
    let expr = parse_expression("1e29").unwrap();
    assert_eq!(expr_to_json(&expr), json!({ "type": "Literal", "value": 1e29 }));
}

#[test]
fn test_json_function_call() {
    let expr = parse_expression("f()").unwrap();
    assert_eq!(
        expr_to_json(&expr),
        json!({
            "type": "FunctionCall",
            "callee": { "type": "Literal", "value": "f" },
            "arguments": [],
        })
    );
}

#[test]
fn test_json_filter_and_ternary() {
    let expr = parse_expression("ok ? name | upper : null").unwrap();
    assert_eq!(
        expr_to_json(&expr),
        json!({
            "type": "TernaryOperation",
            "condition": { "type": "Identifier", "name": "ok" },
            "then": {
                "type": "FilterCall",
                "name": "upper",
                "arguments": [{ "type": "Identifier", "name": "name" }],
            },
            "else": { "type": "Literal", "value": null },
        })
    );
}

#[test]
fn test_json_unary_and_array() {
    let expr = parse_expression("[!a, true]").unwrap();
    assert_eq!(
        expr_to_json(&expr),
        json!({
            "type": "ArrayContainer",
            "elements": [
                {
                    "type": "UnaryOperation",
                    "operator": "!",
                    "operand": { "type": "Identifier", "name": "a" },
                },
                { "type": "Literal", "value": true },
            ],
        })
    );
}

#[test]
fn test_pretty_json_is_indented() {
    let expr = parse_expression("x").unwrap();
    assert_eq!(
        to_json_pretty(&expr),
        "{\n  \"name\": \"x\",\n  \"type\": \"Identifier\"\n}"
    );
    assert_eq!(to_json(&expr), r#"{"name":"x","type":"Identifier"}"#);
}

// ============================================================================
// CLI
// ============================================================================

#[test]
fn test_check_infix() {
    let result = check("a + b * c", OutputFormat::Infix).unwrap();
    assert_eq!(result, CheckResult::Success("(a + (b * c))".to_string()));
}

#[test]
fn test_check_json() {
    let result = check("x | upper", OutputFormat::Json).unwrap();
    assert_eq!(
        result,
        CheckResult::Success(
            r#"{"arguments":[{"name":"x","type":"Identifier"}],"name":"upper","type":"FilterCall"}"#
                .to_string()
        )
    );
}

#[test]
fn test_check_trims_input() {
    let result = check("  a\n", OutputFormat::Infix).unwrap();
    assert_eq!(result, CheckResult::Success("a".to_string()));
}

#[test]
fn test_check_syntax_only() {
    let result = execute_check(&CheckOptions {
        expression: "f(1)".to_string(),
        syntax_only: true,
        ..Default::default()
    })
    .unwrap();
    assert_eq!(result, CheckResult::SyntaxValid);
}

#[test]
fn test_check_comma() {
    let result = execute_check(&CheckOptions {
        expression: "a, b ? c : d".to_string(),
        comma: true,
        ..Default::default()
    })
    .unwrap();
    assert_eq!(result, CheckResult::Success("a, (b ? c : d)".to_string()));
}

#[test]
fn test_check_comma_rejected_without_flag() {
    let err = check("a, b", OutputFormat::Infix).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Syntax error: Unexpected token ',' at line 1, column 2"
    );
}

#[test]
fn test_check_reports_syntax_errors() {
    let err = check(")", OutputFormat::Infix).unwrap_err();
    assert!(matches!(err, CliError::Parse(_)));
    assert!(err.to_string().contains("')'"));
}

#[test]
fn test_tokens_listing() {
    let listing = execute_tokens("f(1)").unwrap();
    assert_eq!(
        listing,
        "1:1\tidentifier\t\"f\"\n1:2\tsymbol\t\"(\"\n1:3\tnumber\t\"1\"\n1:4\tsymbol\t\")\"\n1:5\teof\t\"\""
    );
}

#[test]
fn test_tokens_lex_error() {
    let err = execute_tokens("a = b").unwrap_err();
    assert!(err.to_string().contains("Unexpected character '='"));
}

#[test]
fn test_docs() {
    assert_eq!(DocCategory::from_str("Filters"), Some(DocCategory::Calls));
    assert!(get_doc_category("precedence").unwrap().contains("left-associative"));
    assert!(matches!(
        get_doc_category("nope"),
        Err(CliError::UnknownCategory(name)) if name == "nope"
    ));
}
