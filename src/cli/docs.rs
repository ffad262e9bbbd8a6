//! Documentation content for the tplexpr CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Operators,
    Calls,
    Precedence,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" | "literals" => Some(Self::Syntax),
            "operators" | "ops" => Some(Self::Operators),
            "calls" | "functions" | "filters" => Some(Self::Calls),
            "precedence" | "prec" => Some(Self::Precedence),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"TPLEXPR DOCUMENTATION

tplexpr parses the expressions written inside {{ ... }} slots of a template
into a syntax tree. It does not evaluate them.

DOCUMENTATION CATEGORIES

  syntax        Literals, names, arrays and grouping
  operators     Arithmetic, comparison, logical and prefix operators
  calls         Function calls and filter pipes
  precedence    Binding strength and associativity

QUICK REFERENCE

  42  "text"  true  null   Literals
  user                     Name lookup
  [1, 2, 3]                Array
  a ? b : c                Conditional
  range(1, 5)              Function call
  name | upper             Filter

Run 'tplexpr doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_str(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Calls) => Ok(CALLS_DOC),
        Some(DocCategory::Precedence) => Ok(PRECEDENCE_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Literals, Names and Grouping

NUMBERS
  42   3.14   1e3
    Stored as exact decimals; values past 28 decimal places or
    beyond the decimal range (1e-30, 1e29) are kept as floats.

STRINGS
  "double"   'single'
    Escapes: \n \t \r \" \' \\

KEYWORDS
  true   false   null
    Always literals, never names.

NAMES
  user   item_count   _private
    Letters, digits and underscores, not starting with a digit.

ARRAYS
  []   [1, 2, 3]   [a, b,]
    A trailing comma is accepted.

GROUPING
  (a + b) * c
    Parentheses turn any expression into an operand, including a
    conditional that is then called: (cond ? f : g)(x)
"#;

const OPERATORS_DOC: &str = r#"OPERATORS

ARITHMETIC
  +  -  *  /  %

COMPARISON
  ==  !=  ===  !==  <  >  <=  >=
    All on one level and left-associative: a < b < c is (a < b) < c.

LOGICAL
  ||  or      either side
  &&  and     both sides

PREFIX
  -x   +x   ~x   !x
    Prefix operators nest: !!x is !(!x).

CONDITIONAL
  cond ? then : else
    Conditionals nest without parentheses in either branch:
    a ? b : c ? d : e  is  a ? b : (c ? d : e)
"#;

const CALLS_DOC: &str = r#"CALLS - Functions and Filters

FUNCTION CALLS
  name(arg, ...)
    A call on a bare name refers to the function registered under that
    name; the tree stores the callee as the string "name".

  (expr)(arg, ...)
    Any other callee is kept as an expression.

  f()()
    Calls chain.

FILTERS
  value | name
  value | name(arg, ...)
    The piped value becomes the first argument of the filter.

  items | sort | join(", ")
    Filters chain left to right.
"#;

const PRECEDENCE_DOC: &str = r#"PRECEDENCE - Loosest to Tightest

  1  calls f(x), filters x | f
  2  conditional  ? :
  3  ||  or
  4  &&  and
  5  ==  !=  ===  !==  <  >  <=  >=
  6  +  -
  7  *  /  %
  8  prefix  -  +  ~  !
  9  literals, names, ( ), [ ]

Binary operators are left-associative: a - b - c is (a - b) - c.
"#;
