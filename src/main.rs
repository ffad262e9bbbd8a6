use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, Read};
use tplexpr::cli::{self, CheckOptions, CheckResult, CliError, OutputFormat};

#[derive(ClapParser)]
#[command(name = "tplexpr")]
#[command(about = "tplexpr - Parse template expressions into syntax trees")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an expression and print its tree
    Check {
        /// The expression to parse (reads from stdin if not provided)
        expression: Option<String>,

        /// Print the tree as JSON
        #[arg(short, long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Parse a comma-separated list of expressions
        #[arg(short, long)]
        comma: bool,

        /// Only validate syntax, don't print the tree
        #[arg(long)]
        syntax_only: bool,
    },

    /// List the tokens of an expression
    Tokens {
        /// The expression to tokenize (reads from stdin if not provided)
        expression: Option<String>,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'tplexpr docs' to list categories)
        category: String,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            expression,
            json,
            pretty,
            comma,
            syntax_only,
        } => run_check(expression, json, pretty, comma, syntax_only),
        Commands::Tokens { expression } => run_tokens(expression),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => match cli::get_doc_category(&category) {
            Ok(content) => {
                print!("{}", content);
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_expression(expression: Option<String>) -> Result<String, CliError> {
    match expression {
        Some(s) => Ok(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            Ok(buffer)
        }
        None => Err(CliError::NoInput),
    }
}

fn run_check(
    expression: Option<String>,
    json: bool,
    pretty: bool,
    comma: bool,
    syntax_only: bool,
) -> Result<(), CliError> {
    let format = match (json, pretty) {
        (false, _) => OutputFormat::Infix,
        (true, false) => OutputFormat::Json,
        (true, true) => OutputFormat::JsonPretty,
    };

    let options = CheckOptions {
        expression: read_expression(expression)?,
        format,
        comma,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Success(output) => println!("{}", output),
    }
    Ok(())
}

fn run_tokens(expression: Option<String>) -> Result<(), CliError> {
    let expression = read_expression(expression)?;
    println!("{}", cli::execute_tokens(&expression)?);
    Ok(())
}
