//! Command-line interface for calc
//! This binary evaluates a single expression passed as an argument, or runs an
//! interactive read-eval-print loop.
//!
//! Usage:
//!   calc `<expression>` [--format `<format>`]   - Evaluate one expression
//!   calc --interactive                          - Start the interactive loop

mod repl;

use calc_parser::calc::ast::Expr;
use calc_parser::calc::{lexing, parsing};
use calc_parser::CalcError;
use clap::{Arg, ArgAction, Command};

fn main() {
    let mut command = Command::new("calc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Evaluate integer arithmetic expressions with BODMAS precedence")
        .arg(
            Arg::new("expression")
                .help("The expression to evaluate, e.g. \"2 + 3 * 4\"")
                // Expressions may begin with a unary minus
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: result, tokens-json, ast-json, ast-text")
                .default_value("result"),
        )
        .arg(
            Arg::new("interactive")
                .long("interactive")
                .short('i')
                .help("Start an interactive read-eval-print loop")
                .action(ArgAction::SetTrue),
        );
    let matches = command.get_matches_mut();

    if matches.get_flag("interactive") {
        if let Err(e) = repl::run() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    // A missing expression is a usage error; all failure paths exit status 1
    let Some(expression) = matches.get_one::<String>("expression") else {
        eprintln!("Error: missing expression argument");
        eprintln!("{}", command.render_usage());
        std::process::exit(1);
    };
    let format = matches.get_one::<String>("format").unwrap();
    handle_evaluate_command(expression, format);
}

/// Evaluate one expression and print it in the requested format
fn handle_evaluate_command(expression: &str, format: &str) {
    match format {
        "result" => {
            let result = calc_parser::calculate(expression).unwrap_or_else(exit_with_error);
            println!("{}", result);
        }
        "tokens-json" => {
            let tokens = lexing::tokenize(expression).unwrap_or_else(exit_with_error);
            let json = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
                eprintln!("Error formatting tokens: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        "ast-json" => {
            let expr = parse_or_exit(expression);
            let json = serde_json::to_string_pretty(&expr).unwrap_or_else(|e| {
                eprintln!("Error formatting AST: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        "ast-text" => {
            let expr = parse_or_exit(expression);
            println!("{}", expr);
        }
        fmt => {
            eprintln!("Format '{}' not supported", fmt);
            eprintln!("Available formats: result, tokens-json, ast-json, ast-text");
            std::process::exit(1);
        }
    }
}

/// Parse the expression without evaluating it, for the ast output formats
fn parse_or_exit(expression: &str) -> Expr {
    lexing::tokenize(expression)
        .and_then(parsing::parse)
        .unwrap_or_else(exit_with_error)
}

/// Report a calculator failure on stderr and exit with status 1
fn exit_with_error<T>(e: CalcError) -> T {
    eprintln!("Error: {}", e);
    std::process::exit(1);
}
