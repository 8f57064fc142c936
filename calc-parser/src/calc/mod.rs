//! Main module for the calc library functionality

pub mod ast;
pub mod error;
pub mod eval;
pub mod lexing;
pub mod parsing;
pub mod token;

use self::error::CalcResult;

/// Evaluate an arithmetic expression from source text.
///
/// Composes the full pipeline: tokenize, parse, evaluate. This is the single
/// entry point front ends call; every failure mode surfaces as a
/// [CalcError](error::CalcError) kind, never a panic.
pub fn calculate(expression: &str) -> CalcResult<i64> {
    let tokens = lexing::tokenize(expression)?;
    let expr = parsing::parse(tokens)?;
    eval::evaluate(&expr)
}
