//! Error types for the calculator pipeline
//!
//! All failure modes share one enum so front ends can catch "any calculator
//! failure" uniformly while still branching on kind for message selection or
//! exit codes. Every error is detected at its point of origin and returned
//! immediately; the core never coerces a failure into a default value.

use std::fmt;

/// Errors that can occur while tokenizing, parsing, or evaluating an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Structurally invalid expression: empty input, missing operand,
    /// unmatched parenthesis, or trailing tokens after a complete expression
    MalformedExpression(String),
    /// A character outside the expression alphabet (digits, `+ - * / % ( )`,
    /// whitespace), including letters and decimal points
    InvalidOperand(String),
    /// Right operand of `/` evaluated to zero
    DivisionByZero,
    /// Right operand of `%` evaluated to zero
    ModuloByZero,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::MalformedExpression(msg) => {
                write!(f, "Malformed expression: {}", msg)
            }
            CalcError::InvalidOperand(msg) => {
                write!(f, "Invalid operand: {}", msg)
            }
            CalcError::DivisionByZero => {
                write!(f, "Division by zero is not allowed")
            }
            CalcError::ModuloByZero => {
                write!(f, "Modulo by zero is not allowed")
            }
        }
    }
}

impl std::error::Error for CalcError {}

/// Type alias for calculator results
pub type CalcResult<T> = Result<T, CalcError>;
