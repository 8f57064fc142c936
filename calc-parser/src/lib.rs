//! # calc-parser
//!
//! A parser and evaluator for integer arithmetic expressions.
//!
//! Pipeline Layout
//!
//! The library is a strict three-stage pipeline, each stage consuming only the
//! output of the one below:
//!
//! src/calc
//!   ├── lexing     Tokenization (logos lexer + domain token mapping)
//!   ├── parsing    Recursive-descent parser producing the AST
//!   └── eval       Tree-walking evaluator
//!
//! The [calculate](calc::calculate) function composes the three stages and is
//! the only entry point front ends (CLI, REPL, TUI) consume. Every stage is a
//! pure function of its input: no shared state, no I/O, safe to call from any
//! number of threads concurrently.

pub mod calc;

pub use crate::calc::error::{CalcError, CalcResult};
pub use crate::calc::calculate;
