//! AST definitions for arithmetic expressions
//!
//! The tree is a closed sum type over exactly three node shapes; the
//! evaluator matches it exhaustively, so a new variant cannot be added
//! without the compiler flagging every consumer. Each node exclusively owns
//! its children: the tree is acyclic, built bottom-up by the parser, walked
//! top-down by the evaluator, and discarded after a single `calculate` call.
//!
//! Canonical Rendering
//!
//! `Display` renders a fully parenthesized canonical form ("(2 + 3) * 4"
//! parses to a tree that renders as "((2 + 3) * 4)"). The rendering is
//! loss-free: re-parsing it reproduces a structurally equal tree. It exists
//! for debugging and for the CLI's ast output formats.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operator kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOperator {
    /// The canonical source character for this operator
    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Sub => '-',
            BinaryOperator::Mul => '*',
            BinaryOperator::Div => '/',
            BinaryOperator::Mod => '%',
        }
    }
}

/// A parsed expression tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    /// Integer literal. The parser only ever produces non-negative values
    /// here; a leading sign becomes a [Expr::UnaryMinus] node.
    Number(i64),
    /// Arithmetic negation of the operand
    UnaryMinus(Box<Expr>),
    /// Binary operation; `left` is the earlier operand in source order
    BinaryOp {
        left: Box<Expr>,
        op: BinaryOperator,
        right: Box<Expr>,
    },
}

impl Expr {
    /// Convenience constructor for binary nodes
    pub fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
        Expr::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Convenience constructor for negation nodes
    pub fn neg(operand: Expr) -> Expr {
        Expr::UnaryMinus(Box::new(operand))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{}", value),
            Expr::UnaryMinus(operand) => write!(f, "(-{})", operand),
            Expr::BinaryOp { left, op, right } => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
        }
    }
}
