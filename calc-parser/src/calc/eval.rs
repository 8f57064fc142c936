//! Tree-walking evaluator for arithmetic expressions
//!
//! Evaluation is a pure, terminating recursive walk; recursion depth equals
//! the tree's height. Operands evaluate left before right, which is observable
//! only through error precedence: when both sides could fail, the left failure
//! is the one reported.
//!
//! Division Semantics
//!
//! `/` and `%` deliberately use different rounding conventions and are
//! implemented independently of each other:
//!
//!     - `/` truncates toward zero (the native machine convention):
//!       -7 / 2 = -3, 7 / -2 = -3, -7 / -2 = 3
//!     - `%` is floored, its sign following the divisor:
//!       -10 % 3 = 2, 10 % -3 = -2, -10 % -3 = -1
//!
//! All arithmetic wraps on i64, so no expression input can panic; overflow is
//! not part of the error taxonomy.

use crate::calc::ast::{BinaryOperator, Expr};
use crate::calc::error::{CalcError, CalcResult};

/// Evaluate an expression tree to an integer.
///
/// Fails with `DivisionByZero` or `ModuloByZero` when the right operand of the
/// corresponding operator evaluates to zero.
pub fn evaluate(expr: &Expr) -> CalcResult<i64> {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::UnaryMinus(operand) => Ok(evaluate(operand)?.wrapping_neg()),
        Expr::BinaryOp { left, op, right } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            apply(*op, left, right)
        }
    }
}

fn apply(op: BinaryOperator, left: i64, right: i64) -> CalcResult<i64> {
    match op {
        BinaryOperator::Add => Ok(left.wrapping_add(right)),
        BinaryOperator::Sub => Ok(left.wrapping_sub(right)),
        BinaryOperator::Mul => Ok(left.wrapping_mul(right)),
        BinaryOperator::Div => {
            if right == 0 {
                return Err(CalcError::DivisionByZero);
            }
            // Truncation toward zero is the native i64 division
            Ok(left.wrapping_div(right))
        }
        BinaryOperator::Mod => {
            if right == 0 {
                return Err(CalcError::ModuloByZero);
            }
            Ok(floored_mod(left, right))
        }
    }
}

/// Floored modulo: the result's sign always matches the divisor's.
///
/// The native `%` truncates, so its remainder follows the dividend; shifting a
/// nonzero opposite-signed remainder by one divisor flips it into the floored
/// convention. Wrapping operations keep i64::MIN inputs total.
fn floored_mod(dividend: i64, divisor: i64) -> i64 {
    dividend
        .wrapping_rem(divisor)
        .wrapping_add(divisor)
        .wrapping_rem(divisor)
}
