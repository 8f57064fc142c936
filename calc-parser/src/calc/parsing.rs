//! Recursive-descent parser for arithmetic expressions
//!
//! Grammar (lowest to highest precedence, left-associative at every level):
//!
//!     expression := term (("+" | "-") term)*
//!     term       := factor (("*" | "/" | "%") factor)*
//!     factor     := "-" factor | "+" factor | NUMBER | "(" expression ")"
//!
//! The parser owns the token sequence and an explicit position index; there is
//! no hidden state and the sequence is never mutated. Left associativity falls
//! out of the iterative loop shape in `expression` and `term`: each successive
//! same-precedence operator attaches its right-hand operand to a left-growing
//! tree, so "10 - 5 - 2" parses as "(10 - 5) - 2".
//!
//! Operators are only ever binary once a left operand has been parsed; a `-`
//! or `+` seen where an operand is expected is a unary prefix instead. That
//! positional rule is the entire unary/binary disambiguation; the tokenizer
//! plays no part in it.

use crate::calc::ast::{BinaryOperator, Expr};
use crate::calc::error::{CalcError, CalcResult};
use crate::calc::token::Token;

/// Parse a token sequence into an expression tree.
///
/// Fails with `MalformedExpression` when the sequence holds no expression at
/// all, an operand is missing, a parenthesis is unmatched, or tokens remain
/// after a complete expression.
pub fn parse(tokens: Vec<Token>) -> CalcResult<Expr> {
    let mut parser = Parser::new(tokens);
    let expr = parser.expression()?;
    match parser.peek() {
        Token::EndOfInput => Ok(expr),
        trailing => Err(CalcError::MalformedExpression(format!(
            "unexpected {} after a complete expression",
            trailing.describe()
        ))),
    }
}

/// Recursive-descent parser: an immutable token sequence plus a cursor
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Parser {
        Parser { tokens, pos: 0 }
    }

    /// Look at the current token without consuming it.
    ///
    /// Reading past the end yields `EndOfInput`, so a sequence that is missing
    /// its marker (or is empty) still parses without a bounds check.
    fn peek(&self) -> Token {
        self.tokens.get(self.pos).copied().unwrap_or(Token::EndOfInput)
    }

    /// Consume and return the current token
    fn advance(&mut self) -> Token {
        let token = self.peek();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// expression := term (("+" | "-") term)*
    fn expression(&mut self) -> CalcResult<Expr> {
        let mut left = self.term()?;

        while self.peek().is_additive() {
            let op = match self.advance() {
                Token::Plus => BinaryOperator::Add,
                _ => BinaryOperator::Sub,
            };
            let right = self.term()?;
            left = Expr::binary(left, op, right);
        }

        Ok(left)
    }

    /// term := factor (("*" | "/" | "%") factor)*
    fn term(&mut self) -> CalcResult<Expr> {
        let mut left = self.factor()?;

        while self.peek().is_multiplicative() {
            let op = match self.advance() {
                Token::Star => BinaryOperator::Mul,
                Token::Slash => BinaryOperator::Div,
                _ => BinaryOperator::Mod,
            };
            let right = self.factor()?;
            left = Expr::binary(left, op, right);
        }

        Ok(left)
    }

    /// factor := "-" factor | "+" factor | NUMBER | "(" expression ")"
    fn factor(&mut self) -> CalcResult<Expr> {
        match self.peek() {
            Token::Minus => {
                self.advance();
                Ok(Expr::neg(self.factor()?))
            }
            // Unary plus parses and is discarded; it never denotes a binary
            // operator here because no left operand has been parsed yet
            Token::Plus => {
                self.advance();
                self.factor()
            }
            Token::Number(value) => {
                self.advance();
                Ok(Expr::Number(value))
            }
            Token::OpenParen => {
                self.advance();
                let inner = self.expression()?;
                match self.advance() {
                    Token::CloseParen => Ok(inner),
                    _ => Err(CalcError::MalformedExpression(
                        "missing closing parenthesis".to_string(),
                    )),
                }
            }
            unexpected => Err(CalcError::MalformedExpression(format!(
                "expected a number, unary sign, or '(', found {}",
                unexpected.describe()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::ast::BinaryOperator::*;
    use crate::calc::lexing::tokenize;

    fn parse_source(source: &str) -> CalcResult<Expr> {
        parse(tokenize(source).expect("tokenize failed"))
    }

    #[test]
    fn test_single_number() {
        assert_eq!(parse_source("42").unwrap(), Expr::Number(42));
    }

    #[test]
    fn test_precedence_shape() {
        // "2 + 3 * 4" must attach the product under the sum
        assert_eq!(
            parse_source("2 + 3 * 4").unwrap(),
            Expr::binary(
                Expr::Number(2),
                Add,
                Expr::binary(Expr::Number(3), Mul, Expr::Number(4)),
            )
        );
    }

    #[test]
    fn test_left_associative_shape() {
        // "10 - 5 - 2" is (10 - 5) - 2, never 10 - (5 - 2)
        assert_eq!(
            parse_source("10 - 5 - 2").unwrap(),
            Expr::binary(
                Expr::binary(Expr::Number(10), Sub, Expr::Number(5)),
                Sub,
                Expr::Number(2),
            )
        );
    }

    #[test]
    fn test_multiplicative_tier_shared() {
        // All of * / % share one tier: "10 % 3 * 2" is (10 % 3) * 2
        assert_eq!(
            parse_source("10 % 3 * 2").unwrap(),
            Expr::binary(
                Expr::binary(Expr::Number(10), Mod, Expr::Number(3)),
                Mul,
                Expr::Number(2),
            )
        );
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(
            parse_source("(2 + 3) * 4").unwrap(),
            Expr::binary(
                Expr::binary(Expr::Number(2), Add, Expr::Number(3)),
                Mul,
                Expr::Number(4),
            )
        );
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(parse_source("-5").unwrap(), Expr::neg(Expr::Number(5)));
        // Unary minus binds tighter than binary operators
        assert_eq!(
            parse_source("-5 + 3").unwrap(),
            Expr::binary(Expr::neg(Expr::Number(5)), Add, Expr::Number(3)),
        );
    }

    #[test]
    fn test_double_negation() {
        assert_eq!(
            parse_source("--5").unwrap(),
            Expr::neg(Expr::neg(Expr::Number(5)))
        );
    }

    #[test]
    fn test_unary_plus_is_noop() {
        assert_eq!(parse_source("+5").unwrap(), Expr::Number(5));
        assert_eq!(
            parse_source("2 * +3").unwrap(),
            Expr::binary(Expr::Number(2), Mul, Expr::Number(3)),
        );
    }

    #[test]
    fn test_missing_right_operand() {
        assert!(matches!(
            parse_source("2 +"),
            Err(CalcError::MalformedExpression(_))
        ));
    }

    #[test]
    fn test_operator_where_operand_expected() {
        assert!(matches!(
            parse_source("2 + * 3"),
            Err(CalcError::MalformedExpression(_))
        ));
    }

    #[test]
    fn test_unmatched_open_paren() {
        assert!(matches!(
            parse_source("(2 + 3"),
            Err(CalcError::MalformedExpression(_))
        ));
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        // A complete expression followed by a stray token is malformed
        assert!(matches!(
            parse_source("2 3"),
            Err(CalcError::MalformedExpression(_))
        ));
        assert!(matches!(
            parse_source("(2 + 3) 4"),
            Err(CalcError::MalformedExpression(_))
        ));
        assert!(matches!(
            parse_source("1 + 2 )"),
            Err(CalcError::MalformedExpression(_))
        ));
    }

    #[test]
    fn test_empty_token_sequence() {
        assert!(matches!(
            parse(vec![]),
            Err(CalcError::MalformedExpression(_))
        ));
        assert!(matches!(
            parse(vec![Token::EndOfInput]),
            Err(CalcError::MalformedExpression(_))
        ));
    }

    #[test]
    fn test_bare_close_paren() {
        assert!(matches!(
            parse_source(")"),
            Err(CalcError::MalformedExpression(_))
        ));
    }
}
