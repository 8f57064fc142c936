//! Lexer
//!
//! Orchestrates the tokenization pipeline for expression source text:
//!
//!     1. Core lexing with the logos-derived [Lexeme] lexer. Whitespace is
//!        skipped by logos directly; every other character either matches a
//!        lexeme pattern or surfaces as an error span.
//!     2. Mapping lexemes into the domain [Token] sequence, converting error
//!        spans into the error taxonomy with the offending character and its
//!        byte position.
//!     3. Appending the [Token::EndOfInput] marker after the last real token.
//!
//! Tokenization is a pure function of its input and all-or-nothing: it either
//! fully consumes the source or fails, never returning a partial sequence.

use logos::Logos;

use crate::calc::error::{CalcError, CalcResult};
use crate::calc::token::{Lexeme, Token};

/// Tokenize expression source text into the parser's input sequence.
///
/// Fails with `MalformedExpression` on empty or whitespace-only input, and
/// with `InvalidOperand` at the first character outside the expression
/// alphabet. On success the returned sequence always ends with exactly one
/// `EndOfInput` token.
pub fn tokenize(source: &str) -> CalcResult<Vec<Token>> {
    if source.trim().is_empty() {
        return Err(CalcError::MalformedExpression(
            "empty expression".to_string(),
        ));
    }

    let mut tokens = Vec::new();
    for (lexeme, span) in Lexeme::lexer(source).spanned() {
        match lexeme {
            Ok(lexeme) => tokens.push(Token::from(lexeme)),
            Err(()) => return Err(lex_error(source, span)),
        }
    }
    tokens.push(Token::EndOfInput);
    Ok(tokens)
}

impl From<Lexeme> for Token {
    fn from(lexeme: Lexeme) -> Token {
        match lexeme {
            Lexeme::Number(value) => Token::Number(value),
            Lexeme::Plus => Token::Plus,
            Lexeme::Minus => Token::Minus,
            Lexeme::Star => Token::Star,
            Lexeme::Slash => Token::Slash,
            Lexeme::Percent => Token::Percent,
            Lexeme::OpenParen => Token::OpenParen,
            Lexeme::CloseParen => Token::CloseParen,
        }
    }
}

/// Map a logos error span to the error taxonomy.
///
/// A span starting with a digit means the literal itself failed (it overflowed
/// the native integer type); anything else is a character outside the
/// expression alphabet.
fn lex_error(source: &str, span: std::ops::Range<usize>) -> CalcError {
    let fragment = &source[span.clone()];
    match fragment.chars().next() {
        Some(c) if c.is_ascii_digit() => CalcError::MalformedExpression(format!(
            "integer literal '{}' is out of range",
            fragment
        )),
        Some(c) => CalcError::InvalidOperand(format!(
            "invalid character: '{}' at position {}",
            c, span.start
        )),
        // Logos error spans are never empty; keep a sane message regardless
        None => CalcError::InvalidOperand("invalid character".to_string()),
    }
}
