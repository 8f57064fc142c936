//! Token definitions for arithmetic expressions
//!
//! Two layers, mirroring the lexing pipeline: [Lexeme] is the raw logos-derived
//! lexer output, and [Token] is the domain token the parser consumes. The
//! mapping between them lives in [lexing](crate::calc::lexing), which also
//! appends the [Token::EndOfInput] marker the parser relies on for one-token
//! look-ahead without bounds checks.

use logos::Logos;
use serde::{Deserialize, Serialize};

/// Raw lexemes produced by the logos lexer.
///
/// Whitespace (space, tab, newline) is skipped between lexemes and carries no
/// semantic weight. Any character matching no pattern below surfaces as a
/// logos error span; the lexing pipeline maps that into the error taxonomy.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Lexeme {
    /// Unsigned base-10 integer literal, digits consumed greedily.
    /// Sign is never part of a lexeme; negation is a parser concept.
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Number(i64),

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
}

/// A typed token in the parser's input sequence.
///
/// Tokens are immutable once produced: created in one batch by the tokenizer
/// and consumed read-only by the parser through a positional cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    Number(i64),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    OpenParen,
    CloseParen,
    /// Appended exactly once after the last real token, letting the parser
    /// peek past the end without a separate bounds check.
    EndOfInput,
}

impl Token {
    /// Check if this token is an additive operator (`+` or `-`)
    pub fn is_additive(&self) -> bool {
        matches!(self, Token::Plus | Token::Minus)
    }

    /// Check if this token is a multiplicative operator (`*`, `/`, or `%`)
    pub fn is_multiplicative(&self) -> bool {
        matches!(self, Token::Star | Token::Slash | Token::Percent)
    }

    /// Human-readable description used in parser error messages
    pub fn describe(&self) -> String {
        match self {
            Token::Number(n) => format!("number '{}'", n),
            Token::Plus => "'+'".to_string(),
            Token::Minus => "'-'".to_string(),
            Token::Star => "'*'".to_string(),
            Token::Slash => "'/'".to_string(),
            Token::Percent => "'%'".to_string(),
            Token::OpenParen => "'('".to_string(),
            Token::CloseParen => "')'".to_string(),
            Token::EndOfInput => "end of expression".to_string(),
        }
    }
}
