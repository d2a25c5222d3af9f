//! Tokenizer for propositional expressions
//!
//! Recognised atoms are `!`, `(`, `)`, `&`, the OR keyword `v` and identifiers.
//! Everything else (whitespace included) is skipped without error.

use std::fmt;
use std::sync::Arc;

/// Kind of a lexical token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `!`
    Not,
    /// `&`
    And,
    /// `v`
    Or,
    /// A variable name
    Ident(Arc<str>),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Not => write!(f, "!"),
            TokenKind::And => write!(f, "&"),
            TokenKind::Or => write!(f, "v"),
            TokenKind::Ident(name) => write!(f, "{}", name),
        }
    }
}

/// A token together with the character offset it started at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

impl Token {
    fn new(kind: TokenKind, offset: usize) -> Self {
        Token { kind, offset }
    }
}

/// Split `input` into tokens, left to right
///
/// A lowercase `v` at the start of a token is always the OR operator, so an
/// identifier can never begin with `v` (`vx` lexes as `v`, `x`), though it may
/// contain one (`avb` is a single identifier).
///
/// # Examples
///
/// ```
/// use dnf_simplifier::expression::{tokenize, TokenKind};
///
/// let kinds: Vec<_> = tokenize("a & !b").into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds.len(), 4);
/// assert_eq!(kinds[1], TokenKind::And);
/// ```
pub fn tokenize(input: &str) -> Vec<Token> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let c = chars[pos];
        let kind = match c {
            '!' => TokenKind::Not,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '&' => TokenKind::And,
            'v' => TokenKind::Or,
            c if c.is_ascii_alphabetic() => {
                let start = pos;
                pos += 1;
                while pos < chars.len() && is_word_char(chars[pos]) {
                    pos += 1;
                }
                let name: String = chars[start..pos].iter().collect();
                tokens.push(Token::new(TokenKind::Ident(Arc::from(name)), start));
                continue;
            }
            _ => {
                pos += 1;
                continue;
            }
        };
        tokens.push(Token::new(kind, pos));
        pos += 1;
    }

    tokens
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
