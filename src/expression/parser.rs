//! Recursive-descent parser over lexed tokens
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! expr   := term ( 'v' term )*
//! term   := factor ( '&' factor )*
//! factor := '!' factor | '(' expr ')' | IDENT
//! ```
//!
//! Every rule takes the index of the next unread token and returns the parsed
//! node together with the index just past it. The parser holds no cursor of
//! its own, so each rule can be driven independently.
//!
//! Groups and negations may nest at most [`MAX_NESTING_DEPTH`] levels deep;
//! deeper input is rejected with a syntax error.

use super::error::ExpressionParseError;
use super::lexer::{Token, TokenKind};
use super::Expr;
use std::sync::Arc;

/// Maximum combined depth of nested `(` groups and `!` prefixes
pub const MAX_NESTING_DEPTH: usize = 256;

type ParseResult = Result<(Expr, usize), ExpressionParseError>;

/// Parse a complete token sequence into an expression
///
/// `input` is the text the tokens came from; it is only used for error
/// reporting. Fails with [`ExpressionParseError::TrailingTokens`] when a
/// complete expression ends before the last token.
pub fn parse(tokens: &[Token], input: &str) -> Result<Expr, ExpressionParseError> {
    let parser = Parser { tokens, input };
    let (expr, pos) = parser.parse_expr(0, 0)?;
    match tokens.get(pos) {
        None => Ok(expr),
        Some(token) => Err(ExpressionParseError::TrailingTokens {
            token: Arc::from(token.kind.to_string()),
            input: Arc::from(input),
            position: token.offset,
        }),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    input: &'a str,
}

impl<'a> Parser<'a> {
    fn peek(&self, pos: usize) -> Option<&'a TokenKind> {
        self.tokens.get(pos).map(|t| &t.kind)
    }

    fn parse_expr(&self, pos: usize, depth: usize) -> ParseResult {
        let (first, mut pos) = self.parse_term(pos, depth)?;
        let mut operands = vec![first];
        while self.peek(pos) == Some(&TokenKind::Or) {
            let (node, next) = self.parse_term(pos + 1, depth)?;
            operands.push(node);
            pos = next;
        }
        Ok((collapse(operands, Expr::Disjunction), pos))
    }

    fn parse_term(&self, pos: usize, depth: usize) -> ParseResult {
        let (first, mut pos) = self.parse_factor(pos, depth)?;
        let mut operands = vec![first];
        while self.peek(pos) == Some(&TokenKind::And) {
            let (node, next) = self.parse_factor(pos + 1, depth)?;
            operands.push(node);
            pos = next;
        }
        Ok((collapse(operands, Expr::Conjunction), pos))
    }

    fn parse_factor(&self, pos: usize, depth: usize) -> ParseResult {
        let nests = matches!(self.peek(pos), Some(TokenKind::Not | TokenKind::LParen));
        if nests && depth >= MAX_NESTING_DEPTH {
            return Err(self.syntax_error(
                &format!("nesting too deep (limit {})", MAX_NESTING_DEPTH),
                pos,
            ));
        }
        match self.peek(pos) {
            Some(TokenKind::Not) => {
                let (operand, next) = self.parse_factor(pos + 1, depth + 1)?;
                Ok((Expr::negation(operand), next))
            }
            Some(TokenKind::LParen) => {
                let (inner, next) = self.parse_expr(pos + 1, depth + 1)?;
                match self.peek(next) {
                    Some(TokenKind::RParen) => Ok((inner, next + 1)),
                    _ => Err(self.syntax_error("expected `)` to close group", next)),
                }
            }
            Some(TokenKind::Ident(name)) => Ok((Expr::Literal(Arc::clone(name)), pos + 1)),
            _ => Err(self.syntax_error("expected a variable, `!` or `(`", pos)),
        }
    }

    fn syntax_error(&self, expected: &str, pos: usize) -> ExpressionParseError {
        let (message, position) = match self.tokens.get(pos) {
            Some(token) => (format!("{}, found `{}`", expected, token.kind), Some(token.offset)),
            None => (expected.to_string(), None),
        };
        ExpressionParseError::Syntax {
            message: Arc::from(message),
            input: Arc::from(self.input),
            position,
        }
    }
}

fn collapse(mut operands: Vec<Expr>, build: fn(Vec<Expr>) -> Expr) -> Expr {
    if operands.len() == 1 {
        operands.remove(0)
    } else {
        build(operands)
    }
}
