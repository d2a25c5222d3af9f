//! Propositional expressions: tokens, AST and parsing
//!
//! This module turns text such as `a & (b v !c)` into an [`Expr`] tree.
//!
//! # Notation
//!
//! - `!` prefix NOT (binds tightest)
//! - `&` infix AND
//! - `v` infix OR (the lowercase letter, binds loosest)
//! - parentheses for grouping
//! - variable names: an ASCII letter followed by letters, digits or `_`
//!
//! Characters outside this notation are skipped by the lexer. Groups and
//! negations nest at most [`MAX_NESTING_DEPTH`] levels deep.
//!
//! # Examples
//!
//! ```
//! use dnf_simplifier::Expr;
//!
//! # fn main() -> Result<(), dnf_simplifier::ExpressionParseError> {
//! let expr = Expr::parse("a & (b v !c)")?;
//! assert_eq!(expr.to_string(), "a & (b v !c)");
//! # Ok(())
//! # }
//! ```

mod display;
pub mod error;
mod eval;
mod lexer;
mod parser;

pub use error::ExpressionParseError;
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::{parse, MAX_NESTING_DEPTH};

use std::str::FromStr;
use std::sync::Arc;

/// A propositional expression tree
///
/// `Conjunction` and `Disjunction` produced by the parser always hold at
/// least two operands; a single operand collapses to the operand itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A variable reference
    Literal(Arc<str>),
    /// Logical NOT
    Negation(Box<Expr>),
    /// Logical AND over the operands
    Conjunction(Vec<Expr>),
    /// Logical OR over the operands
    Disjunction(Vec<Expr>),
}

impl Expr {
    /// Create a variable reference
    pub fn literal(name: &str) -> Self {
        Expr::Literal(Arc::from(name))
    }

    /// Wrap `operand` in a negation
    pub fn negation(operand: Expr) -> Self {
        Expr::Negation(Box::new(operand))
    }

    /// Parse an expression from text
    ///
    /// Tokenizes `input` and runs the recursive-descent parser over the tokens.
    pub fn parse(input: &str) -> Result<Self, ExpressionParseError> {
        let tokens = tokenize(input);
        log::debug!("tokenized {} tokens from {:?}", tokens.len(), input);
        let expr = parser::parse(&tokens, input)?;
        log::debug!("parsed expression: {}", expr);
        Ok(expr)
    }
}

impl FromStr for Expr {
    type Err = ExpressionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expr::parse(s)
    }
}
