//! # DNF Simplifier
//!
//! Converts propositional-logic expressions into a minimized disjunctive
//! normal form (sum of products).
//!
//! ## Overview
//!
//! Processing runs strictly forward through four stages:
//!
//! 1. **Parsing**: the text is tokenized and parsed by recursive descent into
//!    an [`Expr`] tree ([`expression`] module)
//! 2. **Expansion**: the tree is rewritten into a [`Dnf`] by distributing AND
//!    over OR, dropping contradictory terms on the way ([`to_dnf`])
//! 3. **Minimization**: duplicate terms and terms absorbed by a strict subset
//!    are removed ([`simplify`])
//! 4. **Rendering**: terms are printed as `a & !b v c`, with literals ordered by
//!    variable name ([`render`])
//!
//! Minimization is syntactic only. It applies the absorption law
//! `A v (A & B) = A` but does not search for prime implicants.
//!
//! ## Input Notation
//!
//! - `!` NOT (prefix, literals only when expanding)
//! - `&` AND
//! - `v` OR (the lowercase letter)
//! - parentheses for grouping
//!
//! ## Quick Start
//!
//! ```
//! # fn main() -> Result<(), dnf_simplifier::Error> {
//! assert_eq!(dnf_simplifier::simplify_expression("a v a & b")?, "a");
//! assert_eq!(dnf_simplifier::simplify_expression("a & !a")?, "0");
//! assert_eq!(
//!     dnf_simplifier::simplify_expression("(a v b) & !c")?,
//!     "a & !c v b & !c"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Step by Step
//!
//! ```
//! use dnf_simplifier::{to_dnf, Absorption, Expr};
//!
//! # fn main() -> Result<(), dnf_simplifier::Error> {
//! let expr = Expr::parse("a & b v a & b & c")?;
//! let expanded = to_dnf(&expr)?;
//! assert_eq!(expanded.len(), 2);
//!
//! let minimized = expanded.simplify_with(Absorption::FixedPoint);
//! assert_eq!(minimized.to_string(), "a & b");
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! The library reports each stage through the [`log`] facade (`debug` for
//! stage summaries, `trace` for every pruned contradiction). It never installs
//! a logger itself.

pub mod dnf;
pub mod error;
pub mod expression;

pub use dnf::{
    render, simplify, simplify_with, to_dnf, Absorption, Dnf, ExpansionError, Literal, Term,
};
pub use error::Error;
pub use expression::{Expr, ExpressionParseError, MAX_NESTING_DEPTH};

/// Options for [`simplify_expression_with`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimplifyConfig {
    /// Absorption mode used by the minimizer
    pub absorption: Absorption,
}

impl SimplifyConfig {
    /// Configuration with fixed-point absorption
    pub fn fixed_point() -> Self {
        SimplifyConfig {
            absorption: Absorption::FixedPoint,
        }
    }
}

/// Parse, expand, minimize and render `input` with default settings
///
/// Returns `"0"` when the expression is unsatisfiable.
///
/// # Errors
///
/// - [`Error::Parse`] for malformed input (unclosed `(`, missing operand,
///   trailing tokens, nesting deeper than [`MAX_NESTING_DEPTH`])
/// - [`Error::Expansion`] when a compound sub-expression is negated
pub fn simplify_expression(input: &str) -> Result<String, Error> {
    simplify_expression_with(input, &SimplifyConfig::default())
}

/// Parse, expand, minimize and render `input`
pub fn simplify_expression_with(input: &str, config: &SimplifyConfig) -> Result<String, Error> {
    let expr = Expr::parse(input)?;
    let expanded = to_dnf(&expr)?;
    log::debug!("expanded into {} terms: {}", expanded.len(), expanded);
    let minimized = expanded.simplify_with(config.absorption);
    Ok(minimized.to_string())
}
