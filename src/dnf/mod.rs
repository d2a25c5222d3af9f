//! Disjunctive Normal Form (DNF) representation and minimization
//!
//! This module provides the [`Dnf`] type, an ordered sum of product terms, and
//! the three stages that follow parsing:
//!
//! 1. [`to_dnf`] expands an [`Expr`] by distributing AND over OR
//! 2. [`simplify`] removes duplicate and absorbed terms
//! 3. [`render`] prints the result with a deterministic literal order
//!
//! # Examples
//!
//! ```
//! use dnf_simplifier::{Dnf, Expr};
//!
//! # fn main() -> Result<(), dnf_simplifier::Error> {
//! let expr = Expr::parse("a v a & b")?;
//! let dnf = Dnf::try_from(&expr)?;
//! assert_eq!(dnf.to_string(), "a v a & b");
//!
//! let minimized = dnf.simplify();
//! assert_eq!(minimized.to_string(), "a");
//! assert!(minimized.equivalent_to(&expr));
//! # Ok(())
//! # }
//! ```

mod display;
pub mod error;
mod expand;
mod minimize;
mod term;

pub use display::render;
pub use error::ExpansionError;
pub use expand::to_dnf;
pub use minimize::{simplify, simplify_with, Absorption};
pub use term::{Literal, Term};

use crate::expression::Expr;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

/// Disjunctive Normal Form: a disjunction of conjunctive [`Term`]s
///
/// The empty DNF is the constant FALSE; a DNF holding one empty term is TRUE.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dnf {
    /// Product terms in order
    terms: Vec<Term>,
    /// Cached list of all variables (sorted alphabetically)
    variables: Vec<Arc<str>>,
}

impl Dnf {
    /// Create an empty DNF (FALSE)
    pub fn new() -> Self {
        Dnf::default()
    }

    /// Create a DNF from terms, keeping their order
    pub fn from_terms(terms: Vec<Term>) -> Self {
        let var_set: BTreeSet<Arc<str>> = terms
            .iter()
            .flat_map(|t| t.variables().cloned())
            .collect();
        Dnf {
            terms,
            variables: var_set.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter()
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn into_terms(self) -> Vec<Term> {
        self.terms
    }

    /// Variables used by any term, sorted
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    /// Minimize with single-pass absorption
    pub fn simplify(&self) -> Dnf {
        self.simplify_with(Absorption::SinglePass)
    }

    /// Minimize with the given absorption mode
    pub fn simplify_with(&self, absorption: Absorption) -> Dnf {
        Dnf::from_terms(simplify_with(&self.terms, absorption))
    }

    /// Evaluate the disjunction; missing variables read as `false`
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> bool {
        self.terms.iter().any(|t| t.evaluate(assignment))
    }

    /// Exhaustive truth-table comparison against an expression
    ///
    /// Walks the `2^n` assignments over the variables of both sides and stops
    /// at the first disagreement, so proving equivalence is only practical for
    /// small `n`.
    pub fn equivalent_to(&self, expr: &Expr) -> bool {
        let mut vars = expr.collect_variables();
        vars.extend(self.variables.iter().cloned());
        let vars: Vec<Arc<str>> = vars.into_iter().collect();

        let mut values = vec![false; vars.len()];
        let mut assignment = HashMap::with_capacity(vars.len());
        loop {
            for (var, &value) in vars.iter().zip(&values) {
                assignment.insert(Arc::clone(var), value);
            }
            if self.evaluate(&assignment) != expr.evaluate(&assignment) {
                return false;
            }
            // Binary increment; done once every value is true
            match values.iter().position(|v| !v) {
                Some(i) => {
                    values[..i].iter_mut().for_each(|v| *v = false);
                    values[i] = true;
                }
                None => return true,
            }
        }
    }
}

impl TryFrom<&Expr> for Dnf {
    type Error = ExpansionError;

    fn try_from(expr: &Expr) -> Result<Self, Self::Error> {
        to_dnf(expr)
    }
}

impl<'a> IntoIterator for &'a Dnf {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
