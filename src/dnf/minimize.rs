//! Term minimization by deduplication and absorption
//!
//! Minimization here is purely syntactic: a term is dropped when it repeats
//! an earlier term, or when another term's literals are a strict subset of
//! its own (`t v (t & x) = t`). No consensus or prime-implicant reduction is
//! attempted, so `a & b v a & !b` stays as it is.

use super::term::Term;
use std::collections::HashSet;

/// How the absorption step is applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Absorption {
    /// Check every term once against the full deduplicated list
    #[default]
    SinglePass,
    /// Repeat the absorption pass over the surviving terms until nothing changes
    FixedPoint,
}

/// Deduplicate and absorb, with single-pass absorption
///
/// Retained terms keep their first-seen order.
///
/// # Examples
///
/// ```
/// use dnf_simplifier::{simplify, to_dnf, Expr};
///
/// let dnf = to_dnf(&Expr::parse("a v a & b v a").unwrap()).unwrap();
/// let terms = simplify(dnf.terms());
/// assert_eq!(terms.len(), 1);
/// assert_eq!(terms[0].to_string(), "a");
/// ```
pub fn simplify(terms: &[Term]) -> Vec<Term> {
    simplify_with(terms, Absorption::SinglePass)
}

/// Deduplicate and absorb using the given absorption mode
pub fn simplify_with(terms: &[Term], absorption: Absorption) -> Vec<Term> {
    let unique = dedup(terms);
    log::debug!("{} terms, {} after deduplication", terms.len(), unique.len());

    let mut result = absorb(&unique);
    if absorption == Absorption::FixedPoint {
        let mut passes = 1;
        loop {
            let next = absorb(&result);
            if next.len() == result.len() {
                break;
            }
            result = next;
            passes += 1;
        }
        log::debug!("absorption reached a fixed point after {} passes", passes);
    }

    log::debug!("{} terms after absorption", result.len());
    result
}

/// Keep the first occurrence of each set-equal term
fn dedup(terms: &[Term]) -> Vec<Term> {
    let mut seen: HashSet<&Term> = HashSet::with_capacity(terms.len());
    terms
        .iter()
        .filter(|term| seen.insert(*term))
        .cloned()
        .collect()
}

/// Drop every term that has a strict subset elsewhere in `terms`
fn absorb(terms: &[Term]) -> Vec<Term> {
    terms
        .iter()
        .filter(|t| !terms.iter().any(|other| other.is_strict_subset_of(t)))
        .cloned()
        .collect()
}
