//! Expansion of expression trees into DNF
//!
//! AND is distributed over OR by a left-to-right cartesian product of the
//! operands' term lists. Contradictory products are dropped as soon as they
//! appear, which keeps the intermediate lists from growing needlessly.

use super::error::ExpansionError;
use super::term::{Literal, Term};
use super::Dnf;
use crate::expression::Expr;
use std::sync::Arc;

/// Expand `expr` into an unminimized DNF
///
/// - a literal becomes a single one-literal term
/// - a negated literal becomes a single negative one-literal term
/// - a conjunction becomes the product of its operands' expansions
/// - a disjunction concatenates its operands' expansions in order
///
/// Terms are not deduplicated here; see [`Dnf::simplify`].
///
/// # Errors
///
/// [`ExpansionError::UnsupportedNegation`] if a negation wraps anything but a
/// single variable.
///
/// # Examples
///
/// ```
/// use dnf_simplifier::{to_dnf, Expr};
///
/// let expr = Expr::parse("(a v b) & c").unwrap();
/// let dnf = to_dnf(&expr).unwrap();
/// assert_eq!(dnf.to_string(), "a & c v b & c");
/// ```
pub fn to_dnf(expr: &Expr) -> Result<Dnf, ExpansionError> {
    expand(expr).map(Dnf::from_terms)
}

fn expand(expr: &Expr) -> Result<Vec<Term>, ExpansionError> {
    match expr {
        Expr::Literal(name) => Ok(vec![Term::unit(Literal::positive(Arc::clone(name)))]),

        Expr::Negation(operand) => match operand.as_ref() {
            Expr::Literal(name) => Ok(vec![Term::unit(Literal::negative(Arc::clone(name)))]),
            other => Err(ExpansionError::UnsupportedNegation {
                operand: Arc::from(other.to_string()),
            }),
        },

        Expr::Conjunction(operands) => {
            let expanded = operands
                .iter()
                .map(expand)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(distribute(&expanded))
        }

        Expr::Disjunction(operands) => {
            let mut terms = Vec::new();
            for operand in operands {
                terms.extend(expand(operand)?);
            }
            Ok(terms)
        }
    }
}

/// Cartesian product of term lists, pruning contradictions
///
/// Starts from a single empty term, so an empty operand list yields TRUE.
/// Output order is accumulated-term-major, operand-term-minor.
fn distribute(operands: &[Vec<Term>]) -> Vec<Term> {
    let mut result = vec![Term::new()];
    for operand in operands {
        let mut next = Vec::with_capacity(result.len() * operand.len());
        for acc in &result {
            for term in operand {
                match acc.conjoin(term) {
                    Some(merged) => next.push(merged),
                    None => log::trace!("pruned contradiction {} & {}", acc, term),
                }
            }
        }
        result = next;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(input: &str) -> Result<Dnf, ExpansionError> {
        to_dnf(&Expr::parse(input).unwrap())
    }

    fn rendered(input: &str) -> Vec<String> {
        expand_str(input)
            .unwrap()
            .iter()
            .map(|t| t.to_string())
            .collect()
    }

    #[test]
    fn test_literal_and_negated_literal() {
        assert_eq!(rendered("a"), vec!["a"]);
        assert_eq!(rendered("!a"), vec!["!a"]);
    }

    #[test]
    fn test_disjunction_concatenates_without_dedup() {
        assert_eq!(rendered("a v b v a"), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_conjunction_distributes_in_pairing_order() {
        assert_eq!(
            rendered("(a v b) & (c v d)"),
            vec!["a & c", "a & d", "b & c", "b & d"]
        );
    }

    #[test]
    fn test_contradictions_are_pruned() {
        assert!(rendered("a & !a").is_empty());
        assert_eq!(rendered("(a v b) & !a"), vec!["!a & b"]);
    }

    #[test]
    fn test_repeated_literal_merges() {
        assert_eq!(rendered("a & a & b"), vec!["a & b"]);
    }

    #[test]
    fn test_empty_conjunction_is_true() {
        let dnf = to_dnf(&Expr::Conjunction(Vec::new())).unwrap();
        assert_eq!(dnf.len(), 1);
        assert!(dnf.terms()[0].is_empty());
    }

    #[test]
    fn test_empty_disjunction_is_false() {
        let dnf = to_dnf(&Expr::Disjunction(Vec::new())).unwrap();
        assert!(dnf.is_empty());
    }

    #[test]
    fn test_negated_group_is_unsupported() {
        assert_eq!(
            expand_str("!(a & b)").unwrap_err(),
            ExpansionError::UnsupportedNegation {
                operand: Arc::from("a & b")
            }
        );
        assert!(matches!(
            expand_str("c v !(a v b)").unwrap_err(),
            ExpansionError::UnsupportedNegation { .. }
        ));
    }

    #[test]
    fn test_double_negation_is_unsupported() {
        assert_eq!(
            expand_str("!!a").unwrap_err(),
            ExpansionError::UnsupportedNegation {
                operand: Arc::from("!a")
            }
        );
    }
}
