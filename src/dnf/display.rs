//! Text rendering of terms and DNFs

use super::term::Term;
use super::Dnf;
use std::fmt;

/// Render a term list as `a & !b v c`
///
/// Literals inside a term are ordered by variable name, then by label.
/// Terms are printed in the given order. An empty list prints `0`; an empty
/// term prints `1`.
///
/// # Examples
///
/// ```
/// use dnf_simplifier::{render, Literal, Term};
///
/// let t = Term::from_literals([Literal::positive("b"), Literal::negative("a")]).unwrap();
/// assert_eq!(render(&[t]), "!a & b");
/// assert_eq!(render(&[]), "0");
/// ```
pub fn render(terms: &[Term]) -> String {
    if terms.is_empty() {
        return "0".to_string();
    }
    terms
        .iter()
        .map(Term::to_string)
        .collect::<Vec<_>>()
        .join(" v ")
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "1");
        }
        // literals() already yields presentation order
        for (i, literal) in self.literals().enumerate() {
            if i > 0 {
                write!(f, " & ")?;
            }
            write!(f, "{}", literal)?;
        }
        Ok(())
    }
}

/// Same output as [`render`] over the DNF's terms
impl fmt::Display for Dnf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(self.terms()))
    }
}
