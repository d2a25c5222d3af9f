//! Literals and conjunctive terms

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

/// A variable or its negation
///
/// Polarity is kept as a flag; the `!name` form only appears when displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    name: Arc<str>,
    positive: bool,
}

impl Literal {
    /// Create a literal for `name` with the given polarity
    pub fn new(name: impl Into<Arc<str>>, positive: bool) -> Self {
        Literal {
            name: name.into(),
            positive,
        }
    }

    /// The un-negated variable `name`
    pub fn positive(name: impl Into<Arc<str>>) -> Self {
        Literal::new(name, true)
    }

    /// The negated variable `!name`
    pub fn negative(name: impl Into<Arc<str>>) -> Self {
        Literal::new(name, false)
    }

    /// Variable name without any negation marker
    pub fn name(&self) -> &Arc<str> {
        &self.name
    }

    pub fn is_positive(&self) -> bool {
        self.positive
    }

    /// The same variable with opposite polarity
    pub fn complement(&self) -> Self {
        Literal::new(Arc::clone(&self.name), !self.positive)
    }

    /// Display label: `name` or `!name`
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.positive {
            write!(f, "{}", self.name)
        } else {
            write!(f, "!{}", self.name)
        }
    }
}

/// Presentation order: variable name first, then the display label
impl Ord for Literal {
    fn cmp(&self, other: &Self) -> Ordering {
        // `!name` sorts before `name` as a label, so negative comes first
        self.name
            .cmp(&other.name)
            .then_with(|| self.positive.cmp(&other.positive))
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A conjunction of literals
///
/// Stored as a map from variable name to polarity, so a term can never hold a
/// variable together with its complement. Equality is set equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Term {
    literals: BTreeMap<Arc<str>, bool>,
}

impl Term {
    /// The empty term (constant TRUE)
    pub fn new() -> Self {
        Term::default()
    }

    /// A term holding a single literal
    pub fn unit(literal: Literal) -> Self {
        let mut term = Term::new();
        term.literals.insert(literal.name, literal.positive);
        term
    }

    /// Build a term from literals
    ///
    /// Returns `None` if the literals contain a complementary pair.
    pub fn from_literals<I>(literals: I) -> Option<Self>
    where
        I: IntoIterator<Item = Literal>,
    {
        let mut term = Term::new();
        for literal in literals {
            if !term.insert(literal) {
                return None;
            }
        }
        Some(term)
    }

    /// Insert a literal; returns `false` if its complement is already present
    fn insert(&mut self, literal: Literal) -> bool {
        match self.literals.get(&literal.name) {
            Some(&polarity) => polarity == literal.positive,
            None => {
                self.literals.insert(literal.name, literal.positive);
                true
            }
        }
    }

    /// Union of two terms, or `None` if the union is a contradiction
    pub fn conjoin(&self, other: &Term) -> Option<Term> {
        let mut merged = self.clone();
        for (name, &positive) in &other.literals {
            if !merged.insert(Literal::new(Arc::clone(name), positive)) {
                return None;
            }
        }
        Some(merged)
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.get(&literal.name) == Some(&literal.positive)
    }

    /// Literals in presentation order
    ///
    /// A term holds each variable at most once, so ordering by name alone
    /// already matches the `(name, label)` order of [`Literal`].
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.literals
            .iter()
            .map(|(name, &positive)| Literal::new(Arc::clone(name), positive))
    }

    /// Variable names appearing in the term
    pub fn variables(&self) -> impl Iterator<Item = &Arc<str>> {
        self.literals.keys()
    }

    /// Every literal of `self` also appears in `other`
    pub fn is_subset_of(&self, other: &Term) -> bool {
        self.len() <= other.len()
            && self
                .literals
                .iter()
                .all(|(name, polarity)| other.literals.get(name) == Some(polarity))
    }

    /// Subset of `other` and not equal to it
    pub fn is_strict_subset_of(&self, other: &Term) -> bool {
        self.len() < other.len() && self.is_subset_of(other)
    }

    /// Evaluate the conjunction; missing variables read as `false`
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> bool {
        self.literals
            .iter()
            .all(|(name, &positive)| assignment.get(name).copied().unwrap_or(false) == positive)
    }
}
