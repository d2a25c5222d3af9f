//! Error types for the DNF simplifier
//!
//! Each pipeline stage has its own error type; [`Error`] wraps them so callers
//! of [`simplify_expression`](crate::simplify_expression) can match on either.

use crate::dnf::ExpansionError;
use crate::expression::ExpressionParseError;
use std::io;
use thiserror::Error;

/// The main error type for the DNF simplifier
///
/// Errors are never recovered from inside the library: the first one raised
/// aborts the pipeline and no partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input text is not a well-formed expression
    #[error(transparent)]
    Parse(#[from] ExpressionParseError),

    /// The expression parsed but cannot be expanded into DNF
    #[error(transparent)]
    Expansion(#[from] ExpansionError),
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Parse(e) => e.into(),
            Error::Expansion(e) => e.into(),
        }
    }
}
