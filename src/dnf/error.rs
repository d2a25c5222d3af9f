//! Error types for DNF expansion

use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while expanding an expression into DNF
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpansionError {
    /// Negation applied to something other than a single variable
    ///
    /// Only literals can be negated; `!(a & b)` and `!!a` are rejected.
    #[error("Negation of compound expression `{operand}` is not supported; only single variables can be negated")]
    UnsupportedNegation {
        /// The negated operand, rendered in input notation
        operand: Arc<str>,
    },
}

impl From<ExpansionError> for io::Error {
    fn from(err: ExpansionError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
