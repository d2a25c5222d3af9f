//! Error types for expression parsing

use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while parsing an expression
///
/// Parsing stops at the first structural error; there is no recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionParseError {
    /// Malformed grouping or a missing operand
    ///
    /// Raised when a `(` is not closed where expected, or when a literal,
    /// `!` or `(` was expected but the input ended or another token was found.
    #[error("Syntax error {}: {message}. Input: {input:?}", location(.position))]
    Syntax {
        /// What the parser expected
        message: Arc<str>,
        /// The original input
        input: Arc<str>,
        /// Character offset of the offending token, `None` at end of input
        position: Option<usize>,
    },

    /// A complete expression was parsed but tokens remain
    #[error("Unexpected token `{token}` at position {position} after end of expression. Input: {input:?}")]
    TrailingTokens {
        /// The first unconsumed token
        token: Arc<str>,
        /// The original input
        input: Arc<str>,
        /// Character offset of the first unconsumed token
        position: usize,
    },
}

impl ExpressionParseError {
    /// Character offset the error points at, if any
    pub fn position(&self) -> Option<usize> {
        match self {
            ExpressionParseError::Syntax { position, .. } => *position,
            ExpressionParseError::TrailingTokens { position, .. } => Some(*position),
        }
    }
}

fn location(position: &Option<usize>) -> String {
    match position {
        Some(pos) => format!("at position {}", pos),
        None => "at end of input".to_string(),
    }
}

impl From<ExpressionParseError> for io::Error {
    fn from(err: ExpressionParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_with_position() {
        let err = ExpressionParseError::Syntax {
            message: Arc::from("expected `)`"),
            input: Arc::from("(a v b & c"),
            position: Some(9),
        };
        let msg = err.to_string();
        assert!(msg.contains("position 9"));
        assert!(msg.contains("expected `)`"));
        assert_eq!(err.position(), Some(9));
    }

    #[test]
    fn test_syntax_error_at_end_of_input() {
        let err = ExpressionParseError::Syntax {
            message: Arc::from("expected `)`"),
            input: Arc::from("(a v b"),
            position: None,
        };
        let msg = err.to_string();
        assert!(!msg.contains("position"));
        assert!(msg.contains("end of input"));
    }

    #[test]
    fn test_trailing_tokens_message() {
        let err = ExpressionParseError::TrailingTokens {
            token: Arc::from(")"),
            input: Arc::from("a)"),
            position: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("`)`"));
        assert!(msg.contains("position 1"));
    }

    #[test]
    fn test_parse_error_to_io_error() {
        let err = ExpressionParseError::TrailingTokens {
            token: Arc::from("b"),
            input: Arc::from("a b"),
            position: 2,
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
