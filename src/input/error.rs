use thiserror::Error;

use crate::interval::IntervalError;

/// Errors produced while reading intervals from text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("No intervals given")]
    Empty,

    #[error("Unrecognized interval list format: {0}")]
    UnrecognizedFormat(String),

    #[error("Interval {index} must have exactly two endpoints, got {found}")]
    WrongArity { index: usize, found: usize },

    #[error("Interval {index} has an invalid number: {token:?}")]
    InvalidNumber { index: usize, token: String },

    #[error("Interval {index} is invalid: {source}")]
    InvalidInterval {
        index: usize,
        #[source]
        source: IntervalError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_display() {
        assert_eq!(ParseError::Empty.to_string(), "No intervals given");
    }

    #[test]
    fn wrong_arity_display() {
        let e = ParseError::WrongArity { index: 2, found: 3 };
        assert_eq!(
            e.to_string(),
            "Interval 2 must have exactly two endpoints, got 3"
        );
    }

    #[test]
    fn invalid_number_display() {
        let e = ParseError::InvalidNumber {
            index: 0,
            token: "x".to_string(),
        };
        assert_eq!(e.to_string(), "Interval 0 has an invalid number: \"x\"");
    }
}
