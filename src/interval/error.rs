use thiserror::Error;

/// Errors raised when constructing an [`Interval`](super::Interval).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IntervalError {
    #[error("Interval endpoints must be finite numbers, got [{start}, {end}]")]
    NonFinite { start: f64, end: f64 },
}
