//! Error types for tween parsing.

use thiserror::Error;

/// Errors that can occur when parsing a tween spec such as `"300ms ease-in"`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TweenParseError {
    /// Input does not match `<number><ms|s> [curve]`.
    #[error("invalid tween syntax: {0:?}")]
    InvalidSyntax(String),

    /// Curve name is not one of the known easing curves.
    #[error("unknown easing curve: {0}")]
    UnknownCurve(String),

    /// Duration is negative or too large to represent.
    #[error("duration out of range: {0}")]
    DurationOutOfRange(String),
}
