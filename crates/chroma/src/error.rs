//! Error types for color conversion and parsing.

use thiserror::Error;

/// Errors returned by the strict color entry points.
///
/// The permissive setters on `tincture::Color` never produce these; they write
/// NaN channels instead. Only [`Rgb::from_hex`](crate::Rgb::from_hex),
/// [`Rgb::from_named`](crate::Rgb::from_named) and
/// [`parse_color_input`](crate::parse::parse_color_input) report them.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// Name is not in the CSS named-color table.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// Wrong length or non-hex digits.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// A component is outside the range of its color space.
    #[error("invalid {space} component: {value} (expected {min}..={max})")]
    InvalidComponent {
        space: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Input does not match any supported color syntax.
    #[error("unrecognized color input: {0:?}")]
    UnrecognizedInput(String),
}
