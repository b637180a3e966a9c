//! What goes into a color and what comes out of it.
//!
//! [`ColorInput`] is the tagged form of every accepted "set" shape.
//! [`Space`] selects a representation on the way out and [`ColorValue`]
//! carries it.

use std::fmt;
use std::str::FromStr;

use chroma::{ColorError, Hsl, Hsv, ParsedColor, Rgb, parse_color_input, parse_color_lenient};

use crate::color::Color;

/// Input accepted by [`Color::set`].
#[derive(Clone, Debug)]
pub enum ColorInput<'a> {
    /// Channel values in 0..=255.
    Rgb(Rgb),
    /// Hue in degrees, saturation and lightness in percent.
    Hsl(Hsl),
    /// Hue, saturation and value in 0..=1.
    Hsv(Hsv),
    /// Hex digits with or without `#`, 3 or 6 digits.
    Hex(String),
    /// Key of the named-color table.
    Named(String),
    /// Copy another color, aliasing its channels once the copy settles.
    Instance(&'a Color),
}

impl ColorInput<'static> {
    /// Parse textual input strictly.
    ///
    /// ```
    /// use tincture::ColorInput;
    ///
    /// assert!(matches!(ColorInput::parse("#abc"), Ok(ColorInput::Hex(_))));
    /// assert!(matches!(ColorInput::parse("hsl 0 100 50"), Ok(ColorInput::Hsl(_))));
    /// assert!(ColorInput::parse("not a color").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        parse_color_input(input).map(Self::from)
    }

    /// Recognise the same shapes as [`ColorInput::parse`] but keep values as
    /// written, out of range or malformed.
    pub fn parse_lenient(input: &str) -> Result<Self, ColorError> {
        parse_color_lenient(input).map(Self::from)
    }
}

impl From<ParsedColor> for ColorInput<'static> {
    fn from(parsed: ParsedColor) -> Self {
        match parsed {
            ParsedColor::Rgb(rgb) => ColorInput::Rgb(rgb),
            ParsedColor::Hsl(hsl) => ColorInput::Hsl(hsl),
            ParsedColor::Hsv(hsv) => ColorInput::Hsv(hsv),
            ParsedColor::Hex(hex) => ColorInput::Hex(hex),
            ParsedColor::Named(name) => ColorInput::Named(name),
        }
    }
}

impl From<Rgb> for ColorInput<'_> {
    fn from(rgb: Rgb) -> Self {
        ColorInput::Rgb(rgb)
    }
}

impl From<Hsl> for ColorInput<'_> {
    fn from(hsl: Hsl) -> Self {
        ColorInput::Hsl(hsl)
    }
}

impl From<Hsv> for ColorInput<'_> {
    fn from(hsv: Hsv) -> Self {
        ColorInput::Hsv(hsv)
    }
}

impl<'a> From<&'a Color> for ColorInput<'a> {
    fn from(color: &'a Color) -> Self {
        ColorInput::Instance(color)
    }
}

/// Representation requested from [`Color::get`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Space {
    #[default]
    Rgb,
    Hsl,
    Hex,
    Hsv,
}

impl Space {
    /// Resolve a case-insensitive token such as `"HSL"`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "rgb" => Some(Space::Rgb),
            "hsl" => Some(Space::Hsl),
            "hex" => Some(Space::Hex),
            "hsv" => Some(Space::Hsv),
            _ => None,
        }
    }
}

impl FromStr for Space {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| ColorError::UnrecognizedInput(s.to_string()))
    }
}

/// A color read out in one representation.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorValue {
    Rgb([f64; 3]),
    Hsl([f64; 3]),
    Hsv([f64; 3]),
    Hex(String),
}

impl ColorValue {
    pub fn space(&self) -> Space {
        match self {
            ColorValue::Rgb(_) => Space::Rgb,
            ColorValue::Hsl(_) => Space::Hsl,
            ColorValue::Hsv(_) => Space::Hsv,
            ColorValue::Hex(_) => Space::Hex,
        }
    }

    /// Components of a triple-valued representation. `None` for hex.
    pub fn components(&self) -> Option<[f64; 3]> {
        match self {
            ColorValue::Rgb(c) | ColorValue::Hsl(c) | ColorValue::Hsv(c) => Some(*c),
            ColorValue::Hex(_) => None,
        }
    }

    pub fn as_hex(&self) -> Option<&str> {
        match self {
            ColorValue::Hex(hex) => Some(hex),
            _ => None,
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Rgb([r, g, b]) => write!(f, "rgb({r}, {g}, {b})"),
            ColorValue::Hsl([h, s, l]) => write!(f, "hsl({h}, {s}%, {l}%)"),
            ColorValue::Hsv([h, s, v]) => write!(f, "hsv({h}, {s}, {v})"),
            ColorValue::Hex(hex) => f.write_str(hex),
        }
    }
}
