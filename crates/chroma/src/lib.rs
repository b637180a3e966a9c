//! Color-space conversions for 8-bit sRGB-like values.
//!
//! This crate is the stateless half of `tincture`: pure functions that move a
//! color between RGB, HSL, HSV and hex, plus the CSS named-color table and a
//! parser for textual color input.
//!
//! # Overview
//!
//! - [`Rgb`] channels are 0-255, [`Hsl`] is degrees/percent, [`Hsv`] is 0-1.
//! - `HSL -> RGB` rounds to whole channels, `HSV -> RGB` does not.
//! - Hex decoding comes in a strict form ([`Rgb::from_hex`]) and a permissive
//!   form ([`Rgb::from_hex_lossy`]) that yields NaN for malformed groups.
//! - Nothing clamps automatically. Use [`clamp`] when you need it.
//!
//! # Usage
//!
//! ```
//! use chroma::{Hsv, Rgb};
//!
//! let lime = Rgb::from_hex("#0f0").unwrap();
//! assert_eq!(lime, Rgb::new(0.0, 255.0, 0.0));
//! assert_eq!(lime.to_hsl().h, 120.0);
//!
//! let teal = Rgb::from(Hsv::new(0.5, 1.0, 0.5));
//! assert_eq!(teal.to_hex(), "#008080");
//! ```

pub mod error;
pub mod hex;
pub mod named;
pub mod parse;
pub mod space;

// Re-export main types at crate root
pub use error::ColorError;
pub use parse::{ParsedColor, parse_color_input, parse_color_lenient};
pub use space::{Hsl, Hsv, Rgb, clamp, clamp_channel};
