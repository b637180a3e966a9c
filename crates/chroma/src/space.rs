//! RGB, HSL and HSV component types and the conversions between them.
//!
//! ## Component Ranges
//!
//! | space | components | range |
//! |-------|-----------|-------|
//! | [`Rgb`] | r, g, b | 0..=255 |
//! | [`Hsl`] | h | degrees, 0..360 |
//! | [`Hsl`] | s, l | percent, 0..=100 |
//! | [`Hsv`] | h, s, v | 0..=1 |
//!
//! HSL and HSV intentionally use different conventions. Channel values are
//! `f64` because animated channels are sampled mid-flight; nothing here clamps.
//!
//! ```
//! use chroma::{Hsl, Rgb};
//!
//! let red = Rgb::from(Hsl::new(0.0, 100.0, 50.0));
//! assert_eq!(red, Rgb::new(255.0, 0.0, 0.0));
//! assert_eq!(red.to_hex(), "#ff0000");
//! ```

use crate::error::ColorError;
use crate::{hex, named};

/// An RGB triple in channel units (0-255).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb {
    /// Red channel (0-255).
    pub r: f64,
    /// Green channel (0-255).
    pub g: f64,
    /// Blue channel (0-255).
    pub b: f64,
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Hue, saturation and value, each in 0..=1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(255.0, 255.0, 255.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// All three channels NaN; what the permissive parsers produce for
    /// unresolvable input.
    pub const fn nan() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN)
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels divided by 255.
    pub fn normalized(self) -> [f64; 3] {
        [self.r / 255.0, self.g / 255.0, self.b / 255.0]
    }

    /// Returns true if any channel is NaN.
    pub fn is_nan(self) -> bool {
        self.r.is_nan() || self.g.is_nan() || self.b.is_nan()
    }

    /// Strict hex parsing. Accepts `#rgb`, `#rrggbb`, with or without `#`.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        hex::decode(input)
    }

    /// Permissive hex parsing: every malformed or missing group becomes NaN.
    pub fn from_hex_lossy(input: &str) -> Self {
        hex::decode_lossy(input)
    }

    /// Strict named-color lookup.
    pub fn from_named(name: &str) -> Result<Self, ColorError> {
        let hex = named::lookup(name).ok_or_else(|| ColorError::UnknownName(name.to_string()))?;
        hex::decode(hex)
    }

    /// Permissive named-color lookup: unknown names become all-NaN.
    pub fn from_named_lossy(name: &str) -> Self {
        match named::lookup(name) {
            Some(hex) => hex::decode_lossy(hex),
            None => Self::nan(),
        }
    }

    /// `#rrggbb`, lowercase.
    ///
    /// Fractional channels (mid-animation, or from HSV) are rounded first, and
    /// out-of-range values saturate to 0 or 255 since a hex digit pair cannot
    /// carry them.
    pub fn to_hex(self) -> String {
        hex::encode(self)
    }

    pub fn to_hsl(self) -> Hsl {
        let [r, g, b] = self.normalized();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = Self::hue_sextant(r, g, b, max, d);

        Hsl::new(h * 60.0, s * 100.0, l * 100.0)
    }

    pub fn to_hsv(self) -> Hsv {
        let [r, g, b] = self.normalized();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let d = max - min;
        let s = if max == 0.0 { 0.0 } else { d / max };

        let h = if max == min {
            0.0
        } else {
            Self::hue_sextant(r, g, b, max, d) / 6.0
        };

        Hsv::new(h, s, max)
    }

    /// Max channel as a percentage.
    pub fn brightness(self) -> f64 {
        let [r, g, b] = self.normalized();
        r.max(g).max(b) * 100.0
    }

    /// Mean of max and min channel as a percentage.
    pub fn lightness(self) -> f64 {
        let [r, g, b] = self.normalized();
        (r.max(g).max(b) + r.min(g).min(b)) / 2.0 * 100.0
    }

    // Hue in sextants (0..6), picked from whichever channel is the max.
    // Ties resolve red first, then green.
    fn hue_sextant(r: f64, g: f64, b: f64, max: f64, d: f64) -> f64 {
        if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        }
    }
}

impl From<[f64; 3]> for Rgb {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r as f64, g as f64, b as f64)
    }
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.h, self.s, self.l]
    }

    /// Channels are rounded to the nearest integer.
    pub fn to_rgb(self) -> Rgb {
        let h = self.h / 360.0;
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_rgb(p, q, h + 1.0 / 3.0),
                hue_to_rgb(p, q, h),
                hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        Rgb::new(
            (r * 255.0).round(),
            (g * 255.0).round(),
            (b * 255.0).round(),
        )
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.h, self.s, self.v]
    }

    /// Six-sector conversion. The result is scaled to 0-255 but not rounded.
    pub fn to_rgb(self) -> Rgb {
        let Hsv { h, s, v } = self;
        let i = (h * 6.0).floor();
        let f = h * 6.0 - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match (i as i64).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgb::new(r * 255.0, g * 255.0, b * 255.0)
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        hsv.to_rgb()
    }
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Clamp `value` into `min..=max`.
///
/// Never applied automatically by any conversion. NaN stays NaN.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// [`clamp`] with the channel range 0..=255.
pub fn clamp_channel(value: f64) -> f64 {
    clamp(value, 0.0, 255.0)
}
