//! Hex encoding and decoding.
//!
//! Two decoders exist. [`decode`] validates and reports [`ColorError::InvalidHex`].
//! [`decode_lossy`] never fails: a malformed or missing two-digit group
//! decodes to NaN and the other groups are kept.

use crate::error::ColorError;
use crate::space::Rgb;

/// Strip an optional leading `#` and expand `rgb` shorthand to `rrggbb`.
///
/// Strings of any other length are returned unchanged (minus the `#`).
pub fn expand(input: &str) -> String {
    let hex = input.strip_prefix('#').unwrap_or(input);

    if hex.chars().count() == 3 {
        hex.chars().flat_map(|c| [c, c]).collect()
    } else {
        hex.to_string()
    }
}

pub fn decode(input: &str) -> Result<Rgb, ColorError> {
    let expanded = expand(input);

    if expanded.len() != 6 || !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(input.to_string()));
    }

    Ok(decode_lossy(&expanded))
}

pub fn decode_lossy(input: &str) -> Rgb {
    let hex = expand(input);
    Rgb::new(group(&hex, 0), group(&hex, 2), group(&hex, 4))
}

fn group(hex: &str, start: usize) -> f64 {
    match hex.get(start..start + 2) {
        Some(pair) if pair.chars().all(|c| c.is_ascii_hexdigit()) => {
            u8::from_str_radix(pair, 16).map_or(f64::NAN, f64::from)
        }
        _ => f64::NAN,
    }
}

pub fn encode(rgb: Rgb) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        channel_byte(rgb.r),
        channel_byte(rgb.g),
        channel_byte(rgb.b)
    )
}

// `as` saturates: NaN and negatives become 0, anything past 255 becomes 255.
fn channel_byte(value: f64) -> u8 {
    value.round() as u8
}
