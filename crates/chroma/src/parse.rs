//! Parser for textual color input.
//!
//! Detection runs in a fixed order and the first match wins:
//!
//! 1. A string starting with `#` is hex (`#abc`, `#aabbcc`).
//! 2. An exact key of the named-color table (`red`, `aliceblue`).
//! 3. A bare numeric triple is RGB (`255 0 0`, `255, 0, 0`).
//! 4. A case-insensitive `rgb`, `hsl`, `hsv` or `hex` token followed by its
//!    arguments, either space separated (`hsl 0 100 50`) or in function
//!    form (`HSL(0, 100%, 50%)`, `hex(#abc)`).
//!
//! Anything else is [`ColorError::UnrecognizedInput`]. [`parse_color_input`]
//! range checks components (RGB 0..=255, HSL saturation/lightness 0..=100,
//! HSV 0..=1) and validates hex digits; [`parse_color_lenient`] recognises the
//! same shapes but keeps whatever values were written. HSL components may
//! carry a trailing `%`, which is decorative.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{alphanumeric1, char, digit1, multispace0, multispace1},
    combinator::{all_consuming, map, map_res, opt, recognize, value},
    sequence::{delimited, pair, preceded, tuple},
};

use crate::error::ColorError;
use crate::named;
use crate::space::{Hsl, Hsv, Rgb};

/// A successfully parsed color, still tagged with the space it was written in.
#[derive(Clone, Debug, PartialEq)]
pub enum ParsedColor {
    Rgb(Rgb),
    Hsl(Hsl),
    Hsv(Hsv),
    /// Hex string as written. Only the strict parser validates its digits.
    Hex(String),
    /// Key of the named-color table.
    Named(String),
}

impl ParsedColor {
    /// Resolve to RGB channel values.
    pub fn to_rgb(&self) -> Rgb {
        match self {
            ParsedColor::Rgb(rgb) => *rgb,
            ParsedColor::Hsl(hsl) => hsl.to_rgb(),
            ParsedColor::Hsv(hsv) => hsv.to_rgb(),
            ParsedColor::Hex(hex) => Rgb::from_hex_lossy(hex),
            ParsedColor::Named(name) => Rgb::from_named_lossy(name),
        }
    }
}

#[derive(Clone, Copy)]
enum Token {
    Rgb,
    Hsl,
    Hsv,
    Hex,
}

/// Parse a color from text.
///
/// # Examples
///
/// ```
/// use chroma::parse::{ParsedColor, parse_color_input};
/// use chroma::{Hsl, Rgb};
///
/// assert_eq!(
///     parse_color_input("hsl(0, 100%, 50%)").unwrap(),
///     ParsedColor::Hsl(Hsl::new(0.0, 100.0, 50.0))
/// );
/// assert_eq!(
///     parse_color_input("10 20 30").unwrap(),
///     ParsedColor::Rgb(Rgb::new(10.0, 20.0, 30.0))
/// );
/// assert!(parse_color_input("mauve-ish").is_err());
/// ```
pub fn parse_color_input(input: &str) -> Result<ParsedColor, ColorError> {
    detect(input, Mode::Strict)
}

/// Parse a color from text without range or hex-digit checks.
///
/// Detection is the same as [`parse_color_input`], but once the shape is
/// recognised the values are taken as written: `rgb 300 0 0` keeps its
/// out-of-range red and `hex 12345` is handed on for lossy decoding. Only an
/// unknown shape is an error.
///
/// ```
/// use chroma::parse::{ParsedColor, parse_color_lenient};
/// use chroma::Rgb;
///
/// assert_eq!(
///     parse_color_lenient("rgb 300 0 0").unwrap(),
///     ParsedColor::Rgb(Rgb::new(300.0, 0.0, 0.0))
/// );
/// assert!(parse_color_lenient("mauve-ish").is_err());
/// ```
pub fn parse_color_lenient(input: &str) -> Result<ParsedColor, ColorError> {
    detect(input, Mode::Lenient)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Strict,
    Lenient,
}

fn detect(input: &str, mode: Mode) -> Result<ParsedColor, ColorError> {
    let input = input.trim();
    let strict = mode == Mode::Strict;

    if input.starts_with('#') {
        if strict {
            Rgb::from_hex(input)?;
        }
        return Ok(ParsedColor::Hex(input.to_string()));
    }

    if named::is_named(input) {
        return Ok(ParsedColor::Named(input.to_string()));
    }

    if let Ok((_, (r, g, b))) = all_consuming(|i| components(i, false))(input) {
        return checked_rgb(r, g, b, mode);
    }

    let (_, (token, args)) = all_consuming(tagged)(input)
        .map_err(|_| ColorError::UnrecognizedInput(input.to_string()))?;

    match (token, args) {
        (Token::Rgb, Args::Triple(r, g, b)) => checked_rgb(r, g, b, mode),
        (Token::Hsl, Args::Triple(h, s, l)) => {
            if strict {
                check("hsl", s, 0.0, 100.0)?;
                check("hsl", l, 0.0, 100.0)?;
            }
            Ok(ParsedColor::Hsl(Hsl::new(h, s, l)))
        }
        (Token::Hsv, Args::Triple(h, s, v)) => {
            if strict {
                for component in [h, s, v] {
                    check("hsv", component, 0.0, 1.0)?;
                }
            }
            Ok(ParsedColor::Hsv(Hsv::new(h, s, v)))
        }
        (Token::Hex, Args::Literal(hex)) => {
            if strict {
                Rgb::from_hex(hex)?;
            }
            Ok(ParsedColor::Hex(hex.to_string()))
        }
        _ => Err(ColorError::UnrecognizedInput(input.to_string())),
    }
}

fn checked_rgb(r: f64, g: f64, b: f64, mode: Mode) -> Result<ParsedColor, ColorError> {
    if mode == Mode::Strict {
        for channel in [r, g, b] {
            check("rgb", channel, 0.0, 255.0)?;
        }
    }
    Ok(ParsedColor::Rgb(Rgb::new(r, g, b)))
}

fn check(space: &'static str, value: f64, min: f64, max: f64) -> Result<(), ColorError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ColorError::InvalidComponent {
            space,
            value,
            min,
            max,
        })
    }
}

enum Args<'a> {
    Triple(f64, f64, f64),
    Literal(&'a str),
}

fn token(input: &str) -> IResult<&str, Token> {
    alt((
        value(Token::Rgb, tag_no_case("rgb")),
        value(Token::Hsl, tag_no_case("hsl")),
        value(Token::Hsv, tag_no_case("hsv")),
        value(Token::Hex, tag_no_case("hex")),
    ))(input)
}

fn tagged(input: &str) -> IResult<&str, (Token, Args<'_>)> {
    let (input, token) = token(input)?;
    let (input, args) = match token {
        Token::Hex => map(arguments(hex_literal), Args::Literal)(input)?,
        Token::Hsl => map(arguments(|i| components(i, true)), |(a, b, c)| {
            Args::Triple(a, b, c)
        })(input)?,
        Token::Rgb | Token::Hsv => map(arguments(|i| components(i, false)), |(a, b, c)| {
            Args::Triple(a, b, c)
        })(input)?,
    };
    Ok((input, (token, args)))
}

/// Either `(args)` directly after the token, or whitespace then `args`.
fn arguments<'a, O, F>(mut inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    move |input: &'a str| {
        let trimmed = input.trim_start();
        if let Some(rest) = trimmed.strip_prefix('(') {
            let (rest, _) = multispace0(rest)?;
            let (rest, out) = inner(rest)?;
            let (rest, _) = pair(multispace0, char(')'))(rest)?;
            Ok((rest, out))
        } else {
            let (rest, _) = multispace1(input)?;
            inner(rest)
        }
    }
}

fn hex_literal(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(char('#')), alphanumeric1))(input)
}

/// Three numbers separated by commas and/or whitespace.
fn components(input: &str, percent: bool) -> IResult<&str, (f64, f64, f64)> {
    tuple((
        |i| component(i, percent),
        preceded(separator, |i| component(i, percent)),
        preceded(separator, |i| component(i, percent)),
    ))(input)
}

fn component(input: &str, percent: bool) -> IResult<&str, f64> {
    let (input, number) = parse_number(input)?;
    if percent {
        let (input, _) = opt(char('%'))(input)?;
        Ok((input, number))
    } else {
        Ok((input, number))
    }
}

fn separator(input: &str) -> IResult<&str, ()> {
    alt((
        value((), delimited(multispace0, char(','), multispace0)),
        value((), multispace1),
    ))(input)
}

/// Parse a floating point or integer number (`12`, `-3`, `0.5`, `.5`).
fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(pair(
            opt(char('-')),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), opt(digit1))))),
                recognize(pair(char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f64>(),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_detection() {
        assert_eq!(
            parse_color_input("#abc").unwrap(),
            ParsedColor::Hex("#abc".into())
        );
        assert!(matches!(
            parse_color_input("#xyz"),
            Err(ColorError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_named_wins_over_tokens() {
        assert_eq!(
            parse_color_input("red").unwrap(),
            ParsedColor::Named("red".into())
        );
    }

    #[test]
    fn test_named_is_case_sensitive() {
        assert!(matches!(
            parse_color_input("Red"),
            Err(ColorError::UnrecognizedInput(_))
        ));
    }

    #[test]
    fn test_default_rgb_triple() {
        let expected = ParsedColor::Rgb(Rgb::new(255.0, 0.0, 0.0));
        assert_eq!(parse_color_input("255 0 0").unwrap(), expected);
        assert_eq!(parse_color_input("255,0,0").unwrap(), expected);
        assert_eq!(parse_color_input(" 255 , 0 , 0 ").unwrap(), expected);
    }

    #[test]
    fn test_tokens_case_insensitive() {
        let expected = ParsedColor::Hsl(Hsl::new(0.0, 100.0, 50.0));
        assert_eq!(parse_color_input("hsl 0 100 50").unwrap(), expected);
        assert_eq!(parse_color_input("HSL 0 100 50").unwrap(), expected);
        assert_eq!(parse_color_input("Hsl(0, 100%, 50%)").unwrap(), expected);
    }

    #[test]
    fn test_hsv_and_hex_tokens() {
        assert_eq!(
            parse_color_input("hsv(0.5, 1, .25)").unwrap(),
            ParsedColor::Hsv(Hsv::new(0.5, 1.0, 0.25))
        );
        assert_eq!(
            parse_color_input("hex abc").unwrap(),
            ParsedColor::Hex("abc".into())
        );
        assert_eq!(
            parse_color_input("hex(#a0b0c0)").unwrap(),
            ParsedColor::Hex("#a0b0c0".into())
        );
    }

    #[test]
    fn test_component_ranges() {
        assert!(matches!(
            parse_color_input("rgb 256 0 0"),
            Err(ColorError::InvalidComponent { space: "rgb", .. })
        ));
        assert!(matches!(
            parse_color_input("hsv 0 2 1"),
            Err(ColorError::InvalidComponent { space: "hsv", .. })
        ));
        assert!(matches!(
            parse_color_input("hsl 0 101 50"),
            Err(ColorError::InvalidComponent { space: "hsl", .. })
        ));
    }

    #[test]
    fn test_lenient_keeps_unchecked_values() {
        assert_eq!(
            parse_color_lenient("rgb 300 0 0").unwrap(),
            ParsedColor::Rgb(Rgb::new(300.0, 0.0, 0.0))
        );
        assert_eq!(
            parse_color_lenient("-5, 0, 0").unwrap(),
            ParsedColor::Rgb(Rgb::new(-5.0, 0.0, 0.0))
        );
        assert_eq!(
            parse_color_lenient("hsl 0 150 50").unwrap(),
            ParsedColor::Hsl(Hsl::new(0.0, 150.0, 50.0))
        );
        assert_eq!(
            parse_color_lenient("hsv(0, 2, 1)").unwrap(),
            ParsedColor::Hsv(Hsv::new(0.0, 2.0, 1.0))
        );
        assert_eq!(
            parse_color_lenient("hex 12345").unwrap(),
            ParsedColor::Hex("12345".into())
        );
        assert_eq!(
            parse_color_lenient("#xyz").unwrap(),
            ParsedColor::Hex("#xyz".into())
        );
    }

    #[test]
    fn test_lenient_still_rejects_unknown_shapes() {
        for input in ["", "lab 50 0 0", "hsl 1 2", "Red"] {
            assert!(
                matches!(parse_color_lenient(input), Err(ColorError::UnrecognizedInput(_))),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_percent_only_for_hsl() {
        assert!(parse_color_input("rgb(100%, 0, 0)").is_err());
    }

    #[test]
    fn test_unrecognized() {
        for input in ["", "rgba(1, 2, 3, 4)", "hsl 1 2", "lab 50 0 0", "rgb255 0 0"] {
            assert!(
                matches!(parse_color_input(input), Err(ColorError::UnrecognizedInput(_))),
                "{input:?}"
            );
        }
    }
}
