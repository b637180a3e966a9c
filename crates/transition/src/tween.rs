//! Tween specs: how long a transition takes and how it eases.
//!
//! ## Text Syntax
//!
//! ```text
//! <number><unit> [curve]
//! ```
//!
//! `unit` is `ms` or `s`. The curve is any name accepted by
//! [`Curve::from_name`] and defaults to `linear`:
//!
//! ```
//! use std::time::Duration;
//! use transition::{Curve, Tween};
//!
//! let tween: Tween = "175ms ease-out".parse().unwrap();
//! assert_eq!(tween.duration, Duration::from_millis(175));
//! assert_eq!(tween.curve, Curve::EaseOut);
//!
//! assert_eq!(Tween::parse("1.5s").unwrap(), Tween::linear(Duration::from_millis(1500)));
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit1, multispace0, multispace1},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::{pair, preceded, tuple},
};

use crate::curve::Curve;
use crate::error::TweenParseError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tween {
    pub duration: Duration,
    pub curve: Curve,
}

impl Tween {
    pub fn new(duration: Duration, curve: Curve) -> Self {
        Self { duration, curve }
    }

    pub fn linear(duration: Duration) -> Self {
        Self::new(duration, Curve::Linear)
    }

    /// Linear tween lasting `ms` milliseconds.
    pub fn millis(ms: u64) -> Self {
        Self::linear(Duration::from_millis(ms))
    }

    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    /// A zero-length tween applies its target immediately.
    pub fn is_instant(&self) -> bool {
        self.duration.is_zero()
    }

    /// Parse a tween from text. See the module docs for the syntax.
    pub fn parse(input: &str) -> Result<Self, TweenParseError> {
        let trimmed = input.trim();
        let (_, (amount, unit, curve)) = all_consuming(spec)(trimmed)
            .map_err(|_| TweenParseError::InvalidSyntax(input.to_string()))?;

        let nanos = match unit {
            "ms" => amount * 1e6,
            _ => amount * 1e9,
        };
        if !(0.0..=u64::MAX as f64).contains(&nanos) {
            return Err(TweenParseError::DurationOutOfRange(format!("{amount}{unit}")));
        }
        let duration = Duration::from_nanos(nanos.round() as u64);

        let curve = match curve {
            Some(name) => {
                Curve::from_name(name).ok_or_else(|| TweenParseError::UnknownCurve(name.to_string()))?
            }
            None => Curve::Linear,
        };

        Ok(Self { duration, curve })
    }
}

impl FromStr for Tween {
    type Err = TweenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms {}", self.duration.as_millis(), self.curve)
    }
}

fn spec(input: &str) -> IResult<&str, (f64, &str, Option<&str>)> {
    tuple((
        preceded(multispace0, parse_number),
        alt((tag("ms"), tag("s"))),
        opt(preceded(multispace1, curve_name)),
    ))(input)
}

fn curve_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_')(input)
}

/// Parse a floating point or integer number.
fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}
