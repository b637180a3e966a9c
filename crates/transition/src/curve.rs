//! Easing curves.
//!
//! A curve maps linear progress `t` in 0..=1 to eased progress. Every curve
//! starts at 0 and ends at 1; [`Curve::OutBack`] overshoots in between.

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Curve {
    #[default]
    Linear,
    /// Quadratic acceleration.
    EaseIn,
    /// Quadratic deceleration.
    EaseOut,
    EaseInOut,
    InCubic,
    OutCubic,
    InOutCubic,
    OutBack,
    OutBounce,
}

impl Curve {
    pub const ALL: [Curve; 9] = [
        Curve::Linear,
        Curve::EaseIn,
        Curve::EaseOut,
        Curve::EaseInOut,
        Curve::InCubic,
        Curve::OutCubic,
        Curve::InOutCubic,
        Curve::OutBack,
        Curve::OutBounce,
    ];

    /// Eased progress for `t`, which is clamped to 0..=1 first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Curve::Linear => t,
            Curve::EaseIn => t * t,
            Curve::EaseOut => t * (2.0 - t),
            Curve::EaseInOut => {
                if t <= 0.5 {
                    2.0 * t * t
                } else {
                    -2.0 * t * t + 4.0 * t - 1.0
                }
            }
            Curve::InCubic => t * t * t,
            Curve::OutCubic => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Curve::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 * t - 2.0;
                    0.5 * u * u * u + 1.0
                }
            }
            Curve::OutBack => {
                const S: f64 = 1.70158;
                let u = t - 1.0;
                u * u * ((S + 1.0) * u + S) + 1.0
            }
            Curve::OutBounce => out_bounce(t),
        }
    }

    /// Kebab-case name, as accepted by [`Curve::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            Curve::Linear => "linear",
            Curve::EaseIn => "ease-in",
            Curve::EaseOut => "ease-out",
            Curve::EaseInOut => "ease-in-out",
            Curve::InCubic => "in-cubic",
            Curve::OutCubic => "out-cubic",
            Curve::InOutCubic => "in-out-cubic",
            Curve::OutBack => "out-back",
            Curve::OutBounce => "out-bounce",
        }
    }

    /// Look up a curve by name, ignoring case, `-` and `_`.
    ///
    /// `ease-in-out`, `ease_in_out` and `easeInOut` all resolve to
    /// [`Curve::EaseInOut`].
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize(name);
        Self::ALL
            .into_iter()
            .find(|curve| normalize(curve.name()) == wanted)
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn out_bounce(t: f64) -> f64 {
    const N: f64 = 7.5625;
    const D: f64 = 2.75;

    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let u = t - 1.5 / D;
        N * u * u + 0.75
    } else if t < 2.5 / D {
        let u = t - 2.25 / D;
        N * u * u + 0.9375
    } else {
        let u = t - 2.625 / D;
        N * u * u + 0.984375
    }
}
