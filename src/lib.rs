//! Animated color values.
//!
//! This crate bundles the workspace:
//!
//! - [`chroma`]: stateless conversions between RGB, HSL, HSV, hex and CSS
//!   color names, plus a parser for textual color input
//! - [`transition`]: clock-driven tweened scalars, easing curves and the
//!   async frame driver
//! - [`tincture`]: the [`Color`] value object built on both
//!
//! ```
//! use tincture_rs::{Color, Transition};
//!
//! let color = Color::parse("rebeccapurple").unwrap();
//! assert_eq!(color.rgb(), [102.0, 51.0, 153.0]);
//!
//! color.set_lightness(100.0, Transition::instant());
//! assert_eq!(color.hex(), "#ffffff");
//! ```

pub use chroma;
pub use tincture;
pub use transition;

pub use tincture::{
    Color, ColorError, ColorInput, ColorValue, Completion, Curve, Space, Transition, Tween,
    init_logger,
};
