//! # Tincture - Animated Colors
//!
//! A mutable color value that accepts RGB, HSL, HSV, hex and CSS color names,
//! reads back in any of those spaces, and can tween between colors over time.
//!
//! - **Input**: [`ColorInput`] tags each accepted shape; text goes through
//!   [`ColorInput::parse`] or the permissive [`Color::set_str`]
//! - **Output**: [`Color::get`] with a [`Space`], or the direct accessors
//!   (`rgb`, `hsl`, `hsv`, `hex`, `hue`, `brightness`, ...)
//! - **Animation**: every setter takes a [`Transition`]; pass a [`Tween`] to
//!   animate and attach a callback with [`Transition::on_complete`]
//!
//! Conversions live in [`chroma`] and the animation engine in [`transition`].
//!
//! ## Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use std::time::Duration;
//! use tincture::{Color, ColorInput, ManualClock, Space, Transition, Tween};
//!
//! let clock = ManualClock::new();
//! let color = Color::with_clock(Rc::new(clock.clone()));
//!
//! color.set_str("#ff0000", Transition::instant());
//! assert_eq!(color.hsl(), [0.0, 100.0, 50.0]);
//!
//! color.set(ColorInput::parse("blue").unwrap(), Tween::parse("200ms").unwrap());
//! clock.advance(Duration::from_millis(100));
//! assert_eq!(color.get(Space::Hex).to_string(), "#800080");
//!
//! clock.advance(Duration::from_millis(100));
//! assert!(!color.is_active());
//! assert_eq!(color.get_color(Some("rgb")).components(), Some([0.0, 0.0, 255.0]));
//! ```
//!
//! ## Logging
//!
//! Dispatch decisions and ignored input are logged at `debug`, channel
//! activity at `trace`. [`init_logger`] installs a simple file logger.

mod animate;
pub mod color;
pub mod input;
mod log_init;

pub use animate::Transition;
pub use color::Color;
pub use input::{ColorInput, ColorValue, Space};
pub use log_init::init_logger;

pub use chroma::{ColorError, Hsl, Hsv, Rgb, clamp};
pub use transition::{Animated, Clock, Completion, Curve, ManualClock, TokioClock, Tween, settle};
