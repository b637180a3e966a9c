//! Clock-driven tweened scalars.
//!
//! This crate provides the animation primitive that colors are built on: a
//! scalar that moves toward a target over a [`Tween`], sampled lazily against
//! a [`Clock`], with an optional completion callback.
//!
//! - **Scalars**: [`Transitionable`] owns a value; [`Channel`] is a shared
//!   handle to one, so clones alias the same value
//! - **Timing**: [`Tween`] pairs a duration with an easing [`Curve`] and
//!   parses from text such as `"300ms ease-in-out"`
//! - **Completion**: [`Barrier`] joins several callbacks into one, and
//!   [`Completion`] turns a callback into a future
//! - **Driving**: [`settle`] samples an [`Animated`] target on a tokio
//!   interval until it goes idle
//!
//! ## Usage
//!
//! ```
//! use std::rc::Rc;
//! use std::time::Duration;
//! use transition::{Channel, ManualClock, Tween};
//!
//! let clock = ManualClock::new();
//! let channel = Channel::new(0.0, Rc::new(clock.clone()));
//! let alias = channel.clone();
//!
//! channel.set(200.0, Some(Tween::parse("100ms").unwrap()), None);
//! assert!(alias.is_active());
//!
//! clock.advance(Duration::from_millis(50));
//! assert_eq!(alias.get(), 100.0);
//!
//! clock.advance(Duration::from_millis(50));
//! assert_eq!(channel.get(), 200.0);
//! assert!(!channel.is_active());
//! ```

pub mod barrier;
pub mod channel;
pub mod clock;
pub mod completion;
pub mod curve;
pub mod driver;
pub mod error;
pub mod transitionable;
pub mod tween;

pub use barrier::Barrier;
pub use channel::Channel;
pub use clock::{Clock, ManualClock, SystemClock, TokioClock};
pub use completion::Completion;
pub use curve::Curve;
pub use driver::{Animated, settle};
pub use error::TweenParseError;
pub use transitionable::{Callback, Transitionable};
pub use tween::Tween;
