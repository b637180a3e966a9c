//! A scalar that moves toward its target over time.
//!
//! `Transitionable` is sampled, not ticked: every read asks the clock for the
//! current time and computes the eased value for that instant. When a read
//! observes that the animation has run its full duration, the value snaps to
//! the target and the completion callback is released.
//!
//! ## Callback Rules
//!
//! - A `set` without a tween (or with a zero-length one) applies immediately
//!   and its callback fires before `set` returns.
//! - A callback fires at most once, after the value has settled on its target.
//! - A `set` issued while an animation is still running supersedes it. The new
//!   animation starts from the current instantaneous value and the superseded
//!   callback is dropped without firing.
//! - [`Transitionable::halt`] freezes the value where it is and drops the
//!   pending callback.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::clock::{self, Clock};
use crate::tween::Tween;

/// Completion callback for a transition.
pub type Callback = Box<dyn FnOnce()>;

struct Animation {
    from: f64,
    to: f64,
    start: Duration,
    tween: Tween,
    on_complete: Option<Callback>,
}

pub struct Transitionable {
    clock: Rc<dyn Clock>,
    value: f64,
    animation: Option<Animation>,
}

impl Transitionable {
    /// A value at rest, driven by the system clock.
    pub fn new(value: f64) -> Self {
        Self::with_clock(value, clock::system())
    }

    pub fn with_clock(value: f64, clock: Rc<dyn Clock>) -> Self {
        Self {
            clock,
            value,
            animation: None,
        }
    }

    /// Move toward `target`, instantly when `tween` is `None`.
    pub fn set(&mut self, target: f64, tween: Option<Tween>, on_complete: Option<Callback>) {
        for callback in self.begin(target, tween, on_complete) {
            callback();
        }
    }

    /// Current value, interpolated if an animation is in flight.
    pub fn get(&mut self) -> f64 {
        if let Some(callback) = self.advance() {
            callback();
        }
        self.value
    }

    pub fn is_active(&mut self) -> bool {
        if let Some(callback) = self.advance() {
            callback();
        }
        self.is_animating()
    }

    /// Stop at the current value. Pending callbacks are dropped.
    pub fn halt(&mut self) {
        if let Some(callback) = self.advance() {
            callback();
        }
        self.stop();
    }

    /// Where the value is heading: the animation target, or the resting value.
    pub fn target(&self) -> f64 {
        self.animation
            .as_ref()
            .map_or(self.value, |animation| animation.to)
    }

    /// Start a transition and hand back the callbacks that are due now.
    ///
    /// Callers that share the value behind a `RefCell` must release the
    /// borrow before invoking them.
    pub(crate) fn begin(
        &mut self,
        target: f64,
        tween: Option<Tween>,
        on_complete: Option<Callback>,
    ) -> Vec<Callback> {
        let mut due = Vec::new();
        due.extend(self.advance());

        if let Some(previous) = self.animation.take() {
            log::trace!(
                "superseding transition {} -> {} (callback dropped: {})",
                previous.from,
                previous.to,
                previous.on_complete.is_some()
            );
        }

        match tween.filter(|tween| !tween.is_instant()) {
            Some(tween) => {
                log::trace!("transition {} -> {} over {}", self.value, target, tween);
                self.animation = Some(Animation {
                    from: self.value,
                    to: target,
                    start: self.clock.now(),
                    tween,
                    on_complete,
                });
            }
            None => {
                self.value = target;
                due.extend(on_complete);
            }
        }

        due
    }

    /// Bring `value` up to date with the clock. Returns the completion
    /// callback if this call observed the animation settling.
    pub(crate) fn advance(&mut self) -> Option<Callback> {
        let animation = self.animation.as_ref()?;
        let elapsed = self.clock.now().saturating_sub(animation.start);

        if elapsed >= animation.tween.duration {
            let finished = self.animation.take()?;
            self.value = finished.to;
            log::trace!("transition settled at {}", finished.to);
            return finished.on_complete;
        }

        let t = elapsed.as_secs_f64() / animation.tween.duration.as_secs_f64();
        let progress = animation.tween.curve.apply(t);
        self.value = animation.from + (animation.to - animation.from) * progress;
        None
    }

    pub(crate) fn stop(&mut self) {
        if let Some(stopped) = self.animation.take() {
            log::trace!("transition halted at {} (target {})", self.value, stopped.to);
        }
    }

    pub(crate) fn value(&self) -> f64 {
        self.value
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.animation.is_some()
    }
}

impl fmt::Debug for Transitionable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transitionable")
            .field("value", &self.value)
            .field("target", &self.target())
            .field("active", &self.animation.is_some())
            .finish()
    }
}
