//! Shared handle to a [`Transitionable`].
//!
//! `Channel` is the contract a color consumes: `set`, `get`, `is_active`.
//! Cloning a channel does not copy the value, it aliases it. Both handles read
//! and write the same underlying scalar.
//!
//! Callbacks run after the internal borrow is released, so a callback may
//! freely read or set the channel that completed.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::clock::Clock;
use crate::driver::Animated;
use crate::transitionable::{Callback, Transitionable};
use crate::tween::Tween;

#[derive(Clone)]
pub struct Channel {
    inner: Rc<RefCell<Transitionable>>,
}

impl Channel {
    pub fn new(value: f64, clock: Rc<dyn Clock>) -> Self {
        Self::from(Transitionable::with_clock(value, clock))
    }

    pub fn set(&self, target: f64, tween: Option<Tween>, on_complete: Option<Callback>) {
        let due = self.inner.borrow_mut().begin(target, tween, on_complete);
        fire(due);
    }

    pub fn get(&self) -> f64 {
        let (value, due) = {
            let mut inner = self.inner.borrow_mut();
            let due = inner.advance();
            (inner.value(), due)
        };
        fire(due);
        value
    }

    pub fn is_active(&self) -> bool {
        let (active, due) = {
            let mut inner = self.inner.borrow_mut();
            let due = inner.advance();
            (inner.is_animating(), due)
        };
        fire(due);
        active
    }

    /// Freeze at the current value and drop any pending callback.
    pub fn halt(&self) {
        let due = {
            let mut inner = self.inner.borrow_mut();
            let due = inner.advance();
            inner.stop();
            due
        };
        fire(due);
    }

    /// Target of the running animation, or the resting value.
    pub fn target(&self) -> f64 {
        self.inner.borrow().target()
    }

    /// Returns true if both handles point at the same scalar.
    pub fn ptr_eq(&self, other: &Channel) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<Transitionable> for Channel {
    fn from(scalar: Transitionable) -> Self {
        Self {
            inner: Rc::new(RefCell::new(scalar)),
        }
    }
}

impl Animated for Channel {
    fn update(&self) {
        self.get();
    }

    fn is_active(&self) -> bool {
        Channel::is_active(self)
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(inner) => fmt::Debug::fmt(&*inner, f),
            Err(_) => f.write_str("Channel(<borrowed>)"),
        }
    }
}

fn fire<I: IntoIterator<Item = Callback>>(due: I) {
    for callback in due {
        callback();
    }
}
