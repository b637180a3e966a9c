//! Join barrier over several completion callbacks.
//!
//! A color animates three channels at once but exposes a single completion.
//! [`Barrier::join`] hands out one callback per channel and fires the joined
//! callback once every one of them has run, i.e. after the slowest channel
//! settles.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use transition::Barrier;
//!
//! let done = Rc::new(Cell::new(false));
//! let flag = done.clone();
//! let mut parts = Barrier::join(2, Box::new(move || flag.set(true)));
//!
//! let second = parts.pop().unwrap();
//! let first = parts.pop().unwrap();
//! first();
//! assert!(!done.get());
//! second();
//! assert!(done.get());
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::transitionable::Callback;

pub struct Barrier {
    remaining: Cell<usize>,
    on_complete: RefCell<Option<Callback>>,
}

impl Barrier {
    /// Split `on_complete` into `count` callbacks.
    ///
    /// With `count == 0` there is nothing to wait for and `on_complete` runs
    /// before this returns.
    pub fn join(count: usize, on_complete: Callback) -> Vec<Callback> {
        if count == 0 {
            on_complete();
            return Vec::new();
        }

        let barrier = Rc::new(Barrier {
            remaining: Cell::new(count),
            on_complete: RefCell::new(Some(on_complete)),
        });

        (0..count)
            .map(|_| {
                let barrier = barrier.clone();
                Box::new(move || barrier.arrive()) as Callback
            })
            .collect()
    }

    fn arrive(&self) {
        let remaining = self.remaining.get().saturating_sub(1);
        self.remaining.set(remaining);
        if remaining > 0 {
            return;
        }

        // Take before calling so the callback can start a new join.
        let on_complete = self.on_complete.borrow_mut().take();
        if let Some(on_complete) = on_complete {
            on_complete();
        }
    }
}
