//! Frame driver for sampled animations.
//!
//! Transitions advance only when they are read. [`settle`] reads a target once
//! per frame on a tokio interval until it reports idle, which is what makes
//! pending completion callbacks fire in async code.

use std::time::Duration;

use tokio::time::MissedTickBehavior;

/// Something that animates and can be sampled.
pub trait Animated {
    /// Sample the current time, firing any callbacks that are due.
    fn update(&self);

    /// Returns true while any part of the target is still moving.
    fn is_active(&self) -> bool;
}

impl<A: Animated> Animated for [A] {
    fn update(&self) {
        for item in self {
            item.update();
        }
    }

    fn is_active(&self) -> bool {
        // Sample everything so each item gets a chance to settle.
        self.iter().fold(false, |active, item| item.is_active() || active)
    }
}

/// Update `target` every `frame` until it is idle.
///
/// Returns the number of frames rendered. A target that is already idle
/// returns immediately with 0.
pub async fn settle<A: Animated + ?Sized>(target: &A, frame: Duration) -> usize {
    let mut ticker = tokio::time::interval(frame.max(Duration::from_millis(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut frames = 0;
    while target.is_active() {
        ticker.tick().await;
        target.update();
        frames += 1;
    }

    log::trace!("settled after {frames} frames");
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::channel::Channel;
    use crate::clock::{Clock, TokioClock};
    use crate::tween::Tween;

    #[tokio::test(start_paused = true)]
    async fn test_settle_runs_until_idle() {
        let channel = Channel::new(0.0, Rc::new(TokioClock::new()));
        channel.set(100.0, Some(Tween::millis(100)), None);

        let frames = settle(&channel, Duration::from_millis(10)).await;
        assert!((10..=12).contains(&frames), "frames = {frames}");
        assert_eq!(channel.get(), 100.0);
        assert!(!channel.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_idle_target() {
        let channel = Channel::new(5.0, Rc::new(TokioClock::new()));
        assert_eq!(settle(&channel, Duration::from_millis(16)).await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_slice_waits_for_slowest() {
        let clock = Rc::new(TokioClock::new());
        let channels = [
            Channel::new(0.0, clock.clone()),
            Channel::new(0.0, clock.clone()),
        ];
        channels[0].set(1.0, Some(Tween::millis(20)), None);
        channels[1].set(1.0, Some(Tween::millis(200)), None);

        settle(&channels[..], Duration::from_millis(10)).await;
        assert!(channels.iter().all(|channel| channel.get() == 1.0));
        assert!(clock.now() >= Duration::from_millis(200));
    }
}
