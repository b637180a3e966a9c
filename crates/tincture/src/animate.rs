//! How a setter applies its target: timing plus an optional completion.

use std::fmt;

use transition::{Callback, Tween};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Timing {
    /// Whatever the color's default tween says.
    #[default]
    Default,
    Instant,
    Tween(Tween),
}

/// Timing and completion for a single color change.
///
/// ```
/// use tincture::{Color, Transition, Tween};
///
/// let color = Color::new();
/// color.set_rgb(255.0, 0.0, 0.0, Transition::instant());
/// color.set_rgb(0.0, 0.0, 255.0, Tween::millis(300));
/// color.set_rgb(0.0, 255.0, 0.0, Transition::from(Tween::millis(300)).on_complete(|| {}));
/// assert!(color.is_active());
/// ```
#[derive(Default)]
pub struct Transition {
    pub(crate) timing: Timing,
    pub(crate) on_complete: Option<Callback>,
}

impl Transition {
    /// Apply immediately, ignoring the color's default tween.
    pub fn instant() -> Self {
        Self {
            timing: Timing::Instant,
            on_complete: None,
        }
    }

    pub fn tween(tween: Tween) -> Self {
        Self {
            timing: Timing::Tween(tween),
            on_complete: None,
        }
    }

    /// Run `callback` once every affected channel has settled.
    ///
    /// The callback is dropped unfired if the change is superseded or halted.
    pub fn on_complete<F: FnOnce() + 'static>(mut self, callback: F) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Resolve timing against a color's default tween.
    pub(crate) fn resolve(&self, default: Option<Tween>) -> Option<Tween> {
        match self.timing {
            Timing::Default => default,
            Timing::Instant => None,
            Timing::Tween(tween) => Some(tween),
        }
    }
}

impl From<Tween> for Transition {
    fn from(tween: Tween) -> Self {
        Self::tween(tween)
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("timing", &self.timing)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        let default = Some(Tween::millis(100));
        assert_eq!(Transition::default().resolve(default), default);
        assert_eq!(Transition::default().resolve(None), None);
        assert_eq!(Transition::instant().resolve(default), None);
        assert_eq!(
            Transition::from(Tween::millis(5)).resolve(default),
            Some(Tween::millis(5))
        );
    }

    #[test]
    fn test_debug_hides_callback() {
        let transition = Transition::instant().on_complete(|| {});
        insta::assert_snapshot!(
            format!("{transition:?}"),
            @"Transition { timing: Instant, on_complete: true }"
        );
    }
}
