//! The animated color value.
//!
//! A [`Color`] is three [`Channel`]s (red, green, blue) on a shared clock.
//! Every setter normalizes its input to RGB and pushes one target per
//! channel. Every getter samples the channels and converts on demand, so
//! reads in the middle of an animation see the interpolated color.
//!
//! ## Completion
//!
//! Composite setters attach their callback to a join barrier over all three
//! channel completions. It fires once, after the slowest channel settles.
//! Setting a channel again before then supersedes that channel's part and the
//! joined callback never fires.
//!
//! ## Instance Copy
//!
//! [`Color::from_color`] animates toward the source's current RGB. When the
//! copy settles the target adopts the source's channel handles, so the two
//! colors share state afterwards:
//!
//! ```
//! use tincture::{Color, Transition};
//!
//! let a = Color::parse("red").unwrap();
//! let b = Color::parse("blue").unwrap();
//!
//! a.from_color(&b, Transition::instant());
//! b.set_r(10.0, Transition::instant());
//! assert_eq!(a.r(), 10.0);
//! ```

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use chroma::{ColorError, Hsl, Hsv, Rgb};
use transition::{Animated, Barrier, Callback, Channel, Clock, Completion, Tween};

use crate::animate::Transition;
use crate::input::{ColorInput, ColorValue, Space};

type Channels = Rc<RefCell<[Channel; 3]>>;

pub struct Color {
    channels: Channels,
    clock: Rc<dyn Clock>,
    default_tween: Cell<Option<Tween>>,
}

impl Color {
    /// Black, on the system clock.
    pub fn new() -> Self {
        Self::with_clock(transition::clock::system())
    }

    /// Black, driven by `clock`.
    pub fn with_clock(clock: Rc<dyn Clock>) -> Self {
        let channels = [0, 1, 2].map(|_| Channel::new(0.0, clock.clone()));
        Self {
            channels: Rc::new(RefCell::new(channels)),
            clock,
            default_tween: Cell::new(None),
        }
    }

    /// A color set immediately from `input`.
    pub fn from_input(input: ColorInput<'_>) -> Self {
        let color = Self::new();
        color.set(input, Transition::instant());
        color
    }

    /// Parse `input` strictly and build a color from it.
    ///
    /// ```
    /// use tincture::Color;
    ///
    /// assert_eq!(Color::parse("hsl 0 100 50").unwrap().hex(), "#ff0000");
    /// assert!(Color::parse("no such color").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        ColorInput::parse(input).map(Self::from_input)
    }

    /// Returns true if `value` is a [`Color`].
    pub fn is_color_instance(value: &dyn Any) -> bool {
        value.is::<Color>()
    }

    /// The clock this color was created with.
    ///
    /// After [`Color::from_color`] settles, the channels belong to the source
    /// and run on the source's clock, which this does not reflect.
    pub fn clock(&self) -> Rc<dyn Clock> {
        self.clock.clone()
    }

    /// Tween used by setters that pass [`Transition::default()`].
    pub fn set_default_tween(&self, tween: Option<Tween>) -> &Self {
        self.default_tween.set(tween);
        self
    }

    pub fn default_tween(&self) -> Option<Tween> {
        self.default_tween.get()
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Set the color from any accepted input.
    pub fn set(&self, input: ColorInput<'_>, transition: impl Into<Transition>) -> &Self {
        let transition = transition.into();
        log::debug!("set {input:?} ({transition:?})");
        match input {
            ColorInput::Rgb(rgb) => self.set_rgb(rgb.r, rgb.g, rgb.b, transition),
            ColorInput::Hsl(hsl) => self.set_hsl(hsl.h, hsl.s, hsl.l, transition),
            ColorInput::Hsv(hsv) => self.set_hsv(hsv.h, hsv.s, hsv.v, transition),
            ColorInput::Hex(hex) => self.set_hex(&hex, transition),
            ColorInput::Named(name) => self.set_named(&name, transition),
            ColorInput::Instance(source) => self.from_color(source, transition),
        }
    }

    /// Set the color from text, doing nothing if the text is not a color.
    ///
    /// Recognised shapes are applied without range or digit checks, so
    /// `rgb 300 0 0` sets an out-of-range red and malformed hex produces NaN
    /// channels, exactly as the matching setter would.
    pub fn set_str(&self, input: &str, transition: impl Into<Transition>) -> &Self {
        match ColorInput::parse_lenient(input) {
            Ok(parsed) => self.set(parsed, transition),
            Err(err) => {
                log::debug!("ignoring color input {input:?}: {err}");
                self
            }
        }
    }

    /// Animate to `input` and return a future that resolves when it settles.
    ///
    /// The future resolves to `false` if the change is superseded or halted.
    /// Something must keep sampling the color, see [`transition::settle`].
    pub fn change_to(&self, input: ColorInput<'_>, tween: Tween) -> Completion {
        let (callback, completion) = Completion::new();
        self.set(
            input,
            Transition {
                on_complete: Some(callback),
                ..Transition::from(tween)
            },
        );
        completion
    }

    /// Read the color in `space`.
    pub fn get(&self, space: Space) -> ColorValue {
        match space {
            Space::Rgb => ColorValue::Rgb(self.rgb()),
            Space::Hsl => ColorValue::Hsl(self.hsl()),
            Space::Hex => ColorValue::Hex(self.hex()),
            Space::Hsv => ColorValue::Hsv(self.hsv()),
        }
    }

    /// Read the color by token. Unknown or missing tokens read RGB.
    pub fn get_color(&self, token: Option<&str>) -> ColorValue {
        let space = token.and_then(Space::from_token).unwrap_or_default();
        self.get(space)
    }

    // ------------------------------------------------------------------
    // Setters
    // ------------------------------------------------------------------

    pub fn set_rgb(&self, r: f64, g: f64, b: f64, transition: impl Into<Transition>) -> &Self {
        self.apply(Rgb::new(r, g, b), transition.into());
        self
    }

    /// Hue in degrees, saturation and lightness in percent.
    pub fn set_hsl(&self, h: f64, s: f64, l: f64, transition: impl Into<Transition>) -> &Self {
        self.apply(Hsl::new(h, s, l).to_rgb(), transition.into());
        self
    }

    /// Hue, saturation and value in 0..=1.
    pub fn set_hsv(&self, h: f64, s: f64, v: f64, transition: impl Into<Transition>) -> &Self {
        self.apply(Hsv::new(h, s, v).to_rgb(), transition.into());
        self
    }

    /// Set from hex digits. Malformed groups become NaN channels.
    pub fn set_hex(&self, hex: &str, transition: impl Into<Transition>) -> &Self {
        let rgb = Rgb::from_hex_lossy(hex);
        if rgb.is_nan() {
            log::debug!("malformed hex {hex:?} resolved to {rgb:?}");
        }
        self.apply(rgb, transition.into());
        self
    }

    /// Set from the named-color table. Unknown names set all channels to NaN.
    pub fn set_named(&self, name: &str, transition: impl Into<Transition>) -> &Self {
        let rgb = Rgb::from_named_lossy(name);
        if rgb.is_nan() {
            log::debug!("unknown color name {name:?}");
        }
        self.apply(rgb, transition.into());
        self
    }

    pub fn set_r(&self, r: f64, transition: impl Into<Transition>) -> &Self {
        self.apply_channel(0, r, transition.into());
        self
    }

    pub fn set_g(&self, g: f64, transition: impl Into<Transition>) -> &Self {
        self.apply_channel(1, g, transition.into());
        self
    }

    pub fn set_b(&self, b: f64, transition: impl Into<Transition>) -> &Self {
        self.apply_channel(2, b, transition.into());
        self
    }

    /// Change the hue, keeping the current saturation and lightness.
    pub fn set_hue(&self, h: f64, transition: impl Into<Transition>) -> &Self {
        let [_, s, l] = self.hsl();
        self.set_hsl(h, s, l, transition)
    }

    /// Change the saturation, keeping the current hue and lightness.
    pub fn set_saturation(&self, s: f64, transition: impl Into<Transition>) -> &Self {
        let [h, _, l] = self.hsl();
        self.set_hsl(h, s, l, transition)
    }

    /// Change the lightness, keeping the current hue and saturation.
    pub fn set_lightness(&self, l: f64, transition: impl Into<Transition>) -> &Self {
        let [h, s, _] = self.hsl();
        self.set_hsl(h, s, l, transition)
    }

    /// Copy `source`, then share its channels.
    ///
    /// The target animates to the source's current RGB. Once all three
    /// channels settle, the target's channel handles are replaced by the
    /// source's handles as they are at that moment, and any completion
    /// callback runs after the swap. If the source has been dropped by then
    /// the target keeps its own channels.
    pub fn from_color(&self, source: &Color, transition: impl Into<Transition>) -> &Self {
        let mut transition = transition.into();
        let user_callback = transition.on_complete.take();
        let target: Weak<RefCell<[Channel; 3]>> = Rc::downgrade(&self.channels);
        let source_channels = Rc::downgrade(&source.channels);

        transition.on_complete = Some(Box::new(move || {
            if let (Some(target), Some(source)) = (target.upgrade(), source_channels.upgrade()) {
                let handles = source.borrow().clone();
                *target.borrow_mut() = handles;
                log::trace!("color now aliases its copy source");
            }
            if let Some(callback) = user_callback {
                callback();
            }
        }));

        self.apply(source.sample(), transition);
        self
    }

    // ------------------------------------------------------------------
    // Getters
    // ------------------------------------------------------------------

    /// Current channel values.
    pub fn sample(&self) -> Rgb {
        let [r, g, b] = self.handles().map(|channel| channel.get());
        Rgb::new(r, g, b)
    }

    pub fn rgb(&self) -> [f64; 3] {
        self.sample().to_array()
    }

    pub fn r(&self) -> f64 {
        self.handle(0).get()
    }

    pub fn g(&self) -> f64 {
        self.handle(1).get()
    }

    pub fn b(&self) -> f64 {
        self.handle(2).get()
    }

    /// Channels divided by 255.
    pub fn normalized_rgb(&self) -> [f64; 3] {
        self.sample().normalized()
    }

    /// `#rrggbb`, lowercase, channels rounded.
    pub fn hex(&self) -> String {
        self.sample().to_hex()
    }

    /// `[hue in degrees, saturation %, lightness %]`.
    pub fn hsl(&self) -> [f64; 3] {
        self.sample().to_hsl().to_array()
    }

    /// `[hue, saturation, value]`, each in 0..=1.
    pub fn hsv(&self) -> [f64; 3] {
        self.sample().to_hsv().to_array()
    }

    pub fn hue(&self) -> f64 {
        self.hsl()[0]
    }

    pub fn saturation(&self) -> f64 {
        self.hsl()[1]
    }

    pub fn lightness(&self) -> f64 {
        self.sample().lightness()
    }

    /// Largest normalized channel, in percent.
    pub fn brightness(&self) -> f64 {
        self.sample().brightness()
    }

    // ------------------------------------------------------------------
    // Animation control
    // ------------------------------------------------------------------

    /// Returns true while any channel is animating.
    pub fn is_active(&self) -> bool {
        self.handles()
            .iter()
            .fold(false, |active, channel| channel.is_active() || active)
    }

    /// Sample every channel, firing callbacks that are due.
    pub fn update(&self) {
        for channel in self.handles() {
            channel.get();
        }
    }

    /// Freeze every channel where it is and drop pending callbacks.
    pub fn halt(&self) -> &Self {
        for channel in self.handles() {
            channel.halt();
        }
        self
    }

    /// Returns true if both colors read and write the same channels.
    pub fn shares_channels(&self, other: &Color) -> bool {
        let ours = self.handles();
        let theirs = other.handles();
        ours.iter().zip(&theirs).all(|(a, b)| a.ptr_eq(b))
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    // Handles are cloned out so no borrow is held while a channel runs a
    // callback that might swap them.
    fn handles(&self) -> [Channel; 3] {
        self.channels.borrow().clone()
    }

    fn handle(&self, index: usize) -> Channel {
        self.channels.borrow()[index].clone()
    }

    fn apply(&self, rgb: Rgb, transition: Transition) {
        let tween = transition.resolve(self.default_tween.get());
        let parts: Vec<Option<Callback>> = match transition.on_complete {
            Some(callback) => Barrier::join(3, callback).into_iter().map(Some).collect(),
            None => vec![None, None, None],
        };

        log::trace!("rgb -> {rgb:?} over {tween:?}");
        for ((channel, value), part) in self.handles().iter().zip(rgb.to_array()).zip(parts) {
            channel.set(value, tween, part);
        }
    }

    fn apply_channel(&self, index: usize, value: f64, transition: Transition) {
        let tween = transition.resolve(self.default_tween.get());
        self.handle(index).set(value, tween, transition.on_complete);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new()
    }
}

impl Animated for Color {
    fn update(&self) {
        Color::update(self);
    }

    fn is_active(&self) -> bool {
        Color::is_active(self)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channels = self.channels.try_borrow();
        match channels {
            Ok(channels) => f
                .debug_struct("Color")
                .field("r", &channels[0])
                .field("g", &channels[1])
                .field("b", &channels[2])
                .field("default_tween", &self.default_tween.get())
                .finish(),
            Err(_) => f.write_str("Color(<borrowed>)"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use transition::ManualClock;

    fn manual() -> (ManualClock, Color) {
        let clock = ManualClock::new();
        let color = Color::with_clock(Rc::new(clock.clone()));
        (clock, color)
    }

    #[test]
    fn test_new_is_black() {
        let color = Color::new();
        assert_eq!(color.rgb(), [0.0, 0.0, 0.0]);
        assert!(!color.is_active());
    }

    #[test]
    fn test_set_hue_keeps_saturation_and_lightness() {
        let color = Color::parse("red").unwrap();
        color.set_hue(120.0, Transition::instant());
        assert_eq!(color.rgb(), [0.0, 255.0, 0.0]);
    }

    #[test]
    fn test_set_saturation_to_zero_is_gray() {
        let color = Color::parse("red").unwrap();
        color.set_saturation(0.0, Transition::instant());
        assert_eq!(color.rgb(), [128.0, 128.0, 128.0]);
    }

    #[test]
    fn test_set_lightness_keeps_hue_and_saturation() {
        let color = Color::parse("red").unwrap();
        color.set_lightness(25.0, Transition::instant());
        assert_eq!(color.rgb(), [128.0, 0.0, 0.0]);
        assert_eq!(color.hue(), 0.0);
    }

    #[test]
    fn test_default_tween_applies_to_default_transition() {
        let (clock, color) = manual();
        color.set_default_tween(Some(Tween::millis(100)));

        color.set_rgb(200.0, 100.0, 0.0, Transition::default());
        assert!(color.is_active());
        clock.advance(Duration::from_millis(50));
        assert_eq!(color.rgb(), [100.0, 50.0, 0.0]);

        color.set_rgb(1.0, 2.0, 3.0, Transition::instant());
        assert!(!color.is_active());
        assert_eq!(color.rgb(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_single_channel_callback() {
        let (clock, color) = manual();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();

        color.set_g(
            255.0,
            Transition::from(Tween::millis(10)).on_complete(move || flag.set(true)),
        );
        assert_eq!(color.rgb(), [0.0, 0.0, 0.0]);
        clock.advance(Duration::from_millis(10));
        assert_eq!(color.g(), 255.0);
        assert!(fired.get());
    }

    #[test]
    fn test_is_color_instance() {
        let color = Color::new();
        assert!(Color::is_color_instance(&color));
        assert!(!Color::is_color_instance(&"red"));
        assert!(!Color::is_color_instance(&[255.0, 0.0, 0.0]));
    }

    #[test]
    fn test_display_and_debug() {
        let color = Color::parse("teal").unwrap();
        insta::assert_snapshot!(color.to_string(), @"#008080");
        insta::assert_snapshot!(
            format!("{color:?}"),
            @"Color { r: Transitionable { value: 0.0, target: 0.0, active: false }, g: Transitionable { value: 128.0, target: 128.0, active: false }, b: Transitionable { value: 128.0, target: 128.0, active: false }, default_tween: None }"
        );
    }
}
