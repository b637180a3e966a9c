//! Color Integration Tests
//!
//! Set/get dispatch, derived accessors, instance copy and animated changes.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tincture::{
    Clock, Color, ColorError, ColorInput, ColorValue, Hsl, ManualClock, Rgb, Space, TokioClock,
    Transition, Tween,
};

// =============================================================================
// Helpers
// =============================================================================

fn manual() -> (ManualClock, Color) {
    let clock = ManualClock::new();
    let color = Color::with_clock(Rc::new(clock.clone()));
    (clock, color)
}

fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
    let count = Rc::new(Cell::new(0));
    let inner = count.clone();
    (count, move || inner.set(inner.get() + 1))
}

/// Sets its flag when dropped.
struct DropFlag(Rc<Cell<bool>>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

fn drop_flag() -> (Rc<Cell<bool>>, DropFlag) {
    let dropped = Rc::new(Cell::new(false));
    (dropped.clone(), DropFlag(dropped))
}

fn assert_close(actual: [f64; 3], expected: [f64; 3]) {
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-9, "{actual:?} != {expected:?}");
    }
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn test_named_colors() {
    assert_eq!(Color::parse("red").unwrap().rgb(), [255.0, 0.0, 0.0]);
    assert_eq!(Color::parse("black").unwrap().rgb(), [0.0, 0.0, 0.0]);
    assert_eq!(Color::parse("white").unwrap().rgb(), [255.0, 255.0, 255.0]);
}

#[test]
fn test_tagged_text_input() {
    assert_eq!(Color::parse("hsl 0 100 50").unwrap().hex(), "#ff0000");
    assert_eq!(Color::parse("HSV(0.5, 1, 0.5)").unwrap().hex(), "#008080");
    assert_eq!(Color::parse("rgb(10, 20, 30)").unwrap().rgb(), [10.0, 20.0, 30.0]);
    assert_eq!(Color::parse("hex abc").unwrap().hex(), "#aabbcc");
    assert_eq!(Color::parse("255, 128, 0").unwrap().hex(), "#ff8000");
}

#[test]
fn test_hex_shorthand_matches_long_form() {
    let short = Color::parse("#abc").unwrap();
    let long = Color::parse("#aabbcc").unwrap();
    assert_eq!(short.rgb(), long.rgb());
}

#[test]
fn test_hex_to_hsl() {
    assert_close(Color::parse("#00ff00").unwrap().hsl(), [120.0, 100.0, 50.0]);
}

#[test]
fn test_strict_parse_errors() {
    assert!(matches!(
        Color::parse("chartreuse-ish"),
        Err(ColorError::UnrecognizedInput(_))
    ));
    assert!(matches!(Color::parse("#ggg"), Err(ColorError::InvalidHex(_))));
    assert!(matches!(
        Color::parse("rgb 300 0 0"),
        Err(ColorError::InvalidComponent { space: "rgb", .. })
    ));
}

#[test]
fn test_set_str_unrecognized_is_noop() {
    let color = Color::parse("teal").unwrap();
    color.set_str("definitely not a color", Transition::instant());
    assert_eq!(color.hex(), "#008080");
}

#[test]
fn test_set_str_malformed_hex_writes_nan() {
    let color = Color::parse("teal").unwrap();
    color.set_str("#zz8000", Transition::instant());
    let [r, g, b] = color.rgb();
    assert!(r.is_nan());
    assert_eq!((g, b), (128.0, 0.0));
}

#[test]
fn test_set_str_keeps_out_of_range_components() {
    let color = Color::parse("teal").unwrap();

    color.set_str("rgb 300 0 0", Transition::instant());
    assert_eq!(color.rgb(), [300.0, 0.0, 0.0]);

    color.set_str("-5, 0, 0", Transition::instant());
    assert_eq!(color.rgb(), [-5.0, 0.0, 0.0]);

    color.set_str("hsl 0 150 50", Transition::instant());
    assert_eq!(color.r(), 319.0);
    assert_eq!(color.rgb(), Hsl::new(0.0, 150.0, 50.0).to_rgb().to_array());
}

#[test]
fn test_set_str_tagged_malformed_hex_writes_nan_per_group() {
    let color = Color::parse("teal").unwrap();
    color.set_str("hex 12345", Transition::instant());
    let [r, g, b] = color.rgb();
    assert_eq!((r, g), (18.0, 52.0));
    assert!(b.is_nan());

    color.set_str("hex zz", Transition::instant());
    assert!(color.rgb().iter().all(|c| c.is_nan()));
}

#[test]
fn test_unknown_name_writes_nan() {
    let color = Color::new();
    color.set_named("notacolor", Transition::instant());
    assert!(color.rgb().iter().all(|c| c.is_nan()));
}

#[test]
fn test_set_dispatches_each_variant() {
    let color = Color::new();

    color.set(ColorInput::Rgb(Rgb::new(1.0, 2.0, 3.0)), Transition::instant());
    assert_eq!(color.rgb(), [1.0, 2.0, 3.0]);

    color.set(ColorInput::Hsl(Hsl::new(240.0, 100.0, 50.0)), Transition::instant());
    assert_eq!(color.hex(), "#0000ff");

    color.set(ColorInput::Hex("#0f0".into()), Transition::instant());
    assert_eq!(color.hex(), "#00ff00");

    color.set(ColorInput::Named("navy".into()), Transition::instant());
    assert_eq!(color.hex(), "#000080");
}

#[test]
fn test_get_dispatch() {
    let color = Color::parse("red").unwrap();

    assert_eq!(color.get(Space::Hex), ColorValue::Hex("#ff0000".into()));
    assert_eq!(color.get_color(Some("HSL")), ColorValue::Hsl([0.0, 100.0, 50.0]));
    assert_eq!(color.get_color(Some("hsv")), ColorValue::Hsv([0.0, 1.0, 1.0]));
    assert_eq!(color.get_color(Some("cmyk")), ColorValue::Rgb([255.0, 0.0, 0.0]));
    assert_eq!(color.get_color(None), ColorValue::Rgb([255.0, 0.0, 0.0]));

    insta::assert_snapshot!(color.get(Space::Hsl).to_string(), @"hsl(0, 100%, 50%)");
}

// =============================================================================
// Derived Accessors
// =============================================================================

#[test]
fn test_achromatic_hsl() {
    let color = Color::new();
    color.set_hsl(200.0, 0.0, 50.0, Transition::instant());
    assert_eq!(color.rgb(), [128.0, 128.0, 128.0]);
    assert_eq!(color.hue(), 0.0);
    assert_eq!(color.saturation(), 0.0);
}

#[test]
fn test_brightness_vs_lightness() {
    let color = Color::parse("red").unwrap();
    assert_eq!(color.brightness(), 100.0);
    assert_eq!(color.lightness(), 50.0);
}

#[test]
fn test_normalized_rgb() {
    let color = Color::parse("#ff0033").unwrap();
    assert_close(color.normalized_rgb(), [1.0, 0.0, 0.2]);
}

#[test]
fn test_hsv_output_is_unit_range() {
    let color = Color::parse("teal").unwrap();
    let [h, s, v] = color.hsv();
    assert!((h - 0.5).abs() < 1e-9);
    assert_eq!(s, 1.0);
    assert!((v - 128.0 / 255.0).abs() < 1e-9);
}

#[test]
fn test_hsv_input_is_not_rounded() {
    let color = Color::new();
    color.set_hsv(0.5, 1.0, 0.5, Transition::instant());
    assert_eq!(color.rgb(), [0.0, 127.5, 127.5]);
    assert_eq!(color.hex(), "#008080");
}

#[test]
fn test_clamp_is_never_automatic() {
    let color = Color::new();
    color.set_rgb(300.0, -5.0, 0.0, Transition::instant());
    assert_eq!(color.rgb(), [300.0, -5.0, 0.0]);
    assert_eq!(tincture::clamp(color.r(), 0.0, 255.0), 255.0);
}

// =============================================================================
// Animation
// =============================================================================

#[test]
fn test_animated_set_interpolates() {
    let (clock, color) = manual();
    color.set_rgb(100.0, 200.0, 50.0, Tween::millis(100));

    assert!(color.is_active());
    clock.advance(Duration::from_millis(50));
    assert_eq!(color.rgb(), [50.0, 100.0, 25.0]);

    clock.advance(Duration::from_millis(50));
    assert_eq!(color.rgb(), [100.0, 200.0, 50.0]);
    assert!(!color.is_active());
}

#[test]
fn test_is_active_is_any_channel() {
    let (clock, color) = manual();
    color.set_b(255.0, Tween::millis(100));
    assert!(color.is_active());

    clock.advance(Duration::from_millis(100));
    assert!(!color.is_active());

    color.set_r(255.0, Tween::millis(10));
    color.set_g(255.0, Tween::millis(30));
    clock.advance(Duration::from_millis(20));
    assert!(color.is_active());
    clock.advance(Duration::from_millis(10));
    assert!(!color.is_active());
}

#[test]
fn test_composite_callback_fires_once_after_slowest_channel() {
    let (clock, color) = manual();
    let (count, callback) = counter();

    color.set_rgb(
        255.0,
        0.0,
        0.0,
        Transition::from(Tween::millis(100)).on_complete(callback),
    );
    color.set_g(10.0, Tween::millis(10));

    clock.advance(Duration::from_millis(100));
    color.update();
    assert_eq!(count.get(), 0, "superseded green part keeps the join open");

    let (count, callback) = counter();
    color.set_rgb(0.0, 0.0, 0.0, Transition::from(Tween::millis(40)).on_complete(callback));
    clock.advance(Duration::from_millis(39));
    color.update();
    assert_eq!(count.get(), 0);

    clock.advance(Duration::from_millis(1));
    color.update();
    color.update();
    assert_eq!(count.get(), 1);
}

#[test]
fn test_instant_callback_fires_synchronously() {
    let color = Color::new();
    let (count, callback) = counter();
    color.set_named("gold", Transition::instant().on_complete(callback));
    assert_eq!(count.get(), 1);
    assert_eq!(color.hex(), "#ffd700");
}

#[test]
fn test_halt_freezes_color() {
    let (clock, color) = manual();
    let (count, callback) = counter();
    color.set_rgb(
        200.0,
        200.0,
        200.0,
        Transition::from(Tween::millis(100)).on_complete(callback),
    );

    clock.advance(Duration::from_millis(25));
    color.halt();
    clock.advance(Duration::from_millis(100));
    assert_eq!(color.rgb(), [50.0, 50.0, 50.0]);
    assert!(!color.is_active());
    assert_eq!(count.get(), 0);
}

// =============================================================================
// Instance Copy
// =============================================================================

#[test]
fn test_from_color_aliases_after_completion() {
    let clock = ManualClock::new();
    let shared: Rc<dyn Clock> = Rc::new(clock.clone());
    let a = Color::with_clock(shared.clone());
    let b = Color::with_clock(shared);
    b.set_named("orange", Transition::instant());

    a.from_color(&b, Tween::millis(50));
    assert!(!a.shares_channels(&b));

    clock.advance(Duration::from_millis(50));
    assert_eq!(a.hex(), "#ffa500");
    assert!(a.shares_channels(&b));

    b.set_r(10.0, Transition::instant());
    assert_eq!(a.r(), 10.0);

    a.set_b(77.0, Transition::instant());
    assert_eq!(b.b(), 77.0);
}

#[test]
fn test_from_color_runs_user_callback_after_swap() {
    let a = Color::new();
    let b = Color::parse("purple").unwrap();
    let (count, callback) = counter();

    a.set(ColorInput::Instance(&b), Transition::instant().on_complete(callback));
    assert_eq!(count.get(), 1);
    assert!(a.shares_channels(&b));
}

#[test]
fn test_from_color_superseded_never_aliases() {
    let clock = ManualClock::new();
    let shared: Rc<dyn Clock> = Rc::new(clock.clone());
    let a = Color::with_clock(shared.clone());
    let b = Color::with_clock(shared);

    a.from_color(&b, Tween::millis(50));
    a.set_rgb(1.0, 1.0, 1.0, Transition::instant());
    clock.advance(Duration::from_millis(100));
    a.update();

    assert!(!a.shares_channels(&b));
    assert_eq!(a.rgb(), [1.0, 1.0, 1.0]);
}

#[test]
fn test_from_self_is_harmless() {
    let color = Color::parse("pink").unwrap();
    color.from_color(&color, Transition::instant());
    assert_eq!(color.hex(), "#ffc0cb");
}

#[test]
fn test_clock_is_the_construction_clock_after_aliasing() {
    let (clock_a, a) = manual();
    let (clock_b, b) = manual();
    let own = a.clock();

    a.from_color(&b, Transition::instant());
    assert!(a.shares_channels(&b));
    assert!(Rc::ptr_eq(&own, &a.clock()));

    a.set_r(100.0, Tween::millis(100));
    clock_a.advance(Duration::from_millis(100));
    assert_eq!(a.r(), 0.0, "aliased channels ignore the construction clock");

    clock_b.advance(Duration::from_millis(100));
    assert_eq!(a.r(), 100.0);
}

#[test]
fn test_pending_self_copy_drops_callback_with_color() {
    let (_clock, color) = manual();
    let (dropped, flag) = drop_flag();

    color.from_color(
        &color,
        Transition::from(Tween::millis(100)).on_complete(move || drop(flag)),
    );
    assert!(!dropped.get());

    drop(color);
    assert!(dropped.get());
}

#[test]
fn test_pending_mutual_copy_drops_callbacks_with_colors() {
    let clock = ManualClock::new();
    let shared: Rc<dyn Clock> = Rc::new(clock);
    let a = Color::with_clock(shared.clone());
    let b = Color::with_clock(shared);
    let (a_dropped, a_flag) = drop_flag();
    let (b_dropped, b_flag) = drop_flag();

    a.from_color(&b, Transition::from(Tween::millis(100)).on_complete(move || drop(a_flag)));
    b.from_color(&a, Transition::from(Tween::millis(100)).on_complete(move || drop(b_flag)));

    drop(a);
    drop(b);
    assert!(a_dropped.get());
    assert!(b_dropped.get());
}

#[test]
fn test_from_dropped_source_keeps_own_channels() {
    let (clock, a) = manual();
    let b = Color::with_clock(Rc::new(clock.clone()));
    b.set_named("lime", Transition::instant());
    let (count, callback) = counter();

    a.from_color(&b, Transition::from(Tween::millis(50)).on_complete(callback));
    drop(b);
    clock.advance(Duration::from_millis(50));
    a.update();

    assert_eq!(a.hex(), "#00ff00");
    assert_eq!(count.get(), 1);
    a.set_r(9.0, Transition::instant());
    assert_eq!(a.r(), 9.0);
}

// =============================================================================
// Async Completion
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_change_to_resolves_under_settle() {
    let color = Color::with_clock(Rc::new(TokioClock::new()));

    let done = color.change_to(
        ColorInput::parse("hsl(240, 100%, 50%)").unwrap(),
        Tween::parse("250ms ease-in-out").unwrap(),
    );
    let frames = tincture::settle(&color, Duration::from_millis(16)).await;

    assert!(frames > 0);
    assert!(done.await);
    assert_eq!(color.hex(), "#0000ff");
}

#[tokio::test(start_paused = true)]
async fn test_change_to_superseded_resolves_false() {
    let color = Color::with_clock(Rc::new(TokioClock::new()));

    let first = color.change_to(ColorInput::Named("red".into()), Tween::millis(100));
    let second = color.change_to(ColorInput::Named("lime".into()), Tween::millis(100));
    tincture::settle(&color, Duration::from_millis(10)).await;

    let (first, second) = futures::join!(first, second);
    assert!(!first);
    assert!(second);
    assert_eq!(color.hex(), "#00ff00");
}
