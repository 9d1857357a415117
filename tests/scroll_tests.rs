// Host-side tests for pinned-range progress, entrance edges and smooth scrolling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod choreography {
        include!("../src/core/choreography.rs");
    }
    pub mod framing {
        include!("../src/core/framing.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
}

use crate::core::framing::Viewport;
use crate::core::scroll::*;

struct FakeWindow {
    y: f64,
}

impl ScrollSource for FakeWindow {
    fn scroll_y(&self) -> f64 {
        self.y
    }
    fn viewport(&self) -> Viewport {
        Viewport::new(1200.0, 800.0)
    }
}

#[test]
fn progress_spans_the_pinned_distance() {
    let r = PinnedRange::new(1000.0, 3000.0);
    assert_eq!(r.progress(0.0).value(), 0.0);
    assert_eq!(r.progress(1000.0).value(), 0.0);
    assert_eq!(r.progress(2500.0).value(), 0.5);
    assert_eq!(r.progress(4000.0).value(), 1.0);
    assert_eq!(r.progress(9000.0).value(), 1.0);
}

#[test]
fn progress_is_monotonic_in_scroll_position() {
    let r = PinnedRange::new(400.0, 3000.0);
    let mut prev = r.progress(0.0);
    for y in (0..5000).step_by(25) {
        let p = r.progress(y as f64);
        assert!(p >= prev);
        prev = p;
    }
}

#[test]
fn pin_offset_holds_section_in_place() {
    let r = PinnedRange::new(1000.0, 3000.0);
    assert_eq!(r.pin_offset(500.0), 0.0);
    assert_eq!(r.pin_offset(2000.0), 1000.0);
    assert_eq!(r.pin_offset(9000.0), 3000.0);
    assert!(r.is_pinned(1000.0) && r.is_pinned(4000.0));
    assert!(!r.is_pinned(999.0) && !r.is_pinned(4001.0));
}

#[test]
fn zero_distance_does_not_divide_by_zero() {
    let r = PinnedRange::new(100.0, 0.0);
    assert_eq!(r.progress(100.0).value(), 0.0);
    assert_eq!(r.progress(200.0).value(), 1.0);
}

#[test]
fn entrance_fires_once_per_crossing() {
    let mut t = EntranceTrigger::new(200.0);
    assert_eq!(t.update(0.0), None);
    assert_eq!(t.update(250.0), Some(Edge::Enter));
    assert_eq!(t.update(300.0), None);
    assert!(t.is_entered());
    assert_eq!(t.update(100.0), Some(Edge::LeaveBack));
    assert_eq!(t.update(50.0), None);
    assert_eq!(t.update(200.0), Some(Edge::Enter));
}

#[test]
fn entrance_fires_immediately_when_loaded_past_the_line() {
    let mut t = EntranceTrigger::new(200.0);
    assert_eq!(t.update(5000.0), Some(Edge::Enter));
}

#[test]
fn controller_combines_progress_pin_and_entrance() {
    let vp = Viewport::new(1200.0, 800.0);
    let mut c = ScrollController::new(1000.0, 3000.0, 0.8, vp);

    let first = c.update(0.0);
    assert!(first.changed);
    assert_eq!(first.entrance, None);
    assert_eq!(first.pin_offset, 0.0);

    assert!(!c.update(0.0).changed);
    // section top reaches 80% of the viewport at 1000 - 640
    assert_eq!(c.update(359.0).entrance, None);
    assert_eq!(c.update(360.0).entrance, Some(Edge::Enter));

    let mid = c.update(2500.0);
    assert!(mid.changed);
    assert_eq!(mid.progress.value(), 0.5);
    assert_eq!(mid.pin_offset, 1500.0);

    assert_eq!(c.update(100.0).entrance, Some(Edge::LeaveBack));
}

#[test]
fn relayout_moves_range_and_entrance_line() {
    let mut c = ScrollController::new(1000.0, 3000.0, 0.8, Viewport::new(1200.0, 800.0));
    c.relayout(2000.0, Viewport::new(800.0, 1000.0));
    assert_eq!(c.range().start, 2000.0);
    assert_eq!(c.range().distance, 3000.0);
    assert_eq!(c.update(1199.0).entrance, None);
    assert_eq!(c.update(1200.0).entrance, Some(Edge::Enter));
    assert_eq!(c.update(3500.0).progress.value(), 0.5);
}

#[test]
fn controller_polls_a_scroll_source() {
    let mut c = ScrollController::new(0.0, 3000.0, 0.8, Viewport::new(1200.0, 800.0));
    let src = FakeWindow { y: 750.0 };
    assert_eq!(c.poll(&src).progress.value(), 0.25);
}

#[test]
fn wheel_modes_scale_to_pixels() {
    assert_eq!(WheelMode::from_dom(0).to_pixels(3.0, 800.0), 3.0);
    assert_eq!(WheelMode::from_dom(1).to_pixels(3.0, 800.0), 48.0);
    assert_eq!(WheelMode::from_dom(2).to_pixels(1.0, 800.0), 800.0);
}

#[test]
fn smooth_scroll_eases_toward_target_and_settles() {
    let mut s = SmoothScroll::new(0.0);
    s.on_wheel(100.0, 1000.0);
    assert!(s.is_animating());
    let first = s.step(1.0 / 60.0).expect("animating");
    assert!(first > 0.0 && first < 100.0);
    assert!((first - 100.0 * (1.0 - (-0.1f64).exp())).abs() < 1e-9);

    let mut steps = 0;
    while s.step(1.0 / 60.0).is_some() {
        steps += 1;
        assert!(steps < 1000, "never settled");
    }
    assert_eq!(s.current(), 100.0);
    assert!(!s.is_animating());
    assert_eq!(s.step(1.0 / 60.0), None);
}

#[test]
fn smooth_scroll_clamps_to_document() {
    let mut s = SmoothScroll::new(50.0);
    s.on_wheel(-500.0, 1000.0);
    assert_eq!(s.target(), 0.0);
    s.on_wheel(5000.0, 1000.0);
    assert_eq!(s.target(), 1000.0);
}

#[test]
fn native_scroll_syncs_only_when_idle() {
    let mut s = SmoothScroll::new(0.0);
    s.sync(400.0);
    assert_eq!(s.current(), 400.0);
    s.on_wheel(100.0, 1000.0);
    s.sync(0.0);
    assert_eq!(s.target(), 500.0);
}

#[test]
fn tiny_wheel_delta_jumps_without_animating() {
    let mut s = SmoothScroll::new(10.0);
    s.on_wheel(0.25, 1000.0);
    assert!(!s.is_animating());
    assert_eq!(s.current(), 10.25);
}
