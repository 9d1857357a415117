// Host-side tests for tweens and CSS encoding.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod tween {
        include!("../src/core/tween.rs");
    }
    pub mod style {
        include!("../src/core/style.rs");
    }
}

use crate::core::style::*;
use crate::core::tween::*;

#[test]
fn eases_hit_their_endpoints() {
    for ease in [Ease::Linear, Ease::Power1Out, Ease::Power3Out] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(2.0), 1.0);
        assert_eq!(ease.apply(-1.0), 0.0);
    }
    assert_eq!(Ease::Power1Out.apply(0.5), 0.75);
    assert_eq!(Ease::Power3Out.apply(0.5), 0.9375);
}

#[test]
fn track_runs_tween_to_completion() {
    let mut t = TweenTrack::new(100.0);
    assert!(t.retarget(0.0, 0.0, 0.0, 1.0, Ease::Linear));
    assert_eq!(t.advance(0.5), Some(50.0));
    assert_eq!(t.advance(1.2), Some(0.0));
    assert!(!t.is_active());
    assert_eq!(t.advance(2.0), None);
}

#[test]
fn retarget_to_current_destination_is_a_no_op() {
    let mut t = TweenTrack::new(100.0);
    assert!(!t.retarget(100.0, 0.0, 0.0, 0.5, Ease::Power1Out));
    assert!(t.retarget(0.0, 0.0, 0.0, 0.5, Ease::Power1Out));
    assert!(!t.retarget(0.0, 0.1, 0.0, 0.5, Ease::Power1Out));
}

#[test]
fn retarget_overwrites_from_the_current_value() {
    let mut t = TweenTrack::new(0.0);
    t.retarget(100.0, 0.0, 0.0, 1.0, Ease::Linear);
    assert_eq!(t.advance(0.5), Some(50.0));
    t.retarget(0.0, 0.5, 0.0, 1.0, Ease::Linear);
    assert_eq!(t.destination(), 0.0);
    assert_eq!(t.advance(1.0), Some(25.0));
}

#[test]
fn delay_holds_the_value() {
    let mut t = TweenTrack::new(100.0);
    t.retarget(0.0, 0.0, 0.2, 1.0, Ease::Linear);
    assert_eq!(t.advance(0.1), None);
    assert_eq!(t.value(), 100.0);
    assert_eq!(t.advance(0.7), Some(50.0));
}

#[test]
fn set_cancels_running_tween() {
    let mut t = TweenTrack::new(0.0);
    t.retarget(100.0, 0.0, 0.0, 1.0, Ease::Linear);
    t.set(30.0);
    assert!(!t.is_active());
    assert_eq!(t.advance(0.5), None);
    assert_eq!(t.value(), 30.0);
}

#[test]
fn zero_duration_tween_jumps() {
    let mut t = TweenTrack::new(0.0);
    t.retarget(1.0, 0.0, 0.0, 0.0, Ease::Linear);
    assert_eq!(t.advance(0.0), Some(1.0));
}

#[test]
fn stagger_spreads_start_times() {
    let spec = TweenSpec::new(1.0, Ease::Power3Out).with_stagger(0.025);
    assert_eq!(spec.delay_for(0), 0.0);
    assert!((spec.delay_for(4) - 0.1).abs() < 1e-12);
    assert_eq!(TweenSpec::new(0.5, Ease::Power1Out).delay_for(9), 0.0);
}

#[test]
fn css_declarations() {
    let tx = StyleProperty::TranslateXPercent;
    assert_eq!(tx.css_name(), "transform");
    assert_eq!(tx.css_value(-100.0), "translateX(-100%)");
    assert_eq!(tx.css_value(-0.0), "translateX(0%)");
    assert_eq!(StyleProperty::TranslateYPercent.css_value(100.0), "translateY(100%)");
    assert_eq!(StyleProperty::ScaleXPercent.css_value(50.0), "scaleX(0.5)");
    assert_eq!(StyleProperty::TranslateYPx.css_value(1000.0), "translateY(1000px)");

    let clip = StyleProperty::ClipCircle;
    assert_eq!(clip.css_name(), "clip-path");
    assert_eq!(clip.css_value(100.0 / 3.0), "circle(33.3333% at 50% 50%)");
}
