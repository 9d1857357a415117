// Scroll progress to visual property mapping.
//
// `map` is pure: the same progress and trigger table always produce the same
// `VisualState`. Nothing is retained between calls.

use super::constants::*;
use smallvec::SmallVec;

/// Normalized position inside the pinned section, always within `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    pub const START: Self = Self(0.0);
    pub const END: Self = Self(1.0);

    /// Clamp any scalar into a valid progress. NaN maps to the start.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::START;
        }
        Self(value.clamp(0.0, 1.0))
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// A tooltip group revealed once progress exceeds `threshold`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipTrigger {
    pub threshold: f64,
    pub elements: &'static [&'static str],
}

/// Every animated value for one progress sample.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualState {
    pub progress: ScrollProgress,
    /// Header 1 horizontal offset in percent, within `[-100, 0]`.
    pub header1_offset: f64,
    /// Clip-path circle radius in percent, within `[0, 100]`.
    pub mask_radius: f64,
    /// Header 2 horizontal offset in percent, within `[-100, 100]`.
    pub header2_offset: f64,
    /// Divider horizontal scale in percent, within `[0, 100]`.
    pub divider_scale_x: f64,
    /// One flag per configured trigger, in trigger order.
    pub tooltips_visible: SmallVec<[bool; 4]>,
    /// Model rotation about Y in radians, one full turn over the range.
    pub model_rotation_y: f64,
}

impl VisualState {
    /// Vertical offset each tooltip group slides toward.
    pub fn tooltip_offset(&self, index: usize) -> Option<f64> {
        self.tooltips_visible
            .get(index)
            .map(|&visible| if visible { 0.0 } else { HIDDEN_BELOW_PERCENT })
    }

    /// Whether the divider tween should be retargeted for this sample.
    ///
    /// Before the divider starts growing it is left wherever it is.
    #[inline]
    pub fn divider_active(&self) -> bool {
        self.progress.value() > DIVIDER_START
    }
}

impl Default for VisualState {
    fn default() -> Self {
        map(ScrollProgress::START, &[])
    }
}

pub fn header1_offset(p: f64) -> f64 {
    (HEADER1_SLIDE_RATE * p).max(PERCENT_MIN)
}

pub fn mask_radius(p: f64) -> f64 {
    // the product below rounds under 100 at the exact end of growth
    if p >= MASK_START + PERCENT_MAX / MASK_GROWTH_RATE {
        PERCENT_MAX
    } else if p > MASK_START {
        ((p - MASK_START) * MASK_GROWTH_RATE).clamp(0.0, PERCENT_MAX)
    } else {
        0.0
    }
}

pub fn header2_offset(p: f64) -> f64 {
    if p > HEADER2_START {
        (PERCENT_MAX - (p - HEADER2_START) * HEADER2_SLIDE_RATE).max(PERCENT_MIN)
    } else {
        PERCENT_MAX
    }
}

pub fn divider_scale_x(p: f64) -> f64 {
    if p > DIVIDER_START {
        ((p - DIVIDER_START) * DIVIDER_GROWTH_RATE).min(PERCENT_MAX)
    } else {
        0.0
    }
}

pub fn model_rotation_y(p: f64) -> f64 {
    p * std::f64::consts::TAU
}

pub fn map(progress: ScrollProgress, triggers: &[TooltipTrigger]) -> VisualState {
    let p = progress.value();
    VisualState {
        progress,
        header1_offset: header1_offset(p),
        mask_radius: mask_radius(p),
        header2_offset: header2_offset(p),
        divider_scale_x: divider_scale_x(p),
        tooltips_visible: triggers.iter().map(|t| p > t.threshold).collect(),
        model_rotation_y: model_rotation_y(p),
    }
}
