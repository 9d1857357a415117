// Scroll position to pinned-section progress, entrance edges and smooth wheel scrolling.

use super::choreography::ScrollProgress;
use super::constants::*;
use super::framing::Viewport;

/// Host capability the controller reads from; the browser window in production.
pub trait ScrollSource {
    fn scroll_y(&self) -> f64;
    fn viewport(&self) -> Viewport;
}

/// A document range over which the section stays pinned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinnedRange {
    pub start: f64,
    pub distance: f64,
}

impl PinnedRange {
    pub fn new(start: f64, distance: f64) -> Self {
        Self {
            start,
            distance: distance.max(1.0),
        }
    }

    pub fn end(&self) -> f64 {
        self.start + self.distance
    }

    pub fn progress(&self, scroll_y: f64) -> ScrollProgress {
        ScrollProgress::new((scroll_y - self.start) / self.distance)
    }

    /// Downward translation that keeps the section visually fixed.
    pub fn pin_offset(&self, scroll_y: f64) -> f64 {
        (scroll_y - self.start).clamp(0.0, self.distance)
    }

    pub fn is_pinned(&self, scroll_y: f64) -> bool {
        scroll_y >= self.start && scroll_y <= self.end()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Enter,
    LeaveBack,
}

/// One-shot threshold crossing: fires once per direction change.
#[derive(Clone, Copy, Debug, Default)]
pub struct EntranceTrigger {
    line: f64,
    entered: bool,
}

impl EntranceTrigger {
    pub fn new(line: f64) -> Self {
        Self {
            line,
            entered: false,
        }
    }

    pub fn set_line(&mut self, line: f64) {
        self.line = line;
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    pub fn update(&mut self, scroll_y: f64) -> Option<Edge> {
        match (self.entered, scroll_y >= self.line) {
            (false, true) => {
                self.entered = true;
                Some(Edge::Enter)
            }
            (true, false) => {
                self.entered = false;
                Some(Edge::LeaveBack)
            }
            _ => None,
        }
    }
}

/// Result of one scroll observation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollUpdate {
    pub progress: ScrollProgress,
    pub pin_offset: f64,
    pub entrance: Option<Edge>,
    pub changed: bool,
}

#[derive(Clone, Debug)]
pub struct ScrollController {
    range: PinnedRange,
    entrance: EntranceTrigger,
    entrance_fraction: f64,
    last: Option<ScrollProgress>,
}

impl ScrollController {
    /// `section_top` is the document-space top of the pinned section.
    pub fn new(section_top: f64, distance: f64, entrance_fraction: f64, viewport: Viewport) -> Self {
        let mut c = Self {
            range: PinnedRange::new(section_top, distance),
            entrance: EntranceTrigger::default(),
            entrance_fraction,
            last: None,
        };
        c.relayout(section_top, viewport);
        c
    }

    pub fn range(&self) -> PinnedRange {
        self.range
    }

    /// Recompute the pinned range and entrance line after layout changes.
    pub fn relayout(&mut self, section_top: f64, viewport: Viewport) {
        self.range = PinnedRange::new(section_top, self.range.distance);
        self.entrance
            .set_line(section_top - self.entrance_fraction * viewport.height);
    }

    pub fn update(&mut self, scroll_y: f64) -> ScrollUpdate {
        let progress = self.range.progress(scroll_y);
        let changed = self.last != Some(progress);
        self.last = Some(progress);
        ScrollUpdate {
            progress,
            pin_offset: self.range.pin_offset(scroll_y),
            entrance: self.entrance.update(scroll_y),
            changed,
        }
    }

    pub fn poll(&mut self, source: &impl ScrollSource) -> ScrollUpdate {
        self.update(source.scroll_y())
    }
}

/// Wheel delta units as reported by `WheelEvent.deltaMode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelMode {
    Pixel,
    Line,
    Page,
}

impl WheelMode {
    pub fn from_dom(delta_mode: u32) -> Self {
        match delta_mode {
            1 => WheelMode::Line,
            2 => WheelMode::Page,
            _ => WheelMode::Pixel,
        }
    }

    pub fn to_pixels(self, delta: f64, viewport_height: f64) -> f64 {
        match self {
            WheelMode::Pixel => delta,
            WheelMode::Line => delta * WHEEL_LINE_HEIGHT_PX,
            WheelMode::Page => delta * viewport_height,
        }
    }
}

/// Damped wheel scrolling; native scrolling takes over whenever it is idle.
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    current: f64,
    target: f64,
    lerp: f64,
    animating: bool,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl SmoothScroll {
    pub fn new(scroll_y: f64) -> Self {
        Self {
            current: scroll_y,
            target: scroll_y,
            lerp: SMOOTH_SCROLL_LERP,
            animating: false,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Adopt the native position unless a wheel animation is running.
    pub fn sync(&mut self, scroll_y: f64) {
        if !self.animating {
            self.current = scroll_y;
            self.target = scroll_y;
        }
    }

    pub fn on_wheel(&mut self, delta_px: f64, limit: f64) {
        self.target = (self.target + delta_px).clamp(0.0, limit.max(0.0));
        self.animating = (self.target - self.current).abs() > SMOOTH_SCROLL_SETTLE_PX;
        if !self.animating {
            self.current = self.target;
        }
    }

    /// Advance by `dt_sec`; returns the position to scroll to while animating.
    pub fn step(&mut self, dt_sec: f64) -> Option<f64> {
        if !self.animating {
            return None;
        }
        let lambda = self.lerp * 60.0;
        let t = 1.0 - (-lambda * dt_sec.max(0.0)).exp();
        self.current += (self.target - self.current) * t;
        if (self.target - self.current).abs() < SMOOTH_SCROLL_SETTLE_PX {
            self.current = self.target;
            self.animating = false;
        }
        Some(self.current)
    }
}
