// Choreography and layout constants for the product overview page.
//
// The mapper coefficients encode the designed timing of every animated
// target; change them together or not at all.

// Header 1 slides left: offset = -200 * progress, floored at -100.
pub const HEADER1_SLIDE_RATE: f64 = -200.0;

// Circular mask starts growing after this progress and grows this fast.
pub const MASK_START: f64 = 0.15;
pub const MASK_GROWTH_RATE: f64 = 300.0;

// Header 2 rests at +100% until this progress, then slides left.
pub const HEADER2_START: f64 = 0.3;
pub const HEADER2_SLIDE_RATE: f64 = 300.0;

// Tooltip divider widens after this progress.
pub const DIVIDER_START: f64 = 0.5;
pub const DIVIDER_GROWTH_RATE: f64 = 400.0;

// Offsets and scales are expressed in percent.
pub const PERCENT_MIN: f64 = -100.0;
pub const PERCENT_MAX: f64 = 100.0;
pub const HIDDEN_BELOW_PERCENT: f64 = 100.0;

// Tooltip reveal thresholds (progress must exceed these).
pub const TOOLTIP_1_THRESHOLD: f64 = 0.65;
pub const TOOLTIP_2_THRESHOLD: f64 = 0.85;

// Viewport classification
pub const MOBILE_BREAKPOINT_PX: f64 = 1000.0;

// Scene framing
pub const CAMERA_DISTANCE_MOBILE: f32 = 2.5; // multiplier on the largest model dimension
pub const CAMERA_DISTANCE_DESKTOP: f32 = 2.0;
pub const MODEL_OFFSET_X_MOBILE: f32 = 0.0;
pub const MODEL_OFFSET_X_DESKTOP: f32 = -2.0;

// Camera lens
pub const CAMERA_FOV_Y_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Pinned scroll range
pub const PIN_SCROLL_DISTANCE_PX: f64 = 3000.0;
// Entrance fires when the section top reaches this fraction of the viewport height.
pub const ENTRANCE_START_FRACTION: f64 = 0.8;

// Tween timing (seconds)
pub const ENTRANCE_DURATION_SEC: f64 = 1.0;
pub const ENTRANCE_STAGGER_SEC: f64 = 0.025;
pub const DEFAULT_TWEEN_DURATION_SEC: f64 = 0.5;

// Smooth scrolling
pub const SMOOTH_SCROLL_LERP: f64 = 0.1; // per 60 Hz frame
pub const SMOOTH_SCROLL_SETTLE_PX: f64 = 0.5;
pub const WHEEL_LINE_HEIGHT_PX: f64 = 16.0;

// Two lines share a row when their tops differ by less than this.
pub const LINE_TOP_TOLERANCE_PX: f64 = 1.0;
