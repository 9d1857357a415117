// Rendering constants for the product model scene.
//
// Light intensities follow the page's original look: a strong ambient fill
// with a single white key light casting soft shadows.
// Lights
pub const AMBIENT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const AMBIENT_INTENSITY: f32 = 1.5;
pub const KEY_LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const KEY_LIGHT_INTENSITY: f32 = 2.0;
pub const KEY_LIGHT_POSITION: [f32; 3] = [2.0, 5.0, 5.0];

// Shadows
pub const SHADOW_MAP_SIZE: u32 = 2048;
pub const SHADOW_DEPTH_BIAS: f32 = 0.0015;
pub const SHADOW_PCF_RADIUS_TEXELS: f32 = 1.5;

// Surface
pub const MAX_PIXEL_RATIO: f64 = 2.0;
// Transparent so the page shows behind the model.
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 0.0];

// Clamp for frame delta so a backgrounded tab does not jump the smoother.
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
