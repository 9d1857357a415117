pub mod asset;
pub mod camera;
pub mod choreography;
pub mod config;
pub mod constants;
pub mod framing;
pub mod scene;
pub mod scroll;
pub mod segment;
pub mod style;
pub mod tween;

pub use asset::*;
pub use camera::*;
pub use choreography::*;
pub use config::*;
pub use constants::*;
pub use framing::*;
pub use scene::*;
pub use scroll::*;
pub use segment::*;
pub use style::*;
pub use tween::*;

// Shaders bundled as string constants
pub static MODEL_WGSL: &str = include_str!("../../shaders/model.wgsl");
pub static SHADOW_WGSL: &str = include_str!("../../shaders/shadow.wgsl");
