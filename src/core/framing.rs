// Model framing: bounding boxes, viewport classes and camera placement.

use super::constants::*;
use glam::{Mat4, Quat, Vec3};

/// Axis-aligned bounding box in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// An inverted box that any point extends.
    pub const EMPTY: Self = Self {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        let mut aabb = Self::EMPTY;
        for p in points {
            aabb.extend(p);
        }
        aabb
    }

    #[inline]
    pub fn extend(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn center(&self) -> Vec3 {
        if self.is_empty() {
            return Vec3::ZERO;
        }
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        if self.is_empty() {
            return Vec3::ZERO;
        }
        self.max - self.min
    }

    #[inline]
    pub fn max_dimension(&self) -> f32 {
        self.size().max_element()
    }
}

/// Layout class derived from the viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    pub fn camera_distance_multiplier(self) -> f32 {
        match self {
            ViewportClass::Mobile => CAMERA_DISTANCE_MOBILE,
            ViewportClass::Desktop => CAMERA_DISTANCE_DESKTOP,
        }
    }

    pub fn model_offset_x(self) -> f32 {
        match self {
            ViewportClass::Mobile => MODEL_OFFSET_X_MOBILE,
            ViewportClass::Desktop => MODEL_OFFSET_X_DESKTOP,
        }
    }
}

/// CSS pixel size of the browser viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn class(&self) -> ViewportClass {
        ViewportClass::from_width(self.width)
    }

    pub fn aspect(&self) -> f32 {
        if self.height <= 0.0 {
            return 1.0;
        }
        (self.width / self.height) as f32
    }
}

/// Where the model and camera sit for one viewport class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelPlacement {
    pub model_position: Vec3,
    pub camera_eye: Vec3,
    pub camera_target: Vec3,
}

impl ModelPlacement {
    /// World transform of the model: translate, then spin about its own Y axis.
    pub fn model_matrix(&self, rotation_y: f32) -> Mat4 {
        Mat4::from_rotation_translation(Quat::from_rotation_y(rotation_y), self.model_position)
    }
}

/// Center the model vertically and back the camera off far enough to see all of it.
///
/// `bounds` are the load-time bounds; placement never depends on a previous call.
pub fn frame(bounds: &Aabb, class: ViewportClass) -> ModelPlacement {
    let center = bounds.center();
    let distance = bounds.max_dimension() * class.camera_distance_multiplier();
    ModelPlacement {
        model_position: Vec3::new(class.model_offset_x(), -center.y, 0.0),
        camera_eye: Vec3::new(0.0, 0.0, distance),
        camera_target: Vec3::ZERO,
    }
}
