// Per-page scene context: viewport, camera, framed model and rotation.
//
// Event handlers mutate this through narrow methods; the render loop reads a
// `FrameInputs` snapshot each tick whether or not a model has arrived.

use super::asset::{LoadError, ModelAsset};
use super::camera::Camera;
use super::framing::{frame, Aabb, ModelPlacement, Viewport};
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelStatus {
    Pending,
    Loaded,
    Failed,
}

#[derive(Clone, Debug)]
pub struct SceneState {
    viewport: Viewport,
    camera: Camera,
    bounds: Option<Aabb>,
    placement: Option<ModelPlacement>,
    rotation_y: f32,
    status: ModelStatus,
}

/// What the renderer needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInputs {
    pub view_proj: Mat4,
    pub camera_eye: Vec3,
    /// `None` until a model has been framed.
    pub model: Option<Mat4>,
    /// Radius the shadow projection has to cover.
    pub shadow_radius: f32,
}

impl SceneState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            camera: Camera::new(viewport.aspect()),
            bounds: None,
            placement: None,
            rotation_y: 0.0,
            status: ModelStatus::Pending,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn status(&self) -> ModelStatus {
        self.status
    }

    pub fn placement(&self) -> Option<ModelPlacement> {
        self.placement
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.set_aspect(viewport.aspect());
        self.reframe();
    }

    pub fn model_loaded(&mut self, asset: &ModelAsset) {
        self.bounds = Some(asset.bounds);
        self.status = ModelStatus::Loaded;
        self.reframe();
    }

    pub fn model_failed(&mut self, err: &LoadError) {
        log::error!("[asset] model failed to load: {}", err);
        self.status = ModelStatus::Failed;
    }

    pub fn set_rotation_y(&mut self, radians: f32) {
        self.rotation_y = radians;
    }

    fn reframe(&mut self) {
        let Some(bounds) = self.bounds else {
            return;
        };
        let placement = frame(&bounds, self.viewport.class());
        self.camera.look_at(placement.camera_eye, placement.camera_target);
        self.placement = Some(placement);
    }

    pub fn frame_inputs(&self) -> FrameInputs {
        let model = self.placement.map(|p| p.model_matrix(self.rotation_y));
        let shadow_radius = match (self.bounds, self.placement) {
            (Some(b), Some(p)) => {
                let c = b.center();
                b.size().length() * 0.5 + Vec3::new(c.x, 0.0, c.z).length() + p.model_position.x.abs()
            }
            _ => 1.0,
        };
        FrameInputs {
            view_proj: self.camera.view_proj(),
            camera_eye: self.camera.eye,
            model,
            shadow_radius,
        }
    }
}
