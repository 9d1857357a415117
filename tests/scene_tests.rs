// Host-side tests for the per-page scene context.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod framing {
        include!("../src/core/framing.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod asset {
        include!("../src/core/asset.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use crate::core::asset::*;
use crate::core::framing::*;
use crate::core::scene::*;
use glam::{Mat4, Vec3};

fn cube_asset() -> ModelAsset {
    ModelAsset {
        parts: Vec::new(),
        bounds: Aabb::from_points([Vec3::new(-0.5, 1.0, -0.5), Vec3::new(0.5, 3.0, 0.5)]),
    }
}

#[test]
fn renders_without_a_model() {
    let scene = SceneState::new(Viewport::new(1440.0, 900.0));
    assert_eq!(scene.status(), ModelStatus::Pending);
    let inputs = scene.frame_inputs();
    assert!(inputs.model.is_none());
    assert!(inputs.view_proj.is_finite());
}

#[test]
fn load_failure_keeps_frames_coming() {
    let mut scene = SceneState::new(Viewport::new(1440.0, 900.0));
    scene.model_failed(&LoadError::Http {
        url: "/shaker.glb".into(),
        status: 500,
    });
    assert_eq!(scene.status(), ModelStatus::Failed);
    for i in 0..3 {
        scene.set_rotation_y(i as f32);
        let inputs = scene.frame_inputs();
        assert!(inputs.model.is_none());
        assert!(inputs.view_proj.is_finite());
    }
    scene.resize(Viewport::new(600.0, 900.0));
    assert!(scene.placement().is_none());
}

#[test]
fn loaded_model_is_framed_for_the_viewport() {
    let mut scene = SceneState::new(Viewport::new(1440.0, 900.0));
    scene.model_loaded(&cube_asset());
    assert_eq!(scene.status(), ModelStatus::Loaded);
    let p = scene.placement().expect("placement");
    assert_eq!(p.model_position, Vec3::new(-2.0, -2.0, 0.0));
    assert_eq!(scene.camera().eye, Vec3::new(0.0, 0.0, 4.0));
    assert!(scene.frame_inputs().model.is_some());
}

#[test]
fn resize_reframes_from_load_time_bounds() {
    let mut scene = SceneState::new(Viewport::new(1440.0, 900.0));
    scene.model_loaded(&cube_asset());
    let desktop = scene.placement();

    scene.resize(Viewport::new(500.0, 900.0));
    let mobile = scene.placement().expect("placement");
    assert_eq!(mobile.model_position, Vec3::new(0.0, -2.0, 0.0));
    assert_eq!(mobile.camera_eye, Vec3::new(0.0, 0.0, 5.0));
    assert!((scene.camera().aspect - 500.0 / 900.0).abs() < 1e-6);

    scene.resize(Viewport::new(1440.0, 900.0));
    scene.resize(Viewport::new(1440.0, 900.0));
    assert_eq!(scene.placement(), desktop);
}

#[test]
fn rotation_feeds_the_model_matrix() {
    let mut scene = SceneState::new(Viewport::new(1440.0, 900.0));
    scene.model_loaded(&cube_asset());
    scene.set_rotation_y(std::f32::consts::FRAC_PI_2);
    let m = scene.frame_inputs().model.expect("model");
    let p = scene.placement().expect("placement");
    let expected = Mat4::from_translation(p.model_position)
        * Mat4::from_rotation_y(std::f32::consts::FRAC_PI_2);
    assert!(m.abs_diff_eq(expected, 1e-6));
}

#[test]
fn shadow_radius_covers_the_offset_model() {
    let mut scene = SceneState::new(Viewport::new(1440.0, 900.0));
    assert_eq!(scene.frame_inputs().shadow_radius, 1.0);
    scene.model_loaded(&cube_asset());
    let r = scene.frame_inputs().shadow_radius;
    let half_diag = Vec3::new(1.0, 2.0, 1.0).length() * 0.5;
    assert!((r - (half_diag + 2.0)).abs() < 1e-5);
}
