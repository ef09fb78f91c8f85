// Host-side tests for the orbit camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod cloud {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
    pub mod motion {
        include!("../src/core/motion.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
}

use cloud::camera::*;
use cloud::constants::*;
use glam::{Vec2, Vec3};

fn close(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn idle() -> ControlInput {
    ControlInput::default()
}

fn dragging(x: f32, y: f32) -> ControlInput {
    ControlInput {
        pointer_offset: Vec2::new(x, y),
        drag_active: true,
    }
}

#[test]
fn starts_at_base_pitch() {
    let cam = CameraState::default();
    assert_eq!(cam.rot_y, 0.0);
    assert_eq!(cam.rot_x, BASE_PITCH_RAD);
    assert_eq!(cam.auto_rot, 0.0);
}

#[test]
fn one_smoothing_step_toward_half_radian() {
    let tuning = CameraTuning {
        auto_rotate_step: 0.0,
        ..CameraTuning::default()
    };
    let mut cam = CameraState {
        rot_y: 0.0,
        rot_x: BASE_PITCH_RAD,
        auto_rot: 0.5,
    };
    cam.update(&idle(), &tuning);
    assert!(close(cam.rot_y, 0.025, 1e-6), "{}", cam.rot_y);
    assert!(close(cam.rot_x, BASE_PITCH_RAD, 1e-6));
}

#[test]
fn auto_rotation_advances_every_frame() {
    let mut cam = CameraState::default();
    let tuning = CameraTuning::default();
    for i in 1..=100 {
        cam.update(&idle(), &tuning);
        assert!(close(cam.auto_rot, i as f32 * AUTO_ROTATE_STEP_RAD, 1e-4));
    }
    // yaw lags behind but keeps increasing
    assert!(cam.rot_y > 0.0 && cam.rot_y < cam.auto_rot);
}

#[test]
fn pointer_is_ignored_without_drag() {
    let tuning = CameraTuning::default();
    let cam = CameraState::default();
    let moved = ControlInput {
        pointer_offset: Vec2::new(300.0, -200.0),
        drag_active: false,
    };
    assert_eq!(cam.target(&moved, &tuning), cam.target(&idle(), &tuning));
}

#[test]
fn drag_offsets_yaw_and_pitch() {
    let tuning = CameraTuning::default();
    let cam = CameraState {
        rot_y: 0.0,
        rot_x: 0.0,
        auto_rot: 1.0,
    };
    let (yaw, pitch) = cam.target(&dragging(100.0, -50.0), &tuning);
    assert!(close(yaw, 1.0 + 100.0 * DRAG_RAD_PER_PX, 1e-6));
    assert!(close(pitch, BASE_PITCH_RAD - 50.0 * DRAG_RAD_PER_PX, 1e-6));
}

#[test]
fn smoothing_contracts_by_fixed_factor() {
    let tuning = CameraTuning::default();
    let mut cam = CameraState::default();
    let input = dragging(250.0, 120.0);
    for _ in 0..60 {
        let (before_y, before_x) = (cam.rot_y, cam.rot_x);
        cam.update(&input, &tuning);
        let (ty, tx) = cam.target(&input, &tuning);
        let k = 1.0 - CAMERA_EASE;
        assert!(close(ty - cam.rot_y, (ty - before_y) * k, 1e-5));
        assert!(close(tx - cam.rot_x, (tx - before_x) * k, 1e-5));
    }
}

#[test]
fn releasing_drag_drifts_back_to_idle_orbit() {
    let tuning = CameraTuning::default();
    let mut cam = CameraState::default();
    for _ in 0..200 {
        cam.update(&dragging(0.0, 300.0), &tuning);
    }
    assert!(cam.rot_x > BASE_PITCH_RAD + 0.5);
    for _ in 0..400 {
        cam.update(&idle(), &tuning);
    }
    assert!(close(cam.rot_x, BASE_PITCH_RAD, 1e-3));
}

#[test]
fn rotation_is_yaw_then_pitch() {
    let cam = CameraState {
        rot_y: 0.7,
        rot_x: -0.3,
        auto_rot: 0.0,
    };
    let (sy, cy) = cam.rot_y.sin_cos();
    let (sx, cx) = cam.rot_x.sin_cos();
    for v in [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(120.0, -8.0, 45.0),
    ] {
        let x1 = v.x * cy - v.z * sy;
        let z1 = v.x * sy + v.z * cy;
        let y1 = v.y * cx - z1 * sx;
        let z2 = v.y * sx + z1 * cx;
        let got = cam.apply(v);
        assert!((got - Vec3::new(x1, y1, z2)).length() < 1e-3, "{v:?} -> {got:?}");
    }
}

#[test]
fn rotation_preserves_length() {
    let cam = CameraState {
        rot_y: 2.1,
        rot_x: 0.9,
        auto_rot: 0.0,
    };
    let v = Vec3::new(180.0, 12.0, -75.0);
    assert!(close(cam.apply(v).length(), v.length(), 1e-2));
}
