use super::constants::*;
use super::motion::ease_toward;
use glam::{Mat3, Vec2, Vec3};

/// Pointer state sampled once per frame by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControlInput {
    /// Pointer position relative to the viewport centre, in CSS pixels.
    pub pointer_offset: Vec2,
    pub drag_active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTuning {
    pub auto_rotate_step: f32,
    pub base_pitch: f32,
    pub drag_rad_per_px: f32,
    pub ease: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            auto_rotate_step: AUTO_ROTATE_STEP_RAD,
            base_pitch: BASE_PITCH_RAD,
            drag_rad_per_px: DRAG_RAD_PER_PX,
            ease: CAMERA_EASE,
        }
    }
}

/// Smoothed orbit camera. Yaw keeps turning on its own; dragging bends the
/// target away from the idle orbit and releasing lets it drift back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    pub rot_y: f32,
    pub rot_x: f32,
    pub auto_rot: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            rot_y: 0.0,
            rot_x: BASE_PITCH_RAD,
            auto_rot: 0.0,
        }
    }
}

impl CameraState {
    /// Instantaneous (yaw, pitch) the camera is chasing.
    pub fn target(&self, input: &ControlInput, tuning: &CameraTuning) -> (f32, f32) {
        let (dx, dy) = if input.drag_active {
            (
                input.pointer_offset.x * tuning.drag_rad_per_px,
                input.pointer_offset.y * tuning.drag_rad_per_px,
            )
        } else {
            (0.0, 0.0)
        };
        (self.auto_rot + dx, tuning.base_pitch + dy)
    }

    pub fn update(&mut self, input: &ControlInput, tuning: &CameraTuning) {
        self.auto_rot += tuning.auto_rotate_step;
        let (yaw, pitch) = self.target(input, tuning);
        self.rot_y = ease_toward(self.rot_y, yaw, tuning.ease);
        self.rot_x = ease_toward(self.rot_x, pitch, tuning.ease);
    }

    /// Yaw about +Y, then pitch about +X.
    ///
    /// Yaw turns +X toward +Z (`x' = x cos - z sin`), which is glam's
    /// `from_rotation_y` with the angle negated.
    pub fn rotation(&self) -> Mat3 {
        Mat3::from_rotation_x(self.rot_x) * Mat3::from_rotation_y(-self.rot_y)
    }

    #[inline]
    pub fn apply(&self, v: Vec3) -> Vec3 {
        self.rotation() * v
    }
}
