use super::constants::*;
use glam::{Mat3, Vec3};

/// Drawable area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (self.width * 0.5, self.height * 0.5)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProjectedPoint {
    pub sx: f32,
    pub sy: f32,
    /// Post-rotation z; larger is farther from the viewer.
    pub depth: f32,
    pub hue: f32,
    pub screen_size: f32,
}

/// Perspective scale for a point at `depth`, or `None` once the point reaches
/// the camera plane.
#[inline]
pub fn perspective_scale(depth: f32, focal_length: f32) -> Option<f32> {
    let denom = focal_length + depth;
    if denom.is_nan() || denom <= MIN_PERSPECTIVE_DENOM {
        return None;
    }
    Some(focal_length / denom)
}

/// Rotate a world position into view space and project it onto the viewport.
pub fn project(
    position: Vec3,
    rotation: &Mat3,
    hue: f32,
    size: f32,
    viewport: &Viewport,
    focal_length: f32,
) -> Option<ProjectedPoint> {
    let v = *rotation * position;
    let scale = perspective_scale(v.z, focal_length)?;
    let (cx, cy) = viewport.center();
    Some(ProjectedPoint {
        sx: cx + v.x * scale,
        sy: cy + v.y * scale,
        depth: v.z,
        hue,
        screen_size: size * scale,
    })
}

/// Opacity for a point at `depth`: nearer is more opaque, never below `ALPHA_MIN`.
#[inline]
pub fn depth_alpha(depth: f32) -> f32 {
    ((ALPHA_DEPTH_ORIGIN - depth) / ALPHA_DEPTH_RANGE).clamp(ALPHA_MIN, ALPHA_MAX)
}

/// Painter's order: farthest first so nearer points cover them.
pub fn sort_back_to_front(points: &mut [ProjectedPoint]) {
    points.sort_unstable_by(|a, b| b.depth.total_cmp(&a.depth));
}
