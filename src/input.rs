use glam::Vec2;

/// Latest pointer sample, written by event handlers and read once per frame.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    /// Offset from the canvas centre in CSS pixels.
    pub offset: Vec2,
    pub down: bool,
}

/// Offset of a client-space coordinate from the centre of a span starting at
/// `origin` with length `extent`.
#[inline]
pub fn center_offset(client: f32, origin: f32, extent: f32) -> f32 {
    client - origin - extent * 0.5
}

#[inline]
pub fn pointer_offset(
    client_x: f32,
    client_y: f32,
    left: f32,
    top: f32,
    width: f32,
    height: f32,
) -> Vec2 {
    Vec2::new(
        center_offset(client_x, left, width),
        center_offset(client_y, top, height),
    )
}
