/// Backend-neutral drawing instructions emitted once per frame, in paint order.
///
/// Coordinates and sizes are CSS pixels; the canvas backend applies the
/// device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    /// Darken the whole viewport with translucent black, leaving short trails.
    FadeTrails { width: f32, height: f32, alpha: f32 },
    /// Filled circle coloured `hsla(hue, S, L, alpha)`.
    Particle {
        x: f32,
        y: f32,
        radius: f32,
        hue: f32,
        alpha: f32,
    },
    /// Radial highlight centred at (`x`, `y`) fading out at `radius`,
    /// painted over the full viewport.
    Glow {
        x: f32,
        y: f32,
        radius: f32,
        width: f32,
        height: f32,
    },
}

impl DrawCommand {
    #[inline]
    pub fn is_particle(&self) -> bool {
        matches!(self, DrawCommand::Particle { .. })
    }
}
