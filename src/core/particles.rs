use super::constants::*;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

/// One point of the cloud.
///
/// `anchor` circles the vertical axis at a fixed `orbit_radius`; `position`
/// is what gets drawn and trails the (pulsing) anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub anchor: Vec3,
    pub orbit_radius: f32,
    pub hue: f32,
    pub size: f32,
}

impl Particle {
    /// Place a particle at rest on its anchor. The orbit radius is taken from
    /// the anchor's distance to the vertical axis and never changes afterwards.
    pub fn at_anchor(anchor: Vec3, hue: f32, size: f32) -> Self {
        Self {
            position: anchor,
            anchor,
            orbit_radius: (anchor.x * anchor.x + anchor.z * anchor.z).sqrt(),
            hue,
            size,
        }
    }

    #[inline]
    pub fn orbit_angle(&self) -> f32 {
        self.anchor.z.atan2(self.anchor.x)
    }
}

/// Scatter `count` particles over a flat ring that thickens toward its inner edge.
///
/// The same seed always yields the same store.
pub fn spawn(count: usize, seed: u64) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| spawn_one(&mut rng)).collect()
}

fn spawn_one(rng: &mut StdRng) -> Particle {
    let angle = rng.gen::<f32>() * TAU;
    let r = RING_RADIUS_MIN + rng.gen::<f32>() * (RING_RADIUS_MAX - RING_RADIUS_MIN);
    let spread = (1.0 - r / RING_RADIUS_MAX) * RING_THICKNESS;
    let anchor = Vec3::new(
        angle.cos() * r,
        (rng.gen::<f32>() - 0.5) * spread,
        angle.sin() * r,
    );
    let hue = (angle / TAU) * HUE_SWEEP + HUE_BASE + rng.gen::<f32>() * HUE_JITTER;
    let size = SIZE_MIN + rng.gen::<f32>() * (SIZE_MAX - SIZE_MIN);
    let mut p = Particle::at_anchor(anchor, hue, size);
    // cos/sin round-off would otherwise leak into the stored radius
    p.orbit_radius = r;
    p
}
