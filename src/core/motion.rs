use super::constants::PULSE_AMPLITUDE;
use super::particles::Particle;
use glam::Vec3;

/// Global breathing factor shared by every particle in a frame.
#[inline]
pub fn pulse_factor(clock_seconds: f32) -> f32 {
    clock_seconds.sin() * PULSE_AMPLITUDE + 1.0
}

/// First-order step of `value` toward `target`. For `rate` in `[0, 1]` the
/// remaining distance shrinks by exactly `1 - rate` and never overshoots.
#[inline]
pub fn ease_toward(value: f32, target: f32, rate: f32) -> f32 {
    value + (target - value) * rate
}

#[inline]
pub fn ease_vec3(value: Vec3, target: Vec3, rate: f32) -> Vec3 {
    value + (target - value) * rate
}

/// Advance the anchor around the vertical axis. Height is left alone.
pub fn orbit_anchor(p: &mut Particle, step_rad: f32) {
    let a = p.orbit_angle() + step_rad;
    let r = p.orbit_radius;
    p.anchor.x = a.cos() * r;
    p.anchor.z = a.sin() * r;
}

/// Orbit, then ease the live position toward the pulsed anchor.
#[inline]
pub fn step_particle(p: &mut Particle, step_rad: f32, ease: f32, pulse: f32) {
    orbit_anchor(p, step_rad);
    p.position = ease_vec3(p.position, p.anchor * pulse, ease);
}

/// Per-frame update of the whole store. Particles are independent of each other.
pub fn step_all(particles: &mut [Particle], step_rad: f32, ease: f32, pulse: f32) {
    for p in particles.iter_mut() {
        step_particle(p, step_rad, ease, pulse);
    }
}
