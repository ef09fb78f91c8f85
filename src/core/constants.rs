/// Simulation and projection tuning constants.
///
/// Rates are per frame, not per second: the cloud drifts at a fixed step each
/// time the browser hands us an animation frame.
// Particle store
pub const PARTICLE_COUNT: usize = 3000;
pub const RING_RADIUS_MIN: f32 = 30.0;
pub const RING_RADIUS_MAX: f32 = 230.0;
pub const RING_THICKNESS: f32 = 40.0; // vertical spread at the inner edge, tapering to 0 outside
pub const HUE_BASE: f32 = 200.0;
pub const HUE_SWEEP: f32 = 60.0; // hue added across one full turn of the ring
pub const HUE_JITTER: f32 = 40.0;
pub const SIZE_MIN: f32 = 0.5;
pub const SIZE_MAX: f32 = 2.0;

// Motion
pub const ORBIT_STEP_RAD: f32 = 0.002;
pub const POSITION_EASE: f32 = 0.02;
pub const PULSE_AMPLITUDE: f32 = 0.1;

// Camera
pub const AUTO_ROTATE_STEP_RAD: f32 = 0.003;
pub const BASE_PITCH_RAD: f32 = 0.4;
pub const DRAG_RAD_PER_PX: f32 = 0.002;
pub const CAMERA_EASE: f32 = 0.05;

// Projection
pub const FOCAL_LENGTH: f32 = 500.0;
// Points whose perspective denominator falls to this or below are culled.
pub const MIN_PERSPECTIVE_DENOM: f32 = 1.0;

// Depth shading: alpha = (ALPHA_DEPTH_ORIGIN - depth) / ALPHA_DEPTH_RANGE
pub const ALPHA_DEPTH_ORIGIN: f32 = 500.0;
pub const ALPHA_DEPTH_RANGE: f32 = 600.0;
pub const ALPHA_MIN: f32 = 0.1;
pub const ALPHA_MAX: f32 = 1.0;

// Frame compositing
pub const TRAIL_FADE_ALPHA: f32 = 0.15;
pub const GLOW_RADIUS: f32 = 60.0;
