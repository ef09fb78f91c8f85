use super::camera::{CameraState, CameraTuning, ControlInput};
use super::constants::*;
use super::draw::DrawCommand;
use super::motion::{pulse_factor, step_all};
use super::particles::{spawn, Particle};
use super::projection::{depth_alpha, project, sort_back_to_front, ProjectedPoint, Viewport};

#[derive(Clone, Debug, PartialEq)]
pub struct CloudParams {
    pub particle_count: usize,
    pub orbit_step: f32,
    pub position_ease: f32,
    pub focal_length: f32,
    pub trail_fade_alpha: f32,
    pub glow_radius: f32,
    pub camera: CameraTuning,
}

impl Default for CloudParams {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            orbit_step: ORBIT_STEP_RAD,
            position_ease: POSITION_EASE,
            focal_length: FOCAL_LENGTH,
            trail_fade_alpha: TRAIL_FADE_ALPHA,
            glow_radius: GLOW_RADIUS,
            camera: CameraTuning::default(),
        }
    }
}

/// Everything the host supplies for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub control: ControlInput,
    pub viewport: Viewport,
    /// Seconds on the host clock; only its phase matters (drives the pulse).
    pub clock_seconds: f32,
}

/// Particle cloud state plus the per-frame scratch buffers.
///
/// Owned by the render loop; `advance` is the whole frame.
pub struct Simulation {
    pub params: CloudParams,
    pub particles: Vec<Particle>,
    pub camera: CameraState,
    projected: Vec<ProjectedPoint>,
    commands: Vec<DrawCommand>,
    culled: usize,
}

impl Simulation {
    pub fn new(params: CloudParams, seed: u64) -> Self {
        let particles = spawn(params.particle_count, seed);
        Self::from_particles(params, particles)
    }

    pub fn from_particles(params: CloudParams, particles: Vec<Particle>) -> Self {
        let n = particles.len();
        Self {
            params,
            particles,
            camera: CameraState::default(),
            projected: Vec::with_capacity(n),
            // fade + one circle per particle + glow
            commands: Vec::with_capacity(n + 2),
            culled: 0,
        }
    }

    /// Simulate, project, sort and emit draw commands for one frame.
    pub fn advance(&mut self, input: &FrameInput) -> &[DrawCommand] {
        let pulse = pulse_factor(input.clock_seconds);
        step_all(
            &mut self.particles,
            self.params.orbit_step,
            self.params.position_ease,
            pulse,
        );

        self.camera.update(&input.control, &self.params.camera);
        let rotation = self.camera.rotation();

        self.projected.clear();
        for p in &self.particles {
            if let Some(pt) = project(
                p.position,
                &rotation,
                p.hue,
                p.size,
                &input.viewport,
                self.params.focal_length,
            ) {
                self.projected.push(pt);
            }
        }
        self.culled = self.particles.len() - self.projected.len();
        sort_back_to_front(&mut self.projected);

        let vp = input.viewport;
        self.commands.clear();
        self.commands.push(DrawCommand::FadeTrails {
            width: vp.width,
            height: vp.height,
            alpha: self.params.trail_fade_alpha,
        });
        self.commands
            .extend(self.projected.iter().map(|pt| DrawCommand::Particle {
                x: pt.sx,
                y: pt.sy,
                radius: pt.screen_size,
                hue: pt.hue,
                alpha: depth_alpha(pt.depth),
            }));
        let (cx, cy) = vp.center();
        self.commands.push(DrawCommand::Glow {
            x: cx,
            y: cy,
            radius: self.params.glow_radius,
            width: vp.width,
            height: vp.height,
        });
        &self.commands
    }

    /// Points drawn by the last `advance`, farthest first.
    pub fn projected(&self) -> &[ProjectedPoint] {
        &self.projected
    }

    /// Particles skipped by the last `advance` for sitting at or behind the camera plane.
    pub fn culled(&self) -> usize {
        self.culled
    }
}
