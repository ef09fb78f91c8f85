use crate::constants::*;
use crate::core::DrawCommand;
use std::f64::consts::TAU;
use web_sys as web;

/// Executes frame draw commands on a 2D canvas context.
pub struct CanvasRenderer {
    ctx: web::CanvasRenderingContext2d,
    trail_rgb: String,
}

impl CanvasRenderer {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        let [r, g, b] = TRAIL_RGB;
        Self {
            ctx,
            trail_rgb: format!("{},{},{}", r, g, b),
        }
    }

    /// Draw one frame. `pixel_ratio` maps the commands' CSS pixels onto the backing store.
    pub fn render(&self, commands: &[DrawCommand], pixel_ratio: f64) -> anyhow::Result<()> {
        self.ctx
            .set_transform(pixel_ratio, 0.0, 0.0, pixel_ratio, 0.0, 0.0)
            .map_err(|e| anyhow::anyhow!("setTransform: {:?}", e))?;
        for cmd in commands {
            match *cmd {
                DrawCommand::FadeTrails {
                    width,
                    height,
                    alpha,
                } => {
                    self.ctx
                        .set_fill_style_str(&format!("rgba({},{})", self.trail_rgb, alpha));
                    self.ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
                }
                DrawCommand::Particle {
                    x,
                    y,
                    radius,
                    hue,
                    alpha,
                } => self.fill_circle(x, y, radius, hue, alpha)?,
                DrawCommand::Glow {
                    x,
                    y,
                    radius,
                    width,
                    height,
                } => self.fill_glow(x, y, radius, width, height)?,
            }
        }
        Ok(())
    }

    fn fill_circle(
        &self,
        x: f32,
        y: f32,
        radius: f32,
        hue: f32,
        alpha: f32,
    ) -> anyhow::Result<()> {
        // arc() throws on negative radii; zero-size points simply vanish
        if radius.is_nan() || radius <= 0.0 || !x.is_finite() || !y.is_finite() {
            return Ok(());
        }
        self.ctx.begin_path();
        self.ctx
            .arc(x as f64, y as f64, radius as f64, 0.0, TAU)
            .map_err(|e| anyhow::anyhow!("arc: {:?}", e))?;
        self.ctx.set_fill_style_str(&hsla(hue, alpha));
        self.ctx.fill();
        Ok(())
    }

    fn fill_glow(
        &self,
        x: f32,
        y: f32,
        radius: f32,
        width: f32,
        height: f32,
    ) -> anyhow::Result<()> {
        let (x, y) = (x as f64, y as f64);
        let g = self
            .ctx
            .create_radial_gradient(x, y, 0.0, x, y, radius.max(0.0) as f64)
            .map_err(|e| anyhow::anyhow!("createRadialGradient: {:?}", e))?;
        g.add_color_stop(0.0, GLOW_INNER)
            .and_then(|_| g.add_color_stop(1.0, GLOW_OUTER))
            .map_err(|e| anyhow::anyhow!("addColorStop: {:?}", e))?;
        self.ctx.set_fill_style_canvas_gradient(&g);
        self.ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
        Ok(())
    }
}

#[inline]
pub fn hsla(hue: f32, alpha: f32) -> String {
    format!(
        "hsla({:.1},{}%,{}%,{:.3})",
        hue, PARTICLE_SATURATION_PCT, PARTICLE_LIGHTNESS_PCT, alpha
    )
}
