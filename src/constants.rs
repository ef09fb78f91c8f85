// Canvas styling and DOM wiring used by the web frontend.

// Particle colour: hsla(hue, PARTICLE_SATURATION%, PARTICLE_LIGHTNESS%, alpha)
pub const PARTICLE_SATURATION_PCT: f32 = 80.0;
pub const PARTICLE_LIGHTNESS_PCT: f32 = 65.0;

// Trail fade is translucent black; alpha comes from the draw command
pub const TRAIL_RGB: [u8; 3] = [0, 0, 0];

// Centre glow gradient stops
pub const GLOW_INNER: &str = "rgba(180,200,255,0.15)";
pub const GLOW_OUTER: &str = "rgba(180,200,255,0)";

// Page wiring
pub const CANVAS_STYLE: [(&str, &str); 3] = [
    ("cursor", "crosshair"),
    ("display", "block"),
    ("touch-action", "none"), // keep drags from scrolling on touch screens
];
pub const CAPTION_ID: &str = "cloud-caption";
pub const CAPTION_TITLE: &str = "HELLO WORLD";
pub const CAPTION_HINT: &str = "click & drag to orbit";
