// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_rates_are_stable_contractions() {
    assert!(POSITION_EASE > 0.0 && POSITION_EASE <= 1.0);
    assert!(CAMERA_EASE > 0.0 && CAMERA_EASE <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ring_shape_is_well_formed() {
    assert!(RING_RADIUS_MIN > 0.0);
    assert!(RING_RADIUS_MAX > RING_RADIUS_MIN);
    assert!(RING_THICKNESS > 0.0);
    assert!(SIZE_MAX > SIZE_MIN && SIZE_MIN > 0.0);
    assert!(PARTICLE_COUNT > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn cloud_never_reaches_the_camera_plane() {
    // largest pulsed radius, including vertical spread, must stay in front of the eye
    let reach = (RING_RADIUS_MAX * RING_RADIUS_MAX + (RING_THICKNESS * 0.5).powi(2)).sqrt()
        * (1.0 + PULSE_AMPLITUDE);
    assert!(FOCAL_LENGTH - reach > MIN_PERSPECTIVE_DENOM);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn alpha_window_is_ordered() {
    assert!(ALPHA_MIN > 0.0 && ALPHA_MIN < ALPHA_MAX && ALPHA_MAX <= 1.0);
    assert!(ALPHA_DEPTH_RANGE > 0.0);
    assert!(TRAIL_FADE_ALPHA > 0.0 && TRAIL_FADE_ALPHA < 1.0);
    assert!(GLOW_RADIUS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn colour_settings_are_percentages() {
    assert!((0.0..=100.0).contains(&PARTICLE_SATURATION_PCT));
    assert!((0.0..=100.0).contains(&PARTICLE_LIGHTNESS_PCT));
    assert!(GLOW_INNER.starts_with("rgba(") && GLOW_OUTER.starts_with("rgba("));
    assert!(!CAPTION_ID.is_empty());
    assert!(CANVAS_STYLE.iter().all(|(k, v)| !k.is_empty() && !v.is_empty()));
}
