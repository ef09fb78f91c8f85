// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn centre_of_canvas_is_zero_offset() {
    assert_eq!(center_offset(150.0, 50.0, 200.0), 0.0);
    let off = pointer_offset(410.0, 320.0, 10.0, 20.0, 800.0, 600.0);
    assert_eq!(off, glam::Vec2::ZERO);
}

#[test]
fn offset_signs_follow_screen_axes() {
    let off = pointer_offset(0.0, 0.0, 0.0, 0.0, 800.0, 600.0);
    assert_eq!(off, glam::Vec2::new(-400.0, -300.0));
    let off = pointer_offset(800.0, 600.0, 0.0, 0.0, 800.0, 600.0);
    assert_eq!(off, glam::Vec2::new(400.0, 300.0));
}

#[test]
fn offset_accounts_for_canvas_origin() {
    let off = pointer_offset(100.0, 100.0, 100.0, 100.0, 200.0, 100.0);
    assert_eq!(off, glam::Vec2::new(-100.0, -50.0));
}

#[test]
fn pointer_state_starts_released_at_centre() {
    let ps = PointerState::default();
    assert!(!ps.down);
    assert_eq!(ps.offset, glam::Vec2::ZERO);
}
