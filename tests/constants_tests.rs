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
fn smoothing_times_are_positive_and_ordered() {
    assert!(BLEND_SMOOTH_TIME_SEC > 0.0);
    assert!(SCROLL_SMOOTH_TIME_SEC > 0.0);
    // Portals open faster than the camera travels to them
    assert!(BLEND_SMOOTH_TIME_SEC < RIG_SMOOTH_TIME_SEC);
    assert!(SCROLL_EPS < DAMP_EPS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn focus_viewpoint_sits_in_front_of_the_plane() {
    assert!(FOCUS_OFFSET_LOCAL.z > 0.0);
    assert!(FOCUS_OFFSET_LOCAL.z * FRAME_SCALE > CAMERA_NEAR);
    assert!(OVERVIEW_POSITION.z > FOCUS_OFFSET_LOCAL.z);
    assert!((FOCUS_TURN_PER_ID * FRAME_COUNT as f32 - std::f32::consts::TAU).abs() < 1e-6);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn starfield_fits_in_the_far_plane() {
    assert!(STAR_RADIUS + STAR_DEPTH < CAMERA_FAR);
    assert!(STAR_RADIUS > OVERVIEW_POSITION.length());
    assert!((0.0..=1.0).contains(&STAR_SATURATION));
    assert!((0.0..=1.0).contains(&STAR_LIGHTNESS));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_pages_match_frames() {
    assert_eq!(SCROLL_PAGES as usize, FRAME_COUNT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn web_thresholds_are_sane() {
    assert!(CLICK_SLOP_PX > 0.0);
    assert!(WHEEL_LINE_PX > 0.0);
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC < 1.0);
    assert!(LABEL_MIN_FONT_PX < LABEL_MAX_FONT_PX);
    assert!((0.0..=1.0).contains(&IMMERSION_STRENGTH));
    assert_ne!(CANVAS_ID, OVERLAY_ROOT_ID);
    assert_ne!(OVERLAY_ROOT_ID, LABELS_ROOT_ID);
}
