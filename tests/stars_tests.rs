// Host-side tests for starfield generation.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod stars {
    include!("../src/core/stars.rs");
}

use stars::*;

#[test]
fn default_field_matches_parameters() {
    let params = StarfieldParams::default();
    let field = generate(&params);
    assert_eq!(field.len(), 5000);
    for s in &field {
        let r = s.position.length();
        assert!(r <= 150.0 + 1e-2, "r={}", r);
        assert!(r >= 100.0 - 1e-2, "r={}", r);
        assert!(s.size >= 2.0 && s.size <= 4.0, "size={}", s.size);
    }
}

#[test]
fn radius_shrinks_from_outside_in() {
    let field = generate(&StarfieldParams {
        count: 200,
        ..Default::default()
    });
    let radii: Vec<f32> = field.iter().map(|s| s.position.length()).collect();
    for w in radii.windows(2) {
        assert!(w[1] <= w[0] + 1e-3);
    }
}

#[test]
fn generation_is_deterministic_per_seed() {
    let a = generate(&StarfieldParams::default());
    let b = generate(&StarfieldParams::default());
    assert_eq!(a, b);
    let c = generate(&StarfieldParams {
        seed: 99,
        ..Default::default()
    });
    assert_ne!(a[0].position, c[0].position);
}

#[test]
fn zero_saturation_gives_grey_stars() {
    for s in generate(&StarfieldParams {
        count: 50,
        ..Default::default()
    }) {
        let [r, g, b] = s.color_rgb;
        assert!((r - 0.9).abs() < 1e-6 && r == g && g == b);
    }
}

#[test]
fn hsl_primaries() {
    let red = hsl_to_rgb(0.0, 1.0, 0.5);
    assert!((red[0] - 1.0).abs() < 1e-6 && red[1].abs() < 1e-6 && red[2].abs() < 1e-6);
    let green = hsl_to_rgb(1.0 / 3.0, 1.0, 0.5);
    assert!((green[1] - 1.0).abs() < 1e-5 && green[0].abs() < 1e-5);
    assert_eq!(hsl_to_rgb(0.4, 0.0, 0.25), [0.25, 0.25, 0.25]);
}

#[test]
fn empty_field() {
    let field = generate(&StarfieldParams {
        count: 0,
        ..Default::default()
    });
    assert!(field.is_empty());
}
