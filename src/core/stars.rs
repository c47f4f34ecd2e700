use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

use super::constants::{
    STAR_COUNT, STAR_DEPTH, STAR_LIGHTNESS, STAR_RADIUS, STAR_SATURATION, STAR_SEED,
    STAR_SIZE_FACTOR,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub color_rgb: [f32; 3],
    pub size: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StarfieldParams {
    pub radius: f32,
    pub depth: f32,
    pub count: usize,
    pub factor: f32,
    pub saturation: f32,
    pub seed: u64,
}

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            radius: STAR_RADIUS,
            depth: STAR_DEPTH,
            count: STAR_COUNT,
            factor: STAR_SIZE_FACTOR,
            saturation: STAR_SATURATION,
            seed: STAR_SEED,
        }
    }
}

/// Convert HSL (all in [0, 1]) to linear-ish RGB.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s <= 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let hue = |mut t: f32| {
        t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * 6.0 * (2.0 / 3.0 - t)
        } else {
            p
        }
    };
    [hue(h + 1.0 / 3.0), hue(h), hue(h - 1.0 / 3.0)]
}

/// Point on a sphere of radius `r` from polar angle `phi` (from +Y) and azimuth `theta`.
#[inline]
fn from_spherical(r: f32, phi: f32, theta: f32) -> Vec3 {
    let sin_phi = phi.sin();
    Vec3::new(r * sin_phi * theta.sin(), r * phi.cos(), r * sin_phi * theta.cos())
}

/// Scatter stars over shells between `radius` and `radius + depth`.
///
/// Each star sits a little closer in than the previous one, so the field fills
/// the depth range from the outside in. Directions are uniform on the sphere.
pub fn generate(params: &StarfieldParams) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let count = params.count.max(1);
    let increment = params.depth / count as f32;
    let mut r = params.radius + params.depth;
    let mut stars = Vec::with_capacity(params.count);
    for i in 0..params.count {
        r -= increment * rng.gen::<f32>();
        let phi = (1.0 - rng.gen::<f32>() * 2.0).clamp(-1.0, 1.0).acos();
        let theta = rng.gen::<f32>() * TAU;
        let color_rgb = hsl_to_rgb(i as f32 / count as f32, params.saturation, STAR_LIGHTNESS);
        let size = (0.5 + 0.5 * rng.gen::<f32>()) * params.factor;
        stars.push(Star {
            position: from_spherical(r, phi, theta),
            color_rgb,
            size,
        });
    }
    stars
}
