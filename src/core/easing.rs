use glam::Vec3;
use std::f32::consts::{PI, TAU};

use super::constants::DAMP_EPS;

/// Cheap approximation of `exp(-x)` used by the critically damped spring.
#[inline]
pub fn exp_decay(x: f32) -> f32 {
    1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x)
}

/// Wrap `t` into `[0, length)`.
#[inline]
pub fn repeat(t: f32, length: f32) -> f32 {
    (t - (t / length).floor() * length).clamp(0.0, length)
}

/// Signed shortest angular distance from `current` to `target`, in `(-π, π]`.
#[inline]
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut delta = repeat(target - current, TAU);
    if delta > PI {
        delta -= TAU;
    }
    delta
}

/// A scalar driven toward a target by a critically damped spring.
///
/// The step is parameterized by the elapsed frame time, so the motion is the
/// same at 30 Hz and 144 Hz. `smooth_time` is roughly the time it takes to
/// cover most of the distance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Damped {
    pub value: f32,
    pub velocity: f32,
}

impl Damped {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
        }
    }

    /// Step toward `target`. Returns `false` once the value has settled.
    pub fn damp(&mut self, target: f32, smooth_time: f32, dt: f32) -> bool {
        self.damp_eps(target, smooth_time, dt, DAMP_EPS)
    }

    /// Like [`Damped::damp`] with an explicit snap threshold.
    pub fn damp_eps(&mut self, target: f32, smooth_time: f32, dt: f32, eps: f32) -> bool {
        if (self.value - target).abs() <= eps {
            self.value = target;
            self.velocity = 0.0;
            return false;
        }
        let dt = dt.max(0.0);
        if dt == 0.0 {
            return true;
        }
        let smooth_time = smooth_time.max(0.0001);
        let omega = 2.0 / smooth_time;
        let decay = exp_decay(omega * dt);
        let change = self.value - target;
        let temp = (self.velocity + omega * change) * dt;
        self.velocity = (self.velocity - omega * temp) * decay;
        let mut output = target + (change + temp) * decay;
        // Never overshoot the target
        if (target - self.value > 0.0) == (output > target) {
            output = target;
            self.velocity = (output - target) / dt;
        }
        self.value = output;
        true
    }

    /// Step toward `target` treating both as angles, taking the short way round.
    pub fn damp_angle(&mut self, target: f32, smooth_time: f32, dt: f32) -> bool {
        let unwrapped = self.value + delta_angle(self.value, target);
        self.damp(unwrapped, smooth_time, dt)
    }
}

/// Three independently damped components, used for positions and Euler angles.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Damped3 {
    pub x: Damped,
    pub y: Damped,
    pub z: Damped,
}

impl Damped3 {
    pub fn new(v: Vec3) -> Self {
        Self {
            x: Damped::new(v.x),
            y: Damped::new(v.y),
            z: Damped::new(v.z),
        }
    }

    #[inline]
    pub fn value(&self) -> Vec3 {
        Vec3::new(self.x.value, self.y.value, self.z.value)
    }

    pub fn damp(&mut self, target: Vec3, smooth_time: f32, dt: f32) -> bool {
        let a = self.x.damp(target.x, smooth_time, dt);
        let b = self.y.damp(target.y, smooth_time, dt);
        let c = self.z.damp(target.z, smooth_time, dt);
        a || b || c
    }

    pub fn damp_euler(&mut self, target: Vec3, smooth_time: f32, dt: f32) -> bool {
        let a = self.x.damp_angle(target.x, smooth_time, dt);
        let b = self.y.damp_angle(target.y, smooth_time, dt);
        let c = self.z.damp_angle(target.z, smooth_time, dt);
        a || b || c
    }
}
