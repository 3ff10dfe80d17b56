//! Interpolation primitives:
//! - lerp (component-wise linear blend)
//! - smooth_factor (frame-rate-independent exponential easing)
//! - Vec3 (positions, Euler rotation vectors, scales)

use serde::{Deserialize, Serialize};

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Easing weight for one frame: `1 - base^dt`.
///
/// Two consecutive steps of `dt1` and `dt2` compose to the same factor as a
/// single step of `dt1 + dt2`, so convergence speed does not depend on the
/// host's frame rate.
#[inline]
pub fn smooth_factor(base: f32, dt: f32) -> f32 {
    1.0 - base.powf(dt)
}

/// 3D vector with f32 components.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Component-wise linear interpolation toward `rhs`.
    #[inline]
    pub fn lerp(self, rhs: Self, t: f32) -> Self {
        Self {
            x: lerp(self.x, rhs.x, t),
            y: lerp(self.y, rhs.y, t),
            z: lerp(self.z, rhs.z, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32, eps: f32) {
        assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        approx(lerp(2.0, 4.0, 0.0), 2.0, 1e-6);
        approx(lerp(2.0, 4.0, 1.0), 4.0, 1e-6);
        approx(lerp(2.0, 4.0, 0.5), 3.0, 1e-6);
        // Unclamped: t outside [0,1] extrapolates.
        approx(lerp(2.0, 4.0, 2.0), 6.0, 1e-6);
    }

    #[test]
    fn vec3_lerp_componentwise() {
        let a = Vec3::new(0.0, 1.0, -1.0);
        let b = Vec3::new(1.0, 3.0, 1.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vec3::new(0.5, 2.0, 0.0));
    }

    #[test]
    fn smooth_factor_limits() {
        approx(smooth_factor(0.001, 0.0), 0.0, 1e-6);
        // Large dt drives the factor to 1 (base^dt underflows to 0).
        approx(smooth_factor(0.001, 1000.0), 1.0, 1e-6);
    }

    #[test]
    fn smooth_factor_composes_across_frames() {
        // Easing by f1 then f2 equals easing once by the combined factor:
        // 1 - (1-f1)(1-f2) == 1 - base^(dt1+dt2)
        let (dt1, dt2) = (0.016, 0.033);
        let f1 = smooth_factor(0.001, dt1);
        let f2 = smooth_factor(0.001, dt2);
        let combined = 1.0 - (1.0 - f1) * (1.0 - f2);
        approx(combined, smooth_factor(0.001, dt1 + dt2), 1e-6);
    }

    #[test]
    fn vec3_serde_roundtrip() {
        let v = Vec3::new(1.5, -0.25, 0.65);
        let s = serde_json::to_string(&v).unwrap();
        let v2: Vec3 = serde_json::from_str(&s).unwrap();
        assert_eq!(v, v2);
    }
}
