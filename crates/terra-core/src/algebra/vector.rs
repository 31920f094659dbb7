use std::ops::{Add, Mul, Neg, Sub};

use glam::DVec3;

use crate::error::{AlgebraError, Result};

/// A point or free direction in 3D. Callers append the homogeneous
/// coordinate themselves when a 4x4 matrix is involved.
pub type Vector = DVec3;

/// Oriented plane over the basis planes yz, zx and xy.
///
/// As a rotation descriptor, `yz` plays the role of the X axis, `zx` of Y
/// and `xy` of Z.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bivector {
    pub yz: f64,
    pub zx: f64,
    pub xy: f64,
}

impl Bivector {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Plane perpendicular to X.
    pub const YZ: Self = Self::new(1.0, 0.0, 0.0);
    /// Plane perpendicular to Y.
    pub const ZX: Self = Self::new(0.0, 1.0, 0.0);
    /// Plane perpendicular to Z.
    pub const XY: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(yz: f64, zx: f64, xy: f64) -> Self {
        Self { yz, zx, xy }
    }

    pub const fn from_array([yz, zx, xy]: [f64; 3]) -> Self {
        Self { yz, zx, xy }
    }

    pub const fn to_array(self) -> [f64; 3] {
        [self.yz, self.zx, self.xy]
    }

    pub fn magnitude(self) -> f64 {
        scaled_norm(&self.to_array())
    }
}

impl Add for Bivector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.yz + rhs.yz, self.zx + rhs.zx, self.xy + rhs.xy)
    }
}

impl Sub for Bivector {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.yz - rhs.yz, self.zx - rhs.zx, self.xy - rhs.xy)
    }
}

impl Neg for Bivector {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.yz, -self.zx, -self.xy)
    }
}

impl Mul<f64> for Bivector {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.yz * rhs, self.zx * rhs, self.xy * rhs)
    }
}

/// Three-component quantities that can be rescaled to unit length.
pub trait Magnitude: Copy {
    fn magnitude_squared(&self) -> f64;
    fn components(&self) -> [f64; 3];
    fn div_scalar(self, divisor: f64) -> Self;
}

/// Euclidean norm that stays finite for components near the edges of the
/// `f64` range.
///
/// Components are divided by the largest absolute component before being
/// squared, so the sum of squares lies in `[1, n]` and cannot overflow or
/// flush to zero. Returns `0.0` only when every component is zero and a
/// non-finite value when any component is NaN or infinite.
pub fn scaled_norm(components: &[f64]) -> f64 {
    let mut scale = 0.0_f64;
    for c in components {
        if c.is_nan() {
            return f64::NAN;
        }
        scale = scale.max(c.abs());
    }
    if scale == 0.0 || scale.is_infinite() {
        return scale;
    }
    let sum: f64 = components
        .iter()
        .map(|c| {
            let u = c / scale;
            u * u
        })
        .sum();
    scale * sum.sqrt()
}

impl Magnitude for DVec3 {
    fn magnitude_squared(&self) -> f64 {
        self.length_squared()
    }

    fn components(&self) -> [f64; 3] {
        self.to_array()
    }

    fn div_scalar(self, divisor: f64) -> Self {
        self / divisor
    }
}

impl Magnitude for Bivector {
    fn magnitude_squared(&self) -> f64 {
        self.yz * self.yz + self.zx * self.zx + self.xy * self.xy
    }

    fn components(&self) -> [f64; 3] {
        self.to_array()
    }

    fn div_scalar(self, divisor: f64) -> Self {
        Self::new(self.yz / divisor, self.zx / divisor, self.xy / divisor)
    }
}

/// Scale a vector or bivector to unit magnitude.
///
/// Zero and non-finite magnitudes are rejected instead of producing NaN.
/// Tiny and huge but finite inputs still normalize.
pub fn normalize<T: Magnitude>(v: T) -> Result<T> {
    let magnitude = scaled_norm(&v.components());
    if magnitude == 0.0 || !magnitude.is_finite() {
        return Err(AlgebraError::ZeroMagnitude);
    }
    Ok(v.div_scalar(magnitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_vector() {
        let v = normalize(DVec3::new(3.0, 0.0, 4.0)).unwrap();
        assert!((v - DVec3::new(0.6, 0.0, 0.8)).length() < 1e-12);
    }

    #[test]
    fn test_normalize_bivector() {
        let b = normalize(Bivector::new(0.0, -2.0, 0.0)).unwrap();
        assert_eq!(b, Bivector::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_normalize_zero_is_error() {
        assert_eq!(normalize(DVec3::ZERO), Err(AlgebraError::ZeroMagnitude));
        assert_eq!(normalize(Bivector::ZERO), Err(AlgebraError::ZeroMagnitude));
    }

    #[test]
    fn test_normalize_nan_is_error() {
        assert!(normalize(DVec3::new(f64::NAN, 1.0, 0.0)).is_err());
        assert!(normalize(Bivector::new(f64::INFINITY, 0.0, 0.0)).is_err());
    }

    #[test]
    fn test_scaled_norm_extremes() {
        assert_eq!(scaled_norm(&[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(scaled_norm(&[3.0, 0.0, -4.0]), 5.0);
        assert!((scaled_norm(&[3e-170, 4e-170, 0.0]) / 5e-170 - 1.0).abs() < 1e-12);
        assert!((scaled_norm(&[3e200, 0.0, 4e200]) / 5e200 - 1.0).abs() < 1e-12);
        assert!(scaled_norm(&[f64::NAN, 1.0, 0.0]).is_nan());
        assert!(scaled_norm(&[1.0, f64::NEG_INFINITY, 0.0]).is_infinite());
    }
}
