use std::ops::Mul;

use crate::error::{AlgebraError, Result};

use super::matrix::Matrix;
use super::vector::{scaled_norm, Bivector, Magnitude};

/// How far a rotor's squared norm may sit from 1 and still count as unit.
pub const UNIT_TOLERANCE: f64 = 1e-6;

/// Scalar plus bivector: an element of the even subalgebra of 3D GA.
///
/// Unit norm is not enforced. A unit rotor behaves like a unit quaternion
/// with `(yz, zx, xy)` in place of `(i, j, k)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotor {
    pub scalar: f64,
    pub bivector: Bivector,
}

impl Rotor {
    pub const IDENTITY: Self = Self::new(1.0, Bivector::ZERO);

    pub const fn new(scalar: f64, bivector: Bivector) -> Self {
        Self { scalar, bivector }
    }

    pub fn norm_squared(&self) -> f64 {
        self.scalar * self.scalar + self.bivector.magnitude_squared()
    }

    /// Norm computed without squaring raw components, so it stays finite
    /// where `norm_squared` would overflow or flush to zero.
    pub fn norm(&self) -> f64 {
        let Bivector { yz, zx, xy } = self.bivector;
        scaled_norm(&[self.scalar, yz, zx, xy])
    }

    /// Negated bivector part. Equals the inverse for unit rotors.
    pub fn reverse(&self) -> Self {
        Self::new(self.scalar, -self.bivector)
    }

    pub fn is_unit(&self) -> bool {
        (self.norm_squared() - 1.0).abs() <= UNIT_TOLERANCE
    }

    pub fn normalized(&self) -> Result<Self> {
        let norm = self.norm();
        if norm == 0.0 || !norm.is_finite() {
            return Err(AlgebraError::ZeroNormRotor);
        }
        Ok(Self::new(self.scalar / norm, self.bivector.div_scalar(norm)))
    }
}

impl Default for Rotor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Rotor {
    type Output = Rotor;
    fn mul(self, rhs: Rotor) -> Rotor {
        rotor_multiply(self, rhs)
    }
}

/// Geometric product of two rotors. `rotor_multiply(a, b)` rotates by `b`
/// first, then by `a`.
pub fn rotor_multiply(r1: Rotor, r2: Rotor) -> Rotor {
    let (s1, b1) = (r1.scalar, r1.bivector);
    let (s2, b2) = (r2.scalar, r2.bivector);

    let scalar = s1 * s2 - b1.yz * b2.yz - b1.zx * b2.zx - b1.xy * b2.xy;
    let yz = s1 * b2.yz + b1.yz * s2 + b1.zx * b2.xy - b1.xy * b2.zx;
    let zx = s1 * b2.zx + b1.zx * s2 + b1.xy * b2.yz - b1.yz * b2.xy;
    let xy = s1 * b2.xy + b1.xy * s2 + b1.yz * b2.zx - b1.zx * b2.yz;

    Rotor::new(scalar, Bivector::new(yz, zx, xy))
}

/// Rotation by `radians` in the plane `plane`.
///
/// `plane` must already be unit length; it is not normalized here.
pub fn make_rotation_rotor(radians: f64, plane: Bivector) -> Rotor {
    let half = radians / 2.0;
    Rotor::new(half.cos(), plane * half.sin())
}

/// Conjugate over squared norm. The true inverse for any nonzero rotor.
///
/// The squared norm is never formed; dividing twice by the norm keeps
/// rotors near the edges of the `f64` range invertible.
pub fn invert_rotor(r: Rotor) -> Result<Rotor> {
    let norm = r.norm();
    if norm == 0.0 || !norm.is_finite() {
        return Err(AlgebraError::ZeroNormRotor);
    }
    let conjugate = r.reverse();
    Ok(Rotor::new(
        conjugate.scalar / norm / norm,
        conjugate.bivector.div_scalar(norm).div_scalar(norm),
    ))
}

/// Expand a rotor into a 4x4 matrix.
///
/// The bottom-right entry is the rotor's squared norm, so the result is a
/// pure rotation only for unit rotors. See [`rotor_to_matrix_checked`].
pub fn rotor_to_matrix(r: Rotor) -> Matrix {
    let w = r.scalar;
    let Bivector { yz, zx, xy } = r.bivector;

    Matrix::from_rows([
        [
            w * w + yz * yz - zx * zx - xy * xy,
            2.0 * yz * zx - 2.0 * w * xy,
            2.0 * yz * xy + 2.0 * w * zx,
            0.0,
        ],
        [
            2.0 * yz * zx + 2.0 * w * xy,
            w * w - yz * yz + zx * zx - xy * xy,
            2.0 * zx * xy - 2.0 * w * yz,
            0.0,
        ],
        [
            2.0 * yz * xy - 2.0 * w * zx,
            2.0 * zx * xy + 2.0 * w * yz,
            w * w - yz * yz - zx * zx + xy * xy,
            0.0,
        ],
        [0.0, 0.0, 0.0, w * w + yz * yz + zx * zx + xy * xy],
    ])
}

/// [`rotor_to_matrix`] that refuses rotors further than [`UNIT_TOLERANCE`]
/// from unit norm.
pub fn rotor_to_matrix_checked(r: Rotor) -> Result<Matrix> {
    if !r.is_unit() {
        return Err(AlgebraError::NonUnitRotor {
            norm_squared: r.norm_squared(),
        });
    }
    Ok(rotor_to_matrix(r))
}
