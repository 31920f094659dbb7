use std::ops::Mul;

use glam::{DMat4, DVec3};

use super::vector::Vector;

/// 4x4 transform stored row-major. The bottom row is the projective part.
///
/// Vectors are column vectors multiplied on the right, so in `a * b` the
/// transform `b` is applied to a vector first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix {
    pub rows: [[f64; 4]; 4],
}

pub const IDENTITY_MATRIX: Matrix = Matrix::IDENTITY;

impl Matrix {
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self { rows }
    }

    pub fn transpose(&self) -> Self {
        let mut rows = [[0.0; 4]; 4];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, value) in row.iter_mut().enumerate() {
                *value = self.rows[c][r];
            }
        }
        Self { rows }
    }

    /// Upper-left 3x3 block (the linear part of an affine transform).
    pub fn linear_block(&self) -> [[f64; 3]; 3] {
        let m = &self.rows;
        [
            [m[0][0], m[0][1], m[0][2]],
            [m[1][0], m[1][1], m[1][2]],
            [m[2][0], m[2][1], m[2][2]],
        ]
    }

    /// Translation column.
    pub fn translation(&self) -> Vector {
        DVec3::new(self.rows[0][3], self.rows[1][3], self.rows[2][3])
    }

    /// Column-major `f32` layout for a `uniformMatrix4fv` style upload with
    /// `transpose = false`: element `i` is `rows[i % 4][i / 4]`.
    pub fn to_cols_array_f32(&self) -> [f32; 16] {
        let mut out = [0.0f32; 16];
        for (i, value) in out.iter_mut().enumerate() {
            *value = self.rows[i % 4][i / 4] as f32;
        }
        out
    }

    pub fn to_dmat4(&self) -> DMat4 {
        DMat4::from_cols_array_2d(&self.transpose().rows)
    }

    pub fn from_dmat4(m: &DMat4) -> Self {
        Self::from_rows(m.to_cols_array_2d()).transpose()
    }

    /// Largest absolute entry-wise difference to `other`.
    pub fn max_abs_diff(&self, other: &Matrix) -> f64 {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix {
    type Output = Matrix;
    fn mul(self, rhs: Matrix) -> Matrix {
        matrix_multiply(self, rhs)
    }
}

impl Mul<Vector> for Matrix {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Vector {
        matrix_mul_vec(self, rhs)
    }
}

/// `C[r][c] = sum_i A[r][i] * B[i][c]`.
pub fn matrix_multiply(a: Matrix, b: Matrix) -> Matrix {
    let mut rows = [[0.0; 4]; 4];
    for (r, row) in rows.iter_mut().enumerate() {
        for (c, value) in row.iter_mut().enumerate() {
            let mut sum = 0.0;
            for i in 0..4 {
                sum += a.rows[r][i] * b.rows[i][c];
            }
            *value = sum;
        }
    }
    Matrix { rows }
}

/// Left fold from the identity: `((I * m0) * m1) * ... * mn`.
///
/// The last matrix in the list is the first one applied to a vector.
pub fn matrix_list_multiply(mats: &[Matrix]) -> Matrix {
    mats.iter()
        .fold(Matrix::IDENTITY, |acc, next| matrix_multiply(acc, *next))
}

/// Apply `mat` to `vec` with an implicit homogeneous 1, keeping the first
/// three components. No perspective divide.
pub fn matrix_mul_vec(mat: Matrix, vec: Vector) -> Vector {
    let with_one = [vec.x, vec.y, vec.z, 1.0];
    let mut out = [0.0; 3];
    for (row, value) in out.iter_mut().enumerate() {
        *value = with_one
            .iter()
            .enumerate()
            .fold(0.0, |acc, (i, v)| acc + v * mat.rows[row][i]);
    }
    DVec3::from_array(out)
}

pub fn make_translation_matrix(dx: f64, dy: f64, dz: f64) -> Matrix {
    Matrix::from_rows([
        [1.0, 0.0, 0.0, dx],
        [0.0, 1.0, 0.0, dy],
        [0.0, 0.0, 1.0, dz],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn make_scale_matrix(sx: f64, sy: f64, sz: f64) -> Matrix {
    Matrix::from_rows([
        [sx, 0.0, 0.0, 0.0],
        [0.0, sy, 0.0, 0.0],
        [0.0, 0.0, sz, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Perspective frustum from its left/right, bottom/top and near/far planes.
pub fn make_frustum_matrix(l: f64, r: f64, b: f64, t: f64, n: f64, f: f64) -> Matrix {
    Matrix::from_rows([
        [(2.0 * n) / (r - l), 0.0, (r + l) / (r - l), 0.0],
        [0.0, (2.0 * n) / (t - b), (t + b) / (t - b), 0.0],
        [0.0, 0.0, (n + f) / (n - f), (2.0 * n * f) / (n - f)],
        [0.0, 0.0, -1.0, 0.0],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_moves_point() {
        let p = matrix_mul_vec(make_translation_matrix(1.0, -2.0, 3.0), DVec3::ONE);
        assert_eq!(p, DVec3::new(2.0, -1.0, 4.0));
    }

    #[test]
    fn test_cols_array_layout() {
        let m = make_translation_matrix(7.0, 8.0, 9.0);
        let cols = m.to_cols_array_f32();
        // translation ends up in the last column
        assert_eq!(&cols[12..15], &[7.0, 8.0, 9.0]);
        assert_eq!(cols[15], 1.0);
    }

    #[test]
    fn test_dmat4_round_trip_preserves_rows() {
        let m = make_translation_matrix(1.0, 2.0, 3.0) * make_scale_matrix(2.0, 3.0, 4.0);
        let g = m.to_dmat4();
        assert_eq!(g.w_axis.truncate(), DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(Matrix::from_dmat4(&g), m);
    }
}
