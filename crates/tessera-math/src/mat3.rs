// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::mat_ops::impl_matrix;
use crate::Vec3;

/// Row-major 3×3 matrix.
///
/// Elements are reachable as `m[row][col]` or through the `e<row><col>`
/// accessors.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3 {
    rows: [[f32; 3]; 3],
}

impl_matrix!(Mat3, 3, [
    e00 => (0, 0), e01 => (0, 1), e02 => (0, 2),
    e10 => (1, 0), e11 => (1, 1), e12 => (1, 2),
    e20 => (2, 0), e21 => (2, 1), e22 => (2, 2),
]);

impl Mat3 {
    /// Builds a matrix whose rows are `r0`, `r1`, `r2`.
    pub const fn from_row_vectors(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Self {
            rows: [r0.to_array(), r1.to_array(), r2.to_array()],
        }
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Inverse via the adjugate.
    ///
    /// Returns the identity when the determinant is exactly zero.
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or(Self::IDENTITY)
    }

    /// Inverse via the adjugate, or `None` when the determinant is exactly zero.
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }
        let inv = 1.0 / det;
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows;
        Some(Self {
            rows: [
                [(e * i - f * h) * inv, (c * h - b * i) * inv, (b * f - c * e) * inv],
                [(f * g - d * i) * inv, (a * i - c * g) * inv, (c * d - a * f) * inv],
                [(d * h - e * g) * inv, (b * g - a * h) * inv, (a * e - b * d) * inv],
            ],
        })
    }

    /// Matrix-vector product `self * v`.
    pub fn mul_vec3(&self, v: Vec3) -> Vec3 {
        let r = &self.rows;
        Vec3::new(
            r[0][0] * v.x() + r[0][1] * v.y() + r[0][2] * v.z(),
            r[1][0] * v.x() + r[1][1] * v.y() + r[1][2] * v.z(),
            r[2][0] * v.x() + r[2][1] * v.y() + r[2][2] * v.z(),
        )
    }
}

impl core::ops::Mul<Vec3> for Mat3 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.mul_vec3(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_of_singular_matrix_is_identity() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
        assert_eq!(m.determinant(), 0.0);
        assert_eq!(m.inverse(), Mat3::IDENTITY);
        assert!(m.try_inverse().is_none());
    }

    #[test]
    fn inverse_round_trips() {
        let m = Mat3::from_rows([[2.0, 0.0, 1.0], [1.0, 3.0, 0.0], [0.0, 1.0, 4.0]]);
        let prod = m * m.inverse();
        assert!(prod.max_abs_diff(&Mat3::IDENTITY) < 1e-6);
    }
}
