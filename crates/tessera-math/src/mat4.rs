// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::mat_ops::impl_matrix;
use crate::{Mat3, Quat, Vec3, Vec4};

/// Row-major 4×4 matrix.
///
/// - Stored as four rows; `m[row][col]` and the `e<row><col>` accessors
///   address the same storage.
/// - Represents affine transforms acting on column vectors: translation
///   lives in the fourth column, and `a * b` applies `b` first.
///
/// # Examples
/// ```
/// use tessera_math::{Mat4, Vec3};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(p).to_array(), [7.0, 1.0, 1.0]);
/// ```
///
/// # Precision
/// - Uses `f32`; repeated multiplies and transforms will accumulate rounding.
/// - Rotation helpers agree with [`Quat::to_mat4`] to within float tolerance.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4 {
    rows: [[f32; 4]; 4],
}

impl_matrix!(Mat4, 4, [
    e00 => (0, 0), e01 => (0, 1), e02 => (0, 2), e03 => (0, 3),
    e10 => (1, 0), e11 => (1, 1), e12 => (1, 2), e13 => (1, 3),
    e20 => (2, 0), e21 => (2, 1), e22 => (2, 2), e23 => (2, 3),
    e30 => (3, 0), e31 => (3, 1), e32 => (3, 2), e33 => (3, 3),
]);

impl Mat4 {
    /// Builds a matrix whose rows are the given vectors.
    pub const fn from_row_vectors(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self {
            rows: [r0.to_array(), r1.to_array(), r2.to_array(), r3.to_array()],
        }
    }

    /// Builds a translation matrix; translation occupies the fourth column.
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self {
            rows: [
                [1.0, 0.0, 0.0, tx],
                [0.0, 1.0, 0.0, ty],
                [0.0, 0.0, 1.0, tz],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Builds a non-uniform scale matrix.
    pub const fn scaling(sx: f32, sy: f32, sz: f32) -> Self {
        Self {
            rows: [
                [sx, 0.0, 0.0, 0.0],
                [0.0, sy, 0.0, 0.0],
                [0.0, 0.0, sz, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Builds a rotation about an arbitrary axis by `angle` radians using the
    /// Rodrigues formula. The axis is normalized exactly first and must be
    /// non-zero, so the result is orthonormal and its transpose is its inverse.
    pub fn rotation_axis_angle(axis: Vec3, angle: f32) -> Self {
        let a = axis.normalize_exact();
        let (x, y, z) = (a.x(), a.y(), a.z());
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        Self::from_rows([
            [x * x + (1.0 - x * x) * c, x * y * t - z * s, x * z * t + y * s, 0.0],
            [x * y * t + z * s, y * y + (1.0 - y * y) * c, y * z * t - x * s, 0.0],
            [x * z * t - y * s, y * z * t + x * s, z * z + (1.0 - z * z) * c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Constructs a rotation matrix from a quaternion.
    ///
    /// This simply forwards to [`Quat::to_mat4`].
    pub fn from_quat(q: &Quat) -> Self {
        q.to_mat4()
    }

    /// Embeds a 3×3 matrix as the upper-left block of an affine matrix.
    pub const fn from_mat3(m: &Mat3) -> Self {
        let r = m.to_rows();
        Self {
            rows: [
                [r[0][0], r[0][1], r[0][2], 0.0],
                [r[1][0], r[1][1], r[1][2], 0.0],
                [r[2][0], r[2][1], r[2][2], 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Upper-left 3×3 block (the linear part of an affine transform).
    pub const fn upper_left(&self) -> Mat3 {
        let r = &self.rows;
        Mat3::from_rows([
            [r[0][0], r[0][1], r[0][2]],
            [r[1][0], r[1][1], r[1][2]],
            [r[2][0], r[2][1], r[2][2]],
        ])
    }

    /// Determinant by full cofactor expansion.
    pub fn determinant(&self) -> f32 {
        let [[m00, m01, m02, m03], [m10, m11, m12, m13], [m20, m21, m22, m23], [m30, m31, m32, m33]] =
            self.rows;
        m03 * m12 * m21 * m30 - m02 * m13 * m21 * m30 - m03 * m11 * m22 * m30
            + m01 * m13 * m22 * m30
            + m02 * m11 * m23 * m30
            - m01 * m12 * m23 * m30
            - m03 * m12 * m20 * m31
            + m02 * m13 * m20 * m31
            + m03 * m10 * m22 * m31
            - m00 * m13 * m22 * m31
            - m02 * m10 * m23 * m31
            + m00 * m12 * m23 * m31
            + m03 * m11 * m20 * m32
            - m01 * m13 * m20 * m32
            - m03 * m10 * m21 * m32
            + m00 * m13 * m21 * m32
            + m01 * m10 * m23 * m32
            - m00 * m11 * m23 * m32
            - m02 * m11 * m20 * m33
            + m01 * m12 * m20 * m33
            + m02 * m10 * m21 * m33
            - m00 * m12 * m21 * m33
            - m01 * m10 * m22 * m33
            + m00 * m11 * m22 * m33
    }

    /// Closed-form inverse (adjugate over determinant).
    ///
    /// Returns the identity when the determinant is exactly zero; use
    /// [`Self::try_inverse`] to observe that case.
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or(Self::IDENTITY)
    }

    /// Closed-form inverse, or `None` when the determinant is exactly zero.
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }
        let [[m00, m01, m02, m03], [m10, m11, m12, m13], [m20, m21, m22, m23], [m30, m31, m32, m33]] =
            self.rows;
        let k = 1.0 / det;
        let rows = [
            [
                k * (m12 * m23 * m31 - m13 * m22 * m31 + m13 * m21 * m32 - m11 * m23 * m32 - m12 * m21 * m33
                    + m11 * m22 * m33),
                k * (m03 * m22 * m31 - m02 * m23 * m31 - m03 * m21 * m32 + m01 * m23 * m32 + m02 * m21 * m33
                    - m01 * m22 * m33),
                k * (m02 * m13 * m31 - m03 * m12 * m31 + m03 * m11 * m32 - m01 * m13 * m32 - m02 * m11 * m33
                    + m01 * m12 * m33),
                k * (m03 * m12 * m21 - m02 * m13 * m21 - m03 * m11 * m22 + m01 * m13 * m22 + m02 * m11 * m23
                    - m01 * m12 * m23),
            ],
            [
                k * (m13 * m22 * m30 - m12 * m23 * m30 - m13 * m20 * m32 + m10 * m23 * m32 + m12 * m20 * m33
                    - m10 * m22 * m33),
                k * (m02 * m23 * m30 - m03 * m22 * m30 + m03 * m20 * m32 - m00 * m23 * m32 - m02 * m20 * m33
                    + m00 * m22 * m33),
                k * (m03 * m12 * m30 - m02 * m13 * m30 - m03 * m10 * m32 + m00 * m13 * m32 + m02 * m10 * m33
                    - m00 * m12 * m33),
                k * (m02 * m13 * m20 - m03 * m12 * m20 + m03 * m10 * m22 - m00 * m13 * m22 - m02 * m10 * m23
                    + m00 * m12 * m23),
            ],
            [
                k * (m11 * m23 * m30 - m13 * m21 * m30 + m13 * m20 * m31 - m10 * m23 * m31 - m11 * m20 * m33
                    + m10 * m21 * m33),
                k * (m03 * m21 * m30 - m01 * m23 * m30 - m03 * m20 * m31 + m00 * m23 * m31 + m01 * m20 * m33
                    - m00 * m21 * m33),
                k * (m01 * m13 * m30 - m03 * m11 * m30 + m03 * m10 * m31 - m00 * m13 * m31 - m01 * m10 * m33
                    + m00 * m11 * m33),
                k * (m03 * m11 * m20 - m01 * m13 * m20 - m03 * m10 * m21 + m00 * m13 * m21 + m01 * m10 * m23
                    - m00 * m11 * m23),
            ],
            [
                k * (m12 * m21 * m30 - m11 * m22 * m30 - m12 * m20 * m31 + m10 * m22 * m31 + m11 * m20 * m32
                    - m10 * m21 * m32),
                k * (m01 * m22 * m30 - m02 * m21 * m30 + m02 * m20 * m31 - m00 * m22 * m31 - m01 * m20 * m32
                    + m00 * m21 * m32),
                k * (m02 * m11 * m30 - m01 * m12 * m30 - m02 * m10 * m31 + m00 * m12 * m31 + m01 * m10 * m32
                    - m00 * m11 * m32),
                k * (m01 * m12 * m20 - m02 * m11 * m20 + m02 * m10 * m21 - m00 * m12 * m21 - m01 * m10 * m22
                    + m00 * m11 * m22),
            ],
        ];
        Some(Self { rows })
    }

    /// Full homogeneous product `self * v`.
    pub fn mul_vec4(&self, v: Vec4) -> Vec4 {
        let r = &self.rows;
        let [x, y, z, w] = v.to_array();
        Vec4::new(
            r[0][0] * x + r[0][1] * y + r[0][2] * z + r[0][3] * w,
            r[1][0] * x + r[1][1] * y + r[1][2] * z + r[1][3] * w,
            r[2][0] * x + r[2][1] * y + r[2][2] * z + r[2][3] * w,
            r[3][0] * x + r[3][1] * y + r[3][2] * z + r[3][3] * w,
        )
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    ///
    /// Translation components are applied; the bottom row is ignored.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        let r = &self.rows;
        let [x, y, z] = point.to_array();
        Vec3::new(
            r[0][0] * x + r[0][1] * y + r[0][2] * z + r[0][3],
            r[1][0] * x + r[1][1] * y + r[1][2] * z + r[1][3],
            r[2][0] * x + r[2][1] * y + r[2][2] * z + r[2][3],
        )
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    pub fn transform_direction(&self, direction: Vec3) -> Vec3 {
        let r = &self.rows;
        let [x, y, z] = direction.to_array();
        Vec3::new(
            r[0][0] * x + r[0][1] * y + r[0][2] * z,
            r[1][0] * x + r[1][1] * y + r[1][2] * z,
            r[2][0] * x + r[2][1] * y + r[2][2] * z,
        )
    }

    /// Transforms a direction by the transpose of `self` (upper 3×3 only).
    ///
    /// Applied to an inverse matrix this is the normal-transformation rule.
    pub fn transform_direction_transposed(&self, direction: Vec3) -> Vec3 {
        let r = &self.rows;
        let [x, y, z] = direction.to_array();
        Vec3::new(
            r[0][0] * x + r[1][0] * y + r[2][0] * z,
            r[0][1] * x + r[1][1] * y + r[2][1] * z,
            r[0][2] * x + r[1][2] * y + r[2][2] * z,
        )
    }
}

impl core::ops::Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.mul_vec4(rhs)
    }
}
