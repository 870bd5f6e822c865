// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tessera_math::{to_radians, Mat4, Normal3, Point3, Quat, Vec3, Vec4};
use thiserror::Error;
use tracing::debug;

use super::rect::Rect3;

/// Tolerance used by [`Transform::has_scale`].
const SCALE_TOLERANCE: f32 = 1e-3;

/// Coordinate axis selector for single-axis rotations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

/// Error type for the fallible transform constructors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    /// The matrix has an exactly zero determinant.
    #[error("matrix is singular")]
    Singular,
    /// A scale factor is zero, so the transform cannot be inverted.
    #[error("zero scale on {axis:?} axis")]
    ZeroScale {
        /// The offending axis.
        axis: Axis,
    },
}

/// Invertible affine transform stored as a forward/inverse matrix pair.
///
/// Conventions:
/// - Matrices are row-major and act on column vectors.
/// - `a * b` (and [`Transform::compose`]) applies `b` first, then `a`.
/// - Rotation angles are in degrees.
///
/// The inverse is computed once at construction (or derived analytically for
/// the elementary constructors) so that every `apply_inverse_*` call and
/// normal transformation is a plain matrix product.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    m: Mat4,
    m_inv: Mat4,
}

impl Transform {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        m: Mat4::IDENTITY,
        m_inv: Mat4::IDENTITY,
    };

    /// Pairs a matrix with a known inverse. The caller guarantees
    /// `m * m_inv ≈ I`.
    pub const fn from_parts(m: Mat4, m_inv: Mat4) -> Self {
        Self { m, m_inv }
    }

    /// Wraps `m`, inverting it numerically.
    ///
    /// A singular `m` gets an identity inverse; the degenerate case is
    /// logged but not reported. Use [`Self::try_from_mat4`] to observe it.
    pub fn from_mat4(m: Mat4) -> Self {
        Self::try_from_mat4(m).unwrap_or_else(|_| {
            debug!("singular matrix; inverse falls back to identity");
            Self {
                m,
                m_inv: Mat4::IDENTITY,
            }
        })
    }

    /// Wraps `m`, failing with [`TransformError::Singular`] when its
    /// determinant is exactly zero.
    pub fn try_from_mat4(m: Mat4) -> Result<Self, TransformError> {
        let m_inv = m.try_inverse().ok_or(TransformError::Singular)?;
        Ok(Self { m, m_inv })
    }

    /// Translation by `(x, y, z)`.
    pub const fn translate(x: f32, y: f32, z: f32) -> Self {
        Self {
            m: Mat4::translation(x, y, z),
            m_inv: Mat4::translation(-x, -y, -z),
        }
    }

    /// Translation by `delta`.
    pub const fn translate_vec(delta: Vec3) -> Self {
        Self::translate(delta.x(), delta.y(), delta.z())
    }

    /// Non-uniform scale.
    ///
    /// Every factor must be non-zero; debug builds assert it. Use
    /// [`Self::try_scale`] to check at runtime.
    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        debug_assert!(x != 0.0 && y != 0.0 && z != 0.0, "zero scale factor");
        Self {
            m: Mat4::scaling(x, y, z),
            m_inv: Mat4::scaling(1.0 / x, 1.0 / y, 1.0 / z),
        }
    }

    /// Non-uniform scale, rejecting zero factors.
    pub fn try_scale(x: f32, y: f32, z: f32) -> Result<Self, TransformError> {
        for (axis, factor) in [(Axis::X, x), (Axis::Y, y), (Axis::Z, z)] {
            if factor == 0.0 {
                return Err(TransformError::ZeroScale { axis });
            }
        }
        Ok(Self::scale(x, y, z))
    }

    fn from_rotation(m: Mat4) -> Self {
        Self {
            m,
            m_inv: m.transpose(),
        }
    }

    /// Rotation about the X axis by `degrees`.
    pub fn rotate_x(degrees: f32) -> Self {
        Self::from_rotation(Mat4::rotation_x(to_radians(degrees)))
    }

    /// Rotation about the Y axis by `degrees`.
    pub fn rotate_y(degrees: f32) -> Self {
        Self::from_rotation(Mat4::rotation_y(to_radians(degrees)))
    }

    /// Rotation about the Z axis by `degrees`.
    pub fn rotate_z(degrees: f32) -> Self {
        Self::from_rotation(Mat4::rotation_z(to_radians(degrees)))
    }

    /// Rotation about a coordinate axis by `degrees`.
    pub fn rotate_about(axis: Axis, degrees: f32) -> Self {
        match axis {
            Axis::X => Self::rotate_x(degrees),
            Axis::Y => Self::rotate_y(degrees),
            Axis::Z => Self::rotate_z(degrees),
        }
    }

    /// Rotation about an arbitrary (non-zero) axis by `degrees`, built with
    /// the Rodrigues formula.
    pub fn rotate(axis: Vec3, degrees: f32) -> Self {
        Self::from_rotation(Mat4::rotation_axis_angle(axis, to_radians(degrees)))
    }

    /// Same rotation as [`Self::rotate`], built through a unit quaternion.
    pub fn rotate_quat(axis: Vec3, degrees: f32) -> Self {
        Self::from_quat(Quat::from_axis_angle_degrees(axis, degrees))
    }

    /// Rotation represented by `q`; the inverse comes from `q⁻¹`.
    pub fn from_quat(q: Quat) -> Self {
        Self {
            m: q.to_mat4(),
            m_inv: q.inverse().to_mat4(),
        }
    }

    /// `translate · rotate · scale`: scales first, then optionally rotates
    /// about one coordinate axis, then translates.
    pub fn trs(translation: Vec3, scale: Vec3, rotation: Option<(Axis, f32)>) -> Self {
        let t = Self::translate_vec(translation);
        let s = Self::scale(scale.x(), scale.y(), scale.z());
        match rotation {
            Some((axis, degrees)) => Self::compose_n(&[t, Self::rotate_about(axis, degrees), s]),
            None => t * s,
        }
    }

    /// Forward matrix.
    pub const fn matrix(&self) -> &Mat4 {
        &self.m
    }

    /// Inverse matrix.
    pub const fn inverse_matrix(&self) -> &Mat4 {
        &self.m_inv
    }

    /// Swaps the forward and inverse matrices.
    pub const fn invert(&self) -> Self {
        Self {
            m: self.m_inv,
            m_inv: self.m,
        }
    }

    /// `a · b`: the transform that applies `b` first, then `a`.
    pub fn compose(a: &Self, b: &Self) -> Self {
        Self {
            m: a.m * b.m,
            m_inv: b.m_inv * a.m_inv,
        }
    }

    /// `T₁ · T₂ · … · Tₙ` (so `Tₙ` applies first). Empty input yields
    /// the identity.
    pub fn compose_n(transforms: &[Self]) -> Self {
        transforms
            .iter()
            .fold(Self::IDENTITY, |acc, t| Self::compose(&acc, t))
    }

    /// Applies `self`, then `next`.
    pub fn then(&self, next: &Self) -> Self {
        Self::compose(next, self)
    }

    /// Transforms a free vector (translation ignored).
    pub fn apply_vector(&self, v: Vec3) -> Vec3 {
        self.m.transform_direction(v)
    }

    /// Transforms a point (translation applied).
    pub fn apply_point(&self, p: Point3) -> Point3 {
        Point3::from_vec(self.m.transform_point(p.to_vec()))
    }

    /// Transforms a surface normal by the inverse transpose.
    ///
    /// The result is not renormalized.
    pub fn apply_normal(&self, n: Normal3) -> Normal3 {
        Normal3::from_vec(self.m_inv.transform_direction_transposed(n.to_vec()))
    }

    /// Full homogeneous product.
    pub fn apply_vec4(&self, v: Vec4) -> Vec4 {
        self.m.mul_vec4(v)
    }

    /// Bounds of the eight transformed corners of `r`.
    ///
    /// [`Rect3::EMPTY`] (or any other empty rect) maps to itself.
    pub fn apply_rect(&self, r: &Rect3) -> Rect3 {
        Self::bound_corners(&self.m, r)
    }

    /// [`Self::apply_vector`] with the inverse.
    pub fn apply_inverse_vector(&self, v: Vec3) -> Vec3 {
        self.m_inv.transform_direction(v)
    }

    /// [`Self::apply_point`] with the inverse.
    pub fn apply_inverse_point(&self, p: Point3) -> Point3 {
        Point3::from_vec(self.m_inv.transform_point(p.to_vec()))
    }

    /// [`Self::apply_normal`] with the inverse.
    pub fn apply_inverse_normal(&self, n: Normal3) -> Normal3 {
        Normal3::from_vec(self.m.transform_direction_transposed(n.to_vec()))
    }

    /// [`Self::apply_vec4`] with the inverse.
    pub fn apply_inverse_vec4(&self, v: Vec4) -> Vec4 {
        self.m_inv.mul_vec4(v)
    }

    /// [`Self::apply_rect`] with the inverse.
    pub fn apply_inverse_rect(&self, r: &Rect3) -> Rect3 {
        Self::bound_corners(&self.m_inv, r)
    }

    fn bound_corners(m: &Mat4, r: &Rect3) -> Rect3 {
        if r.is_empty() {
            return *r;
        }
        r.corners().iter().fold(Rect3::EMPTY, |acc, c| {
            acc.union_point(Point3::from_vec(m.transform_point(c.to_vec())))
        })
    }

    /// `true` when the forward matrix is exactly the identity.
    pub fn is_identity(&self) -> bool {
        self.m == Mat4::IDENTITY
    }

    /// `true` when some basis vector changes length under the transform.
    pub fn has_scale(&self) -> bool {
        let off = |axis: Vec3| {
            (self.apply_vector(axis).length_squared() - 1.0).abs() > SCALE_TOLERANCE
        };
        off(Vec3::UNIT_X) || off(Vec3::UNIT_Y) || off(Vec3::UNIT_Z)
    }

    /// `true` when the linear part has a negative determinant.
    pub fn swaps_handedness(&self) -> bool {
        self.m.upper_left().determinant() < 0.0
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Quat> for Transform {
    fn from(q: Quat) -> Self {
        Self::from_quat(q)
    }
}

impl core::ops::Mul for Transform {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::compose(&self, &rhs)
    }
}

impl core::ops::MulAssign for Transform {
    fn mul_assign(&mut self, rhs: Self) {
        *self = Self::compose(self, &rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_scale_names_the_zero_axis() {
        assert_eq!(
            Transform::try_scale(1.0, 0.0, 2.0),
            Err(TransformError::ZeroScale { axis: Axis::Y })
        );
        assert!(Transform::try_scale(1.0, 3.0, 2.0).is_ok());
    }

    #[test]
    fn singular_matrix_gets_identity_inverse() {
        let m = Mat4::scaling(1.0, 0.0, 1.0);
        assert_eq!(Transform::try_from_mat4(m), Err(TransformError::Singular));
        let t = Transform::from_mat4(m);
        assert_eq!(t.matrix(), &m);
        assert_eq!(t.inverse_matrix(), &Mat4::IDENTITY);
    }

    #[test]
    fn error_messages_are_readable() {
        assert_eq!(TransformError::Singular.to_string(), "matrix is singular");
        assert_eq!(
            TransformError::ZeroScale { axis: Axis::Z }.to_string(),
            "zero scale on Z axis"
        );
    }
}
