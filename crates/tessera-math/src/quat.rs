// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::scalar::{rsqrt, to_radians};
use crate::{Mat3, Mat4, Vec3, Vec4};

/// Dot-product threshold above which [`Quat::slerp`] falls back to
/// normalized linear interpolation.
const SLERP_NLERP_THRESHOLD: f32 = 0.9995;

/// Quaternion `xi + yj + zk + w` stored as `(x, y, z, w)`.
///
/// * All angles are expressed in radians unless a method says otherwise.
/// * Only unit quaternions represent rotations; the arithmetic helpers accept
///   any quaternion.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quat {
    data: [f32; 4],
}

impl Quat {
    /// The identity rotation `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Reinterprets a `Vec4` as `(x, y, z, w)`.
    pub const fn from_vec4(v: Vec4) -> Self {
        Self { data: v.to_array() }
    }

    /// Returns the components as a `Vec4`.
    pub const fn to_vec4(self) -> Vec4 {
        let [x, y, z, w] = self.data;
        Vec4::new(x, y, z, w)
    }

    /// Returns the quaternion as an array.
    pub const fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// `x` (i) component.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// `y` (j) component.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// `z` (k) component.
    pub const fn z(&self) -> f32 {
        self.data[2]
    }

    /// Scalar part.
    pub const fn w(&self) -> f32 {
        self.data[3]
    }

    /// Vector part `(x, y, z)`.
    pub const fn xyz(&self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Constructs a unit quaternion from a rotation axis and angle in radians.
    ///
    /// The axis is normalized exactly (never through the approximate
    /// `rsqrt`); a zero axis yields non-finite components.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let (sin_half, cos_half) = (angle * 0.5).sin_cos();
        let v = axis.normalize_exact().scale(sin_half);
        Self::new(v.x(), v.y(), v.z(), cos_half)
    }

    /// Same as [`Self::from_axis_angle`] with the angle in degrees.
    pub fn from_axis_angle_degrees(axis: Vec3, degrees: f32) -> Self {
        Self::from_axis_angle(axis, to_radians(degrees))
    }

    fn zip_with(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let mut data = self.data;
        for (lhs, rhs) in data.iter_mut().zip(other.data) {
            *lhs = f(*lhs, rhs);
        }
        Self { data }
    }

    /// Multiplies every component by `scalar`.
    pub fn scale(self, scalar: f32) -> Self {
        Self {
            data: self.data.map(|c| c * scalar),
        }
    }

    /// Four-component dot product.
    pub fn dot(self, other: Self) -> f32 {
        self.to_vec4().dot(other.to_vec4())
    }

    /// Squared norm.
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Norm.
    pub fn length(self) -> f32 {
        self.to_vec4().length()
    }

    /// Rescales to unit length; a zero quaternion yields non-finite components.
    pub fn normalize(self) -> Self {
        self.scale(rsqrt(self.length_squared()))
    }

    /// Hamilton product `self * other`.
    ///
    /// For unit quaternions the product rotates by `other` first, then by
    /// `self`. Multiplication is not commutative.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use tessera_math::{Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
    /// let pitch = Quat::from_axis_angle(Vec3::UNIT_X, FRAC_PI_2);
    /// assert_ne!(yaw.multiply(&pitch), pitch.multiply(&yaw));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;
        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// `(−x, −y, −z, w)`.
    pub fn conjugate(self) -> Self {
        let [x, y, z, w] = self.data;
        Self::new(-x, -y, -z, w)
    }

    /// Multiplicative inverse `conjugate / |q|²`.
    pub fn inverse(self) -> Self {
        self.conjugate().scale(1.0 / self.length_squared())
    }

    /// Rotates `v` by this quaternion (`q v q⁻¹`).
    pub fn rotate_vec3(&self, v: Vec3) -> Vec3 {
        let p = Self::new(v.x(), v.y(), v.z(), 0.0);
        self.multiply(&p).multiply(&self.inverse()).xyz()
    }

    /// Rotation matrix for any non-zero quaternion (`s = 2 / |q|²`).
    pub fn to_mat4(&self) -> Mat4 {
        self.rotation_matrix(2.0 / self.length_squared())
    }

    /// Rotation matrix assuming `self` is unit length (`s = 2`).
    pub fn rotation_to_mat4(&self) -> Mat4 {
        self.rotation_matrix(2.0)
    }

    /// Upper 3×3 block of [`Self::to_mat4`].
    pub fn to_mat3(&self) -> Mat3 {
        self.to_mat4().upper_left()
    }

    fn rotation_matrix(&self, s: f32) -> Mat4 {
        let [x, y, z, w] = self.data;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        Mat4::from_rows([
            [1.0 - s * (yy + zz), s * (xy - wz), s * (xz + wy), 0.0],
            [s * (xy + wz), 1.0 - s * (xx + zz), s * (yz - wx), 0.0],
            [s * (xz - wy), s * (yz + wx), 1.0 - s * (xx + yy), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Extracts a rotation from the upper 3×3 of `m`.
    ///
    /// Branches on the largest of the trace and the three diagonal elements
    /// to keep the divisor away from zero.
    pub fn from_mat4(m: &Mat4) -> Self {
        Self::from_mat3(&m.upper_left())
    }

    /// Extracts a rotation from an orthonormal 3×3 matrix.
    pub fn from_mat3(m: &Mat3) -> Self {
        let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = m.to_rows();
        let trace = m00 + m11 + m22;
        if trace > m00 && trace > m11 && trace > m22 {
            let s = 2.0 * (trace + 1.0).sqrt();
            Self::new((m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s, 0.25 * s)
        } else if m00 > m11 && m00 > m22 {
            let s = 2.0 * (1.0 + m00 - m11 - m22).sqrt();
            Self::new(0.25 * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
        } else if m11 > m22 {
            let s = 2.0 * (1.0 + m11 - m00 - m22).sqrt();
            Self::new((m01 + m10) / s, 0.25 * s, (m12 + m21) / s, (m02 - m20) / s)
        } else {
            let s = 2.0 * (1.0 + m22 - m00 - m11).sqrt();
            Self::new((m02 + m20) / s, (m12 + m21) / s, 0.25 * s, (m10 - m01) / s)
        }
    }

    /// Normalized linear interpolation.
    pub fn nlerp(a: Self, b: Self, t: f32) -> Self {
        a.scale(1.0 - t).zip_with(b.scale(t), |p, q| p + q).normalize()
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// Inputs are normalized first. Nearly parallel inputs fall back to
    /// [`Self::nlerp`].
    pub fn slerp(a: Self, b: Self, t: f32) -> Self {
        let a = a.normalize();
        let mut b = b.normalize();
        let mut d = a.dot(b);
        if d < 0.0 {
            b = -b;
            d = -d;
        }
        if d > SLERP_NLERP_THRESHOLD {
            return Self::nlerp(a, b, t);
        }
        let theta = d.clamp(-1.0, 1.0).acos();
        let sin_theta = theta.sin();
        let wa = ((1.0 - t) * theta).sin() / sin_theta;
        let wb = (t * theta).sin() / sin_theta;
        a.scale(wa) + b.scale(wb)
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 4]> for Quat {
    fn from(data: [f32; 4]) -> Self {
        Self { data }
    }
}

impl From<Vec4> for Quat {
    fn from(v: Vec4) -> Self {
        Self::from_vec4(v)
    }
}

impl From<Quat> for Vec4 {
    fn from(q: Quat) -> Self {
        q.to_vec4()
    }
}

impl core::ops::Add for Quat {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl core::ops::Sub for Quat {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl core::ops::Neg for Quat {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl core::ops::Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl core::ops::Mul<f32> for Quat {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl core::ops::Div<f32> for Quat {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        debug_assert!(rhs != 0.0, "quaternion divided by zero");
        self.scale(1.0 / rhs)
    }
}

impl core::fmt::Display for Quat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [x, y, z, w] = self.data;
        write!(f, "{x}i + {y}j + {z}k + {w}")
    }
}
