// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::vec_ops::impl_vector;

/// Three-component vector.
///
/// * A plain `Vec3` is a free direction (homogeneous `w = 0`); positions use
///   [`crate::Point3`] and surface normals use [`crate::Normal3`] so the
///   transform layer can pick the right rule at compile time.
/// * Components are reachable as `x/y/z`, `r/g/b`, `u/v/w`, or by index.
///
/// # Examples
/// ```
/// use tessera_math::Vec3;
/// let v = Vec3::new(1.0, 3.0, 3.0).cross(Vec3::new(4.0, 5.0, 3.0));
/// assert_eq!(v.to_array(), [-6.0, 9.0, -7.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// X component.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> f32 {
        self.data[2]
    }

    /// Red channel (slot 0).
    pub const fn r(&self) -> f32 {
        self.data[0]
    }

    /// Green channel (slot 1).
    pub const fn g(&self) -> f32 {
        self.data[1]
    }

    /// Blue channel (slot 2).
    pub const fn b(&self) -> f32 {
        self.data[2]
    }

    /// Texture `u` (slot 0).
    pub const fn u(&self) -> f32 {
        self.data[0]
    }

    /// Texture `v` (slot 1).
    pub const fn v(&self) -> f32 {
        self.data[1]
    }

    /// Texture `w` (slot 2).
    pub const fn w(&self) -> f32 {
        self.data[2]
    }

    /// Cross product.
    pub fn cross(self, other: Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Extends to a homogeneous 4-vector with the given `w`.
    pub const fn extend(self, w: f32) -> crate::Vec4 {
        crate::Vec4::new(self.data[0], self.data[1], self.data[2], w)
    }
}

impl_vector!(Vec3, 3);
