// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Semantic wrappers that share a vector's layout but not its meaning.
//!
//! A point carries an implicit homogeneous `w = 1` (translation applies); a
//! normal transforms by the inverse transpose. Keeping them as distinct types
//! makes the transform layer pick the right rule at compile time.
//!
//! Arithmetic is restricted to what is geometrically meaningful:
//! `Point - Point = Vec`, `Point ± Vec = Point`.

use crate::{Vec2, Vec3, Vec4};

macro_rules! impl_point {
    ($name:ident, $vec:ident, $n:literal, [$($acc:ident => $idx:literal),+]) => {
        impl $name {
            /// The origin.
            pub const ORIGIN: Self = Self($vec::ZERO);

            /// Wraps a vector as this kind.
            pub const fn from_vec(v: $vec) -> Self {
                Self(v)
            }

            /// Unwraps the underlying vector.
            pub const fn to_vec(self) -> $vec {
                self.0
            }

            /// Returns the components as an array.
            pub const fn to_array(self) -> [f32; $n] {
                self.0.to_array()
            }

            $(
                #[doc = concat!("`", stringify!($acc), "` component.")]
                pub const fn $acc(&self) -> f32 {
                    self.0.as_array()[$idx]
                }
            )+

            /// Distance to another point.
            pub fn distance(self, other: Self) -> f32 {
                (self - other).length()
            }

            /// Squared distance to another point.
            pub fn distance_squared(self, other: Self) -> f32 {
                (self - other).length_squared()
            }

            /// Interpolates between two points.
            pub fn lerp(a: Self, t: f32, b: Self) -> Self {
                Self($vec::lerp(a.0, t, b.0))
            }

            /// Component-wise minimum.
            pub fn min(self, other: Self) -> Self {
                Self(self.0.min(other.0))
            }

            /// Component-wise maximum.
            pub fn max(self, other: Self) -> Self {
                Self(self.0.max(other.0))
            }
        }

        impl From<[f32; $n]> for $name {
            fn from(data: [f32; $n]) -> Self {
                Self($vec::from(data))
            }
        }

        impl core::ops::Index<usize> for $name {
            type Output = f32;
            fn index(&self, idx: usize) -> &f32 {
                &self.0[idx]
            }
        }

        impl core::ops::IndexMut<usize> for $name {
            fn index_mut(&mut self, idx: usize) -> &mut f32 {
                &mut self.0[idx]
            }
        }

        impl core::ops::Sub for $name {
            type Output = $vec;
            fn sub(self, rhs: Self) -> $vec {
                self.0 - rhs.0
            }
        }

        impl core::ops::Add<$vec> for $name {
            type Output = Self;
            fn add(self, rhs: $vec) -> Self {
                Self(self.0 + rhs)
            }
        }

        impl core::ops::Sub<$vec> for $name {
            type Output = Self;
            fn sub(self, rhs: $vec) -> Self {
                Self(self.0 - rhs)
            }
        }

        impl core::ops::AddAssign<$vec> for $name {
            fn add_assign(&mut self, rhs: $vec) {
                self.0 += rhs;
            }
        }

        impl core::ops::SubAssign<$vec> for $name {
            fn sub_assign(&mut self, rhs: $vec) {
                self.0 -= rhs;
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

/// Position in 2D.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Point2(Vec2);

impl Point2 {
    /// Creates a point from coordinates.
    pub const fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

impl_point!(Point2, Vec2, 2, [x => 0, y => 1]);

/// Position in 3D (homogeneous `w = 1`).
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Point3(Vec3);

impl Point3 {
    /// Creates a point from coordinates.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Homogeneous form `(x, y, z, 1)`.
    pub const fn to_homogeneous(self) -> Vec4 {
        self.0.extend(1.0)
    }
}

impl_point!(Point3, Vec3, 3, [x => 0, y => 1, z => 2]);

/// Position in homogeneous 4D space.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Point4(Vec4);

impl Point4 {
    /// Creates a point from coordinates.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self(Vec4::new(x, y, z, w))
    }
}

impl_point!(Point4, Vec4, 4, [x => 0, y => 1, z => 2, w => 3]);

/// Surface normal. Same storage as [`Vec3`], different transformation rule.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Normal3(Vec3);

impl Normal3 {
    /// Creates a normal from components (not normalized).
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Wraps a vector as a normal.
    pub const fn from_vec(v: Vec3) -> Self {
        Self(v)
    }

    /// Unwraps the underlying vector.
    pub const fn to_vec(self) -> Vec3 {
        self.0
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 3] {
        self.0.to_array()
    }

    /// X component.
    pub const fn x(&self) -> f32 {
        self.0.x()
    }

    /// Y component.
    pub const fn y(&self) -> f32 {
        self.0.y()
    }

    /// Z component.
    pub const fn z(&self) -> f32 {
        self.0.z()
    }

    /// Magnitude.
    pub fn length(self) -> f32 {
        self.0.length()
    }

    /// Rescales to unit length.
    pub fn normalize(self) -> Self {
        Self(self.0.normalize())
    }

    /// Dot product with a direction.
    pub fn dot(self, v: Vec3) -> f32 {
        self.0.dot(v)
    }

    /// Flips the normal into the hemisphere of `v`.
    pub fn face_forward(self, v: Vec3) -> Self {
        if self.dot(v) < 0.0 {
            -self
        } else {
            self
        }
    }
}

impl core::ops::Neg for Normal3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl core::ops::Index<usize> for Normal3 {
    type Output = f32;
    fn index(&self, idx: usize) -> &f32 {
        &self.0[idx]
    }
}

impl From<[f32; 3]> for Normal3 {
    fn from(data: [f32; 3]) -> Self {
        Self(Vec3::from(data))
    }
}

impl core::fmt::Display for Normal3 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
