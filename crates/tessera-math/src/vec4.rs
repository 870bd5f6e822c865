// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::vec_ops::impl_vector;

/// Four-component vector, used for homogeneous coordinates and RGBA colors.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec4 {
    data: [f32; 4],
}

impl Vec4 {
    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
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

    /// W component.
    pub const fn w(&self) -> f32 {
        self.data[3]
    }

    /// Red channel.
    pub const fn r(&self) -> f32 {
        self.data[0]
    }

    /// Green channel.
    pub const fn g(&self) -> f32 {
        self.data[1]
    }

    /// Blue channel.
    pub const fn b(&self) -> f32 {
        self.data[2]
    }

    /// Alpha channel.
    pub const fn a(&self) -> f32 {
        self.data[3]
    }

    /// Drops `w`.
    pub const fn truncate(self) -> crate::Vec3 {
        crate::Vec3::new(self.data[0], self.data[1], self.data[2])
    }
}

impl_vector!(Vec4, 4);
