// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::vec_ops::impl_vector;

/// Two-component vector.
///
/// Components are reachable positionally (`x`, `y`), as texture coordinates
/// (`u`, `v`), or by index `[0..2)`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    data: [f32; 2],
}

impl Vec2 {
    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// X component.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// First texture coordinate (same slot as `x`).
    pub const fn u(&self) -> f32 {
        self.data[0]
    }

    /// Second texture coordinate (same slot as `y`).
    pub const fn v(&self) -> f32 {
        self.data[1]
    }

    /// 2D cross product (z of the 3D cross of the embedded vectors).
    pub fn perp_dot(self, other: Self) -> f32 {
        self.data[0] * other.data[1] - self.data[1] * other.data[0]
    }
}

impl_vector!(Vec2, 2);
