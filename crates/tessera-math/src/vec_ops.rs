// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Element-wise behaviour shared by `Vec2`, `Vec3`, and `Vec4`.
//!
//! Each vector stores its components in a single `data: [f32; N]` array; the
//! named accessors on the concrete types are views over that array.

macro_rules! impl_vector {
    ($name:ident, $n:literal) => {
        impl $name {
            /// The zero vector.
            pub const ZERO: Self = Self { data: [0.0; $n] };

            /// Vector with every component set to `value`.
            pub const fn splat(value: f32) -> Self {
                Self { data: [value; $n] }
            }

            /// Returns the components as an array.
            pub const fn to_array(self) -> [f32; $n] {
                self.data
            }

            /// Borrows the components as an array.
            pub const fn as_array(&self) -> &[f32; $n] {
                &self.data
            }

            /// Applies `f` to every component.
            pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
                Self { data: self.data.map(f) }
            }

            /// Combines two vectors component by component.
            pub fn zip_with(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
                let mut data = self.data;
                for (lhs, rhs) in data.iter_mut().zip(other.data) {
                    *lhs = f(*lhs, rhs);
                }
                Self { data }
            }

            /// Multiplies every component by `scalar`.
            pub fn scale(self, scalar: f32) -> Self {
                self.map(|c| c * scalar)
            }

            /// Component-wise (Hadamard) product.
            pub fn hadamard(self, other: Self) -> Self {
                self.zip_with(other, |a, b| a * b)
            }

            /// Inner (dot) product.
            pub fn dot(self, other: Self) -> f32 {
                self.data
                    .iter()
                    .zip(other.data.iter())
                    .fold(0.0, |acc, (a, b)| acc + a * b)
            }

            /// Alias of [`Self::dot`].
            pub fn inner(self, other: Self) -> f32 {
                self.dot(other)
            }

            /// Squared magnitude.
            pub fn length_squared(self) -> f32 {
                self.dot(self)
            }

            /// Magnitude.
            pub fn length(self) -> f32 {
                $crate::scalar::sqrt(self.length_squared())
            }

            /// Scales the vector to unit length using [`crate::rsqrt`].
            ///
            /// A zero-length input produces non-finite components; callers
            /// must not normalize degenerate vectors.
            pub fn normalize(self) -> Self {
                self.scale($crate::scalar::rsqrt(self.length_squared()))
            }

            /// Scales the vector to unit length with a true division by
            /// [`Self::length`], independent of the `hardware-rsqrt` feature.
            ///
            /// Rotation builders use this so their matrices stay orthonormal.
            /// A zero-length input produces non-finite components.
            pub fn normalize_exact(self) -> Self {
                self.scale(1.0 / self.length())
            }

            /// Component-wise `(1 - t) * a + t * b`.
            pub fn lerp(a: Self, t: f32, b: Self) -> Self {
                a.zip_with(b, |x, y| $crate::scalar::lerp(x, t, y))
            }

            /// Component-wise minimum.
            pub fn min(self, other: Self) -> Self {
                self.zip_with(other, f32::min)
            }

            /// Component-wise maximum.
            pub fn max(self, other: Self) -> Self {
                self.zip_with(other, f32::max)
            }

            /// `true` when every component is finite.
            pub fn is_finite(self) -> bool {
                self.data.iter().all(|c| c.is_finite())
            }
        }

        impl From<[f32; $n]> for $name {
            fn from(data: [f32; $n]) -> Self {
                Self { data }
            }
        }

        impl From<$name> for [f32; $n] {
            fn from(v: $name) -> Self {
                v.data
            }
        }

        impl core::ops::Index<usize> for $name {
            type Output = f32;
            fn index(&self, idx: usize) -> &f32 {
                &self.data[idx]
            }
        }

        impl core::ops::IndexMut<usize> for $name {
            fn index_mut(&mut self, idx: usize) -> &mut f32 {
                &mut self.data[idx]
            }
        }

        impl core::ops::Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                self.zip_with(rhs, |a, b| a + b)
            }
        }

        impl core::ops::Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                self.zip_with(rhs, |a, b| a - b)
            }
        }

        impl core::ops::Neg for $name {
            type Output = Self;
            fn neg(self) -> Self {
                self.map(|c| -c)
            }
        }

        impl core::ops::Mul<f32> for $name {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self {
                self.scale(rhs)
            }
        }

        impl core::ops::Mul<$name> for f32 {
            type Output = $name;
            fn mul(self, rhs: $name) -> $name {
                rhs.scale(self)
            }
        }

        /// `Vec * Vec` is the Hadamard product.
        impl core::ops::Mul for $name {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                self.hadamard(rhs)
            }
        }

        impl core::ops::Div<f32> for $name {
            type Output = Self;
            fn div(self, rhs: f32) -> Self {
                debug_assert!(rhs != 0.0, "vector divided by zero");
                self.map(|c| c / rhs)
            }
        }

        impl core::ops::AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl core::ops::SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl core::ops::MulAssign<f32> for $name {
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("[")?;
                for (i, c) in self.data.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{c}")?;
                }
                f.write_str("]")
            }
        }
    };
}

pub(crate) use impl_vector;
