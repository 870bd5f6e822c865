// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Element-wise behaviour shared by `Mat3` and `Mat4`.

macro_rules! impl_matrix {
    ($name:ident, $n:literal, [$($acc:ident => ($r:literal, $c:literal)),+ $(,)?]) => {
        impl $name {
            /// The all-zero matrix.
            pub const ZERO: Self = Self { rows: [[0.0; $n]; $n] };

            /// The identity matrix.
            pub const IDENTITY: Self = Self::diagonal(1.0);

            /// Matrix with `a` on the diagonal and zeros elsewhere.
            pub const fn diagonal(a: f32) -> Self {
                let mut rows = [[0.0; $n]; $n];
                let mut i = 0;
                while i < $n {
                    rows[i][i] = a;
                    i += 1;
                }
                Self { rows }
            }

            /// Builds a matrix from row-major rows.
            pub const fn from_rows(rows: [[f32; $n]; $n]) -> Self {
                Self { rows }
            }

            /// Returns the row-major rows.
            pub const fn to_rows(self) -> [[f32; $n]; $n] {
                self.rows
            }

            /// Element at `(row, col)`.
            pub const fn at(&self, row: usize, col: usize) -> f32 {
                self.rows[row][col]
            }

            $(
                #[doc = concat!("Element at row ", stringify!($r), ", column ", stringify!($c), ".")]
                pub const fn $acc(&self) -> f32 {
                    self.rows[$r][$c]
                }
            )+

            /// Sum of the diagonal.
            pub fn trace(&self) -> f32 {
                (0..$n).map(|i| self.rows[i][i]).sum()
            }

            /// Swaps rows and columns.
            pub fn transpose(&self) -> Self {
                let mut rows = [[0.0; $n]; $n];
                for (r, row) in rows.iter_mut().enumerate() {
                    for (c, cell) in row.iter_mut().enumerate() {
                        *cell = self.rows[c][r];
                    }
                }
                Self { rows }
            }

            /// Combines two matrices element by element.
            fn zip_with(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
                let mut rows = self.rows;
                for (row, other_row) in rows.iter_mut().zip(other.rows.iter()) {
                    for (cell, rhs) in row.iter_mut().zip(other_row.iter()) {
                        *cell = f(*cell, *rhs);
                    }
                }
                Self { rows }
            }

            /// Multiplies every element by `scalar`.
            pub fn scale_by(&self, scalar: f32) -> Self {
                let mut rows = self.rows;
                for cell in rows.iter_mut().flatten() {
                    *cell *= scalar;
                }
                Self { rows }
            }

            /// Element-wise (Hadamard) product.
            pub fn hadamard(&self, other: &Self) -> Self {
                self.zip_with(other, |a, b| a * b)
            }

            /// Matrix product `self * rhs`.
            pub fn multiply(&self, rhs: &Self) -> Self {
                let mut rows = [[0.0; $n]; $n];
                for (r, row) in rows.iter_mut().enumerate() {
                    for (c, cell) in row.iter_mut().enumerate() {
                        let mut sum = 0.0;
                        for k in 0..$n {
                            sum += self.rows[r][k] * rhs.rows[k][c];
                        }
                        *cell = sum;
                    }
                }
                Self { rows }
            }

            /// Largest absolute element-wise difference (`‖a − b‖∞` over entries).
            pub fn max_abs_diff(&self, other: &Self) -> f32 {
                self.rows
                    .iter()
                    .flatten()
                    .zip(other.rows.iter().flatten())
                    .fold(0.0, |acc: f32, (a, b)| acc.max((a - b).abs()))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        impl From<[[f32; $n]; $n]> for $name {
            fn from(rows: [[f32; $n]; $n]) -> Self {
                Self { rows }
            }
        }

        impl core::ops::Index<usize> for $name {
            type Output = [f32; $n];
            fn index(&self, row: usize) -> &[f32; $n] {
                &self.rows[row]
            }
        }

        impl core::ops::IndexMut<usize> for $name {
            fn index_mut(&mut self, row: usize) -> &mut [f32; $n] {
                &mut self.rows[row]
            }
        }

        impl core::ops::Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                self.zip_with(&rhs, |a, b| a + b)
            }
        }

        impl core::ops::Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                self.zip_with(&rhs, |a, b| a - b)
            }
        }

        impl core::ops::Mul for $name {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                self.multiply(&rhs)
            }
        }

        impl core::ops::Mul<&$name> for $name {
            type Output = Self;
            fn mul(self, rhs: &$name) -> Self {
                self.multiply(rhs)
            }
        }

        impl core::ops::Mul<f32> for $name {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self {
                self.scale_by(rhs)
            }
        }

        impl core::ops::Mul<$name> for f32 {
            type Output = $name;
            fn mul(self, rhs: $name) -> $name {
                rhs.scale_by(self)
            }
        }

        impl core::ops::MulAssign for $name {
            fn mul_assign(&mut self, rhs: Self) {
                *self = self.multiply(&rhs);
            }
        }

        impl core::ops::MulAssign<&$name> for $name {
            fn mul_assign(&mut self, rhs: &$name) {
                *self = self.multiply(rhs);
            }
        }

        impl core::ops::AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                *self = self.zip_with(&rhs, |a, b| a + b);
            }
        }

        impl core::ops::SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = self.zip_with(&rhs, |a, b| a - b);
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                for row in &self.rows {
                    for (c, cell) in row.iter().enumerate() {
                        if c > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{cell}")?;
                    }
                    f.write_str("\n")?;
                }
                Ok(())
            }
        }
    };
}

pub(crate) use impl_matrix;
