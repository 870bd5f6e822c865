// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tessera_math::{Point2, Point3, Vec2, Vec3};

macro_rules! impl_rect {
    ($name:ident, $point:ident, $vec:ident, $n:literal) => {
        impl $name {
            /// Empty sentinel (`min = +∞`, `max = −∞` on every axis).
            ///
            /// Identity for [`Self::union`]; overlaps nothing.
            pub const EMPTY: Self = Self {
                min: $point::from_vec($vec::splat(f32::INFINITY)),
                max: $point::from_vec($vec::splat(f32::NEG_INFINITY)),
            };

            /// Builds the box spanned by two corner points given in any order.
            pub fn new(p1: $point, p2: $point) -> Self {
                Self {
                    min: p1.min(p2),
                    max: p1.max(p2),
                }
            }

            /// Degenerate box covering a single point.
            pub const fn from_point(p: $point) -> Self {
                Self { min: p, max: p }
            }

            /// Returns [`Self::EMPTY`].
            pub const fn empty() -> Self {
                Self::EMPTY
            }

            /// Builds the minimal box that contains all `points`.
            ///
            /// An empty slice yields [`Self::EMPTY`].
            pub fn from_points(points: &[$point]) -> Self {
                points.iter().fold(Self::EMPTY, |acc, p| acc.union_point(*p))
            }

            /// Box covering every finite coordinate.
            pub const fn infinite() -> Self {
                Self {
                    min: $point::from_vec($vec::splat(-f32::MAX)),
                    max: $point::from_vec($vec::splat(f32::MAX)),
                }
            }

            /// Minimum corner.
            pub const fn min(&self) -> $point {
                self.min
            }

            /// Maximum corner.
            pub const fn max(&self) -> $point {
                self.max
            }

            /// `true` when some axis has `min > max` (including the sentinel).
            pub fn is_empty(&self) -> bool {
                self.min.to_array().iter().zip(self.max.to_array()).any(|(lo, hi)| *lo > hi)
            }

            /// `true` when `min ≤ max` on every axis.
            pub fn is_valid(&self) -> bool {
                self.min.to_array().iter().zip(self.max.to_array()).all(|(lo, hi)| *lo <= hi)
            }

            /// Smallest box containing both boxes.
            pub fn union(&self, other: &Self) -> Self {
                Self {
                    min: self.min.min(other.min),
                    max: self.max.max(other.max),
                }
            }

            /// Smallest box containing `self` and `p`.
            pub fn union_point(&self, p: $point) -> Self {
                Self {
                    min: self.min.min(p),
                    max: self.max.max(p),
                }
            }

            /// Max of mins and min of maxes.
            ///
            /// Disjoint inputs yield a box that fails [`Self::is_valid`]; test
            /// with [`Self::overlaps`] first when that matters.
            pub fn intersection(&self, other: &Self) -> Self {
                Self {
                    min: self.min.max(other.min),
                    max: self.max.min(other.max),
                }
            }

            /// Returns `true` if the boxes overlap (inclusive on faces).
            pub fn overlaps(&self, other: &Self) -> bool {
                let (a_min, a_max) = (self.min.to_array(), self.max.to_array());
                let (b_min, b_max) = (other.min.to_array(), other.max.to_array());
                (0..$n).all(|i| a_max[i] >= b_min[i] && a_min[i] <= b_max[i])
            }

            /// `min ≤ p ≤ max` on every axis.
            pub fn contains_point(&self, p: $point) -> bool {
                let (lo, hi, p) = (self.min.to_array(), self.max.to_array(), p.to_array());
                (0..$n).all(|i| p[i] >= lo[i] && p[i] <= hi[i])
            }

            /// `min < p < max` on every axis.
            pub fn contains_point_exclusive(&self, p: $point) -> bool {
                let (lo, hi, p) = (self.min.to_array(), self.max.to_array(), p.to_array());
                (0..$n).all(|i| p[i] > lo[i] && p[i] < hi[i])
            }

            /// Grows the box by `delta` on every side.
            pub fn expand(&self, delta: f32) -> Self {
                let d = $vec::splat(delta);
                Self {
                    min: self.min - d,
                    max: self.max + d,
                }
            }

            /// `max − min`.
            pub fn diagonal(&self) -> $vec {
                self.max - self.min
            }

            /// Index of the longest axis; ties go to the lower index.
            pub fn max_extent(&self) -> usize {
                let d = self.diagonal().to_array();
                let mut best = 0;
                for (i, len) in d.iter().enumerate().skip(1) {
                    if *len > d[best] {
                        best = i;
                    }
                }
                best
            }

            /// Position of `p` relative to the box: `0` at `min`, `1` at `max`.
            ///
            /// Axes of zero width are left as the raw offset from `min`.
            pub fn offset(&self, p: $point) -> $vec {
                let mut o = (p - self.min).to_array();
                let (lo, hi) = (self.min.to_array(), self.max.to_array());
                for (i, c) in o.iter_mut().enumerate() {
                    if hi[i] > lo[i] {
                        *c /= hi[i] - lo[i];
                    }
                }
                $vec::from(o)
            }

            /// Inverse of [`Self::offset`]: per-axis interpolation from `min`
            /// toward `max`.
            pub fn lerp(&self, t: $vec) -> $point {
                let (lo, hi, t) = (self.min.to_array(), self.max.to_array(), t.to_array());
                let mut out = lo;
                for (i, c) in out.iter_mut().enumerate() {
                    *c = tessera_math::lerp(lo[i], t[i], hi[i]);
                }
                $point::from(out)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::EMPTY
            }
        }
    };
}

/// Axis-aligned rectangle in the plane.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect2 {
    min: Point2,
    max: Point2,
}

impl_rect!(Rect2, Point2, Vec2, 2);

impl Rect2 {
    /// Builds a box from raw bounds, stored as given.
    pub const fn from_bounds(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min: Point2::new(min_x, min_y),
            max: Point2::new(max_x, max_y),
        }
    }

    /// Area of the rectangle.
    pub fn surface_area(&self) -> f32 {
        let d = self.diagonal();
        d.x() * d.y()
    }

    /// Corner `i` in `0..4`; bit 0 selects `max.x`, bit 1 selects `max.y`.
    pub fn corner(&self, i: usize) -> Point2 {
        debug_assert!(i < 4, "corner index out of range: {i}");
        let pick = |bit: usize, axis: usize| {
            if i & bit == 0 {
                self.min[axis]
            } else {
                self.max[axis]
            }
        };
        Point2::new(pick(1, 0), pick(2, 1))
    }

    /// All four corners in [`Self::corner`] order.
    pub fn corners(&self) -> [Point2; 4] {
        core::array::from_fn(|i| self.corner(i))
    }
}

/// Axis-aligned bounding box in 3D.
///
/// Invariants:
/// - Boxes built by [`Rect3::new`], [`Rect3::union`], or the intersection of
///   overlapping boxes satisfy `min ≤ max` on every axis.
/// - [`Rect3::EMPTY`] deliberately violates it and is the identity for union.
///
/// # Examples
/// ```
/// use tessera_geom::Rect3;
/// use tessera_math::Point3;
/// let r = Rect3::new(Point3::new(1.0, 0.0, 2.0), Point3::new(0.0, 3.0, 1.0));
/// assert_eq!(r.min().to_array(), [0.0, 0.0, 1.0]);
/// assert_eq!(r.volume(), 3.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect3 {
    min: Point3,
    max: Point3,
}

impl_rect!(Rect3, Point3, Vec3, 3);

impl Rect3 {
    /// Builds a box from raw bounds, stored as given.
    pub const fn from_bounds(
        min_x: f32,
        min_y: f32,
        min_z: f32,
        max_x: f32,
        max_y: f32,
        max_z: f32,
    ) -> Self {
        Self {
            min: Point3::new(min_x, min_y, min_z),
            max: Point3::new(max_x, max_y, max_z),
        }
    }

    /// Builds a box centered at `center` with half-extents `hx, hy, hz`.
    pub fn from_center_half_extents(center: Point3, hx: f32, hy: f32, hz: f32) -> Self {
        let he = Vec3::new(hx, hy, hz);
        Self::new(center - he, center + he)
    }

    /// Total area of the six faces, `2(xy + xz + yz)` over the diagonal.
    pub fn surface_area(&self) -> f32 {
        let d = self.diagonal();
        2.0 * (d.x() * d.y() + d.x() * d.z() + d.y() * d.z())
    }

    /// Product of the extents.
    pub fn volume(&self) -> f32 {
        let d = self.diagonal();
        d.x() * d.y() * d.z()
    }

    /// Corner `i` in `0..8`; bits 0, 1, 2 select `max` on x, y, z.
    pub fn corner(&self, i: usize) -> Point3 {
        debug_assert!(i < 8, "corner index out of range: {i}");
        let pick = |bit: usize, axis: usize| {
            if i & bit == 0 {
                self.min[axis]
            } else {
                self.max[axis]
            }
        };
        Point3::new(pick(1, 0), pick(2, 1), pick(4, 2))
    }

    /// All eight corners in [`Self::corner`] order.
    pub fn corners(&self) -> [Point3; 8] {
        core::array::from_fn(|i| self.corner(i))
    }
}
