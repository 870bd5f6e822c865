// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Geometry primitives for Tessera.

This crate provides:
- Axis-aligned rectangles (`Rect2`, `Rect3`) with an empty sentinel.
- Affine transforms (`Transform`) holding a forward/inverse matrix pair and
  applying the right rule to vectors, points, normals, 4-vectors, and boxes.

Design notes:
- Float32 throughout, built on `tessera-math`.
- Numerically degenerate construction (singular matrix) never fails; the
  `try_*` constructors report it as a `TransformError`.
"]

/// Foundational geometric types.
pub mod types;

pub use types::rect::{Rect2, Rect3};
pub use types::transform::{Axis, Transform, TransformError};
