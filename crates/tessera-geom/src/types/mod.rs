// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Geometry value types (rectangles, transforms).
//!
//! - Overlap and containment are inclusive on faces; an exclusive variant
//!   exists for half-open queries.
//! - Transforms carry their inverse so that normal and inverse application
//!   never invert numerically.

#[doc = "Axis-aligned rectangles in 2D and 3D."]
pub mod rect;
#[doc = "Affine transforms with cached inverses."]
pub mod transform;
