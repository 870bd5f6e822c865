// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! tessera-math: fixed-size single-precision math for rendering and simulation.
//!
//! * Vectors ([`Vec2`], [`Vec3`], [`Vec4`]) store their components in one
//!   array and expose positional, color, and texture accessors over it.
//! * [`Point2`], [`Point3`], [`Point4`], and [`Normal3`] are zero-cost
//!   wrappers that record what a triple means, so transforms apply the right
//!   rule.
//! * Matrices ([`Mat3`], [`Mat4`]) are row-major and act on column vectors.
//! * [`Quat`] is `xi + yj + zk + w`; unit quaternions represent rotations.
//!
//! Degenerate inputs (zero-length normalize, singular inverse) never fail:
//! normalize yields non-finite components and `inverse` falls back to the
//! identity. `try_inverse` reports singularity explicitly.
//!
//! # Features
//! * `hardware-rsqrt`: approximate SSE reciprocal square root in
//!   [`rsqrt`] and therefore in every `normalize`.
//! * `serde`: `Serialize`/`Deserialize` for every value type.

mod mat3;
mod mat4;
mod mat_ops;
mod point;
mod quat;
mod scalar;
mod vec2;
mod vec3;
mod vec4;
mod vec_ops;

pub use mat3::Mat3;
pub use mat4::Mat4;
pub use point::{Normal3, Point2, Point3, Point4};
pub use quat::Quat;
pub use scalar::{
    clamp, clamp01, lerp, rsqrt, sqrt, square, to_degrees, to_radians, EPSILON, INV_2PI, INV_4PI,
    INV_PI, PI,
};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
