// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar helpers shared by every vector, matrix, and quaternion routine.
//!
//! Angles cross the public surface in degrees and are converted here; all
//! arithmetic is `f32`. The `PI` family is exposed at `f64` so callers that
//! accumulate (e.g. Monte Carlo estimators) keep the extra precision.

/// π at double precision.
pub const PI: f64 = std::f64::consts::PI;

/// 1 / π.
pub const INV_PI: f64 = 1.0 / PI;

/// 1 / 2π.
pub const INV_2PI: f64 = 1.0 / (2.0 * PI);

/// 1 / 4π.
pub const INV_4PI: f64 = 1.0 / (4.0 * PI);

/// Tolerance used by the quaternion and transform helpers when detecting
/// near-degenerate inputs.
pub const EPSILON: f32 = 1e-6;

/// Linear interpolation `(1 - t) * a + t * b`.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate.
#[inline]
pub fn lerp(a: f32, t: f32, b: f32) -> f32 {
    (1.0 - t) * a + t * b
}

/// Clamps `value` to the inclusive `[lower, upper]` range.
#[inline]
pub fn clamp(lower: f32, value: f32, upper: f32) -> f32 {
    debug_assert!(lower <= upper, "invalid clamp range: {lower} > {upper}");
    if value < lower {
        lower
    } else if value > upper {
        upper
    } else {
        value
    }
}

/// Clamps `value` to `[0, 1]`.
#[inline]
pub fn clamp01(value: f32) -> f32 {
    clamp(0.0, value, 1.0)
}

/// Converts degrees to radians.
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * (std::f32::consts::PI / 180.0)
}

/// Converts radians to degrees.
#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * (180.0 / std::f32::consts::PI)
}

/// `x * x`.
#[inline]
pub fn square(x: f32) -> f32 {
    x * x
}

/// Square root. Lowers to the hardware scalar instruction on every target
/// that has one.
#[inline]
pub fn sqrt(value: f32) -> f32 {
    value.sqrt()
}

/// Reciprocal square root.
///
/// Exact (`1 / sqrt(x)`) unless the `hardware-rsqrt` feature is enabled on an
/// x86 target with SSE, in which case the approximate `rsqrtss` instruction is
/// used (relative error ≤ 1.5 × 2⁻¹²). Every `normalize` goes through this
/// function, so the feature trades normalization accuracy for speed.
#[inline]
pub fn rsqrt(value: f32) -> f32 {
    #[cfg(all(
        feature = "hardware-rsqrt",
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse"
    ))]
    {
        hardware_rsqrt(value)
    }
    #[cfg(not(all(
        feature = "hardware-rsqrt",
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse"
    )))]
    {
        1.0 / value.sqrt()
    }
}

#[cfg(all(
    feature = "hardware-rsqrt",
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse"
))]
#[allow(unsafe_code, unused_unsafe)]
#[inline]
fn hardware_rsqrt(value: f32) -> f32 {
    #[cfg(target_arch = "x86")]
    use core::arch::x86::{_mm_cvtss_f32, _mm_rsqrt_ss, _mm_set_ss};
    #[cfg(target_arch = "x86_64")]
    use core::arch::x86_64::{_mm_cvtss_f32, _mm_rsqrt_ss, _mm_set_ss};

    // SAFETY: guarded by `target_feature = "sse"`; the intrinsics only touch
    // the register passed in.
    unsafe { _mm_cvtss_f32(_mm_rsqrt_ss(_mm_set_ss(value))) }
}
