// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tessera sync: 64-bit atomic integer primitives.
//!
//! Each operation returns the value held *before* it ran and uses
//! acquire-release ordering on success (acquire on a failed compare).
//! Nothing is promised about ordering across distinct atomics.

use std::sync::atomic::{AtomicI64, Ordering};

/// Adds `addend` (wrapping) and returns the previous value.
pub fn atomic_add_i64(target: &AtomicI64, addend: i64) -> i64 {
    target.fetch_add(addend, Ordering::AcqRel)
}

/// Stores `new` and returns the previous value.
pub fn atomic_exchange_i64(target: &AtomicI64, new: i64) -> i64 {
    target.swap(new, Ordering::AcqRel)
}

/// Stores `new` if the current value equals `expected`.
///
/// Returns the value observed before the operation; the swap happened iff
/// that value equals `expected`.
pub fn atomic_cas_i64(target: &AtomicI64, expected: i64, new: i64) -> i64 {
    match target.compare_exchange(expected, new, Ordering::AcqRel, Ordering::Acquire) {
        Ok(prev) | Err(prev) => prev,
    }
}

/// Shared 64-bit counter wrapping an [`AtomicI64`].
///
/// ```
/// use tessera_sync::SharedI64;
/// let counter = SharedI64::new(7);
/// assert_eq!(counter.add(3), 7);
/// assert_eq!(counter.cas(10, 0), 10);
/// assert_eq!(counter.load(), 0);
/// ```
#[derive(Debug, Default)]
pub struct SharedI64(AtomicI64);

impl SharedI64 {
    /// Creates a counter holding `value`.
    pub const fn new(value: i64) -> Self {
        Self(AtomicI64::new(value))
    }

    /// Current value (acquire load).
    pub fn load(&self) -> i64 {
        self.0.load(Ordering::Acquire)
    }

    /// See [`atomic_add_i64`].
    pub fn add(&self, addend: i64) -> i64 {
        atomic_add_i64(&self.0, addend)
    }

    /// See [`atomic_exchange_i64`].
    pub fn exchange(&self, new: i64) -> i64 {
        atomic_exchange_i64(&self.0, new)
    }

    /// See [`atomic_cas_i64`].
    pub fn cas(&self, expected: i64, new: i64) -> i64 {
        atomic_cas_i64(&self.0, expected, new)
    }

    /// Borrows the underlying atomic.
    pub const fn as_atomic(&self) -> &AtomicI64 {
        &self.0
    }

    /// Consumes the wrapper, returning the final value.
    pub fn into_inner(self) -> i64 {
        self.0.into_inner()
    }
}

impl From<i64> for SharedI64 {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_wraps_on_overflow() {
        let v = AtomicI64::new(i64::MAX);
        assert_eq!(atomic_add_i64(&v, 1), i64::MAX);
        assert_eq!(v.load(Ordering::Relaxed), i64::MIN);
    }

    #[test]
    fn failed_cas_leaves_value() {
        let v = AtomicI64::new(4);
        assert_eq!(atomic_cas_i64(&v, 5, 9), 4);
        assert_eq!(v.load(Ordering::Relaxed), 4);
        assert_eq!(atomic_cas_i64(&v, 4, 9), 4);
        assert_eq!(v.load(Ordering::Relaxed), 9);
    }
}
