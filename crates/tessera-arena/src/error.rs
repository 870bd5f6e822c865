// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type for arena construction and allocation.

use thiserror::Error;

/// Error type for arena operations.
///
/// Running out of memory is not represented here: the backing allocator
/// aborts through [`std::alloc::handle_alloc_error`].
#[derive(Debug, Error)]
pub enum ArenaError {
    /// The request, once rounded up to the arena alignment, does not fit in
    /// an `isize`-sized allocation.
    #[error("allocation of {requested} bytes overflows the address space")]
    SizeOverflow {
        /// Requested size in bytes, before rounding.
        requested: usize,
    },
    /// Alignment is zero or not a power of two.
    #[error("alignment {align} is not a power of two")]
    InvalidAlignment {
        /// The rejected alignment.
        align: usize,
    },
    /// Configured block size is zero.
    #[error("block size must be non-zero")]
    ZeroBlockSize,
    /// Config (de)serialization failure.
    #[cfg(feature = "serde")]
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}
