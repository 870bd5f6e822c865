// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tessera arena: a block-based bump allocator.
//!
//! [`Arena`] serves 16-byte-aligned byte ranges by bumping a cursor through
//! fixed-size blocks. Retired blocks are recycled across [`Arena::reset`]
//! calls instead of being returned to the system; [`Arena::free`] releases
//! everything.
//!
//! The arena is single-threaded (`!Sync`). Typed helpers place values and
//! slices directly, but never run destructors.

mod arena;
mod block;
mod config;
mod error;

pub use arena::{Arena, ArenaStats};
pub use block::{align_up, is_aligned, AlignedBlock, ARENA_ALIGN};
pub use config::{ArenaConfig, DEFAULT_BLOCK_SIZE};
pub use error::ArenaError;
