// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Block-based bump allocator.
//!
//! The arena hands out 16-byte-aligned byte ranges from a chain of blocks:
//!
//! - One *active* block with a bump cursor serves requests while they fit.
//! - When a request does not fit, the active block is retired to the *used*
//!   list and a replacement is taken first-fit from the *available* list, or
//!   freshly allocated with size `max(request, block_size)`.
//! - [`Arena::reset`] rewinds the cursor and moves every used block to the
//!   available list without returning memory to the system.
//!
//! Blocks are never split or coalesced. Allocation takes `&self`; reset and
//! free take `&mut self`, so references handed out earlier cannot outlive a
//! reset.

use std::alloc::Layout;
use std::cell::RefCell;
use std::mem;
use std::ptr::NonNull;

use tracing::{debug, trace};

use crate::block::{align_up, AlignedBlock, ARENA_ALIGN};
use crate::{ArenaConfig, ArenaError};

/// Snapshot of an arena's bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArenaStats {
    /// Default size of fresh blocks.
    pub block_size: usize,
    /// Whether an active block exists.
    pub has_active_block: bool,
    /// Cursor offset within the active block (0 without one).
    pub active_cursor: usize,
    /// Bytes left in the active block (0 without one).
    pub active_remaining: usize,
    /// Blocks retired since the last reset.
    pub used_blocks: usize,
    /// Blocks waiting to be reused.
    pub available_blocks: usize,
    /// Total bytes held across all blocks.
    pub committed_bytes: usize,
}

#[derive(Debug, Default)]
struct ArenaState {
    active: Option<AlignedBlock>,
    cursor: usize,
    used: Vec<AlignedBlock>,
    available: Vec<AlignedBlock>,
}

impl ArenaState {
    /// Serves `size` bytes from the active block if they fit.
    fn bump(&mut self, size: usize) -> Option<NonNull<u8>> {
        let block = self.active.as_ref()?;
        if block.size() - self.cursor < size {
            return None;
        }
        // SAFETY: `cursor + size <= block.size()`, so the offset stays within
        // the block's allocation.
        #[allow(unsafe_code)]
        let ptr = unsafe { block.as_ptr().add(self.cursor) };
        self.cursor += size;
        Some(ptr)
    }

    /// Installs a block with room for `size` bytes and retires the previous
    /// active block. On error the state is left untouched.
    fn refill(&mut self, size: usize, block_size: usize) -> Result<(), ArenaError> {
        let block = match self.available.iter().position(|b| b.size() >= size) {
            Some(idx) => {
                let block = self.available.swap_remove(idx);
                trace!(size = block.size(), "reusing available block");
                block
            }
            None => {
                let block = AlignedBlock::new(size.max(block_size), ARENA_ALIGN)?;
                trace!(size = block.size(), "allocated fresh block");
                block
            }
        };
        if let Some(retired) = self.active.replace(block) {
            trace!(size = retired.size(), "retiring active block to used list");
            self.used.push(retired);
        }
        self.cursor = 0;
        Ok(())
    }

    fn committed_bytes(&self) -> usize {
        self.active
            .iter()
            .chain(&self.used)
            .chain(&self.available)
            .map(AlignedBlock::size)
            .sum()
    }
}

/// Single-threaded region allocator; see the module docs.
///
/// Values placed with the typed helpers are never dropped; the arena only
/// reclaims their bytes.
///
/// # Examples
/// ```
/// use tessera_arena::{is_aligned, Arena};
/// let arena = Arena::new(1024);
/// let a = arena.alloc(10).unwrap();
/// let b = arena.alloc(10).unwrap();
/// assert!(is_aligned(a.as_ptr(), 16));
/// assert_eq!(b.as_ptr() as usize - a.as_ptr() as usize, 16);
/// ```
#[derive(Debug)]
pub struct Arena {
    block_size: usize,
    state: RefCell<ArenaState>,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(crate::DEFAULT_BLOCK_SIZE)
    }
}

impl Arena {
    /// Creates an empty arena; no memory is allocated until the first
    /// request.
    ///
    /// `block_size` is not checked here. A size that cannot be allocated
    /// (see [`ArenaConfig::validate`]) makes every refill fail with
    /// [`ArenaError::SizeOverflow`] without disturbing existing blocks; use
    /// [`Self::with_config`] to reject it up front.
    pub const fn new(block_size: usize) -> Self {
        Self {
            block_size,
            state: RefCell::new(ArenaState {
                active: None,
                cursor: 0,
                used: Vec::new(),
                available: Vec::new(),
            }),
        }
    }

    /// Creates an empty arena from a validated config.
    pub fn with_config(config: &ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self::new(config.block_size))
    }

    /// Default size of fresh blocks.
    pub const fn block_size(&self) -> usize {
        self.block_size
    }

    /// Allocates `n` bytes, rounded up to a multiple of 16.
    ///
    /// The returned pointer is 16-byte aligned and valid until the next
    /// [`Self::reset`] or [`Self::free`].
    pub fn alloc(&self, n: usize) -> Result<NonNull<u8>, ArenaError> {
        let size = align_up(n, ARENA_ALIGN)
            .filter(|s| isize::try_from(*s).is_ok())
            .ok_or(ArenaError::SizeOverflow { requested: n })?;
        let mut state = self.state.borrow_mut();
        if let Some(ptr) = state.bump(size) {
            return Ok(ptr);
        }
        state.refill(size, self.block_size)?;
        state.bump(size).ok_or(ArenaError::SizeOverflow { requested: n })
    }

    /// Allocates space for `layout`, honouring alignments above 16 by
    /// over-allocating and aligning up.
    pub fn alloc_layout(&self, layout: Layout) -> Result<NonNull<u8>, ArenaError> {
        if layout.align() <= ARENA_ALIGN {
            return self.alloc(layout.size());
        }
        let padded = layout
            .size()
            .checked_add(layout.align() - ARENA_ALIGN)
            .ok_or(ArenaError::SizeOverflow {
                requested: layout.size(),
            })?;
        let raw = self.alloc(padded)?;
        let offset = raw.as_ptr().align_offset(layout.align());
        // SAFETY: `raw` is 16-aligned, so `offset <= align - 16` and the
        // aligned range of `layout.size()` bytes ends inside `padded`.
        #[allow(unsafe_code)]
        let aligned = unsafe { raw.add(offset) };
        Ok(aligned)
    }

    /// Moves `value` into the arena and returns a reference to it.
    #[allow(clippy::mut_from_ref, clippy::cast_ptr_alignment)]
    pub fn alloc_value<T>(&self, value: T) -> Result<&mut T, ArenaError> {
        let ptr = self.alloc_layout(Layout::new::<T>())?.cast::<T>();
        // SAFETY: `ptr` is aligned and sized for `T`, belongs to no other
        // allocation, and stays valid while `self` is borrowed (reset and
        // free need `&mut self`).
        #[allow(unsafe_code)]
        let slot = unsafe {
            ptr.write(value);
            &mut *ptr.as_ptr()
        };
        Ok(slot)
    }

    /// Copies `src` into the arena.
    #[allow(clippy::mut_from_ref, clippy::cast_ptr_alignment)]
    pub fn alloc_slice_copy<T: Copy>(&self, src: &[T]) -> Result<&mut [T], ArenaError> {
        let layout = Layout::array::<T>(src.len()).map_err(|_| ArenaError::SizeOverflow {
            requested: src.len().saturating_mul(mem::size_of::<T>()),
        })?;
        let ptr = self.alloc_layout(layout)?.cast::<T>();
        // SAFETY: the destination is fresh, aligned, and large enough for
        // `src.len()` elements; source and destination cannot overlap.
        #[allow(unsafe_code)]
        let slice = unsafe {
            ptr.as_ptr().copy_from_nonoverlapping(src.as_ptr(), src.len());
            std::slice::from_raw_parts_mut(ptr.as_ptr(), src.len())
        };
        Ok(slice)
    }

    /// Allocates `len` default-initialized elements.
    #[allow(clippy::mut_from_ref, clippy::cast_ptr_alignment)]
    pub fn alloc_slice_fill_default<T: Default>(&self, len: usize) -> Result<&mut [T], ArenaError> {
        let layout = Layout::array::<T>(len).map_err(|_| ArenaError::SizeOverflow {
            requested: len.saturating_mul(mem::size_of::<T>()),
        })?;
        let ptr = self.alloc_layout(layout)?.cast::<T>();
        // SAFETY: the range is fresh, aligned, and sized for `len` elements;
        // each slot is written exactly once before the slice is formed.
        #[allow(unsafe_code)]
        let slice = unsafe {
            for i in 0..len {
                ptr.as_ptr().add(i).write(T::default());
            }
            std::slice::from_raw_parts_mut(ptr.as_ptr(), len)
        };
        Ok(slice)
    }

    /// Rewinds the arena for reuse.
    ///
    /// The active block stays live with its cursor at 0; every used block is
    /// prepended to the available list. No memory is returned to the system.
    pub fn reset(&mut self) {
        let state = self.state.get_mut();
        state.cursor = 0;
        let mut recycled = mem::take(&mut state.used);
        recycled.append(&mut state.available);
        state.available = recycled;
        debug!(
            available = state.available.len(),
            has_active = state.active.is_some(),
            "arena reset"
        );
    }

    /// Releases every block; the arena is left as if freshly created.
    pub fn free(&mut self) {
        let state = self.state.get_mut();
        let released = state.committed_bytes();
        *state = ArenaState::default();
        debug!(released, "arena freed");
    }

    /// Blocks retired since the last reset.
    pub fn used_block_count(&self) -> usize {
        self.state.borrow().used.len()
    }

    /// Blocks waiting to be reused.
    pub fn available_block_count(&self) -> usize {
        self.state.borrow().available.len()
    }

    /// Whether an active block exists.
    pub fn has_active_block(&self) -> bool {
        self.state.borrow().active.is_some()
    }

    /// Bytes left in the active block.
    pub fn active_remaining(&self) -> usize {
        let state = self.state.borrow();
        state.active.as_ref().map_or(0, |b| b.size() - state.cursor)
    }

    /// Total bytes held across the active, used, and available blocks.
    pub fn committed_bytes(&self) -> usize {
        self.state.borrow().committed_bytes()
    }

    /// Snapshot of the bookkeeping.
    pub fn stats(&self) -> ArenaStats {
        let state = self.state.borrow();
        ArenaStats {
            block_size: self.block_size,
            has_active_block: state.active.is_some(),
            active_cursor: state.cursor,
            active_remaining: state.active.as_ref().map_or(0, |b| b.size() - state.cursor),
            used_blocks: state.used.len(),
            available_blocks: state.available.len(),
            committed_bytes: state.committed_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn construction_allocates_nothing() {
        let arena = Arena::new(600);
        assert!(!arena.has_active_block());
        assert_eq!(arena.committed_bytes(), 0);
        assert_eq!(arena.stats(), ArenaStats { block_size: 600, ..ArenaStats::default() });
    }

    #[test]
    fn requests_round_up_to_sixteen() {
        let arena = Arena::new(600);
        arena.alloc(1).unwrap();
        assert_eq!(arena.stats().active_cursor, 16);
        arena.alloc(17).unwrap();
        assert_eq!(arena.stats().active_cursor, 48);
        arena.alloc(0).unwrap();
        assert_eq!(arena.stats().active_cursor, 48);
    }

    #[test]
    fn oversize_request_gets_bespoke_block() {
        let arena = Arena::new(64);
        arena.alloc(1000).unwrap();
        assert_eq!(arena.committed_bytes(), 1008);
        assert_eq!(arena.active_remaining(), 0);
        arena.alloc(16).unwrap();
        assert_eq!(arena.committed_bytes(), 1008 + 64);
        assert_eq!(arena.used_block_count(), 1);
    }

    #[test]
    fn unallocatable_block_size_fails_without_losing_state() {
        let arena = Arena::new(usize::MAX);
        assert!(matches!(
            arena.alloc(16),
            Err(ArenaError::SizeOverflow { .. })
        ));
        assert_eq!(arena.stats(), Arena::new(usize::MAX).stats());
        assert!(matches!(
            Arena::with_config(&ArenaConfig::new(usize::MAX)),
            Err(ArenaError::SizeOverflow { .. })
        ));
    }

    #[test]
    fn overflowing_request_is_an_error() {
        let arena = Arena::new(64);
        assert!(matches!(
            arena.alloc(usize::MAX),
            Err(ArenaError::SizeOverflow { requested: usize::MAX })
        ));
        assert!(!arena.has_active_block());
    }
}
