// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Owning aligned heap blocks and alignment arithmetic.

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::ArenaError;

/// Alignment of every arena block and every pointer the arena returns.
pub const ARENA_ALIGN: usize = 16;

/// Rounds `size` up to the next multiple of `align`.
///
/// `align` must be a power of two. Returns `None` on overflow.
///
/// # Examples
/// ```
/// use tessera_arena::align_up;
/// assert_eq!(align_up(521, 16), Some(528));
/// assert_eq!(align_up(32, 16), Some(32));
/// assert_eq!(align_up(usize::MAX, 16), None);
/// ```
pub const fn align_up(size: usize, align: usize) -> Option<usize> {
    debug_assert!(align.is_power_of_two());
    match size.checked_add(align - 1) {
        Some(padded) => Some(padded & !(align - 1)),
        None => None,
    }
}

/// `true` when `ptr` is a multiple of `align`.
pub fn is_aligned<T>(ptr: *const T, align: usize) -> bool {
    ptr.cast::<u8>().addr().is_multiple_of(align)
}

/// A heap allocation with a fixed size and alignment, released on drop.
///
/// Allocation failure is fatal: it goes through
/// [`std::alloc::handle_alloc_error`].
#[derive(Debug)]
pub struct AlignedBlock {
    ptr: NonNull<u8>,
    layout: Layout,
}

// SAFETY: the block uniquely owns its allocation; nothing else aliases it.
#[allow(unsafe_code)]
unsafe impl Send for AlignedBlock {}

impl AlignedBlock {
    /// Allocates `size` bytes aligned to `align`.
    ///
    /// A zero `size` is rounded up to `align` so the allocation is never
    /// zero-sized.
    pub fn new(size: usize, align: usize) -> Result<Self, ArenaError> {
        if !align.is_power_of_two() {
            return Err(ArenaError::InvalidAlignment { align });
        }
        let layout = Layout::from_size_align(size.max(align), align)
            .map_err(|_| ArenaError::SizeOverflow { requested: size })?;
        // SAFETY: `layout` has a non-zero size.
        #[allow(unsafe_code)]
        let raw = unsafe { alloc::alloc(layout) };
        let ptr = NonNull::new(raw).unwrap_or_else(|| alloc::handle_alloc_error(layout));
        Ok(Self { ptr, layout })
    }

    /// Usable size in bytes.
    pub const fn size(&self) -> usize {
        self.layout.size()
    }

    /// Alignment of the base pointer.
    pub const fn align(&self) -> usize {
        self.layout.align()
    }

    /// Base pointer of the block.
    pub const fn as_ptr(&self) -> NonNull<u8> {
        self.ptr
    }
}

impl Drop for AlignedBlock {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: `ptr` came from `alloc::alloc` with exactly this layout and
        // is released only here.
        unsafe {
            alloc::dealloc(self.ptr.as_ptr(), self.layout);
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn blocks_honour_their_alignment() {
        for align in [8, 16, 64, 4096] {
            let block = AlignedBlock::new(19, align).unwrap();
            assert!(is_aligned(block.as_ptr().as_ptr(), align));
            assert_eq!(block.align(), align);
            assert!(block.size() >= 19);
        }
    }

    #[test]
    fn zero_sized_request_still_allocates() {
        let block = AlignedBlock::new(0, ARENA_ALIGN).unwrap();
        assert_eq!(block.size(), ARENA_ALIGN);
    }

    #[test]
    fn rejects_bad_alignment() {
        assert!(matches!(
            AlignedBlock::new(16, 24),
            Err(ArenaError::InvalidAlignment { align: 24 })
        ));
        assert!(matches!(
            AlignedBlock::new(isize::MAX.unsigned_abs(), 16),
            Err(ArenaError::SizeOverflow { .. })
        ));
    }

    #[test]
    fn align_up_rounds_to_multiples() {
        assert_eq!(align_up(0, 16), Some(0));
        assert_eq!(align_up(1, 16), Some(16));
        assert_eq!(align_up(12, 16), Some(16));
        assert_eq!(align_up(17, 8), Some(24));
    }
}
