// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::unwrap_used)]
use proptest::prelude::*;
use tessera_arena::{is_aligned, Arena};

proptest! {
    #[test]
    fn allocations_are_aligned_and_disjoint(
        block_size in 16_usize..2048,
        sizes in prop::collection::vec(0_usize..3000, 1..64),
    ) {
        let arena = Arena::new(block_size);
        let mut spans: Vec<(usize, usize)> = Vec::with_capacity(sizes.len());
        for &n in &sizes {
            let p = arena.alloc(n).unwrap();
            prop_assert!(is_aligned(p.as_ptr(), 16));
            let start = p.as_ptr() as usize;
            spans.push((start, start + n.next_multiple_of(16)));
        }
        spans.sort_unstable();
        for pair in spans.windows(2) {
            prop_assert!(pair[0].1 <= pair[1].0, "overlap: {:?}", pair);
        }
    }

    #[test]
    fn written_slices_keep_their_contents(
        chunks in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..200), 1..32),
    ) {
        let arena = Arena::new(256);
        let placed: Vec<&mut [u8]> = chunks
            .iter()
            .map(|c| arena.alloc_slice_copy(c).unwrap())
            .collect();
        for (slice, chunk) in placed.iter().zip(&chunks) {
            prop_assert_eq!(&**slice, chunk.as_slice());
        }
    }

    #[test]
    fn reset_never_grows_a_repeated_workload(
        sizes in prop::collection::vec(1_usize..512, 1..32),
    ) {
        let mut arena = Arena::new(512);
        for &n in &sizes {
            arena.alloc(n).unwrap();
        }
        let committed = arena.committed_bytes();
        for _ in 0..3 {
            arena.reset();
            for &n in &sizes {
                arena.alloc(n).unwrap();
            }
            prop_assert_eq!(arena.committed_bytes(), committed);
        }
    }
}
