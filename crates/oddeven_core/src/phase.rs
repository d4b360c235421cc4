//! # Phases
//!
//! One phase is a sweep of compare-exchange operations over disjoint
//! adjacent pairs. Even phases start at index 0, odd phases at index 1.
//!
//! ```text
//! index:        0   1   2   3   4   5   6
//! even pairs:  [0 , 1] [2 , 3] [4 , 5]
//! odd pairs:       [1 , 2] [3 , 4] [5 , 6]
//! ```

/// Parity of a phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Pairs (0,1), (2,3), (4,5), ...
    Even,
    /// Pairs (1,2), (3,4), (5,6), ...
    Odd,
}

impl Phase {
    /// Returns the parity of phase number `index`.
    #[inline]
    #[must_use]
    pub const fn of(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Even
        } else {
            Self::Odd
        }
    }

    /// Index of the left element of the first pair.
    #[inline]
    #[must_use]
    pub const fn first_index(self) -> usize {
        match self {
            Self::Even => 0,
            Self::Odd => 1,
        }
    }

    /// Number of pairs this phase examines in an array of length `len`.
    #[inline]
    #[must_use]
    pub const fn pair_count(self, len: usize) -> usize {
        len.saturating_sub(self.first_index()) / 2
    }

    /// Returns the sub-slice covered by this phase's pairs.
    ///
    /// The region always has even length, so `chunks_exact_mut(2)` and
    /// `chunks_mut(2 * k)` both line up with the phase's pairs. A trailing
    /// element without a partner is left out.
    #[inline]
    pub fn pair_region<T>(self, data: &mut [T]) -> &mut [T] {
        let start = self.first_index().min(data.len());
        let end = start + 2 * self.pair_count(data.len());
        &mut data[start..end]
    }

    /// Runs this phase on the calling thread.
    pub fn apply<T: Ord>(self, data: &mut [T]) {
        sweep_pairs(self.pair_region(data));
    }
}

/// Compare-exchange on a two-element window.
///
/// Swaps only when `pair[0] > pair[1]`, so equal neighbours stay put.
/// Returns whether a swap happened.
#[inline]
pub fn compare_exchange<T: Ord>(pair: &mut [T]) -> bool {
    debug_assert_eq!(pair.len(), 2, "compare_exchange needs exactly two elements");
    if pair[0] > pair[1] {
        pair.swap(0, 1);
        true
    } else {
        false
    }
}

/// Compare-exchanges every consecutive pair of an even-length block.
#[inline]
pub(crate) fn sweep_pairs<T: Ord>(block: &mut [T]) {
    for pair in block.chunks_exact_mut(2) {
        compare_exchange(pair);
    }
}
