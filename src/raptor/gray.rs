//! Gray codes grouped by population count, used to build the HDPC rows.
//!
//! RFC 5053 Section 5.4.2.3 defines `m[j]` as the j-th element of the
//! sequence `g[i] = i ^ floor(i / 2)`, `i = 0, 1, 2, ...`, restricted to the
//! codes with exactly `H'` bits set. The table stores that subsequence for
//! every popcount once, for all `i` below a fixed bound.

use std::sync::OnceLock;

/// Exponent of the default bound. `k <= 8192` never needs `H > 16`.
pub const DEFAULT_BOUND_BITS: u32 = 16;

/// Gray code sequences grouped by popcount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayPopcountTable {
    bound: u32,
    by_popcount: Vec<Vec<u32>>,
}

impl GrayPopcountTable {
    /// Builds the table for the Gray codes of `i` in `[0, 2^bound_bits)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound_bits` exceeds 24.
    #[must_use]
    pub fn build(bound_bits: u32) -> Self {
        assert!(bound_bits <= 24, "gray table bound too large");
        let bound = 1u32 << bound_bits;
        let mut by_popcount = vec![Vec::new(); bound_bits as usize + 1];
        for i in 0..bound {
            let gray = i ^ (i >> 1);
            by_popcount[gray.count_ones() as usize].push(gray);
        }
        Self { bound, by_popcount }
    }

    /// Process-wide table for `i < 2^16`, built on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        static TABLE: OnceLock<GrayPopcountTable> = OnceLock::new();
        TABLE.get_or_init(|| Self::build(DEFAULT_BOUND_BITS))
    }

    /// Gray codes with exactly `popcount` bits set, in order of generation.
    ///
    /// Empty if no code below the bound has that popcount.
    #[must_use]
    pub fn sequence(&self, popcount: usize) -> &[u32] {
        self.by_popcount.get(popcount).map_or(&[], Vec::as_slice)
    }

    /// Exclusive upper bound on the generating index `i`.
    #[must_use]
    pub const fn bound(&self) -> u32 {
        self.bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raptor::numbers::choose;

    #[test]
    fn small_table_matches_hand_computation() {
        let table = GrayPopcountTable::build(3);
        // g(0..8) = 0, 1, 3, 2, 6, 7, 5, 4
        assert_eq!(table.sequence(0), &[0]);
        assert_eq!(table.sequence(1), &[1, 2, 4]);
        assert_eq!(table.sequence(2), &[3, 6, 5]);
        assert_eq!(table.sequence(3), &[7]);
        assert!(table.sequence(4).is_empty());
    }

    #[test]
    fn sequences_have_binomial_length() {
        let table = GrayPopcountTable::global();
        assert_eq!(table.bound(), 1 << 16);
        for popcount in 0..=16 {
            let seq = table.sequence(popcount);
            assert_eq!(seq.len() as u64, choose(16, popcount));
            assert!(seq.iter().all(|g| g.count_ones() as usize == popcount));
        }
    }

    #[test]
    fn entries_follow_generation_order() {
        let table = GrayPopcountTable::global();
        let seq = table.sequence(8);
        let mut expected = (0u32..1 << 16)
            .map(|i| i ^ (i >> 1))
            .filter(|g| g.count_ones() == 8);
        for &g in seq {
            assert_eq!(Some(g), expected.next());
        }
    }
}
