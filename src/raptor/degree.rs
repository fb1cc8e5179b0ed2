//! LT degree distribution of RFC 5053 Section 5.4.4.2.

/// Size of the domain of [`degree`]: `v` ranges over `[0, 2^20)`.
pub const DEGREE_RANGE: u32 = 1 << 20;

/// `(exclusive upper threshold, degree)` pairs covering `[0, 2^20)`.
#[allow(clippy::unreadable_literal)]
pub const DEGREE_TABLE: [(u32, usize); 7] = [
    (10241, 1),
    (491582, 2),
    (712794, 3),
    (831695, 4),
    (948446, 10),
    (1032189, 11),
    (1048576, 40),
];

/// Maps a uniform `v` in `[0, 2^20)` to an LT output degree.
///
/// # Panics
///
/// Panics if `v >= 2^20`. Callers obtain `v` from `Rand[Y, 0, 2^20]`, so
/// an out-of-range value is a programming error.
#[must_use]
pub fn degree(v: u32) -> usize {
    assert!(v < DEGREE_RANGE, "degree input {v} outside [0, 2^20)");
    DEGREE_TABLE
        .iter()
        .find(|&&(threshold, _)| v < threshold)
        .map_or(40, |&(_, d)| d)
}
