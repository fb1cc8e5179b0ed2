//! Systematic indices `J(k)` for `k` in `[4, 8192]`.
//!
//! Entries for `k <= 136` are the values published in RFC 5053 Section 5.7.
//! Each entry above that is the smallest index for which the constraint
//! matrix of source ids `0..k` is non-singular.

/// Largest `k` whose entry is the published RFC 5053 value.
pub const PUBLISHED_MAX_K: usize = 136;

/// `J(k)` at position `k - 4`.
#[rustfmt::skip]
pub static SYSTEMATIC_INDEX: [u16; 8189] = [
    // k = 4..=136
    18, 14, 61, 46, 14, 22, 20, 40, 48, 1, 29, 40, 43, 46, 18, 8,
    20, 2, 61, 26, 13, 29, 36, 19, 58, 5, 58, 0, 54, 56, 24, 14,
    5, 67, 39, 31, 25, 29, 24, 19, 14, 56, 49, 49, 63, 30, 4, 39,
    2, 1, 20, 19, 61, 4, 54, 70, 25, 52, 9, 26, 55, 69, 27, 68,
    75, 19, 64, 57, 45, 3, 37, 31, 100, 41, 25, 41, 53, 23, 9, 31,
    26, 30, 30, 46, 90, 50, 13, 90, 77, 61, 31, 54, 54, 3, 21, 66,
    21, 11, 23, 11, 29, 21, 7, 1, 27, 4, 34, 17, 85, 69, 17, 75,
    93, 57, 0, 53, 71, 88, 119, 88, 90, 22, 0, 58, 41, 22, 96, 26,
    79, 118, 19, 3, 81,
    // k = 137..=8192
    0, 3, 0, 1, 0, 2, 2, 0, 7, 9, 3, 0, 8, 7, 12, 4,
    0, 0, 0, 2, 2, 7, 0, 1, 13, 13, 12, 3, 0, 3, 0, 1,
    3, 3, 7, 0, 2, 6, 2, 10, 3, 6, 0, 16, 0, 5, 5, 6,
    12, 6, 0, 0, 6, 19, 4, 3, 10, 3, 5, 23, 0, 0, 1, 7,
    0, 5, 19, 14, 6, 9, 6, 0, 5, 0, 20, 0, 3, 4, 16, 3,
    1, 1, 0, 6, 3, 1, 1, 2, 0, 10, 10, 6, 6, 0, 11, 3,
    2, 2, 1, 8, 1, 2, 2, 20, 4, 8, 10, 1, 4, 1, 1, 9,
    1, 6, 2, 10, 2, 4, 3, 8, 5, 9, 8, 37, 6, 3, 3, 5,
    4, 6, 4, 4, 14, 0, 3, 8, 6, 0, 8, 0, 18, 6, 34, 6,
    1, 10, 1, 6, 2, 1, 2, 12, 2, 12, 1, 11, 1, 16, 0, 1,
    5, 4, 6, 6, 0, 0, 0, 8, 4, 3, 0, 7, 3, 7, 18, 3,
    9, 14, 13, 3, 4, 1, 1, 6, 3, 8, 6, 0, 11, 3, 8, 3,
    1, 4, 3, 3, 11, 11, 11, 11, 13, 1, 2, 4, 1, 7, 10, 20,
    3, 8, 3, 1, 4, 9, 4, 4, 1, 8, 3, 7, 15, 7, 8, 8,
    3, 12, 1, 4, 9, 4, 25, 0, 0, 0, 1, 0, 0, 4, 1, 6,
    1, 3, 4, 4, 1, 4, 4, 1, 10, 1, 5, 8, 1, 6, 4, 8,
    4, 4, 8, 4, 4, 16, 4, 8, 2, 6, 4, 1, 19, 14, 1, 5,
    1, 7, 15, 0, 0, 1, 0, 0, 0, 0, 4, 14, 2, 2, 6, 2,
    2, 14, 3, 17, 2, 8, 1, 8, 5, 8, 13, 5, 8, 13, 1, 1,
    4, 7, 24, 3, 7, 4, 7, 8, 3, 7, 18, 6, 7, 13, 3, 3,
    16, 19, 5, 3, 0, 7, 0, 1, 1, 15, 3, 0, 0, 0, 0, 8,
    13, 2, 3, 15, 1, 1, 4, 1, 1, 2, 8, 2, 3, 2, 4, 8,
    12, 1, 9, 1, 15, 4, 7, 8, 1, 3, 13, 13, 1, 10, 9, 3,
    8, 6, 5, 24, 13, 4, 0, 12, 15, 12, 6, 14, 3, 9, 0, 0,
    3, 6, 0, 10, 3, 3, 3, 3, 14, 3, 3, 5, 3, 3, 1, 2,
    2, 2, 4, 2, 1, 4, 5, 1, 1, 4, 4, 16, 4, 5, 10, 4,
    3, 5, 12, 36, 4, 0, 0, 6, 0, 0, 21, 16, 13, 7, 2, 2,
    3, 1, 2, 3, 1, 3, 2, 3, 2, 3, 0, 0, 29, 2, 6, 0,
    2, 2, 4, 4, 5, 5, 1, 7, 3, 3, 3, 11, 2, 6, 3, 6,
    3, 6, 20, 8, 5, 5, 15, 3, 3, 6, 6, 6, 10, 3, 13, 10,
    13, 10, 16, 0, 12, 8, 5, 5, 12, 1, 3, 12, 27, 0, 20, 4,
    1, 6, 1, 1, 3, 1, 3, 12, 1, 13, 0, 2, 0, 7, 7, 3,
    0, 6, 6, 17, 11, 6, 6, 13, 12, 6, 12, 14, 1, 1, 0, 8,
    8, 6, 2, 15, 4, 0, 6, 0, 0, 3, 0, 4, 4, 4, 10, 2,
    1, 3, 1, 0, 1, 1, 1, 4, 4, 20, 8, 13, 0, 0, 49, 4,
    0, 6, 4, 6, 4, 4, 1, 19, 1, 3, 3, 13, 3, 5, 0, 4,
    3, 3, 7, 14, 5, 6, 7, 6, 5, 1, 7, 1, 11, 7, 7, 0,
    4, 10, 3, 4, 13, 25, 11, 4, 11, 3, 7, 8, 11, 11, 8, 2,
    63, 8, 5, 0, 0, 0, 3, 1, 1, 3, 5, 1, 8, 11, 0, 0,
    1, 1, 4, 8, 6, 8, 1, 8, 1, 6, 1, 8, 1, 6, 0, 4,
    0, 4, 13, 8, 8, 8, 0, 0, 0, 10, 8, 10, 5, 5, 10, 1,
    3, 1, 5, 3, 5, 3, 19, 3, 3, 3, 1, 1, 16, 3, 1, 1,
    2, 2, 2, 2, 26, 7, 7, 7, 0, 16, 8, 17, 0, 0, 5, 5,
    19, 1, 1, 30, 15, 5, 14, 5, 16, 16, 1, 1, 5, 15, 1, 3,
    25, 0, 17, 5, 8, 1, 4, 0, 22, 0, 6, 4, 0, 0, 4, 4,
    41, 11, 13, 7, 13, 4, 4, 10, 9, 50, 7, 7, 8, 27, 7, 4,
    8, 6, 3, 6, 5, 5, 4, 19, 4, 6, 13, 19, 6, 0, 0, 4,
    6, 5, 4, 18, 4, 18, 20, 4, 13, 4, 33, 18, 13, 1, 1, 18,
    3, 4, 11, 11, 4, 11, 8, 3, 3, 9, 23, 9, 8, 4, 3, 3,
    4, 6, 8, 4, 3, 15, 0, 28, 6, 0, 50, 11, 4, 0, 31, 25,
    11, 4, 4, 8, 4, 12, 18, 12, 8, 20, 8, 15, 5, 19, 8, 8,
    6, 8, 22, 22, 32, 6, 0, 6, 8, 0, 1, 8, 11, 11, 25, 14,
    14, 4, 21, 14, 1, 29, 1, 42, 4, 20, 30, 10, 10, 10, 10, 16,
    17, 5, 6, 13, 5, 2, 1, 1, 1, 1, 4, 26, 4, 12, 3, 9,
    9, 9, 3, 23, 3, 8, 14, 3, 22, 8, 3, 3, 8, 3, 10, 22,
    5, 5, 5, 5, 1, 6, 10, 9, 3, 13, 13, 6, 3, 13, 6, 16,
    16, 11, 11, 4, 16, 6, 6, 0, 0, 0, 3, 3, 1, 13, 17, 3,
    17, 0, 46, 9, 3, 3, 12, 8, 12, 9, 6, 20, 13, 13, 20, 9,
    20, 9, 9, 6, 31, 9, 14, 14, 22, 4, 4, 4, 4, 9, 4, 3,
    1, 13, 13, 4, 14, 15, 14, 28, 13, 14, 18, 4, 7, 8, 10, 15,
    8, 4, 8, 10, 10, 5, 10, 4, 16, 5, 3, 6, 0, 3, 3, 3,
    10, 3, 3, 3, 29, 3, 3, 9, 9, 9, 6, 9, 9, 6, 18, 4,
    8, 8, 4, 21, 8, 0, 21, 4, 4, 4, 15, 4, 4, 12, 11, 1,
    9, 1, 0, 1, 3, 51, 5, 13, 17, 54, 22, 13, 12, 9, 35, 7,
    54, 9, 19, 19, 8, 8, 8, 8, 37, 8, 19, 21, 19, 13, 8, 0,
    3, 17, 0, 5, 10, 37, 13, 6, 13, 10, 3, 5, 3, 10, 23, 10,
    26, 5, 23, 5, 23, 1, 1, 4, 6, 4, 23, 3, 3, 14, 18, 22,
    3, 14, 0, 15, 13, 3, 3, 5, 6, 6, 6, 3, 3, 5, 1, 23,
    16, 2, 15, 4, 4, 0, 13, 17, 35, 4, 0, 36, 23, 0, 0, 3,
    19, 5, 24, 24, 5, 24, 21, 1, 22, 17, 0, 1, 1, 4, 1, 4,
    1, 0, 3, 15, 0, 1, 0, 17, 9, 11, 1, 0, 0, 0, 21, 9,
    9, 4, 3, 23, 11, 4, 3, 0, 1, 58, 3, 3, 8, 5, 3, 9,
    0, 10, 15, 28, 3, 3, 3, 6, 6, 6, 14, 8, 14, 0, 0, 1,
    1, 1, 4, 0, 11, 7, 30, 0, 0, 11, 4, 4, 1, 1, 0, 21,
    1, 1, 4, 1, 20, 8, 1, 1, 1, 4, 13, 4, 7, 37, 7, 20,
    4, 3, 3, 3, 15, 3, 4, 5, 5, 15, 15, 12, 0, 23, 10, 15,
    9, 16, 10, 8, 8, 8, 11, 3, 15, 17, 17, 27, 3, 18, 15, 12,
    14, 12, 8, 0, 21, 12, 13, 40, 3, 51, 17, 41, 1, 13, 8, 1,
    15, 3, 7, 2, 2, 18, 3, 3, 8, 6, 11, 8, 3, 0, 30, 2,
    13, 4, 4, 3, 5, 11, 9, 32, 9, 26, 5, 9, 9, 25, 11, 11,
    6, 6, 6, 17, 6, 32, 23, 6, 27, 1, 6, 13, 13, 25, 13, 12,
    15, 11, 12, 3, 4, 12, 11, 8, 0, 6, 0, 4, 0, 4, 4, 4,
    1, 1, 3, 75, 6, 2, 4, 2, 1, 2, 1, 8, 20, 1, 20, 32,
    1, 18, 12, 25, 12, 1, 1, 11, 13, 17, 1, 15, 15, 0, 0, 3,
    0, 3, 8, 8, 6, 44, 6, 4, 4, 17, 13, 11, 4, 6, 6, 3,
    3, 12, 10, 13, 3, 3, 0, 11, 8, 11, 6, 0, 0, 6, 0, 3,
    16, 11, 33, 0, 31, 8, 12, 9, 15, 9, 26, 8, 0, 0, 0, 17,
    1, 17, 27, 21, 1, 0, 12, 26, 14, 26, 4, 27, 14, 19, 19, 19,
    26, 18, 16, 22, 19, 16, 18, 20, 58, 25, 0, 27, 48, 9, 27, 0,
    9, 25, 26, 27, 27, 0, 48, 7, 7, 7, 0, 21, 0, 34, 21, 4,
    9, 4, 6, 17, 17, 4, 36, 13, 21, 31, 31, 1, 1, 31, 1, 1,
    21, 1, 1, 21, 30, 21, 25, 30, 1, 9, 11, 21, 20, 1, 1, 42,
    2, 2, 30, 1, 14, 1, 14, 2, 14, 8, 8, 8, 8, 23, 5, 5,
    8, 1, 1, 1, 18, 1, 10, 0, 0, 6, 41, 40, 40, 37, 0, 0,
    0, 0, 21, 11, 7, 7, 6, 6, 22, 0, 3, 8, 6, 0, 1, 1,
    5, 10, 5, 1, 6, 6, 6, 6, 6, 6, 5, 5, 8, 8, 5, 14,
    29, 10, 24, 8, 49, 24, 65, 25, 8, 22, 10, 5, 30, 25, 25, 25,
    8, 21, 25, 1, 1, 11, 10, 15, 27, 0, 0, 15, 15, 0, 0, 15,
    15, 0, 15, 0, 1, 9, 5, 5, 17, 5, 5, 9, 1, 1, 2, 13,
    6, 8, 11, 39, 6, 6, 6, 11, 6, 18, 16, 6, 6, 8, 8, 8,
    6, 6, 11, 6, 6, 4, 4, 6, 6, 4, 17, 4, 10, 6, 6, 21,
    22, 6, 26, 27, 13, 6, 6, 6, 40, 34, 27, 34, 13, 13, 26, 6,
    39, 13, 25, 13, 0, 0, 21, 0, 0, 13, 4, 10, 6, 9, 8, 8,
    17, 0, 22, 3, 10, 25, 48, 36, 53, 9, 22, 3, 17, 2, 2, 8,
    39, 2, 22, 32, 7, 9, 9, 28, 7, 7, 52, 1, 6, 6, 18, 25,
    43, 31, 5, 15, 4, 16, 19, 33, 30, 30, 9, 4, 9, 30, 16, 4,
    9, 4, 71, 71, 10, 10, 25, 46, 25, 46, 27, 38, 10, 1, 1, 1,
    25, 30, 46, 10, 7, 7, 23, 34, 8, 71, 22, 31, 8, 12, 12, 8,
    22, 18, 8, 12, 8, 8, 8, 12, 12, 34, 8, 8, 7, 18, 14, 1,
    14, 18, 21, 14, 12, 12, 22, 30, 12, 23, 3, 0, 0, 3, 8, 25,
    9, 41, 5, 33, 4, 4, 12, 4, 4, 23, 21, 36, 12, 4, 0, 4,
    29, 25, 24, 1, 1, 39, 36, 1, 40, 43, 0, 18, 6, 39, 0, 0,
    23, 6, 36, 27, 22, 20, 5, 13, 41, 25, 5, 20, 13, 22, 26, 0,
    36, 54, 13, 26, 36, 17, 11, 26, 26, 8, 3, 18, 3, 4, 24, 4,
    4, 0, 9, 16, 0, 0, 4, 4, 27, 15, 13, 4, 4, 21, 4, 9,
    4, 4, 29, 15, 7, 12, 23, 7, 39, 13, 1, 4, 1, 1, 14, 10,
    1, 5, 1, 59, 136, 24, 8, 17, 7, 8, 13, 37, 9, 9, 9, 35,
    1, 13, 3, 13, 25, 3, 9, 3, 9, 3, 14, 43, 13, 25, 3, 13,
    13, 13, 4, 23, 4, 14, 1, 1, 4, 8, 33, 5, 5, 33, 21, 21,
    30, 2, 2, 22, 30, 78, 1, 2, 53, 1, 28, 6, 13, 29, 49, 6,
    13, 6, 16, 29, 12, 24, 29, 53, 28, 1, 16, 26, 16, 16, 15, 28,
    1, 1, 29, 24, 36, 23, 4, 36, 22, 10, 62, 10, 4, 10, 10, 63,
    7, 54, 7, 7, 4, 4, 10, 4, 23, 66, 10, 4, 46, 0, 16, 23,
    10, 22, 7, 22, 7, 7, 24, 24, 30, 4, 24, 4, 4, 49, 23, 5,
    5, 5, 27, 39, 45, 41, 5, 27, 5, 27, 16, 23, 39, 5, 125, 2,
    11, 0, 13, 13, 2, 62, 4, 4, 26, 4, 2, 19, 23, 45, 43, 43,
    50, 23, 23, 23, 23, 23, 36, 23, 44, 36, 23, 2, 15, 31, 1, 1,
    1, 1, 22, 22, 11, 15, 11, 11, 11, 29, 4, 11, 13, 11, 27, 76,
    27, 11, 53, 11, 44, 37, 16, 16, 11, 15, 3, 2, 11, 11, 5, 11,
    18, 21, 18, 26, 21, 8, 26, 8, 18, 18, 77, 8, 58, 8, 26, 73,
    8, 8, 26, 26, 21, 57, 21, 15, 9, 9, 14, 9, 10, 10, 8, 2,
    2, 8, 39, 107, 4, 18, 30, 4, 13, 12, 41, 91, 13, 3, 8, 22,
    9, 8, 8, 9, 9, 26, 24, 8, 9, 22, 45, 24, 11, 17, 8, 29,
    0, 0, 6, 32, 41, 29, 7, 7, 37, 54, 49, 8, 37, 8, 7, 26,
    13, 7, 29, 29, 13, 18, 1, 10, 5, 0, 0, 0, 0, 8, 5, 11,
    8, 8, 0, 20, 11, 21, 18, 8, 8, 6, 1, 1, 19, 33, 30, 1,
    4, 4, 27, 17, 4, 4, 7, 13, 4, 7, 13, 13, 4, 4, 8, 15,
    27, 8, 3, 7, 82, 3, 36, 7, 4, 69, 16, 8, 4, 16, 27, 4,
    4, 9, 4, 25, 46, 10, 6, 25, 15, 15, 25, 6, 5, 22, 25, 23,
    25, 5, 7, 2, 7, 2, 14, 9, 9, 53, 12, 17, 9, 14, 14, 12,
    65, 31, 9, 12, 9, 65, 31, 81, 12, 39, 9, 17, 9, 12, 9, 31,
    4, 9, 6, 9, 4, 15, 4, 20, 9, 10, 4, 4, 10, 4, 4, 15,
    41, 6, 40, 3, 3, 13, 3, 4, 11, 3, 11, 4, 42, 42, 42, 26,
    8, 8, 8, 26, 2, 27, 7, 13, 26, 0, 0, 8, 24, 4, 21, 36,
    9, 25, 9, 23, 10, 23, 12, 27, 11, 44, 11, 12, 27, 11, 12, 61,
    11, 23, 23, 11, 31, 12, 12, 35, 15, 11, 31, 11, 9, 9, 23, 37,
    9, 50, 30, 9, 9, 9, 11, 9, 8, 8, 0, 0, 0, 42, 12, 0,
    0, 22, 5, 5, 0, 4, 4, 22, 0, 35, 43, 17, 5, 17, 4, 4,
    6, 40, 13, 11, 69, 11, 11, 11, 11, 18, 7, 11, 7, 13, 13, 83,
    12, 4, 31, 4, 4, 4, 18, 4, 28, 4, 12, 12, 0, 0, 0, 15,
    5, 4, 0, 0, 8, 4, 9, 27, 0, 1, 1, 19, 6, 21, 6, 21,
    16, 6, 16, 21, 39, 25, 25, 13, 13, 15, 4, 12, 4, 16, 9, 9,
    25, 9, 30, 30, 9, 45, 8, 0, 8, 0, 8, 4, 4, 0, 0, 4,
    49, 7, 25, 25, 49, 30, 7, 25, 50, 34, 34, 25, 6, 6, 67, 13,
    33, 13, 53, 30, 70, 1, 76, 1, 115, 30, 30, 30, 70, 1, 15, 10,
    17, 3, 26, 26, 82, 3, 8, 3, 12, 3, 13, 4, 4, 4, 4, 5,
    0, 0, 16, 13, 13, 13, 18, 22, 6, 6, 163, 18, 21, 21, 18, 21,
    18, 193, 27, 39, 14, 26, 53, 14, 11, 26, 29, 29, 14, 11, 9, 8,
    61, 8, 9, 8, 10, 9, 39, 30, 8, 24, 55, 24, 34, 11, 66, 11,
    30, 29, 19, 25, 77, 7, 6, 5, 37, 5, 21, 46, 5, 5, 13, 5,
    21, 5, 23, 5, 21, 13, 6, 24, 4, 6, 36, 4, 6, 9, 4, 4,
    6, 4, 24, 9, 38, 8, 20, 5, 0, 3, 12, 0, 0, 0, 25, 16,
    12, 8, 4, 8, 8, 8, 14, 11, 16, 7, 14, 7, 25, 4, 4, 4,
    10, 15, 10, 10, 13, 13, 10, 13, 15, 10, 28, 15, 26, 13, 13, 13,
    33, 15, 70, 70, 19, 7, 11, 11, 11, 11, 20, 17, 21, 5, 20, 20,
    5, 5, 0, 5, 0, 0, 10, 27, 10, 13, 8, 5, 24, 30, 73, 30,
    24, 30, 47, 62, 29, 5, 23, 29, 27, 5, 39, 50, 29, 23, 152, 11,
    38, 39, 11, 25, 67, 11, 54, 11, 32, 11, 33, 23, 23, 47, 10, 11,
    11, 10, 11, 10, 33, 33, 10, 11, 7, 3, 3, 6, 13, 4, 27, 13,
    50, 13, 27, 0, 21, 0, 21, 25, 2, 11, 10, 30, 10, 30, 19, 30,
    35, 2, 2, 19, 10, 33, 10, 13, 24, 24, 30, 2, 30, 13, 19, 24,
    2, 13, 19, 13, 13, 2, 1, 21, 7, 10, 7, 15, 21, 10, 10, 7,
    10, 7, 12, 67, 34, 13, 67, 10, 90, 67, 36, 3, 3, 36, 11, 9,
    9, 47, 11, 22, 11, 45, 22, 11, 11, 22, 7, 47, 22, 9, 21, 35,
    21, 21, 24, 24, 14, 5, 19, 19, 22, 19, 22, 19, 5, 5, 64, 29,
    19, 19, 14, 8, 13, 120, 25, 55, 60, 64, 72, 33, 50, 50, 55, 33,
    33, 64, 53, 64, 5, 10, 15, 10, 58, 9, 9, 44, 21, 56, 94, 37,
    37, 47, 53, 102, 37, 53, 37, 98, 19, 47, 19, 19, 53, 47, 37, 91,
    47, 53, 20, 9, 103, 9, 33, 20, 9, 9, 33, 13, 71, 46, 27, 6,
    10, 6, 6, 10, 6, 27, 10, 10, 11, 12, 16, 16, 9, 75, 9, 9,
    16, 16, 9, 78, 9, 16, 16, 15, 75, 16, 33, 60, 16, 76, 9, 16,
    16, 33, 81, 146, 27, 17, 9, 9, 87, 35, 4, 4, 6, 52, 6, 21,
    21, 21, 52, 4, 4, 21, 31, 31, 6, 6, 9, 49, 4, 4, 4, 53,
    12, 25, 8, 9, 50, 9, 12, 8, 41, 12, 25, 9, 13, 67, 90, 26,
    84, 23, 5, 5, 6, 24, 24, 24, 34, 34, 13, 13, 22, 14, 7, 7,
    11, 25, 14, 35, 21, 22, 21, 13, 21, 93, 63, 124, 13, 13, 13, 13,
    21, 71, 63, 13, 103, 21, 30, 21, 19, 13, 13, 36, 11, 7, 30, 30,
    9, 9, 39, 11, 4, 1, 1, 15, 13, 1, 1, 1, 4, 4, 1, 27,
    77, 61, 44, 51, 51, 44, 44, 6, 6, 62, 61, 61, 27, 61, 6, 6,
    61, 51, 6, 61, 27, 27, 44, 6, 27, 20, 27, 65, 67, 30, 21, 4,
    6, 4, 11, 4, 14, 13, 2, 1, 21, 1, 27, 27, 81, 26, 1, 30,
    11, 7, 1, 10, 22, 57, 11, 11, 4, 10, 49, 57, 2, 17, 22, 9,
    67, 70, 0, 22, 0, 0, 22, 9, 9, 0, 51, 67, 49, 7, 25, 7,
    45, 45, 7, 57, 7, 7, 0, 0, 53, 3, 22, 41, 6, 6, 6, 30,
    3, 3, 22, 39, 14, 3, 6, 49, 7, 34, 9, 7, 9, 9, 7, 9,
    13, 9, 15, 9, 13, 30, 15, 9, 7, 22, 17, 9, 9, 15, 9, 22,
    33, 33, 33, 44, 30, 123, 30, 18, 5, 45, 18, 18, 18, 18, 11, 33,
    11, 11, 120, 80, 45, 45, 39, 35, 39, 35, 142, 39, 19, 45, 39, 35,
    35, 49, 35, 33, 8, 70, 33, 11, 70, 10, 8, 10, 9, 10, 23, 17,
    17, 5, 20, 2, 6, 70, 30, 2, 2, 4, 7, 90, 7, 52, 4, 4,
    42, 99, 4, 42, 137, 7, 4, 4, 4, 7, 7, 80, 42, 42, 33, 33,
    33, 10, 10, 58, 10, 32, 47, 32, 36, 32, 38, 36, 32, 123, 32, 38,
    32, 11, 31, 15, 25, 11, 11, 6, 36, 36, 12, 6, 21, 6, 21, 36,
    12, 6, 26, 73, 10, 10, 10, 11, 77, 9, 11, 11, 9, 57, 21, 10,
    46, 18, 18, 10, 14, 36, 8, 30, 8, 30, 36, 8, 49, 8, 53, 11,
    11, 69, 70, 69, 121, 29, 29, 70, 103, 45, 29, 46, 70, 165, 35, 34,
    1, 1, 34, 35, 1, 25, 35, 63, 17, 133, 4, 30, 95, 4, 35, 74,
    4, 9, 9, 18, 20, 18, 27, 20, 1, 20, 18, 54, 123, 1, 27, 1,
    1, 1, 23, 51, 27, 1, 4, 17, 17, 26, 54, 21, 31, 16, 66, 35,
    21, 8, 125, 12, 8, 8, 8, 8, 8, 5, 5, 18, 15, 24, 41, 11,
    42, 42, 57, 39, 39, 8, 8, 27, 8, 8, 21, 27, 52, 71, 41, 70,
    27, 8, 8, 27, 23, 21, 21, 138, 120, 18, 66, 1, 18, 1, 1, 36,
    18, 22, 22, 114, 49, 72, 22, 18, 6, 22, 13, 33, 18, 33, 95, 33,
    6, 6, 22, 6, 95, 33, 41, 47, 41, 23, 18, 99, 25, 22, 0, 36,
    4, 31, 4, 4, 4, 4, 4, 8, 8, 8, 22, 22, 8, 22, 24, 8,
    8, 13, 52, 13, 13, 52, 29, 29, 97, 11, 11, 34, 30, 30, 11, 14,
    32, 14, 32, 30, 32, 25, 25, 21, 21, 63, 21, 25, 135, 63, 26, 26,
    21, 25, 21, 45, 45, 41, 25, 41, 25, 41, 26, 17, 17, 9, 17, 71,
    57, 8, 10, 4, 30, 4, 4, 2, 9, 32, 4, 2, 9, 9, 4, 46,
    45, 9, 8, 9, 45, 13, 4, 152, 4, 9, 45, 35, 88, 6, 20, 11,
    67, 9, 11, 9, 9, 13, 4, 6, 33, 6, 6, 4, 6, 30, 30, 4,
    6, 13, 6, 13, 4, 13, 13, 29, 136, 39, 5, 6, 30, 148, 145, 30,
    30, 39, 6, 8, 30, 8, 8, 8, 8, 8, 57, 8, 22, 8, 17, 17,
    30, 4, 108, 11, 60, 24, 15, 37, 63, 13, 13, 6, 6, 6, 6, 6,
    14, 41, 26, 64, 86, 44, 41, 36, 6, 44, 41, 26, 36, 36, 26, 49,
    49, 36, 41, 13, 52, 30, 41, 27, 6, 21, 6, 34, 60, 34, 34, 34,
    54, 93, 93, 84, 60, 34, 10, 74, 54, 10, 14, 34, 34, 29, 27, 95,
    12, 7, 5, 150, 20, 20, 20, 26, 52, 101, 99, 93, 6, 6, 6, 11,
    6, 57, 11, 4, 4, 71, 55, 23, 52, 23, 49, 49, 77, 36, 23, 30,
    131, 1, 1, 1, 12, 4, 23, 4, 5, 4, 17, 17, 4, 5, 136, 144,
    23, 71, 41, 4, 5, 5, 4, 17, 17, 30, 30, 13, 30, 30, 30, 102,
    68, 15, 15, 219, 30, 68, 35, 30, 68, 15, 35, 136, 76, 46, 70, 46,
    103, 123, 46, 6, 123, 46, 22, 4, 33, 34, 76, 176, 34, 35, 36, 88,
    28, 132, 164, 15, 65, 13, 15, 13, 62, 33, 23, 39, 35, 63, 8, 35,
    8, 6, 71, 6, 6, 53, 7, 7, 7, 22, 0, 0, 6, 7, 53, 6,
    22, 0, 22, 7, 30, 0, 6, 147, 18, 6, 64, 63, 146, 96, 39, 27,
    58, 7, 27, 27, 58, 62, 7, 7, 27, 7, 7, 7, 27, 101, 26, 46,
    7, 15, 7, 34, 59, 4, 0, 4, 19, 11, 47, 0, 4, 0, 21, 28,
    11, 122, 33, 43, 47, 43, 34, 23, 34, 35, 112, 35, 14, 58, 14, 14,
    71, 71, 14, 86, 13, 35, 0, 0, 6, 0, 0, 50, 83, 0, 0, 0,
    0, 6, 0, 6, 35, 29, 31, 16, 96, 16, 22, 6, 54, 6, 15, 6,
    15, 2, 6, 31, 8, 39, 2, 31, 42, 6, 39, 6, 8, 33, 32, 45,
    82, 8, 45, 72, 8, 106, 106, 45, 45, 45, 72, 8, 45, 72, 77, 8,
    77, 33, 22, 22, 64, 22, 34, 71, 22, 22, 34, 33, 34, 22, 33, 22,
    64, 33, 33, 39, 22, 33, 34, 22, 22, 72, 21, 26, 26, 13, 13, 26,
    13, 13, 13, 0, 0, 0, 29, 4, 22, 38, 53, 62, 15, 8, 18, 13,
    13, 8, 13, 41, 98, 11, 11, 7, 6, 10, 6, 57, 7, 6, 7, 35,
    52, 30, 30, 50, 12, 91, 60, 12, 63, 49, 60, 63, 12, 25, 25, 8,
    79, 103, 79, 0, 21, 19, 19, 93, 47, 35, 148, 19, 310, 47, 35, 7,
    64, 144, 17, 71, 17, 85, 43, 13, 17, 17, 31, 59, 55, 13, 60, 19,
    13, 6, 22, 6, 6, 22, 6, 6, 22, 41, 12, 12, 41, 12, 12, 12,
    41, 41, 41, 94, 83, 12, 12, 12, 41, 82, 41, 41, 94, 60, 12, 60,
    136, 111, 114, 77, 41, 136, 41, 8, 8, 5, 3, 64, 10, 8, 28, 5,
    3, 64, 64, 7, 58, 1, 61, 18, 7, 58, 60, 1, 7, 3, 13, 6,
    3, 3, 41, 6, 13, 7, 4, 4, 25, 19, 7, 46, 27, 15, 46, 52,
    94, 52, 52, 25, 52, 126, 4, 4, 10, 159, 62, 62, 123, 123, 142, 4,
    4, 156, 62, 25, 123, 4, 123, 7, 5, 7, 38, 5, 52, 41, 6, 6,
    61, 6, 6, 27, 6, 31, 27, 31, 27, 170, 37, 10, 17, 17, 91, 10,
    71, 37, 10, 127, 46, 20, 20, 11, 31, 11, 2, 11, 11, 11, 31, 2,
    2, 22, 34, 2, 11, 2, 2, 11, 2, 44, 44, 68, 47, 36, 47, 10,
    10, 1, 62, 34, 6, 114, 10, 13, 1, 1, 1, 184, 29, 8, 10, 41,
    41, 8, 8, 64, 10, 151, 8, 69, 8, 64, 10, 10, 41, 8, 69, 37,
    19, 231, 227, 13, 89, 9, 185, 155, 9, 230, 13, 99, 153, 60, 22, 42,
    60, 85, 60, 22, 22, 60, 29, 3, 267, 22, 0, 3, 3, 22, 9, 6,
    4, 21, 21, 3, 60, 4, 19, 42, 4, 11, 23, 13, 11, 11, 11, 30,
    128, 31, 11, 30, 35, 55, 30, 31, 11, 11, 35, 35, 31, 78, 11, 23,
    35, 8, 8, 13, 13, 68, 91, 91, 15, 12, 45, 17, 88, 17, 62, 66,
    17, 17, 17, 44, 41, 17, 62, 58, 36, 17, 17, 184, 55, 4, 4, 39,
    14, 4, 36, 13, 13, 23, 59, 8, 13, 25, 64, 64, 25, 104, 64, 109,
    14, 32, 32, 32, 32, 64, 32, 14, 232, 64, 106, 32, 75, 123, 75, 19,
    14, 130, 22, 67, 7, 89, 127, 7, 67, 130, 7, 22, 22, 7, 40, 40,
    22, 25, 67, 4, 22, 4, 9, 8, 8, 21, 21, 9, 8, 34, 34, 0,
    51, 50, 0, 33, 82, 60, 30, 33, 33, 33, 55, 4, 54, 36, 36, 36,
    4, 4, 82, 201, 95, 185, 37, 14, 37, 67, 17, 10, 34, 10, 15, 4,
    15, 15, 4, 10, 10, 10, 81, 35, 91, 24, 24, 24, 79, 173, 230, 91,
    79, 35, 35, 13, 34, 34, 6, 13, 30, 6, 6, 13, 54, 55, 55, 6,
    30, 6, 30, 6, 13, 34, 47, 13, 68, 68, 183, 12, 68, 68, 6, 68,
    91, 104, 31, 6, 18, 18, 18, 18, 18, 32, 47, 55, 6, 18, 6, 56,
    32, 6, 32, 4, 0, 137, 12, 0, 25, 9, 0, 86, 15, 29, 15, 63,
    15, 29, 15, 0, 0, 0, 99, 15, 56, 19, 136, 15, 29, 38, 63, 15,
    34, 34, 29, 31, 30, 30, 31, 4, 34, 45, 45, 33, 35, 22, 124, 34,
    66, 4, 66, 12, 12, 19, 17, 19, 3, 17, 3, 164, 3, 86, 3, 19,
    17, 41, 67, 72, 50, 5, 122, 4, 4, 63, 12, 41, 41, 4, 5, 22,
    63, 4, 81, 54, 91, 146, 53, 54, 41, 41, 23, 96, 23, 67, 41, 23,
    67, 67, 53, 41, 53, 91, 54, 53, 54, 53, 41, 96, 41, 54, 53, 53,
    41, 185, 138, 32, 32, 25, 206, 69, 32, 32, 25, 30, 13, 33, 30, 55,
    39, 3, 121, 13, 127, 3, 16, 4, 4, 13, 29, 16, 3, 41, 23, 29,
    6, 6, 72, 23, 6, 23, 56, 56, 23, 29, 41, 13, 71, 36, 91, 14,
    14, 19, 12, 6, 12, 6, 19, 36, 12, 34, 6, 42, 188, 55, 71, 42,
    55, 71, 42, 76, 76, 129, 55, 33, 5, 93, 58, 93, 21, 7, 7, 88,
    62, 4, 61, 21, 58, 54, 11, 21, 54, 10, 21, 30, 30, 158, 41, 71,
    41, 102, 273, 104, 59, 102, 104, 104, 204, 102, 102, 19, 55, 68, 39, 104,
    68, 7, 7, 21, 29, 59, 7, 21, 7, 21, 21, 7, 29, 7, 7, 41,
    21, 43, 21, 41, 140, 4, 11, 4, 4, 4, 62, 29, 29, 51, 36, 33,
    33, 48, 48, 109, 33, 21, 50, 1, 98, 42, 85, 85, 1, 36, 36, 95,
    95, 30, 30, 17, 86, 86, 22, 25, 124, 32, 95, 64, 25, 22, 25, 110,
    64, 22, 22, 132, 35, 52, 124, 35, 52, 52, 53, 83, 67, 22, 83, 3,
    7, 41, 13, 3, 13, 7, 13, 147, 79, 14, 14, 25, 37, 79, 14, 37,
    10, 14, 37, 10, 14, 14, 79, 30, 126, 126, 29, 30, 16, 162, 30, 30,
    155, 63, 63, 20, 72, 6, 72, 39, 6, 132, 72, 20, 63, 30, 103, 72,
    63, 72, 46, 46, 67, 94, 12, 41, 6, 50, 6, 53, 53, 4, 21, 11,
    11, 39, 44, 39, 18, 18, 39, 123, 18, 39, 123, 49, 39, 18, 44, 123,
    152, 61, 123, 18, 44, 18, 18, 129, 39, 39, 44, 49, 39, 54, 14, 14,
    103, 14, 14, 70, 2, 8, 8, 7, 2, 245, 70, 7, 2, 7, 2, 7,
    79, 14, 180, 104, 104, 151, 14, 7, 13, 13, 36, 38, 7, 7, 7, 38,
    7, 70, 83, 58, 58, 175, 58, 129, 142, 151, 66, 83, 215, 83, 49, 91,
    83, 49, 91, 49, 83, 2, 46, 2, 99, 175, 285, 35, 46, 95, 46, 46,
    35, 2, 35, 35, 35, 46, 2, 2, 43, 2, 67, 15, 15, 39, 23, 33,
    33, 105, 34, 39, 159, 71, 71, 34, 21, 21, 21, 34, 21, 41, 39, 145,
    34, 39, 125, 80, 71, 34, 80, 39, 34, 35, 4, 148, 104, 4, 51, 104,
    35, 51, 104, 51, 35, 46, 83, 132, 83, 233, 70, 14, 22, 122, 103, 129,
    129, 270, 129, 23, 122, 129, 129, 23, 23, 129, 23, 187, 103, 5, 94, 41,
    76, 5, 41, 185, 66, 71, 69, 71, 66, 72, 72, 72, 96, 72, 35, 96,
    158, 72, 266, 96, 35, 35, 128, 9, 9, 58, 19, 30, 30, 9, 58, 9,
    58, 46, 12, 106, 16, 63, 12, 25, 46, 16, 132, 16, 12, 63, 46, 39,
    39, 29, 61, 35, 35, 66, 42, 30, 66, 6, 6, 30, 6, 6, 35, 42,
    30, 72, 6, 17, 17, 35, 17, 17, 230, 6, 104, 6, 6, 6, 17, 17,
    6, 15, 12, 63, 36, 264, 4, 29, 29, 129, 120, 33, 26, 259, 1, 6,
    101, 1, 1, 21, 67, 71, 71, 71, 21, 86, 106, 15, 22, 15, 39, 22,
    25, 76, 14, 160, 91, 41, 41, 173, 62, 10, 62, 62, 62, 10, 88, 62,
    10, 62, 10, 53, 13, 13, 66, 82, 13, 9, 15, 130, 6, 106, 21, 49,
    49, 180, 49, 49, 103, 102, 77, 102, 23, 77, 77, 102, 102, 187, 23, 251,
    303, 23, 265, 251, 102, 23, 58, 23, 251, 77, 102, 9, 60, 33, 33, 233,
    33, 5, 13, 49, 5, 9, 5, 5, 13, 27, 13, 13, 13, 9, 27, 13,
    5, 9, 13, 48, 127, 23, 12, 19, 189, 51, 6, 22, 22, 6, 47, 51,
    6, 20, 47, 22, 51, 13, 5, 58, 21, 58, 34, 21, 34, 5, 30, 148,
    38, 124, 205, 17, 50, 50, 36, 71, 50, 50, 36, 101, 50, 71, 17, 50,
    36, 36, 36, 36, 36, 50, 71, 71, 205, 73, 71, 78, 230, 78, 143, 88,
    50, 163, 39, 163, 4, 18, 36, 50, 30, 41, 30, 73, 27, 73, 27, 130,
    6, 6, 90, 41, 6, 41, 7, 121, 7, 7, 18, 7, 81, 4, 95, 0,
    0, 4, 95, 94, 94, 30, 94, 4, 94, 4, 95, 175, 105, 4, 94, 94,
    105, 224, 94, 94, 94, 94, 4, 102, 335, 94, 4, 21, 4, 10, 10, 101,
    101, 10, 105, 82, 10, 4, 4, 82, 10, 154, 4, 105, 4, 88, 30, 94,
    159, 14, 180, 94, 180, 178, 68, 27, 30, 4, 4, 41, 64, 53, 53, 21,
    79, 24, 24, 5, 23, 14, 5, 14, 24, 23, 33, 219, 5, 5, 76, 137,
    76, 299, 354, 137, 157, 95, 76, 265, 137, 19, 19, 123, 74, 165, 64, 37,
    21, 73, 73, 93, 110, 107, 22, 10, 103, 133, 110, 16, 27, 35, 16, 162,
    70, 166, 16, 70, 16, 8, 11, 36, 66, 8, 66, 70, 50, 99, 50, 104,
    50, 70, 136, 151, 104, 104, 50, 50, 98, 50, 151, 99, 70, 34, 34, 4,
    4, 60, 4, 6, 6, 22, 175, 0, 96, 22, 0, 82, 117, 114, 82, 82,
    21, 114, 82, 364, 21, 45, 21, 121, 117, 82, 21, 45, 114, 21, 45, 117,
    45, 117, 21, 21, 45, 45, 206, 45, 30, 81, 145, 55, 160, 55, 125, 125,
    125, 45, 36, 36, 36, 45, 173, 55, 11, 55, 55, 64, 104, 22, 3, 22,
    3, 18, 41, 18, 88, 164, 70, 21, 21, 184, 184, 220, 21, 21, 160, 30,
    189, 74, 55, 281, 194, 34, 34, 14, 34, 11, 11, 14, 11, 11, 11, 77,
    77, 193, 10, 112, 100, 26, 79, 29, 79, 83, 54, 22, 62, 14, 6, 38,
    48, 38, 6, 49, 49, 49, 49, 81, 81, 36, 100, 81, 36, 67, 4, 67,
    179, 291, 67, 128, 128, 132, 128, 172, 180, 29, 29, 62, 268, 82, 184, 62,
    62, 82, 142, 150, 142, 62, 62, 22, 142, 22, 82, 178, 55, 55, 300, 11,
    55, 201, 93, 211, 201, 236, 159, 7, 236, 93, 312, 93, 211, 7, 153, 93,
    93, 153, 211, 153, 211, 83, 76, 83, 13, 98, 121, 4, 212, 34, 34, 104,
    104, 34, 34, 104, 98, 9, 69, 69, 9, 36, 69, 69, 9, 36, 105, 112,
    128, 9, 105, 51, 288, 41, 51, 41, 51, 56, 51, 289, 56, 51, 56, 104,
    51, 104, 51, 51, 111, 51, 51, 218, 69, 104, 104, 265, 56, 53, 53, 99,
    94, 86, 18, 49, 25, 94, 73, 18, 49, 18, 130, 49, 18, 49, 49, 25,
    316, 73, 18, 9, 36, 9, 36, 150, 235, 4, 95, 66, 66, 4, 388, 4,
    4, 4, 66, 4, 4, 104, 127, 4, 66, 30, 30, 90, 22, 22, 98, 22,
    22, 51, 56, 77, 51, 56, 70, 39, 39, 22, 22, 129, 129, 123, 126, 123,
    36, 42, 93, 136, 42, 36, 93, 36, 42, 14, 42, 14, 14, 36, 14, 218,
    58, 42, 42, 42, 48, 66, 150, 264, 150, 66, 93, 96, 102, 32, 102, 6,
    257, 32, 50, 6, 32, 175, 55, 18, 6, 41, 258, 18, 239, 18, 6, 6,
    150, 57, 96, 221, 286, 57, 51, 57, 123, 204, 462, 165, 96, 103, 47, 23,
    47, 30, 23, 103, 420, 27, 29, 516, 160, 103, 264, 27, 29, 29, 160, 250,
    21, 10, 10, 307, 10, 54, 265, 54, 10, 51, 307, 103, 103, 103, 135, 104,
    103, 103, 103, 7, 7, 123, 123, 29, 7, 62, 29, 112, 29, 310, 29, 128,
    13, 7, 7, 363, 144, 22, 22, 105, 13, 11, 47, 100, 11, 220, 220, 11,
    54, 7, 299, 7, 47, 70, 7, 220, 220, 47, 7, 220, 11, 11, 11, 54,
    100, 84, 364, 165, 77, 135, 93, 17, 22, 23, 22, 99, 22, 68, 23, 201,
    50, 21, 21, 93, 113, 71, 71, 93, 150, 13, 57, 13, 13, 13, 55, 13,
    13, 17, 60, 160, 60, 47, 47, 93, 17, 160, 17, 17, 232, 245, 93, 17,
    7, 6, 60, 5, 15, 15, 15, 78, 41, 5, 5, 5, 41, 8, 46, 115,
    8, 46, 46, 47, 47, 103, 103, 391, 220, 128, 177, 22, 39, 642, 99, 22,
    106, 172, 111, 39, 70, 85, 39, 39, 204, 39, 85, 66, 66, 66, 107, 76,
    107, 54, 54, 6, 30, 13, 6, 6, 6, 102, 13, 6, 53, 72, 29, 54,
    4, 4, 29, 52, 21, 21, 52, 21, 61, 11, 25, 52, 81, 25, 11, 46,
    100, 92, 42, 18, 46, 159, 18, 114, 55, 27, 16, 27, 72, 4, 64, 6,
    64, 6, 6, 17, 4, 81, 114, 21, 173, 21, 70, 241, 21, 21, 7, 23,
    23, 201, 100, 17, 58, 61, 23, 184, 6, 61, 23, 10, 122, 5, 6, 6,
    10, 68, 11, 68, 53, 145, 4, 11, 4, 4, 4, 29, 368, 29, 93, 129,
    93, 29, 172, 105, 128, 235, 93, 105, 105, 251, 311, 488, 105, 128, 105, 105,
    251, 95, 175, 128, 407, 105, 175, 95, 95, 251, 175, 21, 74, 218, 74, 218,
    235, 6, 159, 64, 35, 124, 124, 13, 195, 67, 6, 67, 6, 13, 6, 67,
    35, 13, 67, 35, 406, 236, 67, 64, 99, 99, 158, 305, 31, 23, 31, 23,
    31, 234, 161, 99, 99, 146, 305, 481, 110, 99, 55, 55, 211, 55, 6, 36,
    23, 68, 6, 85, 91, 36, 99, 22, 30, 22, 70, 55, 161, 30, 30, 30,
    364, 197, 197, 57, 197, 197, 197, 225, 57, 225, 240, 197, 350, 57, 225, 225,
    197, 225, 350, 461, 225, 57, 364, 325, 23, 363, 23, 114, 350, 114, 55, 7,
    7, 263, 83, 234, 122, 7, 106, 67, 16, 67, 67, 106, 121, 32, 32, 32,
    121, 108, 16, 32, 16, 121, 32, 103, 10, 51, 21, 21, 24, 69, 237, 50,
    50, 73, 73, 50, 128, 73, 139, 284, 172, 99, 327, 172, 334, 172, 69, 58,
    133, 457, 41, 39, 270, 41, 29, 101, 29, 29, 2, 2, 2, 53, 75, 62,
    62, 221, 53, 388, 42, 42, 53, 62, 75, 221, 627, 53, 13, 165, 114, 93,
    134, 13, 364, 93, 89, 105, 137, 216, 89, 137, 89, 89, 145, 89, 22, 145,
    24, 36, 389, 17, 159, 24, 36, 24, 17, 17, 107, 334, 21, 24, 21, 17,
    36, 194, 211, 230, 242, 211, 194, 325, 80, 230, 194, 80, 211, 325, 80, 194,
    67, 143, 129, 314, 129, 128, 34, 9, 130, 130, 57, 135, 128, 250, 67, 128,
    143, 67, 57, 57, 201, 156, 159, 27, 57, 124, 166, 138, 166, 138, 138, 232,
    268, 230, 166, 230, 184, 124, 32, 32, 67, 32, 73, 32, 21, 30, 21, 30,
    36, 159, 8, 49, 6, 8, 6, 8, 129, 177, 29, 88, 177, 292, 129, 129,
    70, 70, 101, 166, 123, 289, 286, 166, 289, 290, 286, 101, 230, 166, 166, 123,
    60, 295, 60, 313, 133, 189, 258, 189, 133, 7, 281, 7, 7, 120, 123, 120,
    7, 120, 7, 7, 99, 70, 479, 99, 70, 70, 21, 21, 21, 138, 152, 93,
    230, 93, 138, 70, 414, 35, 30, 30, 327, 36, 175, 414, 175, 175, 414, 35,
    36, 36, 183, 328, 298, 175, 183, 179, 179, 175, 183, 183, 34, 21, 66, 21,
    257, 83, 34, 34, 35, 35, 34, 35, 36, 36, 21, 21, 21, 21, 21, 83,
    21, 15, 19, 15, 32, 23, 42, 122, 34, 239, 64, 130, 102, 19, 164, 64,
    164, 64, 172, 13, 13, 13, 121, 103, 138, 13, 121, 13, 55, 13, 13, 103,
    13, 175, 159, 50, 31, 31, 67, 31, 39, 39, 21, 39, 168, 39, 243, 129,
    123, 36, 175, 66, 36, 81, 42, 36, 36, 165, 42, 42, 135, 57, 57, 178,
    178, 71, 57, 71, 135, 57, 57, 135, 135, 277, 248, 71, 8, 9, 8, 8,
    8, 8, 102, 46, 103, 162, 83, 128, 83, 173, 36, 219, 86, 199, 67, 26,
    67, 73, 73, 26, 272, 26, 73, 22, 22, 272, 35, 67, 22, 22, 67, 22,
    35, 26, 22, 272, 26, 35, 67, 22, 67, 73, 26, 26, 231, 55, 83, 306,
    164, 83, 300, 300, 306, 164, 220, 83, 119, 55, 120, 41, 280, 120, 41, 41,
    218, 220, 218, 64, 1, 35, 10, 1, 10, 324, 151, 50, 12, 50, 53, 243,
    165, 73, 36, 36, 73, 36, 51, 87, 285, 285, 30, 327, 337, 462, 103, 103,
    64, 64, 6, 55, 133, 72, 55, 6, 323, 151, 55, 60, 498, 60, 58, 51,
    51, 135, 135, 58, 47, 11, 414, 47, 47, 47, 235, 159, 4, 173, 536, 184,
    173, 185, 4, 507, 185, 536, 184, 184, 0, 47, 41, 108, 111, 111, 39, 51,
    51, 82, 51, 82, 9, 9, 9, 39, 51, 206, 12, 124, 12, 36, 36, 170,
    70, 151, 70, 36, 12, 313, 127, 4, 13, 4, 4, 109, 13, 233, 21, 109,
    169, 169, 169, 241, 169, 550, 169, 169, 221, 221, 221, 221, 169, 241, 551, 169,
    169, 169, 221, 241, 593, 221, 163, 287, 43, 94, 165, 43, 115, 43, 6, 11,
    186, 6, 747, 314, 11, 186, 250, 250, 6, 6, 93, 93, 21, 93, 21, 103,
    13, 105, 21, 21, 21, 106, 21, 146, 106, 173, 51, 93, 21, 277, 445, 106,
    21, 21, 106, 106, 21, 93, 21, 51, 206, 8, 241, 8, 264, 252, 241, 300,
    261, 349, 60, 63, 54, 54, 239, 54, 300, 60, 60, 54, 54, 60, 54, 261,
    54, 63, 106, 50, 50, 50, 197, 106, 50, 106, 50, 224, 11, 123, 32, 32,
    11, 11, 21, 21, 47, 51, 81, 21, 51, 81, 51, 21, 47, 84, 47, 21,
    29, 29, 29, 78, 51, 71, 294, 26, 280, 299, 398, 26, 420, 222, 222, 262,
    193, 420, 222, 486, 193, 420, 34, 140, 34, 34, 140, 140, 137, 137, 125, 125,
    93, 227, 93, 93, 342, 198, 136, 136, 102, 96, 457, 96, 96, 102, 118, 112,
    67, 32, 304, 67, 112, 15, 67, 15, 118, 112, 698, 15, 15, 276, 112, 15,
    32, 118, 118, 32, 32, 276, 112, 67, 32, 112, 112, 32, 32, 262, 32, 104,
    32, 32, 32, 488, 215, 104, 32, 426, 366, 646, 55, 55, 42, 34, 432, 432,
    34, 42, 34, 336, 88, 21, 60, 21, 77, 60, 21, 21, 21, 165, 21, 71,
    29, 75, 8, 148, 148, 8, 8, 75, 324, 324, 81, 21, 21, 19, 54, 21,
    21, 194, 19, 32, 21, 32, 19, 19, 67, 19, 54, 70, 242, 40, 10, 13,
    194, 25, 10, 10, 159, 10, 76, 13, 10, 13, 64, 13, 13, 25, 13, 159,
    154, 154, 280, 187, 105, 154, 213, 387, 154, 105, 154, 154, 280, 105, 105, 105,
    280, 390, 105, 105, 390, 105, 350, 105, 328, 17, 230, 17, 420, 259, 17, 231,
    231, 231, 748, 230, 17, 17, 231, 241, 36, 7, 7, 102, 23, 21, 21, 32,
    21, 32, 127, 312, 127, 34, 34, 23, 21, 67, 127, 23, 36, 36, 194, 133,
    194, 194, 441, 36, 36, 194, 36, 36, 412, 683, 133, 133, 36, 413, 427, 74,
    427, 30, 30, 30, 287, 81, 449, 287, 398, 306, 42, 12, 767, 12, 215, 367,
    12, 12, 42, 172, 293, 287, 172, 172, 17, 330, 330, 124, 167, 194, 194, 131,
    305, 732, 1, 41, 191, 158, 191, 411, 158, 200, 295, 158, 191, 158, 142, 142,
    160, 59, 160, 55, 55, 59, 30, 30, 158, 139, 93, 172, 30, 93, 30, 139,
    149, 43, 43, 463, 43, 189, 30, 292, 537, 372, 172, 537, 321, 417, 321, 175,
    175, 329, 194, 550, 95, 2, 94, 2, 228, 236, 221, 16, 228, 363, 34, 85,
    22, 172, 252, 172, 22, 22, 22, 284, 696, 146, 41, 185, 407, 534, 37, 37,
    583, 166, 105, 424, 166, 166, 37, 37, 60, 60, 279, 188, 11, 11, 49, 94,
    11, 41, 291, 291, 145, 205, 306, 324, 280, 64, 100, 159, 68, 68, 146, 68,
    100, 368, 100, 68, 1375, 353, 22, 507, 442, 22, 13, 13, 131, 129, 129, 133,
    133, 129, 351, 49, 13, 13, 38, 38, 38, 38, 270, 38, 38, 120, 38, 38,
    38, 172, 493, 38, 42, 42, 42, 42, 32, 32, 71, 71, 220, 149, 21, 111,
    199, 401, 484, 60, 158, 342, 60, 17, 205, 91, 91, 17, 17, 60, 17, 242,
    17, 60, 183, 158, 21, 17, 68, 230, 330, 201, 294, 2, 27, 68, 2, 27,
    94, 68, 19, 128, 8, 19, 106, 8, 31, 31, 85, 34, 16, 16, 16, 16,
    173, 16, 36, 36, 1050, 364, 364, 300, 375, 179, 154, 297, 173, 375, 154, 154,
    428, 173, 179, 154, 375, 154, 122, 58, 32, 6, 64, 106, 6, 102, 106, 6,
    58, 32, 289, 86, 50, 86, 50, 88, 88, 86, 50, 50, 86, 159, 284, 209,
    60, 209, 178, 112, 95, 95, 193, 387, 55, 95, 1184, 188, 95, 480, 55, 55,
    188, 193, 55, 387, 55, 387, 373, 373, 95, 55, 95, 193, 188, 55, 673, 55,
    193, 188, 55, 55, 83, 54, 25, 484, 284, 25, 96, 8, 8, 19, 425, 8,
    74, 8, 74, 8, 19, 19, 8, 74, 19, 8, 8, 8, 19, 45, 70, 232,
    232, 194, 70, 308, 6, 112, 6, 6, 6, 6, 37, 37, 37, 67, 425, 46,
    46, 67, 206, 432, 250, 206, 47, 102, 128, 48, 48, 48, 48, 102, 47, 149,
    353, 102, 108, 148, 120, 148, 120, 148, 108, 120, 120, 148, 185, 108, 148, 108,
    75, 183, 21, 21, 471, 273, 176, 249, 1, 1, 181, 35, 260, 123, 327, 243,
    74, 74, 108, 66, 66, 66, 66, 101, 66, 273, 74, 66, 409, 101, 159, 66,
    273, 74, 159, 32, 365, 32, 194, 32, 103, 36, 103, 259, 36, 103, 103, 36,
    232, 259, 36, 36, 16, 97, 16, 81, 35, 538, 67, 16, 26, 26, 26, 50,
    127, 41, 57, 26, 103, 93, 321, 573, 542, 187, 383, 383, 321, 321, 305, 305,
    321, 305, 21, 13, 6, 461, 383, 95, 6, 6, 515, 189, 189, 383, 189, 722,
    173, 62, 516, 192, 64, 62, 62, 173, 62, 173, 147, 147, 192, 192, 173, 62,
    147, 147, 62, 62, 64, 173, 173, 64, 64, 234, 173, 147, 192, 173, 83, 231,
    124, 37, 37, 37, 233, 83, 83, 400, 37, 83, 37, 37, 83, 231, 21, 22,
    21, 57, 57, 57, 21, 21, 60, 535, 60, 60, 60, 211, 103, 211, 381, 334,
    211, 103, 567, 432, 334, 567, 103, 103, 211, 535, 318, 103, 101, 206, 100, 48,
    101, 100, 100, 48, 206, 48, 48, 160, 48, 48, 117, 7, 7, 168, 7, 140,
    37, 327, 234, 234, 37, 37, 37, 160, 160, 37, 50, 94, 133, 94, 69, 50,
    16, 16, 94, 133, 133, 16, 130, 230, 230, 194, 130, 206, 256, 270, 156, 150,
    86, 215, 182, 197, 182, 197, 165, 182, 235, 197, 250, 238, 180, 180, 180, 37,
    180, 533, 37, 465, 160, 14, 4, 14, 128, 94, 428, 11, 238, 260, 5, 1028,
    73, 179, 264, 265, 189, 112, 363, 179, 73, 73, 563, 179, 73, 396, 73, 73,
    363, 73, 73, 265, 73, 73, 396, 265, 63, 157, 63, 63, 94, 177, 94, 63,
    94, 94, 401, 266, 266, 94, 83, 121, 312, 121, 83, 163, 21, 21, 21, 21,
    423, 263, 143, 143, 31, 423, 31, 263, 160, 89, 87, 160, 71, 21, 21, 71,
    87, 21, 87, 21, 183, 208, 140, 242, 208, 724, 603, 242, 140, 242, 183, 603,
    140, 1021, 242, 183, 257, 242, 287, 306, 91, 169, 124, 169, 450, 374, 287, 169,
    32, 103, 142, 319, 142, 370, 32, 32, 687, 376, 370, 545, 4, 4, 235, 424,
    39, 39, 238, 96, 96, 397, 238, 96, 555, 549, 555, 324, 112, 607, 112, 549,
    112, 324, 21, 409, 324, 112, 555, 112, 409, 21, 409, 112, 699, 761, 39, 770,
    39, 39, 173, 503, 533, 173, 29, 85, 144, 207, 144, 143, 144, 207, 143, 48,
    48, 606, 85, 85, 220, 37, 4, 471, 8, 425, 271, 35, 21, 21, 251, 63,
    215, 63, 63, 91, 502, 91, 91, 63, 461, 63, 63, 63, 289, 232, 232, 173,
    71, 173, 112, 128, 112, 128, 198, 193, 240, 193, 770, 128, 128, 128, 38, 53,
    38, 13, 13, 38, 13, 53, 530, 35, 13, 749, 13, 13, 35, 13, 13, 13,
    13, 35, 242, 35, 104, 35, 266, 81, 306, 266, 6, 958, 120, 86, 120, 6,
    126, 126, 67, 13, 67, 13, 133, 127, 133, 133, 127, 146, 286, 146, 94, 31,
    94, 94, 31, 94, 537, 136, 31, 238, 81, 42, 178, 235, 158, 179, 158, 178,
    158, 205, 158, 16, 16, 1124, 16, 158, 1340, 158, 16, 179, 158, 16, 158, 601,
    808, 235, 683, 178, 16, 158, 178, 158,
];
