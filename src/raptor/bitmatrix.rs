//! Bit vectors and bit matrices over GF(2).
//!
//! Provides the storage used by the constraint matrix and the dense
//! primitives used for verification and the reference decode path:
//!
//! - [`BitRow`]: fixed-length bit vector packed into `u64` words
//! - [`BitMatrix`]: rows of equal length, swappable by index
//! - [`BitMatrix::inverse`], [`BitMatrix::multiply`], [`BitMatrix::rank`]
//!
//! # Usage
//!
//! ```
//! use raptor_r10::raptor::bitmatrix::BitMatrix;
//!
//! let mut m = BitMatrix::identity(3);
//! m.set(0, 2, true);
//! let inv = m.inverse().unwrap();
//! assert_eq!(inv.multiply(&m).unwrap(), BitMatrix::identity(3));
//! assert_eq!(m.rank(), 3);
//! ```

use core::fmt;

use crate::error::{Error, Result};
use crate::raptor::symbol::Symbol;

const WORD_BITS: usize = 64;

#[inline]
const fn word_count(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

// ============================================================================
// BitRow
// ============================================================================

/// A fixed-length bit vector.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitRow {
    words: Vec<u64>,
    len: usize,
}

impl BitRow {
    /// An all-zero row of `len` bits.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            words: vec![0; word_count(len)],
            len,
        }
    }

    /// A row of `len` bits with the given positions set.
    ///
    /// # Panics
    ///
    /// Panics if a position is `>= len`.
    #[must_use]
    pub fn from_ones(len: usize, ones: &[usize]) -> Self {
        let mut row = Self::zeros(len);
        for &i in ones {
            row.set(i, true);
        }
        row
    }

    /// Number of bits.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true for a zero-length row.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reads bit `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len`.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> bool {
        assert!(i < self.len, "bit index {i} out of range {}", self.len);
        (self.words[i / WORD_BITS] >> (i % WORD_BITS)) & 1 == 1
    }

    /// Writes bit `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len`.
    #[inline]
    pub fn set(&mut self, i: usize, value: bool) {
        assert!(i < self.len, "bit index {i} out of range {}", self.len);
        let mask = 1u64 << (i % WORD_BITS);
        if value {
            self.words[i / WORD_BITS] |= mask;
        } else {
            self.words[i / WORD_BITS] &= !mask;
        }
    }

    /// Flips bit `i`.
    #[inline]
    pub fn toggle(&mut self, i: usize) {
        assert!(i < self.len, "bit index {i} out of range {}", self.len);
        self.words[i / WORD_BITS] ^= 1u64 << (i % WORD_BITS);
    }

    /// Exchanges bits `a` and `b`.
    #[inline]
    pub fn swap_bits(&mut self, a: usize, b: usize) {
        if self.get(a) != self.get(b) {
            self.toggle(a);
            self.toggle(b);
        }
    }

    /// Returns true if no bit is set.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Number of set bits.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Number of set bits in `[start, end)`.
    #[must_use]
    pub fn count_range(&self, start: usize, end: usize) -> usize {
        self.ones_in(start, end).count()
    }

    /// Positions of set bits, ascending.
    #[must_use]
    pub fn ones(&self) -> Ones<'_> {
        self.ones_in(0, self.len)
    }

    /// Positions of set bits in `[start, end)`, ascending.
    #[must_use]
    pub fn ones_in(&self, start: usize, end: usize) -> Ones<'_> {
        let end = end.min(self.len);
        let start = start.min(end);
        let word = start / WORD_BITS;
        let current = if start < end {
            self.words[word] & (u64::MAX << (start % WORD_BITS))
        } else {
            0
        };
        Ones {
            words: &self.words,
            word,
            current,
            end,
        }
    }

    /// First set bit at or after `start`.
    #[must_use]
    pub fn first_one_from(&self, start: usize) -> Option<usize> {
        self.ones_in(start, self.len).next()
    }

    /// `self ^= other`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn xor_assign(&mut self, other: &Self) {
        self.xor_assign_from(other, 0);
    }

    /// `self ^= other`, restricted to the words holding bits `>= start`.
    ///
    /// Bits below `start` in the same word as `start` are also combined;
    /// callers use this when `other` is known to be zero below `start`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn xor_assign_from(&mut self, other: &Self, start: usize) {
        assert_eq!(self.len, other.len, "bit row length mismatch");
        let first = (start / WORD_BITS).min(self.words.len());
        for (d, s) in self.words[first..].iter_mut().zip(&other.words[first..]) {
            *d ^= s;
        }
    }

    /// Backing words, least significant bit first.
    #[must_use]
    pub fn words(&self) -> &[u64] {
        &self.words
    }
}

impl fmt::Debug for BitRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.len {
            f.write_str(if self.get(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Iterator over set-bit positions of a [`BitRow`].
#[derive(Debug, Clone)]
pub struct Ones<'a> {
    words: &'a [u64],
    word: usize,
    current: u64,
    end: usize,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let bit = self.word * WORD_BITS + self.current.trailing_zeros() as usize;
                if bit >= self.end {
                    self.current = 0;
                    return None;
                }
                self.current &= self.current - 1;
                return Some(bit);
            }
            self.word += 1;
            if self.word * WORD_BITS >= self.end {
                return None;
            }
            self.current = self.words[self.word];
        }
    }
}

// ============================================================================
// BitMatrix
// ============================================================================

/// A dense matrix over GF(2) stored as a vector of rows.
#[derive(Clone, PartialEq, Eq)]
pub struct BitMatrix {
    rows: Vec<BitRow>,
    cols: usize,
}

impl BitMatrix {
    /// The `rows × cols` zero matrix.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![BitRow::zeros(cols); rows],
            cols,
        }
    }

    /// The `n × n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.set(i, i, true);
        }
        m
    }

    /// Builds a matrix from rows, which must all have length `cols`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimension`] if a row has a different length.
    pub fn from_rows(rows: Vec<BitRow>, cols: usize) -> Result<Self> {
        if let Some(bad) = rows.iter().find(|r| r.len() != cols) {
            return Err(Error::dimension("from_rows", cols, bad.len()));
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Reads entry `(r, c)`.
    #[inline]
    #[must_use]
    pub fn get(&self, r: usize, c: usize) -> bool {
        self.rows[r].get(c)
    }

    /// Writes entry `(r, c)`.
    #[inline]
    pub fn set(&mut self, r: usize, c: usize, value: bool) {
        self.rows[r].set(c, value);
    }

    /// Borrows row `r`.
    #[inline]
    #[must_use]
    pub fn row(&self, r: usize) -> &BitRow {
        &self.rows[r]
    }

    /// Mutably borrows row `r`.
    #[inline]
    pub fn row_mut(&mut self, r: usize) -> &mut BitRow {
        &mut self.rows[r]
    }

    /// Iterates over rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &BitRow> {
        self.rows.iter()
    }

    /// Exchanges rows `a` and `b` without copying their contents.
    #[inline]
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }

    /// Exchanges columns `a` and `b` in every row.
    pub fn swap_columns(&mut self, a: usize, b: usize) {
        if a != b {
            for row in &mut self.rows {
                row.swap_bits(a, b);
            }
        }
    }

    /// `row[target] ^= row[source]`.
    ///
    /// # Panics
    ///
    /// Panics if `target == source`.
    #[inline]
    pub fn xor_rows(&mut self, target: usize, source: usize) {
        self.xor_rows_from(target, source, 0);
    }

    /// `row[target] ^= row[source]` over the words holding columns `>= start`.
    ///
    /// # Panics
    ///
    /// Panics if `target == source`.
    pub fn xor_rows_from(&mut self, target: usize, source: usize, start: usize) {
        assert_ne!(target, source, "xor of a row with itself");
        if target < source {
            let (head, tail) = self.rows.split_at_mut(source);
            head[target].xor_assign_from(&tail[0], start);
        } else {
            let (head, tail) = self.rows.split_at_mut(target);
            tail[0].xor_assign_from(&head[source], start);
        }
    }

    /// Appends the rows of `other` below `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimension`] if the column counts differ.
    pub fn append(&mut self, other: Self) -> Result<()> {
        if other.cols != self.cols {
            return Err(Error::dimension("append", self.cols, other.cols));
        }
        self.rows.extend(other.rows);
        Ok(())
    }

    /// Drops every row at index `>= rows`.
    pub fn truncate_rows(&mut self, rows: usize) {
        self.rows.truncate(rows);
    }

    /// Inverse by Gauss-Jordan elimination against an adjoined identity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimension`] if the matrix is not square and
    /// [`Error::RankDeficiency`] if it is singular.
    pub fn inverse(&self) -> Result<Self> {
        let n = self.rows();
        if n != self.cols {
            return Err(Error::dimension("inverse", n, self.cols));
        }
        let mut a = self.clone();
        let mut inv = Self::identity(n);
        for col in 0..n {
            let pivot = (col..n)
                .find(|&r| a.get(r, col))
                .ok_or(Error::RankDeficiency { row: col })?;
            a.swap_rows(col, pivot);
            inv.swap_rows(col, pivot);
            for r in 0..n {
                if r != col && a.get(r, col) {
                    a.xor_rows(r, col);
                    inv.xor_rows(r, col);
                }
            }
        }
        Ok(inv)
    }

    /// Matrix product `self × other` over GF(2).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimension`] unless `self.cols() == other.rows()`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows() {
            return Err(Error::dimension("multiply", self.cols, other.rows()));
        }
        let rows = self
            .rows
            .iter()
            .map(|lhs| {
                let mut out = BitRow::zeros(other.cols);
                for j in lhs.ones() {
                    out.xor_assign(&other.rows[j]);
                }
                out
            })
            .collect();
        Ok(Self {
            rows,
            cols: other.cols,
        })
    }

    /// Rank over GF(2), by forward elimination on a copy.
    #[must_use]
    pub fn rank(&self) -> usize {
        let mut m = self.clone();
        let mut rank = 0;
        for col in 0..m.cols {
            if rank == m.rows() {
                break;
            }
            let Some(pivot) = (rank..m.rows()).find(|&r| m.get(r, col)) else {
                continue;
            };
            m.swap_rows(rank, pivot);
            for r in rank + 1..m.rows() {
                if m.get(r, col) {
                    m.xor_rows_from(r, rank, col);
                }
            }
            rank += 1;
        }
        rank
    }

    /// Multiplies the matrix by a column of symbols: output row `r` is the
    /// XOR of `symbols[j]` over the set bits `j` of row `r`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimension`] unless `symbols.len() == self.cols()`,
    /// and [`Error::SymbolSizeMismatch`] if the symbols differ in length.
    pub fn apply(&self, symbols: &[Symbol]) -> Result<Vec<Symbol>> {
        if symbols.len() != self.cols {
            return Err(Error::dimension("apply", self.cols, symbols.len()));
        }
        let size = symbols.first().map_or(0, Symbol::len);
        if let Some(bad) = symbols.iter().find(|s| s.len() != size) {
            return Err(Error::SymbolSizeMismatch {
                expected: size,
                actual: bad.len(),
            });
        }
        Ok(self
            .rows
            .iter()
            .map(|row| {
                let mut out = Symbol::zeros(size);
                for j in row.ones() {
                    out.xor_assign(&symbols[j]);
                }
                out
            })
            .collect())
    }
}

impl fmt::Debug for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitMatrix {}x{}", self.rows(), self.cols)?;
        for row in &self.rows {
            writeln!(f, "{row:?}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Unit tests
// ============================================================================
