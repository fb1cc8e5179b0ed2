//! Recorded elimination steps, replayable against symbol data.
//!
//! A [`Schedule`] mirrors every row exchange, column exchange and row XOR
//! performed on the constraint matrix. Row indices passed to [`Schedule::xor`]
//! are positions in the permuted matrix; they are translated through the
//! current row permutation before being stored, so the XOR list refers to
//! rows of the *original* data matrix.

/// Permutations and XOR list produced by one elimination run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    c: Vec<usize>,
    d: Vec<usize>,
    xors: Vec<(usize, usize)>,
}

impl Schedule {
    /// Identity schedule for an `m × l` constraint matrix.
    #[must_use]
    pub fn new(l: usize, m: usize) -> Self {
        Self {
            c: (0..l).collect(),
            d: (0..m).collect(),
            xors: Vec::new(),
        }
    }

    /// Records `row[r1] ^= row[r2]` as the pair `(d[r2], d[r1])`.
    ///
    /// The order matters: `r1` is the target, `r2` the source.
    #[inline]
    pub fn xor(&mut self, r1: usize, r2: usize) {
        self.xors.push((self.d[r2], self.d[r1]));
    }

    /// Records an exchange of matrix rows `r1` and `r2`.
    #[inline]
    pub fn exchange_row(&mut self, r1: usize, r2: usize) {
        self.d.swap(r1, r2);
    }

    /// Records an exchange of matrix columns `c1` and `c2`.
    #[inline]
    pub fn exchange_column(&mut self, c1: usize, c2: usize) {
        self.c.swap(c1, c2);
    }

    /// Column permutation `c`: matrix column `i` holds intermediate symbol `c[i]`.
    #[must_use]
    pub fn columns(&self) -> &[usize] {
        &self.c
    }

    /// Row permutation `d`: matrix row `i` holds data row `d[i]`.
    #[must_use]
    pub fn rows(&self) -> &[usize] {
        &self.d
    }

    /// Recorded `(source, target)` data-row XORs, in order.
    #[must_use]
    pub fn xors(&self) -> &[(usize, usize)] {
        &self.xors
    }

    /// Number of intermediate symbols `L`.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.c.len()
    }

    /// Number of data rows `m` the schedule expects.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.d.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_identity() {
        let s = Schedule::new(3, 5);
        assert_eq!(s.columns(), &[0, 1, 2]);
        assert_eq!(s.rows(), &[0, 1, 2, 3, 4]);
        assert!(s.xors().is_empty());
        assert_eq!((s.column_count(), s.row_count()), (3, 5));
    }

    #[test]
    fn xor_is_translated_through_row_permutation() {
        let mut s = Schedule::new(2, 4);
        s.exchange_row(0, 3);
        // Matrix row 0 now holds data row 3.
        s.xor(1, 0);
        s.xor(0, 2);
        assert_eq!(s.xors(), &[(3, 1), (2, 3)]);
    }

    #[test]
    fn column_exchanges_permute_c() {
        let mut s = Schedule::new(4, 4);
        s.exchange_column(0, 3);
        s.exchange_column(3, 1);
        assert_eq!(s.columns(), &[3, 0, 2, 1]);
    }
}
