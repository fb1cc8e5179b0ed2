//! Constraint matrix `A` and data matrix `D` (RFC 5053 Section 5.4.2.4).
//!
//! ```text
//!              k          S        H
//!         +----------+--------+--------+
//!  S rows | G_LDPC   |  I_S   |  0     |
//!         +----------+--------+--------+
//!  H rows |      G_Half       |  I_H   |
//!         +-------------------+--------+
//!  n rows |          G_LT (one row per known symbol)
//!         +----------------------------+
//! ```
//!
//! `D` has the same row order: `S + H` zero symbols, then the known symbols.

use crate::error::{Error, Result};
use crate::raptor::bitmatrix::{BitMatrix, BitRow};
use crate::raptor::gray::GrayPopcountTable;
use crate::raptor::params::ParameterSet;
use crate::raptor::symbol::{EncodingSymbol, Symbol};
use crate::raptor::triple::TripleGenerator;

/// Builds constraint and data matrices for one parameter set.
#[derive(Debug, Clone, Copy)]
pub struct MatrixBuilder {
    params: ParameterSet,
    triples: TripleGenerator,
}

impl MatrixBuilder {
    /// Creates a builder for `params`.
    #[must_use]
    pub fn new(params: &ParameterSet) -> Self {
        Self {
            params: *params,
            triples: TripleGenerator::new(params),
        }
    }

    /// The `S × L` LDPC section.
    #[must_use]
    pub fn ldpc(&self) -> BitMatrix {
        let mut m = BitMatrix::zeros(self.params.s, self.params.l);
        self.fill_ldpc(&mut m, 0);
        m
    }

    /// The `H × L` half (HDPC) section.
    #[must_use]
    pub fn half(&self) -> BitMatrix {
        let mut m = BitMatrix::zeros(self.params.h, self.params.l);
        self.fill_half(&mut m, 0);
        m
    }

    /// The LT row of encoding symbol `esi`.
    #[must_use]
    pub fn lt_row(&self, esi: u32) -> BitRow {
        let mut row = BitRow::zeros(self.params.l);
        for index in self.triples.walk(esi) {
            row.set(index, true);
        }
        row
    }

    /// Constraint matrix for known symbols with the given ids, in order.
    #[must_use]
    pub fn constraint_matrix(&self, ids: &[u32]) -> BitMatrix {
        let ParameterSet { s, h, l, .. } = self.params;
        let mut a = BitMatrix::zeros(s + h + ids.len(), l);
        self.fill_ldpc(&mut a, 0);
        self.fill_half(&mut a, s);
        for (n, &esi) in ids.iter().enumerate() {
            let row = a.row_mut(s + h + n);
            for index in self.triples.walk(esi) {
                row.set(index, true);
            }
        }
        a
    }

    fn fill_ldpc(&self, m: &mut BitMatrix, offset: usize) {
        let ParameterSet { k, s, .. } = self.params;
        for i in 0..k {
            let a = 1 + (i / s) % (s - 1);
            let b = i % s;
            m.set(offset + b, i, true);
            m.set(offset + (b + a) % s, i, true);
            m.set(offset + (b + 2 * a) % s, i, true);
        }
        for j in 0..s {
            m.set(offset + j, k + j, true);
        }
    }

    fn fill_half(&self, m: &mut BitMatrix, offset: usize) {
        let ParameterSet { k, s, h, h_prime, .. } = self.params;
        let codes = GrayPopcountTable::global().sequence(h_prime);
        for (j, &code) in codes.iter().take(k + s).enumerate() {
            for row in 0..h {
                if (code >> row) & 1 == 1 {
                    m.set(offset + row, j, true);
                }
            }
        }
        for row in 0..h {
            m.set(offset + row, k + s + row, true);
        }
    }

    /// Data matrix: `S + H` zero symbols of `symbol_size` bytes, then `known`.
    #[must_use]
    pub fn data_matrix<I>(&self, symbol_size: usize, known: I) -> Vec<Symbol>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let precode = self.params.s + self.params.h;
        let known = known.into_iter();
        let mut d = Vec::with_capacity(precode + known.size_hint().0);
        d.resize(precode, Symbol::zeros(symbol_size));
        d.extend(known);
        d
    }

    /// Builds `A` and `D` for `known`, checking that all symbols share a length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SymbolSizeMismatch`] if the symbols differ in length.
    pub fn build(&self, known: &[EncodingSymbol]) -> Result<(BitMatrix, Vec<Symbol>)> {
        let size = uniform_size(known.iter().map(|s| &s.symbol))?;
        let ids: Vec<u32> = known.iter().map(|s| s.esi).collect();
        let a = self.constraint_matrix(&ids);
        let d = self.data_matrix(size, known.iter().map(|s| s.symbol.clone()));
        Ok((a, d))
    }

    /// Parameters this builder was created with.
    #[must_use]
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }
}

/// Common length of `symbols`, zero for an empty sequence.
///
/// # Errors
///
/// Returns [`Error::SymbolSizeMismatch`] on the first symbol whose length
/// differs from the first one.
pub(crate) fn uniform_size<'a, I>(symbols: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a Symbol>,
{
    let mut iter = symbols.into_iter();
    let Some(first) = iter.next() else {
        return Ok(0);
    };
    let expected = first.len();
    match iter.find(|s| s.len() != expected) {
        Some(bad) => Err(Error::SymbolSizeMismatch {
            expected,
            actual: bad.len(),
        }),
        None => Ok(expected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raptor::triple::LtWalk;

    fn builder(k: usize) -> MatrixBuilder {
        MatrixBuilder::new(&ParameterSet::with_systematic_index(k, 0).unwrap())
    }

    #[test]
    fn ldpc_columns_have_three_ones() {
        let b = builder(100);
        let p = *b.params();
        let ldpc = b.ldpc();
        assert_eq!((ldpc.rows(), ldpc.cols()), (p.s, p.l));
        for col in 0..p.k {
            let ones = (0..p.s).filter(|&r| ldpc.get(r, col)).count();
            assert_eq!(ones, 3, "column {col}");
        }
        for j in 0..p.s {
            assert!(ldpc.get(j, p.k + j));
            assert_eq!(ldpc.row(j).count_range(p.k + p.s, p.l), 0);
        }
    }

    #[test]
    fn ldpc_k4_matches_rule() {
        // S = 5: column i gets rows b, b+a, b+2a (mod 5), a = 1, b = i.
        let ldpc = builder(4).ldpc();
        let expected = [[0, 1, 2], [1, 2, 3], [2, 3, 4], [3, 4, 0]];
        for (col, rows) in expected.iter().enumerate() {
            for r in 0..5 {
                assert_eq!(ldpc.get(r, col), rows.contains(&r), "row {r} col {col}");
            }
        }
    }

    #[test]
    fn half_rows_follow_gray_codes() {
        let b = builder(10);
        let p = *b.params();
        let half = b.half();
        let codes = GrayPopcountTable::global().sequence(p.h_prime);
        for j in 0..p.k + p.s {
            let column: u32 = (0..p.h)
                .filter(|&h| half.get(h, j))
                .map(|h| 1u32 << h)
                .sum();
            assert_eq!(column, codes[j]);
            assert_eq!(column.count_ones() as usize, p.h_prime);
        }
        for h in 0..p.h {
            assert!(half.get(h, p.k + p.s + h));
            assert_eq!(half.row(h).count_range(p.k + p.s, p.l), 1);
        }
    }

    #[test]
    fn lt_row_matches_walk() {
        let b = builder(10);
        let p = *b.params();
        let gen = TripleGenerator::new(&p);
        for esi in 0..50 {
            let row = b.lt_row(esi);
            let walk: Vec<usize> = LtWalk::new(gen.triple(esi), p.l, p.l_prime).collect();
            assert_eq!(row.count_ones(), walk.len());
            assert!(walk.iter().all(|&i| row.get(i)));
        }
    }

    #[test]
    fn build_shapes_match() {
        let b = builder(4);
        let p = *b.params();
        let known: Vec<EncodingSymbol> = (4..9)
            .map(|esi| EncodingSymbol::new(esi, vec![esi as u8; 8]))
            .collect();
        let (a, d) = b.build(&known).unwrap();
        assert_eq!(a.rows(), p.s + p.h + known.len());
        assert_eq!(a.cols(), p.l);
        assert_eq!(d.len(), a.rows());
        assert!(d[..p.s + p.h].iter().all(|s| s.is_zero() && s.len() == 8));
        assert_eq!(d[p.s + p.h].as_bytes(), &[4; 8]);
        assert_eq!(a.row(p.s + p.h), &b.lt_row(4));
    }

    #[test]
    fn build_rejects_mixed_sizes() {
        let known = vec![
            EncodingSymbol::new(0, vec![0; 8]),
            EncodingSymbol::new(1, vec![0; 9]),
        ];
        assert!(matches!(
            builder(4).build(&known),
            Err(Error::SymbolSizeMismatch {
                expected: 8,
                actual: 9
            })
        ));
    }
}
