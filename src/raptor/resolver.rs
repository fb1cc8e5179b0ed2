//! Intermediate symbol resolution.
//!
//! [`IntermediateSymbolResolver`] replays a [`Schedule`] against the data
//! matrix `D`. [`solve_dense`] is the reference path: it inverts `A`
//! outright and multiplies, which is far slower for large `L` and is kept
//! for cross-checking.

use crate::error::{Error, Result};
use crate::raptor::bitmatrix::BitMatrix;
use crate::raptor::matrix::uniform_size;
use crate::raptor::params::ParameterSet;
use crate::raptor::schedule::Schedule;
use crate::raptor::symbol::{xor_within, Symbol};

/// Replays schedules to obtain the `L` intermediate symbols.
#[derive(Debug, Clone, Copy)]
pub struct IntermediateSymbolResolver {
    l: usize,
}

impl IntermediateSymbolResolver {
    /// Resolver for `params.l` intermediate symbols.
    #[must_use]
    pub fn new(params: &ParameterSet) -> Self {
        Self { l: params.l }
    }

    /// Applies every recorded XOR to `d` in order, then reads the
    /// intermediate symbols out through the permutations:
    /// `intermediate[c[i]] = D[d[i]]`.
    ///
    /// `d` must be built from the same ordered known-symbol list as the
    /// matrix the schedule was derived from.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimension`] if the schedule does not cover `L`
    /// columns or `d` has the wrong number of rows, and
    /// [`Error::SymbolSizeMismatch`] if the rows of `d` differ in length.
    pub fn resolve(&self, schedule: &Schedule, mut d: Vec<Symbol>) -> Result<Vec<Symbol>> {
        if schedule.column_count() != self.l {
            return Err(Error::dimension(
                "schedule columns",
                self.l,
                schedule.column_count(),
            ));
        }
        if d.len() != schedule.row_count() {
            return Err(Error::dimension("data rows", schedule.row_count(), d.len()));
        }
        uniform_size(&d)?;

        for &(source, target) in schedule.xors() {
            xor_within(&mut d, target, source);
        }

        let mut intermediate = vec![Symbol::default(); self.l];
        for (&c, &r) in schedule.columns().iter().zip(schedule.rows()) {
            intermediate[c] = std::mem::take(&mut d[r]);
        }
        Ok(intermediate)
    }
}

/// Reference decode: `intermediate = A^-1 · D`.
///
/// # Errors
///
/// Returns [`Error::Dimension`] unless `a` is `L × L` and `d` has `L` rows,
/// and [`Error::RankDeficiency`] if `a` is singular.
pub fn solve_dense(params: &ParameterSet, a: &BitMatrix, d: &[Symbol]) -> Result<Vec<Symbol>> {
    if a.rows() != params.l {
        return Err(Error::dimension("dense solve rows", params.l, a.rows()));
    }
    a.inverse()?.apply(d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raptor::inactivation::InactivationScheduler;
    use crate::raptor::matrix::MatrixBuilder;
    use crate::raptor::systematic::source_ids;

    fn source(k: usize, size: usize) -> Vec<Symbol> {
        (0..k)
            .map(|i| Symbol::new((0..size).map(|j| ((i * 37 + j * 13 + 7) % 256) as u8).collect()))
            .collect()
    }

    #[test]
    fn replay_matches_dense_solution() {
        let params = ParameterSet::new(12).unwrap();
        let builder = MatrixBuilder::new(&params);
        let a = builder.constraint_matrix(&source_ids(12));
        let d = builder.data_matrix(16, source(12, 16));

        let (schedule, _) = InactivationScheduler::new(&params).run(a.clone()).unwrap();
        let replayed = IntermediateSymbolResolver::new(&params)
            .resolve(&schedule, d.clone())
            .unwrap();
        let dense = solve_dense(&params, &a, &d).unwrap();
        assert_eq!(replayed, dense);
    }

    #[test]
    fn intermediate_symbols_satisfy_constraints() {
        let params = ParameterSet::new(8).unwrap();
        let builder = MatrixBuilder::new(&params);
        let a = builder.constraint_matrix(&source_ids(8));
        let d = builder.data_matrix(5, source(8, 5));
        let (schedule, _) = InactivationScheduler::new(&params).run(a.clone()).unwrap();
        let intermediate = IntermediateSymbolResolver::new(&params)
            .resolve(&schedule, d.clone())
            .unwrap();
        assert_eq!(a.apply(&intermediate).unwrap(), d);
    }

    #[test]
    fn rejects_mismatched_data() {
        let params = ParameterSet::new(4).unwrap();
        let resolver = IntermediateSymbolResolver::new(&params);
        let schedule = Schedule::new(params.l, params.l);
        let short = vec![Symbol::zeros(4); params.l - 1];
        assert!(matches!(
            resolver.resolve(&schedule, short),
            Err(Error::Dimension { .. })
        ));
        let wrong_l = Schedule::new(params.l + 1, params.l);
        assert!(matches!(
            resolver.resolve(&wrong_l, vec![Symbol::zeros(4); params.l]),
            Err(Error::Dimension { .. })
        ));
    }

    #[test]
    fn dense_requires_square_system() {
        let params = ParameterSet::new(4).unwrap();
        let a = MatrixBuilder::new(&params).constraint_matrix(&[0, 1, 2, 3, 4]);
        let d = vec![Symbol::zeros(1); a.rows()];
        assert!(matches!(
            solve_dense(&params, &a, &d),
            Err(Error::Dimension { .. })
        ));
    }
}
