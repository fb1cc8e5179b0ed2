//! Two-phase inactivation elimination (RFC 5053 Section 5.5.2.2).
//!
//! Reduces the constraint matrix `A` to the identity while recording every
//! row exchange, column exchange and row XOR into a [`Schedule`]. The
//! schedule is later replayed against symbol data, so no matrix is ever
//! inverted on the symbol path.
//!
//! # Architecture
//!
//! ```text
//!            i          L-u        L
//!        +----------+---------+------+
//!        |    I     |  (done) |  U   |   rows 0..i
//!  i --> +----------+---------+------+
//!        |    0     |    V    |  U   |   rows i..m
//!        +----------+---------+------+
//! ```
//!
//! Phase 1 repeatedly picks a row of minimum weight `r` inside the active
//! window `V`, moves one of its ones to the diagonal and the other `r - 1`
//! to the right edge of `V` (inactivating those columns), then clears the
//! pivot column below the diagonal. Phase 2 runs dense Gaussian elimination
//! over the `u` inactive columns and back-substitutes.
//!
//! # Determinism
//!
//! Tie-breaks are fixed:
//! - minimum-degree rows: lowest active column with the fewest candidate
//!   rows, then the first candidate row touching it
//! - weight-2 rows: the connected component with the most rows, ties to
//!   the component holding the earliest candidate; its earliest row wins
//! - pivot column: the lowest active column holding a one

use core::fmt;

use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::raptor::bitmatrix::BitMatrix;
use crate::raptor::params::ParameterSet;
use crate::raptor::schedule::Schedule;
use crate::tracing_compat::{debug, debug_span};

type Columns = SmallVec<[usize; 4]>;

/// Counters for one elimination run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleStats {
    /// Columns inactivated in phase 1 (`u` at the end of phase 1).
    pub inactivated: usize,
    /// Row XORs recorded.
    pub xors: usize,
    /// Row exchanges recorded.
    pub row_exchanges: usize,
    /// Column exchanges recorded.
    pub column_exchanges: usize,
    /// Phase-1 steps that chose a row through the weight-2 graph.
    pub graph_selections: usize,
    /// Phase-1 steps that chose a row by the minimum-degree rule.
    pub degree_selections: usize,
}

impl fmt::Display for ScheduleStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "inactivated={} xors={} row_swaps={} col_swaps={} graph={} min_degree={}",
            self.inactivated,
            self.xors,
            self.row_exchanges,
            self.column_exchanges,
            self.graph_selections,
            self.degree_selections
        )
    }
}

/// Produces decoding schedules for one parameter set.
#[derive(Debug, Clone, Copy)]
pub struct InactivationScheduler {
    l: usize,
}

impl InactivationScheduler {
    /// Creates a scheduler for matrices with `params.l` columns.
    #[must_use]
    pub fn new(params: &ParameterSet) -> Self {
        Self { l: params.l }
    }

    /// Eliminates `a`, returning the recorded schedule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimension`] if `a` does not have `L` columns or has
    /// fewer than `L` rows, and [`Error::RankDeficiency`] if `a` does not
    /// have full column rank.
    pub fn run(&self, a: BitMatrix) -> Result<(Schedule, ScheduleStats)> {
        let l = self.l;
        if a.cols() != l {
            return Err(Error::dimension("schedule columns", l, a.cols()));
        }
        if a.rows() < l {
            return Err(Error::dimension("schedule rows", l, a.rows()));
        }
        let span = debug_span!("inactivation", l, m = a.rows());
        let _guard = span.enter();

        let mut state = Elimination::new(a, l);
        state
            .phase_one()
            .and_then(|i| state.phase_two(i))
            .map_err(|err| {
                debug!(error = %err, stats = %state.stats, "elimination failed");
                err
            })?;
        debug!(stats = %state.stats, "schedule complete");
        Ok((state.schedule, state.stats))
    }
}

// ============================================================================
// Elimination state
// ============================================================================

struct Elimination {
    a: BitMatrix,
    schedule: Schedule,
    l: usize,
    m: usize,
    /// Ones of each row inside the active window.
    weights: Vec<usize>,
    /// Lazily computed active-window columns of each row, kept in sync with
    /// column exchanges and window shrinkage.
    window: Vec<Option<Columns>>,
    stats: ScheduleStats,
}

impl Elimination {
    fn new(a: BitMatrix, l: usize) -> Self {
        let m = a.rows();
        let weights = a.iter_rows().map(|row| row.count_range(0, l)).collect();
        Self {
            schedule: Schedule::new(l, m),
            a,
            l,
            m,
            weights,
            window: vec![None; m],
            stats: ScheduleStats::default(),
        }
    }

    fn exchange_row(&mut self, r1: usize, r2: usize) {
        if r1 == r2 {
            return;
        }
        self.a.swap_rows(r1, r2);
        self.weights.swap(r1, r2);
        self.window.swap(r1, r2);
        self.schedule.exchange_row(r1, r2);
        self.stats.row_exchanges += 1;
    }

    fn exchange_column(&mut self, c1: usize, c2: usize) {
        if c1 == c2 {
            return;
        }
        for r in 0..self.m {
            let row = self.a.row_mut(r);
            if row.get(c1) == row.get(c2) {
                continue;
            }
            row.toggle(c1);
            row.toggle(c2);
            if let Some(cols) = &mut self.window[r] {
                for c in cols.iter_mut() {
                    if *c == c1 {
                        *c = c2;
                    } else if *c == c2 {
                        *c = c1;
                    }
                }
            }
        }
        self.schedule.exchange_column(c1, c2);
        self.stats.column_exchanges += 1;
    }

    /// `row[target] ^= row[source]`; `source` must be zero below column `from`.
    fn xor(&mut self, target: usize, source: usize, from: usize) {
        self.a.xor_rows_from(target, source, from);
        self.schedule.xor(target, source);
        self.stats.xors += 1;
    }

    /// Active-window columns of row `r`, computed on first use.
    fn window_columns(&mut self, r: usize, lo: usize, hi: usize) -> &Columns {
        let row = self.a.row(r);
        self.window[r].get_or_insert_with(|| row.ones_in(lo, hi).collect())
    }

    // ------------------------------------------------------------------------
    // Phase 1
    // ------------------------------------------------------------------------

    /// Runs the inactivation descent; returns the final `i` (`= L - u`).
    fn phase_one(&mut self) -> Result<usize> {
        let l = self.l;
        let mut i = 0;
        let mut u = 0;
        while i + u < l {
            let hi = l - u;
            let (r, candidates) = self.min_weight_rows(i)?;
            let row = if r == 2 {
                self.stats.graph_selections += 1;
                self.choose_from_graph(&candidates, i, hi)
            } else {
                self.stats.degree_selections += 1;
                self.choose_min_degree(&candidates, i, hi)
            };
            self.exchange_row(i, row);
            self.window[i] = None;

            let ones: SmallVec<[usize; 8]> = self.a.row(i).ones_in(i, hi).collect();
            debug_assert_eq!(ones.len(), r);
            if ones[0] != i {
                self.exchange_column(i, ones[0]);
            }

            // The remaining r - 1 ones move to [edge, hi) and leave the window.
            let edge = hi - (r - 1);
            let misplaced: SmallVec<[usize; 8]> =
                ones[1..].iter().copied().filter(|&c| c < edge).collect();
            let vacant: SmallVec<[usize; 8]> =
                (edge..hi).filter(|&c| !self.a.get(i, c)).collect();
            debug_assert_eq!(misplaced.len(), vacant.len());
            for (&from, &to) in misplaced.iter().zip(&vacant) {
                self.exchange_column(from, to);
            }

            self.shrink_window(i, edge, hi);

            for t in i + 1..self.m {
                if self.a.get(t, i) {
                    self.xor(t, i, i);
                }
            }
            i += 1;
            u += r - 1;
        }
        self.stats.inactivated = u;
        Ok(i)
    }

    /// Minimum positive window weight among rows `i..m` and the rows having it.
    fn min_weight_rows(&self, i: usize) -> Result<(usize, Vec<usize>)> {
        let mut min = usize::MAX;
        let mut rows = Vec::new();
        for (t, &w) in self.weights.iter().enumerate().skip(i) {
            if w == 0 || w > min {
                continue;
            }
            if w < min {
                min = w;
                rows.clear();
            }
            rows.push(t);
        }
        if rows.is_empty() {
            return Err(Error::RankDeficiency { row: i });
        }
        Ok((min, rows))
    }

    /// Removes column `i` and columns `[edge, hi)` from the active window.
    fn shrink_window(&mut self, i: usize, edge: usize, hi: usize) {
        for t in i + 1..self.m {
            let row = self.a.row(t);
            let lost = usize::from(row.get(i)) + row.count_range(edge, hi);
            if lost == 0 {
                continue;
            }
            self.weights[t] -= lost;
            if let Some(cols) = &mut self.window[t] {
                cols.retain(|c| *c != i && *c < edge);
            }
        }
    }

    fn choose_min_degree(&mut self, candidates: &[usize], lo: usize, hi: usize) -> usize {
        let mut touched: Vec<usize> = Vec::new();
        for &t in candidates {
            touched.extend_from_slice(self.window_columns(t, lo, hi));
        }
        touched.sort_unstable();

        // Runs are in ascending column order; strict `<` keeps the lowest.
        let mut best = (usize::MAX, usize::MAX);
        for run in touched.chunk_by(|x, y| x == y) {
            if run.len() < best.0 {
                best = (run.len(), run[0]);
            }
        }
        let column = best.1;
        candidates
            .iter()
            .copied()
            .find(|&t| self.a.get(t, column))
            .unwrap_or(candidates[0])
    }

    fn choose_from_graph(&mut self, candidates: &[usize], lo: usize, hi: usize) -> usize {
        let mut edges: Vec<(usize, usize)> = Vec::with_capacity(candidates.len());
        for &t in candidates {
            let cols = self.window_columns(t, lo, hi);
            debug_assert_eq!(cols.len(), 2);
            edges.push((cols[0], cols[1]));
        }

        let mut vertices: Vec<usize> = edges.iter().flat_map(|&(x, y)| [x, y]).collect();
        vertices.sort_unstable();
        vertices.dedup();
        let index = |c: usize| vertices.binary_search(&c).unwrap_or(0);

        let mut sets = DisjointSets::new(vertices.len());
        for &(x, y) in &edges {
            sets.union(index(x), index(y));
        }

        // Per root: (edge count, first candidate position).
        let mut components: Vec<(usize, usize)> = vec![(0, usize::MAX); vertices.len()];
        for (pos, &(x, _)) in edges.iter().enumerate() {
            let root = sets.find(index(x));
            let entry = &mut components[root];
            entry.0 += 1;
            entry.1 = entry.1.min(pos);
        }
        let (_, first) = components
            .iter()
            .filter(|c| c.0 > 0)
            .fold((0, 0), |best, &(count, first)| {
                if count > best.0 || (count == best.0 && first < best.1) {
                    (count, first)
                } else {
                    best
                }
            });
        candidates[first]
    }

    // ------------------------------------------------------------------------
    // Phase 2
    // ------------------------------------------------------------------------

    /// Dense elimination of the inactive columns `[start, L)`.
    fn phase_two(&mut self, start: usize) -> Result<()> {
        let (l, m) = (self.l, self.m);

        for col in start..l {
            if !self.a.get(col, col) {
                let pivot = (col + 1..m)
                    .find(|&r| self.a.get(r, col))
                    .ok_or(Error::RankDeficiency { row: col })?;
                self.exchange_row(col, pivot);
            }
            for r in col + 1..m {
                if self.a.get(r, col) {
                    self.xor(r, col, start);
                }
            }
        }

        for col in (start..l).rev() {
            for r in start..col {
                if self.a.get(r, col) {
                    self.xor(r, col, start);
                }
            }
        }

        self.a.truncate_rows(l);

        for r in 0..start {
            for col in start..l {
                if self.a.get(r, col) {
                    self.xor(r, col, start);
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Union-find
// ============================================================================

/// Disjoint sets with path halving and union by size.
struct DisjointSets {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSets {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, x: usize, y: usize) {
        let (mut rx, mut ry) = (self.find(x), self.find(y));
        if rx == ry {
            return;
        }
        if self.size[rx] < self.size[ry] {
            core::mem::swap(&mut rx, &mut ry);
        }
        self.parent[ry] = rx;
        self.size[rx] += self.size[ry];
    }
}

// ============================================================================
// Unit tests
// ============================================================================
