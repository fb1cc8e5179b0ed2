//! Triple generator (RFC 5053 Section 5.4.4.4) and the LT index walk.

use crate::raptor::degree::{degree, DEGREE_RANGE};
use crate::raptor::params::ParameterSet;
use crate::raptor::rand::rand;

/// Largest prime below 2^16.
pub const Q: u64 = 65_521;

/// Per-symbol LT parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Degree: number of intermediate symbols combined.
    pub d: usize,
    /// Step, in `[1, L' - 1]`.
    pub a: usize,
    /// Start, in `[0, L' - 1]`.
    pub b: usize,
}

/// Computes triples for one parameter set.
#[derive(Debug, Clone, Copy)]
pub struct TripleGenerator {
    l: usize,
    l_prime: usize,
    mult: u64,
    offset: u64,
}

impl TripleGenerator {
    /// Creates a generator for `params`.
    #[must_use]
    pub fn new(params: &ParameterSet) -> Self {
        let j = u64::from(params.systematic_index);
        Self {
            l: params.l,
            l_prime: params.l_prime,
            mult: (53_591 + j * 997) % Q,
            offset: 10_267 * (j + 1) % Q,
        }
    }

    /// Returns the triple for encoding symbol id `esi`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn triple(&self, esi: u32) -> Triple {
        let y = ((self.offset + u64::from(esi) * self.mult) % Q) as u32;
        let v = rand(y, 0, DEGREE_RANGE);
        let d = degree(v);
        let a = 1 + rand(y, 1, (self.l_prime - 1) as u32) as usize;
        let b = rand(y, 2, self.l_prime as u32) as usize;
        Triple { d, a, b }
    }

    /// Intermediate-symbol indices combined into encoding symbol `esi`.
    #[must_use]
    pub fn walk(&self, esi: u32) -> LtWalk {
        LtWalk::new(self.triple(esi), self.l, self.l_prime)
    }
}

/// Iterator over the intermediate indices selected by a triple.
///
/// Starts at `b` and advances by `a` modulo `L'`, skipping indices `>= L`,
/// yielding `min(d, L)` indices in total.
#[derive(Debug, Clone)]
pub struct LtWalk {
    b: usize,
    a: usize,
    l: usize,
    l_prime: usize,
    remaining: usize,
}

impl LtWalk {
    /// Walk for `triple` over `l` intermediate symbols.
    #[must_use]
    pub fn new(triple: Triple, l: usize, l_prime: usize) -> Self {
        Self {
            b: triple.b,
            a: triple.a,
            l,
            l_prime,
            remaining: triple.d.min(l),
        }
    }

    fn skip_padding(&mut self) {
        while self.b >= self.l {
            self.b = (self.b + self.a) % self.l_prime;
        }
    }
}

impl Iterator for LtWalk {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.skip_padding();
        let index = self.b;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.b = (self.b + self.a) % self.l_prime;
        }
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LtWalk {}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(k: usize) -> ParameterSet {
        ParameterSet::with_systematic_index(k, 0).unwrap()
    }

    #[test]
    fn triples_stay_in_range() {
        for k in [4, 10, 100, 1000, 8192] {
            let p = params(k);
            let gen = TripleGenerator::new(&p);
            for esi in (0..2000).chain([u32::MAX - 1, u32::MAX]) {
                let t = gen.triple(esi);
                assert!([1, 2, 3, 4, 10, 11, 40].contains(&t.d));
                assert!((1..=p.l_prime - 1).contains(&t.a), "a={} l'={}", t.a, p.l_prime);
                assert!(t.b < p.l_prime);
            }
        }
    }

    #[test]
    fn independent_generators_agree() {
        let p = params(100);
        let first = TripleGenerator::new(&p);
        let second = TripleGenerator::new(&params(100));
        for esi in 0..=10_000 {
            assert_eq!(first.triple(esi), second.triple(esi));
        }
    }

    #[test]
    fn triple_matches_formula() {
        let p = ParameterSet::with_systematic_index(10, 3).unwrap();
        let gen = TripleGenerator::new(&p);
        let esi = 17u64;
        let a_const = (53_591 + 3 * 997) % Q;
        let b_const = 10_267 * 4 % Q;
        let y = ((b_const + esi * a_const) % Q) as u32;
        let expected = Triple {
            d: degree(rand(y, 0, 1 << 20)),
            a: 1 + rand(y, 1, (p.l_prime - 1) as u32) as usize,
            b: rand(y, 2, p.l_prime as u32) as usize,
        };
        assert_eq!(gen.triple(17), expected);
    }

    #[test]
    fn walk_skips_padding_indices() {
        // L = 5, L' = 7: indices 5 and 6 are never produced.
        let walk = LtWalk::new(Triple { d: 4, a: 3, b: 6 }, 5, 7);
        // 6 -> skip to 2; 2 -> 5 skip -> 1; 1 -> 4; 4 -> 0
        assert_eq!(walk.collect::<Vec<_>>(), vec![2, 1, 4, 0]);
    }

    #[test]
    fn walk_length_is_min_of_degree_and_l() {
        let walk = LtWalk::new(Triple { d: 40, a: 1, b: 0 }, 14, 17);
        assert_eq!(walk.len(), 14);
        let indices: Vec<_> = walk.collect();
        assert_eq!(indices, (0..14).collect::<Vec<_>>());
    }
}
