//! Precode parameters (RFC 5053 Section 5.4.2.3).
//!
//! Everything here is a pure function of `k` and the systematic index, so
//! independently constructed encoders and decoders always agree.

use core::fmt;

use crate::error::{Error, Result};
use crate::raptor::gray::GrayPopcountTable;
use crate::raptor::numbers::{ceil_half, choose, half_for, next_prime_ge, x_for};
use crate::raptor::systematic;
use crate::tracing_compat::trace;

/// Smallest supported number of source symbols.
pub const MIN_K: usize = 4;
/// Largest supported number of source symbols.
pub const MAX_K: usize = 8192;

/// Derived parameters for one source block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterSet {
    /// K: number of source symbols.
    pub k: usize,
    /// X: smallest integer with `X(X-1) >= 2K`.
    pub x: usize,
    /// S: number of LDPC symbols (prime).
    pub s: usize,
    /// H: number of half (HDPC) symbols.
    pub h: usize,
    /// H' = ceil(H / 2): popcount of the Gray codes used by the half rows.
    pub h_prime: usize,
    /// L = K + S + H: number of intermediate symbols.
    pub l: usize,
    /// L': smallest prime `>= L`.
    pub l_prime: usize,
    /// J(K): systematic index feeding the triple generator.
    pub systematic_index: u32,
}

impl ParameterSet {
    /// Derives the parameters for `k` source symbols.
    ///
    /// The systematic index is read from
    /// [`SYSTEMATIC_INDEX`](crate::raptor::systematic::SYSTEMATIC_INDEX).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parameter`] if `k` is outside `[4, 8192]`.
    pub fn new(k: usize) -> Result<Self> {
        let index = systematic::systematic_index(k)?;
        Self::with_systematic_index(k, index)
    }

    /// Derives the parameters for `k` with a caller-supplied systematic
    /// index.
    ///
    /// The systematic property only holds if `index` makes the constraint
    /// matrix for ids `0..k` non-singular; encoding fails otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parameter`] if `k` is outside `[4, 8192]`.
    pub fn with_systematic_index(k: usize, index: u32) -> Result<Self> {
        if !(MIN_K..=MAX_K).contains(&k) {
            return Err(Error::Parameter {
                k,
                reason: "k must lie in [4, 8192]",
            });
        }

        let x = x_for(k);
        let s = next_prime_ge(k.div_ceil(100) + x);
        let h = half_for((k + s) as u64).ok_or(Error::Parameter {
            k,
            reason: "no half-symbol count satisfies C(H, ceil(H/2)) >= k + S",
        })?;
        let h_prime = ceil_half(h);
        let l = k + s + h;
        let l_prime = next_prime_ge(l);

        if GrayPopcountTable::global().sequence(h_prime).len() < k + s {
            return Err(Error::Parameter {
                k,
                reason: "gray table too small for the half rows",
            });
        }
        debug_assert!(choose(h, h_prime) >= (k + s) as u64);

        let params = Self {
            k,
            x,
            s,
            h,
            h_prime,
            l,
            l_prime,
            systematic_index: index,
        };
        trace!(%params, "derived precode parameters");
        Ok(params)
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "k={} x={} s={} h={} h'={} l={} l'={} j={}",
            self.k,
            self.x,
            self.s,
            self.h,
            self.h_prime,
            self.l,
            self.l_prime,
            self.systematic_index
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raptor::numbers::is_prime;

    #[test]
    fn rejects_out_of_range_k() {
        for k in [0, 1, 3, 8193, 100_000] {
            let err = ParameterSet::with_systematic_index(k, 0).unwrap_err();
            assert!(matches!(err, Error::Parameter { k: got, .. } if got == k));
        }
        assert!(matches!(ParameterSet::new(3), Err(Error::Parameter { .. })));
    }

    #[test]
    fn k4_parameters() {
        let p = ParameterSet::with_systematic_index(4, 18).unwrap();
        // X=4, S=next_prime(1+4)=5, C(H, ceil(H/2)) >= 9 -> H=5, L=14, L'=17
        assert_eq!((p.x, p.s, p.h, p.h_prime), (4, 5, 5, 3));
        assert_eq!((p.l, p.l_prime), (14, 17));
        assert_eq!(p.systematic_index, 18);
    }

    #[test]
    fn new_uses_tabulated_index() {
        for (k, j) in [(4, 18), (5, 14), (6, 61), (7, 46), (8, 14), (9, 22), (10, 20)] {
            assert_eq!(ParameterSet::new(k).unwrap().systematic_index, j, "k={k}");
        }
        let p = ParameterSet::new(100).unwrap();
        assert_eq!(p, ParameterSet::with_systematic_index(100, 21).unwrap());
    }

    #[test]
    fn k8192_parameters() {
        let p = ParameterSet::with_systematic_index(8192, 0).unwrap();
        assert_eq!(p.x, 129);
        assert_eq!(p.s, 211);
        assert_eq!(p.h, 16);
        assert_eq!(p.h_prime, 8);
        assert_eq!(p.l, 8192 + 211 + 16);
        assert!(is_prime(p.l_prime) && p.l_prime >= p.l);
    }

    #[test]
    fn invariants_hold_over_domain() {
        for k in MIN_K..=MAX_K {
            let p = ParameterSet::new(k).unwrap();
            assert!(p.x * (p.x - 1) >= 2 * k);
            assert!(p.s >= k.div_ceil(100) + p.x && is_prime(p.s));
            assert!(choose(p.h, p.h_prime) >= (k + p.s) as u64);
            assert!(p.h == 1 || choose(p.h - 1, ceil_half(p.h - 1)) < (k + p.s) as u64);
            assert_eq!(p.h_prime, p.h.div_ceil(2));
            assert_eq!(p.l, k + p.s + p.h);
            assert!(p.l_prime >= p.l && is_prime(p.l_prime));
        }
    }

    #[test]
    fn display_lists_every_field() {
        let p = ParameterSet::with_systematic_index(10, 7).unwrap();
        let text = p.to_string();
        assert!(text.starts_with("k=10 "));
        assert!(text.ends_with(" j=7"));
    }
}
