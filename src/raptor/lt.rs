//! LT encoding from resolved intermediate symbols (RFC 5053 Section 5.4.4.3).

use crate::error::{Error, Result};
use crate::raptor::matrix::uniform_size;
use crate::raptor::params::ParameterSet;
use crate::raptor::symbol::{EncodingSymbol, Symbol};
use crate::raptor::triple::TripleGenerator;

/// Produces encoding symbols by id from a fixed set of intermediate symbols.
///
/// Ids below `k` reproduce the source symbols; any larger id yields a
/// repair symbol. Calls are pure and may be made in any order.
#[derive(Debug, Clone)]
pub struct LtEncoder {
    params: ParameterSet,
    triples: TripleGenerator,
    intermediate: Vec<Symbol>,
    symbol_size: usize,
}

impl LtEncoder {
    /// Wraps `intermediate`, which must hold exactly `L` symbols.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimension`] for the wrong number of symbols and
    /// [`Error::SymbolSizeMismatch`] if they differ in length.
    pub fn new(params: &ParameterSet, intermediate: Vec<Symbol>) -> Result<Self> {
        if intermediate.len() != params.l {
            return Err(Error::dimension(
                "intermediate symbols",
                params.l,
                intermediate.len(),
            ));
        }
        let symbol_size = uniform_size(&intermediate)?;
        Ok(Self {
            params: *params,
            triples: TripleGenerator::new(params),
            intermediate,
            symbol_size,
        })
    }

    /// Encoding symbol `esi`.
    #[must_use]
    pub fn symbol(&self, esi: u32) -> Symbol {
        let mut walk = self.triples.walk(esi);
        let mut out = walk
            .next()
            .map_or_else(|| Symbol::zeros(self.symbol_size), |b| self.intermediate[b].clone());
        for b in walk {
            out.xor_assign(&self.intermediate[b]);
        }
        out
    }

    /// Encoding symbol `esi` paired with its id.
    #[must_use]
    pub fn encoding_symbol(&self, esi: u32) -> EncodingSymbol {
        EncodingSymbol {
            esi,
            symbol: self.symbol(esi),
        }
    }

    /// Endless stream of encoding symbols starting at id 0.
    #[must_use]
    pub fn stream(&self) -> LtStream<'_> {
        self.stream_from(0)
    }

    /// Stream of encoding symbols starting at `esi`.
    #[must_use]
    pub fn stream_from(&self, esi: u32) -> LtStream<'_> {
        LtStream {
            encoder: self,
            next: Some(esi),
        }
    }

    /// Source symbols, i.e. encoding symbols `0..k`.
    #[must_use]
    pub fn source_symbols(&self) -> Vec<Symbol> {
        self.stream().take(self.params.k).map(|s| s.symbol).collect()
    }

    /// The `L` intermediate symbols.
    #[must_use]
    pub fn intermediate(&self) -> &[Symbol] {
        &self.intermediate
    }

    /// Parameters in use.
    #[must_use]
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Symbol length in bytes.
    #[must_use]
    pub fn symbol_size(&self) -> usize {
        self.symbol_size
    }
}

/// Iterator returned by [`LtEncoder::stream`]; ends after id `u32::MAX`.
#[derive(Debug, Clone)]
pub struct LtStream<'a> {
    encoder: &'a LtEncoder,
    next: Option<u32>,
}

impl Iterator for LtStream<'_> {
    type Item = EncodingSymbol;

    fn next(&mut self) -> Option<EncodingSymbol> {
        let esi = self.next?;
        self.next = esi.checked_add(1);
        Some(self.encoder.encoding_symbol(esi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raptor::triple::LtWalk;

    fn encoder() -> LtEncoder {
        let params = ParameterSet::with_systematic_index(4, 0).unwrap();
        let intermediate = (0..params.l)
            .map(|i| Symbol::new(vec![1u8 << (i % 8), i as u8]))
            .collect();
        LtEncoder::new(&params, intermediate).unwrap()
    }

    #[test]
    fn symbol_is_xor_of_walk() {
        let enc = encoder();
        let p = *enc.params();
        let gen = TripleGenerator::new(&p);
        for esi in 0..100 {
            let mut expected = Symbol::zeros(2);
            for b in LtWalk::new(gen.triple(esi), p.l, p.l_prime) {
                expected.xor_assign(&enc.intermediate()[b]);
            }
            assert_eq!(enc.symbol(esi), expected, "esi {esi}");
        }
    }

    #[test]
    fn stream_yields_consecutive_ids() {
        let enc = encoder();
        let ids: Vec<u32> = enc.stream_from(7).take(3).map(|s| s.esi).collect();
        assert_eq!(ids, vec![7, 8, 9]);
        let tail: Vec<u32> = enc.stream_from(u32::MAX - 1).map(|s| s.esi).collect();
        assert_eq!(tail, vec![u32::MAX - 1, u32::MAX]);
    }

    #[test]
    fn rejects_wrong_symbol_count() {
        let params = ParameterSet::with_systematic_index(4, 0).unwrap();
        let err = LtEncoder::new(&params, vec![Symbol::zeros(1); 3]).unwrap_err();
        assert!(matches!(err, Error::Dimension { .. }));
    }
}
