//! Systematic encoder and decoder.
//!
//! # Architecture
//!
//! ```text
//! known (esi, symbol) pairs
//!     │
//!     ▼
//! MatrixBuilder ──► A ──► InactivationScheduler ──► Schedule
//!     │                                               │
//!     └──────────► D ──► IntermediateSymbolResolver ◄─┘
//!                              │
//!                              ▼
//!                   L intermediate symbols ──► LtEncoder(esi)
//! ```
//!
//! The encoder's known symbols are the source symbols with ids `0..k`,
//! whose schedule depends only on `k` and is shared process-wide. The
//! decoder runs the same pipeline over whatever ids it received.

use crate::error::{Error, Result};
use crate::raptor::inactivation::{InactivationScheduler, ScheduleStats};
use crate::raptor::lt::LtEncoder;
use crate::raptor::matrix::{uniform_size, MatrixBuilder};
use crate::raptor::params::ParameterSet;
use crate::raptor::resolver::{solve_dense, IntermediateSymbolResolver};
use crate::raptor::symbol::{EncodingSymbol, Symbol};
use crate::raptor::systematic::{source_ids, systematic_schedule};
use crate::tracing_compat::{debug, debug_span};

// ============================================================================
// Encoder
// ============================================================================

/// Systematic encoder for one source block.
#[derive(Debug, Clone)]
pub struct Encoder {
    lt: LtEncoder,
    cursor: Option<u32>,
}

impl Encoder {
    /// Encodes `source`, which must hold exactly `k` equal-length symbols.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parameter`] for `k` outside `[4, 8192]`,
    /// [`Error::Dimension`] if `source.len() != k` and
    /// [`Error::SymbolSizeMismatch`] for unequal symbol lengths.
    pub fn new(k: usize, source: Vec<Symbol>) -> Result<Self> {
        Self::with_params(&ParameterSet::new(k)?, source)
    }

    /// Encodes `source` under explicit parameters.
    ///
    /// # Errors
    ///
    /// As [`Encoder::new`], plus [`Error::RankDeficiency`] if the
    /// systematic index of `params` does not admit a systematic encoding.
    pub fn with_params(params: &ParameterSet, source: Vec<Symbol>) -> Result<Self> {
        let span = debug_span!("encode", k = params.k);
        let _guard = span.enter();

        let size = check_source(params, &source)?;
        let entry = systematic_schedule(params)?;
        let d = MatrixBuilder::new(params).data_matrix(size, source);
        let intermediate = IntermediateSymbolResolver::new(params).resolve(&entry.schedule, d)?;
        debug!(symbol_size = size, xors = entry.schedule.xors().len(), "encoder ready");
        Ok(Self {
            lt: LtEncoder::new(params, intermediate)?,
            cursor: Some(0),
        })
    }

    /// Encodes `source` through the dense reference path.
    ///
    /// # Errors
    ///
    /// As [`Encoder::new`].
    pub fn new_dense(k: usize, source: Vec<Symbol>) -> Result<Self> {
        let params = ParameterSet::new(k)?;
        let size = check_source(&params, &source)?;
        let builder = MatrixBuilder::new(&params);
        let a = builder.constraint_matrix(&source_ids(k));
        let d = builder.data_matrix(size, source);
        let intermediate = solve_dense(&params, &a, &d)?;
        Ok(Self {
            lt: LtEncoder::new(&params, intermediate)?,
            cursor: Some(0),
        })
    }

    /// Encoding symbol `esi`.
    #[must_use]
    pub fn symbol(&self, esi: u32) -> Symbol {
        self.lt.symbol(esi)
    }

    /// Next encoding symbol, advancing the id cursor from 0.
    ///
    /// Returns `None` once id `u32::MAX` has been emitted.
    pub fn next_symbol(&mut self) -> Option<EncodingSymbol> {
        let esi = self.cursor?;
        self.cursor = esi.checked_add(1);
        Some(self.lt.encoding_symbol(esi))
    }

    /// The next `count` encoding symbols from the cursor.
    pub fn emit(&mut self, count: usize) -> Vec<EncodingSymbol> {
        (0..count).map_while(|_| self.next_symbol()).collect()
    }

    /// `count` repair symbols, ids `k..k + count`. Does not move the cursor.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn repair(&self, count: usize) -> Vec<EncodingSymbol> {
        self.lt
            .stream_from(self.lt.params().k as u32)
            .take(count)
            .collect()
    }

    /// Parameters in use.
    #[must_use]
    pub fn params(&self) -> &ParameterSet {
        self.lt.params()
    }

    /// Underlying LT encoder.
    #[must_use]
    pub fn lt(&self) -> &LtEncoder {
        &self.lt
    }

    /// Consumes the encoder, returning its LT encoder.
    #[must_use]
    pub fn into_lt(self) -> LtEncoder {
        self.lt
    }
}

fn check_source(params: &ParameterSet, source: &[Symbol]) -> Result<usize> {
    if source.len() != params.k {
        return Err(Error::dimension("source symbols", params.k, source.len()));
    }
    uniform_size(source)
}

// ============================================================================
// Decoder
// ============================================================================

/// Result of a successful decode.
#[derive(Debug, Clone)]
pub struct DecodeOutput {
    /// Recovered source symbols, ids `0..k`.
    pub source: Vec<Symbol>,
    /// Encoder over the recovered intermediate symbols.
    pub lt: LtEncoder,
    /// Statistics of the elimination.
    pub stats: ScheduleStats,
}

/// Collects received symbols and recovers the source block.
#[derive(Debug, Clone)]
pub struct Decoder {
    params: ParameterSet,
    received: Vec<EncodingSymbol>,
}

impl Decoder {
    /// Decoder for blocks of `k` source symbols.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parameter`] for `k` outside `[4, 8192]`.
    pub fn new(k: usize) -> Result<Self> {
        Ok(Self::with_params(&ParameterSet::new(k)?))
    }

    /// Decoder using explicit parameters; they must match the encoder's.
    #[must_use]
    pub fn with_params(params: &ParameterSet) -> Self {
        Self {
            params: *params,
            received: Vec::new(),
        }
    }

    /// One-shot decode of `symbols`.
    ///
    /// # Errors
    ///
    /// As [`Decoder::new`] and [`Decoder::decode`].
    pub fn decode_symbols(k: usize, symbols: Vec<EncodingSymbol>) -> Result<DecodeOutput> {
        let mut decoder = Self::new(k)?;
        decoder.received = symbols;
        decoder.decode()
    }

    /// Adds a received symbol; returns whether at least `k` are now held.
    pub fn push(&mut self, symbol: EncodingSymbol) -> bool {
        self.received.push(symbol);
        self.can_decode()
    }

    /// Returns true once at least `k` symbols are held.
    #[must_use]
    pub fn can_decode(&self) -> bool {
        self.received.len() >= self.params.k
    }

    /// Symbols held so far, in arrival order.
    #[must_use]
    pub fn received(&self) -> &[EncodingSymbol] {
        &self.received
    }

    /// Parameters in use.
    #[must_use]
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Recovers the source block from the symbols held.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientSymbols`] with fewer than `k` symbols,
    /// [`Error::RankDeficiency`] if the symbols do not determine the block
    /// (duplicate or dependent ids) and [`Error::SymbolSizeMismatch`] for
    /// unequal symbol lengths.
    pub fn decode(&self) -> Result<DecodeOutput> {
        let params = &self.params;
        self.check_count()?;
        let span = debug_span!("decode", k = params.k, received = self.received.len());
        let _guard = span.enter();

        let builder = MatrixBuilder::new(params);
        let size = uniform_size(self.received.iter().map(|s| &s.symbol))?;
        let d = builder.data_matrix(size, self.received.iter().map(|s| s.symbol.clone()));
        let resolver = IntermediateSymbolResolver::new(params);

        let (intermediate, stats) = if self.is_source_set() {
            let entry = systematic_schedule(params)?;
            (resolver.resolve(&entry.schedule, d)?, entry.stats)
        } else {
            let ids: Vec<u32> = self.received.iter().map(|s| s.esi).collect();
            let a = builder.constraint_matrix(&ids);
            let (schedule, stats) = InactivationScheduler::new(params).run(a)?;
            (resolver.resolve(&schedule, d)?, stats)
        };

        let encoder = LtEncoder::new(params, intermediate)?;
        debug!(%stats, "decoded source block");
        Ok(DecodeOutput {
            source: encoder.source_symbols(),
            lt: encoder,
            stats,
        })
    }

    /// Recovers the source block through the dense reference path.
    ///
    /// Requires exactly `k` symbols.
    ///
    /// # Errors
    ///
    /// As [`Decoder::decode`], plus [`Error::Dimension`] when more than `k`
    /// symbols are held.
    pub fn decode_dense(&self) -> Result<Vec<Symbol>> {
        self.check_count()?;
        let builder = MatrixBuilder::new(&self.params);
        let ids: Vec<u32> = self.received.iter().map(|s| s.esi).collect();
        let size = uniform_size(self.received.iter().map(|s| &s.symbol))?;
        let a = builder.constraint_matrix(&ids);
        let d = builder.data_matrix(size, self.received.iter().map(|s| s.symbol.clone()));
        let intermediate = solve_dense(&self.params, &a, &d)?;
        Ok(LtEncoder::new(&self.params, intermediate)?.source_symbols())
    }

    fn check_count(&self) -> Result<()> {
        if self.can_decode() {
            Ok(())
        } else {
            Err(Error::InsufficientSymbols {
                received: self.received.len(),
                required: self.params.k,
            })
        }
    }

    /// True when the held ids are exactly `0..k` in order.
    fn is_source_set(&self) -> bool {
        self.received.len() == self.params.k
            && self
                .received
                .iter()
                .enumerate()
                .all(|(i, s)| s.esi as usize == i)
    }
}

// ============================================================================
// Unit tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_patterned_source(k: usize, symbol_size: usize) -> Vec<Symbol> {
        (0..k)
            .map(|i| {
                Symbol::new(
                    (0..symbol_size)
                        .map(|j| ((i * 37 + j * 13 + 7) % 256) as u8)
                        .collect(),
                )
            })
            .collect()
    }

    #[test]
    fn systematic_symbols_reproduce_source() {
        let source = make_patterned_source(10, 32);
        let mut encoder = Encoder::new(10, source.clone()).unwrap();
        let emitted = encoder.emit(10);
        for (i, sym) in emitted.iter().enumerate() {
            assert_eq!(sym.esi as usize, i);
            assert_eq!(sym.symbol, source[i]);
        }
        assert_eq!(encoder.next_symbol().map(|s| s.esi), Some(10));
    }

    #[test]
    fn dense_and_scheduled_encoders_agree() {
        let source = make_patterned_source(16, 24);
        let fast = Encoder::new(16, source.clone()).unwrap();
        let dense = Encoder::new_dense(16, source).unwrap();
        assert_eq!(fast.lt().intermediate(), dense.lt().intermediate());
    }

    #[test]
    fn repair_only_decode() {
        let source = make_patterned_source(10, 16);
        let encoder = Encoder::new(10, source.clone()).unwrap();
        let mut decoder = Decoder::new(10).unwrap();
        let mut ready = false;
        for sym in encoder.lt().stream_from(10).take(20) {
            ready = decoder.push(sym);
            if ready && decoder.decode().is_ok() {
                break;
            }
        }
        assert!(ready);
        assert_eq!(decoder.decode().unwrap().source, source);
    }

    #[test]
    fn source_set_reuses_cached_schedule() {
        let source = make_patterned_source(6, 8);
        let encoder = Encoder::new(6, source.clone()).unwrap();
        let received = encoder.lt().stream().take(6).collect();
        let out = Decoder::decode_symbols(6, received).unwrap();
        assert_eq!(out.source, source);
    }

    #[test]
    fn too_few_symbols() {
        let encoder = Encoder::new(5, make_patterned_source(5, 4)).unwrap();
        let received = encoder.lt().stream().take(4).collect();
        let err = Decoder::decode_symbols(5, received).unwrap_err();
        assert_eq!(
            err,
            Error::InsufficientSymbols {
                received: 4,
                required: 5
            }
        );
    }

    #[test]
    fn encoder_rejects_bad_source() {
        assert!(matches!(
            Encoder::new(5, make_patterned_source(4, 4)),
            Err(Error::Dimension { .. })
        ));
        let mut uneven = make_patterned_source(5, 4);
        uneven[3] = Symbol::zeros(5);
        assert!(matches!(
            Encoder::new(5, uneven),
            Err(Error::SymbolSizeMismatch { .. })
        ));
        assert!(matches!(
            Encoder::new(2, Vec::new()),
            Err(Error::Parameter { .. })
        ));
    }

    #[test]
    fn repair_does_not_move_cursor() {
        let mut encoder = Encoder::new(4, make_patterned_source(4, 8)).unwrap();
        let repair = encoder.repair(3);
        assert_eq!(repair.iter().map(|s| s.esi).collect::<Vec<_>>(), vec![4, 5, 6]);
        assert_eq!(encoder.next_symbol().map(|s| s.esi), Some(0));
    }
}
