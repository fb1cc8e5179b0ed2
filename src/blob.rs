//! One-shot codec for a byte blob.
//!
//! The blob is padded so it splits into `k` symbols whose length is a
//! multiple of 8, encoded, and emitted as frames of
//! `SymbolHeader || payload`. The decoder needs nothing but frames: `k` and
//! the padding travel in every header.

use crate::config::CodecConfig;
use crate::error::{Error, Result};
use crate::metadata::SymbolHeader;
use crate::raptor::codec::{Decoder, Encoder};
use crate::raptor::symbol::{EncodingSymbol, Symbol};
use crate::tracing_compat::debug;

/// Symbol lengths are rounded up to this many bytes.
pub const SYMBOL_ALIGN: usize = 8;

/// Encodes one blob into framed symbols.
#[derive(Debug, Clone)]
pub struct BlobEncoder {
    encoder: Encoder,
    k: u16,
    padding: u32,
    total: usize,
}

impl BlobEncoder {
    /// Pads and encodes `data` using `config.source_symbols` symbols.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parameter`] if `config.source_symbols` is outside
    /// `[4, 8192]`.
    pub fn new(data: &[u8], config: &CodecConfig) -> Result<Self> {
        let k = config.source_symbols;
        let k_wire = u16::try_from(k).map_err(|_| Error::Parameter {
            k,
            reason: "source symbol count does not fit the header",
        })?;
        let symbol_size = data.len().div_ceil(k.max(1)).next_multiple_of(SYMBOL_ALIGN);
        let padded_len = symbol_size * k;
        let padding = u32::try_from(padded_len - data.len()).map_err(|_| Error::Parameter {
            k,
            reason: "padding does not fit the header",
        })?;

        let mut padded = data.to_vec();
        padded.resize(padded_len, 0);
        let source = if symbol_size == 0 {
            vec![Symbol::default(); k]
        } else {
            padded.chunks(symbol_size).map(Symbol::from).collect()
        };

        debug!(k, symbol_size, padding, "encoding blob");
        Ok(Self {
            encoder: Encoder::new(k, source)?,
            k: k_wire,
            padding,
            total: config.total_symbols(),
        })
    }

    /// Frame for encoding symbol `esi`.
    #[must_use]
    pub fn frame(&self, esi: u32) -> Vec<u8> {
        let symbol = self.encoder.symbol(esi);
        SymbolHeader::for_symbol(esi, self.k, self.padding, symbol.as_bytes())
            .frame(symbol.as_bytes())
    }

    /// Frames for ids `0..k + repair_symbols`.
    pub fn frames(&self) -> impl Iterator<Item = Vec<u8>> + '_ {
        (0..self.total)
            .map_while(|esi| u32::try_from(esi).ok())
            .map(|esi| self.frame(esi))
    }

    /// Padding bytes appended to the blob.
    #[must_use]
    pub fn padding(&self) -> u32 {
        self.padding
    }

    /// Underlying encoder.
    #[must_use]
    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }
}

/// Recovers a blob from frames produced by [`BlobEncoder`].
#[derive(Debug, Clone, Copy)]
pub struct BlobDecoder {
    verify_digests: bool,
    expected_k: usize,
}

impl BlobDecoder {
    /// Decoder following `config.verify_digests`.
    #[must_use]
    pub fn new(config: &CodecConfig) -> Self {
        Self {
            verify_digests: config.verify_digests,
            expected_k: config.source_symbols,
        }
    }

    /// Parses `frames`, decodes, and strips the padding.
    ///
    /// With digest verification on, frames whose payload does not match
    /// their digest are dropped before decoding.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedHeader`] for a frame shorter than its header
    /// - [`Error::HeaderMismatch`] if frames disagree on `k` or padding
    /// - [`Error::InsufficientSymbols`] or [`Error::RankDeficiency`] if
    ///   the usable frames do not determine the blob
    pub fn decode<I>(&self, frames: I) -> Result<Vec<u8>>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut layout: Option<(u16, u32)> = None;
        let mut symbols = Vec::new();

        for frame in frames {
            let (header, payload) = SymbolHeader::decode(frame.as_ref())?;
            match layout {
                None => layout = Some((header.k, header.padding)),
                Some((k, _)) if k != header.k => return Err(Error::HeaderMismatch { field: "k" }),
                Some((_, padding)) if padding != header.padding => {
                    return Err(Error::HeaderMismatch { field: "padding" })
                }
                Some(_) => {}
            }
            if self.verify_digests && header.verify(payload).is_err() {
                debug!(esi = header.esi, "dropping corrupt frame");
                continue;
            }
            symbols.push(EncodingSymbol::new(header.esi, payload));
        }

        let Some((k, padding)) = layout else {
            return Err(Error::InsufficientSymbols {
                received: 0,
                required: self.expected_k,
            });
        };
        let output = Decoder::decode_symbols(usize::from(k), symbols)?;

        let mut data: Vec<u8> = output
            .source
            .into_iter()
            .flat_map(Symbol::into_bytes)
            .collect();
        let padding = padding as usize;
        if padding > data.len() {
            return Err(Error::MalformedHeader {
                reason: "padding exceeds block length",
            });
        }
        data.truncate(data.len() - padding);
        Ok(data)
    }
}
