//! Source blocks and in-memory chunking.
//!
//! A [`Chunker`] cuts a byte buffer into [`SourceBlock`]s of exactly `k`
//! symbols of `symbol_size` bytes each. The final block is zero-padded and
//! records how many padding bytes it carries so that
//! [`SourceBlock::into_bytes`] can strip them after decoding.

use crate::error::{Error, Result};
use crate::raptor::params::{MAX_K, MIN_K};
use crate::raptor::symbol::Symbol;

/// One block of source symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBlock {
    /// Position of the block in its stream, from 0.
    pub id: u64,
    /// Number of source symbols once padded.
    pub k: usize,
    /// Length of every symbol once padded.
    pub symbol_size: usize,
    /// Zero bytes appended by [`SourceBlock::pad`].
    pub padding: usize,
    /// Symbols in id order.
    pub symbols: Vec<Symbol>,
}

impl SourceBlock {
    /// Empty block expecting `k` symbols of `symbol_size` bytes.
    #[must_use]
    pub fn new(id: u64, k: usize, symbol_size: usize) -> Self {
        Self {
            id,
            k,
            symbol_size,
            padding: 0,
            symbols: Vec::with_capacity(k),
        }
    }

    /// Zero-extends short symbols and appends zero symbols up to `k`.
    ///
    /// Every byte added is counted in `padding`. Padding an already full
    /// block is a no-op.
    pub fn pad(&mut self) {
        for symbol in &mut self.symbols {
            let short = self.symbol_size.saturating_sub(symbol.len());
            if short > 0 {
                let mut bytes = std::mem::take(symbol).into_bytes();
                bytes.resize(self.symbol_size, 0);
                *symbol = Symbol::new(bytes);
                self.padding += short;
            }
        }
        while self.symbols.len() < self.k {
            self.symbols.push(Symbol::zeros(self.symbol_size));
            self.padding += self.symbol_size;
        }
    }

    /// Returns true once the block holds `k` symbols of full length.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.symbols.len() == self.k && self.symbols.iter().all(|s| s.len() == self.symbol_size)
    }

    /// Concatenates the symbols and drops the trailing padding.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.k * self.symbol_size);
        for symbol in self.symbols {
            out.extend_from_slice(symbol.as_bytes());
        }
        out.truncate(out.len().saturating_sub(self.padding));
        out
    }
}

/// Splits a byte buffer into padded source blocks.
#[derive(Debug, Clone)]
pub struct Chunker<'a> {
    data: &'a [u8],
    k: usize,
    symbol_size: usize,
    position: usize,
    next_id: u64,
}

impl<'a> Chunker<'a> {
    /// Chunker over `data` producing blocks of `k` symbols.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parameter`] if `k` is outside `[4, 8192]` or
    /// `symbol_size` is zero.
    pub fn new(data: &'a [u8], k: usize, symbol_size: usize) -> Result<Self> {
        if !(MIN_K..=MAX_K).contains(&k) {
            return Err(Error::Parameter {
                k,
                reason: "source symbol count must lie in [4, 8192]",
            });
        }
        if symbol_size == 0 {
            return Err(Error::Parameter {
                k,
                reason: "symbol size must be positive",
            });
        }
        Ok(Self {
            data,
            k,
            symbol_size,
            position: 0,
            next_id: 0,
        })
    }

    /// Bytes covered by one block.
    #[must_use]
    pub fn block_size(&self) -> usize {
        self.k * self.symbol_size
    }

    /// Number of blocks the whole buffer yields.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.data.len().div_ceil(self.block_size())
    }

    /// Next padded block, or `None` once the buffer is exhausted.
    pub fn next_block(&mut self) -> Option<SourceBlock> {
        if self.position >= self.data.len() {
            return None;
        }
        let end = self.data.len().min(self.position + self.block_size());
        let mut block = SourceBlock::new(self.next_id, self.k, self.symbol_size);
        block.symbols.extend(
            self.data[self.position..end]
                .chunks(self.symbol_size)
                .map(Symbol::from),
        );
        block.pad();

        self.position = end;
        self.next_id += 1;
        Some(block)
    }
}

impl Iterator for Chunker<'_> {
    type Item = SourceBlock;

    fn next(&mut self) -> Option<SourceBlock> {
        self.next_block()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_fit_has_no_padding() {
        let data: Vec<u8> = (0..64).collect();
        let blocks: Vec<_> = Chunker::new(&data, 4, 8).unwrap().collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| b.padding == 0 && b.is_full()));
        assert_eq!(blocks[1].id, 1);
        assert_eq!(blocks[1].symbols[0].as_bytes(), &data[32..40]);
    }

    #[test]
    fn last_block_is_padded() {
        let data = vec![0xAB; 45];
        let mut chunker = Chunker::new(&data, 4, 8).unwrap();
        assert_eq!(chunker.block_count(), 2);
        let _ = chunker.next_block().unwrap();
        let last = chunker.next_block().unwrap();
        // 13 bytes remain: one full symbol, one 5-byte symbol, two empty.
        assert_eq!(last.padding, 3 + 16);
        assert!(last.is_full());
        assert_eq!(last.symbols[1].as_bytes(), &[0xAB, 0xAB, 0xAB, 0xAB, 0xAB, 0, 0, 0]);
        assert!(chunker.next_block().is_none());
    }

    #[test]
    fn blocks_concatenate_to_input() {
        let data: Vec<u8> = (0..1000u32).map(|i| (i * 7 % 251) as u8).collect();
        let rebuilt: Vec<u8> = Chunker::new(&data, 5, 16)
            .unwrap()
            .flat_map(SourceBlock::into_bytes)
            .collect();
        assert_eq!(rebuilt, data);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(Chunker::new(&[], 4, 8).unwrap().count(), 0);
    }

    #[test]
    fn rejects_bad_shape() {
        assert!(matches!(Chunker::new(&[1], 3, 8), Err(Error::Parameter { .. })));
        assert!(matches!(Chunker::new(&[1], 4, 0), Err(Error::Parameter { .. })));
    }

    #[test]
    fn pad_is_idempotent() {
        let mut block = SourceBlock::new(0, 4, 4);
        block.symbols.push(Symbol::new(vec![1, 2]));
        block.pad();
        let once = block.clone();
        block.pad();
        assert_eq!(block, once);
        assert_eq!(block.padding, 2 + 12);
        assert_eq!(block.into_bytes(), vec![1, 2]);
    }
}
