//! Fixed-length symbol buffers.

use core::fmt;

/// A symbol: an owned byte buffer combined with other symbols by XOR.
///
/// All symbols taking part in one encode or decode call share one length.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Symbol {
    data: Vec<u8>,
}

impl Symbol {
    /// Wraps `data` as a symbol.
    #[inline]
    #[must_use]
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// An all-zero symbol of `len` bytes.
    #[inline]
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self { data: vec![0; len] }
    }

    /// Length in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true for a zero-length symbol.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if every byte is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }

    /// Symbol contents.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the symbol, returning its bytes.
    #[inline]
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// `self ^= other`, eight bytes at a time.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn xor_assign(&mut self, other: &Self) {
        assert_eq!(self.len(), other.len(), "symbol length mismatch");
        let mut dst = self.data.chunks_exact_mut(8);
        let mut src = other.data.chunks_exact(8);
        let mut a = [0u8; 8];
        let mut b = [0u8; 8];
        for (d, s) in dst.by_ref().zip(src.by_ref()) {
            a.copy_from_slice(d);
            b.copy_from_slice(s);
            d.copy_from_slice(&(u64::from_ne_bytes(a) ^ u64::from_ne_bytes(b)).to_ne_bytes());
        }
        for (d, s) in dst.into_remainder().iter_mut().zip(src.remainder()) {
            *d ^= s;
        }
    }
}

/// An encoding symbol together with its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingSymbol {
    /// Encoding symbol id. Ids below `k` are source symbols.
    pub esi: u32,
    /// Symbol contents.
    pub symbol: Symbol,
}

impl EncodingSymbol {
    /// Pairs `symbol` with `esi`.
    #[must_use]
    pub fn new(esi: u32, symbol: impl Into<Symbol>) -> Self {
        Self {
            esi,
            symbol: symbol.into(),
        }
    }
}

/// XORs `symbols[source]` into `symbols[target]`.
///
/// # Panics
///
/// Panics if `source == target` or either index is out of bounds.
pub(crate) fn xor_within(symbols: &mut [Symbol], target: usize, source: usize) {
    assert_ne!(target, source, "xor of a symbol with itself");
    if target < source {
        let (head, tail) = symbols.split_at_mut(source);
        head[target].xor_assign(&tail[0]);
    } else {
        let (head, tail) = symbols.split_at_mut(target);
        tail[0].xor_assign(&head[source]);
    }
}

impl From<Vec<u8>> for Symbol {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for Symbol {
    fn from(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }
}

impl AsRef<[u8]> for Symbol {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const PREVIEW: usize = 8;
        write!(f, "Symbol({} bytes: ", self.data.len())?;
        for byte in self.data.iter().take(PREVIEW) {
            write!(f, "{byte:02x}")?;
        }
        if self.data.len() > PREVIEW {
            f.write_str("..")?;
        }
        f.write_str(")")
    }
}
