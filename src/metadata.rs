//! Self-describing symbol header.
//!
//! Every framed symbol starts with a fixed 42-byte big-endian header:
//!
//! ```text
//! offset  size  field
//!      0     4  esi       encoding symbol id
//!      4     2  k         source symbols in the block
//!      6     4  padding   zero bytes appended to the blob before encoding
//!     10    32  digest    SHA-256 of the payload
//! ```
//!
//! The payload follows immediately.

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Encoded header length in bytes.
pub const HEADER_LEN: usize = 4 + 2 + 4 + DIGEST_LEN;

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 32;

/// Header carried in front of every framed symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolHeader {
    /// Encoding symbol id.
    pub esi: u32,
    /// Source symbols in the block.
    pub k: u16,
    /// Padding bytes appended before encoding.
    pub padding: u32,
    /// SHA-256 of the payload.
    pub digest: [u8; DIGEST_LEN],
}

impl SymbolHeader {
    /// Header for `payload`, with its digest computed.
    #[must_use]
    pub fn for_symbol(esi: u32, k: u16, padding: u32, payload: &[u8]) -> Self {
        Self {
            esi,
            k,
            padding,
            digest: digest(payload),
        }
    }

    /// Big-endian wire form.
    #[must_use]
    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        buf[0..4].copy_from_slice(&self.esi.to_be_bytes());
        buf[4..6].copy_from_slice(&self.k.to_be_bytes());
        buf[6..10].copy_from_slice(&self.padding.to_be_bytes());
        buf[10..].copy_from_slice(&self.digest);
        buf
    }

    /// Header followed by `payload`.
    #[must_use]
    pub fn frame(&self, payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
        out.extend_from_slice(&self.encode());
        out.extend_from_slice(payload);
        out
    }

    /// Splits `data` into its header and the payload that follows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedHeader`] if `data` is shorter than
    /// [`HEADER_LEN`].
    pub fn decode(data: &[u8]) -> Result<(Self, &[u8])> {
        if data.len() < HEADER_LEN {
            return Err(Error::MalformedHeader {
                reason: "frame shorter than header",
            });
        }
        let (head, payload) = data.split_at(HEADER_LEN);
        let header = Self {
            esi: u32::from_be_bytes(be(&head[0..4])?),
            k: u16::from_be_bytes(be(&head[4..6])?),
            padding: u32::from_be_bytes(be(&head[6..10])?),
            digest: be(&head[10..])?,
        };
        Ok((header, payload))
    }

    /// Checks `payload` against the digest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptSymbol`] on mismatch.
    pub fn verify(&self, payload: &[u8]) -> Result<()> {
        if digest(payload) == self.digest {
            Ok(())
        } else {
            Err(Error::CorruptSymbol { esi: self.esi })
        }
    }
}

fn be<const N: usize>(bytes: &[u8]) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| Error::MalformedHeader {
        reason: "field width mismatch",
    })
}

fn digest(payload: &[u8]) -> [u8; DIGEST_LEN] {
    Sha256::digest(payload).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_layout() {
        let header = SymbolHeader::for_symbol(0x0102_0304, 10, 7, b"payload");
        let bytes = header.encode();
        assert_eq!(bytes.len(), 42);
        assert_eq!(&bytes[0..4], &[1, 2, 3, 4]);
        assert_eq!(&bytes[4..6], &[0, 10]);
        assert_eq!(&bytes[6..10], &[0, 0, 0, 7]);
        assert_eq!(&bytes[10..], &header.digest);
    }

    #[test]
    fn decode_splits_payload() {
        let header = SymbolHeader::for_symbol(99, 4, 0, b"abc");
        let framed = header.frame(b"abc");
        let (parsed, payload) = SymbolHeader::decode(&framed).unwrap();
        assert_eq!(parsed, header);
        assert_eq!(payload, b"abc");
        parsed.verify(payload).unwrap();
    }

    #[test]
    fn truncated_frame_is_malformed() {
        let framed = SymbolHeader::for_symbol(1, 4, 0, &[]).encode();
        assert!(matches!(
            SymbolHeader::decode(&framed[..HEADER_LEN - 1]),
            Err(Error::MalformedHeader { .. })
        ));
    }

    #[test]
    fn flipped_bit_is_detected() {
        let mut payload = vec![0x5A; 16];
        let header = SymbolHeader::for_symbol(3, 4, 0, &payload);
        payload[9] ^= 0x01;
        assert_eq!(header.verify(&payload), Err(Error::CorruptSymbol { esi: 3 }));
    }
}
