//! raptor-r10: the RFC 5053 Raptor systematic fountain code.
//!
//! # Overview
//!
//! A source block of `k` equal-length symbols is expanded into `L`
//! intermediate symbols by an LDPC + Half precode; encoding symbols are XORs
//! of intermediate symbols chosen by an LT degree distribution. Ids `0..k`
//! reproduce the source symbols (the code is systematic), and a receiver
//! holding any `k` or slightly more distinct encoding symbols recovers the
//! block.
//!
//! Decoding uses inactivation elimination over GF(2): the elimination is
//! recorded once as a [`raptor::Schedule`] of row XORs and replayed over the
//! symbol data, so the cost on symbol bytes is one XOR per recorded step.
//!
//! # Module Structure
//!
//! - [`raptor`]: parameters, matrices, elimination, encoder and decoder
//! - [`block`]: splitting byte buffers into padded source blocks
//! - [`metadata`]: per-symbol header with a SHA-256 payload digest
//! - [`blob`]: one-shot byte-blob codec over framed symbols
//! - [`config`]: codec configuration with file and environment layering
//! - [`error`]: error types
//! - [`tracing_compat`]: logging macros, backed by `tracing` when enabled
//!
//! # Example
//!
//! ```
//! use raptor_r10::{Decoder, Encoder, Symbol};
//!
//! let source: Vec<Symbol> = (0..8u8).map(|i| Symbol::new(vec![i; 16])).collect();
//! let encoder = Encoder::new(8, source.clone())?;
//!
//! // Lose the first half of the source symbols, use repair symbols instead.
//! let mut decoder = Decoder::new(8)?;
//! let mut stream = encoder.lt().stream().skip(4);
//! let output = loop {
//!     if decoder.push(stream.next().expect("endless stream")) {
//!         if let Ok(output) = decoder.decode() {
//!             break output;
//!         }
//!     }
//! };
//! assert_eq!(output.source, source);
//! # Ok::<(), raptor_r10::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::many_single_char_names)]

pub mod blob;
pub mod block;
pub mod config;
pub mod error;
pub mod metadata;
pub mod raptor;
pub mod tracing_compat;

pub use blob::{BlobDecoder, BlobEncoder};
pub use block::{Chunker, SourceBlock};
pub use config::{CodecConfig, ConfigError, ConfigLoader};
pub use error::{Error, ErrorCategory, Recoverability, Result};
pub use metadata::SymbolHeader;
pub use raptor::{DecodeOutput, Decoder, Encoder, EncodingSymbol, ParameterSet, Symbol};
