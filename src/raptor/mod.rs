//! RFC 5053 Raptor (R10) systematic fountain code.
//!
//! # Architecture
//!
//! ```text
//! k ──► ParameterSet ──► TripleGenerator ──► MatrixBuilder ──► A, D
//!        (numbers,        (rand, degree)          (gray)        │
//!         systematic)                                           ▼
//!                                           InactivationScheduler
//!                                                               │
//!                                                           Schedule
//!                                                               │
//!                                                               ▼
//!                      LtEncoder ◄── IntermediateSymbolResolver
//!                          │
//!                          ▼
//!                 Encoder / Decoder (codec)
//! ```
//!
//! All arithmetic is over GF(2): rows of `A` are [`bitmatrix::BitRow`]s and
//! symbol addition is byte-wise XOR.

pub mod bitmatrix;
pub mod codec;
pub mod degree;
pub mod gray;
pub mod inactivation;
mod indices;
pub mod lt;
pub mod matrix;
pub mod numbers;
pub mod params;
pub mod rand;
pub mod resolver;
pub mod schedule;
pub mod symbol;
pub mod systematic;
pub mod triple;

pub use bitmatrix::{BitMatrix, BitRow};
pub use codec::{DecodeOutput, Decoder, Encoder};
pub use inactivation::{InactivationScheduler, ScheduleStats};
pub use lt::{LtEncoder, LtStream};
pub use matrix::MatrixBuilder;
pub use params::ParameterSet;
pub use resolver::{solve_dense, IntermediateSymbolResolver};
pub use schedule::Schedule;
pub use symbol::{EncodingSymbol, Symbol};
pub use triple::{Triple, TripleGenerator};
