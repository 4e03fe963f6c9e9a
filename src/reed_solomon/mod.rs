//! Reed-Solomon Error Correction Module
//!
//! This module provides the error-correction core shared by every barcode
//! family: finite fields (GF(2^m) for the matrix codes, Z_929 for PDF417),
//! polynomial algebra over them, a systematic encoder and a syndrome decoder
//! that handles unknown errors together with known erasures.
//!
//! Collaborators call into it to append correction codewords before layout,
//! or to repair a received block before high-level decoding.

pub mod batch;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod galois;
pub mod polynomial;
pub mod presets;

pub use batch::*;
pub use config::*;
pub use decoder::*;
pub use encoder::ReedSolomonEncoder;
pub use error::*;
pub use galois::*;
pub use polynomial::*;
pub use presets::*;
