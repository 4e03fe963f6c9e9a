//! Reed-Solomon error correction for matrix and stacked barcodes
//!
//! ```
//! use barcode_ecc::FieldPreset;
//!
//! let preset = FieldPreset::QrCode;
//! let mut block = preset.encoder().encode_to_vec(&[32, 91, 11, 120], 7).unwrap();
//! block[1] = 0;
//! assert_eq!(preset.decoder().decode(&mut block, 7, &[]), Ok(1));
//! assert_eq!(&block[..4], &[32, 91, 11, 120]);
//! ```

pub mod args;
pub mod reed_solomon;

pub use reed_solomon::*;
