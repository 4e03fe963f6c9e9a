//! Systematic Reed-Solomon encoding
//!
//! The generator polynomial of degree `d` is
//! `(x - α^b)(x - α^(b+1))...(x - α^(b+d-1))` where `b` is the field's
//! generator base. Generators are cached by degree and grown incrementally,
//! so building degree 30 after degree 20 costs ten multiplications.
//!
//! The correction suffix holds the negated remainder of `data(x)·x^e`
//! divided by the generator, which makes every codeword a multiple of the
//! generator in both field flavors (negation is the identity in GF(2^m)).

use super::error::{RsError, RsResult};
use super::galois::GaloisField;
use super::polynomial::Polynomial;
use log::debug;
use std::sync::{Mutex, PoisonError};

pub struct ReedSolomonEncoder<'f> {
    field: &'f GaloisField,
    // Append-only: index d holds the generator of degree d
    cached_generators: Mutex<Vec<Polynomial<'f>>>,
}

impl<'f> ReedSolomonEncoder<'f> {
    pub fn new(field: &'f GaloisField) -> Self {
        Self {
            field,
            cached_generators: Mutex::new(vec![Polynomial::one(field)]),
        }
    }

    pub fn field(&self) -> &'f GaloisField {
        self.field
    }

    /// Generator polynomial of the given degree, building any missing degrees
    pub fn generator(&self, degree: usize) -> Polynomial<'f> {
        // A poisoned cache still only holds fully built generators
        let mut cache = self
            .cached_generators
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if degree >= cache.len() {
            debug!(
                "Growing generator cache for {} from degree {} to {}",
                self.field,
                cache.len() - 1,
                degree
            );
            let base = self.field.generator_base() as usize;
            for d in cache.len()..=degree {
                let root = self.field.exp(d - 1 + base);
                let factor = Polynomial::new(self.field, &[1, self.field.negate(root)]);
                let next = cache[d - 1].multiply(&factor);
                cache.push(next);
            }
        }

        cache[degree].clone()
    }

    /// Number of generators currently cached, including the degree-0 generator
    pub fn cached_degrees(&self) -> usize {
        self.cached_generators
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Fill the last `num_correction_words` entries of `block` with correction codewords
    ///
    /// Only the leading `block.len() - num_correction_words` data codewords are
    /// read; the suffix is overwritten.
    pub fn encode(&self, block: &mut [u16], num_correction_words: usize) -> RsResult<()> {
        check_block(self.field, block.len(), num_correction_words)?;
        let data_len = block.len() - num_correction_words;
        check_codewords(self.field, &block[..data_len])?;

        let generator = self.generator(num_correction_words);
        let info = Polynomial::new(self.field, &block[..data_len])
            .multiply_by_monomial(num_correction_words, 1);
        let (_, remainder) = info.divide(&generator);

        let coefficients = remainder.coefficients();
        let zero_padding = num_correction_words - coefficients.len();
        let (padding, suffix) = block[data_len..].split_at_mut(zero_padding);
        padding.fill(0);
        for (slot, &c) in suffix.iter_mut().zip(coefficients) {
            *slot = self.field.negate(c);
        }

        Ok(())
    }

    /// Encode `data` into a newly allocated block with the correction suffix appended
    pub fn encode_to_vec(&self, data: &[u16], num_correction_words: usize) -> RsResult<Vec<u16>> {
        let mut block = Vec::with_capacity(data.len() + num_correction_words);
        block.extend_from_slice(data);
        block.resize(data.len() + num_correction_words, 0);
        self.encode(&mut block, num_correction_words)?;
        Ok(block)
    }
}

/// Validate block dimensions shared by encoding and decoding
pub(crate) fn check_block(
    field: &GaloisField,
    block_len: usize,
    num_correction_words: usize,
) -> RsResult<()> {
    if num_correction_words == 0 {
        return Err(RsError::NoCorrectionWords);
    }
    if block_len <= num_correction_words {
        return Err(RsError::NoDataWords {
            block_len,
            num_correction_words,
        });
    }
    if block_len > field.order() {
        return Err(RsError::BlockTooLong {
            len: block_len,
            max: field.order(),
        });
    }
    Ok(())
}

/// Ensure every codeword is an element of `field`
pub(crate) fn check_codewords(field: &GaloisField, codewords: &[u16]) -> RsResult<()> {
    match codewords.iter().position(|&c| !field.contains(c)) {
        Some(position) => Err(RsError::CodewordOutOfRange {
            position,
            value: codewords[position],
            size: field.size(),
        }),
        None => Ok(()),
    }
}
