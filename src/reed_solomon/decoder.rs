//! Syndrome-based Reed-Solomon decoding with erasures
//!
//! ## Pipeline
//!
//! ```text
//! syndromes ──all zero──▶ Ok(0)
//!     │
//!     ▼
//! erasure locator Γ, modified syndrome T = S·Γ mod x^R
//!     │
//!     ▼
//! extended Euclid on (x^R, T) ──▶ Λ (error locator), Ω (evaluator)
//!     │
//!     ▼
//! Chien search on Ψ = Λ·Γ ──▶ locations
//!     │
//!     ▼
//! Forney: e = -X^(1-b) · Ω(X⁻¹) / Ψ'(X⁻¹)
//!     │
//!     ▼
//! repair a scratch copy, re-check syndromes, commit
//! ```
//!
//! `R` is the number of correction codewords, `b` the field's generator base.
//! With `ρ` distinct erasures the code corrects `ν` unknown errors whenever
//! `2ν + ρ <= R`.
//!
//! The Euclidean stopping rule follows the field flavor: binary fields stop
//! once `deg(r) < (R + ρ) / 2` (integer division), prime fields once
//! `2·deg(r) < R + ρ`. Both agree when `R + ρ` is even; for odd `R + ρ` the
//! binary rule allows one more located error.

use super::encoder::{check_block, check_codewords};
use super::error::{RsError, RsResult, Uncorrectable};
use super::galois::{FieldKind, GaloisField};
use super::polynomial::Polynomial;
use log::{debug, trace};
use smallvec::SmallVec;

type Locations = SmallVec<[u16; 16]>;

/// Stateless decoder over one field; cheap to copy and safe to share
#[derive(Debug, Clone, Copy)]
pub struct ReedSolomonDecoder<'f> {
    field: &'f GaloisField,
}

impl<'f> ReedSolomonDecoder<'f> {
    pub fn new(field: &'f GaloisField) -> Self {
        Self { field }
    }

    pub fn field(&self) -> &'f GaloisField {
        self.field
    }

    /// Correct `received` in place, returning how many codewords were changed
    ///
    /// `erasures` lists positions known to be unreliable; pass `&[]` when there
    /// are none. On any error the block is left untouched.
    pub fn decode(
        &self,
        received: &mut [u16],
        num_correction_words: usize,
        erasures: &[usize],
    ) -> RsResult<usize> {
        check_block(self.field, received.len(), num_correction_words)?;
        check_codewords(self.field, received)?;
        let erasures = self.check_erasures(received.len(), num_correction_words, erasures)?;

        let Some(syndrome) = self.syndromes(received, num_correction_words) else {
            return Ok(0);
        };
        debug!(
            "Non-zero syndromes in block of {} over {} ({} erasures)",
            received.len(),
            self.field,
            erasures.len()
        );

        let erasure_locator = self.erasure_locator(received.len(), &erasures);
        let modified = syndrome
            .multiply(&erasure_locator)
            .truncate_below(num_correction_words);

        let a = Polynomial::monomial(self.field, num_correction_words, 1);
        let (sigma, omega) =
            self.run_euclidean_algorithm(a, modified, num_correction_words + erasures.len())?;
        let locator = sigma.multiply(&erasure_locator);

        let locations = self.find_error_locations(&locator)?;
        let magnitudes = self.find_error_magnitudes(&omega, &locator, &locations)?;
        debug!(
            "Located {} errors ({} erasures) in block of {}",
            locations.len(),
            erasures.len(),
            received.len()
        );

        let mut repaired = received.to_vec();
        let mut corrected = 0;
        for (&location, &magnitude) in locations.iter().zip(&magnitudes) {
            let exponent = self.field.log(location);
            if exponent >= repaired.len() {
                return Err(Uncorrectable::PositionOutOfRange {
                    exponent,
                    len: repaired.len(),
                }
                .into());
            }
            let position = repaired.len() - 1 - exponent;
            if magnitude != 0 {
                repaired[position] = self.field.subtract(repaired[position], magnitude);
                corrected += 1;
            }
        }

        if self.syndromes(&repaired, num_correction_words).is_some() {
            return Err(Uncorrectable::ResidualSyndrome.into());
        }

        received.copy_from_slice(&repaired);
        debug!("Corrected {} codewords", corrected);
        Ok(corrected)
    }

    /// Validate erasure positions and collapse duplicates
    fn check_erasures(
        &self,
        len: usize,
        num_correction_words: usize,
        erasures: &[usize],
    ) -> RsResult<SmallVec<[usize; 16]>> {
        let mut unique: SmallVec<[usize; 16]> = SmallVec::with_capacity(erasures.len());
        for &position in erasures {
            if position >= len {
                return Err(RsError::ErasureOutOfBounds { position, len });
            }
            unique.push(position);
        }
        unique.sort_unstable();
        unique.dedup();

        if unique.len() > num_correction_words {
            return Err(RsError::TooManyErasures {
                erasures: unique.len(),
                limit: num_correction_words,
            });
        }
        Ok(unique)
    }

    /// Syndrome polynomial `Σ r(α^(i+b)) x^i`, or `None` when every syndrome is zero
    fn syndromes(&self, received: &[u16], num_correction_words: usize) -> Option<Polynomial<'f>> {
        let poly = Polynomial::new(self.field, received);
        let base = self.field.generator_base() as usize;

        let mut coefficients = vec![0u16; num_correction_words];
        let mut error = false;
        for i in 0..num_correction_words {
            let eval = poly.evaluate(self.field.exp(i + base));
            coefficients[num_correction_words - 1 - i] = eval;
            error |= eval != 0;
        }

        error.then(|| Polynomial::new(self.field, &coefficients))
    }

    /// `Π (1 - x·α^(n-1-p))` over the erased positions `p`
    fn erasure_locator(&self, len: usize, erasures: &[usize]) -> Polynomial<'f> {
        erasures
            .iter()
            .fold(Polynomial::one(self.field), |locator, &position| {
                let root = self.field.exp(len - 1 - position);
                let term = Polynomial::new(self.field, &[self.field.negate(root), 1]);
                locator.multiply(&term)
            })
    }

    /// Whether the key-equation solver must take another step
    fn keep_solving(&self, remainder: &Polynomial<'f>, target: usize) -> bool {
        match self.field.kind() {
            FieldKind::Binary { .. } => remainder.degree() >= target / 2,
            FieldKind::Prime { .. } => 2 * remainder.degree() >= target,
        }
    }

    /// Extended Euclid on `(a, b)`, returning `(sigma, omega)` normalized so `sigma(0) == 1`
    fn run_euclidean_algorithm(
        &self,
        a: Polynomial<'f>,
        b: Polynomial<'f>,
        target: usize,
    ) -> Result<(Polynomial<'f>, Polynomial<'f>), Uncorrectable> {
        let (mut r_last, mut r) = if a.degree() < b.degree() {
            (b, a)
        } else {
            (a, b)
        };
        let mut t_last = Polynomial::zero(self.field);
        let mut t = Polynomial::one(self.field);

        while self.keep_solving(&r, target) {
            let r_last_last = r_last;
            let t_last_last = t_last;
            r_last = r;
            t_last = t;

            if r_last.is_zero() {
                return Err(Uncorrectable::ZeroRemainder);
            }

            let (quotient, remainder) = r_last_last.divide(&r_last);
            t = t_last_last.subtract(&quotient.multiply(&t_last));
            r = remainder;
            trace!(
                "Euclid step: deg r = {}, deg t = {}",
                r.degree(),
                t.degree()
            );

            if r.degree() >= r_last.degree() {
                return Err(Uncorrectable::StalledDivision);
            }
        }

        let sigma_tilde_at_zero = t.coefficient(0);
        if sigma_tilde_at_zero == 0 {
            return Err(Uncorrectable::ZeroLocatorConstant);
        }

        let inverse = self.field.inverse(sigma_tilde_at_zero);
        Ok((t.multiply_scalar(inverse), r.multiply_scalar(inverse)))
    }

    /// Chien search: the inverse of every root of `locator`
    fn find_error_locations(&self, locator: &Polynomial<'f>) -> Result<Locations, Uncorrectable> {
        let expected = locator.degree();
        let mut locations = Locations::with_capacity(expected);

        for element in 1..self.field.size() {
            if locations.len() == expected {
                break;
            }
            let element = element as u16;
            if locator.evaluate(element) == 0 {
                locations.push(self.field.inverse(element));
            }
        }

        if locations.len() != expected {
            return Err(Uncorrectable::MissingRoots {
                expected,
                found: locations.len(),
            });
        }
        Ok(locations)
    }

    /// Forney's formula for each location
    fn find_error_magnitudes(
        &self,
        evaluator: &Polynomial<'f>,
        locator: &Polynomial<'f>,
        locations: &[u16],
    ) -> Result<Locations, Uncorrectable> {
        let field = self.field;
        let derivative = locator.formal_derivative();
        let shift = 1 - field.generator_base() as i64;

        locations
            .iter()
            .map(|&location| {
                let inverse = field.inverse(location);
                let denominator = derivative.evaluate(inverse);
                if denominator == 0 {
                    return Err(Uncorrectable::RepeatedRoot);
                }
                let numerator = field.negate(evaluator.evaluate(inverse));
                let magnitude = field.divide(numerator, denominator);
                Ok(field.multiply(magnitude, field.pow(location, shift)))
            })
            .collect()
    }
}
