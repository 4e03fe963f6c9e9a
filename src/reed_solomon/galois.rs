//! Finite field arithmetic for barcode Reed-Solomon codes
//!
//! ## Field Flavors
//!
//! Two kinds of field are needed by the barcode families:
//!
//! - **GF(2^m)**: binary extension fields built from a primitive reducing
//!   polynomial, e.g. 0x011D (x⁸ + x⁴ + x³ + x² + 1) for QR Code. Addition and
//!   subtraction are both XOR because the characteristic is 2.
//! - **Z_p**: the prime field with p = 929 used by PDF417, generated by 3.
//!   Addition and subtraction are modular and are *not* interchangeable.
//!
//! Both flavors share the same exp/log table layout, so multiplication,
//! inversion and exponentiation are one implementation. Only `add`, `subtract`,
//! `negate`, small-integer scaling and table construction depend on the kind.
//!
//! ## Tables
//!
//! `exp[i]` holds generator^i for `i` in `0..size` (so `exp[size - 1] == 1`),
//! `log[exp[i]] == i` for `i` in `0..size - 1`. `log[0]` is never read.

use std::fmt;
use thiserror::Error;

/// Largest number of elements a field may have; elements are stored as `u16`.
const MAX_FIELD_SIZE: usize = 1 << 16;

/// Errors reported when field construction parameters are invalid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("binary field size {0} is not a power of two between 4 and 65536")]
    InvalidBinarySize(usize),

    #[error("reducing polynomial {primitive:#x} does not have degree {degree}")]
    WrongDegree { primitive: u32, degree: u32 },

    #[error("reducing polynomial {0:#x} is not primitive")]
    NotPrimitive(u32),

    #[error("modulus {0} is not a prime between 3 and 65536")]
    InvalidModulus(u32),

    #[error("{generator} is not a primitive root modulo {modulus}")]
    NotPrimitiveRoot { generator: u32, modulus: u32 },

    #[error("generator base {base} is out of range for a field of size {size}")]
    InvalidGeneratorBase { base: u32, size: usize },
}

/// Which arithmetic a [`GaloisField`] uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// GF(2^m) reduced by `primitive`; the generator is always x (= 2)
    Binary { primitive: u32 },
    /// Integers modulo the prime `modulus`, generated by `generator`
    Prime { modulus: u32, generator: u32 },
}

/// One finite field instance with precomputed exp/log tables
///
/// Built once, immutable afterwards, and shared read-only by every encoder and
/// decoder over the field. `GaloisField` is `Send + Sync`.
#[derive(Clone)]
pub struct GaloisField {
    kind: FieldKind,
    size: usize,
    generator_base: u32,
    exp: Vec<u16>,
    log: Vec<u16>,
}

impl GaloisField {
    /// Build GF(`size`) from a primitive reducing polynomial
    ///
    /// `generator_base` is the exponent of the first root of the generator
    /// polynomial (0 for QR Code, 1 for Data Matrix and Aztec).
    pub fn binary(primitive: u32, size: usize, generator_base: u32) -> Result<Self, FieldError> {
        if !size.is_power_of_two() || !(4..=MAX_FIELD_SIZE).contains(&size) {
            return Err(FieldError::InvalidBinarySize(size));
        }
        if (primitive as usize) < size || (primitive as usize) >= size << 1 {
            return Err(FieldError::WrongDegree {
                primitive,
                degree: size.trailing_zeros(),
            });
        }
        Self::check_generator_base(generator_base, size)?;

        let field = Self::build(FieldKind::Binary { primitive }, size, generator_base);
        if primitive & 1 == 0 || !field.has_full_period() {
            return Err(FieldError::NotPrimitive(primitive));
        }
        Ok(field)
    }

    /// Build Z_`modulus` with `generator` as the primitive root
    pub fn prime(modulus: u32, generator: u32, generator_base: u32) -> Result<Self, FieldError> {
        if !(3..=MAX_FIELD_SIZE as u32).contains(&modulus) || !is_prime(modulus) {
            return Err(FieldError::InvalidModulus(modulus));
        }
        let size = modulus as usize;
        Self::check_generator_base(generator_base, size)?;
        if !(2..modulus).contains(&generator) {
            return Err(FieldError::NotPrimitiveRoot { generator, modulus });
        }

        let field = Self::build(FieldKind::Prime { modulus, generator }, size, generator_base);
        if !field.has_full_period() {
            return Err(FieldError::NotPrimitiveRoot { generator, modulus });
        }
        Ok(field)
    }

    fn check_generator_base(base: u32, size: usize) -> Result<(), FieldError> {
        if base as usize >= size - 1 {
            return Err(FieldError::InvalidGeneratorBase { base, size });
        }
        Ok(())
    }

    /// Build tables without validating the parameters.
    ///
    /// Used directly only for the built-in presets, whose parameters are
    /// checked by the preset tests.
    pub(crate) fn build(kind: FieldKind, size: usize, generator_base: u32) -> Self {
        let mut exp = vec![0u16; size];
        let mut log = vec![0u16; size];

        match kind {
            FieldKind::Binary { primitive } => {
                let mut x = 1usize;
                for slot in exp.iter_mut() {
                    *slot = x as u16;
                    x <<= 1;
                    if x >= size {
                        x ^= primitive as usize;
                        x &= size - 1;
                    }
                }
            }
            FieldKind::Prime { modulus, generator } => {
                let mut x = 1u32;
                for slot in exp.iter_mut() {
                    *slot = x as u16;
                    x = (x * generator) % modulus;
                }
            }
        }

        for (i, &value) in exp.iter().enumerate().take(size - 1) {
            log[value as usize] = i as u16;
        }

        Self {
            kind,
            size,
            generator_base,
            exp,
            log,
        }
    }

    /// True when the generator's powers visit every nonzero element exactly once
    fn has_full_period(&self) -> bool {
        let order = self.order();
        self.exp[order] == 1 && self.exp[1..order].iter().all(|&v| v != 0 && v != 1)
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Number of elements in the field
    pub fn size(&self) -> usize {
        self.size
    }

    /// Order of the multiplicative group (`size - 1`)
    pub fn order(&self) -> usize {
        self.size - 1
    }

    pub fn generator_base(&self) -> u32 {
        self.generator_base
    }

    pub fn is_binary(&self) -> bool {
        matches!(self.kind, FieldKind::Binary { .. })
    }

    /// Whether `value` is an element of this field
    #[inline]
    pub fn contains(&self, value: u16) -> bool {
        (value as usize) < self.size
    }

    /// generator^`index`; indices at or above the group order wrap around
    #[inline]
    pub fn exp(&self, index: usize) -> u16 {
        self.exp[index % self.order()]
    }

    /// Discrete logarithm of a nonzero element
    ///
    /// # Panics
    /// Panics if `a == 0`.
    #[inline]
    pub fn log(&self, a: u16) -> usize {
        if a == 0 {
            panic!("log(0) is undefined in {}", self);
        }
        self.log[a as usize] as usize
    }

    #[inline]
    pub fn add(&self, a: u16, b: u16) -> u16 {
        match self.kind {
            FieldKind::Binary { .. } => a ^ b,
            FieldKind::Prime { modulus, .. } => ((a as u32 + b as u32) % modulus) as u16,
        }
    }

    #[inline]
    pub fn subtract(&self, a: u16, b: u16) -> u16 {
        match self.kind {
            FieldKind::Binary { .. } => a ^ b,
            FieldKind::Prime { modulus, .. } => ((modulus + a as u32 - b as u32) % modulus) as u16,
        }
    }

    /// Additive inverse; the identity in characteristic 2
    #[inline]
    pub fn negate(&self, a: u16) -> u16 {
        self.subtract(0, a)
    }

    #[inline]
    pub fn multiply(&self, a: u16, b: u16) -> u16 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_sum = (self.log[a as usize] as usize + self.log[b as usize] as usize) % self.order();
        self.exp[log_sum]
    }

    /// Multiplicative inverse
    ///
    /// # Panics
    /// Panics if `a == 0`.
    #[inline]
    pub fn inverse(&self, a: u16) -> u16 {
        if a == 0 {
            panic!("Inverse of zero in {}", self);
        }
        self.exp[self.order() - self.log[a as usize] as usize]
    }

    /// # Panics
    /// Panics if `b == 0`.
    #[inline]
    pub fn divide(&self, a: u16, b: u16) -> u16 {
        if b == 0 {
            panic!("Division by zero in {}", self);
        }
        self.multiply(a, self.inverse(b))
    }

    /// `a` raised to a possibly negative power
    ///
    /// # Panics
    /// Panics on `0` raised to a negative power.
    pub fn pow(&self, a: u16, exponent: i64) -> u16 {
        if a == 0 {
            return match exponent {
                0 => 1,
                e if e > 0 => 0,
                _ => panic!("Zero raised to a negative power in {}", self),
            };
        }
        let order = self.order() as i64;
        let log_a = self.log[a as usize] as i64;
        self.exp[(log_a * exponent.rem_euclid(order)) as usize % self.order()]
    }

    /// `a` added to itself `n` times
    ///
    /// This is the integer scaling used by formal derivatives: in GF(2^m) it
    /// keeps `a` for odd `n` and vanishes for even `n`.
    #[inline]
    pub fn multiply_by_integer(&self, a: u16, n: usize) -> u16 {
        match self.kind {
            FieldKind::Binary { .. } => {
                if n % 2 == 1 {
                    a
                } else {
                    0
                }
            }
            FieldKind::Prime { modulus, .. } => self.multiply(a, (n % modulus as usize) as u16),
        }
    }
}

impl PartialEq for GaloisField {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.size == other.size
            && self.generator_base == other.generator_base
    }
}

impl Eq for GaloisField {}

impl fmt::Debug for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaloisField")
            .field("kind", &self.kind)
            .field("size", &self.size)
            .field("generator_base", &self.generator_base)
            .finish()
    }
}

impl fmt::Display for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FieldKind::Binary { primitive } => write!(
                f,
                "GF({}) primitive {:#06x} base {}",
                self.size, primitive, self.generator_base
            ),
            FieldKind::Prime { modulus, generator } => write!(
                f,
                "Z_{} generator {} base {}",
                modulus, generator, self.generator_base
            ),
        }
    }
}

fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2u32;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}
