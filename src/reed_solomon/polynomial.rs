//! Polynomials over a [`GaloisField`]
//!
//! Coefficients are stored highest degree first and are always normalized:
//! the leading coefficient is nonzero unless the polynomial is the zero
//! polynomial `[0]`. Every operation returns a fresh value.

use super::galois::GaloisField;
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct Polynomial<'f> {
    field: &'f GaloisField,
    coefficients: Vec<u16>,
}

impl<'f> Polynomial<'f> {
    /// Create a polynomial from coefficients ordered highest degree first
    ///
    /// Leading zeros are stripped; an all-zero sequence becomes `[0]`.
    ///
    /// # Panics
    /// Panics if `coefficients` is empty.
    pub fn new(field: &'f GaloisField, coefficients: &[u16]) -> Self {
        if coefficients.is_empty() {
            panic!("Polynomial needs at least one coefficient");
        }
        Self::from_vec(field, coefficients.to_vec())
    }

    fn from_vec(field: &'f GaloisField, mut coefficients: Vec<u16>) -> Self {
        match coefficients.iter().position(|&c| c != 0) {
            Some(0) => {}
            Some(first_nonzero) => {
                coefficients.drain(..first_nonzero);
            }
            None => {
                coefficients.clear();
                coefficients.push(0);
            }
        }
        Self {
            field,
            coefficients,
        }
    }

    pub fn zero(field: &'f GaloisField) -> Self {
        Self {
            field,
            coefficients: vec![0],
        }
    }

    pub fn one(field: &'f GaloisField) -> Self {
        Self {
            field,
            coefficients: vec![1],
        }
    }

    /// `coefficient · x^degree`
    pub fn monomial(field: &'f GaloisField, degree: usize, coefficient: u16) -> Self {
        if coefficient == 0 {
            return Self::zero(field);
        }
        let mut coefficients = vec![0u16; degree + 1];
        coefficients[0] = coefficient;
        Self {
            field,
            coefficients,
        }
    }

    pub fn field(&self) -> &'f GaloisField {
        self.field
    }

    /// Coefficients, highest degree first
    pub fn coefficients(&self) -> &[u16] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients[0] == 0
    }

    /// Coefficient of `x^degree` (zero above the polynomial's degree)
    pub fn coefficient(&self, degree: usize) -> u16 {
        match self.degree().checked_sub(degree) {
            Some(index) => self.coefficients[index],
            None => 0,
        }
    }

    pub fn leading_coefficient(&self) -> u16 {
        self.coefficients[0]
    }

    /// Evaluate at `point` with Horner's rule
    pub fn evaluate(&self, point: u16) -> u16 {
        if point == 0 {
            return self.coefficient(0);
        }
        let field = self.field;
        self.coefficients
            .iter()
            .skip(1)
            .fold(self.coefficients[0], |acc, &c| {
                field.add(field.multiply(point, acc), c)
            })
    }

    pub fn add(&self, other: &Self) -> Self {
        self.combine(other, |field, a, b| field.add(a, b))
    }

    pub fn subtract(&self, other: &Self) -> Self {
        self.combine(other, |field, a, b| field.subtract(a, b))
    }

    /// Term-wise combination with the shorter operand aligned to the low-degree end
    fn combine(&self, other: &Self, op: impl Fn(&GaloisField, u16, u16) -> u16) -> Self {
        self.check_same_field(other);
        let len = self.coefficients.len().max(other.coefficients.len());
        let self_offset = len - self.coefficients.len();
        let other_offset = len - other.coefficients.len();

        let combined = (0..len)
            .map(|i| {
                let a = i
                    .checked_sub(self_offset)
                    .map_or(0, |j| self.coefficients[j]);
                let b = i
                    .checked_sub(other_offset)
                    .map_or(0, |j| other.coefficients[j]);
                op(self.field, a, b)
            })
            .collect();
        Self::from_vec(self.field, combined)
    }

    pub fn negate(&self) -> Self {
        let field = self.field;
        let negated = self.coefficients.iter().map(|&c| field.negate(c)).collect();
        Self::from_vec(field, negated)
    }

    pub fn multiply(&self, other: &Self) -> Self {
        self.check_same_field(other);
        if self.is_zero() || other.is_zero() {
            return Self::zero(self.field);
        }
        let field = self.field;
        let mut product = vec![0u16; self.coefficients.len() + other.coefficients.len() - 1];
        for (i, &a) in self.coefficients.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.coefficients.iter().enumerate() {
                product[i + j] = field.add(product[i + j], field.multiply(a, b));
            }
        }
        Self::from_vec(field, product)
    }

    pub fn multiply_scalar(&self, scalar: u16) -> Self {
        match scalar {
            0 => Self::zero(self.field),
            1 => self.clone(),
            _ => {
                let field = self.field;
                let scaled = self
                    .coefficients
                    .iter()
                    .map(|&c| field.multiply(c, scalar))
                    .collect();
                Self::from_vec(field, scaled)
            }
        }
    }

    /// Multiply by `coefficient · x^degree`
    pub fn multiply_by_monomial(&self, degree: usize, coefficient: u16) -> Self {
        if coefficient == 0 || self.is_zero() {
            return Self::zero(self.field);
        }
        let field = self.field;
        let mut product: Vec<u16> = self
            .coefficients
            .iter()
            .map(|&c| field.multiply(c, coefficient))
            .collect();
        product.resize(product.len() + degree, 0);
        Self::from_vec(field, product)
    }

    /// Reduce modulo `x^degree`, keeping only the terms below `degree`
    pub fn truncate_below(&self, degree: usize) -> Self {
        if degree == 0 {
            return Self::zero(self.field);
        }
        let len = self.coefficients.len();
        if len <= degree {
            return self.clone();
        }
        Self::from_vec(self.field, self.coefficients[len - degree..].to_vec())
    }

    /// Schoolbook long division, returning `(quotient, remainder)`
    ///
    /// # Panics
    /// Panics if `divisor` is the zero polynomial.
    pub fn divide(&self, divisor: &Self) -> (Self, Self) {
        self.check_same_field(divisor);
        if divisor.is_zero() {
            panic!("Polynomial division by zero");
        }
        let field = self.field;
        let mut quotient = Self::zero(field);
        let mut remainder = self.clone();

        let inverse_leading = field.inverse(divisor.leading_coefficient());
        while remainder.degree() >= divisor.degree() && !remainder.is_zero() {
            let degree_difference = remainder.degree() - divisor.degree();
            let scale = field.multiply(remainder.leading_coefficient(), inverse_leading);
            let term = divisor.multiply_by_monomial(degree_difference, scale);
            quotient = quotient.add(&Self::monomial(field, degree_difference, scale));
            remainder = remainder.subtract(&term);
        }

        (quotient, remainder)
    }

    /// Formal derivative: the `x^i` term contributes `i · c · x^(i-1)`
    pub fn formal_derivative(&self) -> Self {
        let degree = self.degree();
        if degree == 0 {
            return Self::zero(self.field);
        }
        let field = self.field;
        let derivative = (1..=degree)
            .rev()
            .map(|i| field.multiply_by_integer(self.coefficient(i), i))
            .collect();
        Self::from_vec(field, derivative)
    }

    fn check_same_field(&self, other: &Self) {
        if self.field != other.field {
            panic!(
                "Polynomials are over different fields: {} and {}",
                self.field, other.field
            );
        }
    }
}

impl fmt::Debug for Polynomial<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polynomial({})", self)
    }
}

impl fmt::Display for Polynomial<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for degree in (0..=self.degree()).rev() {
            let c = self.coefficient(degree);
            if c == 0 {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            match degree {
                0 => write!(f, "{}", c)?,
                1 => write!(f, "{}x", c)?,
                _ => write!(f, "{}x^{}", c, degree)?,
            }
        }
        Ok(())
    }
}
