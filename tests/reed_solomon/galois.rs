//! Finite Field Arithmetic Tests
//!
//! Tests for the binary GF(2^m) fields of the matrix codes and the prime
//! field Z_929 used by PDF417, through the shared preset tables.

use barcode_ecc::reed_solomon::galois::{FieldError, FieldKind, GaloisField};
use barcode_ecc::FieldPreset;

// ============================================================================
// Table Construction
// ============================================================================

#[test]
fn test_reducing_polynomial_wraps_powers() {
    // x^m reduces to the low bits of the primitive polynomial
    assert_eq!(FieldPreset::QrCode.field().exp(8), 0x1D);
    assert_eq!(FieldPreset::DataMatrix.field().exp(8), 0x2D);
    assert_eq!(FieldPreset::Aztec12.field().exp(12), 0x069);
    assert_eq!(FieldPreset::Aztec10.field().exp(10), 0x009);
    assert_eq!(FieldPreset::Aztec6.field().exp(6), 0x03);
    assert_eq!(FieldPreset::AztecParam.field().exp(4), 0x3);
}

#[test]
fn test_exp_log_are_inverse() {
    for preset in FieldPreset::ALL {
        let gf = preset.field();
        for i in 0..gf.order() {
            assert_eq!(gf.log(gf.exp(i)), i, "{preset} at {i}");
        }
        assert_eq!(gf.exp(gf.order()), 1, "{preset}");
    }
}

#[test]
fn test_every_nonzero_element_has_inverse() {
    for preset in FieldPreset::ALL {
        let gf = preset.field();
        for a in 1..gf.size() as u16 {
            assert_eq!(gf.multiply(a, gf.inverse(a)), 1, "{preset} inverse of {a}");
        }
    }
}

#[test]
fn test_field_metadata() {
    let qr = FieldPreset::QrCode.field();
    assert_eq!(qr.size(), 256);
    assert_eq!(qr.order(), 255);
    assert_eq!(qr.generator_base(), 0);
    assert!(qr.is_binary());
    assert!(qr.contains(255));

    let pdf = FieldPreset::Pdf417.field();
    assert_eq!(pdf.size(), 929);
    assert_eq!(pdf.generator_base(), 1);
    assert!(!pdf.is_binary());
    assert!(pdf.contains(928));
    assert!(!pdf.contains(929));
    assert_eq!(
        pdf.kind(),
        FieldKind::Prime {
            modulus: 929,
            generator: 3
        }
    );
}

// ============================================================================
// Binary Field Operations
// ============================================================================

#[test]
fn test_binary_add_is_xor() {
    let gf = FieldPreset::QrCode.field();
    assert_eq!(gf.add(5, 3), 6);
    assert_eq!(gf.subtract(5, 3), 6);
    assert_eq!(gf.negate(77), 77);
    assert_eq!(gf.add(200, 200), 0);
}

#[test]
fn test_binary_multiply() {
    let gf = FieldPreset::QrCode.field();
    assert_eq!(gf.multiply(2, 128), 0x1D);
    assert_eq!(gf.multiply(0, 99), 0);
    assert_eq!(gf.multiply(99, 1), 99);
    assert_eq!(gf.inverse(2), 0x8E);
    assert_eq!(gf.divide(0, 7), 0);
    assert_eq!(gf.divide(gf.multiply(17, 23), 23), 17);
}

#[test]
fn test_binary_integer_scaling() {
    let gf = FieldPreset::DataMatrix.field();
    assert_eq!(gf.multiply_by_integer(57, 1), 57);
    assert_eq!(gf.multiply_by_integer(57, 2), 0);
    assert_eq!(gf.multiply_by_integer(57, 7), 57);
}

// ============================================================================
// Prime Field Operations
// ============================================================================

#[test]
fn test_prime_add_subtract_are_modular() {
    let gf = FieldPreset::Pdf417.field();
    assert_eq!(gf.add(500, 500), 71);
    assert_eq!(gf.add(928, 2), 1);
    assert_eq!(gf.subtract(0, 1), 928);
    assert_eq!(gf.subtract(1, 2), 928);
    assert_eq!(gf.negate(1), 928);
    assert_eq!(gf.negate(0), 0);
}

#[test]
fn test_prime_multiply_and_inverse() {
    let gf = FieldPreset::Pdf417.field();
    assert_eq!(gf.exp(1), 3);
    assert_eq!(gf.exp(2), 9);
    assert_eq!(gf.log(3), 1);
    assert_eq!(gf.inverse(3), 310);
    assert_eq!(gf.multiply(928, 928), 1);
    assert_eq!(gf.multiply_by_integer(5, 3), 15);
    assert_eq!(gf.multiply_by_integer(10, 929), 0);
}

// ============================================================================
// Powers
// ============================================================================

#[test]
fn test_pow_handles_negative_exponents() {
    for preset in [FieldPreset::QrCode, FieldPreset::Pdf417] {
        let gf = preset.field();
        let a = gf.exp(5);
        assert_eq!(gf.pow(a, 0), 1);
        assert_eq!(gf.pow(a, 1), a);
        assert_eq!(gf.pow(a, -1), gf.inverse(a));
        assert_eq!(gf.multiply(gf.pow(a, 3), gf.pow(a, -3)), 1);
        assert_eq!(gf.pow(0, 4), 0);
        assert_eq!(gf.pow(0, 0), 1);
    }
}

#[test]
#[should_panic(expected = "Inverse of zero")]
fn test_inverse_of_zero_panics() {
    FieldPreset::QrCode.field().inverse(0);
}

#[test]
#[should_panic]
fn test_log_of_zero_panics() {
    FieldPreset::Pdf417.field().log(0);
}

// ============================================================================
// Construction Errors
// ============================================================================

#[test]
fn test_irreducible_but_not_primitive_is_rejected() {
    // x^8 + x^4 + x^3 + x + 1 is irreducible, but x has order 51 modulo it
    assert_eq!(
        GaloisField::binary(0x011B, 256, 0),
        Err(FieldError::NotPrimitive(0x011B))
    );
}

#[test]
fn test_invalid_construction_parameters() {
    assert_eq!(
        GaloisField::binary(0x011D, 100, 0),
        Err(FieldError::InvalidBinarySize(100))
    );
    assert_eq!(
        GaloisField::binary(0x1D, 256, 0),
        Err(FieldError::WrongDegree {
            primitive: 0x1D,
            degree: 8
        })
    );
    assert_eq!(
        GaloisField::binary(0x011D, 256, 255),
        Err(FieldError::InvalidGeneratorBase {
            base: 255,
            size: 256
        })
    );
    assert_eq!(
        GaloisField::prime(928, 3, 1),
        Err(FieldError::InvalidModulus(928))
    );
    assert_eq!(
        GaloisField::prime(929, 2, 1),
        Err(FieldError::NotPrimitiveRoot {
            generator: 2,
            modulus: 929
        })
    );
}

#[test]
fn test_custom_fields_build() {
    let gf = GaloisField::binary(0x0025, 32, 1).unwrap();
    assert_eq!(gf.order(), 31);
    assert_eq!(gf.exp(5), 0x05);

    let z7 = GaloisField::prime(7, 3, 0).unwrap();
    assert_eq!(z7.exp(1), 3);
    assert_eq!(z7.exp(2), 2);
    assert_eq!(z7.inverse(3), 5);
}

#[test]
fn test_display() {
    assert_eq!(
        FieldPreset::QrCode.field().to_string(),
        "GF(256) primitive 0x011d base 0"
    );
    assert_eq!(
        FieldPreset::Pdf417.field().to_string(),
        "Z_929 generator 3 base 1"
    );
}
