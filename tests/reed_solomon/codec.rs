//! Encoding and Error-Only Decoding Tests
//!
//! Published vectors for QR Code and Data Matrix, generator structure for
//! every preset, and correction up to and beyond capacity.

use barcode_ecc::{
    FieldPreset, GaloisField, Polynomial, ReedSolomonDecoder, ReedSolomonEncoder, RsError,
    Uncorrectable,
};

// ============================================================================
// Reference Vectors
// ============================================================================

#[test]
fn test_qr_hello_world_version_1m() {
    let data = [
        32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17,
    ];
    let block = FieldPreset::QrCode.encoder().encode_to_vec(&data, 10).unwrap();
    assert_eq!(&block[..16], &data);
    assert_eq!(
        &block[16..],
        &[196, 35, 39, 119, 235, 215, 231, 226, 93, 23]
    );
}

#[test]
fn test_data_matrix_123456() {
    let block = FieldPreset::DataMatrix
        .encoder()
        .encode_to_vec(&[142, 164, 186], 5)
        .unwrap();
    assert_eq!(block, vec![142, 164, 186, 114, 25, 5, 88, 102]);
}

#[test]
fn test_pdf417_numeric_block() {
    let block = FieldPreset::Pdf417
        .encoder()
        .encode_to_vec(&[5, 453, 178, 121, 239], 4)
        .unwrap();
    assert_eq!(block, vec![5, 453, 178, 121, 239, 452, 327, 657, 619]);
}

#[test]
fn test_qr_generator_degree_7() {
    let gf = FieldPreset::QrCode.field();
    let generator = FieldPreset::QrCode.encoder().generator(7);
    let exponents: Vec<usize> = generator.coefficients().iter().map(|&c| gf.log(c)).collect();
    assert_eq!(exponents, vec![0, 87, 229, 146, 149, 238, 102, 21]);
}

// ============================================================================
// Generator Structure
// ============================================================================

#[test]
fn test_generator_roots_start_at_base() {
    for preset in FieldPreset::ALL {
        let gf = preset.field();
        let base = gf.generator_base() as usize;
        let generator = preset.encoder().generator(5);

        assert_eq!(generator.degree(), 5, "{preset}");
        assert_eq!(generator.leading_coefficient(), 1, "{preset}");
        for i in 0..5 {
            assert_eq!(generator.evaluate(gf.exp(i + base)), 0, "{preset} root {i}");
        }
        assert_ne!(generator.evaluate(gf.exp(5 + base)), 0, "{preset}");
    }
}

#[test]
fn test_generator_cache_grows_on_demand() {
    let gf = GaloisField::binary(0x012D, 256, 1).unwrap();
    let encoder = ReedSolomonEncoder::new(&gf);
    assert_eq!(encoder.cached_degrees(), 1);

    let g4 = encoder.generator(4);
    assert_eq!(encoder.cached_degrees(), 5);

    // Lower degrees are served from the cache
    let g2 = encoder.generator(2);
    assert_eq!(encoder.cached_degrees(), 5);
    assert!(g4.divide(&g2).1.is_zero());
    assert_eq!(encoder.generator(0), Polynomial::one(&gf));
}

#[test]
fn test_codewords_are_multiples_of_generator() {
    for preset in FieldPreset::ALL {
        let gf = preset.field();
        let data: Vec<u16> = (0..6).map(|i| ((i * 37 + 5) % gf.size()) as u16).collect();
        let block = preset.encoder().encode_to_vec(&data, 6).unwrap();
        let (_, remainder) = Polynomial::new(gf, &block).divide(&preset.encoder().generator(6));
        assert!(remainder.is_zero(), "{preset}");
    }
}

#[test]
fn test_encode_in_place_overwrites_suffix() {
    let encoder = FieldPreset::QrCode.encoder();
    let mut block = [1u16, 2, 3, 4, 5, 6, 7, 8, 9, 10, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA];
    encoder.encode(&mut block, 7).unwrap();
    let expected = encoder.encode_to_vec(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 7).unwrap();
    assert_eq!(block.to_vec(), expected);
}

// ============================================================================
// Encoder Contract Violations
// ============================================================================

#[test]
fn test_encode_rejects_bad_dimensions() {
    let encoder = FieldPreset::QrCode.encoder();
    assert_eq!(encoder.encode_to_vec(&[1, 2], 0), Err(RsError::NoCorrectionWords));
    assert_eq!(
        encoder.encode(&mut [0u16; 4], 4),
        Err(RsError::NoDataWords {
            block_len: 4,
            num_correction_words: 4
        })
    );
    assert_eq!(
        encoder.encode_to_vec(&[0u16; 250], 6),
        Err(RsError::BlockTooLong { len: 256, max: 255 })
    );
}

#[test]
fn test_encode_rejects_values_outside_field() {
    assert_eq!(
        FieldPreset::Pdf417.encoder().encode_to_vec(&[1, 929], 2),
        Err(RsError::CodewordOutOfRange {
            position: 1,
            value: 929,
            size: 929
        })
    );
    assert!(FieldPreset::AztecParam
        .encoder()
        .encode_to_vec(&[16], 2)
        .is_err());
}

// ============================================================================
// Decoding Errors
// ============================================================================

#[test]
fn test_qr_three_errors_restored() {
    let data: Vec<u16> = (1..=10).collect();
    let original = FieldPreset::QrCode.encoder().encode_to_vec(&data, 7).unwrap();

    let mut block = original.clone();
    block[0] = 0;
    block[3] = 200;
    block[6] = 100;
    assert_eq!(FieldPreset::QrCode.decoder().decode(&mut block, 7, &[]), Ok(3));
    assert_eq!(&block[..10], &data[..]);
    assert_eq!(block, original);
}

#[test]
fn test_pdf417_clean_block() {
    let decoder = FieldPreset::Pdf417.decoder();
    let mut block = FieldPreset::Pdf417
        .encoder()
        .encode_to_vec(&[5, 453, 178, 121, 239], 4)
        .unwrap();
    let original = block.clone();
    assert_eq!(decoder.decode(&mut block, 4, &[]), Ok(0));
    assert_eq!(block, original);
}

#[test]
fn test_full_capacity_every_preset() {
    for preset in FieldPreset::ALL {
        let gf = preset.field();
        let ec = 8;
        let data_len = (gf.order() - ec).min(20);
        let data: Vec<u16> = (0..data_len)
            .map(|i| ((i * 11 + 3) % gf.size()) as u16)
            .collect();
        let original = preset.encoder().encode_to_vec(&data, ec).unwrap();

        let mut block = original.clone();
        for position in [0, 3, data_len, original.len() - 1] {
            block[position] = gf.add(block[position], 1);
        }
        assert_eq!(preset.decoder().decode(&mut block, ec, &[]), Ok(4), "{preset}");
        assert_eq!(block, original, "{preset}");
    }
}

#[test]
fn test_maximum_length_block() {
    let gf = FieldPreset::AztecParam.field();
    let encoder = FieldPreset::AztecParam.encoder();
    let decoder = ReedSolomonDecoder::new(gf);
    let data: Vec<u16> = (0..11).collect();
    let original = encoder.encode_to_vec(&data, 4).unwrap();
    assert_eq!(original.len(), gf.order());

    let mut block = original.clone();
    block[0] ^= 0xF;
    block[14] ^= 0x1;
    assert_eq!(decoder.decode(&mut block, 4, &[]), Ok(2));
    assert_eq!(block, original);
}

#[test]
fn test_over_capacity_fails_and_leaves_block() {
    let data: Vec<u16> = (1..=10).collect();
    let mut block = FieldPreset::QrCode.encoder().encode_to_vec(&data, 7).unwrap();
    block[0] = 0;
    block[3] = 200;
    block[6] = 100;
    block[9] = 50;
    let corrupted = block.clone();

    let result = FieldPreset::QrCode.decoder().decode(&mut block, 7, &[]);
    assert_eq!(
        result,
        Err(RsError::Uncorrectable(Uncorrectable::MissingRoots {
            expected: 4,
            found: 0
        }))
    );
    assert!(result.unwrap_err().is_uncorrectable());
    assert_eq!(block, corrupted);
}

#[test]
fn test_over_capacity_location_outside_block() {
    let mut block = FieldPreset::Pdf417
        .encoder()
        .encode_to_vec(&[5, 453, 178, 121, 239], 4)
        .unwrap();
    block[0] = 0;
    block[1] = 1;
    block[2] = 2;
    let corrupted = block.clone();

    let result = FieldPreset::Pdf417.decoder().decode(&mut block, 4, &[]);
    assert!(matches!(
        result,
        Err(RsError::Uncorrectable(Uncorrectable::PositionOutOfRange { .. }))
    ));
    assert_eq!(block, corrupted);
}

#[test]
fn test_decode_rejects_bad_dimensions() {
    let decoder = FieldPreset::QrCode.decoder();
    let mut long = vec![0u16; 256];
    assert_eq!(
        decoder.decode(&mut long, 10, &[]),
        Err(RsError::BlockTooLong { len: 256, max: 255 })
    );
    let mut short = vec![0u16; 3];
    assert!(matches!(
        decoder.decode(&mut short, 3, &[]),
        Err(RsError::NoDataWords { .. })
    ));
    assert!(!RsError::NoCorrectionWords.is_uncorrectable());
}
