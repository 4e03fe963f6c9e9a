//! Process-wide fields and encoders for each barcode family
//!
//! | Preset        | Field  | Reduction   | Base |
//! |---------------|--------|-------------|------|
//! | `qr`          | GF(256)  | 0x011D    | 0    |
//! | `datamatrix`  | GF(256)  | 0x012D    | 1    |
//! | `aztec8`      | GF(256)  | 0x012D    | 1    |
//! | `aztec12`     | GF(4096) | 0x1069    | 1    |
//! | `aztec10`     | GF(1024) | 0x0409    | 1    |
//! | `aztec6`      | GF(64)   | 0x0043    | 1    |
//! | `maxicode`    | GF(64)   | 0x0043    | 1    |
//! | `aztec-param` | GF(16)   | 0x0013    | 1    |
//! | `pdf417`      | Z_929    | generator 3 | 1  |
//!
//! Presets that share parameters share one table and one encoder. Tables are
//! built on first use.

use super::decoder::ReedSolomonDecoder;
use super::encoder::ReedSolomonEncoder;
use super::galois::{FieldKind, GaloisField};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const SLOTS: usize = 7;

static FIELDS: [OnceLock<GaloisField>; SLOTS] = [
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
];

static ENCODERS: [OnceLock<ReedSolomonEncoder<'static>>; SLOTS] = [
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPreset {
    QrCode,
    DataMatrix,
    Aztec12,
    Aztec10,
    Aztec8,
    Aztec6,
    AztecParam,
    MaxiCode,
    Pdf417,
}

impl FieldPreset {
    pub const ALL: [FieldPreset; 9] = [
        FieldPreset::QrCode,
        FieldPreset::DataMatrix,
        FieldPreset::Aztec12,
        FieldPreset::Aztec10,
        FieldPreset::Aztec8,
        FieldPreset::Aztec6,
        FieldPreset::AztecParam,
        FieldPreset::MaxiCode,
        FieldPreset::Pdf417,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FieldPreset::QrCode => "qr",
            FieldPreset::DataMatrix => "datamatrix",
            FieldPreset::Aztec12 => "aztec12",
            FieldPreset::Aztec10 => "aztec10",
            FieldPreset::Aztec8 => "aztec8",
            FieldPreset::Aztec6 => "aztec6",
            FieldPreset::AztecParam => "aztec-param",
            FieldPreset::MaxiCode => "maxicode",
            FieldPreset::Pdf417 => "pdf417",
        }
    }

    /// `(kind, size, generator base)` for this family
    pub fn parameters(self) -> (FieldKind, usize, u32) {
        match self {
            FieldPreset::QrCode => (FieldKind::Binary { primitive: 0x011D }, 256, 0),
            FieldPreset::DataMatrix | FieldPreset::Aztec8 => {
                (FieldKind::Binary { primitive: 0x012D }, 256, 1)
            }
            FieldPreset::Aztec12 => (FieldKind::Binary { primitive: 0x1069 }, 4096, 1),
            FieldPreset::Aztec10 => (FieldKind::Binary { primitive: 0x0409 }, 1024, 1),
            FieldPreset::Aztec6 | FieldPreset::MaxiCode => {
                (FieldKind::Binary { primitive: 0x0043 }, 64, 1)
            }
            FieldPreset::AztecParam => (FieldKind::Binary { primitive: 0x0013 }, 16, 1),
            FieldPreset::Pdf417 => (
                FieldKind::Prime {
                    modulus: 929,
                    generator: 3,
                },
                929,
                1,
            ),
        }
    }

    fn slot(self) -> usize {
        match self {
            FieldPreset::QrCode => 0,
            FieldPreset::DataMatrix | FieldPreset::Aztec8 => 1,
            FieldPreset::Aztec12 => 2,
            FieldPreset::Aztec10 => 3,
            FieldPreset::Aztec6 | FieldPreset::MaxiCode => 4,
            FieldPreset::AztecParam => 5,
            FieldPreset::Pdf417 => 6,
        }
    }

    /// Shared field, built on first use
    pub fn field(self) -> &'static GaloisField {
        FIELDS[self.slot()].get_or_init(|| {
            let (kind, size, base) = self.parameters();
            GaloisField::build(kind, size, base)
        })
    }

    /// Shared encoder whose generator cache lives for the whole process
    pub fn encoder(self) -> &'static ReedSolomonEncoder<'static> {
        ENCODERS[self.slot()].get_or_init(|| ReedSolomonEncoder::new(self.field()))
    }

    pub fn decoder(self) -> ReedSolomonDecoder<'static> {
        ReedSolomonDecoder::new(self.field())
    }
}

impl fmt::Display for FieldPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        FieldPreset::ALL
            .into_iter()
            .find(|preset| preset.name() == lowered)
            .ok_or_else(|| {
                let names: Vec<&str> = FieldPreset::ALL.iter().map(|p| p.name()).collect();
                format!("unknown field preset '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}
