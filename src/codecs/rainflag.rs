// Rain flag byte codecs
//
// Positions below count from the leftmost character of the 8-character
// binary rendering of the byte (MSB first).

use crate::bitwise::{BitField, BitLayout, BitOrder};
use serde::{Deserialize, Serialize};

/// General rain flag: MSB 000yyxxr LSB
pub const RAIN_FLAG_LAYOUT: BitLayout = BitLayout {
    word_bits: 8,
    order: BitOrder::Msb0,
    fields: &[
        BitField::new("rain", 7, 1),
        BitField::new("quality", 5, 2),
        BitField::new("reason", 3, 2),
    ],
};

/// Boundary-layer scan flag: rain in the top bit, scan mode in positions 5-6
pub const SCAN_MODE_LAYOUT: BitLayout = BitLayout {
    word_bits: 8,
    order: BitOrder::Msb0,
    fields: &[BitField::new("rain", 0, 1), BitField::new("mode", 5, 2)],
};

/// Rain state and retrieval quality of one sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RainFlag {
    /// 0 = no rain, 1 = raining
    pub rain: u8,
    /// 0 = not evaluated, 1 = high, 2 = medium, 3 = low
    pub quality: u8,
    /// 0 = unknown, 1 = external interference or channel failure,
    /// 2 = LWP too high, 3 = unused
    pub reason: u8,
}

impl RainFlag {
    pub fn is_raining(&self) -> bool {
        self.rain == 1
    }
}

/// Decode a general rain flag byte
pub fn decode(byte: u8) -> RainFlag {
    let values = RAIN_FLAG_LAYOUT.decode(u32::from(byte));
    RainFlag {
        rain: values[0],
        quality: values[1],
        reason: values[2],
    }
}

/// Scan pattern of a boundary-layer elevation scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanPattern {
    FirstQuadrant,
    AveragedQuadrants,
    SecondQuadrant,
    IndependentScans,
}

impl ScanPattern {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::FirstQuadrant),
            1 => Some(Self::AveragedQuadrants),
            2 => Some(Self::SecondQuadrant),
            3 => Some(Self::IndependentScans),
            _ => None,
        }
    }
}

/// Rain state and scan mode of one boundary-layer sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanMode {
    pub rain: u8,
    pub mode: u8,
}

impl ScanMode {
    pub fn pattern(&self) -> Option<ScanPattern> {
        ScanPattern::from_code(self.mode)
    }
}

/// Decode a boundary-layer rain/mode byte
pub fn decode_scan_mode(byte: u8) -> ScanMode {
    let values = SCAN_MODE_LAYOUT.decode(u32::from(byte));
    ScanMode {
        rain: values[0],
        mode: values[1],
    }
}
