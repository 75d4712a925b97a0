// Housekeeping quality and status flag words
//
// Both words are 32-bit little-endian integers. Offsets count from the least
// significant bit. Bit maps follow the HKD file description (RPG MWR
// software manual, appendix A19).

use crate::bitwise::{BitField, BitLayout, BitOrder};
use serde::Serialize;

/// Per-product quality flags: eight 4-bit groups `yyxx`, lowest group first.
/// `xx` is the quality level, `yy` the reason for reduced quality.
///
/// Both sub-fields are two bits wide as in the manual's bit map. Reading
/// only the low bit of each pair would lose levels 2 and 3.
pub const QUALITY_LAYOUT: BitLayout = BitLayout {
    word_bits: 32,
    order: BitOrder::Lsb0,
    fields: &[
        BitField::new("lp_quality", 0, 2),
        BitField::new("lp_reason", 2, 2),
        BitField::new("sta_quality", 4, 2),
        BitField::new("sta_reason", 6, 2),
        BitField::new("tpb_quality", 8, 2),
        BitField::new("tpb_reason", 10, 2),
        BitField::new("tpc_quality", 12, 2),
        BitField::new("tpc_reason", 14, 2),
        BitField::new("hpc_quality", 16, 2),
        BitField::new("hpc_reason", 18, 2),
        BitField::new("dly_quality", 20, 2),
        BitField::new("dly_reason", 22, 2),
        BitField::new("iwv_quality", 24, 2),
        BitField::new("iwv_reason", 26, 2),
        BitField::new("lwp_quality", 28, 2),
        BitField::new("lwp_reason", 30, 2),
    ],
};

/// Receiver and system status flags. Bits 7, 15 and 31 are not used.
///
/// Receiver stability occupies bits 24-25 and 26-27 as in the manual,
/// not single bits 22 and 24. Bits 22 and 23 are the noise diode flags.
pub const STATUS_LAYOUT: BitLayout = BitLayout {
    word_bits: 32,
    order: BitOrder::Lsb0,
    fields: &[
        BitField::new("humidity_ch1", 0, 1),
        BitField::new("humidity_ch2", 1, 1),
        BitField::new("humidity_ch3", 2, 1),
        BitField::new("humidity_ch4", 3, 1),
        BitField::new("humidity_ch5", 4, 1),
        BitField::new("humidity_ch6", 5, 1),
        BitField::new("humidity_ch7", 6, 1),
        BitField::new("temperature_ch1", 8, 1),
        BitField::new("temperature_ch2", 9, 1),
        BitField::new("temperature_ch3", 10, 1),
        BitField::new("temperature_ch4", 11, 1),
        BitField::new("temperature_ch5", 12, 1),
        BitField::new("temperature_ch6", 13, 1),
        BitField::new("temperature_ch7", 14, 1),
        BitField::new("rain", 16, 1),
        BitField::new("dew_blower_high_speed", 17, 1),
        BitField::new("boundary_layer_mode", 18, 1),
        BitField::new("sky_tipping_calibration", 19, 1),
        BitField::new("gain_calibration", 20, 1),
        BitField::new("noise_calibration", 21, 1),
        BitField::new("humidity_noise_diode_ok", 22, 1),
        BitField::new("temperature_noise_diode_ok", 23, 1),
        BitField::new("receiver1_stability", 24, 2),
        BitField::new("receiver2_stability", 26, 2),
        BitField::new("power_failure", 28, 1),
        BitField::new("ambient_target_unstable", 29, 1),
        BitField::new("noise_diode_on", 30, 1),
    ],
};

/// A flag word split into its named sub-fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagWord {
    pub raw: u32,
    pub fields: Vec<(&'static str, u8)>,
}

impl FlagWord {
    pub fn get(&self, name: &str) -> Option<u8> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| *value)
    }
}

fn split(layout: &BitLayout, raw: u32) -> FlagWord {
    let fields = layout
        .fields
        .iter()
        .map(|f| (f.name, layout.extract(raw, f)))
        .collect();
    FlagWord { raw, fields }
}

/// Decode a per-product quality word
pub fn decode_quality(raw: u32) -> FlagWord {
    split(&QUALITY_LAYOUT, raw)
}

/// Decode a status word
pub fn decode_status(raw: u32) -> FlagWord {
    split(&STATUS_LAYOUT, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts_well_formed() {
        assert!(QUALITY_LAYOUT.is_well_formed());
        assert!(STATUS_LAYOUT.is_well_formed());
        assert_eq!(QUALITY_LAYOUT.fields.len(), 16);
        assert_eq!(STATUS_LAYOUT.fields.len(), 27);
    }

    #[test]
    fn test_quality_groups() {
        // LWP (top group): quality 3, reason 2 -> 0b1011 in bits 28..31
        let word = decode_quality(0xB000_0000);
        assert_eq!(word.get("lwp_quality"), Some(3));
        assert_eq!(word.get("lwp_reason"), Some(2));
        assert_eq!(word.get("lp_quality"), Some(0));

        // LP (bottom group): quality 1, reason 1 -> 0b0101
        let word = decode_quality(0x0000_0005);
        assert_eq!(word.get("lp_quality"), Some(1));
        assert_eq!(word.get("lp_reason"), Some(1));
        assert_eq!(word.get("sta_quality"), Some(0));
    }

    #[test]
    fn test_status_bits() {
        // all 14 channels ok, rain, receiver 1 stable, receiver 2 not stable
        let raw = 0x7F | (0x7F << 8) | (1 << 16) | (1 << 24) | (2 << 26);
        let word = decode_status(raw);
        assert_eq!(word.raw, raw);
        assert_eq!(word.get("humidity_ch1"), Some(1));
        assert_eq!(word.get("temperature_ch7"), Some(1));
        assert_eq!(word.get("rain"), Some(1));
        assert_eq!(word.get("dew_blower_high_speed"), Some(0));
        assert_eq!(word.get("receiver1_stability"), Some(1));
        assert_eq!(word.get("receiver2_stability"), Some(2));
        assert_eq!(word.get("noise_diode_on"), Some(0));
        assert_eq!(word.get("no_such_flag"), None);
    }

    #[test]
    fn test_unused_bits_ignored() {
        let word = decode_status((1 << 7) | (1 << 15) | (1 << 31));
        assert!(word.fields.iter().all(|(_, v)| *v == 0));
    }

    #[test]
    fn test_all_set() {
        let word = decode_status(u32::MAX);
        assert_eq!(word.get("receiver1_stability"), Some(3));
        assert_eq!(word.get("power_failure"), Some(1));
        let quality = decode_quality(u32::MAX);
        assert!(quality.fields.iter().all(|(_, v)| *v == 3));
    }

    #[test]
    fn test_two_bit_fields_keep_high_bit() {
        let word = decode_quality(0x2);
        assert_eq!(word.get("lp_quality"), Some(2));
        assert_eq!(word.get("lp_reason"), Some(0));

        let word = decode_status((1 << 22) | (1 << 25));
        assert_eq!(word.get("receiver1_stability"), Some(2));
        assert_eq!(word.get("humidity_noise_diode_ok"), Some(1));
        assert_eq!(word.get("temperature_noise_diode_ok"), Some(0));
        assert_eq!(word.get("receiver2_stability"), Some(0));
    }
}
