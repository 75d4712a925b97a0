// Named bit ranges inside packed flag words

use serde::{Deserialize, Serialize};

/// How bit positions in a layout table are counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BitOrder {
    /// Position 0 is the most significant bit (leftmost character when the
    /// word is rendered as a binary string)
    Msb0,
    /// Position 0 is the least significant bit
    Lsb0,
}

/// One named sub-field of a flag word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    pub name: &'static str,
    pub offset: u32,
    pub width: u32,
}

impl BitField {
    pub const fn new(name: &'static str, offset: u32, width: u32) -> Self {
        Self {
            name,
            offset,
            width,
        }
    }
}

/// A complete bit map for a word of `word_bits` bits
#[derive(Debug, Clone, Copy)]
pub struct BitLayout {
    pub word_bits: u32,
    pub order: BitOrder,
    pub fields: &'static [BitField],
}

impl BitLayout {
    /// Extract a single field.
    ///
    /// For `Msb0` layouts the leftmost position of the range is the most
    /// significant bit of the result; for `Lsb0` the lowest offset is the
    /// least significant bit.
    pub fn extract(&self, word: u32, field: &BitField) -> u8 {
        let mask = (1u32 << field.width) - 1;
        let shift = match self.order {
            BitOrder::Lsb0 => field.offset,
            BitOrder::Msb0 => self.word_bits - field.offset - field.width,
        };
        ((word >> shift) & mask) as u8
    }

    /// Extract every field in table order
    pub fn decode(&self, word: u32) -> Vec<u8> {
        self.fields.iter().map(|f| self.extract(word, f)).collect()
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&'static BitField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of all fields in table order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    /// True when no two fields overlap and all fit inside the word
    pub fn is_well_formed(&self) -> bool {
        let mut used: u64 = 0;
        for f in self.fields {
            if f.width == 0 || f.width > 8 || f.offset + f.width > self.word_bits {
                return false;
            }
            let bits = ((1u64 << f.width) - 1) << f.offset;
            if used & bits != 0 {
                return false;
            }
            used |= bits;
        }
        true
    }
}
