// File header record shared by every kind

use super::kind::FileKind;
use super::value::Value;
use serde::Serialize;

/// Clock the sample timestamps were written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeReference {
    Local,
    Utc,
}

impl TimeReference {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(TimeReference::Local),
            1 => Some(TimeReference::Utc),
            _ => None,
        }
    }
}

/// Retrieval algorithm used to compute a level 2 product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RetrievalMethod {
    Linear,
    CubicSpline,
    NeuralNet,
}

impl RetrievalMethod {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(RetrievalMethod::Linear),
            1 => Some(RetrievalMethod::CubicSpline),
            2 => Some(RetrievalMethod::NeuralNet),
            _ => None,
        }
    }
}

/// Housekeeping block selector.
///
/// Flags are indexed from the most significant bit: flag 0 is the leftmost
/// character of the byte rendered as eight binary digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectorBitmask {
    pub raw: u8,
}

impl SelectorBitmask {
    pub const GPS: usize = 1;
    pub const AMBIENT_TEMPERATURES: usize = 2;
    pub const RECEIVER_STABILITY: usize = 3;
    pub const FLASH_MEMORY: usize = 4;
    pub const QUALITY: usize = 5;
    pub const STATUS: usize = 6;

    pub fn new(raw: u8) -> Self {
        Self { raw }
    }

    pub fn flag(&self, index: usize) -> bool {
        index < 8 && (self.raw >> (7 - index)) & 1 == 1
    }

    pub fn flags(&self) -> [bool; 8] {
        std::array::from_fn(|i| self.flag(i))
    }
}

/// Decoded file header
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileHeader {
    pub kind: FileKind,
    pub magic: u32,
    pub sample_count: usize,
    pub time_reference: Option<TimeReference>,
    pub retrieval: Option<RetrievalMethod>,
    pub selector: Option<SelectorBitmask>,
    /// Name of the header array that serves as the per-sample axis
    pub axis_name: Option<&'static str>,
    /// Header fields in file order
    pub fields: Vec<(&'static str, Value)>,
}

impl FileHeader {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Scalar minimum and maximum of the stored product, when the kind has them
    pub fn bounds(&self) -> Option<(f32, f32)> {
        let min = self.get("min")?.as_f32()?;
        let max = self.get("max")?.as_f32()?;
        Some((min, max))
    }

    /// Frequency, altitude or angle axis
    pub fn axis(&self) -> Option<&Value> {
        self.get(self.axis_name?)
    }
}
