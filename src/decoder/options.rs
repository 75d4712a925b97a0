// Decoder configuration

use crate::core::constants::{MAX_AXIS_LEN, MAX_SAMPLE_COUNT};
use crate::core::FileKind;

/// Options for a single decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Largest sample count accepted from a header
    pub max_sample_count: usize,

    /// Largest frequency/altitude/angle axis accepted from a header
    pub max_axis_len: usize,

    /// Reject files whose magic code belongs to another kind
    pub expected_kind: Option<FileKind>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_sample_count: MAX_SAMPLE_COUNT,
            max_axis_len: MAX_AXIS_LEN,
            expected_kind: None,
        }
    }
}

impl DecodeOptions {
    /// Options that accept only `kind`
    pub fn new(kind: FileKind) -> Self {
        Self {
            expected_kind: Some(kind),
            ..Default::default()
        }
    }

    pub fn with_max_sample_count(mut self, max: usize) -> Self {
        self.max_sample_count = max;
        self
    }

    pub fn with_max_axis_len(mut self, max: usize) -> Self {
        self.max_axis_len = max;
        self
    }

    pub fn with_expected_kind(mut self, kind: FileKind) -> Self {
        self.expected_kind = Some(kind);
        self
    }
}
