// HATPRO-RS: Decoder for RPG HATPRO microwave radiometer data files
// Copyright 2024 - Licensed under GPLv3

pub mod bitwise;
pub mod codecs;
pub mod core;
pub mod decoder;
pub mod formats;

// Re-export commonly used types
pub use bitwise::{ByteCursor, CursorError};
pub use codecs::{Angle, FlagWord, RainFlag, ScanMode};
pub use core::{
    Column, Dataset, FileHeader, FileKind, Matrix, RetrievalMethod, SelectorBitmask,
    TimeReference, Value,
};
pub use decoder::{
    decode, decode_as, decode_file, decode_file_async, decode_with, DecodeError, DecodeOptions,
    ErrorKind,
};
pub use formats::{list_formats, FormatInfo};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_top_level_decode() {
        let err = decode(&[0, 0, 0, 0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownMagic);
        assert_eq!(list_formats().len(), 18);
    }
}
