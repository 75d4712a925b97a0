// Decode errors. Every failure names its kind and the byte offset where it
// was detected; no partial dataset is returned alongside an error.

use crate::bitwise::CursorError;
use crate::core::FileKind;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Unknown magic code {magic} at offset {offset}{}", expected_suffix(.expected))]
    UnknownMagic {
        magic: u32,
        expected: Option<FileKind>,
        offset: usize,
    },

    #[error("Truncated input at offset {offset}: need {needed} bytes, {available} left")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Invalid count for '{field}' at offset {offset}: {value}")]
    InvalidCount {
        field: &'static str,
        value: i64,
        offset: usize,
    },

    #[error("IO error: {source}")]
    Io {
        #[source]
        source: io::Error,
        offset: usize,
    },
}

fn expected_suffix(expected: &Option<FileKind>) -> String {
    match expected {
        Some(kind) => format!(" (expected a {} file)", kind),
        None => String::new(),
    }
}

/// Error category without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnknownMagic,
    TruncatedInput,
    InvalidCount,
    Io,
}

impl DecodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::UnknownMagic { .. } => ErrorKind::UnknownMagic,
            DecodeError::TruncatedInput { .. } => ErrorKind::TruncatedInput,
            DecodeError::InvalidCount { .. } => ErrorKind::InvalidCount,
            DecodeError::Io { .. } => ErrorKind::Io,
        }
    }

    /// Byte offset at which the error was detected
    pub fn offset(&self) -> usize {
        match self {
            DecodeError::UnknownMagic { offset, .. }
            | DecodeError::TruncatedInput { offset, .. }
            | DecodeError::InvalidCount { offset, .. }
            | DecodeError::Io { offset, .. } => *offset,
        }
    }
}

impl From<CursorError> for DecodeError {
    fn from(err: CursorError) -> Self {
        match err {
            CursorError::OutOfData {
                offset,
                needed,
                available,
            } => DecodeError::TruncatedInput {
                offset,
                needed,
                available,
            },
        }
    }
}

impl From<io::Error> for DecodeError {
    fn from(source: io::Error) -> Self {
        DecodeError::Io { source, offset: 0 }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
