// Core data model: file kinds, decoded values, headers and datasets
pub mod constants;
pub mod dataset;
pub mod header;
pub mod kind;
pub mod value;

// Re-export commonly used types
pub use constants::*;
pub use dataset::{Column, Dataset, LengthMismatch};
pub use header::{FileHeader, RetrievalMethod, SelectorBitmask, TimeReference};
pub use kind::FileKind;
pub use value::{Matrix, Value};
