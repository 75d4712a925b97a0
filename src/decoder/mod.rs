// Decoder: turns a file image into a Dataset using the registered layouts

pub mod engine;
pub mod error;
pub mod file;
pub mod options;

pub use engine::{decode, decode_as, decode_with};
pub use error::{DecodeError, ErrorKind, Result};
pub use file::{decode_file, decode_file_async};
pub use options::DecodeOptions;
