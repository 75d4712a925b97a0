// Low-level binary reading: byte cursor and bit-range extraction

pub mod cursor;
pub mod fields;

pub use cursor::{BitWidth, ByteCursor, CursorError};
pub use fields::{BitField, BitLayout, BitOrder};
