// Forward-only little-endian reader over an in-memory file image

use nom::number::complete::{le_f32, le_i32, le_u16, le_u32, u8 as le_u8};
use nom::IResult;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    #[error("Out of data at offset {offset}: need {needed} bytes, {available} left")]
    OutOfData {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

pub type Result<T> = std::result::Result<T, CursorError>;

/// Size of a packed flag word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitWidth {
    W8,
    W16,
    W32,
}

impl BitWidth {
    /// Bytes occupied by the word in the file
    pub fn bytes(self) -> usize {
        match self {
            BitWidth::W8 => 1,
            BitWidth::W16 => 2,
            BitWidth::W32 => 4,
        }
    }
}

/// Sequential byte reader.
///
/// Every successful read advances the offset and nothing moves it back.
/// A failed read leaves the offset where it was.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current byte offset from the start of the buffer
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Bytes not consumed yet
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    fn out_of_data(&self, needed: usize) -> CursorError {
        CursorError::OutOfData {
            offset: self.pos,
            needed,
            available: self.remaining(),
        }
    }

    fn parse<T>(
        &mut self,
        width: usize,
        parser: impl FnOnce(&'a [u8]) -> IResult<&'a [u8], T>,
    ) -> Result<T> {
        let data = self.data;
        let input = &data[self.pos..];
        match parser(input) {
            Ok((rest, value)) => {
                self.pos = self.data.len() - rest.len();
                Ok(value)
            }
            Err(_) => Err(self.out_of_data(width)),
        }
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.parse(1, le_u8)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        self.parse(4, le_u32)
    }

    pub fn read_i32_le(&mut self) -> Result<i32> {
        self.parse(4, le_i32)
    }

    pub fn read_f32_le(&mut self) -> Result<f32> {
        self.parse(4, le_f32)
    }

    /// Take the next `n` bytes as a borrowed slice
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(self.out_of_data(n));
        }
        let data = self.data;
        let start = self.pos;
        self.pos += n;
        Ok(&data[start..self.pos])
    }

    /// Read a little-endian packed flag word
    pub fn read_bitfield(&mut self, width: BitWidth) -> Result<u32> {
        let needed = width.bytes();
        match width {
            BitWidth::W8 => self.parse(needed, le_u8).map(u32::from),
            BitWidth::W16 => self.parse(needed, le_u16).map(u32::from),
            BitWidth::W32 => self.parse(needed, le_u32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_reads() {
        let mut data = Vec::new();
        data.extend_from_slice(&934501000u32.to_le_bytes());
        data.extend_from_slice(&(-7i32).to_le_bytes());
        data.extend_from_slice(&1.5f32.to_le_bytes());
        data.push(0x81);

        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_u32_le().unwrap(), 934501000);
        assert_eq!(cursor.offset(), 4);
        assert_eq!(cursor.read_i32_le().unwrap(), -7);
        assert_eq!(cursor.read_f32_le().unwrap(), 1.5);
        assert_eq!(cursor.read_i8().unwrap(), -127);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_out_of_data_reports_offset() {
        let data = [1u8, 2, 3, 4, 5, 6];
        let mut cursor = ByteCursor::new(&data);
        cursor.read_u32_le().unwrap();

        let err = cursor.read_u32_le().unwrap_err();
        assert_eq!(
            err,
            CursorError::OutOfData {
                offset: 4,
                needed: 4,
                available: 2
            }
        );
        // A failed read does not consume anything
        assert_eq!(cursor.offset(), 4);
        assert_eq!(cursor.read_bytes(2).unwrap(), &[5, 6]);
    }

    #[test]
    fn test_read_bytes_bounds() {
        let data = [0u8; 3];
        let mut cursor = ByteCursor::new(&data);
        assert!(cursor.read_bytes(4).is_err());
        assert_eq!(cursor.read_bytes(3).unwrap().len(), 3);
        assert_eq!(cursor.read_bytes(0).unwrap().len(), 0);
    }

    #[test]
    fn test_read_bitfield_widths() {
        let data = [0xAB, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_bitfield(BitWidth::W8).unwrap(), 0xAB);
        assert_eq!(cursor.read_bitfield(BitWidth::W16).unwrap(), 0x1234);
        assert_eq!(cursor.read_bitfield(BitWidth::W32).unwrap(), 0x12345678);
        assert!(cursor.read_bitfield(BitWidth::W8).is_err());
    }

    #[test]
    fn test_read_bitfield_short_word() {
        let data = [0x01, 0x02, 0x03];
        let mut cursor = ByteCursor::new(&data);
        let err = cursor.read_bitfield(BitWidth::W32).unwrap_err();
        assert_eq!(
            err,
            CursorError::OutOfData {
                offset: 0,
                needed: BitWidth::W32.bytes(),
                available: 3
            }
        );
        assert_eq!(cursor.read_bitfield(BitWidth::W16).unwrap(), 0x0201);
        assert_eq!(BitWidth::W8.bytes(), 1);
    }
}
