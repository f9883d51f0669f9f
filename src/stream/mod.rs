// src/stream/mod.rs
//! Byte-ordered streams of numeric values
//!
//! - [`EndianBuffer`] - Accumulates values encoded in one byte order
//! - [`EndianReader`] - Reads values from any `std::io::Read`
//! - [`EndianWriter`] - Writes values to any `std::io::Write`
//!
//! # Examples
//!
//! ```
//! use mixendian_rs::stream::{EndianBuffer, EndianReader};
//! use mixendian_rs::Endian;
//! use std::io::Cursor;
//!
//! let mut buffer = EndianBuffer::new(Endian::PDP_11).unwrap();
//! buffer.put_slice(&[10u32, 20, 30]).unwrap();
//!
//! let mut cursor = Cursor::new(buffer.as_bytes());
//! let values: Vec<u32> = EndianReader::read_values(&mut cursor, 3, Endian::PDP_11).unwrap();
//! assert_eq!(values, vec![10, 20, 30]);
//! ```

mod buffer;
mod reader;

pub use buffer::EndianBuffer;
pub use reader::{EndianReader, EndianWriter};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Endian;
    use std::io::Cursor;

    #[test]
    fn test_buffer_and_reader_roundtrip() {
        let original = vec![10i32, -20, 30, -40, 50];
        for order in Endian::ALL {
            let mut buffer = EndianBuffer::new(order).unwrap();
            buffer.put_slice(&original).unwrap();

            let mut cursor = Cursor::new(buffer.as_bytes());
            let read: Vec<i32> = EndianReader::read_values(&mut cursor, 5, order).unwrap();
            assert_eq!(original, read);
        }
    }

    #[cfg(feature = "float")]
    #[test]
    fn test_float_roundtrip() {
        let original = vec![3.14159f64, 2.71828, -1.41421, 1.73205];
        for order in Endian::ALL {
            let mut out = Vec::new();
            EndianWriter::write_values(&mut out, order, &original).unwrap();

            let mut cursor = Cursor::new(out);
            let read: Vec<f64> = EndianReader::read_values(&mut cursor, 4, order).unwrap();
            assert_eq!(original, read);
        }
    }

    #[test]
    fn test_mixed_value_sequence() {
        let mut buffer = EndianBuffer::new(Endian::BIG).unwrap();
        buffer.put(7u8).unwrap();
        buffer.put(0x0102u16).unwrap();
        buffer.put(-2i64).unwrap();

        let mut cursor = Cursor::new(buffer.take());
        assert_eq!(EndianReader::read_value::<u8, _>(&mut cursor, Endian::BIG).unwrap(), 7);
        assert_eq!(EndianReader::read_value::<u16, _>(&mut cursor, Endian::BIG).unwrap(), 0x0102);
        assert_eq!(EndianReader::read_value::<i64, _>(&mut cursor, Endian::BIG).unwrap(), -2);
    }
}
