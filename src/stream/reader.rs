// src/stream/reader.rs
use std::io::{Read, Write};

use crate::codec::{self, Numeric};
use crate::error::{EndianError, Result};
use crate::stream::EndianBuffer;
use crate::types::Endian;

/// Reads typed values stored in a given byte order from a stream
pub struct EndianReader;

impl EndianReader {
    /// Read one value from a stream
    ///
    /// Nothing is consumed from `reader` when `order` is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use mixendian_rs::stream::EndianReader;
    /// use mixendian_rs::Endian;
    /// use std::io::Cursor;
    ///
    /// let mut cursor = Cursor::new(vec![0x01u8, 0x02]);
    /// let value: u16 = EndianReader::read_value(&mut cursor, Endian::BIG).unwrap();
    /// assert_eq!(value, 0x0102);
    /// ```
    pub fn read_value<T: Numeric, R: Read>(reader: &mut R, order: Endian) -> Result<T> {
        let order = order.validate()?;
        let mut scratch = [0u8; 8];
        let bytes = &mut scratch[..T::WIDTH];
        reader.read_exact(bytes)?;
        T::read(order, bytes)
    }

    /// Read an array of values from a stream
    ///
    /// # Arguments
    ///
    /// * `reader` - The stream to read from
    /// * `count` - Number of values to read
    /// * `order` - Byte order the values were stored in
    ///
    /// # Returns
    ///
    /// A vector containing the values in native order
    ///
    /// # Example
    ///
    /// ```
    /// use mixendian_rs::stream::EndianReader;
    /// use mixendian_rs::Endian;
    /// use std::io::Cursor;
    ///
    /// let data = vec![0u8, 1, 0, 2, 0, 3];
    /// let mut cursor = Cursor::new(data);
    ///
    /// let values: Vec<i16> = EndianReader::read_values(&mut cursor, 3, Endian::BIG).unwrap();
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    pub fn read_values<T: Numeric, R: Read>(
        reader: &mut R,
        count: usize,
        order: Endian,
    ) -> Result<Vec<T>> {
        let transform = codec::transform_for::<T>(order)?;
        if count == 0 {
            return Ok(Vec::new());
        }

        let capacity = isize::MAX as usize / T::WIDTH;
        let overflow = EndianError::BufferOverflow {
            attempted: count,
            capacity,
        };
        if count > capacity {
            return Err(overflow);
        }

        let mut values: Vec<T> = Vec::new();
        values.try_reserve_exact(count).map_err(|_| overflow)?;
        values.resize(count, T::zeroed());
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut values);
        reader.read_exact(bytes)?;
        transform.apply_each(bytes, T::WIDTH);

        Ok(values)
    }
}

/// Writes typed values in a given byte order to a stream
pub struct EndianWriter;

impl EndianWriter {
    /// Write one value to a stream
    pub fn write_value<T: Numeric, W: Write>(writer: &mut W, order: Endian, value: T) -> Result<()> {
        let mut scratch = [0u8; 8];
        let bytes = &mut scratch[..T::WIDTH];
        T::write(order, bytes, value)?;
        writer.write_all(bytes)?;
        Ok(())
    }

    /// Write an array of values to a stream
    ///
    /// # Example
    ///
    /// ```
    /// use mixendian_rs::stream::EndianWriter;
    /// use mixendian_rs::Endian;
    ///
    /// let mut out = Vec::new();
    /// EndianWriter::write_values(&mut out, Endian::HONEYWELL_316, &[0x0102_0304u32]).unwrap();
    /// assert_eq!(out, vec![0x03, 0x04, 0x01, 0x02]);
    /// ```
    pub fn write_values<T: Numeric, W: Write>(
        writer: &mut W,
        order: Endian,
        values: &[T],
    ) -> Result<()> {
        let mut buffer = EndianBuffer::with_capacity(order, std::mem::size_of_val(values))?;
        buffer.put_slice(values)?;
        writer.write_all(buffer.as_bytes())?;
        Ok(())
    }
}
