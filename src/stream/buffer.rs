// src/stream/buffer.rs
use bytes::{Bytes, BytesMut};

use crate::codec::{self, Numeric};
use crate::error::Result;
use crate::types::Endian;

/// Growable buffer that encodes every value in one byte order
///
/// Values may be of any [`Numeric`] type and can be mixed freely; the buffer
/// only tracks how many were written.
///
/// # Example
///
/// ```
/// use mixendian_rs::stream::EndianBuffer;
/// use mixendian_rs::Endian;
///
/// let mut buffer = EndianBuffer::new(Endian::BIG).unwrap();
/// buffer.put(0x0102u16).unwrap();
/// buffer.put(-1i32).unwrap();
///
/// assert_eq!(buffer.value_count(), 2);
/// assert_eq!(buffer.as_bytes(), &[0x01, 0x02, 0xFF, 0xFF, 0xFF, 0xFF]);
/// ```
#[derive(Debug)]
pub struct EndianBuffer {
    buffer: BytesMut,
    order: Endian,
    value_count: u64,
}

impl EndianBuffer {
    /// Create a new buffer with default capacity (8192 bytes)
    pub fn new(order: Endian) -> Result<Self> {
        Self::with_capacity(order, 8192)
    }

    /// Create a new buffer with specified capacity
    ///
    /// Fails if `order` is not a valid byte order.
    pub fn with_capacity(order: Endian, capacity: usize) -> Result<Self> {
        Ok(EndianBuffer {
            buffer: BytesMut::with_capacity(capacity),
            order: order.validate()?,
            value_count: 0,
        })
    }

    /// Append a single value
    pub fn put<T: Numeric>(&mut self, value: T) -> Result<()> {
        let start = self.buffer.len();
        self.buffer.resize(start + T::WIDTH, 0);
        if let Err(err) = T::write(self.order, &mut self.buffer[start..], value) {
            self.buffer.truncate(start);
            return Err(err);
        }
        self.value_count += 1;
        Ok(())
    }

    /// Append a slice of values
    ///
    /// # Example
    ///
    /// ```
    /// use mixendian_rs::stream::EndianBuffer;
    /// use mixendian_rs::Endian;
    ///
    /// let mut buffer = EndianBuffer::new(Endian::LITTLE).unwrap();
    /// buffer.put_slice(&[1u64, 2, 3]).unwrap();
    ///
    /// assert_eq!(buffer.value_count(), 3);
    /// assert_eq!(buffer.byte_len(), 24);
    /// ```
    pub fn put_slice<T: Numeric>(&mut self, values: &[T]) -> Result<()> {
        if values.is_empty() {
            return Ok(());
        }

        let transform = codec::transform_for::<T>(self.order)?;
        let start = self.buffer.len();
        self.buffer.extend_from_slice(bytemuck::cast_slice(values));
        // copied in native order, rearranged in place
        transform.apply_each(&mut self.buffer[start..], T::WIDTH);

        self.value_count += values.len() as u64;
        Ok(())
    }

    pub fn order(&self) -> Endian {
        self.order
    }

    /// Get the number of values written to this buffer
    pub fn value_count(&self) -> u64 {
        self.value_count
    }

    /// Get the total size in bytes
    pub fn byte_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Clear the buffer, resetting value count and removing all data
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.value_count = 0;
    }

    /// Take the buffer contents, leaving an empty buffer
    pub fn take(&mut self) -> Bytes {
        self.value_count = 0;
        self.buffer.split().freeze()
    }
}
