// src/codec/mod.rs
//! Value conversion and buffer I/O in a chosen byte order
//!
//! Every operation takes a target [`Endian`] and works out the byte
//! permutation from the native order of the value's category:
//!
//! - [`convert`] rearranges the bytes of a value held in a register
//! - [`read`] decodes a value stored in the given order
//! - [`write`] encodes a native value into the given order
//!
//! # Examples
//!
//! ```
//! use mixendian_rs::Endian;
//!
//! let mut buf = [0u8; 4];
//! Endian::PDP_11.write(&mut buf, 0x0102_0304u32).unwrap();
//! assert_eq!(buf, [0x02, 0x01, 0x04, 0x03]);
//!
//! let value: u32 = Endian::PDP_11.read(&buf).unwrap();
//! assert_eq!(value, 0x0102_0304);
//! ```
//!
//! ```
//! use mixendian_rs::codec;
//! use mixendian_rs::Endian;
//!
//! let big = codec::convert_to(Endian::BIG, 0x0102u16).unwrap();
//! assert_eq!(codec::convert_from(Endian::BIG, big).unwrap(), 0x0102);
//!
//! let native = codec::native_order_of::<u16>();
//! assert_eq!(codec::convert(native, 0x0102u16).unwrap(), 0x0102);
//! ```

mod numeric;

pub use numeric::Numeric;

use bytemuck::Pod;

use crate::error::{EndianError, Result};
use crate::native::{self, NativeOrder};
use crate::transform::Transform;
use crate::types::Endian;

/// Convert `value` between native order and `order`
pub fn convert<T: Numeric>(order: Endian, value: T) -> Result<T> {
    T::convert(order, value)
}

/// Convert a native `value` into `order`
///
/// Same operation as [`convert`], named for the direction at the call site.
pub fn convert_to<T: Numeric>(order: Endian, value: T) -> Result<T> {
    T::convert(order, value)
}

/// Convert a `value` held in `order` into native order
///
/// Same operation as [`convert`], named for the direction at the call site.
pub fn convert_from<T: Numeric>(order: Endian, value: T) -> Result<T> {
    T::convert(order, value)
}

/// Decode a `T` stored in `order` from the start of `src`
pub fn read<T: Numeric>(order: Endian, src: &[u8]) -> Result<T> {
    T::read(order, src)
}

/// Encode a native `value` in `order` into the start of `dst`
pub fn write<T: Numeric>(order: Endian, dst: &mut [u8], value: T) -> Result<()> {
    T::write(order, dst, value)
}

/// Native order that applies to `T`
pub fn native_order_of<T: Numeric>() -> Endian {
    T::native_order()
}

/// Convert every element of `values` in place
///
/// Bit-identical to calling [`convert`] on each element.
pub fn convert_slice<T: Numeric>(order: Endian, values: &mut [T]) -> Result<()> {
    let transform = transform_for::<T>(order)?;
    transform.apply_each(bytemuck::cast_slice_mut(values), T::WIDTH);
    Ok(())
}

impl Endian {
    pub fn convert<T: Numeric>(self, value: T) -> Result<T> {
        T::convert(self, value)
    }

    pub fn convert_to<T: Numeric>(self, value: T) -> Result<T> {
        T::convert(self, value)
    }

    pub fn convert_from<T: Numeric>(self, value: T) -> Result<T> {
        T::convert(self, value)
    }

    pub fn read<T: Numeric>(self, src: &[u8]) -> Result<T> {
        T::read(self, src)
    }

    pub fn write<T: Numeric>(self, dst: &mut [u8], value: T) -> Result<()> {
        T::write(self, dst, value)
    }

    pub fn convert_slice<T: Numeric>(self, values: &mut [T]) -> Result<()> {
        convert_slice(self, values)
    }
}

/// Conversions against explicit native facts instead of the process-wide ones
///
/// # Example
///
/// ```
/// use mixendian_rs::native::{NativeOrder, Resolution};
/// use mixendian_rs::Endian;
///
/// let big_host = NativeOrder {
///     integer: Endian::BIG,
///     float: Endian::BIG,
///     source: Resolution::Configured,
/// };
///
/// let mut buf = [0u8; 2];
/// big_host.write(Endian::BIG, &mut buf, 0x0102u16).unwrap();
/// assert_eq!(buf, 0x0102u16.to_ne_bytes());
/// ```
impl NativeOrder {
    pub fn convert<T: Numeric>(&self, order: Endian, value: T) -> Result<T> {
        T::convert_with(self, order, value)
    }

    pub fn read<T: Numeric>(&self, order: Endian, src: &[u8]) -> Result<T> {
        T::read_with(self, order, src)
    }

    pub fn write<T: Numeric>(&self, order: Endian, dst: &mut [u8], value: T) -> Result<()> {
        T::write_with(self, order, dst, value)
    }
}

/// Validated orders and the transform between them
#[derive(Debug, Clone, Copy)]
pub(crate) struct Plan {
    pub(crate) native: Endian,
    pub(crate) order: Endian,
    pub(crate) transform: Transform,
}

impl Plan {
    pub(crate) fn new<T: Numeric>(native: &NativeOrder, order: Endian) -> Result<Self> {
        let order = order.validate()?;
        let native = native.require(T::KIND.category())?;
        Ok(Plan {
            native,
            order,
            transform: Transform::between(native, order),
        })
    }

    /// Native order is the target's own and the requested order is plain
    /// little or big endian, so `byteorder` decodes it directly
    pub(crate) fn is_plain_host(&self) -> bool {
        self.native == Endian::HOST && !self.order.swaps_pairs()
    }
}

/// Transform between native order and `order` for packed runs of `T`
pub(crate) fn transform_for<T: Numeric>(order: Endian) -> Result<Transform> {
    if T::WIDTH == 1 {
        order.validate()?;
        return Ok(Transform::IDENTITY);
    }
    Ok(Plan::new::<T>(&native::native_order(), order)?.transform)
}

pub(crate) fn head(src: &[u8], width: usize) -> Result<&[u8]> {
    src.get(..width).ok_or(EndianError::BufferTooSmall {
        needed: width,
        available: src.len(),
    })
}

pub(crate) fn head_mut(dst: &mut [u8], width: usize) -> Result<&mut [u8]> {
    let available = dst.len();
    dst.get_mut(..width).ok_or(EndianError::BufferTooSmall {
        needed: width,
        available,
    })
}

pub(crate) fn transformed<T: Pod>(mut value: T, transform: Transform) -> T {
    transform.apply(bytemuck::bytes_of_mut(&mut value));
    value
}

/// `src` must hold exactly `size_of::<T>()` bytes
pub(crate) fn read_transformed<T: Pod>(src: &[u8], transform: Transform) -> T {
    let mut value = T::zeroed();
    let bytes = bytemuck::bytes_of_mut(&mut value);
    bytes.copy_from_slice(src);
    transform.apply(bytes);
    value
}

/// `dst` must hold exactly `size_of::<T>()` bytes
pub(crate) fn write_transformed<T: Pod>(dst: &mut [u8], value: T, transform: Transform) {
    let value = transformed(value, transform);
    dst.copy_from_slice(bytemuck::bytes_of(&value));
}
