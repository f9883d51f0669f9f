// src/codec/numeric.rs
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use bytemuck::Pod;
use std::fmt::Debug;
use std::mem;

use super::{head, head_mut, read_transformed, transformed, write_transformed, Plan};
use crate::error::Result;
use crate::native::{self, NativeOrder};
use crate::transform::Transform;
use crate::types::{Endian, NumericKind};

mod sealed {
    pub trait Sealed {}
}

/// Fixed-width numeric value with a byte order
///
/// Implemented for `u8`, `i8`, `u16`, `i16`, `u32`, `i32`, `u64`, `i64`, and,
/// with the `float` feature, `f32` and `f64`. Signed types reinterpret their
/// bits as the unsigned type of the same width and delegate to it.
pub trait Numeric: Pod + PartialEq + Debug + sealed::Sealed {
    const KIND: NumericKind;

    /// Size in bytes
    const WIDTH: usize = mem::size_of::<Self>();

    /// Convert `value` between `native`'s order for this type and `order`
    fn convert_with(native: &NativeOrder, order: Endian, value: Self) -> Result<Self>;

    /// Decode a value stored in `order`, relative to `native`
    fn read_with(native: &NativeOrder, order: Endian, src: &[u8]) -> Result<Self>;

    /// Encode `value` in `order`, relative to `native`
    fn write_with(native: &NativeOrder, order: Endian, dst: &mut [u8], value: Self) -> Result<()>;

    /// Convert `value` between native order and `order`
    ///
    /// Conversion is an involution: converting a converted value with the
    /// same order gives back the original bits.
    fn convert(order: Endian, value: Self) -> Result<Self> {
        Self::convert_with(&native::native_order(), order, value)
    }

    /// Decode a value stored in `order` from the start of `src`
    fn read(order: Endian, src: &[u8]) -> Result<Self> {
        Self::read_with(&native::native_order(), order, src)
    }

    /// Encode `value` in `order` into the start of `dst`
    fn write(order: Endian, dst: &mut [u8], value: Self) -> Result<()> {
        Self::write_with(&native::native_order(), order, dst, value)
    }

    /// Native order of this type's category
    fn native_order() -> Endian {
        native::native_order().for_category(Self::KIND.category())
    }
}

impl sealed::Sealed for u8 {}

// Single bytes have no order; only the descriptor is checked.
impl Numeric for u8 {
    const KIND: NumericKind = NumericKind::Unsigned;

    fn convert_with(_native: &NativeOrder, order: Endian, value: Self) -> Result<Self> {
        order.validate()?;
        Ok(value)
    }

    fn read_with(_native: &NativeOrder, order: Endian, src: &[u8]) -> Result<Self> {
        order.validate()?;
        Ok(head(src, Self::WIDTH)?[0])
    }

    fn write_with(_native: &NativeOrder, order: Endian, dst: &mut [u8], value: Self) -> Result<()> {
        order.validate()?;
        head_mut(dst, Self::WIDTH)?[0] = value;
        Ok(())
    }
}

macro_rules! impl_unsigned {
    ($ty:ty, $read:ident, $write:ident) => {
        impl sealed::Sealed for $ty {}

        impl Numeric for $ty {
            const KIND: NumericKind = NumericKind::Unsigned;

            fn convert_with(native: &NativeOrder, order: Endian, value: Self) -> Result<Self> {
                let plan = Plan::new::<Self>(native, order)?;
                Ok(if plan.transform.is_identity() {
                    value
                } else if plan.transform == Transform::REVERSE {
                    value.swap_bytes()
                } else {
                    transformed(value, plan.transform)
                })
            }

            fn read_with(native: &NativeOrder, order: Endian, src: &[u8]) -> Result<Self> {
                let plan = Plan::new::<Self>(native, order)?;
                let src = head(src, Self::WIDTH)?;
                Ok(if !plan.is_plain_host() {
                    read_transformed(src, plan.transform)
                } else if plan.order.is_big_endian() {
                    BigEndian::$read(src)
                } else {
                    LittleEndian::$read(src)
                })
            }

            fn write_with(
                native: &NativeOrder,
                order: Endian,
                dst: &mut [u8],
                value: Self,
            ) -> Result<()> {
                let plan = Plan::new::<Self>(native, order)?;
                let dst = head_mut(dst, Self::WIDTH)?;
                if !plan.is_plain_host() {
                    write_transformed(dst, value, plan.transform);
                } else if plan.order.is_big_endian() {
                    BigEndian::$write(dst, value);
                } else {
                    LittleEndian::$write(dst, value);
                }
                Ok(())
            }
        }
    };
}

macro_rules! impl_signed {
    ($ty:ty => $unsigned:ty) => {
        impl sealed::Sealed for $ty {}

        impl Numeric for $ty {
            const KIND: NumericKind = NumericKind::Signed;

            fn convert_with(native: &NativeOrder, order: Endian, value: Self) -> Result<Self> {
                <$unsigned as Numeric>::convert_with(native, order, bytemuck::cast(value)).map(bytemuck::cast)
            }

            fn read_with(native: &NativeOrder, order: Endian, src: &[u8]) -> Result<Self> {
                <$unsigned as Numeric>::read_with(native, order, src).map(bytemuck::cast)
            }

            fn write_with(
                native: &NativeOrder,
                order: Endian,
                dst: &mut [u8],
                value: Self,
            ) -> Result<()> {
                <$unsigned as Numeric>::write_with(native, order, dst, bytemuck::cast(value))
            }
        }
    };
}

// Floats never take the swap_bytes shortcut; every mismatch goes through
// the byte transform.
#[cfg(feature = "float")]
macro_rules! impl_float {
    ($ty:ty, $read:ident, $write:ident) => {
        impl sealed::Sealed for $ty {}

        impl Numeric for $ty {
            const KIND: NumericKind = NumericKind::Float;

            fn convert_with(native: &NativeOrder, order: Endian, value: Self) -> Result<Self> {
                let plan = Plan::new::<Self>(native, order)?;
                Ok(transformed(value, plan.transform))
            }

            fn read_with(native: &NativeOrder, order: Endian, src: &[u8]) -> Result<Self> {
                let plan = Plan::new::<Self>(native, order)?;
                let src = head(src, Self::WIDTH)?;
                Ok(if !plan.is_plain_host() {
                    read_transformed(src, plan.transform)
                } else if plan.order.is_big_endian() {
                    BigEndian::$read(src)
                } else {
                    LittleEndian::$read(src)
                })
            }

            fn write_with(
                native: &NativeOrder,
                order: Endian,
                dst: &mut [u8],
                value: Self,
            ) -> Result<()> {
                let plan = Plan::new::<Self>(native, order)?;
                let dst = head_mut(dst, Self::WIDTH)?;
                if !plan.is_plain_host() {
                    write_transformed(dst, value, plan.transform);
                } else if plan.order.is_big_endian() {
                    BigEndian::$write(dst, value);
                } else {
                    LittleEndian::$write(dst, value);
                }
                Ok(())
            }
        }
    };
}

impl_unsigned!(u16, read_u16, write_u16);
impl_unsigned!(u32, read_u32, write_u32);
impl_unsigned!(u64, read_u64, write_u64);

impl_signed!(i8 => u8);
impl_signed!(i16 => u16);
impl_signed!(i32 => u32);
impl_signed!(i64 => u64);

#[cfg(feature = "float")]
impl_float!(f32, read_f32, write_f32);
#[cfg(feature = "float")]
impl_float!(f64, read_f64, write_f64);
