// src/lib.rs
//! # mixendian-rs
//!
//! Byte order conversion for fixed-width integers and IEEE-754 floats, and
//! reading/writing them from/to raw byte buffers in a chosen order.
//!
//! ## Features
//!
//! - 🔀 **Four Byte Orders**: little, big, PDP-11 and Honeywell 316
//! - 🧭 **Native Detection**: integer and float word orders resolved independently
//! - ✅ **Checked**: invalid orders and short buffers are errors, never undefined behaviour
//! - 🧵 **Thread-Safe**: native orders are resolved once, everything else is pure
//! - 📦 **Bulk I/O**: slices, growable buffers and `std::io` streams
//!
//! ## Quick Start
//!
//! ### Converting Values
//!
//! ```rust
//! use mixendian_rs::*;
//!
//! fn main() -> Result<()> {
//!     let big = Endian::BIG.convert(0x0102u16)?;
//!     assert_eq!(big.to_ne_bytes(), [0x01, 0x02]);
//!
//!     // Converting back with the same order restores the value
//!     assert_eq!(Endian::BIG.convert(big)?, 0x0102);
//!     Ok(())
//! }
//! ```
//!
//! ### Reading and Writing Buffers
//!
//! ```rust
//! use mixendian_rs::*;
//!
//! fn main() -> Result<()> {
//!     let mut buf = [0u8; 4];
//!
//!     Endian::PDP_11.write(&mut buf, 0x0102_0304u32)?;
//!     assert_eq!(buf, [0x02, 0x01, 0x04, 0x03]);
//!
//!     # #[cfg(feature = "float")]
//!     # {
//!     Endian::BIG.write(&mut buf, 7.0f32)?;
//!     assert_eq!(buf, [0x40, 0xE0, 0x00, 0x00]);
//!
//!     Endian::LITTLE.write(&mut buf, 7.0f32)?;
//!     assert_eq!(buf, [0x00, 0x00, 0xE0, 0x40]);
//!
//!     let value: f32 = Endian::LITTLE.read(&buf)?;
//!     assert_eq!(value, 7.0);
//!     # }
//!     Ok(())
//! }
//! ```
//!
//! ### Overriding Native Orders
//!
//! ```rust,no_run
//! use mixendian_rs::native::{self, NativeConfig};
//! use mixendian_rs::*;
//!
//! fn main() -> Result<()> {
//!     // Must run before the first conversion in the process
//!     native::configure(NativeConfig::new().with_float_order(Endian::PDP_11))?;
//!     Ok(())
//! }
//! ```

// Modules
pub mod error;
pub mod types;
pub mod transform;
pub mod native;
pub mod codec;
pub mod stream;

// Re-export commonly used types at the crate root for convenience
pub use error::{EndianError, Result};

pub use types::{
    Endian,
    Category,
    NumericKind,
};

pub use transform::Transform;

pub use native::{
    NativeConfig,
    NativeOrder,
    native_order,
    native_int_order,
};

#[cfg(feature = "float")]
pub use native::native_float_order;

pub use codec::{
    Numeric,
    convert,
    convert_from,
    convert_to,
    read,
    write,
};

pub use stream::{
    EndianBuffer,
    EndianReader,
    EndianWriter,
};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use mixendian_rs::prelude::*;
    //! ```

    pub use crate::error::{EndianError, Result};
    pub use crate::types::Endian;
    pub use crate::codec::Numeric;
    pub use crate::stream::{EndianBuffer, EndianReader, EndianWriter};
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
