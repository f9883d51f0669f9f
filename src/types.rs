// src/types.rs
use std::fmt;
use std::ops::BitOr;

use crate::error::{EndianError, Result};

/// Byte order descriptor
///
/// Two independent facets packed into the low bits of a `u32`:
///
/// - bit 0 (`BIG`): most significant byte first
/// - bit 1 (`SWAP_PAIRS`): adjacent byte pairs are additionally swapped
///
/// The four combinations are the only valid orders. `UNKNOWN` is a sentinel
/// returned by native order resolution for layouts that cannot be classified,
/// and is rejected wherever an order is taken as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endian(u32);

impl Endian {
    const REVERSE_BIT: u32 = 1 << 0;
    const SWAP_PAIRS_BIT: u32 = 1 << 1;
    const VALID_MASK: u32 = Self::REVERSE_BIT | Self::SWAP_PAIRS_BIT;

    pub const LITTLE: Endian = Endian(0);
    pub const BIG: Endian = Endian(Self::REVERSE_BIT);
    pub const SWAP_PAIRS: Endian = Endian(Self::SWAP_PAIRS_BIT);
    pub const UNKNOWN: Endian = Endian(u32::MAX);

    /// PDP-11 order (big-endian words made of little-endian byte pairs)
    pub const PDP_11: Endian = Endian(Self::REVERSE_BIT | Self::SWAP_PAIRS_BIT);

    /// Honeywell 316 order (little-endian words made of big-endian byte pairs)
    pub const HONEYWELL_316: Endian = Endian(Self::SWAP_PAIRS_BIT);

    /// Integer order of the compilation target
    #[cfg(target_endian = "little")]
    pub const HOST: Endian = Endian::LITTLE;

    #[cfg(target_endian = "big")]
    pub const HOST: Endian = Endian::BIG;

    /// All valid orders, in descriptor order
    pub const ALL: [Endian; 4] = [
        Endian::LITTLE,
        Endian::BIG,
        Endian::HONEYWELL_316,
        Endian::PDP_11,
    ];

    /// Wrap raw descriptor bits without validation
    pub const fn from_bits(bits: u32) -> Self {
        Endian(bits)
    }

    /// Wrap raw descriptor bits, returning `None` unless they name a valid order
    pub fn from_u32(bits: u32) -> Option<Self> {
        let order = Endian(bits);
        if order.is_valid() {
            Some(order)
        } else {
            None
        }
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub const fn is_valid(&self) -> bool {
        self.0 & !Self::VALID_MASK == 0
    }

    pub const fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN.0
    }

    /// Most significant byte first (before any pair swap)
    pub const fn is_big_endian(&self) -> bool {
        self.0 & Self::REVERSE_BIT != 0
    }

    pub const fn swaps_pairs(&self) -> bool {
        self.0 & Self::SWAP_PAIRS_BIT != 0
    }

    pub fn set_big_endian(&mut self, value: bool) {
        if value {
            self.0 |= Self::REVERSE_BIT;
        } else {
            self.0 &= !Self::REVERSE_BIT;
        }
    }

    pub fn set_swap_pairs(&mut self, value: bool) {
        if value {
            self.0 |= Self::SWAP_PAIRS_BIT;
        } else {
            self.0 &= !Self::SWAP_PAIRS_BIT;
        }
    }

    /// Check that this descriptor is one of the four valid orders
    pub fn validate(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(EndianError::InvalidOrder(self.0))
        }
    }

    /// Get the conventional name of this order
    pub fn name(&self) -> &'static str {
        match self.0 {
            0 => "little",
            1 => "big",
            2 => "honeywell-316",
            3 => "pdp-11",
            _ if self.is_unknown() => "unknown",
            _ => "invalid",
        }
    }
}

impl BitOr for Endian {
    type Output = Endian;

    fn bitor(self, rhs: Endian) -> Endian {
        Endian(self.0 | rhs.0)
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric category, each with its own native order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Integer,
    Float,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Integer => "integer",
            Category::Float => "float",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of a fixed-width numeric value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Unsigned,
    Signed,
    Float,
}

impl NumericKind {
    pub fn category(&self) -> Category {
        match self {
            NumericKind::Unsigned | NumericKind::Signed => Category::Integer,
            NumericKind::Float => Category::Float,
        }
    }
}
