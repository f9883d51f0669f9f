// src/transform.rs
use crate::types::Endian;

/// Byte permutation between two orders
///
/// A transform code is the XOR of two descriptors. Applying it reverses the
/// whole buffer first (bit 0), then swaps every adjacent byte pair (bit 1).
/// The step order matters: reversing after the pair swap would turn a
/// little-endian value into Honeywell 316 order instead of PDP-11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transform(u32);

impl Transform {
    const REVERSE_BIT: u32 = Endian::BIG.bits();
    const SWAP_PAIRS_BIT: u32 = Endian::SWAP_PAIRS.bits();

    pub const IDENTITY: Transform = Transform(0);
    pub const REVERSE: Transform = Transform(Self::REVERSE_BIT);
    pub const SWAP_PAIRS: Transform = Transform(Self::SWAP_PAIRS_BIT);
    pub const REVERSE_SWAP_PAIRS: Transform = Transform(Self::REVERSE_BIT | Self::SWAP_PAIRS_BIT);

    /// Transform that maps bytes laid out in `from` to bytes laid out in `to`
    ///
    /// Both orders must be valid; callers validate before reaching here.
    /// The result is symmetric, so the same transform maps `to` back to `from`.
    pub fn between(from: Endian, to: Endian) -> Self {
        debug_assert!(from.is_valid() && to.is_valid());
        Transform((from.bits() ^ to.bits()) & (Self::REVERSE_BIT | Self::SWAP_PAIRS_BIT))
    }

    pub fn is_identity(&self) -> bool {
        self.0 == 0
    }

    pub fn reverses(&self) -> bool {
        self.0 & Self::REVERSE_BIT != 0
    }

    pub fn swaps_pairs(&self) -> bool {
        self.0 & Self::SWAP_PAIRS_BIT != 0
    }

    /// Permute `bytes` in place
    pub fn apply(&self, bytes: &mut [u8]) {
        if bytes.len() <= 1 {
            return;
        }
        if self.reverses() {
            bytes.reverse();
        }
        if self.swaps_pairs() {
            swap_pairs(bytes);
        }
    }

    /// Permute each consecutive `width`-byte chunk of `bytes` independently
    ///
    /// Trailing bytes that do not fill a whole chunk are left untouched.
    pub fn apply_each(&self, bytes: &mut [u8], width: usize) {
        if width <= 1 || self.is_identity() {
            return;
        }
        for chunk in bytes.chunks_exact_mut(width) {
            self.apply(chunk);
        }
    }
}

// An odd trailing byte stays where it is.
fn swap_pairs(bytes: &mut [u8]) {
    for pair in bytes.chunks_exact_mut(2) {
        pair.swap(0, 1);
    }
}
