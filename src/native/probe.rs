// src/native/probe.rs
use crate::types::Endian;

/// Classify the in-memory bytes of the integer `1`
///
/// Only the least significant byte of `1` is non-zero, so its position
/// reveals the layout. Checks run in a fixed order: first byte, last byte,
/// second byte, second-to-last byte.
pub fn classify_integer_layout(bytes: &[u8]) -> Endian {
    classify(bytes, [
        Endian::LITTLE,
        Endian::BIG,
        Endian::LITTLE | Endian::SWAP_PAIRS,
        Endian::BIG | Endian::SWAP_PAIRS,
    ])
}

/// Classify the in-memory bytes of the IEEE-754 value `2.0`
///
/// `2.0` sets a single exponent bit in the most significant byte, so the
/// first/last mapping is the mirror image of the integer probe.
pub fn classify_float_layout(bytes: &[u8]) -> Endian {
    classify(bytes, [
        Endian::BIG,
        Endian::LITTLE,
        Endian::BIG | Endian::SWAP_PAIRS,
        Endian::LITTLE | Endian::SWAP_PAIRS,
    ])
}

/// Probe the integer layout of the running process
///
/// Both 4- and 8-byte integers are probed; a width that disagrees with the
/// other makes the layout unknown.
pub fn probe_integer() -> Endian {
    agreed(
        classify_integer_layout(bytemuck::bytes_of(&1u32)),
        classify_integer_layout(bytemuck::bytes_of(&1u64)),
    )
}

/// Probe the floating-point word layout of the running process
///
/// Probes `2.0` as both `f32` and `f64`, like [`probe_integer`].
pub fn probe_float() -> Endian {
    agreed(
        classify_float_layout(bytemuck::bytes_of(&2.0f32)),
        classify_float_layout(bytemuck::bytes_of(&2.0f64)),
    )
}

fn agreed(narrow: Endian, wide: Endian) -> Endian {
    if narrow == wide {
        narrow
    } else {
        log::debug!("probed layouts disagree across widths: {} vs {}", narrow, wide);
        Endian::UNKNOWN
    }
}

fn classify(bytes: &[u8], [first, last, second, second_last]: [Endian; 4]) -> Endian {
    let n = bytes.len();
    if n == 0 {
        return Endian::UNKNOWN;
    }

    if bytes[0] != 0 {
        first
    } else if bytes[n - 1] != 0 {
        last
    } else if n >= 2 && bytes[1] != 0 {
        second
    } else if n >= 2 && bytes[n - 2] != 0 {
        second_last
    } else {
        Endian::UNKNOWN
    }
}
