// src/native/config.rs
use crate::types::Endian;

/// How native orders are found when no override is given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    /// Take the answer from the compilation target
    Structural,
    /// Inspect the bytes of known values at runtime
    Probe,
}

impl Default for Detection {
    fn default() -> Self {
        if cfg!(feature = "probe") {
            Detection::Probe
        } else {
            Detection::Structural
        }
    }
}

/// Native order resolution settings
///
/// Overrides replace detection for their category and must be valid orders.
///
/// # Example
///
/// ```
/// use mixendian_rs::native::{Detection, NativeConfig};
/// use mixendian_rs::Endian;
///
/// let config = NativeConfig::new()
///     .with_integer_order(Endian::BIG)
///     .with_detection(Detection::Probe);
///
/// assert_eq!(config.integer, Some(Endian::BIG));
/// assert_eq!(config.float, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeConfig {
    pub integer: Option<Endian>,
    pub float: Option<Endian>,
    pub detection: Detection,
}

impl NativeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_integer_order(mut self, order: Endian) -> Self {
        self.integer = Some(order);
        self
    }

    pub fn with_float_order(mut self, order: Endian) -> Self {
        self.float = Some(order);
        self
    }

    pub fn with_detection(mut self, detection: Detection) -> Self {
        self.detection = detection;
        self
    }

    pub fn has_overrides(&self) -> bool {
        self.integer.is_some() || self.float.is_some()
    }
}
