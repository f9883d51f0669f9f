// src/native/mod.rs
//! Native byte order resolution
//!
//! Integers and floating-point words each have a native order. Both are
//! resolved once per process and never change afterwards:
//!
//! - an explicit override from [`NativeConfig`] wins,
//! - otherwise the compilation target answers ([`Detection::Structural`]),
//! - or the bytes of known values are inspected ([`Detection::Probe`]).
//!
//! Resolution happens on first use with the default configuration, unless
//! [`configure`] installed a different one earlier.
//!
//! ```
//! use mixendian_rs::native;
//!
//! let native = native::native_order();
//! assert!(native.integer.is_valid());
//! assert_eq!(native::native_int_order(), native.integer);
//! ```

mod config;
mod probe;

pub use config::{Detection, NativeConfig};
pub use probe::{classify_float_layout, classify_integer_layout, probe_float, probe_integer};

use std::sync::OnceLock;

use crate::error::{EndianError, Result};
use crate::types::{Category, Endian};

static NATIVE: OnceLock<NativeOrder> = OnceLock::new();

/// Where the native facts came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Structural,
    Probed,
    Configured,
}

/// Native orders for both numeric categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeOrder {
    pub integer: Endian,
    pub float: Endian,
    pub source: Resolution,
}

impl NativeOrder {
    /// Resolve native orders from `config` without installing them
    pub fn resolve(config: &NativeConfig) -> Result<Self> {
        let detected = Self::detect(config.detection);

        let integer = match config.integer {
            Some(order) => order.validate()?,
            None => detected.integer,
        };
        let float = match config.float {
            Some(order) => order.validate()?,
            None => detected.float,
        };

        let source = if config.has_overrides() {
            Resolution::Configured
        } else {
            detected.source
        };

        Ok(NativeOrder { integer, float, source })
    }

    /// Detect native orders without overrides
    pub fn detect(detection: Detection) -> Self {
        match detection {
            // Rust targets store float words in integer order
            Detection::Structural => NativeOrder {
                integer: Endian::HOST,
                float: Endian::HOST,
                source: Resolution::Structural,
            },
            Detection::Probe => NativeOrder {
                integer: probe_integer(),
                float: probe_float(),
                source: Resolution::Probed,
            },
        }
    }

    pub fn for_category(&self, category: Category) -> Endian {
        match category {
            Category::Integer => self.integer,
            Category::Float => self.float,
        }
    }

    /// Native order for `category`, failing when it could not be classified
    pub fn require(&self, category: Category) -> Result<Endian> {
        let order = self.for_category(category);
        if order.is_valid() {
            Ok(order)
        } else {
            Err(EndianError::UnknownNativeOrder(category))
        }
    }

    /// Same orders, regardless of how they were found
    pub fn same_layout(&self, other: &NativeOrder) -> bool {
        self.integer == other.integer && self.float == other.float
    }
}

/// Install native orders resolved from `config`
///
/// Must run before the first conversion to take effect. Installing the
/// layout that is already in place succeeds; any other layout fails with
/// [`EndianError::AlreadyResolved`].
pub fn configure(config: NativeConfig) -> Result<NativeOrder> {
    let resolved = NativeOrder::resolve(&config)?;
    let current = *NATIVE.get_or_init(|| {
        log_resolution(&resolved);
        resolved
    });

    if current.same_layout(&resolved) {
        Ok(current)
    } else {
        log::warn!(
            "ignoring native order reconfiguration to integer={}, float={}: already resolved as integer={}, float={}",
            resolved.integer,
            resolved.float,
            current.integer,
            current.float
        );
        Err(EndianError::AlreadyResolved {
            integer: current.integer,
            float: current.float,
        })
    }
}

/// Native orders of this process, resolved on first call
pub fn native_order() -> NativeOrder {
    *NATIVE.get_or_init(|| {
        let resolved = NativeOrder::detect(Detection::default());
        log_resolution(&resolved);
        resolved
    })
}

pub fn native_int_order() -> Endian {
    native_order().integer
}

#[cfg(feature = "float")]
pub fn native_float_order() -> Endian {
    native_order().float
}

fn log_resolution(native: &NativeOrder) {
    log::debug!(
        "native byte order resolved ({:?}): integer={}, float={}",
        native.source,
        native.integer,
        native.float
    );
    for category in [Category::Integer, Category::Float] {
        if native.for_category(category).is_unknown() {
            log::warn!("native {} layout could not be classified", category);
        }
    }
}
