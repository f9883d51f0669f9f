// src/error.rs
use std::io;
use thiserror::Error;

use crate::types::{Category, Endian};

#[derive(Error, Debug)]
pub enum EndianError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid byte order descriptor: {0:#x}")]
    InvalidOrder(u32),

    #[error("Native {0} byte order could not be classified")]
    UnknownNativeOrder(Category),

    #[error("Buffer too small: need {needed} bytes, only {available} available")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("Buffer overflow: tried to hold {attempted} values, limit is {capacity}")]
    BufferOverflow { attempted: usize, capacity: usize },

    #[error("Native byte order already resolved (integer {integer}, float {float})")]
    AlreadyResolved { integer: Endian, float: Endian },
}

pub type Result<T> = std::result::Result<T, EndianError>;
