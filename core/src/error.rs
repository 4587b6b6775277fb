//! Error types for fallible container operations.
//!
//! Only two conditions are recoverable: a checked access past the end and a
//! capacity request the container can never satisfy. A refused allocation is
//! reported as well so callers of the `Result`-returning operations can decide
//! what to do; constructors treat it as fatal, like `alloc::vec::Vec` does.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Checked element access with `index >= len`.
    #[error("index {index} is out of range for a vector of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Requested capacity is larger than `max_size()`.
    #[error("requested capacity {requested} exceeds the maximum of {max} elements")]
    CapacityExceeded { requested: usize, max: usize },

    /// The allocation policy could not provide the block.
    #[error("allocation of {size} bytes (align {align}) failed")]
    AllocFailed { size: usize, align: usize },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
