//! Buffer layer errors

use crate::capability::MoveStrategy;
use thiserror::Error;

/// Result type alias for buffer operations
pub type Result<T> = std::result::Result<T, BufferError>;

/// Errors reported by the buffer layer
///
/// Malformed ranges passed to the mover are not errors; they are caller
/// contract violations and panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// The process-wide capability was already installed with another value
    #[error("copy capability already installed as {installed:?}, refused {requested:?}")]
    CapabilityAlreadySet {
        /// Value that is frozen for the process
        installed: MoveStrategy,
        /// Value the caller tried to install
        requested: MoveStrategy,
    },

    /// Source start index beyond the source data
    #[error("source index {index} beyond source length {len}")]
    SourceIndexOutOfRange {
        /// Requested start index
        index: usize,
        /// Source data length
        len: usize,
    },

    /// Source range runs past the end of the source data
    #[error("source range {index}+{num} beyond source length {len}")]
    SourceRangeTooLong {
        /// Requested start index
        index: usize,
        /// Requested byte count
        num: usize,
        /// Source data length
        len: usize,
    },

    /// Destination would need to grow but relocation is forbidden
    #[error("destination needs {needed} bytes but block of {maxsize} may not be reallocated")]
    NoRelocation {
        /// Length the destination would reach
        needed: usize,
        /// Current allocation size
        maxsize: usize,
    },

    /// Destination index plus byte count does not fit in `usize`
    #[error("destination index {index} plus {num} bytes overflows")]
    NewLengthOverflow {
        /// Destination start index
        index: usize,
        /// Requested byte count
        num: usize,
    },

    /// Growing the block failed to allocate
    #[error("out of memory growing block to {requested} bytes")]
    OutOfMemory {
        /// Allocation size that was refused
        requested: usize,
    },

    /// Block growth chunk of zero
    #[error("block chunk size must be positive")]
    InvalidChunkSize,
}

impl From<BufferError> for zcalc_core::Error {
    fn from(e: BufferError) -> Self {
        zcalc_core::Error::Buffer(e.to_string())
    }
}
