//! Error signals raised by arithmetic routines
//!
//! An [`ErrorSignal`] is what an arithmetic routine hands to the recovery
//! controller when it abandons a computation. It is created at the raise
//! site, carried back to the recovery point, and consumed there once.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum length of an error message in bytes (default: 512)
pub const MAX_ERROR_LEN: usize = 512;

/// Category of an arithmetic failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Divisor was zero
    DivisionByZero,
    /// Result does not fit the target representation
    NumericOverflow,
    /// Operand outside the routine's domain (negative modulus, bad radix, ...)
    InvalidOperand,
    /// Routine detected state that should be impossible
    InternalInconsistency,
    /// Allocation for an intermediate result failed
    OutOfMemory,
    /// Computation was aborted on request
    Aborted,
}

impl ErrorKind {
    /// Stable lowercase name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::DivisionByZero => "division_by_zero",
            ErrorKind::NumericOverflow => "numeric_overflow",
            ErrorKind::InvalidOperand => "invalid_operand",
            ErrorKind::InternalInconsistency => "internal_inconsistency",
            ErrorKind::OutOfMemory => "out_of_memory",
            ErrorKind::Aborted => "aborted",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raised arithmetic error: `{ kind, message }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{kind}: {message}")]
pub struct ErrorSignal {
    kind: ErrorKind,
    message: String,
}

impl ErrorSignal {
    /// Create a signal, truncating the message to [`MAX_ERROR_LEN`] bytes
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::with_limit(kind, message, MAX_ERROR_LEN)
    }

    /// Create a signal, truncating the message to `max_len` bytes
    pub fn with_limit(kind: ErrorKind, message: impl Into<String>, max_len: usize) -> Self {
        let mut message = message.into();
        truncate_message(&mut message, max_len);
        ErrorSignal { kind, message }
    }

    /// The error category
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The formatted message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Split into kind and message
    pub fn into_parts(self) -> (ErrorKind, String) {
        (self.kind, self.message)
    }
}

/// Truncate `message` to at most `max_len` bytes on a char boundary
pub fn truncate_message(message: &mut String, max_len: usize) {
    if message.len() <= max_len {
        return;
    }
    let mut cut = max_len;
    while !message.is_char_boundary(cut) {
        cut -= 1;
    }
    message.truncate(cut);
}
