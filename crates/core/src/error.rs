//! Error types for the zcalc support layer
//!
//! This module defines the umbrella error used outside the arithmetic path:
//! configuration loading, capability installation and recovery-controller
//! misuse that a driver can report. Arithmetic failures are not errors in
//! this sense; they travel as [`ErrorSignal`](crate::signal::ErrorSignal)s.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for zcalc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the zcalc support layer
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (reading or writing the config file)
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Config file could not be parsed or serialized
    #[error("Config parse error: {0}")]
    ConfigParse(String),

    /// Config file parsed but holds a value outside the accepted set
    #[error("Invalid config: {field} = {value:?}")]
    InvalidConfig {
        /// Dotted path of the offending field
        field: String,
        /// The rejected value
        value: String,
    },

    /// Recovery controller misuse that the caller can recover from
    #[error("Recovery control error: {0}")]
    Control(String),

    /// Buffer layer error
    #[error("Buffer error: {0}")]
    Buffer(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParse(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::ConfigParse(e.to_string())
    }
}
