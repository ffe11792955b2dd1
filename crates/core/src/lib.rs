//! Core types for zcalc
//!
//! This crate defines the vocabulary shared by the support layer:
//! - ErrorKind / ErrorSignal: what an arithmetic routine raises
//! - Error: umbrella error for config and controller misuse
//! - ZcalcConfig: `zcalc.toml` settings (capability source, re-arm policy)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod signal;

pub use config::{
    BufferConfig, RearmPolicy, RecoveryConfig, StrategySource, ZcalcConfig, CONFIG_FILE_NAME,
};
pub use error::{Error, Result};
pub use signal::{truncate_message, ErrorKind, ErrorSignal, MAX_ERROR_LEN};
