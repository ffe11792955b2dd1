//! Support-layer configuration via `zcalc.toml`
//!
//! Selects how the buffer mover obtains its copy capability and how the
//! recovery controller treats re-arming. Missing sections fall back to
//! defaults, so an empty file is a valid config.

use crate::error::{Error, Result};
use crate::signal::MAX_ERROR_LEN;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "zcalc.toml";

/// Where the process-wide copy capability comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StrategySource {
    /// Probe the native overlap-safe copy at startup
    #[default]
    Auto,
    /// Use the flag emitted by the build script
    Build,
    /// Force the native facility
    Native,
    /// Force the direction-aware fallback
    Fallback,
}

/// What establishing a recovery point does while one is already armed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RearmPolicy {
    /// Silently replace the active point (last established wins)
    #[default]
    Replace,
    /// Refuse; the caller must disarm or resume first
    Reject,
}

/// `[buffer]` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BufferConfig {
    /// Capability source
    #[serde(default)]
    pub strategy: StrategySource,
}

/// `[recovery]` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecoveryConfig {
    /// Re-arm policy
    #[serde(default)]
    pub rearm: RearmPolicy,
    /// Maximum error message length in bytes
    #[serde(default = "default_max_error_len")]
    pub max_error_len: usize,
}

fn default_max_error_len() -> usize {
    MAX_ERROR_LEN
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            rearm: RearmPolicy::default(),
            max_error_len: default_max_error_len(),
        }
    }
}

/// Configuration loaded from `zcalc.toml`.
///
/// # Example
///
/// ```toml
/// [buffer]
/// strategy = "auto"
///
/// [recovery]
/// rearm = "replace"
/// max_error_len = 512
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ZcalcConfig {
    /// Buffer mover settings
    #[serde(default)]
    pub buffer: BufferConfig,
    /// Recovery controller settings
    #[serde(default)]
    pub recovery: RecoveryConfig,
}

impl ZcalcConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# zcalc support layer configuration

[buffer]
# Copy capability source: "auto" (default), "build", "native" or "fallback"
#   "auto"     = probe the native overlap-safe copy at startup
#   "build"    = trust the flag emitted at build time (HAVE_NO_MEMMOVE)
#   "native"   = always use the platform memmove
#   "fallback" = always use the direction-aware byte loop
strategy = "auto"

[recovery]
# Re-arming while a recovery point is active: "replace" (default) or "reject"
rearm = "replace"

# Maximum error message length in bytes
max_error_len = 512
"#
    }

    /// Parse config from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML, names an unknown
    /// strategy or policy, or sets `max_error_len` to zero.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ZcalcConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.recovery.max_error_len == 0 {
            return Err(Error::InvalidConfig {
                field: "recovery.max_error_len".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}
