//! Copy capability and strategy selection
//!
//! The capability says whether the platform's overlap-safe copy can be
//! trusted. It is modelled as a [`MoveStrategy`] so a mover can be built for
//! either branch in tests, while the process-wide value is frozen the first
//! time it is installed or resolved.

use crate::error::{BufferError, Result};
use crate::probe;
use once_cell::sync::OnceCell;
use tracing::info;
use zcalc_core::StrategySource;

/// How the mover copies overlapping ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveStrategy {
    /// Delegate to the platform memmove (`<[u8]>::copy_within`)
    Native,
    /// Direction-aware byte loop
    Fallback,
}

impl MoveStrategy {
    /// Map the boolean capability flag to a strategy
    pub fn from_capability(native_available: bool) -> Self {
        if native_available {
            MoveStrategy::Native
        } else {
            MoveStrategy::Fallback
        }
    }

    /// Strategy recorded by the build-time probe
    pub fn from_build() -> Self {
        Self::from_capability(build_has_native())
    }

    /// Strategy from a runtime probe
    pub fn probe() -> Self {
        Self::from_capability(probe::probe_native_overlap())
    }

    /// Resolve a configured source to a strategy
    pub fn resolve(source: StrategySource) -> Self {
        match source {
            StrategySource::Auto => Self::probe(),
            StrategySource::Build => Self::from_build(),
            StrategySource::Native => MoveStrategy::Native,
            StrategySource::Fallback => MoveStrategy::Fallback,
        }
    }

    /// The boolean capability flag
    pub fn has_native(&self) -> bool {
        matches!(self, MoveStrategy::Native)
    }
}

/// Flag emitted by `build.rs`
pub fn build_has_native() -> bool {
    env!("ZCALC_HAVE_MEMMOVE") == "1"
}

static CAPABILITY: OnceCell<MoveStrategy> = OnceCell::new();

/// Install the process-wide capability
///
/// Must run before the first [`BufferMover::global`](crate::BufferMover::global)
/// call to have any effect. Installing the value already in place is
/// accepted.
///
/// # Errors
///
/// `CapabilityAlreadySet` if a different value is already frozen.
pub fn install_capability(strategy: MoveStrategy) -> Result<()> {
    match CAPABILITY.set(strategy) {
        Ok(()) => {
            info!(target: "zcalc::buffer", ?strategy, "Copy capability installed");
            Ok(())
        }
        Err(requested) => {
            let installed = installed_capability().unwrap_or(requested);
            if installed == requested {
                Ok(())
            } else {
                Err(BufferError::CapabilityAlreadySet {
                    installed,
                    requested,
                })
            }
        }
    }
}

/// The frozen process-wide capability, if any
pub fn installed_capability() -> Option<MoveStrategy> {
    CAPABILITY.get().copied()
}

/// The frozen capability, resolving and freezing it from `source` if unset
pub fn capability_or_init(source: StrategySource) -> MoveStrategy {
    *CAPABILITY.get_or_init(|| {
        let strategy = MoveStrategy::resolve(source);
        info!(target: "zcalc::buffer", ?source, ?strategy, "Copy capability resolved");
        strategy
    })
}
