//! Evaluation sessions
//!
//! A [`Session`] runs top-level evaluations. Each call to
//! [`Session::evaluate`] establishes a recovery point, hands a
//! [`Computation`] to the routine, and turns whatever comes back into an
//! [`Outcome`]. A raised signal is reported here and nowhere else.

use std::path::Path;
use tracing::{debug, info, warn};
use zcalc_buffer::{BufferMover, MoveStrategy};
use zcalc_core::{ErrorKind, ErrorSignal, Result, ZcalcConfig, CONFIG_FILE_NAME};
use zcalc_recovery::{CalcResult, RecoveryController, Unwind};

/// Result of one top-level evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The computation returned normally
    Completed(T),
    /// A routine raised; control returned to the recovery point
    Failed(ErrorSignal),
}

impl<T> Outcome<T> {
    /// True for `Failed`
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    /// Convert into a `Result`
    pub fn into_result(self) -> std::result::Result<T, ErrorSignal> {
        match self {
            Outcome::Completed(value) => Ok(value),
            Outcome::Failed(signal) => Err(signal),
        }
    }
}

/// Context passed down the call chain of one evaluation
pub struct Computation<'a> {
    controller: &'a mut RecoveryController,
    mover: &'a BufferMover,
}

impl<'a> Computation<'a> {
    /// Raise towards this evaluation's recovery point
    ///
    /// Works with [`zcalc_recovery::raise!`]:
    /// `raise!(cx, ErrorKind::DivisionByZero, "division by zero")`.
    pub fn raise(&mut self, kind: ErrorKind, message: impl Into<String>) -> Unwind {
        self.controller.raise(kind, message)
    }

    /// The buffer mover for this session
    pub fn mover(&self) -> &BufferMover {
        self.mover
    }

    /// The underlying recovery controller
    pub fn controller(&mut self) -> &mut RecoveryController {
        self.controller
    }
}

/// Evaluation counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionMetrics {
    /// Evaluations started
    pub evaluations: u64,
    /// Evaluations that ended in a raised signal
    pub failures: u64,
}

/// Drives top-level evaluations
pub struct Session {
    config: ZcalcConfig,
    controller: RecoveryController,
    mover: BufferMover,
    metrics: SessionMetrics,
}

impl Session {
    /// Session using the process-wide copy capability
    ///
    /// If no capability has been installed yet, it is resolved from
    /// `config.buffer.strategy` and frozen.
    pub fn new(config: ZcalcConfig) -> Self {
        let mover = BufferMover::from_config(&config.buffer);
        Self::with_mover(config, mover)
    }

    /// Session with an injected mover
    pub fn with_mover(config: ZcalcConfig, mover: BufferMover) -> Self {
        let controller = RecoveryController::with_config(&config.recovery);
        debug!(
            target: "zcalc::engine",
            strategy = ?mover.strategy(),
            rearm = ?config.recovery.rearm,
            "Session created"
        );
        Session {
            config,
            controller,
            mover,
            metrics: SessionMetrics::default(),
        }
    }

    /// Session with a forced strategy, bypassing the process-wide capability
    pub fn with_strategy(config: ZcalcConfig, strategy: MoveStrategy) -> Self {
        Self::with_mover(config, BufferMover::new(strategy))
    }

    /// Open a session from `zcalc.toml` in `dir`
    ///
    /// A default config file is written first if none exists.
    pub fn open(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        ZcalcConfig::write_default_if_missing(&path)?;
        let config = ZcalcConfig::from_file(&path)?;
        info!(target: "zcalc::engine", path = %path.display(), "Loaded config");
        Ok(Self::new(config))
    }

    /// Active configuration
    pub fn config(&self) -> &ZcalcConfig {
        &self.config
    }

    /// The session's mover
    pub fn mover(&self) -> &BufferMover {
        &self.mover
    }

    /// Counters so far
    pub fn metrics(&self) -> SessionMetrics {
        self.metrics
    }

    /// Run one top-level evaluation under a fresh recovery point
    ///
    /// # Errors
    ///
    /// Only controller misuse is an error here, e.g. `f` establishing its
    /// own point after raising. A raised signal is an `Outcome::Failed`.
    pub fn evaluate<T, F>(&mut self, f: F) -> Result<Outcome<T>>
    where
        F: FnOnce(&mut Computation<'_>) -> CalcResult<T>,
    {
        self.metrics.evaluations += 1;
        let resumed = {
            let Session {
                controller, mover, ..
            } = self;
            controller.run(|controller| {
                let mut cx = Computation {
                    controller,
                    mover: &*mover,
                };
                f(&mut cx)
            })
        };
        self.controller.disarm();

        let outcome = match resumed?.into_result() {
            Ok(value) => Outcome::Completed(value),
            Err(signal) => {
                self.metrics.failures += 1;
                warn!(
                    target: "zcalc::engine",
                    kind = %signal.kind(),
                    message = signal.message(),
                    "Evaluation failed"
                );
                Outcome::Failed(signal)
            }
        };
        Ok(outcome)
    }
}
