//! Values that travel between a raise site and its recovery point

use thiserror::Error;
use zcalc_core::ErrorSignal;

/// Token for an established recovery point
///
/// Generations increase monotonically per controller, so two tokens from the
/// same controller compare equal only if they name the same establishment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecoveryPoint {
    generation: u64,
}

impl RecoveryPoint {
    pub(crate) fn new(generation: u64) -> Self {
        RecoveryPoint { generation }
    }

    /// Establishment counter for this point (first point is 1)
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Controller lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryState {
    /// No recovery point established
    Idle,
    /// A recovery point is active; raises will unwind to it
    Armed,
    /// A signal has been raised and not yet resumed
    Unwinding,
}

/// A raised signal in flight towards its recovery point
///
/// Arithmetic routines return `Err(Unwind)` and every caller propagates it
/// with `?`; nothing between the raise site and the recovery point inspects it.
#[derive(Debug, Error)]
#[error("{signal}")]
pub struct Unwind {
    signal: ErrorSignal,
    target: RecoveryPoint,
}

impl Unwind {
    pub(crate) fn new(signal: ErrorSignal, target: RecoveryPoint) -> Self {
        Unwind { signal, target }
    }

    /// The raised signal
    pub fn signal(&self) -> &ErrorSignal {
        &self.signal
    }

    /// The recovery point this unwind will resume at
    pub fn target(&self) -> RecoveryPoint {
        self.target
    }

    pub(crate) fn into_signal(self) -> ErrorSignal {
        self.signal
    }
}

/// Result type for routines that may raise
pub type CalcResult<T> = std::result::Result<T, Unwind>;

/// What the recovery point observes once control returns to it
#[derive(Debug)]
pub struct Resumption<T> {
    point: RecoveryPoint,
    outcome: std::result::Result<T, ErrorSignal>,
}

impl<T> Resumption<T> {
    pub(crate) fn new(point: RecoveryPoint, outcome: std::result::Result<T, ErrorSignal>) -> Self {
        Resumption { point, outcome }
    }

    /// The recovery point control returned to
    pub fn point(&self) -> RecoveryPoint {
        self.point
    }

    /// True if control returned because of a raise
    pub fn is_error(&self) -> bool {
        self.outcome.is_err()
    }

    /// The raised signal, if any
    pub fn signal(&self) -> Option<&ErrorSignal> {
        self.outcome.as_ref().err()
    }

    /// Consume the resumption, yielding the value or the signal
    pub fn into_result(self) -> std::result::Result<T, ErrorSignal> {
        self.outcome
    }
}

/// Recovery controller misuse a driver can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    /// Establish was called under `RearmPolicy::Reject` with a point active
    #[error("recovery point {} is already armed", .active.generation())]
    AlreadyArmed {
        /// The point that is still active
        active: RecoveryPoint,
    },

    /// Resume was handed a raise, but the controller is not unwinding
    #[error("resume of a raised signal while {state:?}")]
    NotUnwinding {
        /// Controller state at the time of the call
        state: RecoveryState,
    },

    /// Resume was handed a normal completion, but no point is armed
    #[error("resume of a completed computation while {state:?}")]
    NotArmed {
        /// Controller state at the time of the call
        state: RecoveryState,
    },
}

impl From<ControlError> for zcalc_core::Error {
    fn from(e: ControlError) -> Self {
        zcalc_core::Error::Control(e.to_string())
    }
}
