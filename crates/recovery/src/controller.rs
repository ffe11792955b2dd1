//! Recovery controller
//!
//! One controller per computation. The driver establishes a recovery point,
//! hands `&mut RecoveryController` down the call chain, and routines that hit
//! an unrecoverable condition return `Err(cx.raise(..))`. Every frame between
//! the raise and the driver propagates with `?`, so no intervening work runs;
//! the driver then calls [`RecoveryController::resume`] and observes the
//! signal at the point it established.
//!
//! ## State machine
//!
//! ```text
//! Idle ──establish──▶ Armed ──raise──▶ Unwinding
//!  ▲                  │  ▲                 │
//!  └─────disarm───────┘  └─────resume──────┘
//! ```
//!
//! Establishing while Armed replaces the active point under
//! [`RearmPolicy::Replace`] and fails under [`RearmPolicy::Reject`].

use crate::unwind::{CalcResult, ControlError, RecoveryPoint, RecoveryState, Resumption, Unwind};
use tracing::{debug, error};
use zcalc_core::{ErrorKind, ErrorSignal, RearmPolicy, RecoveryConfig, MAX_ERROR_LEN};

/// Per-computation recovery context
#[derive(Debug)]
pub struct RecoveryController {
    state: RecoveryState,
    active: Option<RecoveryPoint>,
    /// Last generation handed out; the next point gets `last_generation + 1`
    last_generation: u64,
    policy: RearmPolicy,
    max_error_len: usize,
}

impl Default for RecoveryController {
    fn default() -> Self {
        Self::new()
    }
}

impl RecoveryController {
    /// Create an idle controller with the default policy
    pub fn new() -> Self {
        RecoveryController {
            state: RecoveryState::Idle,
            active: None,
            last_generation: 0,
            policy: RearmPolicy::Replace,
            max_error_len: MAX_ERROR_LEN,
        }
    }

    /// Create an idle controller from the `[recovery]` config section
    pub fn with_config(config: &RecoveryConfig) -> Self {
        RecoveryController {
            policy: config.rearm,
            max_error_len: config.max_error_len,
            ..Self::new()
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> RecoveryState {
        self.state
    }

    /// The active recovery point, if armed or unwinding
    pub fn active(&self) -> Option<RecoveryPoint> {
        self.active
    }

    /// Re-arm policy in effect
    pub fn policy(&self) -> RearmPolicy {
        self.policy
    }

    /// Establish a new recovery point, discarding the active one
    ///
    /// # Errors
    ///
    /// `ControlError::AlreadyArmed` if a point is active and the policy is
    /// `Reject`.
    pub fn establish(&mut self) -> Result<RecoveryPoint, ControlError> {
        if let Some(previous) = self.active {
            match self.policy {
                RearmPolicy::Reject => {
                    return Err(ControlError::AlreadyArmed { active: previous });
                }
                RearmPolicy::Replace => {
                    debug!(
                        target: "zcalc::recovery",
                        previous = previous.generation(),
                        state = ?self.state,
                        "Replacing active recovery point"
                    );
                }
            }
        }

        self.last_generation += 1;
        let point = RecoveryPoint::new(self.last_generation);
        self.active = Some(point);
        self.state = RecoveryState::Armed;
        debug!(target: "zcalc::recovery", generation = point.generation(), "Recovery point armed");
        Ok(point)
    }

    /// Raise a signal towards the active recovery point
    ///
    /// The caller returns the result as `Err` immediately; see the
    /// [`raise!`](crate::raise) macro.
    ///
    /// # Process exit
    ///
    /// If no recovery point has been established there is nowhere to return
    /// to: the signal is logged and the process exits with status 1. This
    /// cannot be caught.
    pub fn raise(&mut self, kind: ErrorKind, message: impl Into<String>) -> Unwind {
        let signal = ErrorSignal::with_limit(kind, message, self.max_error_len);
        let target = match self.active {
            Some(point) => point,
            None => {
                error!(
                    target: "zcalc::recovery",
                    kind = %signal.kind(),
                    message = signal.message(),
                    "Raise with no recovery point established"
                );
                eprintln!("zcalc: raise with no recovery point established: {}", signal);
                std::process::exit(1);
            }
        };

        if self.state == RecoveryState::Unwinding {
            debug!(
                target: "zcalc::recovery",
                generation = target.generation(),
                "Raise while already unwinding; newer signal wins"
            );
        }
        self.state = RecoveryState::Unwinding;
        debug!(
            target: "zcalc::recovery",
            generation = target.generation(),
            kind = %signal.kind(),
            "Unwinding to recovery point"
        );
        Unwind::new(signal, target)
    }

    /// Return control to the active recovery point
    ///
    /// `result` is whatever the top-level routine returned. A completed
    /// computation leaves the controller Armed; a raised one moves it from
    /// Unwinding back to Armed and hands over the signal.
    ///
    /// # Errors
    ///
    /// - `NotArmed` for a completion when no point is armed
    /// - `NotUnwinding` for a raise the controller is not unwinding towards:
    ///   no raise is in flight, or the unwind targets a point that has since
    ///   been replaced. The controller state is left unchanged.
    pub fn resume<T>(&mut self, result: CalcResult<T>) -> Result<Resumption<T>, ControlError> {
        match result {
            Ok(value) => match (self.state, self.active) {
                (RecoveryState::Armed, Some(point)) => Ok(Resumption::new(point, Ok(value))),
                (state, _) => Err(ControlError::NotArmed { state }),
            },
            Err(unwind) => match (self.state, self.active) {
                (RecoveryState::Unwinding, Some(point)) if unwind.target() == point => {
                    self.state = RecoveryState::Armed;
                    debug!(
                        target: "zcalc::recovery",
                        generation = point.generation(),
                        kind = %unwind.signal().kind(),
                        "Resumed at recovery point"
                    );
                    Ok(Resumption::new(point, Err(unwind.into_signal())))
                }
                (state, _) => Err(ControlError::NotUnwinding { state }),
            },
        }
    }

    /// Establish a point, run `f`, and resume with its result
    ///
    /// The controller is left Armed at the point `run` established (or at
    /// whatever `f` itself established last).
    pub fn run<T, F>(&mut self, f: F) -> Result<Resumption<T>, ControlError>
    where
        F: FnOnce(&mut RecoveryController) -> CalcResult<T>,
    {
        self.establish()?;
        let result = f(self);
        self.resume(result)
    }

    /// Drop the active recovery point
    pub fn disarm(&mut self) {
        if let Some(point) = self.active.take() {
            debug!(target: "zcalc::recovery", generation = point.generation(), "Recovery point disarmed");
        }
        self.state = RecoveryState::Idle;
    }
}
