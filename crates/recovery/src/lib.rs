//! Error recovery for zcalc arithmetic
//!
//! This crate implements the non-local error escape used by arithmetic
//! routines:
//! - RecoveryController: per-computation context (Idle / Armed / Unwinding)
//! - RecoveryPoint: token for an established point; last established wins
//! - Unwind / CalcResult: a raised signal propagated with `?`
//! - Resumption: what the driver observes at the recovery point
//! - `raise!` / `ensure!`: formatted raises that return early

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod controller;
mod macros;
pub mod unwind;

pub use controller::RecoveryController;
pub use unwind::{CalcResult, ControlError, RecoveryPoint, RecoveryState, Resumption, Unwind};
