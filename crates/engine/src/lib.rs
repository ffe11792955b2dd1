//! Evaluation driver for zcalc
//!
//! This crate is the enclosing driver of the support layer:
//! - Session: loads config, owns the recovery controller and buffer mover,
//!   establishes one recovery point per top-level evaluation
//! - Computation: the context handed down to arithmetic routines
//! - Outcome: completed value or the raised signal

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod session;

pub use session::{Computation, Outcome, Session, SessionMetrics};
