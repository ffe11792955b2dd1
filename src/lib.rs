//! zcalc - support layer for an arbitrary-precision calculator
//!
//! Two pieces the arithmetic routines lean on:
//! - error recovery: routines raise a typed signal and every frame up to the
//!   driver's recovery point is abandoned
//! - overlap-safe buffer moves, using the native memmove when the platform
//!   provides a correct one and a direction-aware loop otherwise
//!
//! # Quick Start
//!
//! ```ignore
//! use zcalc::{raise, CalcResult, Computation, ErrorKind, Outcome, Session, ZcalcConfig};
//!
//! fn divide(cx: &mut Computation<'_>, a: i64, b: i64) -> CalcResult<i64> {
//!     if b == 0 {
//!         raise!(cx, ErrorKind::DivisionByZero, "division by zero");
//!     }
//!     Ok(a / b)
//! }
//!
//! let mut session = Session::new(ZcalcConfig::default());
//! match session.evaluate(|cx| divide(cx, 1, 0))? {
//!     Outcome::Completed(q) => println!("{q}"),
//!     Outcome::Failed(signal) => eprintln!("{signal}"),
//! }
//! ```

pub use zcalc_buffer::{
    install_capability, installed_capability, Block, BufferError, BufferMover, ByteRange,
    CopyDirection, MoveStrategy,
};
pub use zcalc_core::{
    BufferConfig, Error, ErrorKind, ErrorSignal, RearmPolicy, RecoveryConfig, Result,
    StrategySource, ZcalcConfig,
};
pub use zcalc_engine::{Computation, Outcome, Session, SessionMetrics};
pub use zcalc_recovery::{
    ensure, raise, CalcResult, ControlError, RecoveryController, RecoveryPoint, RecoveryState,
    Resumption, Unwind,
};
