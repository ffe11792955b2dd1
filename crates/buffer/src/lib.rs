//! Overlap-safe buffer movement for zcalc
//!
//! This crate provides:
//! - ByteRange / CopyDirection: range relationship as a pure function
//! - MoveStrategy: native memmove or direction-aware fallback
//! - Capability install/resolve: the process-wide strategy, frozen once set
//! - probe: runtime check of the native overlap-safe copy
//! - BufferMover: the mover itself
//! - Block: growable octet blocks whose copies go through the mover

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod block;
pub mod capability;
pub mod error;
pub mod mover;
pub mod probe;
pub mod range;

pub use block::{Block, BLK_CHUNKSIZE};
pub use capability::{
    build_has_native, capability_or_init, install_capability, installed_capability, MoveStrategy,
};
pub use error::{BufferError, Result};
pub use mover::BufferMover;
pub use probe::probe_native_overlap;
pub use range::{ByteRange, CopyDirection};
