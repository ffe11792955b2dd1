//! Overlap-safe byte mover
//!
//! [`BufferMover::move_within`] copies `min(dest.len, src.len)` bytes between
//! two ranges of the same buffer and leaves the buffer exactly as if the
//! source had been staged through a temporary first. Bytes outside the copied
//! destination range are never touched.

use crate::capability::{capability_or_init, MoveStrategy};
use crate::range::{ByteRange, CopyDirection};
use zcalc_core::{BufferConfig, StrategySource};

/// Copies between possibly overlapping byte ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferMover {
    strategy: MoveStrategy,
}

impl BufferMover {
    /// Mover with an injected strategy
    pub const fn new(strategy: MoveStrategy) -> Self {
        BufferMover { strategy }
    }

    /// Mover using the process-wide capability, probing it if unset
    pub fn global() -> Self {
        Self::new(capability_or_init(StrategySource::Auto))
    }

    /// Mover using the process-wide capability, resolving it from config if unset
    pub fn from_config(config: &BufferConfig) -> Self {
        Self::new(capability_or_init(config.strategy))
    }

    /// Strategy in use
    pub fn strategy(&self) -> MoveStrategy {
        self.strategy
    }

    /// Copy `min(dest.len, src.len)` bytes from `src` to `dest` within `buf`
    ///
    /// Returns the number of bytes copied. A zero-length move touches nothing
    /// and always succeeds, wherever its ranges point.
    ///
    /// # Panics
    ///
    /// Panics if the copied bytes of either range extend past the end of `buf`.
    pub fn move_within(&self, buf: &mut [u8], dest: ByteRange, src: ByteRange) -> usize {
        let n = dest.len.min(src.len);
        if n == 0 {
            return 0;
        }
        let (dest, src) = (dest.truncated(n), src.truncated(n));
        assert!(
            dest.end() <= buf.len(),
            "destination range {:?} exceeds buffer of {} bytes",
            dest,
            buf.len()
        );
        assert!(
            src.end() <= buf.len(),
            "source range {:?} exceeds buffer of {} bytes",
            src,
            buf.len()
        );

        let direction = CopyDirection::between(dest, src);
        match (self.strategy, direction) {
            (_, CopyDirection::Skip) => {}
            (MoveStrategy::Native, _) => buf.copy_within(src.offset..src.end(), dest.offset),
            (MoveStrategy::Fallback, _) => fallback_move(buf, dest.offset, src.offset, n, direction),
        }
        n
    }

    /// Copy `min(dest.len(), src.len())` bytes between two distinct slices
    ///
    /// Distinct borrows cannot overlap, so no direction is needed.
    pub fn move_between(&self, dest: &mut [u8], src: &[u8]) -> usize {
        let n = dest.len().min(src.len());
        dest[..n].copy_from_slice(&src[..n]);
        n
    }
}

fn fallback_move(buf: &mut [u8], dest: usize, src: usize, n: usize, direction: CopyDirection) {
    match direction {
        CopyDirection::Forward => {
            for i in 0..n {
                buf[dest + i] = buf[src + i];
            }
        }
        CopyDirection::Backward => {
            for i in (0..n).rev() {
                buf[dest + i] = buf[src + i];
            }
        }
        CopyDirection::Skip => {}
    }
}
