//! Growable octet blocks
//!
//! A [`Block`] holds `datalen` bytes of data inside an allocation of
//! `maxsize` bytes. Growth happens in whole multiples of the block's chunk
//! size and always leaves at least one spare byte past the data.
//! Copies into a block go through a [`BufferMover`], so moves within one
//! block are safe when the ranges overlap.

use crate::error::{BufferError, Result};
use crate::mover::BufferMover;
use crate::range::ByteRange;

/// Default growth chunk in bytes
pub const BLK_CHUNKSIZE: usize = 256;

/// Growable byte block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Allocation; `data.len()` is the block's maxsize
    data: Vec<u8>,
    datalen: usize,
    blkchunk: usize,
}

/// Resolved copy parameters: (source index, byte count, destination index)
type CopyPlan = (usize, usize, usize);

impl Block {
    /// Empty block with room for `len` bytes, growing by `blkchunk`
    pub fn new(len: usize, blkchunk: usize) -> Result<Self> {
        if blkchunk == 0 {
            return Err(BufferError::InvalidChunkSize);
        }
        let mut block = Block {
            data: Vec::new(),
            datalen: 0,
            blkchunk,
        };
        block.grow_to(len, 0)?;
        Ok(block)
    }

    /// Block holding a copy of `bytes`, growing by [`BLK_CHUNKSIZE`]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        // Slice lengths are at most isize::MAX, so this cannot overflow
        let mut data = vec![0; bytes.len() - bytes.len() % BLK_CHUNKSIZE + BLK_CHUNKSIZE];
        data[..bytes.len()].copy_from_slice(bytes);
        Block {
            data,
            datalen: bytes.len(),
            blkchunk: BLK_CHUNKSIZE,
        }
    }

    /// Length of the stored data
    pub fn datalen(&self) -> usize {
        self.datalen
    }

    /// Allocation size
    pub fn maxsize(&self) -> usize {
        self.data.len()
    }

    /// Growth chunk
    pub fn blkchunk(&self) -> usize {
        self.blkchunk
    }

    /// The stored data
    pub fn data(&self) -> &[u8] {
        &self.data[..self.datalen]
    }

    /// Copy bytes from another block into this one
    ///
    /// - `num = None` copies to the end of the source data
    /// - `dsi = None` appends at this block's `datalen`
    /// - with `noreloc` the block refuses to grow
    ///
    /// A destination index past `datalen` leaves a zero-filled gap.
    pub fn copy_from(
        &mut self,
        mover: &BufferMover,
        src: &Block,
        ssi: usize,
        num: Option<usize>,
        dsi: Option<usize>,
        noreloc: bool,
    ) -> Result<()> {
        let Some((ssi, num, dsi)) = self.plan(src.datalen, ssi, num, dsi, noreloc)? else {
            return Ok(());
        };
        mover.move_between(&mut self.data[dsi..dsi + num], &src.data[ssi..ssi + num]);
        self.datalen = self.datalen.max(dsi + num);
        Ok(())
    }

    /// Move bytes within this block; overlapping ranges are handled
    ///
    /// Same index rules as [`Block::copy_from`] with this block as the source.
    pub fn move_within(
        &mut self,
        mover: &BufferMover,
        ssi: usize,
        num: Option<usize>,
        dsi: Option<usize>,
        noreloc: bool,
    ) -> Result<()> {
        let Some((ssi, num, dsi)) = self.plan(self.datalen, ssi, num, dsi, noreloc)? else {
            return Ok(());
        };
        mover.move_within(
            &mut self.data,
            ByteRange::new(dsi, num),
            ByteRange::new(ssi, num),
        );
        self.datalen = self.datalen.max(dsi + num);
        Ok(())
    }

    /// Validate indices and grow the allocation; `None` means nothing to copy
    fn plan(
        &mut self,
        src_len: usize,
        ssi: usize,
        num: Option<usize>,
        dsi: Option<usize>,
        noreloc: bool,
    ) -> Result<Option<CopyPlan>> {
        if ssi > src_len {
            return Err(BufferError::SourceIndexOutOfRange {
                index: ssi,
                len: src_len,
            });
        }
        let num = num.unwrap_or(src_len - ssi);
        if num == 0 {
            return Ok(None);
        }
        if ssi.checked_add(num).map_or(true, |end| end > src_len) {
            return Err(BufferError::SourceRangeTooLong {
                index: ssi,
                num,
                len: src_len,
            });
        }
        let dsi = dsi.unwrap_or(self.datalen);
        let newlen = dsi
            .checked_add(num)
            .ok_or(BufferError::NewLengthOverflow { index: dsi, num })?;
        if newlen >= self.maxsize() {
            if noreloc {
                return Err(BufferError::NoRelocation {
                    needed: newlen,
                    maxsize: self.maxsize(),
                });
            }
            self.grow_to(newlen, dsi)?;
        }
        Ok(Some((ssi, num, dsi)))
    }

    /// Resize the allocation to the chunk multiple above `len`
    ///
    /// `index` only feeds the overflow error.
    fn grow_to(&mut self, len: usize, index: usize) -> Result<()> {
        let size = chunked_size(len, self.blkchunk).ok_or(BufferError::NewLengthOverflow {
            index,
            num: len - index,
        })?;
        self.data
            .try_reserve_exact(size - self.data.len())
            .map_err(|_| BufferError::OutOfMemory { requested: size })?;
        self.data.resize(size, 0);
        Ok(())
    }
}

/// Smallest chunk multiple strictly greater than `len`, if it fits
fn chunked_size(len: usize, chunk: usize) -> Option<usize> {
    (len / chunk).checked_add(1)?.checked_mul(chunk)
}
