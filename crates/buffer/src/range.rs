//! Byte ranges and copy direction
//!
//! A [`ByteRange`] names `len` bytes starting at `offset` within one buffer.
//! Source and destination ranges may overlap; [`CopyDirection::between`]
//! decides which way a byte loop has to walk so it never reads a source
//! byte it has already overwritten.

/// `len` bytes starting at `offset`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteRange {
    /// First byte of the range
    pub offset: usize,
    /// Number of bytes
    pub len: usize,
}

impl ByteRange {
    /// Create a range
    pub const fn new(offset: usize, len: usize) -> Self {
        ByteRange { offset, len }
    }

    /// One past the last byte (saturating)
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.len)
    }

    /// True if the range holds no bytes
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The same range cut down to at most `len` bytes
    pub fn truncated(&self, len: usize) -> Self {
        ByteRange::new(self.offset, self.len.min(len))
    }

    /// True if the two ranges share at least one byte
    pub fn overlaps(&self, other: &ByteRange) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.offset < other.end()
            && other.offset < self.end()
    }
}

/// Order in which a byte loop must visit the copied bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyDirection {
    /// Nothing observable to do: zero bytes, or source and destination coincide
    Skip,
    /// Lowest index first; destination starts below the source
    Forward,
    /// Highest index first; destination starts above the source
    Backward,
}

impl CopyDirection {
    /// Direction for copying `min(dest.len, src.len)` bytes from `src` to `dest`
    pub fn between(dest: ByteRange, src: ByteRange) -> CopyDirection {
        let n = dest.len.min(src.len);
        if n == 0 || dest.offset == src.offset {
            CopyDirection::Skip
        } else if dest.offset < src.offset {
            CopyDirection::Forward
        } else {
            CopyDirection::Backward
        }
    }
}
