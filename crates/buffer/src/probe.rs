//! Runtime capability probe
//!
//! Performs a real overlapping copy in both directions with the native
//! facility and compares the outcome to a copy staged through a temporary
//! buffer.

use tracing::info;

const PROBE_LEN: usize = 16;
const PROBE_SHIFT: usize = 3;

/// True if the native overlap-safe copy gives the staged-copy result
pub fn probe_native_overlap() -> bool {
    let pattern: Vec<u8> = (0..PROBE_LEN as u8).map(|b| b.wrapping_mul(7) ^ 0x5a).collect();
    let n = PROBE_LEN - PROBE_SHIFT;

    let ok = [(PROBE_SHIFT, 0), (0, PROBE_SHIFT)]
        .into_iter()
        .all(|(dest, src)| {
            let expected = staged_copy(&pattern, dest, src, n);
            let mut buf = pattern.clone();
            buf.copy_within(src..src + n, dest);
            buf == expected
        });

    info!(target: "zcalc::buffer", native = ok, "Overlap copy probe finished");
    ok
}

/// Reference result: copy `n` bytes `src -> dest` through a temporary
pub(crate) fn staged_copy(buf: &[u8], dest: usize, src: usize, n: usize) -> Vec<u8> {
    let tmp = buf[src..src + n].to_vec();
    let mut out = buf.to_vec();
    out[dest..dest + n].copy_from_slice(&tmp);
    out
}
