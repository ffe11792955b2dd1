//! Build-time capability probe.
//!
//! Emits `ZCALC_HAVE_MEMMOVE=1` when the native overlap-safe copy produced
//! the right bytes for an overlapping range, `0` otherwise. Setting
//! `HAVE_NO_MEMMOVE` in the build environment forces `0`. When cross
//! compiling the host cannot speak for the target, so the native facility is
//! assumed.

use std::env;

fn native_overlap_works() -> bool {
    let pattern: Vec<u8> = (0u8..16).collect();
    for (dest, src) in [(3usize, 0usize), (0, 3)] {
        let n = pattern.len() - 3;
        let mut expected = pattern.clone();
        let tmp = pattern[src..src + n].to_vec();
        expected[dest..dest + n].copy_from_slice(&tmp);

        let mut buf = pattern.clone();
        buf.copy_within(src..src + n, dest);
        if buf != expected {
            return false;
        }
    }
    true
}

fn main() {
    println!("cargo:rerun-if-env-changed=HAVE_NO_MEMMOVE");
    println!("cargo:rerun-if-changed=build.rs");

    let have = if env::var_os("HAVE_NO_MEMMOVE").is_some() {
        false
    } else if env::var("HOST").ok() != env::var("TARGET").ok() {
        true
    } else {
        native_overlap_works()
    };

    println!("cargo:rustc-env=ZCALC_HAVE_MEMMOVE={}", if have { 1 } else { 0 });
}
