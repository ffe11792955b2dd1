//! Recovery Controller Integration Tests
//!
//! Arming, re-arming, raising and resuming through the public API.

#[path = "../common/mod.rs"]
mod common;

mod rearm;
