//! Buffer Mover Integration Tests
//!
//! Overlap correctness for both strategies, checked against a staged copy.

#[path = "../common/mod.rs"]
mod common;

mod overlap_properties;
mod shift_scenarios;
