//! gemrpm benchmarking suite
//!
//! Benchmarks for manifest parsing and for the three generator modes.

pub mod common;

pub use common::*;
