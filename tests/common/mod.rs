//! Common test utilities for flockbook CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated data file, config home and working directory
//! - `TestResult`: Captured output of one CLI run, with JSON helpers

pub mod env;

pub use env::*;
