//! Common test utilities for static-import CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories
//! - Fixtures: well-known digests

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
