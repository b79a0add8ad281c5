//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.

pub mod fs;

pub use fs::LocalFs;
