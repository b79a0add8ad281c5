//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod extension;
mod hash;

pub use extension::{resolve_extension, Extension};
pub use hash::{compute_digest, ContentDigest};
