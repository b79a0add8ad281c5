//! Domain Layer
//!
//! Pure import logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - `ImportRequest`, `ImportedAsset`
//! - `value_objects/` - `ContentDigest`, `Extension`
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
