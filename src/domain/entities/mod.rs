//! Domain Entities
//!
//! - `ImportRequest` - what the operator asked to import
//! - `ImportedAsset` - bytes plus digest plus extension, ready to place

mod import;

pub use import::{ImportRequest, ImportedAsset};
