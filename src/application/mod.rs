//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ImportUseCase` - read, hash and place one file in the asset directory

pub mod import;

pub use import::{ImportOptions, ImportOutcome, ImportStatus, ImportUseCase};
