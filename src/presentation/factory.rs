//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.

use crate::application::{ImportOptions, ImportUseCase};
use crate::infrastructure::LocalFs;

/// Type alias for the concrete ImportUseCase backed by the local disk
pub type ConcreteImportUseCase = ImportUseCase<LocalFs>;

/// Create an import use case writing to the local file system
pub fn create_import_use_case(options: ImportOptions) -> ConcreteImportUseCase {
    ImportUseCase::new(LocalFs::new(), options)
}
