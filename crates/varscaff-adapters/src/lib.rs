//! Infrastructure adapters for varscaff.
//!
//! This crate implements the ports defined in `varscaff-core::application::ports`.
//! It contains all external dependencies and I/O operations: the local
//! filesystem, the `ansible-inventory` listing command, YAML parsing and
//! template directories.

pub mod filesystem;
pub mod source;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use source::{DEFAULT_LISTING_COMMAND, ListingCommandSource, StaticSource, YamlFileSource};
pub use templates::{DEFAULT_TEMPLATE_DIR, DirectoryTemplates, InMemoryTemplates};
