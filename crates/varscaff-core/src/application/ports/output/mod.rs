//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `varscaff-adapters` crate provides implementations.

use std::path::Path;

use serde_json::Value;

use crate::error::VarscaffResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `varscaff_adapters::filesystem::LocalFilesystem` (production)
/// - `varscaff_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    ///
    /// An already existing directory is not an error.
    fn create_dir_all(&self, path: &Path) -> VarscaffResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> VarscaffResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for obtaining a raw inventory document.
///
/// Implemented by:
/// - `varscaff_adapters::source::ListingCommandSource` (`ansible-inventory --list`)
/// - `varscaff_adapters::source::YamlFileSource` (direct YAML read)
/// - `varscaff_adapters::source::StaticSource` (fixed document)
#[cfg_attr(test, mockall::automock)]
pub trait InventorySource: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Produce the inventory document for `path`.
    ///
    /// `Ok(None)` means this source is unavailable or had nothing to say,
    /// and the next source should be tried. `Err` aborts acquisition.
    fn acquire(&self, path: &Path) -> VarscaffResult<Option<Value>>;
}

/// Port for static template text keyed by file name.
///
/// Implemented by:
/// - `varscaff_adapters::templates::DirectoryTemplates` (template directory)
/// - `varscaff_adapters::templates::InMemoryTemplates` (testing, embedding)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateProvider: Send + Sync {
    /// Template text, or `None` if there is no template of that name.
    fn load(&self, name: &str) -> VarscaffResult<Option<String>>;
}
