//! Application layer for varscaff.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (InventoryService, ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! inventory logic itself. Normalization and detection live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DEFAULT_HOST_TEMPLATE, GROUP_VARS_DIR, HOST_VARS_DIR, InventoryService, LoadedInventory,
    ScaffoldService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, InventorySource, TemplateProvider};

pub use error::ApplicationError;
