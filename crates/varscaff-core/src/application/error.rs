//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not inventory
//! logic. Inventory shape errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The inventory file exists in configuration but could not be read.
    #[error("Cannot read inventory {path}: {reason}")]
    SourceUnreadable { path: PathBuf, reason: String },

    /// No configured source was able to produce an inventory document.
    #[error("Missing capability: {capability}")]
    MissingCapability { capability: String },

    /// A template file exists but could not be read.
    #[error("Cannot load template '{name}': {reason}")]
    TemplateUnreadable { name: String, reason: String },

    /// Store access failed (lock poisoned).
    #[error("In-memory store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::SourceUnreadable { path, .. } => vec![
                format!("Check that {} exists and is readable", path.display()),
                "Pass the inventory path as the first argument".into(),
            ],
            Self::MissingCapability { .. } => vec![
                "Install ansible-inventory and make sure it is on PATH".into(),
                "Or build varscaff with the `yaml` feature to read inventories directly".into(),
            ],
            Self::TemplateUnreadable { name, .. } => vec![
                format!("Check the permissions of template '{}'", name),
                "Point --template-dir at a readable directory".into(),
            ],
            Self::StoreLockError => vec!["This is likely a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::SourceUnreadable { .. } => ErrorCategory::NotFound,
            Self::TemplateUnreadable { .. } => ErrorCategory::NotFound,
            Self::MissingCapability { .. } => ErrorCategory::Configuration,
        }
    }
}
