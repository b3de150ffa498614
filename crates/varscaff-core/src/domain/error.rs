// ============================================================================
// domain/error.rs - INVENTORY DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside `VarscaffError`)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The inventory document could not be read as a group mapping.
    ///
    /// `origin` names the source (file path or listing command) so the
    /// diagnostic points at the offending input.
    #[error("Invalid inventory structure in {origin}: {reason}")]
    InvalidStructure { origin: String, reason: String },
}

impl DomainError {
    /// Shorthand for [`DomainError::InvalidStructure`].
    pub fn invalid_structure(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidStructure {
            origin: origin.into(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidStructure { origin, .. } => vec![
                format!("Check that {} is a YAML or JSON mapping of groups", origin),
                "The top level should look like `all: {children: {...}}`".into(),
                "A group must not list one of its own ancestors as a child".into(),
            ],
        }
    }
}

/// Result alias for pure domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
