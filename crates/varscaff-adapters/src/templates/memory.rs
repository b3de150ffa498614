//! In-memory template provider.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use varscaff_core::{
    application::{ApplicationError, ports::TemplateProvider},
    error::VarscaffResult,
};

/// Thread-safe in-memory template provider.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplates {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryTemplates {
    /// Create a new empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(self, name: impl Into<String>, content: impl Into<String>) -> Self {
        // A poisoned lock here only loses the insert; `load` reports it.
        if let Ok(mut inner) = self.inner.write() {
            inner.insert(name.into(), content.into());
        }
        self
    }

    /// Insert or replace a template.
    pub fn insert(&self, name: impl Into<String>, content: impl Into<String>) -> VarscaffResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(name.into(), content.into());
        Ok(())
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if the provider is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateProvider for InMemoryTemplates {
    fn load(&self, name: &str) -> VarscaffResult<Option<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.get(name).cloned())
    }
}
