//! Template provider backed by a directory of plain files.

use std::{
    io,
    path::{Path, PathBuf},
};

use tracing::debug;
use varscaff_core::{
    application::{ApplicationError, ports::TemplateProvider},
    error::VarscaffResult,
};

/// Conventional location of scaffolding templates, relative to the
/// working directory.
pub const DEFAULT_TEMPLATE_DIR: &str = "scripts/templates/scaffolding";

/// Reads `<root>/<name>` verbatim.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
}

impl DirectoryTemplates {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for DirectoryTemplates {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE_DIR)
    }
}

impl TemplateProvider for DirectoryTemplates {
    fn load(&self, name: &str) -> VarscaffResult<Option<String>> {
        let path = self.root.join(name);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                debug!(path = %path.display(), "Template loaded");
                Ok(Some(content))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ApplicationError::TemplateUnreadable {
                name: name.to_owned(),
                reason: e.to_string(),
            }
            .into()),
        }
    }
}
