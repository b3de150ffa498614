//! Inventory source returning a document held in memory.

use std::path::Path;

use serde_json::Value;
use varscaff_core::{application::ports::InventorySource, error::VarscaffResult};

/// Hands out the same document for every path. Useful for tests and for
/// callers that already hold a parsed inventory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    document: Value,
}

impl StaticSource {
    pub fn new(document: Value) -> Self {
        Self { document }
    }
}

impl InventorySource for StaticSource {
    fn name(&self) -> &'static str {
        "static"
    }

    fn acquire(&self, _path: &Path) -> VarscaffResult<Option<Value>> {
        Ok(Some(self.document.clone()))
    }
}
