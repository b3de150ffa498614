use serde_json::{Map, Value};

use crate::domain::{
    common::META_KEY,
    error::{DomainError, DomainResult},
};

/// Inventory data as it arrived from a source, with its shape decided.
///
/// The shape is determined exactly once, by [`RawInventory::classify`],
/// right after acquisition. Normalization then matches on the variant
/// instead of probing for shape-specific keys.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInventory {
    /// Listing-command output: every group at the top level, plus `_meta`.
    Flat(Map<String, Value>),
    /// Hand-written inventory: groups nested through `children` mappings.
    Nested(Map<String, Value>),
}

impl RawInventory {
    /// Decide the shape of a freshly acquired document.
    ///
    /// `origin` is only used for the diagnostic when the document is not a
    /// mapping at the top level.
    pub fn classify(document: Value, origin: &str) -> DomainResult<Self> {
        match document {
            Value::Object(map) if map.contains_key(META_KEY) => Ok(Self::Flat(map)),
            Value::Object(map) => Ok(Self::Nested(map)),
            other => Err(DomainError::invalid_structure(
                origin,
                format!("expected a mapping at the top level, found {}", kind_of(&other)),
            )),
        }
    }

    /// `true` for listing-command output.
    pub fn is_flat(&self) -> bool {
        matches!(self, Self::Flat(_))
    }

    /// Short label for logs.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Flat(_) => "flat",
            Self::Nested(_) => "nested",
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "an empty document",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn meta_key_selects_flat_shape() {
        let raw = RawInventory::classify(json!({"_meta": {}, "all": {}}), "x").unwrap();
        assert!(raw.is_flat());
        assert_eq!(raw.shape(), "flat");
    }

    #[test]
    fn mapping_without_meta_is_nested() {
        let raw = RawInventory::classify(json!({"all": {"children": {}}}), "x").unwrap();
        assert!(!raw.is_flat());
    }

    #[test]
    fn non_mapping_is_invalid_structure() {
        let err = RawInventory::classify(json!(["a", "b"]), "inventory/hosts.yml").unwrap_err();
        let DomainError::InvalidStructure { origin, reason } = err;
        assert_eq!(origin, "inventory/hosts.yml");
        assert!(reason.contains("sequence"));
    }

    #[test]
    fn empty_document_is_invalid_structure() {
        assert!(RawInventory::classify(Value::Null, "x").is_err());
    }
}
