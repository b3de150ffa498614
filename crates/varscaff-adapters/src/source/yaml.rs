//! Inventory source that parses the inventory file as YAML.

use std::path::Path;

use serde_json::Value;
use tracing::instrument;
use varscaff_core::{application::ports::InventorySource, error::VarscaffResult};

/// Reads the inventory file directly and parses it as YAML (JSON is a
/// subset, so `.json` inventories work too).
///
/// Never declines: a file it cannot read or parse is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFileSource;

impl YamlFileSource {
    pub fn new() -> Self {
        Self
    }
}

impl InventorySource for YamlFileSource {
    fn name(&self) -> &'static str {
        "yaml-file"
    }

    #[cfg(feature = "yaml")]
    #[instrument(skip_all, fields(path = %path.display()))]
    fn acquire(&self, path: &Path) -> VarscaffResult<Option<Value>> {
        use varscaff_core::{application::ApplicationError, domain::DomainError};

        let text = std::fs::read_to_string(path).map_err(|e| ApplicationError::SourceUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let document: serde_yaml::Value = serde_yaml::from_str(&text)
            .map_err(|e| DomainError::invalid_structure(path.display().to_string(), e.to_string()))?;

        tracing::debug!("Parsed inventory file");
        Ok(Some(convert::to_json(document)))
    }

    #[cfg(not(feature = "yaml"))]
    #[instrument(skip_all, fields(path = %path.display()))]
    fn acquire(&self, path: &Path) -> VarscaffResult<Option<Value>> {
        use varscaff_core::application::ApplicationError;

        Err(ApplicationError::MissingCapability {
            capability: format!(
                "YAML parsing for {} (built without the `yaml` feature)",
                path.display()
            ),
        }
        .into())
    }
}

/// YAML values are richer than JSON ones: keys may be any scalar and nodes
/// may carry tags such as `!vault`. Keys are stringified, tags dropped.
#[cfg(feature = "yaml")]
mod convert {
    use serde_json::{Map, Number, Value};

    pub(super) fn to_json(value: serde_yaml::Value) -> Value {
        match value {
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Bool(b) => Value::Bool(b),
            serde_yaml::Value::Number(n) => number(&n),
            serde_yaml::Value::String(s) => Value::String(s),
            serde_yaml::Value::Sequence(items) => {
                Value::Array(items.into_iter().map(to_json).collect())
            }
            serde_yaml::Value::Mapping(mapping) => {
                let mut object = Map::with_capacity(mapping.len());
                for (key, value) in mapping {
                    object.insert(key_string(key), to_json(value));
                }
                Value::Object(object)
            }
            serde_yaml::Value::Tagged(tagged) => to_json(tagged.value),
        }
    }

    fn number(n: &serde_yaml::Number) -> Value {
        if let Some(i) = n.as_i64() {
            Value::from(i)
        } else if let Some(u) = n.as_u64() {
            Value::from(u)
        } else {
            n.as_f64()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(n.to_string()))
        }
    }

    fn key_string(key: serde_yaml::Value) -> String {
        match key {
            serde_yaml::Value::String(s) => s,
            serde_yaml::Value::Number(n) => n.to_string(),
            serde_yaml::Value::Bool(b) => b.to_string(),
            serde_yaml::Value::Null => String::new(),
            serde_yaml::Value::Tagged(tagged) => key_string(tagged.value),
            other => serde_yaml::to_string(&other)
                .map(|s| s.trim().to_owned())
                .unwrap_or_default(),
        }
    }
}
