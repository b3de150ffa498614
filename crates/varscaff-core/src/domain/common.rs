//! Reserved inventory names, the single name-list conversion and the
//! file-name check applied before anything is written.

use serde_json::Value;

use crate::domain::error::{DomainError, DomainResult};

/// Implicit root group every inventory has.
pub const ROOT_GROUP: &str = "all";

/// Implicit bucket for hosts that belong to no explicit group.
pub const UNGROUPED_GROUP: &str = "ungrouped";

/// Key the listing command uses for host variables; never a group.
pub const META_KEY: &str = "_meta";

/// Convert any inventory name collection into a flat list of names.
///
/// Group and host collections show up in three forms depending on the
/// source: a sequence, a mapping whose keys are the names, or a single
/// whitespace-separated string. Every caller goes through here so the
/// three-way check lives in one place.
///
/// Null entries and blank strings are dropped. Scalar numbers and booleans
/// are kept in their textual form, since YAML happily parses `10:` as an
/// integer key.
pub fn name_list(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::String(s) => s.split_whitespace().map(str::to_owned).collect(),
        Value::Array(items) => items.iter().filter_map(scalar_name).collect(),
        Value::Object(map) => map
            .keys()
            .filter(|k| !k.trim().is_empty())
            .cloned()
            .collect(),
        Value::Bool(_) | Value::Number(_) => scalar_name(value).into_iter().collect(),
    }
}

fn scalar_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Whether `name` is one of the reserved, never-scaffolded names.
pub fn is_reserved(name: &str) -> bool {
    matches!(name, ROOT_GROUP | UNGROUPED_GROUP | META_KEY)
}

/// Reject a group or host name that cannot be used as a single path
/// component below `group_vars/` or `host_vars/`.
///
/// `kind` is `"group"` or `"host"` and only shapes the error origin.
pub fn ensure_file_stem(kind: &str, name: &str) -> DomainResult<()> {
    let escapes = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if escapes {
        return Err(DomainError::invalid_structure(
            format!("{kind} '{name}'"),
            "name is not usable as a file name (path separator or '..')",
        ));
    }
    Ok(())
}
