//! Raw inventory → [`CanonicalInventory`].
//!
//! The flat shape already lists every group at the top level, so it is a
//! straight copy. The nested shape is walked depth-first from the implicit
//! root, recording each named node on the way down.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::domain::{
    common::{META_KEY, ROOT_GROUP, name_list},
    entities::{CanonicalInventory, GroupRecord, RawInventory},
    error::{DomainError, DomainResult},
};

/// Deepest group nesting the walker follows before giving up.
pub const MAX_NESTING_DEPTH: usize = 64;

const CHILDREN: &str = "children";
const HOSTS: &str = "hosts";

/// Flatten either inventory shape into the canonical mapping.
pub fn normalize(raw: &RawInventory) -> DomainResult<CanonicalInventory> {
    let inventory = match raw {
        RawInventory::Flat(groups) => normalize_flat(groups),
        RawInventory::Nested(tree) => normalize_nested(tree)?,
    };

    debug!(
        shape = raw.shape(),
        groups = inventory.len(),
        "Inventory normalized"
    );
    Ok(inventory)
}

fn normalize_flat(groups: &Map<String, Value>) -> CanonicalInventory {
    groups
        .iter()
        .filter(|(name, _)| name.as_str() != META_KEY && name.as_str() != ROOT_GROUP)
        .filter_map(|(name, value)| match value {
            Value::Object(group) => Some((name.as_str(), record_of(group))),
            _ => None,
        })
        .collect()
}

fn normalize_nested(tree: &Map<String, Value>) -> DomainResult<CanonicalInventory> {
    let mut walker = Walker::default();

    match tree.get(ROOT_GROUP) {
        Some(Value::Object(root)) => walker.enter(ROOT_GROUP, root, false)?,
        _ => {
            for (name, node) in tree {
                if let Value::Object(group) = node {
                    walker.enter(name, group, true)?;
                }
            }
        }
    }

    Ok(walker.inventory)
}

fn record_of(group: &Map<String, Value>) -> GroupRecord {
    GroupRecord::new(member(group, CHILDREN), member(group, HOSTS))
}

fn member(group: &Map<String, Value>, key: &str) -> Vec<String> {
    group.get(key).map(name_list).unwrap_or_default()
}

#[derive(Default)]
struct Walker {
    inventory: CanonicalInventory,
    /// Names from the walk root down to the node being visited.
    ancestry: Vec<String>,
}

impl Walker {
    /// Visit `node` as `name`; `record` is false only for the implicit root.
    fn enter(&mut self, name: &str, node: &Map<String, Value>, record: bool) -> DomainResult<()> {
        if self.ancestry.iter().any(|ancestor| ancestor == name) {
            return Err(DomainError::invalid_structure(
                format!("group '{name}'"),
                format!(
                    "group is its own ancestor ({} -> {name})",
                    self.ancestry.join(" -> ")
                ),
            ));
        }
        if self.ancestry.len() >= MAX_NESTING_DEPTH {
            return Err(DomainError::invalid_structure(
                format!("group '{name}'"),
                format!("groups nested deeper than {MAX_NESTING_DEPTH} levels"),
            ));
        }

        if record {
            trace!(group = name, depth = self.ancestry.len(), "Visiting group");
            self.inventory.merge(name, record_of(node));
        }

        if let Some(Value::Object(children)) = node.get(CHILDREN) {
            self.ancestry.push(name.to_owned());
            let empty = Map::new();
            for (child, child_node) in children {
                if child.trim().is_empty() {
                    continue;
                }
                let child_node = match child_node {
                    Value::Object(map) => map,
                    // `child:` with no body still declares the group
                    _ => &empty,
                };
                self.enter(child, child_node, true)?;
            }
            self.ancestry.pop();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nested(doc: Value) -> CanonicalInventory {
        normalize(&RawInventory::classify(doc, "test").unwrap()).unwrap()
    }

    #[test]
    fn flat_shape_copies_groups_and_drops_reserved_keys() {
        let inv = nested(json!({
            "_meta": {"hostvars": {}},
            "all": {"children": ["prod", "ungrouped"]},
            "prod": {"children": ["web"]},
            "web": {"hosts": ["web1", "web2"]},
            "ungrouped": {},
        }));

        assert_eq!(inv.group_names().collect::<Vec<_>>(), ["prod", "web", "ungrouped"]);
        assert_eq!(inv.children_of("prod"), ["web"]);
        assert!(inv.hosts_of("prod").is_empty());
        assert_eq!(inv.hosts_of("web"), ["web1", "web2"]);
        assert!(!inv.contains("all"));
        assert!(!inv.contains("_meta"));
    }

    #[test]
    fn flat_shape_ignores_non_record_values() {
        let inv = nested(json!({"_meta": {}, "odd": "text", "g": {"hosts": []}}));
        assert_eq!(inv.group_names().collect::<Vec<_>>(), ["g"]);
    }

    #[test]
    fn nested_shape_walks_children_from_root() {
        let inv = nested(json!({
            "all": {
                "children": {
                    "prod": {
                        "children": {
                            "web": {"hosts": {"web1": null, "web2": {"port": 22}}},
                            "db": {"hosts": ["db1"]},
                        }
                    },
                    "staging": {"hosts": {"stg1": null}},
                }
            }
        }));

        assert_eq!(
            inv.group_names().collect::<Vec<_>>(),
            ["prod", "web", "db", "staging"]
        );
        assert_eq!(inv.children_of("prod"), ["web", "db"]);
        assert_eq!(inv.hosts_of("web"), ["web1", "web2"]);
        assert_eq!(inv.hosts_of("db"), ["db1"]);
        assert_eq!(inv.hosts_of("staging"), ["stg1"]);
        assert!(!inv.contains("all"));
    }

    #[test]
    fn nested_shape_without_root_treats_each_key_as_root() {
        let inv = nested(json!({
            "web": {"hosts": ["web1"]},
            "db": {"hosts": ["db1"]},
            "junk": null,
        }));
        assert_eq!(inv.group_names().collect::<Vec<_>>(), ["web", "db"]);
    }

    #[test]
    fn child_sequence_is_not_recursed() {
        let inv = nested(json!({"all": {"children": {"prod": {"children": ["web", "db"]}}}}));
        assert_eq!(inv.children_of("prod"), ["web", "db"]);
        assert!(!inv.contains("web"));
    }

    #[test]
    fn empty_child_node_is_still_recorded() {
        let inv = nested(json!({"all": {"children": {"prod": null}}}));
        assert!(inv.contains("prod"));
        assert!(inv.children_of("prod").is_empty());
    }

    #[test]
    fn group_declared_twice_is_merged() {
        let inv = nested(json!({
            "all": {"children": {
                "prod": {"children": {"web": {"hosts": ["w1"]}}},
                "eu": {"children": {"web": {"hosts": ["w2"]}}},
            }}
        }));
        assert_eq!(inv.hosts_of("web"), ["w1", "w2"]);
    }

    #[test]
    fn ancestor_as_child_is_rejected() {
        let raw = RawInventory::classify(
            json!({"all": {"children": {"prod": {"children": {"prod": {}}}}}}),
            "test",
        )
        .unwrap();
        assert!(matches!(
            normalize(&raw),
            Err(DomainError::InvalidStructure { origin, reason })
                if origin == "group 'prod'" && reason.contains("all -> prod -> prod")
        ));
    }

    #[test]
    fn excessive_nesting_is_rejected() {
        let mut node = json!({"hosts": ["leaf"]});
        for depth in 0..(MAX_NESTING_DEPTH + 1) {
            let mut children = Map::new();
            children.insert(format!("g{depth}"), node);
            node = json!({ "children": children });
        }
        let raw = RawInventory::classify(json!({ "all": node }), "test").unwrap();
        assert!(matches!(
            normalize(&raw),
            Err(DomainError::InvalidStructure { reason, .. }) if reason.contains("deeper than 64")
        ));
    }

    #[test]
    fn flat_and_nested_forms_are_equivalent() {
        let flat = nested(json!({
            "_meta": {"hostvars": {}},
            "all": {"children": ["prod", "ungrouped"]},
            "prod": {"children": ["db", "web"]},
            "web": {"hosts": ["web2", "web1"]},
            "db": {"hosts": ["db1"]},
            "ungrouped": {},
        }));
        let tree = nested(json!({
            "all": {"children": {
                "prod": {"children": {
                    "web": {"hosts": {"web1": null, "web2": null}},
                    "db": {"hosts": {"db1": null}},
                }},
                "ungrouped": {},
            }}
        }));

        assert!(flat.is_equivalent(&tree));
    }
}
