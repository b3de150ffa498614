//! Environment detection over a [`CanonicalInventory`].

use std::collections::HashSet;

use tracing::debug;

use crate::domain::{
    common::{META_KEY, ROOT_GROUP, UNGROUPED_GROUP, is_reserved},
    entities::{CanonicalInventory, DetectionStrategy, EnvironmentList},
};

/// Pick the groups that get their own `group_vars/` and `host_vars/` tree.
///
/// When the implicit root group is present with children, those children
/// are the environments. Otherwise every group nobody lists as a child is
/// taken to be top-level. An empty result is returned as-is; warning about
/// it is the caller's business.
pub fn detect(inventory: &CanonicalInventory) -> EnvironmentList {
    let environments = match inventory.get(ROOT_GROUP) {
        Some(root) if !root.children.is_empty() => EnvironmentList::new(
            root.children
                .iter()
                .filter(|name| name.as_str() != UNGROUPED_GROUP && name.as_str() != META_KEY)
                .cloned()
                .collect(),
            DetectionStrategy::RootChildren,
        ),
        _ => parentless_groups(inventory),
    };

    debug!(
        strategy = %environments.strategy(),
        count = environments.len(),
        "Environments detected"
    );
    environments
}

fn parentless_groups(inventory: &CanonicalInventory) -> EnvironmentList {
    let children: HashSet<&str> = inventory
        .iter()
        .flat_map(|(_, group)| group.children.iter().map(String::as_str))
        .collect();

    let names = inventory
        .group_names()
        .filter(|name| !children.contains(name) && !is_reserved(name))
        .map(str::to_owned)
        .collect();

    EnvironmentList::new(names, DetectionStrategy::ParentlessGroups)
}
