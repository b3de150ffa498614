use std::collections::{BTreeSet, HashMap};

/// Children and hosts declared directly on one group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupRecord {
    pub children: Vec<String>,
    pub hosts: Vec<String>,
}

impl GroupRecord {
    pub fn new(children: Vec<String>, hosts: Vec<String>) -> Self {
        Self { children, hosts }
    }

    /// Union `other` into `self`, keeping first-seen order.
    fn absorb(&mut self, other: GroupRecord) {
        append_unique(&mut self.children, other.children);
        append_unique(&mut self.hosts, other.hosts);
    }
}

fn append_unique(into: &mut Vec<String>, from: Vec<String>) {
    for name in from {
        if !into.contains(&name) {
            into.push(name);
        }
    }
}

/// Flat group-name → [`GroupRecord`] mapping shared by detection and
/// scaffolding.
///
/// Iteration follows insertion order: environment detection reports groups
/// in the order the inventory declared them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalInventory {
    order: Vec<String>,
    groups: HashMap<String, GroupRecord>,
}

impl CanonicalInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a group. A replaced group keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, record: GroupRecord) {
        let name = name.into();
        if !self.groups.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.groups.insert(name, record);
    }

    /// Insert a group, unioning with an existing record of the same name.
    ///
    /// Nested inventories may declare one group under several parents;
    /// each declaration contributes its children and hosts.
    pub fn merge(&mut self, name: impl Into<String>, record: GroupRecord) {
        let name = name.into();
        match self.groups.get_mut(&name) {
            Some(existing) => existing.absorb(record),
            None => self.insert(name, record),
        }
    }

    pub fn get(&self, name: &str) -> Option<&GroupRecord> {
        self.groups.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Direct child groups of `name`; empty for unknown groups.
    pub fn children_of(&self, name: &str) -> &[String] {
        self.get(name)
            .map(|g| g.children.as_slice())
            .unwrap_or_default()
    }

    /// Direct hosts of `name`; empty for unknown groups.
    pub fn hosts_of(&self, name: &str) -> &[String] {
        self.get(name)
            .map(|g| g.hosts.as_slice())
            .unwrap_or_default()
    }

    /// Group names in insertion order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GroupRecord)> {
        self.order
            .iter()
            .filter_map(|name| self.groups.get(name).map(|g| (name.as_str(), g)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Same groups, and per group the same child and host sets.
    ///
    /// Order is ignored: the listing command and the YAML reader may list
    /// members differently for the same logical inventory.
    pub fn is_equivalent(&self, other: &CanonicalInventory) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|(name, record)| {
            other.get(name).is_some_and(|theirs| {
                as_set(&record.children) == as_set(&theirs.children)
                    && as_set(&record.hosts) == as_set(&theirs.hosts)
            })
        })
    }
}

fn as_set(names: &[String]) -> BTreeSet<&str> {
    names.iter().map(String::as_str).collect()
}

impl<N: Into<String>> FromIterator<(N, GroupRecord)> for CanonicalInventory {
    fn from_iter<I: IntoIterator<Item = (N, GroupRecord)>>(iter: I) -> Self {
        let mut inventory = Self::new();
        for (name, record) in iter {
            inventory.insert(name, record);
        }
        inventory
    }
}
