use std::fmt;

/// How the environment list was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionStrategy {
    /// Taken from the children of the implicit root group.
    RootChildren,
    /// Groups that never appear as anyone's child.
    ParentlessGroups,
}

impl fmt::Display for DetectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootChildren => write!(f, "root-children"),
            Self::ParentlessGroups => write!(f, "parentless-groups"),
        }
    }
}

/// Ordered top-level groups that receive scaffolding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentList {
    names: Vec<String>,
    strategy: DetectionStrategy,
}

impl EnvironmentList {
    pub fn new(names: Vec<String>, strategy: DetectionStrategy) -> Self {
        Self { names, strategy }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn strategy(&self) -> DetectionStrategy {
        self.strategy
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl fmt::Display for EnvironmentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(", "))
    }
}
