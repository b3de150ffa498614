use std::fmt;
use std::path::{Path, PathBuf};

/// Extension given to every generated vars file.
pub const VARS_EXTENSION: &str = "yml";

/// One file to create if, and only if, nothing exists at its path yet.
///
/// Built and consumed on the spot by the scaffold service; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldTarget {
    pub directory: PathBuf,
    pub file_name: String,
    pub content: String,
}

impl ScaffoldTarget {
    /// Target for `<directory>/<stem>.yml`.
    pub fn vars_file(directory: &Path, stem: &str, content: impl Into<String>) -> Self {
        Self {
            directory: directory.to_path_buf(),
            file_name: format!("{stem}.{VARS_EXTENSION}"),
            content: content.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// What happened to a single target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    Created,
    /// A file was already there and was left untouched.
    Skipped,
}

impl fmt::Display for ScaffoldOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

/// Ordered record of every target a scaffold pass visited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    entries: Vec<(PathBuf, ScaffoldOutcome)>,
}

impl ScaffoldReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, path: PathBuf, outcome: ScaffoldOutcome) {
        self.entries.push((path, outcome));
    }

    /// Append another report's entries after this one's.
    pub fn extend(&mut self, other: ScaffoldReport) {
        self.entries.extend(other.entries);
    }

    pub fn entries(&self) -> &[(PathBuf, ScaffoldOutcome)] {
        &self.entries
    }

    pub fn created(&self) -> impl Iterator<Item = &Path> {
        self.with_outcome(ScaffoldOutcome::Created)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &Path> {
        self.with_outcome(ScaffoldOutcome::Skipped)
    }

    pub fn created_count(&self) -> usize {
        self.created().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped().count()
    }

    fn with_outcome(&self, wanted: ScaffoldOutcome) -> impl Iterator<Item = &Path> {
        self.entries
            .iter()
            .filter(move |(_, outcome)| *outcome == wanted)
            .map(|(path, _)| path.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vars_file_path() {
        let target = ScaffoldTarget::vars_file(Path::new("group_vars/prod"), "web", "# x\n");
        assert_eq!(target.file_name, "web.yml");
        assert_eq!(target.path(), PathBuf::from("group_vars/prod/web.yml"));
    }

    #[test]
    fn report_counts_by_outcome() {
        let mut report = ScaffoldReport::new();
        report.record("a.yml".into(), ScaffoldOutcome::Created);
        report.record("b.yml".into(), ScaffoldOutcome::Skipped);
        report.record("c.yml".into(), ScaffoldOutcome::Created);

        assert_eq!(report.created_count(), 2);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(
            report.created().collect::<Vec<_>>(),
            [Path::new("a.yml"), Path::new("c.yml")]
        );
    }
}
