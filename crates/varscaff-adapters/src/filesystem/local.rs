//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use varscaff_core::{application::ports::Filesystem, error::VarscaffResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> VarscaffResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> VarscaffResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> varscaff_core::error::VarscaffError {
    use varscaff_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_nested_directories_and_tolerates_existing_ones() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("group_vars/prod");

        fs.create_dir_all(&dir).unwrap();
        fs.create_dir_all(&dir).unwrap();

        assert!(fs.exists(&dir));
    }

    #[test]
    fn writes_and_reports_existence() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("web.yml");

        assert!(!fs.exists(&file));
        fs.write_file(&file, "# hi\n").unwrap();

        assert!(fs.exists(&file));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "# hi\n");
    }

    #[test]
    fn write_into_missing_directory_is_filesystem_error() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        let err = fs
            .write_file(&tmp.path().join("missing/web.yml"), "x")
            .unwrap_err();
        assert!(err.to_string().contains("Failed to write file"));
    }
}
