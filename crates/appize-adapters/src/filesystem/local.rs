//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use appize_core::{application::ports::Filesystem, error::AppizeResult};

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
    fn read_to_string(&self, path: &Path) -> AppizeResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> AppizeResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> AppizeResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn rename(&self, from: &Path, to: &Path) -> AppizeResult<()> {
        std::fs::rename(from, to).map_err(|e| map_io_error(from, e, "move file"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> AppizeResult<()> {
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(from, e, "copy file"))
    }

    fn dir_is_empty(&self, path: &Path) -> AppizeResult<bool> {
        let mut entries =
            std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;
        Ok(entries.next().is_none())
    }

    fn remove_dir(&self, path: &Path) -> AppizeResult<()> {
        std::fs::remove_dir(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }

    fn remove_dir_all(&self, path: &Path) -> AppizeResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove tree"))
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> AppizeResult<()> {
        std::fs::create_dir_all(to).map_err(|e| map_io_error(to, e, "create directory"))?;
        let entries =
            std::fs::read_dir(from).map_err(|e| map_io_error(from, e, "read directory"))?;
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(from, e, "read directory"))?;
            let source = entry.path();
            let target = to.join(entry.file_name());
            let file_type = entry
                .file_type()
                .map_err(|e| map_io_error(&source, e, "inspect entry"))?;
            if file_type.is_dir() {
                self.copy_tree(&source, &target)?;
            } else {
                std::fs::copy(&source, &target)
                    .map(|_| ())
                    .map_err(|e| map_io_error(&source, e, "copy file"))?;
            }
        }
        Ok(())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> appize_core::error::AppizeError {
    use appize_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
