//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use appize_core::application::ports::Filesystem;
use appize_core::application::ApplicationError;
use appize_core::error::AppizeResult;

/// In-memory filesystem for testing.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.clear();
            inner.directories.clear();
        }
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn missing(path: &Path) -> appize_core::error::AppizeError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: "No such file".into(),
    }
    .into()
}

fn lock_error(path: &Path) -> appize_core::error::AppizeError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: "Filesystem lock poisoned".into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> AppizeResult<String> {
        let inner = self.inner.read().map_err(|_| lock_error(path))?;
        inner.files.get(path).cloned().ok_or_else(|| missing(path))
    }

    fn write_file(&self, path: &Path, content: &str) -> AppizeResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> AppizeResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> AppizeResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(from))?;
        let content = inner.files.remove(from).ok_or_else(|| missing(from))?;
        inner.files.insert(to.to_path_buf(), content);
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> AppizeResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(from))?;
        let content = inner.files.get(from).cloned().ok_or_else(|| missing(from))?;
        inner.files.insert(to.to_path_buf(), content);
        Ok(())
    }

    fn dir_is_empty(&self, path: &Path) -> AppizeResult<bool> {
        let inner = self.inner.read().map_err(|_| lock_error(path))?;
        if !inner.directories.contains(path) {
            return Err(missing(path));
        }
        let occupied = inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .any(|p| p != path && p.starts_with(path));
        Ok(!occupied)
    }

    fn remove_dir(&self, path: &Path) -> AppizeResult<()> {
        if !self.dir_is_empty(path)? {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "Directory not empty".into(),
            }
            .into());
        }
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;
        inner.directories.remove(path);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> AppizeResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;
        inner.files.retain(|p, _| !p.starts_with(path));
        inner.directories.retain(|p| !p.starts_with(path));
        Ok(())
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> AppizeResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(from))?;

        let mut current = PathBuf::new();
        for component in to.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        let dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter_map(|d| d.strip_prefix(from).ok().map(|rel| to.join(rel)))
            .collect();
        let files: Vec<(PathBuf, String)> = inner
            .files
            .iter()
            .filter_map(|(p, c)| p.strip_prefix(from).ok().map(|rel| (to.join(rel), c.clone())))
            .collect();
        inner.directories.extend(dirs);
        inner.files.extend(files);
        Ok(())
    }
}
