//! Shared test doubles for the core crate's unit tests.
//!
//! `TestFs` is a minimal in-memory [`Filesystem`]; the production-grade
//! equivalent (with parent-directory enforcement) lives in
//! `appize_adapters::filesystem::MemoryFilesystem`. Keeping a local double
//! here avoids a dev-dependency cycle with the adapters crate.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::application::ApplicationError;
use crate::application::ports::{Filesystem, IconEngine, SplashResolver};
use crate::domain::{ImageRef, SplashConfig, StepOutcome};
use crate::error::AppizeResult;

#[derive(Debug, Default)]
struct TestFsInner {
    files: HashMap<PathBuf, String>,
    dirs: HashSet<PathBuf>,
    // Paths that fail every read/write/move, simulating permission errors.
    poisoned: HashSet<PathBuf>,
}

/// In-memory filesystem double.
#[derive(Debug, Clone, Default)]
pub(crate) struct TestFs {
    inner: Arc<Mutex<TestFsInner>>,
}

impl TestFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_file(&self, path: &Path, content: &str) {
        let mut inner = self.inner.lock().unwrap();
        register_ancestors(&mut inner.dirs, path);
        inner.files.insert(path.to_path_buf(), content.to_string());
    }

    pub fn seed_dir(&self, path: &Path) {
        let mut inner = self.inner.lock().unwrap();
        register_ancestors(&mut inner.dirs, &path.join("x"));
    }

    pub fn read(&self, path: &Path) -> String {
        self.inner
            .lock()
            .unwrap()
            .files
            .get(path)
            .cloned()
            .unwrap_or_else(|| panic!("no such file: {}", path.display()))
    }

    pub fn remove(&self, path: &Path) {
        self.inner.lock().unwrap().files.remove(path);
    }

    pub fn poison(&self, path: &Path) {
        self.inner.lock().unwrap().poisoned.insert(path.to_path_buf());
    }

    fn fail_if_poisoned(&self, path: &Path) -> AppizeResult<()> {
        if self.inner.lock().unwrap().poisoned.contains(path) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "permission denied (test poison)".into(),
            }
            .into());
        }
        Ok(())
    }
}

fn register_ancestors(dirs: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
    }
    let mut ancestor = current.parent();
    while let Some(dir) = ancestor {
        if dir.as_os_str().is_empty() {
            break;
        }
        dirs.insert(dir.to_path_buf());
        ancestor = dir.parent();
    }
}

impl Filesystem for TestFs {
    fn read_to_string(&self, path: &Path) -> AppizeResult<String> {
        self.fail_if_poisoned(path)?;
        self.inner.lock().unwrap().files.get(path).cloned().ok_or_else(|| {
            ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "no such file".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> AppizeResult<()> {
        self.fail_if_poisoned(path)?;
        let mut inner = self.inner.lock().unwrap();
        register_ancestors(&mut inner.dirs, path);
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.files.contains_key(path) || inner.dirs.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> AppizeResult<()> {
        let mut inner = self.inner.lock().unwrap();
        register_ancestors(&mut inner.dirs, &path.join("x"));
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> AppizeResult<()> {
        self.fail_if_poisoned(from)?;
        self.fail_if_poisoned(to)?;
        let mut inner = self.inner.lock().unwrap();
        let content = inner.files.remove(from).ok_or_else(|| {
            crate::error::AppizeError::from(ApplicationError::Filesystem {
                path: from.to_path_buf(),
                reason: "no such file".into(),
            })
        })?;
        register_ancestors(&mut inner.dirs, to);
        inner.files.insert(to.to_path_buf(), content);
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> AppizeResult<()> {
        let content = self.read_to_string(from)?;
        self.write_file(to, &content)
    }

    fn dir_is_empty(&self, path: &Path) -> AppizeResult<bool> {
        let inner = self.inner.lock().unwrap();
        let occupied = inner
            .files
            .keys()
            .chain(inner.dirs.iter())
            .any(|p| p != path && p.starts_with(path));
        Ok(!occupied)
    }

    fn remove_dir(&self, path: &Path) -> AppizeResult<()> {
        self.inner.lock().unwrap().dirs.remove(path);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> AppizeResult<()> {
        self.fail_if_poisoned(path)?;
        let mut inner = self.inner.lock().unwrap();
        inner.files.retain(|p, _| !p.starts_with(path));
        inner.dirs.retain(|p| !p.starts_with(path));
        Ok(())
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> AppizeResult<()> {
        self.fail_if_poisoned(from)?;
        let mut inner = self.inner.lock().unwrap();
        register_ancestors(&mut inner.dirs, &to.join("x"));
        let copies: Vec<(PathBuf, String)> = inner
            .files
            .iter()
            .filter_map(|(p, c)| p.strip_prefix(from).ok().map(|rel| (to.join(rel), c.clone())))
            .collect();
        for (path, content) in copies {
            register_ancestors(&mut inner.dirs, &path);
            inner.files.insert(path, content);
        }
        Ok(())
    }
}

/// Icon engine double: records nothing, always succeeds.
pub(crate) struct NullIcons;

impl IconEngine for NullIcons {
    fn derive(&self, _source: &ImageRef, _res_root: &Path, _background: &str) -> StepOutcome {
        StepOutcome::Applied
    }
}

/// Splash resolver double: always succeeds.
pub(crate) struct NullSplash;

impl SplashResolver for NullSplash {
    fn resolve(&self, _splash: &SplashConfig, _res: &Path, _assets: &Path) -> StepOutcome {
        StepOutcome::Applied
    }
}
