//! In-memory file system for unit tests

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Mock file system for testing
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
/// Writes fail unless the parent directory was registered with `add_dir`.
#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    pub dirs: Arc<Mutex<HashSet<PathBuf>>>,
    pub writes: Arc<Mutex<Vec<(PathBuf, bool)>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, content: &[u8]) {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.to_vec());
    }

    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        self.dirs.lock().unwrap().insert(path.into());
    }

    pub fn get(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path).cloned()
    }

    /// Recorded writes as `(path, atomic)`
    pub fn write_log(&self) -> Vec<(PathBuf, bool)> {
        self.writes.lock().unwrap().clone()
    }

    fn store(&self, path: &Path, content: &[u8], atomic: bool) -> FsResult<()> {
        let parent = path.parent().unwrap_or(Path::new(""));
        if !self.is_dir(parent) {
            return Err(not_found(path));
        }
        self.writes
            .lock()
            .unwrap()
            .push((path.to_path_buf(), atomic));
        self.add_file(path, content);
        Ok(())
    }
}

fn not_found(path: &Path) -> FsError {
    FsError::from_io(std::io::ErrorKind::NotFound.into(), path)
}

impl FileSystem for MockFileSystem {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        self.get(path)
            .ok_or_else(|| not_found(path))
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        self.store(path, content, false)
    }

    fn write_atomic(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        self.store(path, content, true)
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }
}
