use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use slipcal_core::{ArchiveKey, ArchiveStore};
use slipcal_types::{Observation, SlipcalError};

/// In-memory archive store for tests and demos.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<HashMap<ArchiveKey, Vec<Observation>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArchiveStore for MemoryStore {
    async fn get(&self, key: &ArchiveKey) -> Result<Option<Vec<Observation>>, SlipcalError> {
        Ok(self.inner.lock().await.get(key).cloned())
    }

    async fn put(
        &self,
        key: ArchiveKey,
        observations: Vec<Observation>,
    ) -> Result<(), SlipcalError> {
        self.inner.lock().await.insert(key, observations);
        Ok(())
    }
}

/// Archive store persisting one JSON file per (vessel, period) key under a
/// root directory: `<root>/<vessel>/<YYYY-MM>.json`.
pub struct JsonDirStore {
    root: PathBuf,
}

impl JsonDirStore {
    /// Create a store rooted at `root`. The directory is created lazily on
    /// the first `put`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &ArchiveKey) -> PathBuf {
        self.root
            .join(key.vessel.as_str())
            .join(format!("{}.json", key.period))
    }
}

fn archive_err(context: &str, path: &Path, err: impl std::fmt::Display) -> SlipcalError {
    SlipcalError::Archive(format!("{context} {}: {err}", path.display()))
}

#[async_trait]
impl ArchiveStore for JsonDirStore {
    async fn get(&self, key: &ArchiveKey) -> Result<Option<Vec<Observation>>, SlipcalError> {
        let path = self.path_for(key);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(archive_err("failed to read", &path, err)),
        };
        let observations =
            serde_json::from_slice(&bytes).map_err(|e| archive_err("corrupt payload", &path, e))?;
        Ok(Some(observations))
    }

    async fn put(
        &self,
        key: ArchiveKey,
        observations: Vec<Observation>,
    ) -> Result<(), SlipcalError> {
        let path = self.path_for(&key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| archive_err("failed to create", parent, e))?;
        }
        let payload = serde_json::to_vec_pretty(&observations)
            .map_err(|e| archive_err("failed to encode", &path, e))?;
        tokio::fs::write(&path, payload)
            .await
            .map_err(|e| archive_err("failed to write", &path, e))?;
        Ok(())
    }
}
