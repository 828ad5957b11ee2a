//! Asset sources: where `/assets/*` files come from.
//!
//! Two modes, chosen by [`Config::hot_reload`]:
//! - [`AssetSource::Disk`] reads the public directory on every request and
//!   reports each file's modification time.
//! - [`AssetSource::Memory`] snapshots the directory once at startup and
//!   reports the snapshot time for every file.

use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use axum::body::Bytes;

use crate::error::AssetError;

/// An asset resolved from the in-memory snapshot.
#[derive(Debug, Clone)]
pub struct Asset {
    /// Path relative to the public directory, `/`-separated.
    pub path: String,
    pub body: Bytes,
    pub last_modified: SystemTime,
}

/// Asset source settings.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory served under `/assets`.
    pub public_dir: PathBuf,
    /// Read from disk on every request instead of caching in memory.
    pub hot_reload: bool,
}

impl Config {
    /// Build the asset source.
    ///
    /// # Errors
    ///
    /// In cached mode, returns an I/O error if the public directory cannot
    /// be read.
    pub fn build(self) -> io::Result<AssetSource> {
        if self.hot_reload {
            tracing::info!(dir = %self.public_dir.display(), "serving assets from disk");
            return Ok(AssetSource::Disk {
                root: self.public_dir,
            });
        }

        let store = MemoryStore::load(&self.public_dir)?;
        tracing::info!(
            dir = %self.public_dir.display(),
            count = store.files.len(),
            "assets loaded in memory"
        );
        Ok(AssetSource::Memory(Arc::new(store)))
    }
}

/// Where the asset routes read from.
#[derive(Debug, Clone)]
pub enum AssetSource {
    Disk { root: PathBuf },
    Memory(Arc<MemoryStore>),
}

/// Snapshot of the public directory taken at startup.
#[derive(Debug)]
pub struct MemoryStore {
    files: HashMap<String, Bytes>,
    loaded_at: SystemTime,
}

impl MemoryStore {
    /// Read every file below `dir`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if any directory or file cannot be read.
    pub fn load(dir: &Path) -> io::Result<Self> {
        let mut files = HashMap::new();
        load_dir(dir, dir, &mut files)?;
        Ok(Self {
            files,
            loaded_at: SystemTime::now(),
        })
    }

    /// Resolve `path` (relative to the public directory).
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::NotFound`] for unknown paths and paths that
    /// leave the public directory.
    pub fn open(&self, path: &str) -> Result<Asset, AssetError> {
        let key = normalize(path)
            .map(|relative| as_key(&relative))
            .ok_or_else(|| AssetError::NotFound(path.to_string()))?;
        let body = self
            .files
            .get(&key)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(key.clone()))?;
        Ok(Asset {
            path: key,
            body,
            last_modified: self.loaded_at,
        })
    }
}

/// Turn a request path into a relative path, rejecting anything but plain
/// file names.
fn normalize(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() || trimmed.contains('\\') {
        return None;
    }
    let relative = PathBuf::from(trimmed);
    relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
        .then_some(relative)
}

fn as_key(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn load_dir(root: &Path, dir: &Path, files: &mut HashMap<String, Bytes>) -> io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            load_dir(root, &path, files)?;
        } else if file_type.is_file() {
            let relative = path.strip_prefix(root).map_err(io::Error::other)?;
            files.insert(as_key(relative), Bytes::from(std::fs::read(&path)?));
        }
    }
    Ok(())
}
