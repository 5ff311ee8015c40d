//! Workspace-scoped persisted state.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;
use rustc_hash::FxHashMap;

use super::paths::get_workspace_state_path;
use crate::kernel::services::ports::{HostError, HostResult, Memento};

/// Volatile memento; values live as long as the process.
#[derive(Default)]
pub struct MemoryMemento {
    values: RwLock<FxHashMap<String, String>>,
}

impl MemoryMemento {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.to_string(), value.to_string());
        }
    }
}

#[async_trait]
impl Memento for MemoryMemento {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    async fn update(&self, key: &str, value: &str) -> HostResult<()> {
        self.insert(key, value);
        Ok(())
    }
}

/// Memento backed by a JSON object on disk, rewritten on every update.
pub struct JsonMemento {
    path: PathBuf,
    values: RwLock<FxHashMap<String, String>>,
}

impl JsonMemento {
    /// Loads `path` if present. A missing or unreadable file starts empty.
    pub fn open(path: PathBuf) -> Self {
        let values = match std::fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "discarding corrupt workspace state");
                FxHashMap::default()
            }),
            Err(_) => FxHashMap::default(),
        };
        Self {
            path,
            values: RwLock::new(values),
        }
    }

    /// State file for `workspace_root` under the app data directory.
    pub fn for_workspace(workspace_root: &Path) -> HostResult<Self> {
        let path = get_workspace_state_path(workspace_root)
            .ok_or(HostError::Unavailable("app data directory"))?;
        Ok(Self::open(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, message: impl ToString) -> HostError {
        HostError::Storage {
            path: self.path.clone(),
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl Memento for JsonMemento {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    /// The in-memory value only changes once the file write has succeeded,
    /// so a failed update leaves `get` and the file in agreement.
    async fn update(&self, key: &str, value: &str) -> HostResult<()> {
        let mut snapshot = self
            .values
            .read()
            .map_err(|_| self.storage_error("state lock poisoned"))?
            .clone();
        snapshot.insert(key.to_string(), value.to_string());

        let content =
            serde_json::to_string_pretty(&snapshot).map_err(|e| self.storage_error(e))?;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.storage_error(e))?;
        }
        tokio::fs::write(&self.path, content)
            .await
            .map_err(|e| self.storage_error(e))?;

        self.values
            .write()
            .map_err(|_| self.storage_error("state lock poisoned"))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/state.rs"]
mod tests;
