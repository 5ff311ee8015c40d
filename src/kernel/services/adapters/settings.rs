//! Settings files: flat JSON objects keyed by dotted names.
//!
//! ```json
//! { "monoScope.defaultScope": "workspace" }
//! ```
//!
//! User settings load first, workspace settings override them.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde_json::Value;

use super::paths::{get_user_settings_path, workspace_settings_path};
use crate::kernel::services::ports::Configuration;

#[derive(Debug, Clone, Default)]
pub struct LayeredSettings {
    values: FxHashMap<String, String>,
}

impl LayeredSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// User settings, then `<root>/.monoscope/settings.json` on top.
    pub fn load(workspace_root: Option<&Path>) -> Self {
        let mut settings = Self::new();
        if let Some(path) = get_user_settings_path() {
            settings.merge_file(&path);
        }
        if let Some(root) = workspace_root {
            settings.merge_file(&workspace_settings_path(root));
        }
        settings
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    /// Missing files are skipped silently, malformed ones with a warning.
    pub fn merge_file(&mut self, path: &Path) {
        let Ok(data) = std::fs::read_to_string(path) else {
            return;
        };
        if let Err(e) = self.merge_json(&data) {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed settings file");
        }
    }

    pub fn merge_json(&mut self, data: &str) -> serde_json::Result<()> {
        let object: serde_json::Map<String, Value> = serde_json::from_str(data)?;
        for (key, value) in object {
            match value {
                Value::String(s) => {
                    self.values.insert(key, s);
                }
                Value::Bool(_) | Value::Number(_) => {
                    self.values.insert(key, value.to_string());
                }
                _ => {}
            }
        }
        Ok(())
    }
}

impl Configuration for LayeredSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
