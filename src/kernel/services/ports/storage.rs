//! Persisted state and read-only settings.

use async_trait::async_trait;

use super::error::HostResult;

/// Persisted string values scoped to the current workspace.
#[async_trait]
pub trait Memento: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Completes only after the value is durable.
    async fn update(&self, key: &str, value: &str) -> HostResult<()>;
}

/// Read-only view of user/workspace settings, keyed by dotted names.
pub trait Configuration: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}
