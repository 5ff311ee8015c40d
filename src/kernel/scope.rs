//! Scope mode: project-restricted or whole-workspace quick open.

use std::str::FromStr;
use std::sync::Arc;

use super::services::ports::{Configuration, HostResult, Memento};

pub const SCOPE_MODE_KEY: &str = "monoScope.scopeMode";
pub const DEFAULT_SCOPE_KEY: &str = "monoScope.defaultScope";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeMode {
    Project,
    Workspace,
}

impl Default for ScopeMode {
    fn default() -> Self {
        Self::Project
    }
}

impl ScopeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ScopeMode::Project => "project",
            ScopeMode::Workspace => "workspace",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ScopeMode::Project => ScopeMode::Workspace,
            ScopeMode::Workspace => ScopeMode::Project,
        }
    }
}

impl std::fmt::Display for ScopeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseScopeModeError(pub String);

impl std::fmt::Display for ParseScopeModeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown scope mode: {}", self.0)
    }
}

impl std::error::Error for ParseScopeModeError {}

impl FromStr for ScopeMode {
    type Err = ParseScopeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "project" => Ok(ScopeMode::Project),
            "workspace" => Ok(ScopeMode::Workspace),
            other => Err(ParseScopeModeError(other.to_string())),
        }
    }
}

/// Persisted scope mode for the current workspace.
///
/// Reads fall back to the configured default without writing it; only
/// `toggle_mode` persists.
#[derive(Clone)]
pub struct ScopeState {
    state: Arc<dyn Memento>,
    config: Arc<dyn Configuration>,
}

impl ScopeState {
    pub fn new(state: Arc<dyn Memento>, config: Arc<dyn Configuration>) -> Self {
        Self { state, config }
    }

    pub fn mode(&self) -> ScopeMode {
        if let Some(mode) = self.state.get(SCOPE_MODE_KEY).and_then(|v| v.parse().ok()) {
            return mode;
        }
        self.default_mode()
    }

    pub fn default_mode(&self) -> ScopeMode {
        let fallback = ScopeMode::default();
        self.config
            .get_or(DEFAULT_SCOPE_KEY, fallback.as_str())
            .parse()
            .unwrap_or_else(|e: ParseScopeModeError| {
                tracing::warn!(error = %e, key = DEFAULT_SCOPE_KEY, "ignoring invalid setting");
                fallback
            })
    }

    pub async fn toggle_mode(&self) -> HostResult<ScopeMode> {
        let next = self.mode().toggled();
        self.state.update(SCOPE_MODE_KEY, next.as_str()).await?;
        tracing::info!(mode = %next, "scope mode changed");
        Ok(next)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/scope.rs"]
mod tests;
