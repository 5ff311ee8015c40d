//! Project-scoped quick open.
//!
//! Every invocation starts fresh: mode check, active file, project root,
//! relative path, enumeration. Any missing piece short-circuits to the host's
//! unscoped search, in that order.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::project::{to_slash, ProjectResolver};
use super::scope::{ScopeMode, ScopeState};
use super::services::ports::{
    CandidateFile, HostResult, PickerItem, QuickPickOptions, WindowHost, WorkspaceHost,
};

pub const NODE_MODULES_EXCLUDE: &str = "**/node_modules/**";
pub const NO_FILES_MESSAGE: &str = "No files found in current project";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    WorkspaceMode,
    NoActiveFile,
    NoProjectRoot,
    NoRelativePath,
    EnumerationFailed,
    WorkspaceRequested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    FullSearch(FallbackReason),
    NoFiles { project: String },
    Cancelled,
    Opened(PathBuf),
}

/// A resolved project, ready to enumerate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectScope {
    pub workspace_root: PathBuf,
    pub root: PathBuf,
    /// Never empty; a project at the workspace root falls back instead.
    pub relative_path: String,
    pub name: String,
}

impl ProjectScope {
    pub fn include_glob(&self) -> String {
        format!("{}/**/*", self.relative_path)
    }
}

#[derive(Clone)]
pub struct PickerController {
    resolver: ProjectResolver,
    workspace: Arc<dyn WorkspaceHost>,
    window: Arc<dyn WindowHost>,
}

impl PickerController {
    pub fn new(
        resolver: ProjectResolver,
        workspace: Arc<dyn WorkspaceHost>,
        window: Arc<dyn WindowHost>,
    ) -> Self {
        Self {
            resolver,
            workspace,
            window,
        }
    }

    pub async fn open(&self, scope: &ScopeState) -> HostResult<OpenOutcome> {
        if scope.mode() == ScopeMode::Workspace {
            return self.full_search(FallbackReason::WorkspaceMode).await;
        }

        let project = match self.resolve_scope() {
            Ok(project) => project,
            Err(reason) => return self.full_search(reason).await,
        };

        let files = match self
            .workspace
            .find_files(&project.include_glob(), Some(NODE_MODULES_EXCLUDE))
            .await
        {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!(error = %e, project = %project.name, "project enumeration failed");
                return self.full_search(FallbackReason::EnumerationFailed).await;
            }
        };

        if files.is_empty() {
            self.window.show_information_message(NO_FILES_MESSAGE);
            return Ok(OpenOutcome::NoFiles {
                project: project.name,
            });
        }

        let (items, options) = build_items(&project, &files);
        let Some(index) = self.window.show_quick_pick(&items, &options).await? else {
            tracing::debug!(project = %project.name, "quick pick dismissed");
            return Ok(OpenOutcome::Cancelled);
        };

        match items.get(index) {
            Some(PickerItem::ShowWorkspace) => {
                self.full_search(FallbackReason::WorkspaceRequested).await
            }
            Some(PickerItem::File(file)) => {
                let path = project.workspace_root.join(&file.relative_path);
                self.window.open_document(&path).await?;
                tracing::info!(path = %path.display(), project = %project.name, "opened");
                Ok(OpenOutcome::Opened(path))
            }
            Some(PickerItem::Separator) | None => Ok(OpenOutcome::Cancelled),
        }
    }

    /// Active file -> project root -> relative path, stopping at the first gap.
    pub fn resolve_scope(&self) -> Result<ProjectScope, FallbackReason> {
        let active = self
            .resolver
            .resolve_active_file()
            .ok_or(FallbackReason::NoActiveFile)?;
        let root = self
            .resolver
            .find_project_root(&active)
            .ok_or(FallbackReason::NoProjectRoot)?;
        let relative_path = self
            .resolver
            .relative_project_path(&root)
            .ok_or(FallbackReason::NoRelativePath)?;
        let workspace_root = self
            .resolver
            .workspace_root_for(&root)
            .ok_or(FallbackReason::NoRelativePath)?;

        Ok(ProjectScope {
            name: self.resolver.project_name(&root),
            workspace_root,
            root,
            relative_path,
        })
    }

    async fn full_search(&self, reason: FallbackReason) -> HostResult<OpenOutcome> {
        tracing::debug!(?reason, "delegating to workspace quick open");
        self.window.quick_open().await?;
        Ok(OpenOutcome::FullSearch(reason))
    }
}

/// Sentinel, separator, then one item per file in enumeration order.
pub fn build_items(
    project: &ProjectScope,
    files: &[PathBuf],
) -> (Vec<PickerItem>, QuickPickOptions) {
    let mut items = Vec::with_capacity(files.len() + 2);
    items.push(PickerItem::ShowWorkspace);
    items.push(PickerItem::Separator);
    for file in files {
        items.push(PickerItem::File(candidate(project, file)));
    }

    let options = QuickPickOptions {
        placeholder: format!("Files in {} ({} files)", project.name, files.len()),
        match_on_description: true,
        match_on_detail: true,
    };
    (items, options)
}

fn candidate(project: &ProjectScope, file: &Path) -> CandidateFile {
    let name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let relative_path = match file.strip_prefix(&project.workspace_root) {
        Ok(relative) => to_slash(relative),
        Err(_) => file.to_string_lossy().into_owned(),
    };
    CandidateFile {
        name,
        relative_path,
        project: project.name.clone(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/picker.rs"]
mod tests;
