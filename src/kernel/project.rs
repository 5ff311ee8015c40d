//! Project root resolution for Nx-style monorepos.
//!
//! A project is either a directory holding a `project.json` marker or a
//! direct child of an `apps` / `libs` directory. The marker always wins.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use super::services::ports::{EditorHost, WorkspaceHost};

pub const PROJECT_MARKER: &str = "project.json";
pub const PROJECT_CONTAINERS: &[&str] = &["apps", "libs"];

#[derive(Clone)]
pub struct ProjectResolver {
    editor: Arc<dyn EditorHost>,
    workspace: Arc<dyn WorkspaceHost>,
}

impl ProjectResolver {
    pub fn new(editor: Arc<dyn EditorHost>, workspace: Arc<dyn WorkspaceHost>) -> Self {
        Self { editor, workspace }
    }

    pub fn resolve_active_file(&self) -> Option<PathBuf> {
        self.editor.active_file_path()
    }

    /// Walks up from the file's directory until a project root is found.
    ///
    /// Stops at the filesystem root or once the walk leaves the workspace
    /// folder that owns `file_path`. Containment is checked per path
    /// component, never as a raw string prefix.
    pub fn find_project_root(&self, file_path: &Path) -> Option<PathBuf> {
        if file_path.as_os_str().is_empty() {
            return None;
        }
        let workspace_root = self.workspace.workspace_folder_for(file_path)?;

        let mut current = file_path.parent()?;
        while current.starts_with(&workspace_root) {
            if self.workspace.file_exists(&current.join(PROJECT_MARKER)) {
                return Some(current.to_path_buf());
            }

            let parent = current.parent()?;
            if is_project_container(parent) {
                return Some(current.to_path_buf());
            }
            current = parent;
        }

        None
    }

    /// Root the project lives in: its owning folder, else the primary one.
    pub fn workspace_root_for(&self, project_root: &Path) -> Option<PathBuf> {
        self.workspace
            .workspace_folder_for(project_root)
            .or_else(|| self.workspace.workspace_folders().into_iter().next())
    }

    /// Workspace-relative path of `project_root`, always with `/` separators.
    ///
    /// A project that is the workspace root itself has no relative path, so
    /// callers treat it like any other unscoped file.
    pub fn relative_project_path(&self, project_root: &Path) -> Option<String> {
        let workspace_root = self.workspace_root_for(project_root)?;
        let relative = project_root.strip_prefix(&workspace_root).ok()?;
        Some(to_slash(relative)).filter(|path| !path.is_empty())
    }

    pub fn project_name(&self, project_root: &Path) -> String {
        project_name(project_root)
    }
}

pub fn project_name(project_root: &Path) -> String {
    project_root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| project_root.to_string_lossy().into_owned())
}

fn is_project_container(dir: &Path) -> bool {
    dir.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| PROJECT_CONTAINERS.contains(&name))
}

/// Joins normal components with `/`.
///
/// Backslashes inside a component are rewritten too, so the result never
/// carries one regardless of platform.
pub fn to_slash(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        let part = match component {
            Component::Normal(part) => part.to_string_lossy(),
            Component::ParentDir => "..".into(),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => continue,
        };
        if !out.is_empty() {
            out.push('/');
        }
        out.push_str(&part.replace('\\', "/"));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/project.rs"]
mod tests;
