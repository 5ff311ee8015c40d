use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::error::HostResult;

#[async_trait]
pub trait WorkspaceHost: Send + Sync {
    /// Open workspace folders, first one is the primary root.
    fn workspace_folders(&self) -> Vec<PathBuf>;

    /// Folder that owns `path`, if any.
    ///
    /// Containment is component-wise, so `/ws/foobar` is not inside `/ws/foo`.
    /// Nested folders resolve to the deepest match.
    fn workspace_folder_for(&self, path: &Path) -> Option<PathBuf> {
        self.workspace_folders()
            .into_iter()
            .filter(|root| path.starts_with(root))
            .max_by_key(|root| root.components().count())
    }

    fn file_exists(&self, path: &Path) -> bool;

    /// Files whose workspace-relative path matches `include` and not `exclude`.
    ///
    /// Patterns use forward slashes; results are absolute paths in enumeration
    /// order.
    async fn find_files(&self, include: &str, exclude: Option<&str>) -> HostResult<Vec<PathBuf>>;
}
