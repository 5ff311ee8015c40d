//! Local workspace: folders on disk, focused file, glob enumeration.
//!
//! - Walks with the `ignore` crate: dotfiles are listed, `.git` and gitignored
//!   paths are not
//! - Starts the walk at the glob's literal base, e.g. `apps/app1` for
//!   `apps/app1/**/*`
//! - Runs the walk on the blocking pool
//! - Nested workspace folders never list a file twice

use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use globset::{GlobBuilder, GlobMatcher};
use ignore::WalkBuilder;
use rustc_hash::FxHashSet;
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::kernel::project::to_slash;
use crate::kernel::services::ports::{ActiveEditorEvents, EditorHost, HostResult, WorkspaceHost};

const GLOB_META: &[char] = &['*', '?', '[', ']', '{', '}', '\\'];
const GIT_DIR: &str = ".git";

pub struct LocalWorkspace {
    folders: Vec<PathBuf>,
    active: RwLock<Option<PathBuf>>,
    subscribers: Mutex<Vec<UnboundedSender<Option<PathBuf>>>>,
}

impl LocalWorkspace {
    pub fn new(folders: Vec<PathBuf>) -> Self {
        Self {
            folders,
            active: RwLock::new(None),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Changes focus and notifies every live subscriber.
    pub fn set_active_file(&self, path: Option<PathBuf>) {
        if let Ok(mut active) = self.active.write() {
            *active = path.clone();
        }
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.retain(|tx| tx.send(path.clone()).is_ok());
        }
    }
}

#[async_trait]
impl WorkspaceHost for LocalWorkspace {
    fn workspace_folders(&self) -> Vec<PathBuf> {
        self.folders.clone()
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    async fn find_files(&self, include: &str, exclude: Option<&str>) -> HostResult<Vec<PathBuf>> {
        let base = glob_base(include).to_string();
        let include = compile_glob(include)?;
        let exclude = exclude.map(compile_glob).transpose()?;
        let folders = self.folders.clone();

        let files = tokio::task::spawn_blocking(move || {
            let mut files = Vec::new();
            let mut seen = FxHashSet::default();
            for root in &folders {
                walk_matching(root, &base, &include, exclude.as_ref(), &mut files);
            }
            files.retain(|path| seen.insert(path.clone()));
            files
        })
        .await?;

        tracing::debug!(count = files.len(), "find_files finished");
        Ok(files)
    }
}

impl EditorHost for LocalWorkspace {
    fn active_file_path(&self) -> Option<PathBuf> {
        self.active.read().ok()?.clone()
    }

    fn subscribe_active_editor(&self) -> ActiveEditorEvents {
        let (tx, rx) = mpsc::unbounded_channel();
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.push(tx);
        }
        rx
    }
}

fn compile_glob(pattern: &str) -> HostResult<GlobMatcher> {
    Ok(GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()?
        .compile_matcher())
}

/// Leading directories of `pattern` that contain no glob syntax.
///
/// The final segment is never part of the base, it names files.
pub fn glob_base(pattern: &str) -> &str {
    let mut end = 0;
    let mut offset = 0;
    let segments: Vec<&str> = pattern.split('/').collect();
    for segment in &segments[..segments.len().saturating_sub(1)] {
        if segment.is_empty() || segment.contains(GLOB_META) {
            break;
        }
        offset += segment.len();
        end = offset;
        offset += 1;
    }
    &pattern[..end]
}

fn walk_matching(
    root: &Path,
    base: &str,
    include: &GlobMatcher,
    exclude: Option<&GlobMatcher>,
    out: &mut Vec<PathBuf>,
) {
    let start = if base.is_empty() {
        root.to_path_buf()
    } else {
        root.join(base)
    };
    if !start.is_dir() {
        return;
    }

    let walker = WalkBuilder::new(&start)
        .hidden(false)
        .filter_entry(|entry| entry.file_name() != GIT_DIR)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        let relative = to_slash(relative);
        if !include.is_match(&relative) {
            continue;
        }
        if exclude.is_some_and(|e| e.is_match(&relative)) {
            continue;
        }
        out.push(path.to_path_buf());
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/workspace.rs"]
mod tests;
