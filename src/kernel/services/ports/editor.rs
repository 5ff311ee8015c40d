//! Editor port: the focused document and its change stream.

use std::path::PathBuf;

use tokio::sync::mpsc::UnboundedReceiver;

/// Focus changes pushed by the host. `None` means no editor has focus.
pub type ActiveEditorEvents = UnboundedReceiver<Option<PathBuf>>;

pub trait EditorHost: Send + Sync {
    /// Absolute path backing the focused editable document.
    fn active_file_path(&self) -> Option<PathBuf>;

    /// Each call returns an independent stream of focus changes.
    fn subscribe_active_editor(&self) -> ActiveEditorEvents;
}
