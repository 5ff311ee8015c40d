//! Service ports: host contracts (traits + data types).

pub mod editor;
pub mod error;
pub mod picker;
pub mod storage;
pub mod window;
pub mod workspace;

pub use editor::{ActiveEditorEvents, EditorHost};
pub use error::{HostError, HostResult};
pub use picker::{
    CandidateFile, PickerItem, QuickPickOptions, SHOW_WORKSPACE_DESCRIPTION, SHOW_WORKSPACE_LABEL,
};
pub use storage::{Configuration, Memento};
pub use window::{StatusItem, WindowHost};
pub use workspace::WorkspaceHost;
