//! Service adapters: local filesystem and terminal implementations of the
//! host ports.

pub mod paths;
pub mod settings;
pub mod state;
#[cfg(feature = "cli")]
pub mod terminal;
pub mod workspace;

pub use paths::{
    ensure_log_dir, get_log_dir, get_user_settings_path, get_workspace_state_path,
    workspace_settings_path,
};
pub use settings::LayeredSettings;
pub use state::{JsonMemento, MemoryMemento};
#[cfg(feature = "cli")]
pub use terminal::{TerminalStatusItem, TerminalWindow};
pub use workspace::LocalWorkspace;
