//! Headless core: scope state, project resolution, picker flow, status.

pub mod extension;
pub mod picker;
pub mod project;
pub mod scope;
pub mod services;
pub mod status;

pub use extension::{CommandOutcome, MonoScope};
pub use picker::{FallbackReason, OpenOutcome, PickerController, ProjectScope};
pub use project::{ProjectResolver, PROJECT_MARKER};
pub use scope::{ScopeMode, ScopeState};
pub use status::StatusIndicator;
