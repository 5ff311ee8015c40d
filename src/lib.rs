//! monoscope - quick open scoped to the Nx-style project of the active file.
//!
//! Modules:
//! - core: command vocabulary exposed to the host
//! - kernel: scope state, project resolver, picker controller, status indicator
//! - kernel::services: host ports and local adapters

pub mod core;
pub mod kernel;

pub use crate::core::Command;
pub use kernel::services::HostContext;
pub use kernel::{MonoScope, OpenOutcome, ScopeMode};
