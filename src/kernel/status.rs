//! Status-line affordance.
//!
//! - Project mode: `$(search) Project`, tooltip names the focused project
//!   when one resolves
//! - Workspace mode: `$(globe) Workspace`, never resolves a project
//! - One item per activation, disposed on deactivate

use super::scope::ScopeMode;
use super::services::ports::{StatusItem, WindowHost};
use crate::core::Command;

pub const PROJECT_TEXT: &str = "$(search) Project";
pub const WORKSPACE_TEXT: &str = "$(globe) Workspace";
pub const WORKSPACE_TOOLTIP: &str =
    "Quick Open shows entire workspace\nClick to switch to project mode";
const CURRENT_PROJECT_TOOLTIP: &str =
    "MonoScope: Current project\nClick to switch to workspace mode";

/// Status-line affordance reflecting the scope mode.
///
/// Built once at activation and lent to whoever needs to re-render it.
/// Activating the affordance always runs `Command::ToggleScope`.
pub struct StatusIndicator {
    item: Box<dyn StatusItem>,
}

impl StatusIndicator {
    pub fn create(window: &dyn WindowHost) -> Self {
        let item = window.create_status_item(Command::ToggleScope);
        item.show();
        Self { item }
    }

    pub fn render(&self, mode: ScopeMode, project_name: Option<&str>) {
        let (text, tooltip) = status_content(mode, project_name);
        self.item.set_text(text);
        self.item.set_tooltip(&tooltip);
    }

    pub fn dispose(&self) {
        self.item.dispose();
    }
}

pub fn status_content(mode: ScopeMode, project_name: Option<&str>) -> (&'static str, String) {
    match mode {
        ScopeMode::Project => {
            let tooltip = match project_name {
                Some(name) => format!("MonoScope: {name}\nClick to switch to workspace mode"),
                None => CURRENT_PROJECT_TOOLTIP.to_string(),
            };
            (PROJECT_TEXT, tooltip)
        }
        ScopeMode::Workspace => (WORKSPACE_TEXT, WORKSPACE_TOOLTIP.to_string()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/status.rs"]
mod tests;
