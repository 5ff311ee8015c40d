pub const SHOW_WORKSPACE_LABEL: &str = "$(globe) Show Entire Workspace";
pub const SHOW_WORKSPACE_DESCRIPTION: &str = "Switch to workspace-wide file search";

/// A file under the resolved project, produced fresh per open-action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub name: String,
    /// Workspace-relative, forward slashes.
    pub relative_path: String,
    pub project: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerItem {
    /// Escape hatch to the unscoped search. Always first, never filtered out.
    ShowWorkspace,
    Separator,
    File(CandidateFile),
}

impl PickerItem {
    pub fn label(&self) -> &str {
        match self {
            PickerItem::ShowWorkspace => SHOW_WORKSPACE_LABEL,
            PickerItem::Separator => "",
            PickerItem::File(file) => &file.name,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            PickerItem::ShowWorkspace => Some(SHOW_WORKSPACE_DESCRIPTION),
            PickerItem::Separator => None,
            PickerItem::File(file) => Some(&file.relative_path),
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            PickerItem::File(file) => Some(&file.project),
            _ => None,
        }
    }

    pub fn always_show(&self) -> bool {
        matches!(self, PickerItem::ShowWorkspace)
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, PickerItem::Separator)
    }

    /// Whether a filter query hits this item under `options`.
    ///
    /// Case-insensitive substring match. Separators never match, the sentinel
    /// always does.
    pub fn matches(&self, query: &str, options: &QuickPickOptions) -> bool {
        if self.is_separator() {
            return false;
        }
        let query = query.trim();
        if query.is_empty() || self.always_show() {
            return true;
        }

        let query_lc = query.to_lowercase();
        let hit = |text: Option<&str>| text.is_some_and(|t| t.to_lowercase().contains(&query_lc));

        hit(Some(self.label()))
            || (options.match_on_description && hit(self.description()))
            || (options.match_on_detail && hit(self.detail()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickPickOptions {
    pub placeholder: String,
    pub match_on_description: bool,
    pub match_on_detail: bool,
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/picker.rs"]
mod tests;
