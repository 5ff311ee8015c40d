//! Line-oriented terminal window.
//!
//! - Quick pick: numbered list on stdout, one line of input per round
//!   (number picks, text filters, empty line or EOF dismisses)
//! - Documents open in `$VISUAL` / `$EDITOR`, else the path is printed
//! - Notices and the status line go to stderr

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use async_trait::async_trait;
use crossterm::style::Stylize;
use regex::Regex;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use super::workspace::LocalWorkspace;
use crate::core::Command;
use crate::kernel::picker::NODE_MODULES_EXCLUDE;
use crate::kernel::project::{project_name, to_slash};
use crate::kernel::services::ports::{
    CandidateFile, HostError, HostResult, PickerItem, QuickPickOptions, StatusItem, WindowHost,
    WorkspaceHost,
};

/// Drops codicon markers such as `$(globe) `; terminals cannot draw them.
pub fn strip_icons(text: &str) -> String {
    static ICON: OnceLock<Option<Regex>> = OnceLock::new();
    match ICON.get_or_init(|| Regex::new(r"\$\([a-z0-9-]+\)\s*").ok()) {
        Some(re) => re.replace_all(text, "").into_owned(),
        None => text.to_string(),
    }
}

pub struct TerminalWindow {
    workspace: Arc<LocalWorkspace>,
    input: tokio::sync::Mutex<Lines<BufReader<Stdin>>>,
    editor_command: Option<String>,
}

impl TerminalWindow {
    pub fn new(workspace: Arc<LocalWorkspace>) -> Self {
        let editor_command = std::env::var("VISUAL")
            .or_else(|_| std::env::var("EDITOR"))
            .ok()
            .filter(|cmd| !cmd.trim().is_empty());
        Self {
            workspace,
            input: tokio::sync::Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
            editor_command,
        }
    }

    async fn read_line(&self) -> HostResult<Option<String>> {
        let mut input = self.input.lock().await;
        Ok(input.next_line().await?)
    }

    fn workspace_candidate(&self, file: &Path) -> CandidateFile {
        let root = self.workspace.workspace_folder_for(file);
        let relative_path = root
            .as_deref()
            .and_then(|root| file.strip_prefix(root).ok())
            .map(to_slash)
            .unwrap_or_else(|| file.to_string_lossy().into_owned());
        CandidateFile {
            name: file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            relative_path,
            project: root.as_deref().map(project_name).unwrap_or_default(),
        }
    }

    fn render_items(items: &[PickerItem], visible: &[usize], options: &QuickPickOptions) {
        println!("{}", strip_icons(&options.placeholder).bold());
        let mut number = 0;
        for &index in visible {
            let item = &items[index];
            if item.is_separator() {
                println!("{}", "  ────────".dim());
                continue;
            }
            number += 1;
            let mut line = format!("{:>4}  {}", number, strip_icons(item.label()));
            if let Some(description) = item.description() {
                line.push_str(&format!("  {}", description.dim()));
            }
            if let Some(detail) = item.detail() {
                line.push_str(&format!("  {}", format!("[{detail}]").cyan()));
            }
            println!("{line}");
        }
    }
}

/// Items shown for `query`: separators only appear when unfiltered.
fn visible_items(items: &[PickerItem], query: &str, options: &QuickPickOptions) -> Vec<usize> {
    let query = query.trim();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| {
            if item.is_separator() {
                query.is_empty()
            } else {
                item.matches(query, options)
            }
        })
        .map(|(i, _)| i)
        .collect()
}

/// Maps a 1-based number to the item it labels, skipping separators.
fn pick_numbered(items: &[PickerItem], visible: &[usize], number: usize) -> Option<usize> {
    visible
        .iter()
        .copied()
        .filter(|&i| !items[i].is_separator())
        .nth(number.checked_sub(1)?)
}

#[async_trait]
impl WindowHost for TerminalWindow {
    async fn show_quick_pick(
        &self,
        items: &[PickerItem],
        options: &QuickPickOptions,
    ) -> HostResult<Option<usize>> {
        let mut query = String::new();
        loop {
            let visible = visible_items(items, &query, options);
            Self::render_items(items, &visible, options);
            print!("{} ", ">".green());
            std::io::Write::flush(&mut std::io::stdout())?;

            let Some(line) = self.read_line().await? else {
                return Ok(None);
            };
            let line = line.trim();
            if line.is_empty() {
                return Ok(None);
            }
            if let Ok(number) = line.parse::<usize>() {
                if let Some(index) = pick_numbered(items, &visible, number) {
                    return Ok(Some(index));
                }
                eprintln!("{}", format!("No item numbered {number}").yellow());
                continue;
            }
            query = line.to_string();
        }
    }

    async fn open_document(&self, path: &Path) -> HostResult<()> {
        let Some(command) = &self.editor_command else {
            println!("{}", path.display());
            return Ok(());
        };

        let mut parts = command.split_whitespace();
        let program = parts.next().ok_or(HostError::Unavailable("editor command"))?;
        let status = tokio::process::Command::new(program)
            .args(parts)
            .arg(path)
            .status()
            .await?;
        if !status.success() {
            tracing::warn!(editor = %program, %status, "editor exited with failure");
        }
        Ok(())
    }

    fn show_information_message(&self, message: &str) {
        eprintln!("{} {}", "info".blue().bold(), message);
    }

    fn create_status_item(&self, command: Command) -> Box<dyn StatusItem> {
        Box::new(TerminalStatusItem::new(command))
    }

    async fn quick_open(&self) -> HostResult<()> {
        let files = self
            .workspace
            .find_files("**/*", Some(NODE_MODULES_EXCLUDE))
            .await?;
        if files.is_empty() {
            self.show_information_message("No files found in workspace");
            return Ok(());
        }

        let items: Vec<PickerItem> = files
            .iter()
            .map(|file| PickerItem::File(self.workspace_candidate(file)))
            .collect();
        let options = QuickPickOptions {
            placeholder: format!("Search files by name ({} files)", files.len()),
            match_on_description: true,
            match_on_detail: false,
        };

        let Some(index) = self.show_quick_pick(&items, &options).await? else {
            return Ok(());
        };
        match files.get(index) {
            Some(path) => self.open_document(path).await,
            None => Ok(()),
        }
    }
}

#[derive(Debug, Default, Clone)]
struct StatusLine {
    text: String,
    tooltip: String,
    visible: bool,
}

/// Status line on stderr.
///
/// A one-shot CLI only lives for a single command, so the line is written
/// once, on dispose, with whatever the last render left behind.
pub struct TerminalStatusItem {
    command: Command,
    line: Mutex<StatusLine>,
}

impl TerminalStatusItem {
    pub fn new(command: Command) -> Self {
        Self {
            command,
            line: Mutex::new(StatusLine::default()),
        }
    }

    /// How to trigger the bound command from a shell.
    fn hint(&self) -> String {
        format!("{}: {}", self.command.title(), self.command)
    }

    fn print(&self, line: &StatusLine) {
        if !line.visible || line.text.is_empty() {
            return;
        }
        let tooltip = line.tooltip.lines().next().unwrap_or_default();
        eprintln!(
            "{} {}  {}",
            format!(" {} ", strip_icons(&line.text)).reverse(),
            tooltip.dim(),
            format!("({})", self.hint()).dim()
        );
    }

    fn update(&self, f: impl FnOnce(&mut StatusLine)) {
        if let Ok(mut line) = self.line.lock() {
            f(&mut *line);
        }
    }
}

impl StatusItem for TerminalStatusItem {
    fn set_text(&self, text: &str) {
        self.update(|line| line.text = text.to_string());
    }

    fn set_tooltip(&self, tooltip: &str) {
        self.update(|line| line.tooltip = tooltip.to_string());
    }

    fn show(&self) {
        self.update(|line| line.visible = true);
    }

    fn dispose(&self) {
        let last = match self.line.lock() {
            Ok(mut line) => std::mem::take(&mut *line),
            Err(_) => return,
        };
        self.print(&last);
    }
}

/// Path a CLI argument refers to, absolute and with symlinks resolved when
/// it exists.
pub fn absolute_path(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    std::fs::canonicalize(&joined).unwrap_or(joined)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/terminal.rs"]
mod tests;
