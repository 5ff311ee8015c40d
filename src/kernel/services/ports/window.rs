//! Window port: quick pick, documents, notices, status items.
//!
//! The kernel never draws anything itself; it hands items and options to the
//! window and gets back an index.

use std::path::Path;

use async_trait::async_trait;

use super::error::HostResult;
use super::picker::{PickerItem, QuickPickOptions};
use crate::core::Command;

/// A persistent status-line affordance owned by whoever created it.
pub trait StatusItem: Send + Sync {
    fn set_text(&self, text: &str);
    fn set_tooltip(&self, tooltip: &str);
    fn show(&self);
    fn dispose(&self);
}

#[async_trait]
pub trait WindowHost: Send + Sync {
    /// Resolves to the index of the picked item, `None` when dismissed.
    async fn show_quick_pick(
        &self,
        items: &[PickerItem],
        options: &QuickPickOptions,
    ) -> HostResult<Option<usize>>;

    /// Opens `path` as a document and reveals it in the active pane.
    async fn open_document(&self, path: &Path) -> HostResult<()>;

    /// Transient, non-blocking notice.
    fn show_information_message(&self, message: &str);

    /// Status affordance that triggers `command` when activated.
    fn create_status_item(&self, command: Command) -> Box<dyn StatusItem>;

    /// The host's default, unscoped file search.
    async fn quick_open(&self) -> HostResult<()>;
}
