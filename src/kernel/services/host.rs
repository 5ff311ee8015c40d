use std::sync::Arc;

use super::ports::{Configuration, EditorHost, Memento, WindowHost, WorkspaceHost};

/// Everything the host lends us, bundled once at startup.
#[derive(Clone)]
pub struct HostContext {
    pub editor: Arc<dyn EditorHost>,
    pub workspace: Arc<dyn WorkspaceHost>,
    pub window: Arc<dyn WindowHost>,
    pub state: Arc<dyn Memento>,
    pub config: Arc<dyn Configuration>,
}

impl HostContext {
    pub fn new(
        editor: Arc<dyn EditorHost>,
        workspace: Arc<dyn WorkspaceHost>,
        window: Arc<dyn WindowHost>,
        state: Arc<dyn Memento>,
        config: Arc<dyn Configuration>,
    ) -> Self {
        Self {
            editor,
            workspace,
            window,
            state,
            config,
        }
    }
}
