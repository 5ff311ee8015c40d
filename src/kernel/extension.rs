//! Activation wiring: commands, status affordance, focus listener.
//!
//! - `activate` builds the collaborators from a `HostContext`, renders the
//!   initial status and spawns the focus listener
//! - `execute` routes the two owned commands and ignores the rest
//! - `deactivate` aborts the listener and disposes the status item
//!
//! The listener holds a `Weak` handle, so dropping the extension ends it too.

use std::path::Path;
use std::sync::{Arc, Mutex, Weak};

use tokio::task::JoinHandle;

use super::picker::{OpenOutcome, PickerController};
use super::project::ProjectResolver;
use super::scope::{ScopeMode, ScopeState};
use super::services::ports::{ActiveEditorEvents, HostResult, WindowHost};
use super::services::HostContext;
use super::status::StatusIndicator;
use crate::core::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Open(OpenOutcome),
    ScopeChanged(ScopeMode),
    Ignored,
}

pub struct MonoScope {
    scope: ScopeState,
    resolver: ProjectResolver,
    picker: PickerController,
    window: Arc<dyn WindowHost>,
    status: StatusIndicator,
    listener: Mutex<Option<JoinHandle<()>>>,
}

impl MonoScope {
    /// Must be called from within a tokio runtime; the focus listener is
    /// spawned onto it.
    pub fn activate(host: HostContext) -> Arc<Self> {
        tracing::info!("MonoScope extension is now active");

        let scope = ScopeState::new(host.state.clone(), host.config.clone());
        let resolver = ProjectResolver::new(host.editor.clone(), host.workspace.clone());
        let picker = PickerController::new(
            resolver.clone(),
            host.workspace.clone(),
            host.window.clone(),
        );
        let status = StatusIndicator::create(host.window.as_ref());
        status.render(scope.mode(), None);

        let this = Arc::new(Self {
            scope,
            resolver,
            picker,
            window: host.window.clone(),
            status,
            listener: Mutex::new(None),
        });

        let events = host.editor.subscribe_active_editor();
        let handle = tokio::spawn(listen_active_editor(Arc::downgrade(&this), events));
        if let Ok(mut listener) = this.listener.lock() {
            *listener = Some(handle);
        }

        this
    }

    pub async fn execute(&self, command: &Command) -> HostResult<CommandOutcome> {
        match command {
            Command::Open => self.open().await.map(CommandOutcome::Open),
            Command::ToggleScope => self.toggle_scope().await.map(CommandOutcome::ScopeChanged),
            Command::Custom(name) => {
                tracing::debug!(command = %name, "ignoring unknown command");
                Ok(CommandOutcome::Ignored)
            }
        }
    }

    pub async fn open(&self) -> HostResult<OpenOutcome> {
        self.picker.open(&self.scope).await
    }

    pub async fn toggle_scope(&self) -> HostResult<ScopeMode> {
        let mode = self.scope.toggle_mode().await?;
        self.status.render(mode, None);
        self.window
            .show_information_message(&format!("Quick Open scope changed to: {mode}"));
        Ok(mode)
    }

    pub fn mode(&self) -> ScopeMode {
        self.scope.mode()
    }

    /// Re-renders the status affordance for the newly focused document.
    pub fn handle_active_editor_changed(&self, path: Option<&Path>) {
        let Some(path) = path else {
            return;
        };

        let mode = self.scope.mode();
        if mode == ScopeMode::Workspace {
            self.status.render(mode, None);
            return;
        }

        match self.resolver.find_project_root(path) {
            Some(root) => {
                let name = self.resolver.project_name(&root);
                self.status.render(mode, Some(&name));
            }
            None => self.status.render(mode, None),
        }
    }

    /// Stops the focus listener and disposes the status affordance. Safe to
    /// call more than once.
    pub fn deactivate(&self) {
        let handle = match self.listener.lock() {
            Ok(mut listener) => listener.take(),
            Err(_) => None,
        };
        if let Some(handle) = handle {
            handle.abort();
            self.status.dispose();
            tracing::info!("MonoScope extension deactivated");
        }
    }
}

async fn listen_active_editor(this: Weak<MonoScope>, mut events: ActiveEditorEvents) {
    while let Some(path) = events.recv().await {
        let Some(extension) = this.upgrade() else {
            break;
        };
        extension.handle_active_editor_changed(path.as_deref());
    }
}
