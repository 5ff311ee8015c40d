//! Per-user locations for logs, settings and workspace state.
//!
//! - macOS: ~/Library/Application Support/monoscope
//! - Linux: $XDG_DATA_HOME/monoscope or ~/.local/share/monoscope
//! - Windows: %APPDATA%\monoscope

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "monoscope";
const LOG_DIR: &str = "logs";
const WORKSPACE_STORAGE_DIR: &str = "workspaceStorage";
const STATE_FILE: &str = "state.json";
const SETTINGS_FILE: &str = "settings.json";
const WORKSPACE_SETTINGS_DIR: &str = ".monoscope";

fn get_app_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var("HOME").ok().map(|home| {
            PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_NAME)
        })
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            Some(PathBuf::from(xdg).join(APP_NAME))
        } else {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".local/share").join(APP_NAME))
        }
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

fn get_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            Some(PathBuf::from(xdg).join(APP_NAME))
        } else {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".config").join(APP_NAME))
        }
    }

    #[cfg(not(target_os = "linux"))]
    {
        get_app_data_dir()
    }
}

/// Stable directory name for a workspace root.
fn hash_path(path: &Path) -> String {
    let mut hasher = DefaultHasher::new();
    path.to_string_lossy().hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(LOG_DIR))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn get_user_settings_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(SETTINGS_FILE))
}

pub fn workspace_settings_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join(WORKSPACE_SETTINGS_DIR).join(SETTINGS_FILE)
}

/// `<app data>/workspaceStorage/<hash>/state.json`
pub fn get_workspace_state_path(workspace_root: &Path) -> Option<PathBuf> {
    get_app_data_dir().map(|dir| {
        dir.join(WORKSPACE_STORAGE_DIR)
            .join(hash_path(workspace_root))
            .join(STATE_FILE)
    })
}
