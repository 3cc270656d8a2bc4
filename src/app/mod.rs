//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Model, Tab};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::config::{StartTab, ThemeMode};

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    theme: ThemeMode,
    start_tab: StartTab,
    mouse_enabled: bool,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    /// Create a new application with the default light theme on the
    /// home tab.
    pub const fn new() -> Self {
        Self {
            theme: ThemeMode::Light,
            start_tab: StartTab::Home,
            mouse_enabled: true,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Set the initial theme mode.
    pub const fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    /// Set the tab shown at launch.
    pub const fn with_start_tab(mut self, tab: StartTab) -> Self {
        self.start_tab = tab;
        self
    }

    /// Enable or disable mouse capture.
    pub const fn with_mouse_enabled(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Set config paths to show in help.
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
