use std::path::PathBuf;

use crate::config::StartTab;
use crate::content::{self, ProfileContent};
use crate::ui::style::Theme;

/// The three content panels. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Research,
    Teaching,
}

impl Tab {
    /// All tabs in header display order.
    pub const ALL: [Self; 3] = [Self::Home, Self::Research, Self::Teaching];

    /// Uppercase label shown in the tab selector.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::Research => "RESEARCH",
            Self::Teaching => "TEACHING",
        }
    }

    /// The tab to the right, wrapping.
    pub const fn next(self) -> Self {
        match self {
            Self::Home => Self::Research,
            Self::Research => Self::Teaching,
            Self::Teaching => Self::Home,
        }
    }

    /// The tab to the left, wrapping.
    pub const fn prev(self) -> Self {
        match self {
            Self::Home => Self::Teaching,
            Self::Research => Self::Home,
            Self::Teaching => Self::Research,
        }
    }
}

impl From<StartTab> for Tab {
    fn from(tab: StartTab) -> Self {
        match tab {
            StartTab::Home => Self::Home,
            StartTab::Research => Self::Research,
            StartTab::Teaching => Self::Teaching,
        }
    }
}

/// The complete application state.
///
/// All state lives here - no global or scattered state. The content
/// record is immutable for the session; the only mutable pieces are
/// the active tab and the dark-mode flag (plus overlay/quit flags and
/// the terminal size used for mouse hit-testing).
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// The static profile content
    pub content: ProfileContent,
    /// Currently selected tab
    pub active_tab: Tab,
    /// Whether dark mode is on
    pub dark_mode: bool,
    /// Whether the help overlay is visible
    pub help_visible: bool,
    /// Whether mouse capture is enabled
    pub mouse_enabled: bool,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
}

impl Model {
    /// Create a new model with default settings.
    pub fn new(content: ProfileContent, terminal_size: (u16, u16)) -> Self {
        Self {
            content,
            active_tab: Tab::Home,
            dark_mode: false,
            help_visible: false,
            mouse_enabled: true,
            should_quit: false,
            width: terminal_size.0,
            height: terminal_size.1,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// The style tokens for the current mode.
    pub fn theme(&self) -> Theme {
        Theme::of(self.dark_mode)
    }
}

// Implement Default for Model to allow std::mem::take
impl Default for Model {
    fn default() -> Self {
        Self::new(content::PROFILE, (80, 24))
    }
}
