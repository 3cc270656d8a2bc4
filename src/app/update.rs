use crate::app::Model;
use crate::app::model::Tab;

/// All possible events and actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Tabs
    /// Activate a specific tab (idempotent when already active)
    SelectTab(Tab),
    /// Activate the tab to the right, wrapping
    NextTab,
    /// Activate the tab to the left, wrapping
    PrevTab,

    // Theme
    /// Flip the dark-mode flag
    ToggleTheme,

    // Help
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects should occur in this function.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::SelectTab(tab) => {
            model.active_tab = tab;
        }
        Message::NextTab => {
            model.active_tab = model.active_tab.next();
        }
        Message::PrevTab => {
            model.active_tab = model.active_tab.prev();
        }
        Message::ToggleTheme => {
            model.dark_mode = !model.dark_mode;
        }
        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
        }
        Message::HideHelp => {
            model.help_visible = false;
        }
        Message::Resize(width, height) => {
            model.width = width;
            model.height = height;
        }
        Message::Redraw => {}
        Message::Quit => {
            model.should_quit = true;
        }
    }

    model
}
