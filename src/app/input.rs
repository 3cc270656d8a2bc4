use crossterm::event::{Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};

use crate::app::{App, Message, Model};

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: crossterm::event::KeyEvent, model: &Model) -> Option<Message> {
        // Any key closes the help overlay.
        if model.help_visible {
            return Some(Message::HideHelp);
        }

        match key.code {
            // Tabs
            KeyCode::Char('1') => Some(Message::SelectTab(crate::app::Tab::Home)),
            KeyCode::Char('2') => Some(Message::SelectTab(crate::app::Tab::Research)),
            KeyCode::Char('3') => Some(Message::SelectTab(crate::app::Tab::Teaching)),
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Message::NextTab),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(Message::PrevTab),

            // Theme
            KeyCode::Char('d') => Some(Message::ToggleTheme),

            // Help
            KeyCode::Char('?') | KeyCode::F(1) => Some(Message::ToggleHelp),

            // Quit
            KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::Quit)
            }

            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            if matches!(mouse.kind, MouseEventKind::Up(MouseButton::Left)) {
                return Some(Message::HideHelp);
            }
            return None;
        }

        if !matches!(mouse.kind, MouseEventKind::Up(MouseButton::Left)) {
            return None;
        }

        // Hit-boxes come from the same layout functions the renderer
        // uses, so click targets always match what is on screen.
        let area = Rect::new(0, 0, model.width, model.height);
        let click = Position::new(mouse.column, mouse.row);

        for (tab, hitbox) in crate::ui::tab_hitboxes(area) {
            if hitbox.contains(click) {
                return Some(Message::SelectTab(tab));
            }
        }
        if crate::ui::theme_toggle_rect(area).contains(click) {
            return Some(Message::ToggleTheme);
        }

        None
    }

    pub(super) fn view(model: &Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}
