use std::io::stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Model, update};
use crate::config::ThemeMode;
use crate::content;

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or event polling
    /// encounters an I/O failure.
    pub fn run(&self) -> Result<()> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal \u{2014} vita requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = Model::new(content::PROFILE, (size.width, size.height));
        model.active_tab = self.start_tab.into();
        model.dark_mode = self.theme == ThemeMode::Dark;
        model.mouse_enabled = self.mouse_enabled;
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);

        if model.mouse_enabled {
            execute!(stdout(), EnableMouseCapture)?;
        }

        let result = Self::event_loop(&mut terminal, &mut model);

        // Restore terminal
        if model.mouse_enabled {
            let _ = execute!(stdout(), DisableMouseCapture);
        }
        ratatui::restore();

        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut frame_idx: u64 = 0;
        let mut needs_render = true;

        loop {
            // Idle between interactions; redraw immediately after one.
            let poll_ms = if needs_render { 0 } else { 250 };
            if event::poll(Duration::from_millis(poll_ms))? {
                if let Some(msg) = Self::handle_event(&event::read()?, model) {
                    tracing::debug!(frame = frame_idx, ?msg, "dispatch");
                    *model = update(std::mem::take(model), msg);
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                let mut drained = 0_u32;
                while event::poll(Duration::from_millis(0))? {
                    if let Some(msg) = Self::handle_event(&event::read()?, model) {
                        drained += 1;
                        *model = update(std::mem::take(model), msg);
                        needs_render = true;
                    }
                }
                if drained > 0 {
                    tracing::debug!(frame = frame_idx, drained, "event drain");
                }
            }

            if needs_render {
                frame_idx += 1;
                terminal.draw(|frame| Self::view(model, frame))?;
                tracing::trace!(
                    frame = frame_idx,
                    tab = ?model.active_tab,
                    dark = model.dark_mode,
                    "frame drawn"
                );
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}
