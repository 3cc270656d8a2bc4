use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(Color::Indexed(245));

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::styled("Tabs", section_style));
    lines.push(Line::raw("  1 / 2 / 3          Home / Research / Teaching"));
    lines.push(Line::raw("  Tab, Right, l      Next tab"));
    lines.push(Line::raw("  BackTab, Left, h   Previous tab"));
    lines.push(Line::raw("  Mouse click        Select tab"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Theme", section_style));
    lines.push(Line::raw("  d                  Toggle dark mode"));
    lines.push(Line::raw("  Click sun/moon     Toggle dark mode"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Other", section_style));
    lines.push(Line::raw("  q / Esc / Ctrl-c   Quit"));
    lines.push(Line::raw("  ? / F1             Toggle help"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Config", section_style));
    lines.push(Line::raw(format!("  Global: {global_cfg}")));
    lines.push(Line::raw(format!("  Local override: {local_cfg}")));
    lines.push(Line::raw(""));
    lines.push(Line::styled("any key closes", dim_style));

    let popup_width = area.width.saturating_sub(16).max(44);
    // Border + uniform padding add 4 rows around the content.
    #[allow(clippy::cast_possible_truncation)]
    let popup_height = (lines.len() as u16).saturating_add(4);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
