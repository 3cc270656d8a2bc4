use super::*;
use crate::app::{Message, Model, Tab, update};
use crate::content::PROFILE;
use crate::ui::style::{MOON_GLYPH, SUN_GLYPH};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier};

const TEST_WIDTH: u16 = 100;
const TEST_HEIGHT: u16 = 40;

fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    Terminal::new(backend).unwrap()
}

fn create_test_model() -> Model {
    Model::new(PROFILE, (TEST_WIDTH, TEST_HEIGHT))
}

fn draw(model: &Model) -> Terminal<TestBackend> {
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(model, frame)).unwrap();
    terminal
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect()
}

/// Marker text unique to each panel.
const fn panel_marker(tab: Tab) -> &'static str {
    match tab {
        Tab::Home => "RECENT PRESENTATIONS",
        Tab::Research => "SELECTED PUBLICATIONS",
        Tab::Teaching => "TEACHING PHILOSOPHY",
    }
}

#[test]
fn test_exactly_one_panel_is_visible_per_tab() {
    for active in Tab::ALL {
        let mut model = create_test_model();
        model.active_tab = active;
        let content = buffer_text(&draw(&model));

        for tab in Tab::ALL {
            if tab == active {
                assert!(
                    content.contains(panel_marker(tab)),
                    "{:?} panel should be visible on its own tab",
                    tab
                );
            } else {
                assert!(
                    !content.contains(panel_marker(tab)),
                    "{:?} panel should be absent while {:?} is active",
                    tab,
                    active
                );
            }
        }
    }
}

#[test]
fn test_header_shows_name_and_all_tab_labels() {
    let content = buffer_text(&draw(&create_test_model()));
    assert!(content.contains("Baoyu (Brian) Dai"));
    for tab in Tab::ALL {
        assert!(content.contains(tab.label()));
    }
}

#[test]
fn test_home_panel_shows_bio_and_presentations() {
    let content = buffer_text(&draw(&create_test_model()));
    assert!(content.contains("ABOUT"));
    assert!(content.contains("I am a Ph.D. student"));
    assert!(content.contains("7th Meeting of the APMP"));
    assert!(content.contains("IV Unifesp Conference"));
}

#[test]
fn test_research_panel_shows_statement_and_both_publications() {
    let model = update(create_test_model(), Message::SelectTab(Tab::Research));
    let content = buffer_text(&draw(&model));

    assert!(content.contains("RESEARCH AGENDA"));
    assert!(content.contains("My research agenda currently"));
    assert!(content.contains("Rethinking the Reproductive"));
    assert!(content.contains("2024"));
    assert!(content.contains("A New Attempt Against Hirsch's"));
    assert!(content.contains("2022"));
    assert!(content.contains("Under Review"));
    assert!(content.contains("Dianoia, (IX), 32-41"));
}

#[test]
fn test_teaching_panel_shows_courses_with_roles_and_terms() {
    let model = update(create_test_model(), Message::SelectTab(Tab::Teaching));
    let content = buffer_text(&draw(&model));

    assert!(content.contains("COURSES"));
    assert!(content.contains("PHI 013"));
    assert!(content.contains("Minds, Brains, and Computers"));
    assert!(content.contains("PHILOS 211"));
    assert!(content.contains("Elementary Logic"));
    assert!(content.contains("Teaching Assistant"));
    assert!(content.contains("UC Davis, 2024\u{2013}2025"));
}

#[test]
fn test_lists_preserve_source_order() {
    let model = update(create_test_model(), Message::SelectTab(Tab::Research));
    let content = buffer_text(&draw(&model));

    let first = content.find("Rethinking the Reproductive").unwrap();
    let second = content.find("A New Attempt Against Hirsch's").unwrap();
    assert!(first < second);
}

#[test]
fn test_footer_shows_name_year_and_email() {
    let content = buffer_text(&draw(&create_test_model()));
    assert!(content.contains("2026"));
    assert!(content.contains("dbydai@ucdavis.edu"));
}

#[test]
fn test_toggle_glyph_tracks_mode() {
    let model = create_test_model();
    assert!(buffer_text(&draw(&model)).contains(MOON_GLYPH));

    let model = update(model, Message::ToggleTheme);
    let content = buffer_text(&draw(&model));
    assert!(content.contains(SUN_GLYPH));
    assert!(!content.contains(MOON_GLYPH));
}

#[test]
fn test_theme_toggle_flips_header_color_and_round_trips() {
    let header_pos = Position::new(PAGE_MARGIN, 0);

    let model = create_test_model();
    let terminal = draw(&model);
    let light_fg = terminal.backend().buffer().cell(header_pos).unwrap().fg;
    assert_eq!(light_fg, Color::Indexed(235));

    let model = update(model, Message::ToggleTheme);
    let terminal = draw(&model);
    let dark_fg = terminal.backend().buffer().cell(header_pos).unwrap().fg;
    assert_eq!(dark_fg, Color::White);
    assert_ne!(light_fg, dark_fg);

    let model = update(model, Message::ToggleTheme);
    let terminal = draw(&model);
    let restored_fg = terminal.backend().buffer().cell(header_pos).unwrap().fg;
    assert_eq!(restored_fg, light_fg);
}

#[test]
fn test_active_tab_label_is_underlined() {
    let model = update(create_test_model(), Message::SelectTab(Tab::Research));
    let terminal = draw(&model);
    let buffer = terminal.backend().buffer();

    let area = Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT);
    for (tab, hitbox) in tab_hitboxes(area) {
        let cell = buffer.cell(Position::new(hitbox.x, hitbox.y)).unwrap();
        let underlined = cell.modifier.contains(Modifier::UNDERLINED);
        assert_eq!(underlined, tab == Tab::Research);
    }
}

#[test]
fn test_tab_hitboxes_are_ordered_and_disjoint() {
    let area = Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT);
    let boxes = tab_hitboxes(area);

    for pair in boxes.windows(2) {
        assert!(pair[0].1.right() < pair[1].1.x);
    }
    let toggle = theme_toggle_rect(area);
    assert!(boxes[2].1.right() < toggle.x);
    assert!(toggle.right() <= area.right());
}

#[test]
fn test_help_overlay_renders_on_top() {
    let mut model = create_test_model();
    model.help_visible = true;
    let content = buffer_text(&draw(&model));
    assert!(content.contains("Help"));
    assert!(content.contains("any key closes"));
}

#[test]
fn test_render_survives_tiny_terminal() {
    let backend = TestBackend::new(10, 3);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut model = create_test_model();
    model.width = 10;
    model.height = 3;
    let result = terminal.draw(|frame| render(&model, frame));
    assert!(result.is_ok());
}
