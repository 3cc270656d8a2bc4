use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::app::{Model, Tab};
use crate::content::{FOOTER_YEAR, ProfileContent};

use super::style::Theme;
use super::{HOME_ABOUT_PERCENT, HOME_SIDEBAR_PERCENT, PAGE_MARGIN, TAB_GAP, overlays};

/// Header band: name/tabs/toggle row plus a blank spacer row.
const HEADER_ROWS: u16 = 2;
/// Footer band: rule row plus the name/year/email row.
const FOOTER_ROWS: u16 = 2;
/// Clickable width of the theme toggle glyph.
const TOGGLE_WIDTH: u16 = 3;
/// Gap between the two home-tab columns.
const COLUMN_GAP: u16 = 3;
/// Indent that hangs list sublines under the entry title.
const LIST_INDENT: &str = "      ";

/// Page content area: the frame minus the horizontal page margins.
fn page_rect(area: Rect) -> Rect {
    area.inner(Margin::new(PAGE_MARGIN, 0))
}

// Tab labels are short ASCII; their widths fit comfortably in u16.
#[allow(clippy::cast_possible_truncation)]
fn label_width(label: &str) -> u16 {
    label.width() as u16
}

/// Hit-box of the theme toggle glyph in the header row.
pub fn theme_toggle_rect(area: Rect) -> Rect {
    let page = page_rect(area);
    let width = TOGGLE_WIDTH.min(page.width);
    let x = page.right().saturating_sub(width);
    Rect::new(x, page.y, width, 1.min(page.height))
}

/// Hit-boxes of the three tab labels in the header row.
///
/// The renderer draws each label into exactly these rects, so mouse
/// hit-testing and visuals share one source of truth.
pub fn tab_hitboxes(area: Rect) -> [(Tab, Rect); 3] {
    let page = page_rect(area);
    let toggle = theme_toggle_rect(area);

    let widths = Tab::ALL.map(|tab| label_width(tab.label()));
    let total = widths.iter().sum::<u16>() + TAB_GAP * 2;
    let end = toggle.x.saturating_sub(TAB_GAP);
    let mut x = end.saturating_sub(total).max(page.x);

    let mut boxes = [(Tab::Home, Rect::ZERO); 3];
    for (i, tab) in Tab::ALL.into_iter().enumerate() {
        boxes[i] = (tab, Rect::new(x, page.y, widths[i], 1.min(page.height)));
        x = x.saturating_add(widths[i] + TAB_GAP);
    }
    boxes
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let theme = model.theme();

    // Repaint everything so tokens from the previous mode do not leak.
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg)),
        area,
    );

    let page = page_rect(area);
    if page.width == 0 || page.height == 0 {
        return;
    }

    render_header(model, &theme, frame, area);

    let body = Rect {
        y: page.y + HEADER_ROWS.min(page.height),
        height: page.height.saturating_sub(HEADER_ROWS + FOOTER_ROWS),
        ..page
    };
    match model.active_tab {
        Tab::Home => render_home(&model.content, &theme, frame, body),
        Tab::Research => render_research(&model.content, &theme, frame, body),
        Tab::Teaching => render_teaching(&model.content, &theme, frame, body),
    }

    render_footer(&model.content, &theme, frame, page);

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

fn render_header(model: &Model, theme: &Theme, frame: &mut Frame, area: Rect) {
    let page = page_rect(area);
    if page.height == 0 {
        return;
    }

    let hitboxes = tab_hitboxes(area);

    // Clip the name so it never runs under the tab selector.
    let name_width = hitboxes[0]
        .1
        .x
        .saturating_sub(page.x + TAB_GAP)
        .min(page.width);
    let name_area = Rect::new(page.x, page.y, name_width, 1);
    frame.render_widget(
        Paragraph::new(model.content.profile.name).style(theme.header),
        name_area,
    );

    for (tab, hitbox) in hitboxes {
        let style = if model.active_tab == tab {
            theme.nav_selected
        } else {
            theme.nav_unselected
        };
        // Clamp to the frame on very narrow terminals.
        frame.render_widget(
            Paragraph::new(tab.label()).style(style),
            hitbox.intersection(area),
        );
    }

    frame.render_widget(
        Paragraph::new(Theme::toggle_glyph(model.dark_mode))
            .style(theme.toggle)
            .alignment(Alignment::Center),
        theme_toggle_rect(area).intersection(area),
    );
}

/// Section heading in the page's register: title line plus rule line.
fn section_lines(title: &'static str, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    vec![
        Line::styled(title, theme.section_title),
        Line::styled("\u{2500}".repeat(usize::from(width)), theme.section_border),
    ]
}

fn entry_lines(
    year: &'static str,
    title: &'static str,
    sub: &'static str,
    theme: &Theme,
) -> [Line<'static>; 3] {
    [
        Line::from(vec![
            Span::styled(format!("{year:<4}"), theme.year),
            Span::raw("  "),
            Span::styled(title, theme.item_title),
        ]),
        Line::from(vec![
            Span::raw(LIST_INDENT),
            Span::styled(sub, theme.item_sub),
        ]),
        Line::raw(""),
    ]
}

fn render_home(content: &ProfileContent, theme: &Theme, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(HOME_ABOUT_PERCENT),
            Constraint::Percentage(HOME_SIDEBAR_PERCENT),
        ])
        .split(area);

    let about_area = Rect {
        width: columns[0].width.saturating_sub(COLUMN_GAP),
        ..columns[0]
    };
    let mut lines = section_lines("ABOUT", theme, about_area.width);
    lines.push(Line::styled(content.profile.bio, theme.text_muted));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        about_area,
    );

    let side_area = columns[1];
    let mut lines = section_lines("RECENT PRESENTATIONS", theme, side_area.width);
    for pres in content.presentations {
        lines.extend(entry_lines(pres.year, pres.title, pres.event, theme));
    }
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        side_area,
    );
}

fn render_research(content: &ProfileContent, theme: &Theme, frame: &mut Frame, area: Rect) {
    let mut lines = section_lines("RESEARCH AGENDA", theme, area.width);
    lines.push(Line::styled(
        content.profile.research_statement,
        theme.text_muted,
    ));
    lines.push(Line::raw(""));
    lines.extend(section_lines("SELECTED PUBLICATIONS", theme, area.width));
    for publication in content.publications {
        lines.extend(entry_lines(
            publication.year,
            publication.title,
            publication.venue,
            theme,
        ));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_teaching(content: &ProfileContent, theme: &Theme, frame: &mut Frame, area: Rect) {
    let mut lines = section_lines("TEACHING PHILOSOPHY", theme, area.width);
    lines.push(Line::styled(
        content.profile.teaching_philosophy,
        theme.text_muted,
    ));
    lines.push(Line::raw(""));
    lines.extend(section_lines("COURSES", theme, area.width));
    for course in content.courses {
        lines.push(course_title_line(course, theme, area.width));
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(course.code.width() + 2)),
            Span::styled(course.role, theme.item_sub),
        ]));
        lines.push(Line::raw(""));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

/// Course row: code and name on the left, term right-aligned.
fn course_title_line(
    course: &crate::content::Course,
    theme: &Theme,
    width: u16,
) -> Line<'static> {
    let left_width = course.code.width() + 2 + course.name.width();
    let pad = usize::from(width)
        .saturating_sub(left_width + course.term.width())
        .max(1);
    Line::from(vec![
        Span::styled(course.code, theme.course_code),
        Span::raw("  "),
        Span::styled(course.name, theme.item_title),
        Span::raw(" ".repeat(pad)),
        Span::styled(course.term, theme.course_term),
    ])
}

fn render_footer(content: &ProfileContent, theme: &Theme, frame: &mut Frame, page: Rect) {
    if page.height < HEADER_ROWS + FOOTER_ROWS {
        return;
    }
    let rule_area = Rect::new(page.x, page.bottom() - 2, page.width, 1);
    let text_area = Rect::new(page.x, page.bottom() - 1, page.width, 1);

    frame.render_widget(
        Paragraph::new(Line::styled(
            "\u{2500}".repeat(usize::from(page.width)),
            theme.section_border,
        )),
        rule_area,
    );

    let left = format!(
        "{} \u{2014} {}",
        content.profile.name.to_uppercase(),
        FOOTER_YEAR
    );
    let email = content.profile.email;
    let pad = usize::from(page.width)
        .saturating_sub(left.width() + email.width())
        .max(1);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(left, theme.footer),
            Span::raw(" ".repeat(pad)),
            Span::styled(email, theme.footer),
        ])),
        text_area,
    );
}
