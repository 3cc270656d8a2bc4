//! Theming and color definitions.
//!
//! The page has exactly two visual modes. [`Theme::of`] maps the
//! dark-mode flag to a full set of style tokens; nothing else in the
//! codebase branches on the flag directly, so every color decision
//! lives here.

use ratatui::style::{Color, Modifier, Style};

/// Glyph shown on the theme toggle in light mode (click for dark).
pub const MOON_GLYPH: &str = "\u{263e}";
/// Glyph shown on the theme toggle in dark mode (click for light).
pub const SUN_GLYPH: &str = "\u{2600}";

/// Style tokens for one visual mode.
///
/// Token roles mirror the page regions: header, tab selector, section
/// headings, list entries, footer.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Page background
    pub bg: Color,
    /// Default body text
    pub text_main: Style,
    /// Wrapped prose (bio, statements)
    pub text_muted: Style,
    /// Profile name in the header
    pub header: Style,
    /// Section headings ("ABOUT", "COURSES", ...)
    pub section_title: Style,
    /// Rule under a section heading and above the footer
    pub section_border: Style,
    /// The active tab label
    pub nav_selected: Style,
    /// The two inactive tab labels
    pub nav_unselected: Style,
    /// Entry titles in the three lists
    pub item_title: Style,
    /// Entry sublines (venue, event, role)
    pub item_sub: Style,
    /// Year column in front of list entries
    pub year: Style,
    /// Course codes on the teaching tab
    pub course_code: Style,
    /// Course terms, right-aligned on the teaching tab
    pub course_term: Style,
    /// Sun/moon toggle glyph
    pub toggle: Style,
    /// Footer line (name, year, email)
    pub footer: Style,
}

impl Theme {
    /// Derive the token set for the given dark-mode flag.
    ///
    /// Pure: equal flags produce equal tokens, so toggling twice
    /// restores every token exactly.
    pub fn of(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }

    /// Tokens for light mode: near-white page, slate text.
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            text_main: Style::default().fg(Color::Indexed(235)),
            text_muted: Style::default().fg(Color::Indexed(238)),
            header: Style::default()
                .fg(Color::Indexed(235))
                .add_modifier(Modifier::BOLD),
            section_title: Style::default().fg(Color::Indexed(250)),
            section_border: Style::default().fg(Color::Indexed(254)),
            nav_selected: Style::default()
                .fg(Color::Indexed(235))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            nav_unselected: Style::default().fg(Color::Indexed(248)),
            item_title: Style::default().fg(Color::Indexed(235)),
            item_sub: Style::default().fg(Color::Indexed(245)),
            year: Style::default()
                .fg(Color::Indexed(252))
                .add_modifier(Modifier::BOLD),
            course_code: Style::default()
                .fg(Color::Indexed(248))
                .add_modifier(Modifier::BOLD),
            course_term: Style::default().fg(Color::Indexed(250)),
            toggle: Style::default().fg(Color::Indexed(248)),
            footer: Style::default().fg(Color::Indexed(248)),
        }
    }

    /// Tokens for dark mode: near-black page, blue accents.
    pub fn dark() -> Self {
        Self {
            bg: Color::Indexed(232),
            text_main: Style::default().fg(Color::Indexed(254)),
            text_muted: Style::default().fg(Color::Indexed(251)),
            header: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            section_title: Style::default().fg(Color::Indexed(68)),
            section_border: Style::default().fg(Color::Indexed(17)),
            nav_selected: Style::default()
                .fg(Color::Indexed(75))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            nav_unselected: Style::default().fg(Color::Indexed(244)),
            item_title: Style::default().fg(Color::White),
            item_sub: Style::default().fg(Color::Indexed(246)),
            year: Style::default()
                .fg(Color::Indexed(69))
                .add_modifier(Modifier::BOLD),
            course_code: Style::default()
                .fg(Color::Indexed(75))
                .add_modifier(Modifier::BOLD),
            course_term: Style::default().fg(Color::Indexed(244)),
            toggle: Style::default().fg(Color::Indexed(75)),
            footer: Style::default().fg(Color::Indexed(242)),
        }
    }

    /// Glyph for the theme toggle in this mode's counterpart.
    ///
    /// Light mode shows the moon (switch to dark); dark mode shows the
    /// sun (switch to light).
    pub const fn toggle_glyph(dark_mode: bool) -> &'static str {
        if dark_mode { SUN_GLYPH } else { MOON_GLYPH }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_matches_named_constructors() {
        assert_eq!(Theme::of(false), Theme::light());
        assert_eq!(Theme::of(true), Theme::dark());
    }

    #[test]
    fn test_double_toggle_restores_tokens() {
        for start_mode in [false, true] {
            let start = Theme::of(start_mode);
            let flipped = Theme::of(!start_mode);
            let restored = Theme::of(start_mode);
            assert_ne!(start, flipped);
            assert_eq!(start, restored);
        }
    }

    #[test]
    fn test_modes_differ_in_header_token() {
        assert_ne!(Theme::light().header, Theme::dark().header);
    }

    #[test]
    fn test_selected_tab_is_underlined_in_both_modes() {
        for theme in [Theme::light(), Theme::dark()] {
            assert!(theme.nav_selected.add_modifier.contains(Modifier::UNDERLINED));
            assert!(theme.nav_selected.add_modifier.contains(Modifier::BOLD));
            assert!(!theme.nav_unselected.add_modifier.contains(Modifier::UNDERLINED));
        }
    }

    #[test]
    fn test_toggle_glyph_shows_the_other_mode() {
        assert_eq!(Theme::toggle_glyph(false), MOON_GLYPH);
        assert_eq!(Theme::toggle_glyph(true), SUN_GLYPH);
    }
}
