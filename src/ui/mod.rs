//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`render`]: Full-frame rendering (header, active panel, footer)
//! - [`style`]: Theming and colors
//! - hit-box layout functions shared with mouse input handling

pub mod style;

mod overlays;
mod render;

pub use render::{render, tab_hitboxes, theme_toggle_rect};

/// Horizontal page margin, in columns.
pub const PAGE_MARGIN: u16 = 2;
/// Columns between tab labels in the header.
pub const TAB_GAP: u16 = 2;
/// Width share of the "About" column on the home tab.
pub const HOME_ABOUT_PERCENT: u16 = 58;
/// Width share of the presentations column on the home tab.
pub const HOME_SIDEBAR_PERCENT: u16 = 42;

#[cfg(test)]
mod tests;
