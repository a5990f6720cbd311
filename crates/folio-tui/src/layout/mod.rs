//! Layout components for the TUI.
//!
//! This module provides:
//! - [`PageRegions`] - Profile, content and footer areas for a terminal size
//! - [`PageLayout`] - Section and card positions inside the scrolled content
//! - [`centered_fixed`] - Fixed-size rect centered in an area

mod page;

pub use page::{
    CardHit, PageLayout, PageMode, PageRegions, MIN_HEIGHT, MIN_WIDTH, PROJECTS_HEADING,
    SKILLS_HEADING,
};

use ratatui::layout::Rect;

/// Create a centered rect with fixed dimensions, clipped to the area.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
