//! Timeline module for displaying work experience.
//!
//! This module provides:
//! - [`TimelineItemState`] - Expand/collapse flag owned by one item
//! - [`ItemView`] - What an item shows for its current state
//! - [`TimelineState`] - Item states plus keyboard selection
//! - [`CardRow`], [`layout_cards`] - Card content and geometry
//! - [`TimelineWidget`] - Widget for rendering the timeline

mod card;
mod item;
mod state;
mod widget;

pub use card::{layout_cards, timeline_height, CardLayout, CardRow, GUTTER_WIDTH};
pub use item::{DetailView, ItemPhase, ItemView, TimelineItemState, SHOW_LESS, SHOW_MORE};
pub use state::TimelineState;
pub use widget::TimelineWidget;

pub(crate) use widget::{chip_line, styled_row};
