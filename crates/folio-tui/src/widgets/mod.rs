//! UI widgets for the TUI.
//!
//! This module provides:
//! - [`Pane`] - Bordered box shared by the other widgets
//! - [`ProfilePanel`], [`ProfileHeader`] - Owner profile, full and compact
//! - [`SkillsBox`] - Skill chips
//! - [`ProjectCard`] - Featured project card
//! - [`FooterHints`] - Bottom keybinding hints
//! - [`HelpOverlay`] - Key binding reference

mod footer_hints;
mod help;
mod pane;
mod profile;
mod projects;
mod skills;

pub use footer_hints::{selection_status, FooterHints};
pub use help::HelpOverlay;
pub use pane::Pane;
pub use profile::{ProfileHeader, ProfilePanel};
pub use projects::{project_card_height, ProjectCard};
pub use skills::{skills_box_height, SkillsBox};
