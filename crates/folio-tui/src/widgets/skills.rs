//! Skills box: every skill as a chip, flowed over as many rows as needed.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::pane::Pane;
use crate::text::flow_chips;
use crate::theme::{BorderSet, Theme};
use crate::timeline::chip_line;

/// Rows the skills box needs at the given width, border included.
pub fn skills_box_height(skills: &[String], width: u16) -> u16 {
    let content_width = usize::from(width.saturating_sub(Pane::CHROME_WIDTH).max(1));
    let rows = flow_chips(skills, content_width).len().max(1);
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_add(Pane::CHROME_HEIGHT)
}

pub struct SkillsBox<'a> {
    skills: &'a [String],
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> SkillsBox<'a> {
    pub fn new(skills: &'a [String], theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self {
            skills,
            theme,
            borders,
        }
    }
}

impl Widget for SkillsBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content_width = usize::from(area.width.saturating_sub(Pane::CHROME_WIDTH).max(1));
        let lines = flow_chips(self.skills, content_width)
            .into_iter()
            .map(|row| chip_line(row, self.theme))
            .collect();

        Pane::new(self.theme, self.borders)
            .lines(lines)
            .render(area, buf);
    }
}
