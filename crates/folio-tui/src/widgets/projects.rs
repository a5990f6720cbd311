//! Featured project cards.

use folio_core::Project;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::pane::Pane;
use crate::text::{flow_chips, truncate_to_width, wrap_text};
use crate::theme::{BorderSet, IconSet, Theme};
use crate::timeline::{styled_row, CardRow};

/// Rows of a project card: title, wrapped description, then tag chips.
pub fn project_rows(project: &Project, content_width: usize) -> Vec<CardRow> {
    let mut rows = vec![CardRow::Title(truncate_to_width(
        &project.title,
        content_width,
    ))];
    rows.extend(
        wrap_text(&project.description, content_width)
            .into_iter()
            .map(CardRow::Summary),
    );

    if !project.tags.is_empty() {
        rows.push(CardRow::Blank);
        rows.extend(
            flow_chips(&project.tags, content_width)
                .into_iter()
                .map(CardRow::Tags),
        );
    }

    rows
}

/// Rows a card needs at the given width, border included.
pub fn project_card_height(project: &Project, width: u16) -> u16 {
    let content_width = usize::from(width.saturating_sub(Pane::CHROME_WIDTH).max(1));
    u16::try_from(project_rows(project, content_width).len())
        .unwrap_or(u16::MAX)
        .saturating_add(Pane::CHROME_HEIGHT)
}

pub struct ProjectCard<'a> {
    project: &'a Project,
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
}

impl<'a> ProjectCard<'a> {
    pub fn new(
        project: &'a Project,
        theme: &'a Theme,
        icons: &'a IconSet,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            project,
            theme,
            icons,
            borders,
        }
    }
}

impl Widget for ProjectCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content_width = usize::from(area.width.saturating_sub(Pane::CHROME_WIDTH).max(1));
        let lines = project_rows(self.project, content_width)
            .into_iter()
            .map(|row| styled_row(row, self.theme, self.icons, false))
            .collect();

        Pane::new(self.theme, self.borders)
            .lines(lines)
            .render(area, buf);
    }
}
