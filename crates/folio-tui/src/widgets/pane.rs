//! Generic bordered pane widget.
//!
//! Used for the profile panel, the skills box and project cards.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Padding, Widget},
};

use crate::theme::{BorderSet, Theme};

/// Bordered pane with one cell of horizontal padding.
pub struct Pane<'a> {
    lines: Vec<Line<'a>>,
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> Pane<'a> {
    /// Create a new pane widget.
    pub fn new(theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self {
            lines: Vec::new(),
            theme,
            borders,
        }
    }

    /// Set the pane content, one line per row. Lines past the bottom are
    /// dropped.
    #[must_use]
    pub fn lines(mut self, lines: Vec<Line<'a>>) -> Self {
        self.lines = lines;
        self
    }

    /// Rows taken by border and padding.
    pub const CHROME_HEIGHT: u16 = 2;

    /// Columns taken by border and padding.
    pub const CHROME_WIDTH: u16 = 4;
}

impl Widget for Pane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_set(self.borders.card(false))
            .border_style(Style::default().fg(self.theme.border))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(self.theme.base));

        let inner = block.inner(area);
        block.render(area, buf);

        for (line, y) in self.lines.iter().zip(inner.y..inner.bottom()) {
            buf.set_line(inner.x, y, line, inner.width);
        }
    }
}
