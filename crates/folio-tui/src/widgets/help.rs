//! Help overlay listing the key bindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Padding, Paragraph, Widget},
};

use crate::layout::centered_fixed;
use crate::theme::{BorderSet, IconSet, Theme};

/// Key column and description, in display order.
const BINDINGS: &[(&str, &str)] = &[
    ("j / Down", "Select next card"),
    ("k / Up", "Select previous card"),
    ("g / Home", "First card"),
    ("G / End", "Last card"),
    ("Enter / Space", "Show more / less"),
    ("PgUp / PgDn", "Scroll page"),
    ("Mouse wheel", "Scroll"),
    ("Click", "Select / toggle card"),
    ("?", "Toggle this help"),
    ("q / Esc", "Quit"),
];

const KEY_WIDTH: usize = 15;
const OVERLAY_WIDTH: u16 = 44;

pub struct HelpOverlay<'a> {
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(theme: &'a Theme, icons: &'a IconSet, borders: &'a BorderSet) -> Self {
        Self {
            theme,
            icons,
            borders,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = BINDINGS
            .iter()
            .map(|(key, action)| {
                Line::from(vec![
                    Span::styled(
                        format!("{key:<KEY_WIDTH$}"),
                        Style::default().fg(self.theme.primary),
                    ),
                    Span::styled(*action, Style::default().fg(self.theme.text)),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(self.theme.muted),
        )));
        lines
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX) + 2;
        let overlay_area = centered_fixed(OVERLAY_WIDTH, height, area);

        Clear.render(overlay_area, buf);

        let title = format!(" {} Help ", self.icons.help());
        let block = Block::bordered()
            .title(title)
            .title_style(
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .border_set(self.borders.card(true))
            .border_style(Style::default().fg(self.theme.border_focused))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(self.theme.base));

        Paragraph::new(lines).block(block).render(overlay_area, buf);
    }
}
