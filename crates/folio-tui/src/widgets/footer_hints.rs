//! Footer status bar widget.
//!
//! Format: `Experience 2/3            [j/k] select │ [Enter] toggle │ [?] help │ [q] quit`

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::text::visual_width;
use crate::theme::Theme;

/// A single keybinding hint.
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The key or key combination (e.g., "Enter", "j/k").
    pub key: String,
    /// The action description (e.g., "toggle", "quit").
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Footer status bar widget.
pub struct FooterHints<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
    status: Option<String>,
}

impl<'a> FooterHints<'a> {
    /// Create a new footer hints widget.
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self {
            hints,
            theme,
            status: None,
        }
    }

    /// Set the status text shown on the left.
    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Hints while browsing the page.
    pub fn default_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("j/k", "select"),
            KeyHint::new("Enter", "toggle"),
            KeyHint::new("?", "help"),
            KeyHint::new("q", "quit"),
        ]
    }

    /// Hints while the help overlay is open.
    pub fn help_hints() -> Vec<KeyHint> {
        vec![KeyHint::new("Esc", "close"), KeyHint::new("q", "quit")]
    }
}

/// Left status text: which experience card is selected.
pub fn selection_status(heading: &str, selected: Option<usize>, total: usize) -> String {
    match selected {
        Some(index) if total > 0 => format!("{heading} {}/{total}", index + 1),
        _ => heading.to_string(),
    }
}

impl Widget for FooterHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut left_spans = Vec::new();
        let mut right_spans = Vec::new();

        if let Some(status) = self.status {
            left_spans.push(Span::styled(status, Style::default().fg(self.theme.primary)));
        }

        // Right side: hints (rendered right-aligned)
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                right_spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            }

            right_spans.push(Span::styled("[", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(&hint.key, Style::default().fg(self.theme.primary)));
            right_spans.push(Span::styled("] ", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(&hint.action, Style::default().fg(self.theme.subtext)));
        }

        let left_width: usize = left_spans.iter().map(|s| visual_width(&s.content)).sum();
        let right_width: usize = right_spans.iter().map(|s| visual_width(&s.content)).sum();
        let total_width = area.width as usize;

        // Hints are dropped first when both sides do not fit
        if left_width + right_width > total_width {
            right_spans.clear();
        }

        let padding = total_width.saturating_sub(left_width + right_width);
        if padding > 0 && !right_spans.is_empty() {
            left_spans.push(Span::raw(" ".repeat(padding)));
        }

        left_spans.extend(right_spans);

        let line = Line::from(left_spans);
        let paragraph = Paragraph::new(line).style(Style::default().bg(self.theme.surface));
        paragraph.render(area, buf);
    }
}
