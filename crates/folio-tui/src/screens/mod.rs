//! Screen definitions for the folio TUI.

pub mod portfolio;

use crate::app::PortfolioApp;
use crate::layout::{MIN_HEIGHT, MIN_WIDTH};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

/// Trait for screens that can be rendered.
pub trait Screen {
    /// Render the screen to the buffer.
    fn render(&self, app: &PortfolioApp, area: Rect, buf: &mut Buffer);
}

/// Render the notice shown when the terminal is below the minimum size.
pub fn render_too_small(app: &PortfolioApp, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from("Terminal too small"),
        Line::from(format!("Need at least {MIN_WIDTH}x{MIN_HEIGHT}")),
        Line::from(format!("Current: {}x{}", area.width, area.height)),
    ];
    let top = area.height.saturating_sub(3) / 2;
    let notice = Rect::new(
        area.x,
        area.y + top,
        area.width,
        area.height.saturating_sub(top),
    );

    Paragraph::new(lines)
        .centered()
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(app.theme.warning).bg(app.theme.base))
        .render(notice, buf);
}
