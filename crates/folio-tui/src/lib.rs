//! folio-tui: Terminal UI for a personal portfolio page
//!
//! This crate provides the TUI layer for folio, including:
//! - Experience timeline with per-card Show More / Show Less
//! - Responsive profile, skills and project sections
//! - Static rendering for `folio print`
//! - Headless mode for testing and automation

mod app;
mod event;
pub mod headless;
mod layout;
mod screens;
#[cfg(test)]
pub mod test_utils;
mod text;
mod theme;
mod timeline;
mod widgets;

use screens::Screen as ScreenTrait;

pub use app::{PortfolioApp, UiConfig, SCROLL_SPEED};
pub use event::{key_to_action, Action, Event, EventHandler};
pub use folio_core;
pub use layout::{PageLayout, PageMode, PageRegions, MIN_HEIGHT, MIN_WIDTH};
pub use theme::{BorderSet, IconMode, IconSet, Theme};
pub use timeline::{
    DetailView, ItemPhase, ItemView, TimelineItemState, TimelineState, SHOW_LESS, SHOW_MORE,
};

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_core::Portfolio;
use ratatui::{backend::CrosstermBackend, buffer::Buffer, layout::Rect, Terminal};
use std::io::{self, stdout};

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Options for a one-shot render.
#[derive(Debug, Clone, Default)]
pub struct PrintOptions {
    pub width: u16,
    /// Fit the whole page when `None`.
    pub height: Option<u16>,
    /// Cards to expand, by index. Out-of-range indices are ignored.
    pub expand: Vec<usize>,
}

/// Run the TUI application.
///
/// Sets up the terminal, runs the event loop, and restores the terminal on
/// exit.
pub async fn run_tui(portfolio: Portfolio, ui: UiConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = PortfolioApp::new(portfolio, ui);
    let size = terminal.size()?;
    app.handle_resize(size.width, size.height);

    // 4 Hz tick rate
    let mut events = EventHandler::new(250);

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;
    tracing::info!("TUI exited");

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut PortfolioApp,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            screens::portfolio::PortfolioScreen.render(app, area, frame.buffer_mut());
        })?;

        match events.next().await {
            Some(Event::Key(key)) => app.handle_key_event(key),
            Some(Event::Mouse(mouse)) => app.handle_mouse(mouse),
            Some(Event::Resize(width, height)) => app.handle_resize(width, height),
            Some(Event::Tick) => {}
            None => break,
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the page once into a buffer of the given size.
pub fn render_page(app: &PortfolioApp, area: Rect, buf: &mut Buffer) {
    screens::portfolio::PortfolioScreen.render(app, area, buf);
}

/// Render the page as plain text, without footer or selection highlight.
pub fn render_to_string(portfolio: Portfolio, ui: UiConfig, options: &PrintOptions) -> String {
    let mut app = PortfolioApp::new(portfolio, ui).static_page();
    for &index in &options.expand {
        if app.timeline.toggle(index).is_none() {
            tracing::warn!(index, "No experience card to expand");
        }
    }

    let width = options.width.max(1);
    let height = options
        .height
        .unwrap_or_else(|| app.full_page_height(width))
        .max(1);
    app.handle_resize(width, height);

    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    render_page(&app, area, &mut buf);
    headless::buffer_to_string(&buf)
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_version() {
        let version = tui_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }

    #[test]
    fn test_render_to_string_fits_whole_page() {
        let options = PrintOptions {
            width: 80,
            height: None,
            expand: Vec::new(),
        };
        let output = render_to_string(Portfolio::sample(), UiConfig::default(), &options);

        assert!(output.contains("Open Source Experience"));
        assert!(output.contains("CircuitVerse"));
        assert!(output.contains("Task Management App"));
        assert!(!output.contains("[q] quit"));
    }

    #[test]
    fn test_render_to_string_expands_requested_cards() {
        let options = PrintOptions {
            width: 100,
            height: None,
            expand: vec![1, 9],
        };
        let output = render_to_string(Portfolio::sample(), UiConfig::default(), &options);

        assert!(output.contains("Implemented new features and UI improvements"));
        assert!(!output.contains("Wrote comprehensive unit tests"));
        assert_eq!(output.matches("Show Less").count(), 1);
        assert_eq!(output.matches("Show More").count(), 2);
    }

    #[test]
    fn test_render_to_string_fixed_height() {
        let options = PrintOptions {
            width: 60,
            height: Some(20),
            expand: Vec::new(),
        };
        let output = render_to_string(Portfolio::sample(), UiConfig::default(), &options);
        assert_eq!(output.split('\n').count(), 20);
    }
}
