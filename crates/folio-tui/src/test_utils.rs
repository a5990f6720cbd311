//! Test utilities for folio-tui snapshot and rendering tests.
//!
//! Helpers for building a sample app, rendering the page into a buffer, and
//! converting buffers to strings.

use crate::app::{PortfolioApp, UiConfig};
use crate::screens::portfolio::PortfolioScreen;
use crate::screens::Screen as ScreenTrait;
use folio_core::Portfolio;
use ratatui::{buffer::Buffer, layout::Rect};

pub use crate::headless::buffer_to_string;

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Create a test app with the sample portfolio at the default size.
pub fn create_test_app() -> PortfolioApp {
    let mut app = PortfolioApp::new(Portfolio::sample(), UiConfig::default());
    app.handle_resize(TEST_WIDTH, TEST_HEIGHT);
    app
}

/// Render the page into a `width` x `height` buffer and return its text.
///
/// Scroll state comes from `app` as is; resize the app first when the render
/// size differs from its terminal size and scrolling matters.
pub fn render_app(app: &PortfolioApp, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    PortfolioScreen.render(app, area, &mut buf);
    buffer_to_string(&buf)
}
