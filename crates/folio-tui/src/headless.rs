//! Headless mode for the folio TUI.
//!
//! Runs the page without a real terminal, for E2E testing and automation.
//! Actions are sent via channels and screen state is captured after each
//! render.

use crate::app::{PortfolioApp, UiConfig};
use crate::event::Action;
use crate::screens::portfolio::PortfolioScreen;
use crate::screens::Screen as ScreenTrait;
use crate::timeline::TimelineItemState;
use folio_core::Portfolio;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Default terminal dimensions for headless mode.
pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// State captured from the headless TUI after each render.
#[derive(Debug, Clone, Default)]
pub struct HeadlessState {
    /// Text contents of the terminal buffer.
    pub screen_contents: String,
    /// Whether the TUI should quit.
    pub should_quit: bool,
    /// Whether help overlay is visible.
    pub show_help: bool,
    /// Selected experience card.
    pub selected: Option<usize>,
    /// Expanded flag per experience card.
    pub expanded: Vec<bool>,
    /// First visible row of the content document.
    pub scroll: u16,
}

impl HeadlessState {
    fn capture(app: &PortfolioApp, screen_contents: String) -> Self {
        Self {
            screen_contents,
            should_quit: app.should_quit,
            show_help: app.show_help,
            selected: app.timeline.selected(),
            expanded: app.timeline.iter().map(TimelineItemState::is_expanded).collect(),
            scroll: app.scroll,
        }
    }
}

/// Handle to control a headless TUI instance.
///
/// Use this to send actions and observe state changes.
pub struct HeadlessHandle {
    action_tx: mpsc::UnboundedSender<Action>,
    state_rx: watch::Receiver<HeadlessState>,
}

impl HeadlessHandle {
    /// Send an action to the TUI.
    ///
    /// Returns `true` if the action was sent successfully.
    pub fn send_action(&self, action: Action) -> bool {
        self.action_tx.send(action).is_ok()
    }

    /// Get the current state of the TUI.
    pub fn state(&self) -> HeadlessState {
        self.state_rx.borrow().clone()
    }

    /// Wait for the state to change, with a timeout.
    ///
    /// Returns `true` if state changed, `false` if timed out.
    pub async fn wait_for_change(&mut self, timeout: Duration) -> bool {
        tokio::time::timeout(timeout, self.state_rx.changed())
            .await
            .is_ok()
    }

    /// Wait until a condition is met on the state.
    ///
    /// Returns the state when the condition is met, or `None` if timed out.
    pub async fn wait_for<F>(&mut self, condition: F, timeout: Duration) -> Option<HeadlessState>
    where
        F: Fn(&HeadlessState) -> bool,
    {
        let deadline = tokio::time::Instant::now() + timeout;

        loop {
            let state = self.state();
            if condition(&state) {
                return Some(state);
            }

            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                return None;
            }

            match tokio::time::timeout(remaining, self.state_rx.changed()).await {
                Ok(Ok(())) => {}
                // Timed out, or the loop exited and dropped the sender
                Ok(Err(_)) | Err(_) => return None,
            }
        }
    }

    /// Wait for specific text to appear on screen.
    pub async fn wait_for_text(&mut self, text: &str, timeout: Duration) -> Option<HeadlessState> {
        let text = text.to_string();
        self.wait_for(|s| s.screen_contents.contains(&text), timeout)
            .await
    }

    /// Check if the TUI has quit.
    pub fn has_quit(&self) -> bool {
        self.state().should_quit
    }
}

/// Configuration for headless mode.
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Terminal width.
    pub width: u16,
    /// Terminal height.
    pub height: u16,
    /// Tick rate in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_rate_ms: 50, // Faster tick rate for testing
        }
    }
}

/// Run the TUI in headless mode.
///
/// Returns a handle to control the TUI and a join handle for the background
/// task. Must be called from within a tokio runtime.
///
/// # Example
///
/// ```ignore
/// let (mut handle, task) =
///     run_tui_headless(Portfolio::sample(), UiConfig::default(), HeadlessConfig::default());
///
/// handle.send_action(Action::Toggle);
/// let state = handle.wait_for_text("Show Less", Duration::from_secs(1)).await;
///
/// handle.send_action(Action::Quit);
/// task.await.unwrap();
/// ```
pub fn run_tui_headless(
    portfolio: Portfolio,
    ui: UiConfig,
    config: HeadlessConfig,
) -> (HeadlessHandle, JoinHandle<Result<(), String>>) {
    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(HeadlessState::default());

    let task = tokio::spawn(async move {
        run_headless_loop(portfolio, ui, config, action_rx, state_tx)
            .await
            .map_err(|e| e.to_string())
    });

    let handle = HeadlessHandle {
        action_tx,
        state_rx,
    };

    (handle, task)
}

async fn run_headless_loop(
    portfolio: Portfolio,
    ui: UiConfig,
    config: HeadlessConfig,
    mut action_rx: mpsc::UnboundedReceiver<Action>,
    state_tx: watch::Sender<HeadlessState>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let backend = TestBackend::new(config.width, config.height);
    let mut terminal = Terminal::new(backend)?;

    let mut app = PortfolioApp::new(portfolio, ui);
    app.handle_resize(config.width, config.height);

    let tick_duration = Duration::from_millis(config.tick_rate_ms);

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            PortfolioScreen.render(&app, area, frame.buffer_mut());
        })?;

        let screen_contents = buffer_to_string(terminal.backend().buffer());
        let _ = state_tx.send(HeadlessState::capture(&app, screen_contents));

        if app.should_quit {
            break;
        }

        // Wait for action or tick
        let action = tokio::select! {
            received = action_rx.recv() => match received {
                Some(action) => action,
                // Every handle dropped
                None => break,
            },
            () = tokio::time::sleep(tick_duration) => Action::None,
        };

        if action != Action::None {
            tracing::debug!(?action, "Headless action");
            app.handle_action(action);
        }
    }

    Ok(())
}

/// Convert a terminal buffer to a string representation.
///
/// Trailing spaces are trimmed from each row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        // Trim trailing whitespace from each line
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    // Remove trailing newline
    if result.ends_with('\n') {
        result.pop();
    }

    result
}
