//! Application state and update logic for the folio TUI.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use folio_core::{Config, Portfolio};
use ratatui::layout::{Position, Rect};

use crate::event::{key_to_action, Action};
use crate::layout::{CardHit, PageLayout, PageMode, PageRegions, MIN_HEIGHT};
use crate::theme::{BorderSet, IconMode, IconSet, Theme};
use crate::timeline::TimelineState;
use crate::widgets::ProfilePanel;

/// Rows moved per mouse wheel step.
pub const SCROLL_SPEED: u16 = 3;

/// Default terminal size before the first resize event.
const DEFAULT_SIZE: (u16, u16) = (80, 24);

/// Presentation settings resolved from configuration.
#[derive(Debug, Clone, Default)]
pub struct UiConfig {
    pub theme: Theme,
    pub icon_mode: IconMode,
}

impl UiConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            theme: Theme::from_name(config.theme),
            icon_mode: config.icon_style().into(),
        }
    }
}

/// Main application state.
pub struct PortfolioApp {
    /// Page content.
    pub portfolio: Portfolio,

    /// Expand/collapse flags and selection for the experience cards.
    pub timeline: TimelineState,

    /// First visible row of the content document.
    pub scroll: u16,

    pub theme: Theme,
    pub icons: IconSet,
    pub borders: BorderSet,

    /// Terminal size as (width, height).
    pub terminal_size: (u16, u16),

    /// Whether help overlay is visible.
    pub show_help: bool,

    /// Whether the app should quit.
    pub should_quit: bool,

    /// Live session: footer and selection highlight are drawn.
    pub interactive: bool,
}

impl PortfolioApp {
    /// Create a new app with every card collapsed and the first one selected.
    pub fn new(portfolio: Portfolio, ui: UiConfig) -> Self {
        let timeline = TimelineState::new(portfolio.experience.len());
        tracing::info!(
            cards = timeline.len(),
            skills = portfolio.skills.len(),
            projects = portfolio.projects.len(),
            "Portfolio loaded"
        );

        Self {
            portfolio,
            timeline,
            scroll: 0,
            theme: ui.theme,
            icons: IconSet::new(ui.icon_mode),
            borders: BorderSet::new(ui.icon_mode),
            terminal_size: DEFAULT_SIZE,
            show_help: false,
            should_quit: false,
            interactive: true,
        }
    }

    /// Render without footer or selection highlight, for one-shot output.
    #[must_use]
    pub fn static_page(mut self) -> Self {
        self.interactive = false;
        self
    }

    /// The whole terminal area.
    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.terminal_size.0, self.terminal_size.1)
    }

    /// Screen regions for the current terminal size.
    pub fn regions(&self) -> Option<PageRegions> {
        PageRegions::compute(self.area(), self.interactive)
    }

    /// Document layout for a content width.
    pub fn page_layout(&self, width: u16) -> PageLayout {
        PageLayout::compute(&self.portfolio, &self.timeline, width, self.icons.bullet())
    }

    fn viewport(&self) -> Option<(Rect, PageLayout)> {
        let regions = self.regions()?;
        let layout = self.page_layout(regions.content.width);
        Some((regions.content, layout))
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        if self.show_help {
            match action {
                Action::Help | Action::Back => self.show_help = false,
                Action::Quit => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match action {
            Action::Quit | Action::Back => self.should_quit = true,
            Action::Help => self.show_help = true,
            Action::Up => {
                self.timeline.select_prev();
                self.ensure_selection_visible();
            }
            Action::Down => {
                self.timeline.select_next();
                self.ensure_selection_visible();
            }
            Action::Top => {
                self.timeline.jump_to_start();
                self.ensure_selection_visible();
            }
            Action::Bottom => {
                self.timeline.jump_to_end();
                self.ensure_selection_visible();
            }
            Action::Toggle => {
                if self.timeline.toggle_selected().is_some() {
                    self.clamp_scroll();
                    self.ensure_selection_visible();
                }
            }
            Action::ToggleAt(index) => {
                if self.timeline.toggle(index).is_some() {
                    self.timeline.select(index);
                    self.clamp_scroll();
                    self.ensure_selection_visible();
                }
            }
            Action::PageUp => {
                let page = self.page_step();
                self.scroll_up(page);
            }
            Action::PageDown => {
                let page = self.page_step();
                self.scroll_down(page);
            }
            Action::ScrollUp => self.scroll_up(SCROLL_SPEED),
            Action::ScrollDown => self.scroll_down(SCROLL_SPEED),
            Action::None => {}
        }
    }

    /// Handle a key press.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.handle_action(key_to_action(key));
    }

    /// Handle a mouse event. Clicks on a card select it; clicks on its
    /// toggle row also toggle it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.handle_action(Action::ScrollUp),
            MouseEventKind::ScrollDown => self.handle_action(Action::ScrollDown),
            MouseEventKind::Down(MouseButton::Left) => {
                if self.show_help {
                    self.show_help = false;
                    return;
                }
                match self.hit_test(mouse.column, mouse.row) {
                    Some(CardHit {
                        index,
                        on_toggle: true,
                    }) => self.handle_action(Action::ToggleAt(index)),
                    Some(CardHit { index, .. }) => {
                        self.timeline.select(index);
                        self.ensure_selection_visible();
                    }
                    None => {}
                }
            }
            _ => {}
        }
    }

    /// Handle a terminal resize.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.clamp_scroll();
    }

    /// Resolve a screen position to a timeline card.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<CardHit> {
        let (viewport, layout) = self.viewport()?;
        if !viewport.contains(Position::new(column, row)) {
            return None;
        }
        layout.card_at(
            column - viewport.x,
            (row - viewport.y).saturating_add(self.scroll),
        )
    }

    /// Scroll so the selected card is on screen. The first card also brings
    /// the section heading into view.
    pub fn ensure_selection_visible(&mut self) {
        let Some(index) = self.timeline.selected() else {
            return;
        };
        let Some((viewport, layout)) = self.viewport() else {
            return;
        };
        let Some((top, bottom)) = layout.card_span(index) else {
            return;
        };

        let top = if index == 0 {
            layout.experience_heading
        } else {
            top
        };
        let height = viewport.height;

        if top < self.scroll || bottom - top > height {
            self.scroll = top;
        } else if bottom > self.scroll.saturating_add(height) {
            self.scroll = bottom - height;
        }
        self.scroll = self.scroll.min(layout.max_scroll(height));
    }

    fn clamp_scroll(&mut self) {
        if let Some((viewport, layout)) = self.viewport() {
            self.scroll = self.scroll.min(layout.max_scroll(viewport.height));
        }
    }

    fn page_step(&self) -> u16 {
        self.regions()
            .map_or(1, |regions| regions.content.height.saturating_sub(1).max(1))
    }

    fn scroll_up(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    fn scroll_down(&mut self, rows: u16) {
        if let Some((viewport, layout)) = self.viewport() {
            let max = layout.max_scroll(viewport.height);
            self.scroll = self.scroll.saturating_add(rows).min(max);
        }
    }

    /// Terminal height at which the whole page fits without scrolling.
    pub fn full_page_height(&self, width: u16) -> u16 {
        let probe = Rect::new(0, 0, width, MIN_HEIGHT);
        let Some(regions) = PageRegions::compute(probe, self.interactive) else {
            return MIN_HEIGHT;
        };

        let layout = self.page_layout(regions.content.width);
        let chrome = MIN_HEIGHT - regions.content.height;
        let mut height = layout.total_height.saturating_add(chrome);

        if regions.mode == PageMode::Wide {
            let footer = u16::from(regions.footer.is_some());
            let panel = ProfilePanel::new(
                &self.portfolio.profile,
                &self.theme,
                &self.icons,
                &self.borders,
            )
            .height(regions.profile.width);
            height = height.max(panel.saturating_add(footer));
        }

        height.max(MIN_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_app;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn wheel(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_new_app_state() {
        let app = create_test_app();
        assert_eq!(app.timeline.len(), 3);
        assert_eq!(app.timeline.selected(), Some(0));
        assert!(app.timeline.iter().all(|item| !item.is_expanded()));
        assert_eq!(app.scroll, 0);
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_toggle_selected_only() {
        let mut app = create_test_app();
        app.handle_action(Action::Down);
        app.handle_action(Action::Toggle);

        assert!(!app.timeline.is_expanded(0));
        assert!(app.timeline.is_expanded(1));
        assert!(!app.timeline.is_expanded(2));

        app.handle_action(Action::Toggle);
        assert!(!app.timeline.is_expanded(1));
    }

    #[test]
    fn test_toggle_at() {
        let mut app = create_test_app();
        app.handle_action(Action::ToggleAt(2));
        assert!(app.timeline.is_expanded(2));
        assert_eq!(app.timeline.selected(), Some(2));

        app.handle_action(Action::ToggleAt(7));
        assert_eq!(app.timeline.selected(), Some(2));
    }

    #[test]
    fn test_help_swallows_actions() {
        let mut app = create_test_app();
        app.handle_action(Action::Help);
        assert!(app.show_help);

        app.handle_action(Action::Toggle);
        app.handle_action(Action::Down);
        assert!(!app.timeline.is_expanded(0));
        assert_eq!(app.timeline.selected(), Some(0));

        app.handle_action(Action::Back);
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_from_help() {
        let mut app = create_test_app();
        app.handle_action(Action::Help);
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_escape_quits() {
        let mut app = create_test_app();
        app.handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit);
    }

    #[test]
    fn test_selection_scrolls_into_view() {
        let mut app = create_test_app();
        app.handle_resize(80, 16);

        app.handle_action(Action::Bottom);
        let (viewport, layout) = app.viewport().unwrap();
        let (top, bottom) = layout.card_span(2).unwrap();
        assert!(app.scroll <= top);
        assert!(bottom <= app.scroll + viewport.height);

        app.handle_action(Action::Top);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = create_test_app();
        app.handle_resize(80, 16);

        for _ in 0..200 {
            app.handle_action(Action::PageDown);
        }
        let (viewport, layout) = app.viewport().unwrap();
        assert_eq!(app.scroll, layout.max_scroll(viewport.height));

        for _ in 0..200 {
            app.handle_action(Action::ScrollUp);
        }
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_collapse_clamps_scroll() {
        let mut app = create_test_app();
        app.handle_resize(80, 16);
        for i in 0..3 {
            app.handle_action(Action::ToggleAt(i));
        }
        for _ in 0..200 {
            app.handle_action(Action::ScrollDown);
        }
        for i in 0..3 {
            app.handle_action(Action::ToggleAt(i));
        }

        let (viewport, layout) = app.viewport().unwrap();
        assert!(app.scroll <= layout.max_scroll(viewport.height));
    }

    #[test]
    fn test_click_toggle_row() {
        let mut app = create_test_app();
        app.handle_resize(80, 40);
        let (viewport, layout) = app.viewport().unwrap();
        let card = layout.cards[0];
        let row = viewport.y + layout.timeline_top + card.toggle_row();
        let column = viewport.x + 20;

        app.handle_mouse(click(column, row));
        assert!(app.timeline.is_expanded(0));

        // Same row is now inside the detail block
        app.handle_mouse(click(column, row));
        assert!(app.timeline.is_expanded(0));

        let (viewport, layout) = app.viewport().unwrap();
        let card = layout.cards[0];
        let row = viewport.y + layout.timeline_top + card.toggle_row() - app.scroll;
        app.handle_mouse(click(column, row));
        assert!(!app.timeline.is_expanded(0));
    }

    #[test]
    fn test_click_card_body_selects() {
        let mut app = create_test_app();
        app.handle_resize(80, 40);
        let (viewport, layout) = app.viewport().unwrap();
        let card = layout.cards[1];
        let row = viewport.y + layout.timeline_top + card.title_row();

        app.handle_mouse(click(viewport.x + 20, row));
        assert_eq!(app.timeline.selected(), Some(1));
        assert!(!app.timeline.is_expanded(1));
    }

    #[test]
    fn test_click_outside_cards_is_ignored() {
        let mut app = create_test_app();
        app.handle_resize(80, 40);

        app.handle_mouse(click(0, 0));
        assert_eq!(app.timeline.selected(), Some(0));
        assert!(app.timeline.iter().all(|item| !item.is_expanded()));
    }

    #[test]
    fn test_click_closes_help() {
        let mut app = create_test_app();
        app.handle_action(Action::Help);
        app.handle_mouse(click(10, 10));
        assert!(!app.show_help);
    }

    #[test]
    fn test_mouse_wheel_scrolls() {
        let mut app = create_test_app();
        app.handle_resize(80, 16);

        app.handle_mouse(wheel(MouseEventKind::ScrollDown));
        assert_eq!(app.scroll, SCROLL_SPEED);
        app.handle_mouse(wheel(MouseEventKind::ScrollUp));
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_too_small_terminal_ignores_navigation() {
        let mut app = create_test_app();
        app.handle_resize(20, 5);
        app.handle_action(Action::Bottom);
        app.handle_action(Action::PageDown);

        assert_eq!(app.timeline.selected(), Some(2));
        assert_eq!(app.scroll, 0);
        assert!(app.hit_test(5, 2).is_none());
    }

    #[test]
    fn test_full_page_height_fits_document() {
        let app = create_test_app().static_page();
        let height = app.full_page_height(80);
        let regions = PageRegions::compute(Rect::new(0, 0, 80, height), false).unwrap();
        let layout = app.page_layout(regions.content.width);

        assert_eq!(layout.max_scroll(regions.content.height), 0);
    }

    #[test]
    fn test_ui_config_from_config() {
        let config = Config {
            theme: folio_core::ThemeName::Latte,
            icons: Some(folio_core::IconStyle::Ascii),
            content: None,
        };
        let ui = UiConfig::from_config(&config);
        assert_eq!(ui.icon_mode, IconMode::Ascii);
    }
}
