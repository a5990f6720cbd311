//! Responsive page geometry.
//!
//! [`PageRegions`] splits the terminal into profile, content and footer
//! areas. [`PageLayout`] positions every section of the scrolled content
//! document; rendering and mouse hit-testing both read from it.

use folio_core::Portfolio;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::timeline::{layout_cards, timeline_height, CardLayout, TimelineState, GUTTER_WIDTH};
use crate::widgets::{project_card_height, skills_box_height};

/// Minimum terminal width.
pub const MIN_WIDTH: u16 = 40;
/// Minimum terminal height.
pub const MIN_HEIGHT: u16 = 12;
/// Terminal width from which the profile sits beside the content.
pub const WIDE_BREAKPOINT: u16 = 100;
/// Content width from which projects are laid out two per row.
pub const PROJECT_COLUMNS_BREAKPOINT: u16 = 80;
/// Height of the compact profile header in the narrow layout.
pub const HEADER_HEIGHT: u16 = 4;

pub const SKILLS_HEADING: &str = "Skills";
pub const PROJECTS_HEADING: &str = "Featured Projects";

/// Columns between two project cards on the same row.
const PROJECT_GAP: u16 = 2;

/// Row of the experience heading, and offset from a heading to its body.
const HEADING_ROW: u16 = 0;
const HEADING_BODY_OFFSET: u16 = 2;

/// Which arrangement the terminal width selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// Profile column (1/3) beside the content column (2/3).
    Wide,
    /// Compact profile header above the content.
    Narrow,
}

/// Screen areas for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRegions {
    pub mode: PageMode,
    /// Profile panel or header.
    pub profile: Rect,
    /// Viewport of the scrolled content document.
    pub content: Rect,
    pub footer: Option<Rect>,
}

impl PageRegions {
    /// Compute regions for `area`. Returns `None` below the minimum size.
    pub fn compute(area: Rect, with_footer: bool) -> Option<Self> {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return None;
        }

        let (body, footer) = if with_footer {
            let [body, footer] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
            (body, Some(footer))
        } else {
            (area, None)
        };

        let (mode, profile, column) = if body.width >= WIDE_BREAKPOINT {
            let [profile, column] =
                Layout::horizontal([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
                    .areas(body);
            (PageMode::Wide, profile, column)
        } else {
            let [profile, column] =
                Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
                    .areas(body);
            (PageMode::Narrow, profile, column)
        };

        Some(Self {
            mode,
            profile,
            content: document_viewport(column),
            footer,
        })
    }
}

/// One cell of margin left, right and above the document.
fn document_viewport(column: Rect) -> Rect {
    Rect::new(
        column.x.saturating_add(1),
        column.y.saturating_add(1),
        column.width.saturating_sub(2),
        column.height.saturating_sub(1),
    )
}

/// Heading row plus body area of a section, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub heading: u16,
    pub area: Rect,
}

/// Project grid, in document coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectsSection {
    pub heading: u16,
    /// One rect per project, in project order.
    pub cards: Vec<Rect>,
}

/// A mouse position resolved to a timeline card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardHit {
    pub index: usize,
    /// Whether the position is on the card's toggle row.
    pub on_toggle: bool,
}

/// Positions of everything in the content document.
///
/// Rows are counted from the top of the document, before scrolling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub width: u16,
    pub experience_heading: u16,
    pub timeline_top: u16,
    /// Card positions relative to `timeline_top`.
    pub cards: Vec<CardLayout>,
    /// Absent when there are no skills.
    pub skills: Option<Section>,
    /// Absent when there are no projects.
    pub projects: Option<ProjectsSection>,
    pub total_height: u16,
}

impl PageLayout {
    /// Lay out the document for a content width.
    pub fn compute(
        portfolio: &Portfolio,
        timeline: &TimelineState,
        width: u16,
        bullet: &str,
    ) -> Self {
        let timeline_top = HEADING_ROW + HEADING_BODY_OFFSET;
        let cards = layout_cards(&portfolio.experience, timeline, width, bullet);
        let mut bottom = timeline_top.saturating_add(timeline_height(&cards));

        let mut skills = None;
        if !portfolio.skills.is_empty() {
            let heading = bottom.saturating_add(1);
            let top = heading.saturating_add(HEADING_BODY_OFFSET);
            let height = skills_box_height(&portfolio.skills, width);
            skills = Some(Section {
                heading,
                area: Rect::new(0, top, width, height),
            });
            bottom = top.saturating_add(height);
        }

        let mut projects = None;
        if !portfolio.projects.is_empty() {
            let heading = bottom.saturating_add(1);
            let columns = project_columns(width);
            let card_width = width.saturating_sub(PROJECT_GAP * (columns - 1)) / columns;
            let mut rects = Vec::with_capacity(portfolio.projects.len());
            let mut top = heading.saturating_add(HEADING_BODY_OFFSET);

            for row in portfolio.projects.chunks(usize::from(columns)) {
                let height = row
                    .iter()
                    .map(|project| project_card_height(project, card_width))
                    .max()
                    .unwrap_or(0);
                let mut x = 0;
                for _ in row {
                    rects.push(Rect::new(x, top, card_width, height));
                    x += card_width + PROJECT_GAP;
                }
                bottom = top.saturating_add(height);
                top = bottom.saturating_add(1);
            }

            projects = Some(ProjectsSection {
                heading,
                cards: rects,
            });
        }

        Self {
            width,
            experience_heading: HEADING_ROW,
            timeline_top,
            cards,
            skills,
            projects,
            total_height: bottom,
        }
    }

    /// Document rows `[top, bottom)` of a timeline card.
    pub fn card_span(&self, index: usize) -> Option<(u16, u16)> {
        let card = self.cards.get(index)?;
        Some((
            self.timeline_top.saturating_add(card.top),
            self.timeline_top.saturating_add(card.bottom()),
        ))
    }

    /// Resolve a document position to a timeline card.
    pub fn card_at(&self, x: u16, y: u16) -> Option<CardHit> {
        if x < GUTTER_WIDTH || x >= self.width {
            return None;
        }
        let row = y.checked_sub(self.timeline_top)?;
        self.cards
            .iter()
            .enumerate()
            .find(|(_, card)| card.contains_row(row))
            .map(|(index, card)| CardHit {
                index,
                on_toggle: row == card.toggle_row(),
            })
    }

    /// Largest useful scroll offset for a viewport height.
    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.total_height.saturating_sub(viewport_height)
    }
}

/// Project cards per row for a content width.
pub fn project_columns(width: u16) -> u16 {
    if width >= PROJECT_COLUMNS_BREAKPOINT {
        2
    } else {
        1
    }
}
