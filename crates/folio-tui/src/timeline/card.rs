//! Card layout for timeline items.
//!
//! Turns an [`ItemView`] into unstyled rows for a given content width. The
//! widget styles the rows; layout code only needs their count.

use folio_core::ExperienceRecord;

use super::item::{ItemPhase, ItemView};
use super::state::TimelineState;
use crate::text::{flow_chips, truncate_to_width, wrap_hanging, wrap_text};

/// Columns left of a card: date label, rail and spacing.
pub const GUTTER_WIDTH: u16 = 10;

/// Cells reserved for the date label inside the gutter.
pub const DATE_WIDTH: u16 = 7;

/// Column of the rail inside the gutter.
pub const RAIL_COLUMN: u16 = 8;

/// Border plus one cell of padding on each side.
pub const CARD_CHROME: u16 = 4;

/// Rows between two cards.
pub const CARD_GAP: u16 = 1;

/// Heading above the tag chips.
pub const TAGS_HEADING: &str = "Tech Stack:";

/// One unstyled row inside a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardRow {
    Title(String),
    Organization(String),
    Blank,
    Summary(String),
    /// Detail line, bullet or hanging indent included.
    Detail(String),
    TagsHeading,
    Tags(Vec<String>),
    Toggle(ItemPhase),
}

/// Date label wrapped to the date column, one entry per row.
pub fn date_lines(period: &str) -> Vec<String> {
    wrap_text(period, usize::from(DATE_WIDTH))
}

/// Build the rows of one card for the given content width.
///
/// Blank rows are added above the toggle when the wrapped date label runs
/// past the card. The label starts on the title row and may reach the
/// bottom border.
pub fn card_rows(view: &ItemView<'_>, content_width: usize, bullet: &str) -> Vec<CardRow> {
    let mut rows = vec![
        CardRow::Title(truncate_to_width(view.title, content_width)),
        CardRow::Organization(truncate_to_width(view.organization, content_width)),
        CardRow::Blank,
    ];
    rows.extend(
        wrap_text(view.summary, content_width)
            .into_iter()
            .map(CardRow::Summary),
    );

    let mut phase = ItemPhase::Collapsed;
    if let Some(detail) = view.detail {
        phase = ItemPhase::Expanded;
        let marker = format!("{bullet} ");

        if !detail.details.is_empty() {
            rows.push(CardRow::Blank);
            for item in detail.details {
                rows.extend(
                    wrap_hanging(&marker, item, content_width)
                        .into_iter()
                        .map(CardRow::Detail),
                );
            }
        }

        if let Some(tags) = detail.tags {
            rows.push(CardRow::Blank);
            rows.push(CardRow::TagsHeading);
            rows.extend(
                flow_chips(tags, content_width)
                    .into_iter()
                    .map(CardRow::Tags),
            );
        }
    }

    let date_rows = date_lines(view.period).len().saturating_sub(1);
    while rows.len() + 2 < date_rows {
        rows.push(CardRow::Blank);
    }

    rows.push(CardRow::Blank);
    rows.push(CardRow::Toggle(phase));
    rows
}

/// Position of one card inside the timeline, relative to its top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    /// First row of the card (its top border).
    pub top: u16,
    /// Rows including both borders.
    pub height: u16,
}

impl CardLayout {
    /// Row holding the toggle control.
    pub fn toggle_row(&self) -> u16 {
        self.top + self.height.saturating_sub(2)
    }

    /// Row holding the title (and the date label and rail dot).
    pub fn title_row(&self) -> u16 {
        self.top + 1
    }

    /// One past the last row of the card.
    pub fn bottom(&self) -> u16 {
        self.top + self.height
    }

    pub fn contains_row(&self, row: u16) -> bool {
        row >= self.top && row < self.bottom()
    }
}

/// Content width of a card inside a timeline of the given width.
pub fn card_content_width(timeline_width: u16) -> usize {
    usize::from(timeline_width.saturating_sub(GUTTER_WIDTH + CARD_CHROME).max(1))
}

/// Lay out every card of a timeline.
pub fn layout_cards(
    records: &[ExperienceRecord],
    state: &TimelineState,
    timeline_width: u16,
    bullet: &str,
) -> Vec<CardLayout> {
    let content_width = card_content_width(timeline_width);
    let mut top = 0u16;
    let mut layouts = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let item = state.item(index).copied().unwrap_or_default();
        let view = ItemView::new(record, &item);
        let rows = card_rows(&view, content_width, bullet).len();
        let height = u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2);

        layouts.push(CardLayout { top, height });
        top = top.saturating_add(height).saturating_add(CARD_GAP);
    }

    layouts
}

/// Total rows of a laid-out timeline. An empty timeline keeps one row for
/// its placeholder message.
pub fn timeline_height(layouts: &[CardLayout]) -> u16 {
    layouts.last().map_or(1, CardLayout::bottom)
}
