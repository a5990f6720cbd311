//! Timeline widget for rendering experience cards.

use folio_core::ExperienceRecord;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Widget},
};

use super::card::{
    card_rows, date_lines, layout_cards, CardLayout, CardRow, CARD_GAP, DATE_WIDTH,
    GUTTER_WIDTH, RAIL_COLUMN, TAGS_HEADING,
};
use super::item::{ItemPhase, ItemView};
use super::state::TimelineState;
use crate::text::{truncate_to_width, visual_width};
use crate::theme::{BorderSet, IconSet, Theme};

/// Vertical timeline of experience cards.
///
/// Cards are drawn from the top of the area; whatever does not fit is
/// clipped. Callers that scroll render into a buffer tall enough for
/// [`timeline_height`](super::timeline_height) rows.
pub struct TimelineWidget<'a> {
    records: &'a [ExperienceRecord],
    state: &'a TimelineState,
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
    /// Whether to highlight the selected card.
    show_selection: bool,
}

impl<'a> TimelineWidget<'a> {
    /// Create a new timeline widget.
    pub fn new(
        records: &'a [ExperienceRecord],
        state: &'a TimelineState,
        theme: &'a Theme,
        icons: &'a IconSet,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            records,
            state,
            theme,
            icons,
            borders,
            show_selection: true,
        }
    }

    /// Set whether the selected card is highlighted.
    #[must_use]
    pub fn show_selection(mut self, show: bool) -> Self {
        self.show_selection = show;
        self
    }

    fn is_selected(&self, index: usize) -> bool {
        self.show_selection && self.state.selected() == Some(index)
    }

    /// Date label, wrapped and right-aligned in the gutter from the title
    /// row down.
    fn render_date(&self, period: &str, card: CardLayout, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(self.theme.muted);
        let first = area.y.saturating_add(card.title_row());

        for (line, y) in date_lines(period).into_iter().zip(first..area.bottom()) {
            let label = truncate_to_width(&line, usize::from(DATE_WIDTH));
            let pad = usize::from(DATE_WIDTH).saturating_sub(visual_width(&label));
            let x = area.x + u16::try_from(pad).unwrap_or(0);
            buf.set_string(x, y, label, style);
        }
    }

    /// Rail segment for one card, with the dot on its title row.
    fn render_rail(&self, card: CardLayout, last: bool, area: Rect, buf: &mut Buffer) {
        let x = area.x + RAIL_COLUMN;
        let rail_style = Style::default().fg(self.theme.border);

        // The last card only gets its dot.
        if !last {
            let end = card.bottom().saturating_add(CARD_GAP);
            for row in card.top..end {
                let y = area.y.saturating_add(row);
                if y >= area.bottom() {
                    break;
                }
                buf.set_string(x, y, self.borders.rail(), rail_style);
            }
        }

        let y = area.y.saturating_add(card.title_row());
        if y < area.bottom() {
            buf.set_string(
                x,
                y,
                self.icons.timeline_dot(),
                Style::default().fg(self.theme.primary),
            );
        }
    }

    fn render_card(&self, index: usize, card: CardLayout, area: Rect, buf: &mut Buffer) {
        let Some(record) = self.records.get(index) else {
            return;
        };
        let y = area.y.saturating_add(card.top);
        if y >= area.bottom() || area.width <= GUTTER_WIDTH {
            return;
        }

        let selected = self.is_selected(index);
        let rect = Rect::new(
            area.x + GUTTER_WIDTH,
            y,
            area.width - GUTTER_WIDTH,
            card.height.min(area.bottom() - y),
        );

        let border_color = if selected {
            self.theme.border_focused
        } else {
            self.theme.border
        };
        let block = Block::bordered()
            .border_set(self.borders.card(selected))
            .border_style(Style::default().fg(border_color))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(self.theme.base));
        let inner = block.inner(rect);
        block.render(rect, buf);

        let item = self.state.item(index).copied().unwrap_or_default();
        let view = ItemView::new(record, &item);
        let rows = card_rows(&view, usize::from(inner.width), self.icons.bullet());

        for (row, y) in rows.into_iter().zip(inner.y..inner.bottom()) {
            let line = styled_row(row, self.theme, self.icons, selected);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}

/// One row of tag chips, separated by single spaces.
pub(crate) fn chip_line(chips: Vec<String>, theme: &Theme) -> Line<'static> {
    let chip_style = Style::default().fg(theme.primary).bg(theme.surface);
    let mut spans = Vec::with_capacity(chips.len() * 2);
    for (i, chip) in chips.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(chip, chip_style));
    }
    Line::from(spans)
}

/// Style one card row into a line.
pub(crate) fn styled_row(
    row: CardRow,
    theme: &Theme,
    icons: &IconSet,
    selected: bool,
) -> Line<'static> {
    match row {
        CardRow::Title(title) => Line::from(Span::styled(
            title,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        CardRow::Organization(org) => {
            Line::from(Span::styled(org, Style::default().fg(theme.secondary)))
        }
        CardRow::Blank => Line::default(),
        CardRow::Summary(text) | CardRow::Detail(text) => {
            Line::from(Span::styled(text, Style::default().fg(theme.subtext)))
        }
        CardRow::TagsHeading => Line::from(Span::styled(
            TAGS_HEADING,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        CardRow::Tags(chips) => chip_line(chips, theme),
        CardRow::Toggle(phase) => {
            let chevron = match phase {
                ItemPhase::Collapsed => icons.chevron_down(),
                ItemPhase::Expanded => icons.chevron_up(),
            };
            let mut style = Style::default().fg(theme.primary);
            if selected {
                style = style.add_modifier(Modifier::BOLD);
            }
            Line::from(vec![
                Span::styled(phase.toggle_label(), style),
                Span::raw(" "),
                Span::styled(chevron, style),
            ])
        }
    }
}

impl Widget for TimelineWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if self.records.is_empty() {
            buf.set_string(
                area.x,
                area.y,
                truncate_to_width("No experience yet", usize::from(area.width)),
                Style::default().fg(self.theme.muted),
            );
            return;
        }

        let layouts = layout_cards(self.records, self.state, area.width, self.icons.bullet());
        let last = layouts.len() - 1;

        for (index, card) in layouts.into_iter().enumerate() {
            if area.y.saturating_add(card.top) >= area.bottom() {
                break;
            }
            if let Some(record) = self.records.get(index) {
                self.render_date(&record.period, card, area, buf);
            }
            self.render_rail(card, index == last, area, buf);
            self.render_card(index, card, area, buf);
        }
    }
}
