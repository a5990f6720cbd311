//! Timeline state management.
//!
//! Holds one [`TimelineItemState`] per experience record, indexed by the
//! record's position, plus the keyboard selection.

use super::item::TimelineItemState;

/// Timeline state for a fixed list of records.
#[derive(Debug, Default, Clone)]
pub struct TimelineState {
    /// Item states, parallel to the record list.
    items: Vec<TimelineItemState>,
    /// Index of the card keyboard activation applies to.
    selected: Option<usize>,
}

impl TimelineState {
    /// Create state for `len` records, all collapsed, first one selected.
    pub fn new(len: usize) -> Self {
        Self {
            items: vec![TimelineItemState::new(); len],
            selected: (len > 0).then_some(0),
        }
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the timeline is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// State of the item at `index`.
    pub fn item(&self, index: usize) -> Option<&TimelineItemState> {
        self.items.get(index)
    }

    /// Whether the item at `index` is expanded. Out of range reads as collapsed.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.items
            .get(index)
            .is_some_and(TimelineItemState::is_expanded)
    }

    /// Toggle the item at `index`. Returns the new expanded flag, or `None`
    /// if there is no such item.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let expanded = self.items.get_mut(index)?.toggle();
        tracing::debug!(index, expanded, "Toggled timeline item");
        Some(expanded)
    }

    /// Toggle the selected item.
    pub fn toggle_selected(&mut self) -> Option<bool> {
        self.toggle(self.selected?)
    }

    /// Get the currently selected index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Select a specific item by index. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = Some(index);
            tracing::trace!(index, "Selected timeline item");
        }
    }

    /// Move selection up. Stops at first item (no wrap).
    pub fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }

        match self.selected {
            Some(0) => {}
            Some(i) => self.select(i - 1),
            None => self.select(self.items.len() - 1),
        }
    }

    /// Move selection down. Stops at last item (no wrap).
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }

        match self.selected {
            Some(i) if i + 1 >= self.items.len() => {}
            Some(i) => self.select(i + 1),
            None => self.select(0),
        }
    }

    /// Jump to first item.
    pub fn jump_to_start(&mut self) {
        self.select(0);
    }

    /// Jump to last item.
    pub fn jump_to_end(&mut self) {
        if let Some(last) = self.items.len().checked_sub(1) {
            self.select(last);
        }
    }

    /// Iterate over item states in record order.
    pub fn iter(&self) -> impl Iterator<Item = &TimelineItemState> {
        self.items.iter()
    }
}
