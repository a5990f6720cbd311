//! Per-item expand/collapse state and the render decision built from it.
//!
//! An item owns exactly one flag. [`ItemView`] turns a record plus that flag
//! into what should be on screen, with no styling or layout involved.

use folio_core::ExperienceRecord;

/// Toggle label while collapsed.
pub const SHOW_MORE: &str = "Show More";

/// Toggle label while expanded.
pub const SHOW_LESS: &str = "Show Less";

/// The two display states of a timeline item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemPhase {
    #[default]
    Collapsed,
    Expanded,
}

impl ItemPhase {
    /// Label of the toggle control in this phase.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Collapsed => SHOW_MORE,
            Self::Expanded => SHOW_LESS,
        }
    }
}

/// Local state of one rendered timeline item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimelineItemState {
    expanded: bool,
}

impl TimelineItemState {
    /// A fresh, collapsed item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip between collapsed and expanded. Returns the new flag.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn phase(&self) -> ItemPhase {
        if self.expanded {
            ItemPhase::Expanded
        } else {
            ItemPhase::Collapsed
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        self.phase().toggle_label()
    }
}

/// Content shown only while an item is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailView<'a> {
    /// Bullet points, in record order.
    pub details: &'a [String],
    /// Tag chips, in record order. `None` means no tag block at all.
    pub tags: Option<&'a [String]>,
}

/// What one timeline item shows for its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemView<'a> {
    pub period: &'a str,
    pub title: &'a str,
    pub organization: &'a str,
    pub summary: &'a str,
    /// Present if and only if the item is expanded.
    pub detail: Option<DetailView<'a>>,
    pub toggle_label: &'static str,
}

impl<'a> ItemView<'a> {
    pub fn new(record: &'a ExperienceRecord, state: &TimelineItemState) -> Self {
        let detail = state.is_expanded().then(|| DetailView {
            details: &record.details,
            tags: record.tags(),
        });

        Self {
            period: &record.period,
            title: &record.title,
            organization: &record.organization,
            summary: &record.summary,
            detail,
            toggle_label: state.toggle_label(),
        }
    }
}
