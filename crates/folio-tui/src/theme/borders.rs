//! Border glyphs for cards and the timeline rail.
//!
//! ASCII mode (also picked by `NO_COLOR`) uses pure 7-bit characters so the
//! page survives terminals and pipes without box-drawing support.

use ratatui::symbols::border;

use super::icons::IconMode;

/// 7-bit card border.
const ASCII_CARD: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

/// 7-bit border for the selected card.
const ASCII_CARD_SELECTED: border::Set = border::Set {
    top_left: "#",
    top_right: "#",
    bottom_left: "#",
    bottom_right: "#",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "=",
    horizontal_bottom: "=",
};

/// Border set based on icon mode.
#[derive(Debug, Clone)]
pub struct BorderSet {
    mode: IconMode,
}

impl Default for BorderSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

impl BorderSet {
    /// Create a new border set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Get the current mode.
    pub fn mode(&self) -> IconMode {
        self.mode
    }

    /// Card border, thicker when the card is selected.
    pub fn card(&self, selected: bool) -> border::Set {
        match (self.mode, selected) {
            (IconMode::Nerd | IconMode::Unicode, false) => border::ROUNDED,
            (IconMode::Nerd | IconMode::Unicode, true) => border::THICK,
            (IconMode::Ascii, false) => ASCII_CARD,
            (IconMode::Ascii, true) => ASCII_CARD_SELECTED,
        }
    }

    /// Vertical line connecting timeline entries.
    pub fn rail(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => "│",
            IconMode::Ascii => "|",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_nerd_mode() {
        let borders = BorderSet::default();
        assert_eq!(borders.mode(), IconMode::Nerd);
    }

    #[test]
    fn test_unicode_cards() {
        let borders = BorderSet::new(IconMode::Unicode);
        assert_eq!(borders.card(false).top_left, "╭");
        assert_eq!(borders.card(true).top_left, "┏");
        assert_eq!(borders.rail(), "│");
    }

    #[test]
    fn test_ascii_cards_are_seven_bit() {
        let borders = BorderSet::new(IconMode::Ascii);
        for selected in [false, true] {
            let set = borders.card(selected);
            for glyph in [
                set.top_left,
                set.top_right,
                set.bottom_left,
                set.bottom_right,
                set.vertical_left,
                set.horizontal_top,
            ] {
                assert!(glyph.is_ascii(), "{glyph:?} is not ASCII");
            }
        }
        assert_eq!(borders.rail(), "|");
    }

    #[test]
    fn test_nerd_same_as_unicode_cards() {
        let nerd = BorderSet::new(IconMode::Nerd);
        let unicode = BorderSet::new(IconMode::Unicode);

        assert_eq!(nerd.card(false).top_left, unicode.card(false).top_left);
        assert_eq!(nerd.card(true).top_left, unicode.card(true).top_left);
    }
}
