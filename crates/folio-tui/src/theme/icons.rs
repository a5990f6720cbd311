//! Icon sets for Nerd Fonts, Unicode, and ASCII fallback.
//!
//! Every glyph is a single terminal cell wide so layouts do not depend on
//! the icon mode.

use folio_core::{IconStyle, LinkKind};

/// Icon mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    /// Nerd Font icons (default, richest experience).
    #[default]
    Nerd,
    /// Standard Unicode symbols (wide compatibility).
    Unicode,
    /// ASCII-only fallback (maximum compatibility, also used with `NO_COLOR`).
    Ascii,
}

impl From<IconStyle> for IconMode {
    fn from(style: IconStyle) -> Self {
        match style {
            IconStyle::Nerd => Self::Nerd,
            IconStyle::Unicode => Self::Unicode,
            IconStyle::Ascii => Self::Ascii,
        }
    }
}

/// Icon set based on configured mode.
#[derive(Debug, Clone)]
pub struct IconSet {
    mode: IconMode,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

impl IconSet {
    /// Create a new icon set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Get the current icon mode.
    pub fn mode(&self) -> IconMode {
        self.mode
    }

    // === Toggle Icons ===

    /// Shown next to "Show More".
    pub fn chevron_down(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f078}",
            IconMode::Unicode => "▾",
            IconMode::Ascii => "v",
        }
    }

    /// Shown next to "Show Less".
    pub fn chevron_up(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f077}",
            IconMode::Unicode => "▴",
            IconMode::Ascii => "^",
        }
    }

    // === Timeline Icons ===

    pub fn timeline_dot(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => "●",
            IconMode::Ascii => "o",
        }
    }

    pub fn bullet(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => "•",
            IconMode::Ascii => "-",
        }
    }

    // === Link Icons ===

    pub fn github(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f09b}",
            IconMode::Unicode => "◆",
            IconMode::Ascii => "#",
        }
    }

    pub fn linkedin(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f0e1}",
            IconMode::Unicode => "■",
            IconMode::Ascii => "+",
        }
    }

    pub fn mail(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f0e0}",
            IconMode::Unicode => "✉",
            IconMode::Ascii => "@",
        }
    }

    pub fn globe(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f0ac}",
            IconMode::Unicode => "◎",
            IconMode::Ascii => "*",
        }
    }

    /// Icon for a profile link.
    pub fn link(&self, kind: LinkKind) -> &'static str {
        match kind {
            LinkKind::GitHub => self.github(),
            LinkKind::LinkedIn => self.linkedin(),
            LinkKind::Email => self.mail(),
            LinkKind::Website => self.globe(),
        }
    }

    // === Misc Icons ===

    pub fn help(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f059}",
            IconMode::Unicode | IconMode::Ascii => "?",
        }
    }
}
