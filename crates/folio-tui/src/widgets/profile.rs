//! Profile panel (side column) and compact profile header (narrow layout).

use folio_core::Profile;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use super::pane::Pane;
use crate::text::{truncate_to_width, visual_width};
use crate::theme::{BorderSet, IconSet, Theme};

/// Label of the email call to action.
pub const CONTACT_LABEL: &str = "Contact Me";

/// Up to two uppercase initials, standing in for the avatar picture.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Full profile panel for the wide layout.
pub struct ProfilePanel<'a> {
    profile: &'a Profile,
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
}

impl<'a> ProfilePanel<'a> {
    pub fn new(
        profile: &'a Profile,
        theme: &'a Theme,
        icons: &'a IconSet,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            profile,
            theme,
            icons,
            borders,
        }
    }

    /// Panel content for the given content width.
    pub fn lines(&self, width: usize) -> Vec<Line<'a>> {
        let fit = |text: &str| truncate_to_width(text, width);
        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled(
                format!("( {} )", initials(&self.profile.name)),
                Style::default()
                    .fg(self.theme.base)
                    .bg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::default(),
            Line::from(Span::styled(
                fit(&self.profile.name),
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(Span::styled(
                fit(&self.profile.headline),
                Style::default().fg(self.theme.subtext),
            ))
            .centered(),
        ];

        if let Some(email) = self.profile.contact_email() {
            let button = Style::default()
                .fg(self.theme.base)
                .bg(self.theme.secondary)
                .add_modifier(Modifier::BOLD);
            lines.push(Line::default());
            lines.push(
                Line::from(Span::styled(
                    format!(" {} {CONTACT_LABEL} ", self.icons.mail()),
                    button,
                ))
                .centered(),
            );
            lines.push(
                Line::from(Span::styled(fit(email), Style::default().fg(self.theme.muted)))
                    .centered(),
            );
        }

        if !self.profile.links.is_empty() {
            lines.push(Line::default());
        }
        for link in &self.profile.links {
            lines.push(Line::from(vec![
                Span::styled(
                    self.icons.link(link.kind),
                    Style::default().fg(self.theme.primary),
                ),
                Span::raw(" "),
                Span::styled(link.kind.label(), Style::default().fg(self.theme.text)),
            ]));
            lines.push(Line::from(Span::styled(
                fit(&format!("  {}", link.display_target())),
                Style::default().fg(self.theme.muted),
            )));
        }

        lines
    }

    /// Rows the panel needs to show everything, border included.
    pub fn height(&self, width: u16) -> u16 {
        let content_width = usize::from(width.saturating_sub(Pane::CHROME_WIDTH));
        u16::try_from(self.lines(content_width).len())
            .unwrap_or(u16::MAX)
            .saturating_add(Pane::CHROME_HEIGHT)
    }
}

impl Widget for ProfilePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines(usize::from(area.width.saturating_sub(Pane::CHROME_WIDTH)));
        Pane::new(self.theme, self.borders)
            .lines(lines)
            .render(area, buf);
    }
}

/// Two-line profile header for narrow terminals.
pub struct ProfileHeader<'a> {
    profile: &'a Profile,
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
}

impl<'a> ProfileHeader<'a> {
    pub fn new(
        profile: &'a Profile,
        theme: &'a Theme,
        icons: &'a IconSet,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            profile,
            theme,
            icons,
            borders,
        }
    }

    /// Name and headline, then as many links as fit on one row.
    pub fn lines(&self, width: usize) -> Vec<Line<'a>> {
        let name = truncate_to_width(&self.profile.name, width);
        let rest = width.saturating_sub(visual_width(&name) + 3);
        let mut first = vec![Span::styled(
            name,
            Style::default()
                .fg(self.theme.text)
                .add_modifier(Modifier::BOLD),
        )];
        if rest > 0 {
            first.push(Span::styled(" · ", Style::default().fg(self.theme.muted)));
            first.push(Span::styled(
                truncate_to_width(&self.profile.headline, rest),
                Style::default().fg(self.theme.subtext),
            ));
        }

        let mut links = Vec::new();
        let mut used = 0;
        for link in &self.profile.links {
            let target = link.display_target();
            let gap = if links.is_empty() { 0 } else { 2 };
            let needed = gap + 2 + visual_width(target);
            if used + needed > width {
                break;
            }
            if gap > 0 {
                links.push(Span::raw("  "));
            }
            links.push(Span::styled(
                self.icons.link(link.kind),
                Style::default().fg(self.theme.primary),
            ));
            links.push(Span::raw(" "));
            links.push(Span::styled(target, Style::default().fg(self.theme.muted)));
            used += needed;
        }

        vec![Line::from(first), Line::from(links)]
    }
}

impl Widget for ProfileHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines(usize::from(area.width.saturating_sub(Pane::CHROME_WIDTH)));
        Pane::new(self.theme, self.borders)
            .lines(lines)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use crate::theme::IconMode;
    use folio_core::{ContactLink, LinkKind};

    fn profile() -> Profile {
        Profile {
            name: "John Doe".into(),
            headline: "Full Stack Developer".into(),
            avatar_url: None,
            links: vec![
                ContactLink::new(LinkKind::GitHub, "https://github.com/johndoe"),
                ContactLink::new(LinkKind::Email, "mailto:johndoe@example.com"),
            ],
        }
    }

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("ada"), "A");
        assert_eq!(initials("  Mary Ann Lee "), "MA");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_panel_lines() {
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);
        let borders = BorderSet::new(IconMode::Ascii);
        let profile = profile();
        let panel = ProfilePanel::new(&profile, &theme, &icons, &borders);

        let lines = text(&panel.lines(30));
        assert_eq!(
            lines,
            vec![
                "",
                "( JD )",
                "",
                "John Doe",
                "Full Stack Developer",
                "",
                " @ Contact Me ",
                "johndoe@example.com",
                "",
                "# GitHub",
                "  github.com/johndoe",
                "@ Email",
                "  johndoe@example.com",
            ]
        );
        assert_eq!(panel.height(34), 15);
    }

    #[test]
    fn test_panel_without_email_has_no_contact_button() {
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);
        let borders = BorderSet::new(IconMode::Ascii);
        let mut profile = profile();
        profile.links.retain(|link| link.kind != LinkKind::Email);
        let panel = ProfilePanel::new(&profile, &theme, &icons, &borders);

        let lines = text(&panel.lines(30));
        assert!(!lines.iter().any(|line| line.contains(CONTACT_LABEL)));
    }

    #[test]
    fn test_header_fits_links() {
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);
        let borders = BorderSet::new(IconMode::Ascii);
        let profile = profile();
        let header = ProfileHeader::new(&profile, &theme, &icons, &borders);

        let lines = text(&header.lines(60));
        assert_eq!(lines[0], "John Doe · Full Stack Developer");
        assert_eq!(lines[1], "# github.com/johndoe  @ johndoe@example.com");

        // Second link no longer fits
        let lines = text(&header.lines(30));
        assert_eq!(lines[1], "# github.com/johndoe");
    }

    #[test]
    fn test_header_render() {
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);
        let borders = BorderSet::new(IconMode::Ascii);
        let profile = profile();
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);

        ProfileHeader::new(&profile, &theme, &icons, &borders).render(area, &mut buf);
        let output = buffer_to_string(&buf);
        assert!(output.contains("John Doe · Full Stack Developer"));
        assert!(output.contains("# github.com/johndoe"));
    }
}
