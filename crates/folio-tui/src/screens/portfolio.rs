//! The portfolio page: profile, scrolled content document and footer.
//!
//! The content column is drawn into an offscreen buffer tall enough for the
//! whole document, then the rows under the scroll offset are copied into the
//! frame.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::{render_too_small, Screen};
use crate::app::PortfolioApp;
use crate::layout::{PageLayout, PageMode, PageRegions, PROJECTS_HEADING, SKILLS_HEADING};
use crate::text::truncate_to_width;
use crate::timeline::{timeline_height, TimelineWidget};
use crate::widgets::{
    selection_status, FooterHints, HelpOverlay, ProfileHeader, ProfilePanel, ProjectCard,
    SkillsBox,
};

pub struct PortfolioScreen;

impl Screen for PortfolioScreen {
    fn render(&self, app: &PortfolioApp, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(app.theme.base));

        let Some(regions) = PageRegions::compute(area, app.interactive) else {
            render_too_small(app, area, buf);
            return;
        };

        render_profile(app, &regions, buf);
        render_document(app, regions.content, buf);

        if let Some(footer) = regions.footer {
            let hints = if app.show_help {
                FooterHints::help_hints()
            } else {
                FooterHints::default_hints()
            };
            let status = selection_status(
                &app.portfolio.experience_heading,
                app.timeline.selected(),
                app.timeline.len(),
            );
            FooterHints::new(&hints, &app.theme)
                .status(status)
                .render(footer, buf);
        }

        if app.show_help {
            HelpOverlay::new(&app.theme, &app.icons, &app.borders).render(area, buf);
        }
    }
}

fn render_profile(app: &PortfolioApp, regions: &PageRegions, buf: &mut Buffer) {
    let profile = &app.portfolio.profile;
    match regions.mode {
        PageMode::Wide => {
            ProfilePanel::new(profile, &app.theme, &app.icons, &app.borders)
                .render(regions.profile, buf);
        }
        PageMode::Narrow => {
            ProfileHeader::new(profile, &app.theme, &app.icons, &app.borders)
                .render(regions.profile, buf);
        }
    }
}

/// Draw the document offscreen and copy the visible rows into `viewport`.
fn render_document(app: &PortfolioApp, viewport: Rect, buf: &mut Buffer) {
    let layout = app.page_layout(viewport.width);
    let document = draw_document(app, &layout);
    blit_rows(&document, app.scroll, viewport, buf);
}

/// Render the full content document at its natural height.
pub fn draw_document(app: &PortfolioApp, layout: &PageLayout) -> Buffer {
    let width = layout.width;
    let area = Rect::new(0, 0, width, layout.total_height.max(1));
    let mut doc = Buffer::empty(area);
    doc.set_style(area, Style::default().bg(app.theme.base));

    heading(
        &mut doc,
        layout.experience_heading,
        width,
        &app.portfolio.experience_heading,
        app,
    );
    let timeline_area = Rect::new(0, layout.timeline_top, width, timeline_height(&layout.cards));
    TimelineWidget::new(
        &app.portfolio.experience,
        &app.timeline,
        &app.theme,
        &app.icons,
        &app.borders,
    )
    .show_selection(app.interactive)
    .render(timeline_area, &mut doc);

    if let Some(skills) = layout.skills {
        heading(&mut doc, skills.heading, width, SKILLS_HEADING, app);
        SkillsBox::new(&app.portfolio.skills, &app.theme, &app.borders)
            .render(skills.area, &mut doc);
    }

    if let Some(projects) = &layout.projects {
        heading(&mut doc, projects.heading, width, PROJECTS_HEADING, app);
        for (project, rect) in app.portfolio.projects.iter().zip(&projects.cards) {
            ProjectCard::new(project, &app.theme, &app.icons, &app.borders).render(*rect, &mut doc);
        }
    }

    doc
}

fn heading(doc: &mut Buffer, y: u16, width: u16, text: &str, app: &PortfolioApp) {
    doc.set_string(
        0,
        y,
        truncate_to_width(text, usize::from(width)),
        Style::default()
            .fg(app.theme.primary)
            .add_modifier(Modifier::BOLD),
    );
}

/// Copy rows `[scroll, scroll + viewport.height)` of `doc` into `viewport`.
fn blit_rows(doc: &Buffer, scroll: u16, viewport: Rect, buf: &mut Buffer) {
    for row in 0..viewport.height {
        let src_y = scroll.saturating_add(row);
        if src_y >= doc.area.height {
            break;
        }
        for col in 0..viewport.width.min(doc.area.width) {
            let Some(src) = doc.cell((col, src_y)) else {
                continue;
            };
            if let Some(dst) = buf.cell_mut((viewport.x + col, viewport.y + row)) {
                *dst = src.clone();
            }
        }
    }
}
