// Frame composition
//
// One view, one layout: title bar, search bar, section tabs, the active
// content panel inside its container, status bar. Exactly one content panel
// renders per frame, selected by App::section. Modal and toast overlay last.

use crate::tui::app::{App, Focus, Section};
use crate::tui::components;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Theme background for the whole frame
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title bar
            Constraint::Length(3), // search bar
            Constraint::Length(3), // section tabs
            Constraint::Min(8),    // content container
            Constraint::Length(2), // status bar
        ])
        .split(f.area());

    components::title_bar::render(f, chunks[0], app);
    app.search
        .render(f, chunks[1], &app.theme, app.focus == Focus::Search);
    components::section_tabs::render(f, chunks[2], app);
    render_content(f, chunks[3], app);
    components::status_bar::render(f, chunks[4], app);

    // Modal overlay (on top of everything)
    // Take modal temporarily to avoid borrow conflict with mutable app
    if let Some(modal) = app.modal.take() {
        modal.render(f, &app.theme);
        app.modal = Some(modal);
    }

    // Toast notification (on top of modal too)
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    // Clear expired toast after render
    app.clear_expired_toast();
}

/// Render the active section inside its container card
fn render_content(f: &mut Frame, area: Rect, app: &App) {
    let section_color = app.theme.section_color(app.section);
    let border_color = if app.focus == Focus::Content {
        section_color
    } else {
        app.theme.border
    };

    let container = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            format!(" {} ", app.section.heading()),
            Style::default()
                .fg(section_color)
                .add_modifier(Modifier::BOLD),
        ));

    let inner = container.inner(area);
    f.render_widget(container, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(inner);

    let blurb = Paragraph::new(Line::from(Span::styled(
        app.section.blurb(),
        Style::default().fg(app.theme.muted),
    )));
    f.render_widget(blurb, parts[0]);

    let entrance = app.entrance_frames();
    match app.section {
        Section::Breeds => app.breeds_panel.render(f, parts[1], &app.theme, entrance),
        Section::Facts => app.facts_panel.render(f, parts[1], &app.theme, entrance),
        Section::Care => app.care_panel.render(f, parts[1], &app.theme, entrance),
    }
}
