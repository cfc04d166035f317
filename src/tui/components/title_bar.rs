// Title bar component
//
// Renders the page heading, with the tagline when the terminal is wide
// enough to carry it.

use crate::content;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let mut spans = vec![Span::styled(
        format!(" 🐕 {}", content::PAGE_HEADING),
        Style::default()
            .fg(app.theme.title)
            .add_modifier(Modifier::BOLD),
    )];

    if bp.at_least(Breakpoint::Normal) {
        spans.push(Span::styled(
            format!("  ──  {}", content::PAGE_TAGLINE),
            Style::default().fg(app.theme.muted),
        ));
    }

    let title = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.title))
            .title_top(Line::from(" ? ").right_aligned()),
    );

    f.render_widget(title, area);
}
