// Section tabs component
//
// The three-way switcher. Selecting a tab is the only section transition in
// the app; the highlighted tab always matches App::section.

use crate::tui::app::{App, Section};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the section tab bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<String> = Section::all()
        .iter()
        .enumerate()
        .map(|(i, section)| format!(" {}│{} {} ", i + 1, section.icon(), section.name()))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .select(app.section.index())
        .style(Style::default().fg(app.theme.foreground))
        .highlight_style(
            Style::default()
                .fg(app.theme.section_color(app.section))
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}
