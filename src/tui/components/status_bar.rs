// Status bar component
//
// Bottom line: uptime, active section and card count, the captured search
// text, the most recent warning (if any), and key hints on wide terminals.

use crate::tui::app::{App, Focus};
use crate::tui::layout::Breakpoint;
use crate::util::ellipsize;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: full format with key hints
/// - Narrow: compact format
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let search_info = if app.search_text().is_empty() {
        String::new()
    } else {
        // The text is shown, not consumed - there is no filter to report on
        format!(" │ 🔍 \"{}\"", ellipsize(app.search_text(), 24))
    };

    let warn_info = match app.log_buffer.last_warning() {
        Some(entry) => format!(
            " │ ⚠ {} {}",
            entry.level.as_str(),
            ellipsize(&entry.message, 32)
        ),
        None => String::new(),
    };

    let status_text = if !bp.at_least(Breakpoint::Wide) {
        format!(
            " {} │ {} {} │ {} cards{}{}",
            app.uptime(),
            app.section.icon(),
            app.section.name(),
            app.section.card_count(),
            search_info,
            warn_info,
        )
    } else {
        let hints = match app.focus {
            Focus::Search => "Esc:done  Tab:section",
            Focus::Content => "1-3:section  /:search  ↑↓:select  Enter:detail  y:copy  q:quit",
        };
        format!(
            " {} │ {} {} │ {} cards{}{} │ {}",
            app.uptime(),
            app.section.icon(),
            app.section.name(),
            app.section.card_count(),
            search_info,
            warn_info,
            hints,
        )
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
