//! Search bar component
//!
//! The input captures every keystroke into its buffer. Nothing reads the
//! buffer back as a filter predicate - the catalogs render unfiltered no
//! matter what is typed here. That mirrors the behavior this app
//! reimplements; resist the urge to wire it up.

use crate::theme::Theme;
use crate::tui::traits::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PLACEHOLDER: &str = "Search for dog information...";

pub struct SearchBar {
    text: String,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Current input text. Unvalidated, unbounded, possibly empty.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let border_color = if focused {
            theme.highlight
        } else {
            theme.border
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(" Search ", Style::default().fg(border_color)));

        // Keep the tail visible when the text outgrows the box
        let budget = area.width.saturating_sub(6) as usize;
        let mut visible = self.text.as_str();
        while visible.width() > budget && !visible.is_empty() {
            let mut chars = visible.chars();
            chars.next();
            visible = chars.as_str();
        }

        let line = if self.text.is_empty() && !focused {
            Line::from(vec![
                Span::styled("🔍 ", Style::default().fg(theme.muted)),
                Span::styled(PLACEHOLDER, Style::default().fg(theme.muted)),
            ])
        } else {
            let mut spans = vec![
                Span::styled("🔍 ", Style::default().fg(theme.accent)),
                Span::styled(visible.to_string(), Style::default().fg(theme.foreground)),
            ];
            if focused {
                spans.push(Span::styled(
                    "▌",
                    Style::default()
                        .fg(theme.highlight)
                        .add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            Line::from(spans)
        };

        f.render_widget(Paragraph::new(line).block(block), area);
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Interactive for SearchBar {
    /// Every accepted keystroke rewrites the buffer in place: no debounce,
    /// no trimming, no case normalization.
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        // Leave ctrl-modified chords (ctrl-c etc.) to the shell/app
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Handled::No;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.text.push(c);
                Handled::Yes
            }
            KeyCode::Backspace => {
                self.text.pop();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }
}
