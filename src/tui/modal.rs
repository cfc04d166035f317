//! Modal overlays: card detail and help
//!
//! While a modal is open it absorbs all input. Closing a modal restores the
//! underlying view untouched.

use crate::content;
use crate::theme::Theme;
use crate::tui::app::Section;
use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Modal overlay state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Full card text for one catalog entry
    Detail { section: Section, index: usize },
    /// Keybinding reference
    Help,
}

/// What the app should do with a key pressed while a modal is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    None,
    Close,
    CopyReadable,
    CopyJson,
}

impl Modal {
    pub fn detail(section: Section, index: usize) -> Self {
        Self::Detail { section, index }
    }

    pub fn help() -> Self {
        Self::Help
    }

    /// Map a key press to a modal action
    pub fn handle_input(&self, key: KeyCode) -> ModalAction {
        match key {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => ModalAction::Close,
            KeyCode::Char('y') => match self {
                Modal::Detail { .. } => ModalAction::CopyReadable,
                Modal::Help => ModalAction::None,
            },
            KeyCode::Char('Y') => match self {
                Modal::Detail { .. } => ModalAction::CopyJson,
                Modal::Help => ModalAction::None,
            },
            _ => ModalAction::None,
        }
    }

    /// Render the modal centered over the current frame
    pub fn render(&self, f: &mut Frame, theme: &Theme) {
        match self {
            Modal::Detail { section, index } => render_detail(f, theme, *section, *index),
            Modal::Help => render_help(f, theme),
        }
    }
}

/// Centered popup area
fn centered_rect(frame_area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(frame_area.width.saturating_sub(4));
    let height = height.min(frame_area.height.saturating_sub(2));
    let x = frame_area.x + (frame_area.width.saturating_sub(width)) / 2;
    let y = frame_area.y + (frame_area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn render_detail(f: &mut Frame, theme: &Theme, section: Section, index: usize) {
    let accent = theme.section_color(section);

    let (title, lines): (String, Vec<Line>) = match section {
        Section::Breeds => {
            let Some(breed) = content::BREEDS.get(index) else {
                return;
            };
            (
                format!(" {} ", breed.name),
                vec![
                    Line::from(Span::styled(
                        content::image_url(breed.name),
                        Style::default().fg(theme.accent),
                    )),
                    Line::from(""),
                    Line::from(breed.description),
                ],
            )
        }
        Section::Facts => {
            let Some(fact) = content::FACTS.get(index) else {
                return;
            };
            (
                format!(" Fact #{} ", index + 1),
                vec![Line::from(vec![
                    Span::styled("ℹ ", Style::default().fg(theme.accent)),
                    Span::raw(*fact),
                ])],
            )
        }
        Section::Care => {
            let Some(tip) = content::CARE_TIPS.get(index) else {
                return;
            };
            (format!(" {} ", tip.title), vec![Line::from(tip.content)])
        }
    };

    let area = centered_rect(f.area(), 64, (lines.len() as u16) + 4);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(accent))
        .title(Span::styled(
            title,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(
            Line::from(Span::styled(
                " Esc:close  y:copy  Y:copy json ",
                Style::default().fg(theme.muted),
            ))
            .right_aligned(),
        );

    let body = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(theme.foreground).bg(theme.background))
        .block(block);

    f.render_widget(Clear, area);
    f.render_widget(body, area);
}

fn render_help(f: &mut Frame, theme: &Theme) {
    let rows = [
        ("1-3, Tab, ←/→", "switch section"),
        ("/", "focus the search box"),
        ("↑/↓, j/k", "move card selection"),
        ("g / G", "first / last card"),
        ("Enter", "open card detail"),
        ("y / Y", "copy card as text / JSON"),
        ("Esc", "clear selection, close overlays"),
        ("q", "quit"),
    ];

    let lines: Vec<Line> = rows
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!(" {:<14}", keys), Style::default().fg(theme.accent)),
                Span::styled(*what, Style::default().fg(theme.foreground)),
            ])
        })
        .collect();

    let area = centered_rect(f.area(), 48, (lines.len() as u16) + 2);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.highlight))
        .title(Span::styled(
            " Keys ",
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        ));

    let body = Paragraph::new(Text::from(lines))
        .style(Style::default().bg(theme.background))
        .block(block);

    f.render_widget(Clear, area);
    f.render_widget(body, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_keys() {
        let modal = Modal::detail(Section::Breeds, 0);
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Enter), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('q')), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('x')), ModalAction::None);
    }

    #[test]
    fn copy_only_from_detail() {
        let detail = Modal::detail(Section::Care, 2);
        assert_eq!(detail.handle_input(KeyCode::Char('y')), ModalAction::CopyReadable);
        assert_eq!(detail.handle_input(KeyCode::Char('Y')), ModalAction::CopyJson);

        let help = Modal::help();
        assert_eq!(help.handle_input(KeyCode::Char('y')), ModalAction::None);
    }

    #[test]
    fn centered_rect_stays_inside() {
        let frame = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(frame, 64, 10);
        assert!(rect.right() <= frame.right());
        assert!(rect.bottom() <= frame.bottom());

        // Oversized request is clamped
        let rect = centered_rect(frame, 200, 50);
        assert!(rect.width <= 76);
        assert!(rect.height <= 22);
    }
}
