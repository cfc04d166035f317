// UI components
//
// - title_bar: page heading and tagline
// - search_bar: the (captured, never consumed) search input
// - section_tabs: three-way section switcher
// - breeds_panel / facts_panel / care_panel: content panels, one per section
// - status_bar: uptime, card count, key hints
// - toast: transient notification overlay
//
// Card rendering is shared: each panel maps its fixed catalog to a Vec<Card>
// (a pure, order-preserving expansion) and hands it to render_cards.

mod breeds_panel;
mod care_panel;
mod facts_panel;
mod search_bar;
pub mod section_tabs;
pub mod status_bar;
pub mod title_bar;
mod toast;

pub use breeds_panel::BreedsPanel;
pub use care_panel::CarePanel;
pub use facts_panel::FactsPanel;
pub use search_bar::SearchBar;
pub use toast::Toast;

use super::traits::Handled;
use crate::theme::Theme;
use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// One rendered card: optional title on the border, body lines inside.
/// `height` includes the borders.
pub struct Card {
    pub title: Option<&'static str>,
    pub lines: Vec<Line<'static>>,
    pub height: u16,
}

/// First card index to draw so the selected card stays visible.
/// With no selection the list is anchored to the top (this is a page, not a
/// log - new content never arrives).
fn first_visible_card(cards: &[Card], selected: Option<usize>, viewport: u16) -> usize {
    let Some(sel) = selected else {
        return 0;
    };
    let sel = sel.min(cards.len().saturating_sub(1));

    let mut start = 0;
    while start < sel {
        let used: u16 = cards[start..=sel].iter().map(|c| c.height).sum();
        if used <= viewport {
            break;
        }
        start += 1;
    }
    start
}

/// Render a card list into `area`, keeping the selection visible.
///
/// The entrance sweep is style-only: cards past the sweep front briefly use
/// the muted border. Every card that fits the viewport is drawn on every
/// frame regardless of the sweep.
pub(super) fn render_cards(
    f: &mut Frame,
    area: Rect,
    cards: &[Card],
    selected: Option<usize>,
    theme: &Theme,
    section_color: ratatui::style::Color,
    entrance_frames: usize,
) {
    let start = first_visible_card(cards, selected, area.height);

    let mut y = area.y;
    for (idx, card) in cards.iter().enumerate().skip(start) {
        let remaining = area.bottom().saturating_sub(y);
        if remaining < 3 {
            break; // not enough room for even a clipped card
        }
        let height = card.height.min(remaining);
        let card_area = Rect::new(area.x, y, area.width, height);
        y += height;

        let is_selected = selected == Some(idx);
        let border_color = if is_selected {
            theme.highlight
        } else if idx >= entrance_frames {
            // Entrance sweep has not reached this card yet
            theme.muted
        } else {
            theme.border
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border_color));

        if let Some(title) = card.title {
            block = block.title(Span::styled(
                format!(" {} ", title),
                Style::default()
                    .fg(section_color)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        let mut style = Style::default().fg(theme.foreground);
        if is_selected {
            style = style.bg(theme.selection).fg(theme.selection_fg);
        }

        let body = Paragraph::new(Text::from(card.lines.clone()))
            .wrap(Wrap { trim: true })
            .style(style)
            .block(block);

        f.render_widget(body, card_area);
    }
}

/// Shared selection-key handling for the three content panels.
/// Returns Handled::Yes when the key moved or cleared the selection.
pub(super) fn handle_selection_key(
    selected: &mut Option<usize>,
    len: usize,
    key: KeyCode,
) -> Handled {
    if len == 0 {
        return Handled::No;
    }
    let last = len - 1;

    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            *selected = Some(match *selected {
                None => 0,
                Some(i) => i.saturating_sub(1),
            });
            Handled::Yes
        }
        KeyCode::Down | KeyCode::Char('j') => {
            *selected = Some(match *selected {
                None => 0,
                Some(i) => (i + 1).min(last),
            });
            Handled::Yes
        }
        KeyCode::Char('g') => {
            *selected = Some(0);
            Handled::Yes
        }
        KeyCode::Char('G') => {
            *selected = Some(last);
            Handled::Yes
        }
        KeyCode::Esc => {
            if selected.is_some() {
                *selected = None;
                Handled::Yes
            } else {
                Handled::No
            }
        }
        _ => Handled::No,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(height: u16) -> Card {
        Card {
            title: None,
            lines: vec![],
            height,
        }
    }

    #[test]
    fn no_selection_anchors_to_top() {
        let cards: Vec<Card> = (0..6).map(|_| card(5)).collect();
        assert_eq!(first_visible_card(&cards, None, 12), 0);
    }

    #[test]
    fn selection_scrolls_just_enough() {
        let cards: Vec<Card> = (0..6).map(|_| card(5)).collect();
        // Viewport fits two cards; selecting the fourth starts at the third
        assert_eq!(first_visible_card(&cards, Some(3), 10), 2);
        // Selecting an early card needs no scroll
        assert_eq!(first_visible_card(&cards, Some(1), 10), 0);
    }

    #[test]
    fn selection_clamped_to_len() {
        let cards: Vec<Card> = (0..3).map(|_| card(4)).collect();
        assert_eq!(first_visible_card(&cards, Some(99), 4), 2);
    }

    #[test]
    fn selection_keys_move_and_clamp() {
        let mut selected = None;

        assert!(handle_selection_key(&mut selected, 3, KeyCode::Down).was_handled());
        assert_eq!(selected, Some(0));

        handle_selection_key(&mut selected, 3, KeyCode::Down);
        handle_selection_key(&mut selected, 3, KeyCode::Down);
        handle_selection_key(&mut selected, 3, KeyCode::Down);
        assert_eq!(selected, Some(2), "selection clamps at the last card");

        handle_selection_key(&mut selected, 3, KeyCode::Char('g'));
        assert_eq!(selected, Some(0));

        handle_selection_key(&mut selected, 3, KeyCode::Char('G'));
        assert_eq!(selected, Some(2));
    }

    #[test]
    fn esc_clears_then_bubbles() {
        let mut selected = Some(1);
        assert!(handle_selection_key(&mut selected, 3, KeyCode::Esc).was_handled());
        assert_eq!(selected, None);
        assert!(!handle_selection_key(&mut selected, 3, KeyCode::Esc).was_handled());
    }

    #[test]
    fn empty_list_handles_nothing() {
        let mut selected = None;
        assert!(!handle_selection_key(&mut selected, 0, KeyCode::Down).was_handled());
    }
}
