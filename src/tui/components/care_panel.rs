//! Care tips panel
//!
//! One card per tip in declaration order: title on the border, body inside.

use super::{handle_selection_key, render_cards, Card};
use crate::content::{self, CareTip};
use crate::theme::Theme;
use crate::tui::traits::{Copyable, Handled, Interactive};
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, text::Line, Frame};

/// Height of one tip card, borders included
const CARD_HEIGHT: u16 = 4;

pub struct CarePanel {
    /// Selected card index (None = nothing selected)
    pub selected: Option<usize>,
}

impl CarePanel {
    pub fn new() -> Self {
        Self { selected: None }
    }

    pub fn len(&self) -> usize {
        content::CARE_TIPS.len()
    }

    /// Expand the tip catalog into cards. Pure and order-preserving.
    fn cards() -> Vec<Card> {
        content::CARE_TIPS
            .iter()
            .map(|tip| Card {
                title: Some(tip.title),
                lines: vec![Line::from(tip.content)],
                height: CARD_HEIGHT,
            })
            .collect()
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, entrance_frames: usize) {
        let cards = Self::cards();
        render_cards(
            f,
            area,
            &cards,
            self.selected,
            theme,
            theme.panel_care,
            entrance_frames,
        );
    }

    fn selected_tip(&self) -> Option<&'static CareTip> {
        self.selected.and_then(|i| content::CARE_TIPS.get(i))
    }
}

impl Default for CarePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Interactive for CarePanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        let len = self.len();
        handle_selection_key(&mut self.selected, len, key.code)
    }
}

impl Copyable for CarePanel {
    fn copy_text(&self) -> Option<String> {
        self.selected_tip()
            .map(|tip| format!("{}\n{}", tip.title, tip.content))
    }

    fn copy_json(&self) -> Option<String> {
        self.selected_tip()
            .and_then(|tip| serde_json::to_string(tip).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_cover_catalog_in_order() {
        let cards = CarePanel::cards();
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].title, Some("Balanced Diet"));
        assert_eq!(cards[4].title, Some("Mental Stimulation"));
    }

    #[test]
    fn copy_pairs_title_and_body() {
        let mut panel = CarePanel::new();
        panel.selected = Some(3);

        let text = panel.copy_text().unwrap();
        assert!(text.starts_with("Grooming\n"));

        let json = panel.copy_json().unwrap();
        assert!(json.contains("\"title\":\"Grooming\""));
    }
}
