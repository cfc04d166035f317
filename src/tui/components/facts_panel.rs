//! Facts panel
//!
//! One card per trivia fact, in list order, each led by an informational
//! marker. Facts have no title of their own - ordinal position is identity.

use super::{handle_selection_key, render_cards, Card};
use crate::content;
use crate::theme::Theme;
use crate::tui::traits::{Copyable, Handled, Interactive};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    Frame,
};

/// Height of one fact card, borders included
const CARD_HEIGHT: u16 = 4;

pub struct FactsPanel {
    /// Selected card index (None = nothing selected)
    pub selected: Option<usize>,
}

impl FactsPanel {
    pub fn new() -> Self {
        Self { selected: None }
    }

    pub fn len(&self) -> usize {
        content::FACTS.len()
    }

    /// Expand the facts list into cards. Pure and order-preserving.
    fn cards(theme: &Theme) -> Vec<Card> {
        content::FACTS
            .iter()
            .map(|fact| Card {
                title: None,
                lines: vec![Line::from(vec![
                    Span::styled("ℹ ", Style::default().fg(theme.accent)),
                    Span::raw(*fact),
                ])],
                height: CARD_HEIGHT,
            })
            .collect()
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, entrance_frames: usize) {
        let cards = Self::cards(theme);
        render_cards(
            f,
            area,
            &cards,
            self.selected,
            theme,
            theme.panel_facts,
            entrance_frames,
        );
    }

    fn selected_fact(&self) -> Option<(usize, &'static str)> {
        self.selected
            .and_then(|i| content::FACTS.get(i).map(|fact| (i, *fact)))
    }
}

impl Default for FactsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Interactive for FactsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        let len = self.len();
        handle_selection_key(&mut self.selected, len, key.code)
    }
}

impl Copyable for FactsPanel {
    fn copy_text(&self) -> Option<String> {
        self.selected_fact().map(|(_, fact)| fact.to_string())
    }

    fn copy_json(&self) -> Option<String> {
        self.selected_fact().and_then(|(index, fact)| {
            serde_json::to_string(&serde_json::json!({ "index": index, "fact": fact })).ok()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_cover_catalog_in_order() {
        let theme = Theme::default();
        let cards = FactsPanel::cards(&theme);
        assert_eq!(cards.len(), 5);
        // Facts carry no card title; identity is ordinal
        assert!(cards.iter().all(|c| c.title.is_none()));
    }

    #[test]
    fn copy_uses_ordinal_identity() {
        let mut panel = FactsPanel::new();
        panel.selected = Some(1);

        assert_eq!(panel.copy_text().unwrap(), content::FACTS[1]);

        let json = panel.copy_json().unwrap();
        assert!(json.contains("\"index\":1"));
        assert!(json.contains("Basenji"));
    }
}
