//! Breeds panel
//!
//! Renders one card per breed in declaration order: name on the border, the
//! placeholder image URL (displayed, never fetched), and the description.

use super::{handle_selection_key, render_cards, Card};
use crate::content::{self, BreedEntry};
use crate::theme::Theme;
use crate::tui::traits::{Copyable, Handled, Interactive};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    Frame,
};

/// Height of one breed card, borders included
const CARD_HEIGHT: u16 = 5;

pub struct BreedsPanel {
    /// Selected card index (None = nothing selected)
    pub selected: Option<usize>,
}

impl BreedsPanel {
    pub fn new() -> Self {
        Self { selected: None }
    }

    pub fn len(&self) -> usize {
        content::BREEDS.len()
    }

    /// Expand the breed catalog into cards. Pure and order-preserving.
    fn cards(theme: &Theme) -> Vec<Card> {
        content::BREEDS
            .iter()
            .map(|breed| Card {
                title: Some(breed.name),
                lines: vec![
                    Line::from(Span::styled(
                        content::image_url(breed.name),
                        Style::default().fg(theme.accent),
                    )),
                    Line::from(breed.description),
                ],
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
            theme.panel_breeds,
            entrance_frames,
        );
    }

    fn selected_entry(&self) -> Option<&'static BreedEntry> {
        self.selected.and_then(|i| content::BREEDS.get(i))
    }
}

impl Default for BreedsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Interactive for BreedsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        let len = self.len();
        handle_selection_key(&mut self.selected, len, key.code)
    }
}

impl Copyable for BreedsPanel {
    fn copy_text(&self) -> Option<String> {
        self.selected_entry().map(|breed| {
            format!(
                "{}\n{}\n{}",
                breed.name,
                breed.description,
                content::image_url(breed.name)
            )
        })
    }

    fn copy_json(&self) -> Option<String> {
        self.selected_entry()
            .and_then(|breed| serde_json::to_string(breed).ok())
    }
}
