// TUI application state
//
// The app owns all mutable UI state: the active section, the search text,
// per-panel selection, and the cosmetic bits (entrance highlight frames,
// toasts). The content itself is static - see crate::content.

use super::components::{BreedsPanel, CarePanel, FactsPanel, SearchBar, Toast};
use super::input::InputHandler;
use super::modal::Modal;
use super::traits::{Copyable, Handled, Interactive};
use crate::config::Config;
use crate::content;
use crate::logging::LogBuffer;
use crate::theme::{Theme, ThemeConfig};
use std::time::Instant;

/// The three content sections. A three-state machine: selecting a section is
/// the only transition, transitions are unconditional, and there is no
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Breeds,
    Facts,
    Care,
}

impl Section {
    /// All sections in tab order
    pub fn all() -> [Section; 3] {
        [Section::Breeds, Section::Facts, Section::Care]
    }

    /// Get the next section in cycle
    pub fn next(self) -> Self {
        match self {
            Section::Breeds => Section::Facts,
            Section::Facts => Section::Care,
            Section::Care => Section::Breeds,
        }
    }

    /// Get the previous section in cycle
    pub fn prev(self) -> Self {
        match self {
            Section::Breeds => Section::Care,
            Section::Facts => Section::Breeds,
            Section::Care => Section::Facts,
        }
    }

    /// Tab label
    pub fn name(&self) -> &'static str {
        match self {
            Section::Breeds => "Dog Breeds",
            Section::Facts => "Fun Facts",
            Section::Care => "Care Tips",
        }
    }

    /// Tab icon
    pub fn icon(&self) -> &'static str {
        match self {
            Section::Breeds => "🐾",
            Section::Facts => "ℹ",
            Section::Care => "♥",
        }
    }

    /// Heading shown on the content container
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Breeds => "Popular Dog Breeds",
            Section::Facts => "Fun Dog Facts",
            Section::Care => "Dog Care Tips",
        }
    }

    /// One-line description under the heading
    pub fn blurb(&self) -> &'static str {
        match self {
            Section::Breeds => "Explore some of the most beloved dog breeds.",
            Section::Facts => "Discover interesting facts about our canine companions.",
            Section::Care => "Learn how to keep your furry friend happy and healthy.",
        }
    }

    /// Position in the tab bar
    pub fn index(&self) -> usize {
        match self {
            Section::Breeds => 0,
            Section::Facts => 1,
            Section::Care => 2,
        }
    }

    /// Number of cards this section renders (fixed for the process lifetime)
    pub fn card_count(&self) -> usize {
        match self {
            Section::Breeds => content::BREEDS.len(),
            Section::Facts => content::FACTS.len(),
            Section::Care => content::CARE_TIPS.len(),
        }
    }
}

/// Which component receives plain keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The active content panel (navigation keys, shortcuts)
    #[default]
    Content,
    /// The search input (keystrokes edit the text)
    Search,
}

/// How many animation frames the entrance highlight sweeps across new cards
pub const ENTRANCE_SWEEP_FRAMES: usize = 8;

/// Main application state for the TUI
pub struct App {
    /// Active content section (initial: Breeds)
    pub section: Section,

    /// Which component receives plain keystrokes
    pub focus: Focus,

    /// The search input. Captured on every keystroke; nothing reads it as a
    /// filter - that matches the observed behavior this app reimplements.
    pub search: SearchBar,

    /// Content panels (pure renderers of the static catalogs)
    pub breeds_panel: BreedsPanel,
    pub facts_panel: FactsPanel,
    pub care_panel: CarePanel,

    /// Modal overlay, if any
    pub modal: Option<Modal>,

    /// Toast notification, if any
    pub toast: Option<Toast>,

    /// Current color theme
    pub theme: Theme,

    /// Log buffer for the status bar's warning display
    pub log_buffer: LogBuffer,

    /// Whether the app should quit
    pub should_quit: bool,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,

    /// Global animation tick counter
    animation_frame: usize,

    /// Tick at which the current section became active
    section_entered_frame: usize,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(LogBuffer::new(), &Config::default())
    }

    pub fn with_config(log_buffer: LogBuffer, config: &Config) -> Self {
        let theme_config = ThemeConfig {
            use_theme_background: config.use_theme_background,
        };

        Self {
            section: Section::default(),
            focus: Focus::default(),
            search: SearchBar::new(),
            breeds_panel: BreedsPanel::new(),
            facts_panel: FactsPanel::new(),
            care_panel: CarePanel::new(),
            modal: None,
            toast: None,
            theme: Theme::by_name_with_config(&config.theme, &theme_config),
            log_buffer,
            should_quit: false,
            start_time: Instant::now(),
            input_handler: InputHandler::default(),
            animation_frame: 0,
            section_entered_frame: 0,
        }
    }

    /// Switch to a specific section. Unconditional; re-selecting the active
    /// section is a no-op so its selection and entrance state survive.
    pub fn set_section(&mut self, section: Section) {
        if self.section == section {
            return;
        }
        self.section = section;
        self.section_entered_frame = self.animation_frame;

        // Incoming panel starts fresh so repeated visits look identical
        match section {
            Section::Breeds => self.breeds_panel.selected = None,
            Section::Facts => self.facts_panel.selected = None,
            Section::Care => self.care_panel.selected = None,
        }
    }

    /// Switch to the next section (Tab / Right)
    pub fn next_section(&mut self) {
        self.set_section(self.section.next());
    }

    /// Switch to the previous section (BackTab / Left)
    pub fn prev_section(&mut self) {
        self.set_section(self.section.prev());
    }

    /// Advance the animation counter (called on every tick)
    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    /// Frames elapsed since the current section was entered, saturating at
    /// the sweep length. Drives the entrance highlight only - card presence
    /// never depends on this.
    pub fn entrance_frames(&self) -> usize {
        self.animation_frame
            .wrapping_sub(self.section_entered_frame)
            .min(ENTRANCE_SWEEP_FRAMES)
    }

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Route a key event to the active content panel
    pub fn dispatch_to_content(&mut self, key: crossterm::event::KeyEvent) -> Handled {
        match self.section {
            Section::Breeds => self.breeds_panel.handle_key(key),
            Section::Facts => self.facts_panel.handle_key(key),
            Section::Care => self.care_panel.handle_key(key),
        }
    }

    /// Selected card index in the active panel
    pub fn selected_index(&self) -> Option<usize> {
        match self.section {
            Section::Breeds => self.breeds_panel.selected,
            Section::Facts => self.facts_panel.selected,
            Section::Care => self.care_panel.selected,
        }
    }

    /// Readable clipboard text for the active panel's selection
    pub fn copy_current_readable(&self) -> Option<String> {
        match self.section {
            Section::Breeds => self.breeds_panel.copy_text(),
            Section::Facts => self.facts_panel.copy_text(),
            Section::Care => self.care_panel.copy_text(),
        }
    }

    /// JSON clipboard text for the active panel's selection
    pub fn copy_current_json(&self) -> Option<String> {
        match self.section {
            Section::Breeds => self.breeds_panel.copy_json(),
            Section::Facts => self.facts_panel.copy_json(),
            Section::Care => self.care_panel.copy_json(),
        }
    }

    /// Current search text (captured, never used as a filter)
    pub fn search_text(&self) -> &str {
        self.search.text()
    }

    /// Show a toast notification
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Drop the toast once its display window has passed
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_breeds_with_empty_search() {
        let app = App::new();
        assert_eq!(app.section, Section::Breeds);
        assert_eq!(app.focus, Focus::Content);
        assert_eq!(app.search_text(), "");
        assert!(!app.should_quit);
    }

    #[test]
    fn section_cycle_is_closed() {
        let mut section = Section::Breeds;
        for _ in 0..3 {
            section = section.next();
        }
        assert_eq!(section, Section::Breeds);

        assert_eq!(Section::Breeds.prev(), Section::Care);
        assert_eq!(Section::Care.prev(), Section::Facts);
    }

    #[test]
    fn card_counts_match_catalogs() {
        assert_eq!(Section::Breeds.card_count(), 6);
        assert_eq!(Section::Facts.card_count(), 5);
        assert_eq!(Section::Care.card_count(), 5);
    }

    #[test]
    fn set_section_is_unconditional_and_resets_selection() {
        let mut app = App::new();
        app.facts_panel.selected = Some(3);

        app.set_section(Section::Facts);
        assert_eq!(app.section, Section::Facts);
        assert_eq!(app.facts_panel.selected, None);

        // Re-selecting the active section is a no-op
        app.facts_panel.selected = Some(2);
        app.set_section(Section::Facts);
        assert_eq!(app.facts_panel.selected, Some(2));
    }

    #[test]
    fn switching_resets_entrance_sweep() {
        let mut app = App::new();
        for _ in 0..20 {
            app.tick_animation();
        }
        assert_eq!(app.entrance_frames(), ENTRANCE_SWEEP_FRAMES);

        app.next_section();
        assert_eq!(app.entrance_frames(), 0);

        app.tick_animation();
        assert_eq!(app.entrance_frames(), 1);
    }

    #[test]
    fn repeated_switching_returns_to_breeds() {
        let mut app = App::new();
        app.next_section();
        app.next_section();
        app.next_section();
        assert_eq!(app.section, Section::Breeds);
    }

    #[test]
    fn toast_lifecycle() {
        let mut app = App::new();
        assert!(app.toast.is_none());
        app.show_toast("copied");
        assert!(app.toast.is_some());
        // Not expired immediately
        app.clear_expired_toast();
        assert!(app.toast.is_some());
    }
}
