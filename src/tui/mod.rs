// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup (including the one-time title set)
// - Event loop (keyboard input, animation ticks)
// - Layered key dispatch: Modal -> Search focus -> Global -> Content panel

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod traits;
pub mod views;

#[cfg(test)]
mod render_tests;

use crate::config::Config;
use crate::content;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, Focus, Section};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use traits::Interactive;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and cleans up when done.
/// The window title is set here, exactly once; no other code path writes it
/// and there is no reset on teardown.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle(content::PAGE_TITLE)
    )
    .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let tick_rate_ms = config.tick_rate_ms;
    let mut app = App::with_config(log_buffer, &config);
    tracing::info!("TUI started (theme: {})", app.theme.name);

    let result = run_event_loop(&mut terminal, &mut app, tick_rate_ms).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Redraws every iteration and waits on whichever comes first: terminal
/// input or the animation tick. All state transitions happen synchronously
/// inside the handlers - nothing here suspends, retries, or times out.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick_rate_ms: u64,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(tick_rate_ms.max(50)));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            input = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            } => {
                match input {
                    Some(Event::Key(key_event)) => handle_key_event(app, key_event),
                    Some(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                    _ => {}
                }
            }

            // Periodic tick for the entrance highlight and toast expiry
            _ = tick_interval.tick() => {
                app.tick_animation();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal -> Search focus -> Global -> Content panel
pub(crate) fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: Search focus captures typing
    if app.focus == Focus::Search {
        handle_search_input(app, &key_event);
        return;
    }

    // Layer 3: Global keys
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 4: Selection keys go to the active content panel
    match key_event.kind {
        KeyEventKind::Press => {
            if app.handle_key_press(key_event.code) {
                app.dispatch_to_content(key_event);
            }
        }
        KeyEventKind::Release => {
            app.handle_key_release(key_event.code);
        }
        _ => {}
    }
}

/// Handle mouse input: wheel scrolling moves the card selection
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if app.modal.is_some() {
        return;
    }
    let synthesized = match mouse_event.kind {
        MouseEventKind::ScrollUp => KeyCode::Up,
        MouseEventKind::ScrollDown => KeyCode::Down,
        _ => return,
    };
    app.dispatch_to_content(KeyEvent::from(synthesized));
}

/// Handle modal input - returns true if a modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(modal) = app.modal else {
        return false;
    };

    // Always process Release events to keep the InputHandler in sync;
    // otherwise keys get stuck "pressed" after the modal closes
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }

    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => {
            app.modal = None;
        }
        ModalAction::CopyReadable => {
            let text = app.copy_current_readable();
            copy_with_toast(app, text);
        }
        ModalAction::CopyJson => {
            let text = app.copy_current_json();
            copy_with_toast(app, text);
        }
    }

    true // Modal absorbed the input
}

/// Handle input while the search bar has focus. The search bar absorbs
/// everything; Esc/Enter hand focus back and Tab still switches sections,
/// so the section machine stays reachable mid-typing.
fn handle_search_input(app: &mut App, key_event: &KeyEvent) {
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return;
    }
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    match key_event.code {
        KeyCode::Esc | KeyCode::Enter => {
            if app.handle_key_press(key_event.code) {
                app.focus = Focus::Content;
            }
        }
        KeyCode::Tab => {
            if app.handle_key_press(key_event.code) {
                app.next_section();
            }
        }
        KeyCode::BackTab => {
            if app.handle_key_press(key_event.code) {
                app.prev_section();
            }
        }
        // Plain typing bypasses the InputHandler: repeated characters are
        // legitimate input, not key-repeat noise to debounce
        _ => {
            app.search.handle_key(*key_event);
        }
    }
}

/// Handle global keys - returns true if handled
/// Global keys work the same regardless of what is selected
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    let key = key_event.code;

    match key {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        // Focus the search box
        KeyCode::Char('/') => {
            if app.handle_key_press(key) {
                app.focus = Focus::Search;
            }
            true
        }
        // Help modal
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.modal = Some(Modal::help());
            }
            true
        }
        // Direct section selection
        KeyCode::Char('1') => {
            if app.handle_key_press(key) {
                app.set_section(Section::Breeds);
            }
            true
        }
        KeyCode::Char('2') => {
            if app.handle_key_press(key) {
                app.set_section(Section::Facts);
            }
            true
        }
        KeyCode::Char('3') => {
            if app.handle_key_press(key) {
                app.set_section(Section::Care);
            }
            true
        }
        // Section cycling
        KeyCode::Tab | KeyCode::Right => {
            if app.handle_key_press(key) {
                app.next_section();
            }
            true
        }
        KeyCode::BackTab | KeyCode::Left => {
            if app.handle_key_press(key) {
                app.prev_section();
            }
            true
        }
        // Card detail (defaults to the first card when nothing is selected)
        KeyCode::Enter => {
            if app.handle_key_press(key) {
                let idx = app.selected_index().unwrap_or(0);
                set_selected(app, idx);
                app.modal = Some(Modal::detail(app.section, idx));
            }
            true
        }
        // Copy to clipboard: y = readable, Y = JSON
        KeyCode::Char('y') => {
            if app.handle_key_press(key) {
                let text = app.copy_current_readable();
                copy_with_toast(app, text);
            }
            true
        }
        KeyCode::Char('Y') => {
            if app.handle_key_press(key) {
                let text = app.copy_current_json();
                copy_with_toast(app, text);
            }
            true
        }
        _ => false,
    }
}

/// Set the active panel's selection
fn set_selected(app: &mut App, idx: usize) {
    match app.section {
        Section::Breeds => app.breeds_panel.selected = Some(idx),
        Section::Facts => app.facts_panel.selected = Some(idx),
        Section::Care => app.care_panel.selected = Some(idx),
    }
}

/// Push text to the clipboard and report the outcome as a toast
fn copy_with_toast(app: &mut App, text: Option<String>) {
    match text {
        Some(text) => {
            if clipboard::copy_to_clipboard(&text).is_ok() {
                app.show_toast("✓ Copied to clipboard");
            } else {
                app.show_toast("✗ Failed to copy");
            }
        }
        None => app.show_toast("Nothing selected"),
    }
}
