//! Component traits for the TUI
//!
//! Panels implement `Interactive` so the app can route keys to whatever has
//! focus, and `Copyable` so the clipboard bindings work the same everywhere.

use crossterm::event::KeyEvent;

/// Result of handling a key event
///
/// Tells the app whether the component consumed the event or if it should
/// bubble up for global handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl Handled {
    pub fn from_bool(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }

    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        Self::from_bool(handled)
    }
}

/// Trait for components that handle keyboard input
///
/// When a key event arrives, the app routes it to the focused component.
/// The component decides whether to handle it or let it bubble up.
pub trait Interactive {
    /// Handle a key event
    ///
    /// Returns `Handled::Yes` if the component consumed the event,
    /// `Handled::No` if it should bubble up to the app.
    fn handle_key(&mut self, key: KeyEvent) -> Handled;
}

/// Trait for components whose current item can be copied to the clipboard
pub trait Copyable {
    /// Human-readable rendition of the current item
    fn copy_text(&self) -> Option<String>;

    /// JSON rendition of the current item
    fn copy_json(&self) -> Option<String>;
}
