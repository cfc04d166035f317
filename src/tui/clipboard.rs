//! Clipboard helper for copying text to the system clipboard
//!
//! Uses `arboard` for cross-platform support (Windows, macOS, Linux).
//! The clipboard is created fresh each time to avoid holding resources.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Returns Ok(()) on success, or an error if clipboard access fails.
/// Common failure cases: no display server (headless Linux), permission denied.
/// The caller reports the outcome to the user; the failure detail only goes
/// to the log.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let result = Clipboard::new()
        .context("Failed to access clipboard")
        .and_then(|mut clipboard| {
            clipboard
                .set_text(text)
                .context("Failed to set clipboard text")
        });

    if let Err(ref e) = result {
        tracing::debug!("clipboard copy failed: {:#}", e);
    }
    result
}
