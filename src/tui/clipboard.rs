//! Clipboard helper for copying text to the system clipboard
//!
//! Uses `arboard` for cross-platform support (Windows, macOS, Linux). The
//! clipboard handle is created fresh per copy to avoid holding resources.
//! This is the only user-visible fallible operation in the application;
//! failures surface as a toast and nothing else.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard.
///
/// Common failure cases: no display server (headless Linux), permission
/// denied.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}
