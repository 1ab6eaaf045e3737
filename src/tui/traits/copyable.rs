//! Copyable trait for components that provide clipboard content
//!
//! When the user presses the copy key, the focused component's `Copyable`
//! implementation determines what gets copied.

use super::Component;

/// Trait for components that can provide content for the clipboard
pub trait Copyable: Component {
    /// Text for the clipboard, verbatim.
    ///
    /// Returns `None` if there's nothing to copy (e.g., no results yet);
    /// the copy action is inert in that case.
    fn copy_text(&self) -> Option<String>;
}
