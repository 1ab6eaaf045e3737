//! Component trait system for the TUI
//!
//! Contracts the UI components implement. Instead of App knowing how to
//! handle input or provide clipboard content for every panel, components
//! declare their capabilities through traits and App routes to whichever
//! one is focused.
//!
//! - [`Component`] - identity + focusability
//! - [`Interactive`] - keyboard input handling
//! - [`Copyable`] - clipboard content

mod component;
mod copyable;
mod interactive;

pub use component::{Component, ComponentId};
pub use copyable::Copyable;
pub use interactive::{Handled, Interactive};
