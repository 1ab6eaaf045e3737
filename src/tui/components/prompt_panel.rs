//! Prompt panel component
//!
//! The editable prompt field. Owns the edit buffer, renders it with a live
//! character count, and forwards edit keys into the buffer. Submission
//! itself is an app-level action (Ctrl+Enter), gated on the trimmed text
//! being non-empty and the app being idle.

use crate::tui::editor::EditBuffer;
use crate::tui::theme::Theme;
use crate::tui::traits::{Component, ComponentId, Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Placeholder shown while the buffer is empty
const PLACEHOLDER: &str = "Type your prompt here... Ctrl+Enter to submit";

/// Rendering state for the prompt panel
pub struct PromptRenderState<'a> {
    pub theme: &'a Theme,
    /// Whether the panel has focus
    pub focused: bool,
    /// Whether a submission is processing (editing is suspended)
    pub busy: bool,
}

/// Prompt panel component
pub struct PromptPanel {
    buffer: EditBuffer,
    /// First visible buffer row (kept so the cursor stays in view)
    scroll_row: usize,
}

impl PromptPanel {
    pub fn new() -> Self {
        Self {
            buffer: EditBuffer::new(),
            scroll_row: 0,
        }
    }

    /// Live character count for the footer
    pub fn char_count(&self) -> usize {
        self.buffer.char_count()
    }

    /// The text to submit, if the submit gate passes (trimmed non-empty).
    /// The raw text is returned; trimming is only the gate.
    pub fn submission(&self) -> Option<String> {
        if self.buffer.is_blank() {
            None
        } else {
            Some(self.buffer.text())
        }
    }

    #[cfg(test)]
    pub fn set_text(&mut self, text: &str) {
        self.buffer = EditBuffer::new();
        for c in text.chars() {
            if c == '\n' {
                self.buffer.insert_newline();
            } else {
                self.buffer.insert_char(c);
            }
        }
    }

    /// Render the editor with cursor, placeholder, and character count
    pub fn render(&mut self, f: &mut Frame, area: Rect, state: &PromptRenderState) {
        let inner_height = area.height.saturating_sub(2) as usize;

        // Keep the cursor row inside the viewport
        let (cursor_row, _) = self.buffer.cursor();
        if cursor_row < self.scroll_row {
            self.scroll_row = cursor_row;
        } else if inner_height > 0 && cursor_row >= self.scroll_row + inner_height {
            self.scroll_row = cursor_row + 1 - inner_height;
        }

        let border_color = if state.focused {
            state.theme.border_focused
        } else {
            state.theme.border
        };

        let title = if state.busy {
            " ✏ Prompt (processing) "
        } else {
            " ✏ Prompt "
        };

        let counter = Line::from(format!(" {} characters ", self.char_count()))
            .right_aligned()
            .style(Style::default().fg(state.theme.muted));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(state.theme.border_type)
            .border_style(Style::default().fg(border_color))
            .title(title)
            .title_bottom(counter);

        let is_empty = self.buffer.char_count() == 0;
        let paragraph = if is_empty {
            Paragraph::new(PLACEHOLDER).style(
                Style::default()
                    .fg(state.theme.muted)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            let lines: Vec<Line> = self
                .buffer
                .lines()
                .iter()
                .map(|l| Line::from(l.as_str()))
                .collect();
            let style = if state.busy {
                Style::default().fg(state.theme.muted)
            } else {
                Style::default().fg(state.theme.fg)
            };
            Paragraph::new(lines).style(style)
        };

        f.render_widget(
            paragraph.block(block).scroll((self.scroll_row as u16, 0)),
            area,
        );

        // Hardware cursor only when the user can actually type
        if state.focused && !state.busy {
            let x = area.x + 1 + self.buffer.cursor_display_col();
            let y = area.y + 1 + (cursor_row - self.scroll_row) as u16;
            if x < area.right().saturating_sub(1) && y < area.bottom().saturating_sub(1) {
                f.set_cursor_position(Position::new(x, y));
            }
        }
    }
}

impl Default for PromptPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for PromptPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Prompt
    }
}

impl Interactive for PromptPanel {
    /// Edit keys mutate the buffer on every keystroke. Keys with Ctrl or
    /// Alt are left for the app layer (submit, quit, theme).
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return Handled::No;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.buffer.insert_char(c);
                Handled::Yes
            }
            KeyCode::Enter => {
                self.buffer.insert_newline();
                Handled::Yes
            }
            KeyCode::Backspace => {
                self.buffer.backspace();
                Handled::Yes
            }
            KeyCode::Delete => {
                self.buffer.delete();
                Handled::Yes
            }
            KeyCode::Left => {
                self.buffer.move_left();
                Handled::Yes
            }
            KeyCode::Right => {
                self.buffer.move_right();
                Handled::Yes
            }
            KeyCode::Up => {
                self.buffer.move_up();
                Handled::Yes
            }
            KeyCode::Down => {
                self.buffer.move_down();
                Handled::Yes
            }
            KeyCode::Home => {
                self.buffer.move_home();
                Handled::Yes
            }
            KeyCode::End => {
                self.buffer.move_end();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("Ctrl+Enter:submit  Tab:results  F1:help")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_updates_buffer_and_count() {
        let mut panel = PromptPanel::new();
        for c in "hi there".chars() {
            panel.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(panel.char_count(), 8);
        assert_eq!(panel.submission().as_deref(), Some("hi there"));
    }

    #[test]
    fn enter_inserts_newline_not_submit() {
        let mut panel = PromptPanel::new();
        panel.handle_key(key(KeyCode::Char('a')));
        panel.handle_key(key(KeyCode::Enter));
        panel.handle_key(key(KeyCode::Char('b')));
        assert_eq!(panel.submission().as_deref(), Some("a\nb"));
    }

    #[test]
    fn blank_prompt_yields_no_submission() {
        let mut panel = PromptPanel::new();
        assert!(panel.submission().is_none());

        for c in "  \t ".chars() {
            panel.handle_key(key(KeyCode::Char(c)));
        }
        panel.handle_key(key(KeyCode::Enter));
        assert!(panel.submission().is_none());
    }

    #[test]
    fn submission_preserves_raw_text() {
        let mut panel = PromptPanel::new();
        panel.set_text("  hello  ");
        // The gate trims, the payload doesn't
        assert_eq!(panel.submission().as_deref(), Some("  hello  "));
    }

    #[test]
    fn ctrl_chords_bubble_up() {
        let mut panel = PromptPanel::new();
        let ctrl_enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL);
        assert_eq!(panel.handle_key(ctrl_enter), Handled::No);
        assert_eq!(panel.char_count(), 0);
    }
}
