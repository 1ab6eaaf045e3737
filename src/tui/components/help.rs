//! Help modal overlay
//!
//! Centered keybinding reference, rendered on top of everything else while
//! the help modal is open.

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("Ctrl+Enter / Ctrl+S", "Submit prompt"),
    ("Enter", "Newline in prompt"),
    ("Tab / Shift+Tab", "Switch panel focus"),
    ("y", "Copy results to clipboard"),
    ("d", "Save results to file"),
    ("↑ ↓ PgUp PgDn", "Scroll results"),
    ("Ctrl+T", "Cycle theme"),
    ("F1 / ?", "Toggle this help"),
    ("Ctrl+Q / Ctrl+C", "Quit"),
];

/// Render the help overlay centered in `area`
pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
    let width = 52u16.min(area.width.saturating_sub(4));
    let height = (BINDINGS.len() as u16 + 4).min(area.height.saturating_sub(2));

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let modal_area = Rect::new(x, y, width, height);

    let mut lines = vec![Line::from("")];
    for (keys, action) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<20}", keys),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*action, Style::default().fg(theme.fg)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg))
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .title_bottom(Line::from(" Esc to close ").right_aligned());

    let paragraph = Paragraph::new(lines).block(block);

    f.render_widget(Clear, modal_area);
    f.render_widget(paragraph, modal_area);
}
