// Status bar component
//
// Renders session info at the bottom: uptime, submission count, characters
// processed, theme, and the focused panel's key hints. The most recent
// warning or error from the log buffer takes priority over the hints.

use crate::logging::LogLevel;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar with session statistics and key hints
///
/// Adapts to terminal width:
/// - Wide: stats plus hints
/// - Narrow: stats only
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let stats = format!(
        " {} │ ⏎ {} │ ✍ {} chars │ {}",
        app.uptime(),
        app.stats.submissions,
        app.stats.chars_processed,
        app.theme_kind.name(),
    );

    let mut spans = vec![Span::styled(
        stats,
        Style::default().fg(app.theme.status_bar),
    )];

    if let Some(entry) = app.log_buffer.latest_at_least(LogLevel::Warn) {
        // Surface problems instead of hints
        let color = if entry.level == LogLevel::Error {
            app.theme.error
        } else {
            app.theme.busy
        };
        spans.push(Span::styled(
            format!(
                " │ {} {} {}",
                entry.timestamp.format("%H:%M:%S"),
                entry.level.as_str(),
                entry.message
            ),
            Style::default().fg(color),
        ));
    } else if bp.at_least(Breakpoint::Wide) {
        if let Some(hint) = app.focused_hint() {
            spans.push(Span::styled(
                format!(" │ {}", hint),
                Style::default().fg(app.theme.muted),
            ));
        }
    }

    let status = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
