// Title bar component
//
// Renders the app title with an activity indicator while a submission is
// processing.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let activity = if app.is_processing() {
        format!(" {} processing", app.spinner_char())
    } else {
        String::new()
    };

    let title_text = if bp.at_least(Breakpoint::Normal) {
        format!(
            " ✨ promptpad{} ── write a prompt, see instant results",
            activity
        )
    } else {
        format!(" ✨ promptpad{}", activity)
    };

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(ratatui::text::Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}
