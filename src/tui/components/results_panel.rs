//! Results panel component
//!
//! While a submission is processing, shows a spinner and a cosmetic
//! progress gauge (no real percentage exists to track). Once results
//! arrive, shows the text verbatim in a scrollable viewport with a
//! generated-at footer, and provides the clipboard content for the copy
//! action.

use crate::tui::scroll::ScrollState;
use crate::tui::theme::Theme;
use crate::tui::traits::{Component, ComponentId, Copyable, Handled, Interactive};
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Fill ratio of the cosmetic progress gauge
const GAUGE_RATIO: f64 = 0.6;

/// Rendering state for the results panel
pub struct ResultsRenderState<'a> {
    /// Current results text (empty = nothing yet)
    pub results: &'a str,
    /// When the results were generated
    pub completed_at: Option<DateTime<Local>>,
    /// Whether a submission is processing
    pub busy: bool,
    /// Spinner character for the current animation frame
    pub spinner: char,
    pub theme: &'a Theme,
    pub focused: bool,
}

/// Results panel component
pub struct ResultsPanel {
    scroll: ScrollState,
    /// Cached results for the clipboard copy action
    content: Option<String>,
}

impl ResultsPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
            content: None,
        }
    }

    /// Cache fresh results and reset the viewport to the top
    pub fn set_content(&mut self, results: String) {
        self.content = Some(results);
        self.scroll.reset();
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, state: &ResultsRenderState) {
        if state.busy {
            self.render_processing(f, area, state);
        } else {
            self.render_results(f, area, state);
        }
    }

    fn render_processing(&self, f: &mut Frame, area: Rect, state: &ResultsRenderState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(state.theme.border_type)
            .border_style(Style::default().fg(state.theme.busy))
            .title(" ⏳ Results ");

        let inner = block.inner(area);
        f.render_widget(block, area);

        // Center spinner line and gauge vertically
        let [_, spinner_area, gauge_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

        let spinner = Paragraph::new(format!("{} Processing your prompt...", state.spinner))
            .alignment(Alignment::Center)
            .style(Style::default().fg(state.theme.busy));
        f.render_widget(spinner, spinner_area);

        // Cosmetic only: there is no real progress to report
        let gauge_width = gauge_area.width.min(40);
        let gauge_x = gauge_area.x + (gauge_area.width - gauge_width) / 2;
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(state.theme.gauge))
            .ratio(GAUGE_RATIO)
            .label("");
        f.render_widget(
            gauge,
            Rect::new(gauge_x, gauge_area.y, gauge_width, gauge_area.height),
        );
    }

    fn render_results(&mut self, f: &mut Frame, area: Rect, state: &ResultsRenderState) {
        let inner_height = area.height.saturating_sub(2) as usize;
        let inner_width = area.width.saturating_sub(2) as usize;

        let lines = wrap_plain(state.results, inner_width);
        self.scroll.update_dimensions(lines.len(), inner_height);

        let border_color = if state.focused {
            state.theme.border_focused
        } else {
            state.theme.border
        };

        let title_text = if self.scroll.overflows() {
            " ✔ Results [scroll] "
        } else {
            " ✔ Results "
        };
        let title = Line::styled(title_text, Style::default().fg(state.theme.success));

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(state.theme.border_type)
            .border_style(Style::default().fg(border_color))
            .title(title);

        if let Some(at) = state.completed_at {
            let footer = Line::from(format!(
                " Generated {} • {} characters ",
                at.format("%Y-%m-%d %H:%M:%S"),
                state.results.chars().count()
            ))
            .right_aligned()
            .style(Style::default().fg(state.theme.muted));
            block = block.title_bottom(footer);
        }

        let text: Vec<Line> = lines.iter().map(|l| Line::from(l.as_str())).collect();
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(state.theme.fg))
            .block(block)
            .scroll((self.scroll.offset() as u16, 0));

        f.render_widget(paragraph, area);
    }
}

impl Default for ResultsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ResultsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Results
    }
}

impl Interactive for ResultsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up => {
                self.scroll.scroll_up();
                Handled::Yes
            }
            KeyCode::Down => {
                self.scroll.scroll_down();
                Handled::Yes
            }
            KeyCode::PageUp => {
                self.scroll.page_up();
                Handled::Yes
            }
            KeyCode::PageDown => {
                self.scroll.page_down();
                Handled::Yes
            }
            KeyCode::Home => {
                self.scroll.scroll_to_top();
                Handled::Yes
            }
            KeyCode::End => {
                self.scroll.scroll_to_bottom();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("y:copy  d:save  ↑↓:scroll  Tab:prompt")
    }
}

impl Copyable for ResultsPanel {
    fn copy_text(&self) -> Option<String> {
        self.content.clone().filter(|c| !c.is_empty())
    }
}

/// Wrap plain text to a display width, breaking long lines at character
/// boundaries. Done here instead of Paragraph::wrap so the line count
/// feeding the scroll state matches what is rendered.
fn wrap_plain(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut wrapped = Vec::new();
    for hard_line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0usize;

        for c in hard_line.chars() {
            let w = c.width().unwrap_or(0);
            if current_width + w > width && !current.is_empty() {
                wrapped.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += w;
        }
        wrapped.push(current);
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_text_returns_cached_results() {
        let mut panel = ResultsPanel::new();
        assert!(panel.copy_text().is_none());

        panel.set_content("Results for: \"hello\"\n\nbody".to_string());
        assert_eq!(
            panel.copy_text().as_deref(),
            Some("Results for: \"hello\"\n\nbody")
        );
    }

    #[test]
    fn empty_results_are_not_copyable() {
        let mut panel = ResultsPanel::new();
        panel.set_content(String::new());
        assert!(panel.copy_text().is_none());
    }

    #[test]
    fn wrap_respects_hard_newlines() {
        let lines = wrap_plain("ab\ncd", 10);
        assert_eq!(lines, vec!["ab", "cd"]);
    }

    #[test]
    fn wrap_breaks_long_lines_at_width() {
        let lines = wrap_plain("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_counts_wide_glyphs_as_two_cells() {
        // Each CJK char is two cells, so only two fit in width 5
        let lines = wrap_plain("日本語", 5);
        assert_eq!(lines, vec!["日本", "語"]);
    }

    #[test]
    fn wrap_preserves_empty_lines() {
        let lines = wrap_plain("a\n\nb", 10);
        assert_eq!(lines, vec!["a", "", "b"]);
    }
}
