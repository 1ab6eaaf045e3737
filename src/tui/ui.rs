// UI rendering - assembles the screen from components
//
// Layout, top to bottom: title bar, prompt panel, results panel (only once
// a submission exists), status bar. Toast and help modal render as
// overlays on top.

use super::app::App;
use super::components::prompt_panel::PromptRenderState;
use super::components::results_panel::ResultsRenderState;
use super::components::{help, status_bar, title_bar};
use super::traits::Component;
use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

/// Height of the prompt panel when the results panel is also visible
const PROMPT_HEIGHT: u16 = 9;

/// Draw the whole UI
pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Optional themed background under everything
    let bg = app.theme.background(app.use_theme_background);
    f.render_widget(Block::default().style(Style::default().bg(bg)), area);

    let [title_area, main_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .areas(area);

    title_bar::render(f, title_area, app);

    if app.show_results() {
        let [prompt_area, results_area] =
            Layout::vertical([Constraint::Length(PROMPT_HEIGHT), Constraint::Fill(1)])
                .areas(main_area);

        render_prompt(f, prompt_area, app);

        let state = ResultsRenderState {
            results: &app.results,
            completed_at: app.completed_at,
            busy: app.is_processing(),
            spinner: app.spinner_char(),
            theme: &app.theme,
            focused: app.focused == app.results_panel.id(),
        };
        app.results_panel.render(f, results_area, &state);
    } else {
        render_prompt(f, main_area, app);
    }

    status_bar::render(f, status_area, app);

    if let Some(toast) = &app.toast {
        toast.render(f, area, &app.theme);
    }

    if app.modal.is_some() {
        help::render(f, area, &app.theme);
    }
}

fn render_prompt(f: &mut Frame, area: ratatui::layout::Rect, app: &mut App) {
    let state = PromptRenderState {
        theme: &app.theme,
        focused: app.focused == app.prompt_panel.id(),
        busy: app.is_processing(),
    };
    app.prompt_panel.render(f, area, &state);
}
