// TUI module - Terminal User Interface
//
// Manages the terminal with ratatui: initialization and cleanup, the event
// loop (keyboard input, animation ticks, engine completions), rendering,
// and key dispatch.

pub mod app;
pub mod clipboard;
pub mod components;
pub mod editor;
pub mod input;
pub mod layout;
pub mod modal;
pub mod scroll;
pub mod theme;
pub mod traits;
pub mod ui;

use crate::config::Config;
use crate::engine::Completion;
use crate::export;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use traits::{ComponentId, Copyable, Interactive};

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done - including on error, so a panic message stays readable.
pub async fn run_tui(
    mut completion_rx: mpsc::Receiver<Completion>,
    log_buffer: LogBuffer,
    config: Config,
    engine_tx: mpsc::Sender<Completion>,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_config(log_buffer, &config, engine_tx);

    let result = run_event_loop(&mut terminal, &mut app, &mut completion_rx).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// tokio::select! multiplexes three event sources:
/// 1. Keyboard input
/// 2. Animation/redraw ticks
/// 3. Engine completions (the end of the simulated processing delay)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    completion_rx: &mut mpsc::Receiver<Completion>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic tick for spinner animation and toast expiry
            _ = tick_interval.tick() => {
                app.tick();
            }

            // Engine completions
            Some(completion) = completion_rx.recv() => {
                app.complete(completion);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal -> Global chords -> Focused component
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Layer 1: modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: global chords and keys that work regardless of focus
    if handle_global_keys(app, &key_event) {
        return;
    }

    match key_event.kind {
        KeyEventKind::Press => dispatch_to_focused(app, key_event),
        KeyEventKind::Release => app.handle_key_release(key_event.code),
        _ => {}
    }
}

/// Route a key press to the focused panel
fn dispatch_to_focused(app: &mut App, key_event: KeyEvent) {
    match app.focused {
        ComponentId::Prompt => {
            // Editing is suspended while a submission is processing, the
            // same way the field it models is disabled while loading
            if app.is_processing() {
                return;
            }
            // Edit keys go straight to the buffer - typing must repeat,
            // so no debounce on this path
            app.prompt_panel.handle_key(key_event);
        }
        ComponentId::Results => {
            // Action and scroll keys are debounced
            if !app.handle_key_press(key_event.code) {
                return;
            }

            match key_event.code {
                // Copy results to clipboard - the only fallible action
                KeyCode::Char('y') => {
                    if let Some(text) = app.results_panel.copy_text() {
                        match clipboard::copy_to_clipboard(&text) {
                            Ok(()) => app.show_toast("✓ Copied to clipboard"),
                            Err(e) => {
                                tracing::warn!(error = %e, "clipboard copy failed");
                                app.show_toast("✗ Failed to copy");
                            }
                        }
                    }
                }
                // Save results to file
                KeyCode::Char('d') => {
                    if !app.results.is_empty() {
                        let path = app.output_file.clone();
                        match export::save_results(&app.results, &path) {
                            Ok(()) => app.show_toast(format!("✓ Saved to {}", path.display())),
                            Err(e) => {
                                tracing::warn!(error = %e, "save failed");
                                app.show_toast("✗ Failed to save");
                            }
                        }
                    }
                }
                KeyCode::Char('?') => {
                    app.modal = Some(Modal::help());
                }
                // Leave the results panel
                KeyCode::Esc => {
                    app.focused = ComponentId::Prompt;
                }
                _ => {
                    if !app.results_panel.handle_key(key_event).was_handled() {
                        tracing::trace!(?key_event, "unhandled key in results panel");
                    }
                }
            }
        }
        _ => {}
    }
}

/// Handle global keys - returns true if handled.
/// Chords use Ctrl so plain characters always reach the prompt buffer.
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    let key = key_event.code;

    match key {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            true
        }
        // Submit: Ctrl+Enter, with Ctrl+S for terminals that report
        // Ctrl+Enter as plain Enter
        KeyCode::Enter | KeyCode::Char('s') if ctrl => {
            if app.handle_key_press(KeyCode::Enter) {
                app.submit();
            }
            true
        }
        // Cycle theme
        KeyCode::Char('t') if ctrl => {
            if app.handle_key_press(key) {
                app.next_theme();
            }
            true
        }
        // Help
        KeyCode::F(1) => {
            if app.handle_key_press(key) {
                app.modal = Some(Modal::help());
            }
            true
        }
        // Panel focus
        KeyCode::Tab | KeyCode::BackTab => {
            if app.handle_key_press(key) {
                // Two focusable panels, so forward and backward coincide
                app.focus_next();
            }
            true
        }
        _ => false,
    }
}

/// Handle modal input - returns true if the modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    // Always process Release events to keep the InputHandler in sync;
    // otherwise keys are stuck "pressed" after the modal closes
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }

    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => {
            app.modal = None;
        }
    }

    true
}
