// TUI application state
//
// App owns the two pieces of user-visible state (the prompt buffer, via
// the prompt panel, and the results string) plus the Idle/Processing mode
// that gates submission. Components receive key events through trait
// dispatch and never mutate App state directly.

use super::components::prompt_panel::PromptPanel;
use super::components::results_panel::ResultsPanel;
use super::components::toast::Toast;
use super::input::InputHandler;
use super::modal::Modal;
use super::theme::{Theme, ThemeKind};
use super::traits::{ComponentId, Interactive};
use crate::config::Config;
use crate::engine::{self, Completion};
use crate::logging::LogBuffer;
use chrono::{DateTime, Local};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Spinner frames for the processing indicator
const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Application mode: exactly two states, no error state exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    /// A submission is outstanding; input is suspended until the engine
    /// delivers its completion
    Processing,
}

/// Session counters shown in the status bar
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStats {
    /// Completed-or-outstanding submissions this session
    pub submissions: u64,
    /// Total prompt characters sent to the engine
    pub chars_processed: u64,
}

/// Main application state for the TUI
pub struct App {
    /// Current mode (Idle or Processing)
    pub mode: Mode,

    /// Results of the last completed submission ("" = none yet)
    pub results: String,

    /// When the last results were generated
    pub completed_at: Option<DateTime<Local>>,

    /// Prompt editor panel (owns the text buffer)
    pub prompt_panel: PromptPanel,

    /// Results panel (owns scroll state and the copyable cache)
    pub results_panel: ResultsPanel,

    /// Which panel receives routed input
    pub focused: ComponentId,

    /// Transient notification, if any
    pub toast: Option<Toast>,

    /// Active modal overlay, if any
    pub modal: Option<Modal>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Session counters
    pub stats: SessionStats,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Current theme
    pub theme_kind: ThemeKind,
    pub theme: Theme,
    pub use_theme_background: bool,

    /// Log buffer for surfacing warnings in the status bar
    pub log_buffer: LogBuffer,

    /// File the save action writes to
    pub output_file: PathBuf,

    /// Input handler for action-key debouncing
    input_handler: InputHandler,

    /// Animation frame counter for the spinner
    animation_frame: usize,

    /// Channel the engine reports completions on
    engine_tx: mpsc::Sender<Completion>,

    /// Simulated processing delay
    processing_delay: Duration,
}

impl App {
    pub fn with_config(
        log_buffer: LogBuffer,
        config: &Config,
        engine_tx: mpsc::Sender<Completion>,
    ) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme);
        Self {
            mode: Mode::default(),
            results: String::new(),
            completed_at: None,
            prompt_panel: PromptPanel::new(),
            results_panel: ResultsPanel::new(),
            focused: ComponentId::Prompt,
            toast: None,
            modal: None,
            should_quit: false,
            stats: SessionStats::default(),
            start_time: Instant::now(),
            theme_kind,
            theme: theme_kind.theme(),
            use_theme_background: config.use_theme_background,
            log_buffer,
            output_file: config.output_file.clone(),
            input_handler: InputHandler::default(),
            animation_frame: 0,
            engine_tx,
            processing_delay: config.processing_delay(),
        }
    }

    pub fn is_processing(&self) -> bool {
        self.mode == Mode::Processing
    }

    /// Whether the results panel is shown at all (hidden until the first
    /// submission, like the page it models)
    pub fn show_results(&self) -> bool {
        self.is_processing() || !self.results.is_empty()
    }

    /// Submit the current prompt.
    ///
    /// Inert when a submission is already processing or when the trimmed
    /// prompt is empty; otherwise transitions Idle -> Processing and hands
    /// the prompt to the engine. The prompt buffer is left untouched so the
    /// text persists across submissions.
    pub fn submit(&mut self) {
        if self.is_processing() {
            tracing::debug!("submit ignored: already processing");
            return;
        }

        let Some(prompt) = self.prompt_panel.submission() else {
            tracing::debug!("submit ignored: prompt is blank");
            return;
        };

        self.mode = Mode::Processing;
        self.stats.submissions += 1;
        self.stats.chars_processed += prompt.chars().count() as u64;

        tracing::info!(chars = prompt.chars().count(), "prompt submitted");
        engine::spawn(prompt, self.processing_delay, self.engine_tx.clone());
    }

    /// Apply a completed submission: store the results, stamp the time,
    /// and return to Idle.
    pub fn complete(&mut self, completion: Completion) {
        self.results = completion.results;
        self.completed_at = Some(Local::now());
        self.results_panel.set_content(self.results.clone());
        self.mode = Mode::Idle;
    }

    /// Show a transient notification (replaces any current one)
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Advance animations and expire the toast. Called on every tick.
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Spinner character for the current animation frame
    pub fn spinner_char(&self) -> char {
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    /// Cycle to the next theme
    pub fn next_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
    }

    /// Move focus to the next panel. The results panel only takes focus
    /// once it is visible.
    pub fn focus_next(&mut self) {
        let next = self.focused.next_focus();
        if !next.is_focusable() {
            return;
        }
        if next == ComponentId::Results && !self.show_results() {
            return;
        }
        self.focused = next;
    }

    /// Key hint for the focused panel (status bar)
    pub fn focused_hint(&self) -> Option<&'static str> {
        match self.focused {
            ComponentId::Prompt => self.prompt_panel.focus_hint(),
            ComponentId::Results => self.results_panel.focus_hint(),
            _ => None,
        }
    }

    /// Debounced action-key press. Returns true if the action should fire.
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Uptime as a formatted string
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::render_results;

    fn test_app() -> (App, mpsc::Receiver<Completion>) {
        let (tx, rx) = mpsc::channel(4);
        let mut config = Config::default();
        config.processing_delay_ms = 100;
        let app = App::with_config(LogBuffer::new(), &config, tx);
        (app, rx)
    }

    #[tokio::test]
    async fn blank_prompt_never_starts_processing() {
        let (mut app, _rx) = test_app();

        app.submit();
        assert_eq!(app.mode, Mode::Idle);

        app.prompt_panel.set_text("   \n\t  ");
        app.submit();
        assert_eq!(app.mode, Mode::Idle);
        assert_eq!(app.stats.submissions, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn valid_submit_processes_and_completes() {
        let (mut app, mut rx) = test_app();
        app.prompt_panel.set_text("hello");

        app.submit();
        assert_eq!(app.mode, Mode::Processing);
        assert_eq!(app.stats.submissions, 1);
        assert_eq!(app.stats.chars_processed, 5);

        let completion = rx.recv().await.unwrap();
        app.complete(completion);

        assert_eq!(app.mode, Mode::Idle);
        assert_eq!(app.results, render_results("hello"));
        assert!(app.completed_at.is_some());
        // Prompt persists across submissions
        assert_eq!(app.prompt_panel.submission().as_deref(), Some("hello"));
    }

    #[tokio::test(start_paused = true)]
    async fn submit_while_processing_is_a_noop() {
        let (mut app, mut rx) = test_app();
        app.prompt_panel.set_text("first");

        app.submit();
        app.prompt_panel.set_text("second");
        app.submit(); // Ignored: still processing

        assert_eq!(app.stats.submissions, 1);

        let completion = rx.recv().await.unwrap();
        assert_eq!(completion.results, render_results("first"));

        // No second completion is coming
        app.complete(completion);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn new_results_overwrite_old_ones_wholesale() {
        let (mut app, mut rx) = test_app();

        app.prompt_panel.set_text("one");
        app.submit();
        app.complete(rx.recv().await.unwrap());
        let first = app.results.clone();

        app.prompt_panel.set_text("two");
        app.submit();
        app.complete(rx.recv().await.unwrap());

        assert_ne!(app.results, first);
        assert_eq!(app.results, render_results("two"));
    }

    #[tokio::test]
    async fn results_panel_hidden_until_first_submission() {
        let (mut app, _rx) = test_app();
        assert!(!app.show_results());

        // Tab can't focus an invisible panel
        app.focus_next();
        assert_eq!(app.focused, ComponentId::Prompt);

        app.prompt_panel.set_text("x");
        app.submit();
        assert!(app.show_results());

        app.focus_next();
        assert_eq!(app.focused, ComponentId::Results);
    }

    #[tokio::test]
    async fn theme_cycles() {
        let (mut app, _rx) = test_app();
        let before = app.theme_kind;
        app.next_theme();
        assert_ne!(app.theme_kind, before);
    }
}
