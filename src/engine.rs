// Processing engine - the simulated asynchronous backend
//
// Submissions go through a fixed-duration timer followed by deterministic
// string interpolation. There is intentionally no failure path: the engine
// cannot error, time out, or be cancelled. A real backend would replace
// `render_results` and the body of the spawned task; the channel contract
// with the TUI stays the same.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// Body text appended below the echoed prompt in every result.
const RESULTS_BODY: &str = "This is where your processed results would appear. \
The prompt has been successfully processed and here are the generated outputs \
based on your input.";

/// Default processing delay when the config doesn't override it.
pub const DEFAULT_DELAY_MS: u64 = 1500;

/// Outcome of a completed submission, delivered over the engine channel.
#[derive(Debug, Clone)]
pub struct Completion {
    /// The formatted results text
    pub results: String,
    /// Wall-clock time the submission spent in the engine
    pub elapsed: Duration,
}

/// Derive the results text for a prompt.
///
/// Deterministic: the same prompt always produces the same output. The
/// prompt is echoed verbatim (untrimmed) inside the quotes.
pub fn render_results(prompt: &str) -> String {
    format!("Results for: \"{}\"\n\n{}", prompt, RESULTS_BODY)
}

/// Spawn a processing task for one submission.
///
/// Sleeps for `delay`, renders the results, and sends a [`Completion`] on
/// `tx`. The send result is ignored: if the receiver is gone the TUI has
/// already shut down and there is nobody left to show results to.
pub fn spawn(prompt: String, delay: Duration, tx: mpsc::Sender<Completion>) {
    tokio::spawn(async move {
        let started = Instant::now();
        tokio::time::sleep(delay).await;

        let completion = Completion {
            results: render_results(&prompt),
            elapsed: started.elapsed(),
        };

        tracing::debug!(
            chars = completion.results.chars().count(),
            elapsed_ms = completion.elapsed.as_millis() as u64,
            "processing complete"
        );

        let _ = tx.send(completion).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_echo_the_prompt_verbatim() {
        let out = render_results("hello");
        assert!(out.starts_with("Results for: \"hello\"\n\n"));
        assert!(out.ends_with(RESULTS_BODY));
    }

    #[test]
    fn results_are_deterministic() {
        assert_eq!(render_results("same input"), render_results("same input"));
    }

    #[test]
    fn results_preserve_whitespace_and_newlines() {
        // The template quotes the raw prompt; trimming is a submit-gate
        // concern, not a formatting concern.
        let out = render_results("  multi\nline  ");
        assert!(out.contains("Results for: \"  multi\nline  \""));
    }

    #[tokio::test(start_paused = true)]
    async fn completion_arrives_after_the_fixed_delay() {
        let (tx, mut rx) = mpsc::channel(1);
        spawn("ping".to_string(), Duration::from_millis(1500), tx);

        let completion = rx.recv().await.expect("engine should always complete");
        assert_eq!(completion.results, render_results("ping"));
        assert!(completion.elapsed >= Duration::from_millis(1500));
    }
}
