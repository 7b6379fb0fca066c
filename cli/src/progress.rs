use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Spinner shown on stderr while the changelog is loading
pub struct LoadingIndicator {
    spinner: ProgressBar,
}

impl LoadingIndicator {
    pub fn start(message: &str) -> Self {
        let spinner = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.blue} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        Self { spinner }
    }

    /// Removes the spinner whatever the load outcome was
    pub fn finish(self) {
        self.spinner.finish_and_clear();
    }
}
