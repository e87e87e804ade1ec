use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while the remote analysis is in flight
pub struct ProgressReporter {
    spinner: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            spinner: None,
            enabled,
        }
    }

    pub fn start_analysis(&mut self, char_count: usize, model: &str) {
        if !self.enabled {
            return;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed}] {msg}")
                .unwrap(),
        );
        pb.set_message(format!("Analyzing {char_count} chars with {model}..."));
        pb.enable_steady_tick(Duration::from_millis(120));
        self.spinner = Some(pb);
    }

    pub fn finish_analysis(&mut self, succeeded: bool) {
        if let Some(pb) = self.spinner.take() {
            let message = if succeeded {
                "✓ Analysis complete"
            } else {
                "✗ Analysis failed"
            };
            pb.finish_with_message(message);
        }
    }
}
