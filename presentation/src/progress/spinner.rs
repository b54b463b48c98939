//! Spinner shown while a reply is being generated

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A ticking spinner, or nothing when progress output is disabled.
pub struct ReplySpinner {
    bar: Option<ProgressBar>,
}

impl ReplySpinner {
    /// Start a spinner with `message`. Ticks on its own thread.
    pub fn start(message: &str, enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar: Some(bar) }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Stop and erase the spinner.
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
