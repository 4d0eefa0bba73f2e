//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} decks {msg}";

/// Progress reporter for deck rendering
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize the progress bar for `total_decks` files.
    ///
    /// A single deck gets no bar.
    pub fn init_decks(&mut self, total_decks: u64) {
        if self.quiet || total_decks < 2 {
            return;
        }

        let style = match ProgressStyle::default_bar().template(TEMPLATE) {
            Ok(style) => style.progress_chars("##-"),
            Err(e) => {
                log::debug!("falling back to the default progress style: {e}");
                ProgressStyle::default_bar()
            }
        };
        let pb = ProgressBar::new(total_decks);
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed deck
    pub fn deck_completed(&self, name: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Rendered: {name}"));
            pb.inc(1);
        }
    }

    /// Whether a bar is being drawn
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}
