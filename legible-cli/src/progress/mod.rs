//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for multi-input analysis
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

    /// Initialize the progress bar; single inputs get none
    pub fn init_inputs(&mut self, total: u64) {
        if self.quiet || total < 2 {
            return;
        }

        let pb = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} inputs {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed input
    pub fn input_completed(&self, label: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Analyzed: {label}"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }

    /// Whether a bar is being drawn
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }
}
