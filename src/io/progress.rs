//! Batch progress display and per-file status lines

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::fmt::Display;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks a batch of files on a single progress bar
///
/// Status lines are printed above the bar so it is never torn.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
        }
    }

    /// Create the batch bar for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        let batch_bar = ProgressBar::new(file_count as u64);
        batch_bar.set_style(BATCH_STYLE.clone());
        self.batch_bar = Some(self.multi_progress.add(batch_bar));
    }

    /// Show which file is being blended
    pub fn start_file(&self, path: &Path) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.set_message(display_name(path));
        }
    }

    /// Record a written output
    pub fn complete_file(&self, input: &Path, output: &Path, elapsed: Duration) {
        self.println(&format!(
            "✓ {} -> {} ({:.2?})",
            display_name(input),
            output.display(),
            elapsed
        ));
        self.advance();
    }

    /// Record a file left alone because its output already exists
    pub fn skip_file(&self, input: &Path) {
        self.println(&format!("Skipping: {} (output exists)", input.display()));
        self.advance();
    }

    /// Record a file that could not be blended
    pub fn fail_file(&self, input: &Path, error: &impl Display) {
        self.println(&format!("✗ {}: {error}", input.display()));
        self.advance();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    fn advance(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    // Falls back to stderr if the draw target cannot be written
    #[allow(clippy::print_stderr)]
    fn println(&self, line: &str) {
        if self.multi_progress.println(line).is_err() {
            eprintln!("{line}");
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
