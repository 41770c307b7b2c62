//! Progress display for thread planning across one or many images

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static THREAD_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>20} [{bar:30.cyan/blue}] {pos}/{len} threads {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Images: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch runs
///
/// Shows one bar per image for small batches. Larger batches get an extra
/// overall bar and reuse the per-image bars for the most recent images.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_count: usize,
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
            file_bars: Vec::new(),
            file_count: 0,
        }
    }

    /// Create the bars for `file_count` images
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;

        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(THREAD_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Number of images this manager was initialized for
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    fn bar(&self, index: usize) -> Option<&ProgressBar> {
        self.file_bars
            .get(index % MAX_INDIVIDUAL_PROGRESS_BARS.max(1))
    }

    /// Point a bar at a new image that will lay up to `max_paths` threads
    pub fn start_file(&self, index: usize, path: &Path, max_paths: usize) {
        if let Some(bar) = self.bar(index) {
            bar.reset();
            bar.set_length(max_paths as u64);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(path.file_name().unwrap_or_default().to_string_lossy().to_string());
        }
    }

    /// Report how many threads have been laid for an image
    pub fn update_threads(&self, index: usize, threads: usize) {
        if let Some(bar) = self.bar(index) {
            bar.set_position(threads as u64);
        }
    }

    /// Mark an image as done, noting why planning stopped
    pub fn complete_file(&self, index: usize, threads: usize, note: &str) {
        if let Some(bar) = self.bar(index) {
            bar.set_length(threads as u64);
            bar.set_position(threads as u64);
            bar.set_message(format!("✓ {note}"));
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All images processed");
        }
        let _ = self.multi_progress.clear();
    }
}
