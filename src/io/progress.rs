//! Per-class progress reporting for batch image processing

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static CLASS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:>12} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display across class folders
///
/// One bar is drawn per class folder as the walk enters it; when progress is
/// disabled every bar is hidden so callers never branch on display state.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    enabled: bool,
}

impl ProgressManager {
    /// Create a progress manager, optionally with display disabled
    pub fn new(enabled: bool) -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            enabled,
        }
    }

    /// Start a progress bar for one class folder
    pub fn class_bar(&self, class_name: &str, image_count: usize) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new(image_count as u64);
        bar.set_style(CLASS_STYLE.clone());
        bar.set_message(class_name.to_string());
        self.multi_progress.add(bar)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        let _ = self.multi_progress.clear();
    }
}
