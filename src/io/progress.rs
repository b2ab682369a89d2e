//! Progress display for sample-group processing

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static GROUP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many sample groups a creator has processed
///
/// Hidden managers keep the same interface but draw nothing, so callers
/// never branch on whether output is wanted.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a visible bar expecting `groups` processing steps
    pub fn new(groups: usize, label: &str) -> Self {
        let bar = ProgressBar::new(groups as u64);
        bar.set_style(GROUP_STYLE.clone());
        bar.set_prefix(label.to_string());
        Self { bar }
    }

    /// Create a manager that never draws
    pub fn hidden(groups: usize) -> Self {
        let bar = ProgressBar::with_draw_target(Some(groups as u64), ProgressDrawTarget::hidden());
        Self { bar }
    }

    /// Handle to the underlying bar, shared with the texture creator
    pub fn bar(&self) -> ProgressBar {
        self.bar.clone()
    }

    /// Number of groups reported as processed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finish the bar with a closing message
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }
}
