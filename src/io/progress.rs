//! Progress display while the engine works through the catalog

use crate::spatial::tiles::TileShape;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Shapes: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar advancing once per catalog shape
pub struct ProgressManager {
    bar: ProgressBar,
    placed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with an empty bar
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::new(0),
            placed: 0,
        }
    }

    /// Size the bar for `shape_count` shapes
    pub fn initialize(&mut self, shape_count: usize) {
        self.bar.set_length(shape_count as u64);
        self.bar.set_position(0);
        self.bar.set_style(PROGRESS_STYLE.clone());
        self.placed = 0;
    }

    /// Show which shape is being placed alongside the running total
    pub fn start_shape(&self, shape: &TileShape) {
        self.bar.set_message(format!(
            "{} ({}x{}), {} placed",
            shape.id, shape.width, shape.length, self.placed
        ));
    }

    /// Advance past a finished shape and display the running placement total
    pub fn complete_shape(&mut self, total_placements: usize) {
        self.placed = total_placements;
        self.bar.set_message(format!("{total_placements} placed"));
        self.bar.inc(1);
    }

    /// Placements reported so far
    pub const fn placed(&self) -> usize {
        self.placed
    }

    /// Text currently shown next to the bar
    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
