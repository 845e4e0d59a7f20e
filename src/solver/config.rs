//! Solver tuning knobs

/// Configuration for a solving session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Letters proposed per open segment per round
    pub extension_depth: usize,
    /// Segments of this length are no longer extended
    pub max_segment_len: usize,
    /// Draw progress bars for the scoring passes
    pub show_progress: bool,
}

impl SolverConfig {
    #[must_use]
    pub const fn new(extension_depth: usize, max_segment_len: usize) -> Self {
        Self {
            extension_depth,
            max_segment_len,
            show_progress: false,
        }
    }

    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(2, 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = SolverConfig::default();
        assert_eq!(config.extension_depth, 2);
        assert_eq!(config.max_segment_len, 5);
        assert!(!config.show_progress);
    }

    #[test]
    fn with_progress_only_touches_progress() {
        let config = SolverConfig::new(3, 4).with_progress(true);
        assert_eq!(config, SolverConfig {
            extension_depth: 3,
            max_segment_len: 4,
            show_progress: true,
        });
    }
}
