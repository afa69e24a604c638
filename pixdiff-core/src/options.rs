use tracing::warn;

use crate::error::{CoreError, Result};

/// Default minimum fraction of matching pixels
pub const DEFAULT_THRESHOLD: f64 = 0.95;

/// Default luma difference above which a pixel counts as changed
pub const DEFAULT_PIXEL_CUTOFF: u8 = 30;

/// Tunables for a single comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareOptions {
    pub threshold: f64,
    pub pixel_cutoff: u8,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            pixel_cutoff: DEFAULT_PIXEL_CUTOFF,
        }
    }
}

impl CompareOptions {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_pixel_cutoff(mut self, cutoff: u8) -> Self {
        self.pixel_cutoff = cutoff;
        self
    }

    /// Reject NaN thresholds. Values outside `[0, 1]` are allowed
    /// (they trivially pass or fail) and only logged.
    pub fn validate(&self) -> Result<()> {
        if self.threshold.is_nan() {
            return Err(CoreError::InvalidInput("threshold is NaN".to_string()));
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            warn!(
                threshold = self.threshold,
                "threshold outside [0, 1]; result is fixed regardless of input"
            );
        }
        Ok(())
    }
}
