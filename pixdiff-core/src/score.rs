use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Fraction of pixels considered equal, in `[0.0, 1.0]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct SimilarityScore(f64);

impl SimilarityScore {
    /// Score from a count of changed cells out of `total`.
    /// An empty grid scores 1.0.
    pub fn from_counts(changed: usize, total: usize) -> Self {
        if total == 0 {
            return Self(1.0);
        }
        let changed = changed.min(total);
        Self(1.0 - changed as f64 / total as f64)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// `true` when the score reaches `threshold` (inclusive)
    pub fn meets(self, threshold: f64) -> bool {
        self.0 >= threshold
    }
}

impl fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

/// Outcome of comparing one image pair
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    pub passed: bool,
    pub score: SimilarityScore,
    pub threshold: f64,
    pub diff_path: PathBuf,
    pub changed_pixels: usize,
    pub total_pixels: usize,
}

impl ComparisonResult {
    pub fn new(
        changed_pixels: usize,
        total_pixels: usize,
        threshold: f64,
        diff_path: PathBuf,
    ) -> Self {
        let score = SimilarityScore::from_counts(changed_pixels, total_pixels);
        Self {
            passed: score.meets(threshold),
            score,
            threshold,
            diff_path,
            changed_pixels,
            total_pixels,
        }
    }
}
