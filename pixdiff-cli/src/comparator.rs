use std::path::{Path, PathBuf};

use pixdiff_core::{CompareOptions, ComparisonResult, DifferenceMask};
use pixdiff_io::{Image, diff_path_for, write_mask};
use tracing::{info, instrument, warn};

use crate::error::{CompareError, Result};

/// Verdict for a comparison that ran to completion
#[derive(Debug, Clone)]
pub enum Outcome {
    Passed(ComparisonResult),
    BelowThreshold(ComparisonResult),
}

impl Outcome {
    pub fn result(&self) -> &ComparisonResult {
        match self {
            Outcome::Passed(result) | Outcome::BelowThreshold(result) => result,
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self, Outcome::Passed(_))
    }
}

/// Compares one reference/candidate pair and writes the difference mask
#[derive(Debug, Clone, Default)]
pub struct ImageComparator {
    options: CompareOptions,
    diff_path: Option<PathBuf>,
}

impl ImageComparator {
    pub fn new(options: CompareOptions) -> Self {
        Self {
            options,
            diff_path: None,
        }
    }

    /// Write the mask here instead of next to the reference
    pub fn with_diff_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.diff_path = Some(path.into());
        self
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    #[instrument(skip_all, fields(reference = %reference.display(), candidate = %candidate.display()))]
    pub fn compare(&self, reference: &Path, candidate: &Path) -> Result<Outcome> {
        self.options.validate()?;

        let (reference_img, candidate_img) = match (Image::open(reference), Image::open(candidate)) {
            (Ok(a), Ok(b)) => (a, b),
            (Err(source), _) | (_, Err(source)) => {
                return Err(CompareError::Decode {
                    reference: reference.to_path_buf(),
                    candidate: candidate.to_path_buf(),
                    source,
                });
            }
        };

        if candidate_img.size() != reference_img.size() {
            warn!(
                reference = ?reference_img.size(),
                candidate = ?candidate_img.size(),
                "dimensions differ; resampling candidate"
            );
        }
        let candidate_img = candidate_img.matched_to(&reference_img)?;

        let mask = DifferenceMask::from_rgb(
            reference_img.view_u8()?,
            candidate_img.view_u8()?,
            self.options.pixel_cutoff,
        )?;

        let diff_path = self
            .diff_path
            .clone()
            .unwrap_or_else(|| diff_path_for(reference));
        write_mask(&mask, &diff_path)?;

        let result = ComparisonResult::new(
            mask.changed_pixels(),
            mask.total_pixels(),
            self.options.threshold,
            diff_path,
        );
        info!(
            score = result.score.value(),
            threshold = result.threshold,
            changed = result.changed_pixels,
            total = result.total_pixels,
            passed = result.passed,
            "comparison finished"
        );

        Ok(if result.passed {
            Outcome::Passed(result)
        } else {
            Outcome::BelowThreshold(result)
        })
    }
}
