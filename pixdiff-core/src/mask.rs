//! Binarized difference mask

use ndarray::{Array2, ArrayView2, ArrayView3};
use tracing::debug;

use crate::diff::{abs_diff, luma};
use crate::error::Result;
use crate::score::SimilarityScore;

/// Value written to mask cells that differ
pub const MASK_ON: u8 = 255;

/// Single-channel grid where each cell is 0 (equal) or [`MASK_ON`] (different)
#[derive(Debug, Clone, PartialEq)]
pub struct DifferenceMask {
    cells: Array2<u8>,
}

impl DifferenceMask {
    /// Build the mask for two RGB grids of identical shape.
    ///
    /// A cell is set when the luma of the per-channel absolute
    /// difference is strictly greater than `cutoff`.
    pub fn from_rgb(
        reference: ArrayView3<u8>,
        candidate: ArrayView3<u8>,
        cutoff: u8,
    ) -> Result<Self> {
        let diff = abs_diff(reference, candidate)?;
        let magnitude = luma(diff.view())?;
        let mask = Self::binarize(magnitude.view(), cutoff);

        debug!(
            width = mask.width(),
            height = mask.height(),
            changed = mask.changed_pixels(),
            cutoff,
            "difference mask built"
        );
        Ok(mask)
    }

    /// Threshold a grayscale magnitude grid
    pub fn binarize(magnitude: ArrayView2<u8>, cutoff: u8) -> Self {
        let cells = magnitude.mapv(|v| if v > cutoff { MASK_ON } else { 0 });
        Self { cells }
    }

    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    pub fn total_pixels(&self) -> usize {
        self.cells.len()
    }

    /// Number of non-zero cells
    pub fn changed_pixels(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    pub fn similarity(&self) -> SimilarityScore {
        SimilarityScore::from_counts(self.changed_pixels(), self.total_pixels())
    }

    pub fn cells(&self) -> ArrayView2<'_, u8> {
        self.cells.view()
    }

    /// Row-major copy of the cells, suitable for an 8-bit grayscale buffer
    pub fn to_raw(&self) -> Vec<u8> {
        self.cells.iter().copied().collect()
    }
}
