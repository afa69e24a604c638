//! Pixel math for image comparison: differences, masks and scores

pub mod diff;
pub mod error;
pub mod mask;
pub mod options;
pub mod score;

pub use error::{CoreError, Result};
pub use mask::{DifferenceMask, MASK_ON};
pub use options::{CompareOptions, DEFAULT_PIXEL_CUTOFF, DEFAULT_THRESHOLD};
pub use score::{ComparisonResult, SimilarityScore};
