//! Per-pixel difference and luma reduction

use ndarray::{Array2, Array3, ArrayView3, Zip};

use crate::error::{CoreError, Result};

/// Luma weights (R, G, B), ITU-R BT.601
pub const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// Absolute per-channel difference between two `[height, width, channels]` grids
pub fn abs_diff(reference: ArrayView3<u8>, candidate: ArrayView3<u8>) -> Result<Array3<u8>> {
    if reference.dim() != candidate.dim() {
        return Err(CoreError::ShapeMismatch {
            expected: reference.dim(),
            found: candidate.dim(),
        });
    }

    Ok(Zip::from(&reference)
        .and(&candidate)
        .map_collect(|&a, &b| a.abs_diff(b)))
}

/// Reduce an RGB grid to single-channel luma, rounded to nearest
pub fn luma(rgb: ArrayView3<u8>) -> Result<Array2<u8>> {
    let (height, width, channels) = rgb.dim();
    if channels != 3 {
        return Err(CoreError::UnsupportedChannels(channels));
    }

    Ok(Array2::from_shape_fn((height, width), |(y, x)| {
        let [wr, wg, wb] = LUMA_WEIGHTS;
        let value = wr * f32::from(rgb[[y, x, 0]])
            + wg * f32::from(rgb[[y, x, 1]])
            + wb * f32::from(rgb[[y, x, 2]]);
        value.round().clamp(0.0, 255.0) as u8
    }))
}
