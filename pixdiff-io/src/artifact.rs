//! Diff artifact naming and encoding

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use image::{GrayImage, ImageFormat};
use pixdiff_core::DifferenceMask;
use tracing::info;

use crate::error::{IoError, Result};

const DIFF_SUFFIX: &str = "_diff";

/// Path of the diff artifact for a reference image.
///
/// Only the final extension is replaced: `shots/home.png` becomes
/// `shots/home_diff.png`, and so does `shots/home.jpg`. The result never
/// equals `reference`.
pub fn diff_path_for(reference: &Path) -> PathBuf {
    let mut name: OsString = reference
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_default();
    name.push(DIFF_SUFFIX);
    name.push(".png");
    reference.with_file_name(name)
}

/// Encode the mask as an 8-bit grayscale PNG, overwriting `path`
pub fn write_mask(mask: &DifferenceMask, path: &Path) -> Result<()> {
    let width = u32::try_from(mask.width()).map_err(|_| IoError::InvalidDimensions)?;
    let height = u32::try_from(mask.height()).map_err(|_| IoError::InvalidDimensions)?;
    let buffer =
        GrayImage::from_raw(width, height, mask.to_raw()).ok_or(IoError::InvalidDimensions)?;

    buffer
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| IoError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), "diff artifact written");
    Ok(())
}
