use std::path::Path;

use image::RgbImage;
use image::imageops::{self, FilterType};
use ndarray::{Array3, ArrayView3};
use tracing::debug;

use crate::error::{IoError, Result};

/// Decoded raster normalised to 8-bit RGB
#[derive(Debug, Clone)]
pub struct Image {
    buffer: RgbImage,
}

impl Image {
    /// Number of channels every decoded image carries
    pub const BAND_COUNT: usize = 3;

    /// Open and decode an image file; any format the `image` crate reads is accepted
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| IoError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            path = %path.display(),
            width = decoded.width(),
            height = decoded.height(),
            color = ?decoded.color(),
            "image decoded"
        );

        Ok(Self::from_rgb(decoded.to_rgb8()))
    }

    pub fn from_rgb(buffer: RgbImage) -> Self {
        Self { buffer }
    }

    /// Get image dimensions (width, height)
    pub fn size(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    pub fn width(&self) -> usize {
        self.buffer.width() as usize
    }

    pub fn height(&self) -> usize {
        self.buffer.height() as usize
    }

    pub fn band_count(&self) -> usize {
        Self::BAND_COUNT
    }

    /// Grid shape as (height, width, bands)
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height(), self.width(), self.band_count())
    }

    /// Borrow pixels as an array (shape: [height, width, bands])
    pub fn view_u8(&self) -> Result<ArrayView3<'_, u8>> {
        ArrayView3::from_shape(self.shape(), self.buffer.as_raw())
            .map_err(|_| IoError::InvalidDimensions)
    }

    /// Read full image as an owned u8 array (shape: [height, width, bands])
    pub fn read_u8(&self) -> Result<Array3<u8>> {
        Ok(self.view_u8()?.to_owned())
    }

    /// Stretch to exactly `width` x `height` with bilinear filtering
    pub fn resized(&self, width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(IoError::InvalidDimensions);
        }
        let width = u32::try_from(width).map_err(|_| IoError::InvalidDimensions)?;
        let height = u32::try_from(height).map_err(|_| IoError::InvalidDimensions)?;

        let buffer = imageops::resize(&self.buffer, width, height, FilterType::Triangle);
        Ok(Self { buffer })
    }

    /// Resample to `reference`'s width and height if they differ
    pub fn matched_to(self, reference: &Image) -> Result<Self> {
        if self.size() == reference.size() {
            return Ok(self);
        }
        self.resized(reference.width(), reference.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| Rgb([(x * 8) as u8, (y * 8) as u8, 128]))
    }

    #[test]
    fn test_view_layout_matches_pixels() {
        let img = Image::from_rgb(gradient(4, 3));
        let view = img.view_u8().unwrap();

        assert_eq!(view.dim(), (3, 4, 3));
        assert_eq!(view[[2, 1, 0]], 8);
        assert_eq!(view[[2, 1, 1]], 16);
        assert_eq!(view[[2, 1, 2]], 128);
    }

    #[test]
    fn test_read_u8_owned_copy() {
        let img = Image::from_rgb(gradient(2, 2));
        let data = img.read_u8().unwrap();
        assert_eq!(data.shape(), &[2, 2, 3]);
    }

    #[test]
    fn test_resized_stretches_without_aspect() {
        let img = Image::from_rgb(gradient(10, 4));
        let resized = img.resized(3, 9).unwrap();
        assert_eq!(resized.size(), (3, 9));
    }

    #[test]
    fn test_resized_rejects_zero() {
        let img = Image::from_rgb(gradient(4, 4));
        assert!(matches!(img.resized(0, 4), Err(IoError::InvalidDimensions)));
    }

    #[test]
    fn test_matched_to_same_size_is_noop() {
        let reference = Image::from_rgb(gradient(5, 5));
        let candidate = Image::from_rgb(gradient(5, 5));
        let matched = candidate.matched_to(&reference).unwrap();
        assert_eq!(matched.read_u8().unwrap(), reference.read_u8().unwrap());
    }

    #[test]
    fn test_matched_to_resamples() {
        let reference = Image::from_rgb(gradient(8, 6));
        let candidate = Image::from_rgb(gradient(16, 12));
        let matched = candidate.matched_to(&reference).unwrap();
        assert_eq!(matched.size(), (8, 6));
    }

    #[test]
    fn test_open_missing_file() {
        let result = Image::open("does/not/exist.png");
        assert!(matches!(result, Err(IoError::Decode { .. })));
    }

    #[test]
    fn test_open_roundtrip_through_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grad.png");
        gradient(6, 5).save(&path).unwrap();

        let img = Image::open(&path).unwrap();
        assert_eq!(img.size(), (6, 5));
        assert_eq!(img.band_count(), 3);
    }

    #[test]
    fn test_open_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();

        assert!(matches!(Image::open(&path), Err(IoError::Decode { .. })));
    }
}
