
//! Image decoding, resampling and diff artifact output

pub mod artifact;
pub mod error;
pub mod image;

pub use crate::artifact::{diff_path_for, write_mask};
pub use crate::error::{IoError, Result};
pub use crate::image::Image;
