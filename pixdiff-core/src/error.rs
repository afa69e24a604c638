use thiserror::Error;

/// Errors raised by the pixel math
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize, usize),
        found: (usize, usize, usize),
    },

    #[error("Unsupported channel count: {0} (expected 3)")]
    UnsupportedChannels(usize),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
