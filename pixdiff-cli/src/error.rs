use std::path::PathBuf;

use pixdiff_core::CoreError;
use pixdiff_io::IoError;
use thiserror::Error;

/// Why a comparison could not produce a verdict.
///
/// `Decode` means the inputs never loaded; every other variant is a
/// processing failure after both images were decoded.
#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Could not load images {} or {}", reference.display(), candidate.display())]
    Decode {
        reference: PathBuf,
        candidate: PathBuf,
        #[source]
        source: IoError,
    },

    #[error(transparent)]
    Pixels(#[from] CoreError),

    #[error(transparent)]
    Io(#[from] IoError),

    #[error("Could not write report {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Could not write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CompareError {
    pub fn is_decode(&self) -> bool {
        matches!(self, CompareError::Decode { .. })
    }
}

pub type Result<T> = std::result::Result<T, CompareError>;
