use std::fs;
use std::path::Path;

use pixdiff_core::ComparisonResult;
use tracing::info;

use crate::error::{CompareError, Result};

/// Write `result` as pretty-printed JSON
pub fn write_report(result: &ComparisonResult, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    fs::write(path, json).map_err(|source| CompareError::Report {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "report written");
    Ok(())
}
