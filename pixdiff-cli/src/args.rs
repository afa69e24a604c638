use std::path::PathBuf;

use clap::{ArgAction, Parser};
use pixdiff_core::{CompareOptions, DEFAULT_PIXEL_CUTOFF, DEFAULT_THRESHOLD};

#[derive(Parser, Debug)]
#[command(name = "pixdiff")]
#[command(version, about = "Pixel-level visual regression check for one image pair", long_about = None)]
pub struct Args {
    /// Reference image
    #[arg(value_name = "IMAGE1")]
    pub reference: PathBuf,

    /// Image to compare against the reference
    #[arg(value_name = "IMAGE2")]
    pub candidate: PathBuf,

    /// Minimum fraction of matching pixels (0.0-1.0)
    #[arg(value_name = "THRESHOLD", default_value_t = DEFAULT_THRESHOLD, allow_negative_numbers = true)]
    pub threshold: f64,

    /// Luma difference (0-255) above which a pixel counts as changed
    #[arg(long, value_name = "N", default_value_t = DEFAULT_PIXEL_CUTOFF)]
    pub cutoff: u8,

    /// Where to write the difference mask (default: <IMAGE1 stem>_diff.png)
    #[arg(long, value_name = "FILE")]
    pub diff_out: Option<PathBuf>,

    /// Write the comparison result as JSON
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn compare_options(&self) -> CompareOptions {
        CompareOptions::default()
            .with_threshold(self.threshold)
            .with_pixel_cutoff(self.cutoff)
    }
}
