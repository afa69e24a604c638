//! Command-line front end: compare two images and map the verdict to an exit code

pub mod args;
pub mod comparator;
pub mod error;
pub mod logging;
pub mod report;

use std::ffi::OsString;
use std::io::Write;

use clap::Parser;
use tracing::error;

pub use args::Args;
pub use comparator::{ImageComparator, Outcome};
pub use error::{CompareError, Result};

/// Images similar enough
pub const EXIT_PASS: u8 = 0;
/// Below threshold, unreadable input, processing failure or bad arguments
pub const EXIT_FAIL: u8 = 1;

/// Parse `argv`, run one comparison and return the process exit code.
/// Report lines go to `out`; logs and usage errors go to stderr.
pub fn run<I, T, W>(argv: I, out: &mut W) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() { EXIT_FAIL } else { EXIT_PASS };
        }
    };

    logging::init(args.verbose);

    match execute(&args, out) {
        Ok(code) => code,
        Err(err) => {
            error!(error = %err, "comparison failed");
            let _ = if err.is_decode() {
                writeln!(out, "Error: {err}")
            } else {
                writeln!(out, "Error comparing images: {err}")
            };
            EXIT_FAIL
        }
    }
}

fn execute<W: Write>(args: &Args, out: &mut W) -> Result<u8> {
    let mut comparator = ImageComparator::new(args.compare_options());
    if let Some(path) = &args.diff_out {
        comparator = comparator.with_diff_path(path);
    }

    let outcome = comparator.compare(&args.reference, &args.candidate)?;
    let result = outcome.result();

    writeln!(out, "Similarity: {}", result.score)?;
    if !outcome.passed() {
        writeln!(
            out,
            "Images differ more than threshold allows: {} < {}",
            result.score, result.threshold
        )?;
    }

    if let Some(path) = &args.report {
        report::write_report(result, path)?;
    }

    Ok(if outcome.passed() { EXIT_PASS } else { EXIT_FAIL })
}
