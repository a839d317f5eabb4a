//! Splitcheck: dataset split consistency verification.
//!
//! Splitcheck checks a YOLO-style object-detection dataset before training:
//! for every split named in the `data.yaml` descriptor it pairs image files
//! with label files by stem and reports anything unpaired in either
//! direction.
//!
//! # Modules
//!
//! - [`descriptor`]: the `data.yaml` descriptor and the split enum
//! - [`resolve`]: image-directory to label-directory resolution
//! - [`scan`]: recursive, extension-filtered file enumeration
//! - [`verify`]: stem matching and the verification report
//! - [`error`]: error types for splitcheck operations

pub mod descriptor;
pub mod error;
pub mod resolve;
pub mod scan;
pub mod verify;

use std::env;
use std::path::PathBuf;

use clap::Parser;

pub use error::SplitcheckError;

/// The splitcheck CLI application.
#[derive(Parser)]
#[command(name = "splitcheck")]
#[command(version, author, about)]
struct Cli {
    /// Path to the dataset descriptor (data.yaml).
    #[arg(long, default_value = "data/dataset.yaml")]
    data: PathBuf,
}

/// Run the splitcheck CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`. Prints
/// the full verification report to stdout and returns an error carrying the
/// report when any split has unpaired stems, so the binary can exit 1.
pub fn run() -> Result<(), SplitcheckError> {
    let cli = Cli::parse();

    let descriptor = descriptor::load_descriptor(&cli.data)?;
    let cwd = env::current_dir()?;

    let report = verify::verify_dataset(&descriptor, &cwd);
    print!("{}", report);

    if report.is_clean() {
        Ok(())
    } else {
        Err(SplitcheckError::MismatchesFound {
            split_count: report.mismatched_split_count(),
            mismatch_count: report.mismatch_count(),
            report,
        })
    }
}
