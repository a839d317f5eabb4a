use std::path::PathBuf;
use thiserror::Error;

use crate::verify::VerifyReport;

/// The main error type for splitcheck operations.
#[derive(Debug, Error)]
pub enum SplitcheckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset descriptor not found: {path}")]
    DescriptorNotFound { path: PathBuf },

    #[error("Failed to parse dataset descriptor {path}: {source}")]
    DescriptorParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(
        "Dataset verification failed: {mismatch_count} unpaired stem(s) across {split_count} split(s)"
    )]
    MismatchesFound {
        split_count: usize,
        mismatch_count: usize,
        report: VerifyReport,
    },
}

impl SplitcheckError {
    /// The process exit code for this error.
    ///
    /// Data mismatches exit with 1; configuration problems (descriptor
    /// missing or unreadable) exit with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            SplitcheckError::MismatchesFound { .. } => 1,
            _ => 2,
        }
    }
}
