//! Dataset descriptor loading.
//!
//! The descriptor is an Ultralytics-style `data.yaml`: a mapping whose
//! `train`, `val`, and `test` keys (each optional) name that split's image
//! directory. Everything else in the file (class names, `nc`, download
//! URLs) is ignored here.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SplitcheckError;

/// A named dataset partition, processed in the order listed here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Split {
    Train,
    Val,
    Test,
}

impl Split {
    /// All splits, in reporting order.
    pub const ALL: [Split; 3] = [Split::Train, Split::Val, Split::Test];

    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Val => "val",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parsed dataset descriptor: split name → image directory.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Descriptor {
    pub train: Option<PathBuf>,
    pub val: Option<PathBuf>,
    pub test: Option<PathBuf>,
}

impl Descriptor {
    /// The image directory configured for `split`, if any.
    pub fn split_dir(&self, split: Split) -> Option<&Path> {
        match split {
            Split::Train => self.train.as_deref(),
            Split::Val => self.val.as_deref(),
            Split::Test => self.test.as_deref(),
        }
    }
}

/// Load and parse a descriptor file.
///
/// A missing file and an unparseable file are distinct errors, but both are
/// configuration failures: nothing further is attempted.
pub fn load_descriptor(path: &Path) -> Result<Descriptor, SplitcheckError> {
    if !path.exists() {
        return Err(SplitcheckError::DescriptorNotFound {
            path: path.to_path_buf(),
        });
    }

    let data = fs::read_to_string(path).map_err(SplitcheckError::Io)?;
    serde_yaml::from_str(&data).map_err(|source| SplitcheckError::DescriptorParse {
        path: path.to_path_buf(),
        source,
    })
}
