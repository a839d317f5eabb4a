//! Split consistency verification.
//!
//! Each split's image and label directories are enumerated, file stems are
//! paired across the two sets, and the differences in either direction are
//! reported. Mismatches are accumulated across splits, never
//! short-circuited, so the report always covers the whole dataset.

mod report;

pub use report::{SplitOutcome, SplitReport, VerifyReport, MAX_LISTED_STEMS};

use std::collections::BTreeSet;
use std::path::Path;

use crate::descriptor::{Descriptor, Split};
use crate::resolve::{resolve_split_dirs, SplitDirs};
use crate::scan::{collect_files_with_extensions, file_stem, IMAGE_EXTENSIONS, LABEL_EXTENSION};

/// Verify every split the descriptor defines, in train/val/test order.
///
/// Relative split directories are resolved against `cwd`. Undefined splits
/// are recorded as skipped; a nonexistent directory counts as empty rather
/// than failing, so this always produces a full report.
pub fn verify_dataset(descriptor: &Descriptor, cwd: &Path) -> VerifyReport {
    let mut report = VerifyReport::new();

    for split in Split::ALL {
        match descriptor.split_dir(split) {
            None => report.add(SplitOutcome::Skipped(split)),
            Some(images_dir) => {
                let dirs = resolve_split_dirs(images_dir, cwd);
                report.add(SplitOutcome::Checked(check_split(split, &dirs)));
            }
        }
    }

    report
}

/// Enumerate one split's directory pair and compute stem differences.
fn check_split(split: Split, dirs: &SplitDirs) -> SplitReport {
    let images = collect_files_with_extensions(&dirs.images_dir, &IMAGE_EXTENSIONS);
    let labels = collect_files_with_extensions(&dirs.labels_dir, &[LABEL_EXTENSION]);

    let image_stems = stem_set(&images);
    let label_stems = stem_set(&labels);

    let images_only: Vec<String> = image_stems.difference(&label_stems).cloned().collect();
    let labels_only: Vec<String> = label_stems.difference(&image_stems).cloned().collect();

    SplitReport {
        split,
        images_dir: dirs.images_dir.clone(),
        labels_dir: dirs.labels_dir.clone(),
        image_count: images.len(),
        label_count: labels.len(),
        images_only,
        labels_only,
    }
}

// BTreeSet keeps difference output sorted without a separate sort pass.
fn stem_set(files: &[std::path::PathBuf]) -> BTreeSet<String> {
    files.iter().filter_map(|path| file_stem(path)).collect()
}
