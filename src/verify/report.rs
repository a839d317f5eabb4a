//! Verification report types and terminal formatting.

use std::fmt;
use std::path::PathBuf;

use crate::descriptor::Split;

/// How many unpaired stems to list per direction before truncating.
pub const MAX_LISTED_STEMS: usize = 20;

/// The result of verifying one dataset descriptor.
#[derive(Clone, Debug, Default)]
pub struct VerifyReport {
    /// Outcome per split, in the fixed train/val/test order.
    pub outcomes: Vec<SplitOutcome>,
}

impl VerifyReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, outcome: SplitOutcome) {
        self.outcomes.push(outcome);
    }

    /// Per-split reports for the splits that were actually checked.
    pub fn checked(&self) -> impl Iterator<Item = &SplitReport> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            SplitOutcome::Checked(report) => Some(report),
            SplitOutcome::Skipped(_) => None,
        })
    }

    /// Total images across all checked splits.
    pub fn total_images(&self) -> usize {
        self.checked().map(|s| s.image_count).sum()
    }

    /// Total label files across all checked splits.
    pub fn total_labels(&self) -> usize {
        self.checked().map(|s| s.label_count).sum()
    }

    /// Number of checked splits with at least one unpaired stem.
    pub fn mismatched_split_count(&self) -> usize {
        self.checked().filter(|s| !s.is_clean()).count()
    }

    /// Total unpaired stems, both directions, across all splits.
    pub fn mismatch_count(&self) -> usize {
        self.checked().map(|s| s.mismatch_count()).sum()
    }

    /// True iff every checked split pairs cleanly.
    pub fn is_clean(&self) -> bool {
        self.checked().all(|s| s.is_clean())
    }
}

impl fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            match outcome {
                SplitOutcome::Skipped(split) => {
                    writeln!(f, "Split '{}' not defined in descriptor, skipping", split)?;
                }
                SplitOutcome::Checked(report) => write!(f, "{}", report)?,
            }
        }

        writeln!(
            f,
            "\nTotal images: {}, total labels: {}",
            self.total_images(),
            self.total_labels()
        )?;

        if self.is_clean() {
            writeln!(f, "\nDataset verification passed: images and labels match")
        } else {
            writeln!(
                f,
                "\nDataset verification failed: {} unpaired stem(s) in {} split(s)",
                self.mismatch_count(),
                self.mismatched_split_count()
            )
        }
    }
}

/// What happened to one split.
#[derive(Clone, Debug)]
pub enum SplitOutcome {
    /// The split was not defined in the descriptor.
    Skipped(Split),
    /// The split was enumerated and matched.
    Checked(SplitReport),
}

/// Pairing results for one checked split.
#[derive(Clone, Debug)]
pub struct SplitReport {
    pub split: Split,
    /// Image directory actually enumerated (absolute).
    pub images_dir: PathBuf,
    /// Label directory derived from the image directory.
    pub labels_dir: PathBuf,
    pub image_count: usize,
    pub label_count: usize,
    /// Stems with an image but no label file, sorted.
    pub images_only: Vec<String>,
    /// Stems with a label file but no image, sorted.
    pub labels_only: Vec<String>,
}

impl SplitReport {
    pub fn is_clean(&self) -> bool {
        self.images_only.is_empty() && self.labels_only.is_empty()
    }

    pub fn mismatch_count(&self) -> usize {
        self.images_only.len() + self.labels_only.len()
    }
}

impl fmt::Display for SplitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nSplit: {}", self.split)?;
        writeln!(f, "  Images dir: {}", self.images_dir.display())?;
        writeln!(f, "  Labels dir: {}", self.labels_dir.display())?;
        writeln!(f, "  {} images, {} labels", self.image_count, self.label_count)?;

        if !self.images_only.is_empty() {
            writeln!(
                f,
                "  Images without label ({}): {}",
                self.images_only.len(),
                truncated_list(&self.images_only)
            )?;
        }
        if !self.labels_only.is_empty() {
            writeln!(
                f,
                "  Labels without image ({}): {}",
                self.labels_only.len(),
                truncated_list(&self.labels_only)
            )?;
        }

        Ok(())
    }
}

/// Format up to [`MAX_LISTED_STEMS`] stems, noting how many were omitted.
fn truncated_list(stems: &[String]) -> String {
    let shown = &stems[..stems.len().min(MAX_LISTED_STEMS)];
    let mut out = format!("[{}]", shown.join(", "));
    if stems.len() > MAX_LISTED_STEMS {
        out.push_str(&format!(" (+{} more)", stems.len() - MAX_LISTED_STEMS));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_report(images_only: Vec<String>, labels_only: Vec<String>) -> SplitReport {
        SplitReport {
            split: Split::Train,
            images_dir: PathBuf::from("/d/images/train"),
            labels_dir: PathBuf::from("/d/labels/train"),
            image_count: images_only.len(),
            label_count: labels_only.len(),
            images_only,
            labels_only,
        }
    }

    #[test]
    fn clean_report_passes() {
        let mut report = VerifyReport::new();
        report.add(SplitOutcome::Checked(split_report(vec![], vec![])));
        report.add(SplitOutcome::Skipped(Split::Test));

        assert!(report.is_clean());
        assert_eq!(report.mismatched_split_count(), 0);
        let text = report.to_string();
        assert!(text.contains("verification passed"));
        assert!(text.contains("Split 'test' not defined"));
    }

    #[test]
    fn mismatches_flip_the_overall_outcome() {
        let mut report = VerifyReport::new();
        report.add(SplitOutcome::Checked(split_report(
            vec!["b".into()],
            vec![],
        )));

        assert!(!report.is_clean());
        assert_eq!(report.mismatch_count(), 1);
        let text = report.to_string();
        assert!(text.contains("Images without label (1): [b]"));
        assert!(text.contains("verification failed"));
    }

    #[test]
    fn stem_lists_truncate_at_twenty() {
        let stems: Vec<String> = (0..25).map(|i| format!("img_{:03}", i)).collect();
        let text = truncated_list(&stems);
        assert!(text.contains("img_019"));
        assert!(!text.contains("img_020"));
        assert!(text.ends_with("(+5 more)"));
    }
}
