//! Recursive, extension-filtered file enumeration.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Image extensions accepted when enumerating a split's image directory.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "tiff", "webp"];

/// The extension of YOLO label files.
pub const LABEL_EXTENSION: &str = "txt";

/// Collect every file under `root` (recursively) whose extension matches
/// one of `extensions`, case-insensitively.
///
/// A nonexistent `root` yields an empty list rather than an error, so a
/// misconfigured split still produces a report (as 0 files) instead of
/// aborting the run. Result ordering is not significant; callers consume
/// this into sets.
pub fn collect_files_with_extensions(root: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    if !root.exists() {
        return Vec::new();
    }

    WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && has_extension(entry.path(), extensions))
        .map(|entry| entry.path().to_path_buf())
        .collect()
}

fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };

    allowed
        .iter()
        .any(|allowed_ext| ext.eq_ignore_ascii_case(allowed_ext))
}

/// The file's stem: final path component minus extension.
///
/// Only the final component participates, so `a/x.jpg` and `b/x.txt` share
/// the stem `x` even across subdirectories.
pub fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn nonexistent_directory_is_empty() {
        let files = collect_files_with_extensions(Path::new("no/such/dir"), &IMAGE_EXTENSIONS);
        assert!(files.is_empty());
    }

    #[test]
    fn filters_by_extension_case_insensitively() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a.jpg"), b"").unwrap();
        fs::write(tmp.path().join("b.JPG"), b"").unwrap();
        fs::write(tmp.path().join("c.PnG"), b"").unwrap();
        fs::write(tmp.path().join("notes.txt"), b"").unwrap();
        fs::write(tmp.path().join("noext"), b"").unwrap();

        let files = collect_files_with_extensions(tmp.path(), &IMAGE_EXTENSIONS);
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn traversal_is_recursive() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("sub").join("deeper");
        fs::create_dir_all(&nested).unwrap();
        fs::write(tmp.path().join("top.txt"), b"").unwrap();
        fs::write(nested.join("deep.txt"), b"").unwrap();

        let files = collect_files_with_extensions(tmp.path(), &[LABEL_EXTENSION]);
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn stem_drops_extension_only() {
        assert_eq!(file_stem(Path::new("a/b/frame_001.jpg")).unwrap(), "frame_001");
        assert_eq!(file_stem(Path::new("archive.tar.gz")).unwrap(), "archive.tar");
    }

    #[test]
    fn stem_is_case_sensitive() {
        assert_ne!(
            file_stem(Path::new("Frame.jpg")).unwrap(),
            file_stem(Path::new("frame.txt")).unwrap()
        );
    }
}
