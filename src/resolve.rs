//! Split directory resolution.
//!
//! The descriptor names each split's *image* directory; the matching label
//! directory is derived by swapping the `images` path component for
//! `labels`. The swap is component-aware, so a directory merely containing
//! "images" in its name (`my_images_v2`) is left alone.

use std::path::{Component, Path, PathBuf};

/// The resolved directory pair for one split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitDirs {
    pub images_dir: PathBuf,
    pub labels_dir: PathBuf,
}

/// Resolve a split's image directory (made absolute against `cwd` if
/// relative) and derive its label directory.
///
/// Infallible: existence of either directory is the enumerator's concern.
pub fn resolve_split_dirs(images_dir: &Path, cwd: &Path) -> SplitDirs {
    let images_dir = if images_dir.is_absolute() {
        images_dir.to_path_buf()
    } else {
        cwd.join(images_dir)
    };

    let labels_dir = labels_dir_for(&images_dir);
    SplitDirs {
        images_dir,
        labels_dir,
    }
}

/// Replace the first path component equal to `images` with `labels`.
///
/// If no component matches, the path is returned unchanged: labels are then
/// expected alongside the images.
fn labels_dir_for(images_dir: &Path) -> PathBuf {
    let mut replaced = false;
    let mut out = PathBuf::new();

    for component in images_dir.components() {
        match component {
            Component::Normal(name) if !replaced && name == "images" => {
                out.push("labels");
                replaced = true;
            }
            other => out.push(other.as_os_str()),
        }
    }

    out
}
