//! Input enumeration: expand file and directory arguments into an ordered
//! list of image paths.
//!
//! Directories are walked recursively; entries are visited in sorted order
//! so that a given argument list always expands to the same sequence. Files
//! are accepted by extension alone, without touching their contents: a path
//! that looks like an image but fails to decode still gets its own result
//! from the pipeline instead of silently disappearing here.

use crate::naming;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expand a mixed list of files and directories into image paths.
///
/// Argument order is preserved; within a directory, entries come out in
/// sorted filename order. Non-image files and unreadable directory entries
/// are dropped.
pub fn collect_images(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut images = Vec::new();
    for path in paths {
        if path.is_dir() {
            collect_from_dir(path, &mut images);
        } else if naming::has_supported_extension(path) {
            images.push(path.clone());
        }
    }
    images
}

fn collect_from_dir(dir: &Path, images: &mut Vec<PathBuf>) {
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let Ok(entry) = entry else {
            continue; // unreadable entry; nothing to report a result for
        };
        if entry.file_type().is_file() && naming::has_supported_extension(entry.path()) {
            images.push(entry.into_path());
        }
    }
}
