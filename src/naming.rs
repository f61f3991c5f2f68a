//! Output naming and the supported-extension predicate.
//!
//! Output paths are derived, never chosen: same directory, base name with a
//! fixed `_cropped` suffix, original extension preserved. The extension also
//! selects the encoding format downstream, so `scan.jpg` yields a JPEG at
//! `scan_cropped.jpg` no matter what the source bytes contained.

use std::path::{Path, PathBuf};

/// Extensions accepted for input enumeration, lower-case.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "webp"];

/// Suffix appended to the file stem of every output.
pub const OUTPUT_SUFFIX: &str = "_cropped";

/// True if the path carries one of the supported image extensions
/// (case-insensitive).
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
}

/// Derive the output path for an input: `dir/name.ext` → `dir/name_cropped.ext`.
pub fn cropped_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match input.extension() {
        Some(ext) => format!("{stem}{OUTPUT_SUFFIX}.{}", ext.to_string_lossy()),
        None => format!("{stem}{OUTPUT_SUFFIX}"),
    };
    input.with_file_name(file_name)
}
