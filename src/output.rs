//! CLI output formatting for batch results.
//!
//! One line per item, in submission order, followed by a summary line:
//!
//! ```text
//! 001 scan.png -> scan_cropped.png
//! 002 tight.png: skipped (insignificant-border)
//! 003 broken.png: error (decode-failure)
//!
//! 3 images: 1 cropped, 1 skipped, 1 failed
//! ```
//!
//! Format functions are pure (no I/O, return `Vec<String>`) so tests can
//! assert on them directly; `print_*` wrappers write to stdout.

use crate::types::ProcessResult;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// File name portion of a path, for display.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Render one line per result plus a trailing summary.
pub fn format_results(results: &[ProcessResult]) -> Vec<String> {
    let mut lines = Vec::with_capacity(results.len() + 2);
    for (i, result) in results.iter().enumerate() {
        let index = format_index(i + 1);
        let name = display_name(result.input());
        let line = match result {
            ProcessResult::Success { output, .. } => {
                format!("{index} {name} -> {}", display_name(output))
            }
            ProcessResult::Skipped { reason, .. } => {
                format!("{index} {name}: skipped ({reason})")
            }
            ProcessResult::Error { reason, .. } => {
                format!("{index} {name}: error ({reason})")
            }
        };
        lines.push(line);
    }

    let cropped = results.iter().filter(|r| r.is_success()).count();
    let failed = results.iter().filter(|r| r.is_error()).count();
    let skipped = results.len() - cropped - failed;
    lines.push(String::new());
    lines.push(format!(
        "{} images: {} cropped, {} skipped, {} failed",
        results.len(),
        cropped,
        skipped,
        failed
    ));
    lines
}

/// Print batch results to stdout.
pub fn print_results(results: &[ProcessResult]) {
    for line in format_results(results) {
        println!("{line}");
    }
}
