//! Batch pipeline: decode → detect → decide → crop → encode.
//!
//! Each input path is processed independently and classified into exactly
//! one [`ProcessResult`]:
//!
//! | Outcome | Meaning |
//! |---|---|
//! | `Success` | A cropped copy was written next to the input |
//! | `Skipped` | Nothing to do (no content, or borders too narrow) |
//! | `Error` | Decode/encode failure or an internal fault |
//!
//! ## Guarantees
//!
//! - One result per submitted path, reported in submission order.
//! - An item's failure never affects any other item and never halts the
//!   queue. Nothing is retried.
//! - No shared mutable state between items; workers share only the
//!   read-only [`Config`].
//! - Re-running on a previous output reaches `Skipped`: the crop already
//!   removed the margins, so the border gate no longer passes.
//!
//! ## Parallel Processing
//!
//! Items are processed in parallel using [rayon](https://docs.rs/rayon);
//! the indexed parallel map keeps results in submission order regardless of
//! completion order.

use crate::codec;
use crate::config::Config;
use crate::crop;
use crate::detect::{self, BorderDetector};
use crate::naming;
use crate::policy::{self, Decision};
use crate::types::{ErrorReason, ProcessResult};
use rayon::prelude::*;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

/// Whether to write outputs or only classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Write each successful crop to its derived output path.
    Apply,
    /// Run detection and classification only; touch nothing on disk.
    DryRun,
}

/// Process every path and return one result per path, in submission order.
pub fn process_batch(
    paths: &[PathBuf],
    config: &Config,
    mode: WriteMode,
) -> Vec<ProcessResult> {
    let detector = detect::detector_for(&config.detector);
    paths
        .par_iter()
        .map(|path| process_one(path, detector.as_ref(), config, mode))
        .collect()
}

/// Process a single path.
///
/// The catch_unwind boundary turns any unexpected fault inside detection or
/// cropping into an `Error` result instead of poisoning the whole batch.
pub fn process_one(
    path: &Path,
    detector: &dyn BorderDetector,
    config: &Config,
    mode: WriteMode,
) -> ProcessResult {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| run_item(path, detector, config, mode)));
    outcome.unwrap_or_else(|_| ProcessResult::Error {
        input: path.to_path_buf(),
        reason: ErrorReason::Internal,
    })
}

fn run_item(
    path: &Path,
    detector: &dyn BorderDetector,
    config: &Config,
    mode: WriteMode,
) -> ProcessResult {
    let input = path.to_path_buf();

    let image = match codec::decode(path) {
        Ok(image) => image,
        Err(_) => {
            return ProcessResult::Error {
                input,
                reason: ErrorReason::DecodeFailure,
            };
        }
    };

    let (width, height) = image.dimensions();
    let detection = detector.detect(&image);

    let rect = match policy::decide(detection, width, height, config.policy.min_border_width) {
        Decision::Skip(reason) => return ProcessResult::Skipped { input, reason },
        Decision::Reject(reason) => return ProcessResult::Error { input, reason },
        Decision::Crop(rect) => rect,
    };

    let output = naming::cropped_path(path);
    if mode == WriteMode::DryRun {
        return ProcessResult::Success { input, output };
    }

    let cropped = match crop::crop_to(&image, rect) {
        Ok(cropped) => cropped,
        Err(_) => {
            // The policy only passes clipped, non-empty rects; reaching this
            // arm means the pipeline itself is broken.
            return ProcessResult::Error {
                input,
                reason: ErrorReason::Internal,
            };
        }
    };

    match codec::encode(&cropped, &output) {
        Ok(()) => ProcessResult::Success { input, output },
        Err(_) => ProcessResult::Error {
            input,
            reason: ErrorReason::EncodeFailure,
        },
    }
}
