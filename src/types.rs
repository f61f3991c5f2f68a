//! Shared result types produced by the batch pipeline.
//!
//! Every submitted path yields exactly one [`ProcessResult`], classified as
//! success, skipped, or error. Reasons are stable machine-readable codes;
//! presentation (wording, localization) belongs to the caller.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Why an image was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// The whole image is background; there is no content to crop toward.
    NoContent,
    /// Borders exist but none reaches the configured minimum width.
    InsignificantBorder,
}

impl SkipReason {
    /// Stable reason code, identical to the serialized form.
    pub fn code(&self) -> &'static str {
        match self {
            SkipReason::NoContent => "no-content",
            SkipReason::InsignificantBorder => "insignificant-border",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Why an image failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorReason {
    /// Unreadable bytes, unsupported or corrupt format, or a missing file.
    DecodeFailure,
    /// The detector selected a region with no extent.
    DegenerateDetection,
    /// The codec rejected the cropped image or the target format.
    EncodeFailure,
    /// An unexpected fault during detection or cropping, caught at the
    /// per-item boundary.
    Internal,
}

impl ErrorReason {
    /// Stable reason code, identical to the serialized form.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorReason::DecodeFailure => "decode-failure",
            ErrorReason::DegenerateDetection => "degenerate-detection",
            ErrorReason::EncodeFailure => "encode-failure",
            ErrorReason::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of processing a single input path. Produced exactly once per
/// path, immutable after creation, reported in submission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ProcessResult {
    Success { input: PathBuf, output: PathBuf },
    Skipped { input: PathBuf, reason: SkipReason },
    Error { input: PathBuf, reason: ErrorReason },
}

impl ProcessResult {
    /// The path this result was produced for.
    pub fn input(&self) -> &PathBuf {
        match self {
            ProcessResult::Success { input, .. }
            | ProcessResult::Skipped { input, .. }
            | ProcessResult::Error { input, .. } => input,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProcessResult::Success { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ProcessResult::Error { .. })
    }
}
