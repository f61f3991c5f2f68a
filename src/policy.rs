//! Crop-or-skip decision.
//!
//! A pure function from a detection outcome plus the image dimensions to one
//! of three decisions. The threshold gate avoids re-encoding images that are
//! already tightly framed, and keeps a few pixels of legitimate padding from
//! being shaved off as noise.

use crate::detect::Detection;
use crate::geometry::{BorderWidths, Rect};
use crate::types::{ErrorReason, SkipReason};

/// What the pipeline should do with one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Extract the given region and re-encode.
    Crop(Rect),
    /// Leave the image untouched.
    Skip(SkipReason),
    /// Classify the item as failed.
    Reject(ErrorReason),
}

/// Decide what to do with a detection outcome.
///
/// A content rectangle equal to the full image has four zero-width borders
/// and lands in the skip branch; "no border found" and "border too narrow
/// to matter" are deliberately not distinguished here.
pub fn decide(
    detection: Detection,
    width: u32,
    height: u32,
    min_border_width: u32,
) -> Decision {
    match detection {
        Detection::AllBackground => Decision::Skip(SkipReason::NoContent),
        Detection::Degenerate => Decision::Reject(ErrorReason::DegenerateDetection),
        // Detectors do not emit zero-extent content rects; reject rather
        // than hand the cropper a region it cannot satisfy.
        Detection::Content(rect) if rect.is_degenerate() => {
            Decision::Reject(ErrorReason::DegenerateDetection)
        }
        Detection::Content(rect) => {
            let borders = BorderWidths::around(rect, width, height);
            if borders.widest() < min_border_width {
                Decision::Skip(SkipReason::InsignificantBorder)
            } else {
                Decision::Crop(rect)
            }
        }
    }
}
