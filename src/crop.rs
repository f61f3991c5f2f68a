//! Sub-grid extraction.
//!
//! Produces a new pixel grid for a validated region; channel data is copied
//! unchanged, with no re-encoding at this stage.

use crate::geometry::Rect;
use image::RgbImage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropError {
    #[error("crop region {rect:?} exceeds image bounds {width}x{height}")]
    OutOfBounds {
        rect: Rect,
        width: u32,
        height: u32,
    },
    #[error("crop region has no extent")]
    Empty,
}

/// Copy exactly the given region out of `image`.
///
/// Upstream keeps rects clipped to the image, so the error paths indicate a
/// pipeline fault rather than a user-visible condition.
pub fn crop_to(image: &RgbImage, rect: Rect) -> Result<RgbImage, CropError> {
    if rect.is_degenerate() {
        return Err(CropError::Empty);
    }
    let (width, height) = image.dimensions();
    if !rect.fits_within(width, height) {
        return Err(CropError::OutOfBounds {
            rect,
            width,
            height,
        });
    }
    Ok(image::imageops::crop_imm(image, rect.x, rect.y, rect.w, rect.h).to_image())
}
