//! Scan-based border detection.
//!
//! Scans rows top→bottom and bottom→top, then columns left→right and
//! right→left; the first non-white line on each side bounds the content.
//! No adaptive or statistical step, so the outcome is exact: only genuinely
//! uniform near-white margins are recognized.

use super::{BorderDetector, Detection};
use crate::geometry::Rect;
use image::RgbImage;

/// Detector backed by four independent edge-inward scans.
pub struct ScanDetector {
    white_threshold: u8,
}

impl ScanDetector {
    /// A pixel counts as white when all three channels are at least
    /// `white_threshold`.
    pub fn new(white_threshold: u8) -> Self {
        Self { white_threshold }
    }

    fn is_white(&self, pixel: &image::Rgb<u8>) -> bool {
        pixel.0.iter().all(|&channel| channel >= self.white_threshold)
    }

    fn row_is_white(&self, image: &RgbImage, y: u32) -> bool {
        (0..image.width()).all(|x| self.is_white(image.get_pixel(x, y)))
    }

    fn column_is_white(&self, image: &RgbImage, x: u32) -> bool {
        (0..image.height()).all(|y| self.is_white(image.get_pixel(x, y)))
    }
}

impl BorderDetector for ScanDetector {
    fn detect(&self, image: &RgbImage) -> Detection {
        let (width, height) = image.dimensions();

        let Some(top) = (0..height).find(|&y| !self.row_is_white(image, y)) else {
            // Every row is white (or the image is empty): all background.
            return Detection::AllBackground;
        };
        // A non-white row exists, so the remaining scans cannot miss.
        let bottom = (0..height)
            .rev()
            .find(|&y| !self.row_is_white(image, y))
            .map(|y| y + 1)
            .unwrap_or(height);
        let left = (0..width)
            .find(|&x| !self.column_is_white(image, x))
            .unwrap_or(0);
        let right = (0..width)
            .rev()
            .find(|&x| !self.column_is_white(image, x))
            .map(|x| x + 1)
            .unwrap_or(width);

        Detection::Content(Rect::new(left, top, right - left, bottom - top))
    }
}
