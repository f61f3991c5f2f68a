//! Border detection: locating the content region inside a pixel grid.
//!
//! Two interchangeable strategies implement [`BorderDetector`]:
//!
//! - [`ContourDetector`]: adaptive binarization, morphological closing, and
//!   outer-contour extraction. Adapts to uneven lighting and to margins that
//!   are bright but not pure white.
//! - [`ScanDetector`]: row/column intensity scans inward from each edge.
//!   Monotonic and exact; only recognizes genuinely uniform white margins.
//!
//! The strategies are not successive refinements of one algorithm. They have
//! deliberately different failure semantics, expressed through [`Detection`]:
//! the scan strategy never produces [`Detection::Degenerate`], and an
//! all-white image is a skip, not an error, under either strategy.
//!
//! Detectors only read the image; cropping happens downstream.

pub mod contour;
pub mod scan;

pub use contour::ContourDetector;
pub use scan::ScanDetector;

use crate::config::{DetectorConfig, Strategy};
use crate::geometry::Rect;
use image::RgbImage;

/// Outcome of a detection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    /// A content bounding region was located. May still be the full image,
    /// in which case the policy classifies the item as a skip.
    Content(Rect),
    /// The whole image is background; there is no content to crop toward.
    AllBackground,
    /// The detector could not produce a usable region: empty input, or a
    /// selected region with no extent.
    Degenerate,
}

/// A strategy for locating the content region of an image.
///
/// Implementations must be deterministic (byte-identical input yields an
/// identical outcome across runs) and must not mutate the image.
pub trait BorderDetector: Sync {
    fn detect(&self, image: &RgbImage) -> Detection;
}

/// Build the detector selected by the config.
pub fn detector_for(config: &DetectorConfig) -> Box<dyn BorderDetector> {
    match config.strategy {
        Strategy::Contour => Box::new(ContourDetector::new(
            config.block_size,
            config.constant_c,
        )),
        Strategy::Scan => Box::new(ScanDetector::new(config.white_threshold)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DetectorConfig;
    use image::Rgb;

    #[test]
    fn detector_for_honors_strategy() {
        let mut config = DetectorConfig::default();

        // A 20x20 white image with a single dark pixel: the scan strategy
        // finds content, so a strategy mix-up would change the outcome of an
        // all-white input below.
        let mut image = RgbImage::from_pixel(20, 20, Rgb([255, 255, 255]));
        image.put_pixel(10, 10, Rgb([0, 0, 0]));

        config.strategy = Strategy::Scan;
        let detector = detector_for(&config);
        assert!(matches!(detector.detect(&image), Detection::Content(_)));

        let white = RgbImage::from_pixel(20, 20, Rgb([255, 255, 255]));
        assert_eq!(detector.detect(&white), Detection::AllBackground);
    }
}
