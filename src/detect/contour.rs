//! Contour-based border detection.
//!
//! Pipeline: luminance conversion → inverted adaptive binarization →
//! morphological closing → outer-contour extraction → largest bounding box.
//!
//! The adaptive step thresholds each pixel against the mean of its
//! surrounding `block_size x block_size` window rather than one global
//! cutoff, so unevenly lit margins still binarize cleanly. The local means
//! come from a summed-area table, keeping the whole pass O(width * height).

use super::{BorderDetector, Detection};
use crate::geometry::Rect;
use image::{GrayImage, Luma, RgbImage};
use imageproc::contours::find_contours;
use imageproc::distance_transform::Norm;
use imageproc::morphology::close;
use imageproc::point::Point;

/// Detector backed by adaptive binarization and contour extraction.
pub struct ContourDetector {
    block_size: u32,
    constant_c: i32,
}

impl ContourDetector {
    /// `block_size` is the side length of the local-mean window (odd, >= 3);
    /// `constant_c` is subtracted from the local mean before comparison.
    pub fn new(block_size: u32, constant_c: i32) -> Self {
        Self {
            block_size,
            constant_c,
        }
    }
}

impl BorderDetector for ContourDetector {
    fn detect(&self, image: &RgbImage) -> Detection {
        if image.width() == 0 || image.height() == 0 {
            return Detection::Degenerate;
        }

        let gray = image::imageops::grayscale(image);
        let binary = binarize_inverted(&gray, self.block_size, self.constant_c);
        // 3x3 square closing merges near-adjacent fragments (anti-aliased
        // text edges and the like) into single connected regions.
        let closed = close(&binary, Norm::LInf, 1);

        let contours = find_contours::<u32>(&closed);

        // Largest bounding box among top-level contours. Strictly-greater
        // comparison keeps the first contour in the raster traversal on
        // ties, which makes the selection reproducible across runs.
        let mut best: Option<Rect> = None;
        let mut best_area = 0u64;
        for contour in &contours {
            if contour.parent.is_some() {
                continue; // enclosed regions are not separately reported
            }
            let rect = bounding_rect(&contour.points);
            if rect.area() > best_area {
                best_area = rect.area();
                best = Some(rect);
            }
        }

        match best {
            // A selected region with no extent is a detector fault, distinct
            // from "nothing found"; the policy maps it to an error.
            Some(rect) if rect.is_degenerate() => Detection::Degenerate,
            Some(rect) => Detection::Content(rect),
            None => Detection::AllBackground,
        }
    }
}

/// Inverted local adaptive binarization.
///
/// A pixel becomes foreground (255) when its luminance is at most the mean
/// of its window minus `constant_c`. Bright backgrounds drop out; content
/// and edges remain. The window is clamped at the image borders.
fn binarize_inverted(gray: &GrayImage, block_size: u32, constant_c: i32) -> GrayImage {
    let (width, height) = gray.dimensions();
    let radius = block_size / 2;
    let integral = integral_table(gray);

    let mut out = GrayImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let mean = window_mean(&integral, width, height, x, y, radius);
            let value = gray.get_pixel(x, y).0[0];
            let foreground = (value as f64) <= mean - constant_c as f64;
            out.put_pixel(x, y, Luma([if foreground { 255 } else { 0 }]));
        }
    }
    out
}

/// Summed-area table with a zero row and column prepended, so that
/// `table[(y + 1) * stride + (x + 1)]` holds the sum over `[0, x] x [0, y]`.
fn integral_table(gray: &GrayImage) -> Vec<u64> {
    let (width, height) = gray.dimensions();
    let stride = width as usize + 1;
    let mut table = vec![0u64; stride * (height as usize + 1)];

    for y in 0..height {
        let mut row_sum = 0u64;
        for x in 0..width {
            row_sum += gray.get_pixel(x, y).0[0] as u64;
            let idx = (y as usize + 1) * stride + x as usize + 1;
            table[idx] = row_sum + table[idx - stride];
        }
    }
    table
}

/// Mean luminance of the window of the given radius centred on `(cx, cy)`,
/// clamped to the image bounds.
fn window_mean(
    integral: &[u64],
    width: u32,
    height: u32,
    cx: u32,
    cy: u32,
    radius: u32,
) -> f64 {
    let stride = width as usize + 1;
    let x0 = cx.saturating_sub(radius) as usize;
    let y0 = cy.saturating_sub(radius) as usize;
    let x1 = ((cx + radius + 1) as usize).min(width as usize);
    let y1 = ((cy + radius + 1) as usize).min(height as usize);

    let area = ((x1 - x0) * (y1 - y0)) as f64;
    let sum = integral[y1 * stride + x1] + integral[y0 * stride + x0]
        - integral[y0 * stride + x1]
        - integral[y1 * stride + x0];
    sum as f64 / area
}

/// Axis-aligned bounding rectangle of a contour's points.
///
/// Contours are never empty; width and height are therefore at least 1.
fn bounding_rect(points: &[Point<u32>]) -> Rect {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Rect::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1)
}
