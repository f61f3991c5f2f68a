//! Pure geometry types for the detection pipeline.
//!
//! Everything here is plain arithmetic, testable without any I/O or images.

/// An axis-aligned region in pixel coordinates.
///
/// Invariant maintained by producers: the region lies fully inside the image
/// it was detected in, i.e. `x + w <= image width` and `y + h <= image height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// True if the region has no extent on at least one axis.
    pub fn is_degenerate(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Bounding-box area, `w * h`. Widened to `u64` so that selection over
    /// very large images cannot overflow.
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// True if the region lies fully inside an image of the given dimensions.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x as u64 + self.w as u64 <= width as u64
            && self.y as u64 + self.h as u64 <= height as u64
    }
}

/// Pixel counts between the image edges and a content region on each side.
///
/// Always non-negative; `top + bottom <= height` and `left + right <= width`
/// whenever the source rect satisfies its containment invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderWidths {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl BorderWidths {
    /// Derive the four border widths of `rect` inside a `width x height` image.
    ///
    /// Saturating subtraction keeps a malformed rect from panicking; the
    /// policy rejects such rects before the widths matter.
    pub fn around(rect: Rect, width: u32, height: u32) -> Self {
        Self {
            top: rect.y,
            bottom: height.saturating_sub(rect.y.saturating_add(rect.h)),
            left: rect.x,
            right: width.saturating_sub(rect.x.saturating_add(rect.w)),
        }
    }

    /// The widest of the four sides.
    pub fn widest(&self) -> u32 {
        self.top.max(self.bottom).max(self.left).max(self.right)
    }
}
