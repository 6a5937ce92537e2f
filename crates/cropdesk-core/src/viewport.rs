//! Display fitting and display-to-source coordinate mapping.
//!
//! The source image is shown scaled uniformly to fit the viewport and centred
//! in it. A rectangle the user drags on the viewport is mapped back through
//! the same scale and offset, so the session only ever sees source pixels.

use crate::raster::RasterImage;
use crate::transform::{resize, shrink_to_fit, FilterType, PixelRect, ResizeError};

/// A rectangle in viewport coordinates, as dragged by the user.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplayRect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl DisplayRect {
    /// Build from drag start and end points in any order.
    pub fn from_corners(start: (f64, f64), end: (f64, f64)) -> Self {
        Self {
            x1: start.0.min(end.0),
            y1: start.1.min(end.1),
            x2: start.0.max(end.0),
            y2: start.1.max(end.1),
        }
    }
}

/// The display surface the source image is fitted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Uniform scale that fits an `image_width` x `image_height` image into
    /// the viewport: `min(vw / w, vh / h)`.
    ///
    /// Empty images get a scale of 1.
    pub fn fit_scale(&self, image_width: u32, image_height: u32) -> f64 {
        if image_width == 0 || image_height == 0 {
            return 1.0;
        }
        (self.width as f64 / image_width as f64).min(self.height as f64 / image_height as f64)
    }

    /// Size of the fitted image on screen, truncated, at least 1x1.
    pub fn fit_dimensions(&self, image_width: u32, image_height: u32) -> (u32, u32) {
        let scale = self.fit_scale(image_width, image_height);
        let w = (image_width as f64 * scale) as u32;
        let h = (image_height as f64 * scale) as u32;
        (w.clamp(1, self.width.max(1)), h.clamp(1, self.height.max(1)))
    }

    /// Top-left corner of the centred, fitted image inside the viewport.
    pub fn image_origin(&self, image_width: u32, image_height: u32) -> (f64, f64) {
        let (w, h) = self.fit_dimensions(image_width, image_height);
        (
            (self.width as f64 - w as f64) / 2.0,
            (self.height as f64 - h as f64) / 2.0,
        )
    }

    /// Render the image at its fitted size.
    ///
    /// Enlarges small images as well as shrinking large ones.
    pub fn fit_image(&self, image: &RasterImage, filter: FilterType) -> Result<RasterImage, ResizeError> {
        let (w, h) = self.fit_dimensions(image.width, image.height);
        resize(image, w, h, filter)
    }

    /// Clamp a pointer position to the viewport bounds.
    pub fn clamp_point(&self, point: (f64, f64)) -> (f64, f64) {
        (
            point.0.clamp(0.0, self.width as f64),
            point.1.clamp(0.0, self.height as f64),
        )
    }

    /// Map a viewport rectangle onto source-image pixels.
    ///
    /// Subtracts the letterbox offset, divides by the fit scale and truncates.
    /// Corners are clamped into `[0, width] x [0, height]` of the source, so a
    /// drag entirely in the letterbox maps to a degenerate rectangle.
    pub fn display_to_source(&self, rect: &DisplayRect, image_size: (u32, u32)) -> PixelRect {
        let (iw, ih) = image_size;
        let scale = self.fit_scale(iw, ih);
        let (ox, oy) = self.image_origin(iw, ih);

        let map = |v: f64, origin: f64, max: u32| -> i32 {
            let src = ((v - origin) / scale).floor();
            src.clamp(0.0, max as f64) as i32
        };

        PixelRect::from_corners(
            (map(rect.x1, ox, iw), map(rect.y1, oy, ih)),
            (map(rect.x2, ox, iw), map(rect.y2, oy, ih)),
        )
    }
}

/// Shrink an image to fit a `max_edge` square for a side-panel preview.
///
/// Images already inside the square are returned unchanged.
pub fn thumbnail(image: &RasterImage, max_edge: u32, filter: FilterType) -> Result<RasterImage, ResizeError> {
    shrink_to_fit(image, max_edge, max_edge, filter)
}
