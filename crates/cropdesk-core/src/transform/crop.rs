//! Pixel-space region extraction.
//!
//! Regions are given in source-image pixel coordinates as two corners, in
//! any order. Mapping from a display surface happens before this point (see
//! [`crate::viewport`]).
//!
//! # Coordinate System
//!
//! - (0, 0) = top-left corner
//! - `x2`/`y2` are exclusive, so a region `(10, 10)-(110, 60)` is 100x50

use thiserror::Error;

use crate::raster::RasterImage;

/// Reasons a region cannot be cropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegionError {
    /// After sorting the corners, the region has zero width or height.
    #[error("Degenerate region: {width}x{height}")]
    Degenerate { width: i64, height: i64 },

    /// The region does not overlap the image.
    #[error("Region lies outside the {image_width}x{image_height} image")]
    OutOfBounds { image_width: u32, image_height: u32 },
}

/// A rectangle in source-image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl PixelRect {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Build a rectangle from two drag corners, sorting min/max per axis.
    pub fn from_corners(a: (i32, i32), b: (i32, i32)) -> Self {
        Self::new(a.0, a.1, b.0, b.1).normalized()
    }

    /// Sort the corners so that `x1 <= x2` and `y1 <= y2`.
    pub fn normalized(self) -> Self {
        Self {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }

    pub fn width(&self) -> i64 {
        self.x2 as i64 - self.x1 as i64
    }

    pub fn height(&self) -> i64 {
        self.y2 as i64 - self.y1 as i64
    }

    /// True unless `x1 < x2 and y1 < y2`.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Intersect with the `width` x `height` image bounds.
    ///
    /// A region entirely outside the image collapses to a degenerate one.
    pub fn clamp_to(self, width: u32, height: u32) -> Self {
        let max_x = width.min(i32::MAX as u32) as i32;
        let max_y = height.min(i32::MAX as u32) as i32;
        Self {
            x1: self.x1.clamp(0, max_x),
            y1: self.y1.clamp(0, max_y),
            x2: self.x2.clamp(0, max_x),
            y2: self.y2.clamp(0, max_y),
        }
    }
}

/// Extract the pixels covered by `rect`.
///
/// The corners are normalized first. The part of the region that falls
/// outside the image is dropped.
///
/// # Errors
///
/// * `RegionError::Degenerate` - the sorted corners share an x or y value
/// * `RegionError::OutOfBounds` - nothing of the region lies on the image
pub fn crop_region(image: &RasterImage, rect: &PixelRect) -> Result<RasterImage, RegionError> {
    let rect = rect.normalized();
    if rect.is_degenerate() {
        return Err(RegionError::Degenerate {
            width: rect.width(),
            height: rect.height(),
        });
    }

    let clamped = rect.clamp_to(image.width, image.height);
    if clamped.is_degenerate() {
        return Err(RegionError::OutOfBounds {
            image_width: image.width,
            image_height: image.height,
        });
    }

    let (left, top) = (clamped.x1 as usize, clamped.y1 as usize);
    let out_width = clamped.width() as usize;
    let out_height = clamped.height() as usize;
    let src_stride = image.width as usize * 3;
    let row_bytes = out_width * 3;

    let mut output = Vec::with_capacity(row_bytes * out_height);

    // Copy pixel data row by row
    for y in top..top + out_height {
        let start = y * src_stride + left * 3;
        output.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    Ok(RasterImage::new(out_width as u32, out_height as u32, output))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image where each pixel encodes its position.
    fn test_image(width: u32, height: u32) -> RasterImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x % 256) as u8);
                pixels.push((y % 256) as u8);
                pixels.push(((x + y) % 256) as u8);
            }
        }
        RasterImage::new(width, height, pixels)
    }

    #[test]
    fn test_from_corners_sorts() {
        let rect = PixelRect::from_corners((110, 60), (10, 10));
        assert_eq!(rect, PixelRect::new(10, 10, 110, 60));
        assert_eq!(rect.width(), 100);
        assert_eq!(rect.height(), 50);
    }

    #[test]
    fn test_crop_dimensions() {
        let img = test_image(300, 200);
        let result = crop_region(&img, &PixelRect::new(10, 10, 110, 60)).unwrap();

        assert_eq!(result.dimensions(), (100, 50));
        assert_eq!(result.byte_size(), 100 * 50 * 3);
    }

    #[test]
    fn test_crop_pixel_values_preserved() {
        let img = test_image(300, 200);
        let result = crop_region(&img, &PixelRect::new(10, 20, 110, 60)).unwrap();

        assert_eq!(result.pixel(0, 0), Some([10, 20, 30]));
        assert_eq!(result.pixel(99, 39), Some([109, 59, 168]));
    }

    #[test]
    fn test_crop_reversed_corners() {
        let img = test_image(50, 50);
        let a = crop_region(&img, &PixelRect::new(40, 30, 5, 10)).unwrap();
        let b = crop_region(&img, &PixelRect::new(5, 10, 40, 30)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_width_is_degenerate() {
        let img = test_image(50, 50);
        let result = crop_region(&img, &PixelRect::new(10, 10, 10, 40));
        assert_eq!(
            result,
            Err(RegionError::Degenerate {
                width: 0,
                height: 30
            })
        );
    }

    #[test]
    fn test_zero_height_is_degenerate() {
        let img = test_image(50, 50);
        let result = crop_region(&img, &PixelRect::new(10, 25, 30, 25));
        assert!(matches!(result, Err(RegionError::Degenerate { .. })));
    }

    #[test]
    fn test_region_outside_image() {
        let img = test_image(50, 50);
        let result = crop_region(&img, &PixelRect::new(60, 60, 90, 90));
        assert_eq!(
            result,
            Err(RegionError::OutOfBounds {
                image_width: 50,
                image_height: 50
            })
        );

        let result = crop_region(&img, &PixelRect::new(-30, -30, -1, -1));
        assert!(matches!(result, Err(RegionError::OutOfBounds { .. })));
    }

    #[test]
    fn test_partial_overlap_is_clamped() {
        let img = test_image(50, 40);
        let result = crop_region(&img, &PixelRect::new(-10, 30, 20, 100)).unwrap();

        assert_eq!(result.dimensions(), (20, 10));
        assert_eq!(result.pixel(0, 0), Some([0, 30, 30]));
    }

    #[test]
    fn test_full_image_crop() {
        let img = test_image(17, 9);
        let result = crop_region(&img, &PixelRect::new(0, 0, 17, 9)).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_single_pixel_crop() {
        let img = test_image(10, 10);
        let result = crop_region(&img, &PixelRect::new(3, 4, 4, 5)).unwrap();
        assert_eq!(result.dimensions(), (1, 1));
        assert_eq!(result.pixel(0, 0), Some([3, 4, 7]));
    }

    #[test]
    fn test_region_error_display() {
        let err = RegionError::Degenerate {
            width: 0,
            height: 5,
        };
        assert_eq!(err.to_string(), "Degenerate region: 0x5");
    }
}
