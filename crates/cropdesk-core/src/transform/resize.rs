//! Image resizing for previews, display fitting and thumbnails.
//!
//! All functions return new `RasterImage` instances without modifying the
//! input. Area averaging is implemented here because the `image` crate has no
//! box-coverage filter; the other filters delegate to `image::imageops`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::raster::RasterImage;

/// Errors from resize operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResizeError {
    /// Target width or height is zero.
    #[error("Invalid target dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The source pixel buffer does not match its dimensions.
    #[error("Source pixel buffer does not match {width}x{height}")]
    InvalidSource { width: u32, height: u32 },
}

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
    /// Pixel-area averaging when shrinking, bilinear when enlarging.
    #[default]
    Area,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    ///
    /// `Area` has no direct counterpart and maps to `Triangle`, which is what
    /// it uses for enlargement.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear | FilterType::Area => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `ResizeError::InvalidDimensions` for a zero target size and
/// `ResizeError::InvalidSource` for an empty or inconsistent source.
pub fn resize(
    image: &RasterImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<RasterImage, ResizeError> {
    if width == 0 || height == 0 {
        return Err(ResizeError::InvalidDimensions { width, height });
    }

    let invalid_source = || ResizeError::InvalidSource {
        width: image.width,
        height: image.height,
    };
    if image.is_empty() {
        return Err(invalid_source());
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    if filter == FilterType::Area && width <= image.width && height <= image.height {
        if image.byte_size() != image.width as usize * image.height as usize * 3 {
            return Err(invalid_source());
        }
        return Ok(area_downsample(image, width, height));
    }

    let rgb_image = image.to_rgb_image().ok_or_else(invalid_source)?;
    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(RasterImage::from_rgb_image(resized))
}

/// Scale an image by an integer percentage (100 = unchanged).
///
/// Each output side is `round(side * percent / 100)`, at least 1 pixel.
///
/// # Errors
///
/// Returns `ResizeError::InvalidDimensions` when `percent` is zero.
pub fn scale_by_percent(
    image: &RasterImage,
    percent: u32,
    filter: FilterType,
) -> Result<RasterImage, ResizeError> {
    if percent == 0 {
        return Err(ResizeError::InvalidDimensions {
            width: 0,
            height: 0,
        });
    }
    let (width, height) = scaled_dimensions(image.width, image.height, percent);
    resize(image, width, height, filter)
}

/// Output dimensions for a percentage scale.
pub fn scaled_dimensions(width: u32, height: u32, percent: u32) -> (u32, u32) {
    let scale = percent as f64 / 100.0;
    let w = (width as f64 * scale).round() as u32;
    let h = (height as f64 * scale).round() as u32;
    (w.max(1), h.max(1))
}

/// Resize to fit within a `max_width` x `max_height` box, preserving aspect.
///
/// Images already inside the box are returned unchanged.
///
/// # Errors
///
/// Same as [`resize`].
pub fn shrink_to_fit(
    image: &RasterImage,
    max_width: u32,
    max_height: u32,
    filter: FilterType,
) -> Result<RasterImage, ResizeError> {
    if max_width == 0 || max_height == 0 {
        return Err(ResizeError::InvalidDimensions {
            width: max_width,
            height: max_height,
        });
    }
    if image.width <= max_width && image.height <= max_height {
        return Ok(image.clone());
    }

    let scale = (max_width as f64 / image.width as f64).min(max_height as f64 / image.height as f64);
    let width = ((image.width as f64 * scale).round() as u32).clamp(1, max_width);
    let height = ((image.height as f64 * scale).round() as u32).clamp(1, max_height);

    resize(image, width, height, filter)
}

/// Per-output-index list of (source index, weight) pairs for one axis.
fn area_weights(src_len: u32, dst_len: u32) -> Vec<Vec<(usize, f32)>> {
    let ratio = src_len as f64 / dst_len as f64;

    (0..dst_len)
        .map(|d| {
            let start = d as f64 * ratio;
            let end = ((d + 1) as f64 * ratio).min(src_len as f64);
            let first = start.floor() as usize;
            let last = (end.ceil() as usize).min(src_len as usize);

            (first..last)
                .filter_map(|s| {
                    let overlap = (end.min((s + 1) as f64) - start.max(s as f64)) / ratio;
                    (overlap > 1e-9).then_some((s, overlap as f32))
                })
                .collect()
        })
        .collect()
}

/// Box-coverage downsampling: each output pixel is the area-weighted mean of
/// the source pixels it covers.
fn area_downsample(image: &RasterImage, width: u32, height: u32) -> RasterImage {
    let src_w = image.width as usize;
    let x_weights = area_weights(image.width, width);
    let y_weights = area_weights(image.height, height);

    // Horizontal pass into a float buffer of width x src_height
    let mut horizontal = vec![0f32; width as usize * image.height as usize * 3];
    for y in 0..image.height as usize {
        let src_row = &image.pixels[y * src_w * 3..(y + 1) * src_w * 3];
        for (dx, weights) in x_weights.iter().enumerate() {
            let dst = (y * width as usize + dx) * 3;
            for &(sx, w) in weights {
                for c in 0..3 {
                    horizontal[dst + c] += src_row[sx * 3 + c] as f32 * w;
                }
            }
        }
    }

    // Vertical pass
    let mut output = vec![0u8; width as usize * height as usize * 3];
    for (dy, weights) in y_weights.iter().enumerate() {
        for dx in 0..width as usize {
            let mut acc = [0f32; 3];
            for &(sy, w) in weights {
                let src = (sy * width as usize + dx) * 3;
                for c in 0..3 {
                    acc[c] += horizontal[src + c] * w;
                }
            }
            let dst = (dy * width as usize + dx) * 3;
            for c in 0..3 {
                output[dst + c] = acc[c].round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    RasterImage::new(width, height, output)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Area downsampling stays within the source value range.
        #[test]
        fn prop_area_output_within_source_range(
            (width, height) in (2u32..=40, 2u32..=40),
            (tw, th) in (1u32..=40, 1u32..=40),
            lo in 0u8..=127,
            hi in 128u8..=255,
        ) {
            let tw = tw.min(width);
            let th = th.min(height);
            let pixels = (0..width * height * 3)
                .map(|i| if i % 2 == 0 { lo } else { hi })
                .collect();
            let img = RasterImage::new(width, height, pixels);

            let resized = resize(&img, tw, th, FilterType::Area).unwrap();
            prop_assert_eq!(resized.dimensions(), (tw, th));
            for &v in &resized.pixels {
                prop_assert!(v >= lo && v <= hi);
            }
        }

        /// Property: Percentage scaling produces the computed dimensions.
        #[test]
        fn prop_scale_dimensions(
            (width, height) in (1u32..=60, 1u32..=60),
            percent in 1u32..=300,
        ) {
            let img = RasterImage::filled(width, height, [1, 2, 3]);
            let resized = scale_by_percent(&img, percent, FilterType::Area).unwrap();
            prop_assert_eq!(resized.dimensions(), scaled_dimensions(width, height, percent));
        }
    }
}
