//! Pixel adjustments applied by the edit session.
//!
//! Both adjustments are pure: they read one image and return a new one.
//! Grayscale output keeps three channels so the result can flow through the
//! same RGB pipeline as color images.

use crate::luminance::grayscale_u8;
use crate::raster::RasterImage;

/// Convert to single-channel luminance, then re-expand to RGB.
///
/// Every output pixel has R = G = B.
pub fn to_grayscale(image: &RasterImage) -> RasterImage {
    let mut pixels = image.pixels.clone();
    for chunk in pixels.chunks_exact_mut(3) {
        let gray = grayscale_u8(chunk[0], chunk[1], chunk[2]);
        chunk.fill(gray);
    }
    RasterImage::new(image.width, image.height, pixels)
}

/// Scale every channel by `factor`.
///
/// `1.0` leaves the image untouched, `0.0` yields black, values above `1.0`
/// brighten and saturate at 255. Negative and NaN factors behave as `0.0`.
pub fn adjust_brightness(image: &RasterImage, factor: f32) -> RasterImage {
    let factor = if factor.is_nan() { 0.0 } else { factor.max(0.0) };

    // Early exit if no adjustment
    if factor == 1.0 {
        return image.clone();
    }

    let lut = brightness_lut(factor);
    let pixels = image.pixels.iter().map(|&v| lut[v as usize]).collect();
    RasterImage::new(image.width, image.height, pixels)
}

/// Lookup table mapping every 8-bit input to its scaled value.
///
/// Fractions are truncated, as when blending toward black.
fn brightness_lut(factor: f32) -> [u8; 256] {
    let mut lut = [0u8; 256];
    for (i, out) in lut.iter_mut().enumerate() {
        *out = (i as f32 * factor).clamp(0.0, 255.0) as u8;
    }
    lut
}
