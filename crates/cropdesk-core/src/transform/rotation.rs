//! Lossless quarter-turn rotation.
//!
//! Rotations by multiples of 90° only move pixels, so no interpolation is
//! involved and four clockwise turns reproduce the input exactly.

use crate::raster::RasterImage;

/// Rotate an image 90° clockwise.
///
/// The output has the source's width and height swapped. Source pixel
/// `(x, y)` lands at `(height - 1 - y, x)`.
pub fn rotate_clockwise(image: &RasterImage) -> RasterImage {
    let (src_w, src_h) = (image.width as usize, image.height as usize);
    let (dst_w, dst_h) = (src_h, src_w);

    let mut output = vec![0u8; image.pixels.len()];

    for y in 0..src_h {
        for x in 0..src_w {
            let src_idx = (y * src_w + x) * 3;
            let dst_x = src_h - 1 - y;
            let dst_y = x;
            let dst_idx = (dst_y * dst_w + dst_x) * 3;

            output[dst_idx..dst_idx + 3].copy_from_slice(&image.pixels[src_idx..src_idx + 3]);
        }
    }

    RasterImage::new(dst_w as u32, dst_h as u32, output)
}
