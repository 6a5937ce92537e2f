//! Luminance calculation using ITU-R BT.601 coefficients.
//!
//! BT.601 is the weighting used by the common RGB-to-gray conversions, so a
//! grayscale toggle here produces the values users expect from other tools.

/// ITU-R BT.601 coefficient for red channel in luminance calculation.
pub const LUMA_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for green channel in luminance calculation.
pub const LUMA_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for blue channel in luminance calculation.
pub const LUMA_B: f32 = 0.114;

/// Calculate luminance from normalized RGB values (0.0 to 1.0).
#[inline]
fn luma(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

/// Calculate the gray level (0-255) for an RGB8 pixel.
#[inline]
pub fn grayscale_u8(r: u8, g: u8, b: u8) -> u8 {
    luma(r as f32, g as f32, b as f32).clamp(0.0, 255.0).round() as u8
}
