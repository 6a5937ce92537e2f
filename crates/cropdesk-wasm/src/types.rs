//! WASM-compatible wrapper types for image data.
//!
//! Conversions between the core [`RasterImage`] and what JavaScript sees.

use cropdesk_core::encode::OutputFormat;
use cropdesk_core::RasterImage;
use wasm_bindgen::prelude::*;

/// An RGB image handed across the WASM boundary.
///
/// # Memory Management
///
/// Pixels live in WASM memory. `pixels()` copies them into a JavaScript
/// `Uint8Array`, so keep the handle around instead of calling it per frame.
/// `free()` is optional; wasm-bindgen's finalizer releases the memory too.
#[wasm_bindgen]
pub struct JsRasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsRasterImage {
    /// Create an image from dimensions and RGB pixel data
    /// (3 bytes per pixel, row-major order).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsRasterImage {
        JsRasterImage {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Length of the pixel buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as a Uint8Array copy.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {}
}

impl JsRasterImage {
    pub(crate) fn from_raster(img: RasterImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Clones the pixel data.
    pub(crate) fn to_raster(&self) -> RasterImage {
        RasterImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// Parse a file extension ("png", ".JPG", ...) into an output format.
pub(crate) fn format_from_extension(ext: &str) -> Result<OutputFormat, String> {
    let trimmed = ext.trim_start_matches('.');
    OutputFormat::from_extension(trimmed).ok_or_else(|| format!("Unsupported format: {}", ext))
}
